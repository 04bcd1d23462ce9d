use fltk::{
    app::Sender,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "Untitled - InkPad");
    wind.set_xclass("InkPad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Buffer and highlight data are attached by EditorView.
    let text_editor = TextEditor::new(0, 0, 0, 0, "");

    flex.end();
    wind.resizable(&flex);
    wind.end();

    // Closing the window goes through the same unsaved-changes check as File/Quit.
    let s = *sender;
    wind.set_callback(move |_| {
        if fltk::app::event() == fltk::enums::Event::Close {
            s.send(Message::FileQuit);
        }
    });

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
    }
}
