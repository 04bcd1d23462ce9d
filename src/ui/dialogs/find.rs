use fltk::{
    app::Sender,
    button::Button,
    dialog,
    frame::Frame,
    input::Input,
    prelude::*,
    window::Window,
};

use crate::ui::messages::Message;

/// Show the Find dialog without blocking the event loop. Buttons post
/// messages, so the main loop keeps handling them while the window is open.
pub fn show_find_dialog(sender: Sender<Message>, last_query: &str) {
    let mut dialog_win = Window::default()
        .with_size(420, 110)
        .with_label("Find")
        .center_screen();

    Frame::default().with_pos(20, 20).with_size(80, 30).with_label("Find what:");
    let mut find_input = Input::default().with_pos(110, 20).with_size(290, 30);
    find_input.set_value(last_query);

    let mut highlight_btn = Button::default()
        .with_pos(20, 65).with_size(110, 30).with_label("Highlight All");
    let mut next_btn = Button::default()
        .with_pos(140, 65).with_size(90, 30).with_label("Find Next");
    let mut clear_btn = Button::default()
        .with_pos(240, 65).with_size(70, 30).with_label("Clear");
    let mut close_btn = Button::default()
        .with_pos(320, 65).with_size(80, 30).with_label("Close");

    dialog_win.end();
    dialog_win.make_resizable(false);
    dialog_win.show();

    let input = find_input.clone();
    highlight_btn.set_callback(move |_| {
        let query = input.value();
        if query.is_empty() {
            dialog::message_default("Please enter text to find");
            return;
        }
        sender.send(Message::Find(query));
    });

    let input = find_input.clone();
    next_btn.set_callback(move |_| {
        let query = input.value();
        if query.is_empty() {
            dialog::message_default("Please enter text to find");
            return;
        }
        sender.send(Message::FindNext(query));
    });

    clear_btn.set_callback(move |_| sender.send(Message::ClearHighlights));

    let dialog_close = dialog_win.clone();
    close_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    let dialog_x = dialog_win.clone();
    dialog_win.set_callback(move |_| {
        dialog_x.clone().hide();
    });
}
