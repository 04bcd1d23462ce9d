use fltk::{enums::Color, menu::MenuBar, prelude::*, text::TextEditor, window::Window};

use ink_pad::app::ThemeId;

/// Every colour the window uses for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub editor_bg: Color,
    pub text: Color,
    pub cursor: Color,
    pub selection: Color,
    pub window_bg: Color,
    pub menu_bg: Color,
    pub menu_hover: Color,
    pub highlight_bg: Color,
    pub linenumber_bg: Color,
    pub linenumber_fg: Color,
}

impl Palette {
    pub fn for_theme(theme: ThemeId) -> Self {
        match theme {
            ThemeId::Light => Self {
                editor_bg: Color::White,
                text: Color::Black,
                cursor: Color::Black,
                selection: Color::from_rgb(173, 216, 230),
                window_bg: Color::from_rgb(240, 240, 240),
                menu_bg: Color::from_rgb(240, 240, 240),
                menu_hover: Color::from_rgb(200, 200, 200),
                highlight_bg: Color::from_rgb(255, 255, 0),
                linenumber_bg: Color::from_rgb(240, 240, 240),
                linenumber_fg: Color::from_rgb(100, 100, 100),
            },
            ThemeId::Dark => Self {
                editor_bg: Color::from_rgb(30, 30, 30),
                text: Color::from_rgb(220, 220, 220),
                cursor: Color::White,
                selection: Color::from_rgb(70, 70, 100),
                window_bg: Color::from_rgb(25, 25, 25),
                menu_bg: Color::from_rgb(35, 35, 35),
                menu_hover: Color::from_rgb(60, 60, 60),
                highlight_bg: Color::from_rgb(139, 128, 0),
                linenumber_bg: Color::from_rgb(40, 40, 40),
                linenumber_fg: Color::from_rgb(150, 150, 150),
            },
        }
    }
}

/// Recolour the window chrome. Text styles are rebuilt by `EditorView`.
pub fn apply_theme(editor: &mut TextEditor, window: &mut Window, menu: &mut MenuBar, theme: ThemeId) {
    let p = Palette::for_theme(theme);

    editor.set_color(p.editor_bg);
    editor.set_text_color(p.text);
    editor.set_cursor_color(p.cursor);
    editor.set_selection_color(p.selection);
    editor.set_linenumber_bgcolor(p.linenumber_bg);
    editor.set_linenumber_fgcolor(p.linenumber_fg);
    window.set_color(p.window_bg);
    window.set_label_color(p.text);
    menu.set_color(p.menu_bg);
    menu.set_text_color(p.text);
    menu.set_selection_color(p.menu_hover);

    editor.redraw();
    window.redraw();
    menu.redraw();
}
