#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use fltk::app;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ink_pad::app::{AppSettings, JsonSettingsStore, SessionManager};

mod ui;

use ui::main_window::build_main_window;
use ui::messages::Message;
use ui::notifier::FltkNotifier;
use ui::shell::Shell;

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let store = JsonSettingsStore::open_default();
    let session = SessionManager::new(settings, Box::new(store), Box::new(FltkNotifier));

    let widgets = build_main_window(&sender);
    let mut shell = Shell::new(session, widgets, sender);
    shell.show();

    while app.wait() {
        if let Some(msg) = receiver.recv()
            && !shell.handle(msg)
        {
            app.quit();
        }
    }
}
