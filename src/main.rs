mod config;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use herald_core::{LogObserver, Notifier};

fn main() {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let config = config::load_config().expect("failed to load config");

    let notifier = Notifier::new();
    notifier.add_observer(Arc::new(LogObserver::new()));

    spawn_demo_traffic(notifier.clone());

    let dialog_config = herald_gui::DialogConfig {
        title: config.dialog_title,
        min_level: config.min_dialog_level,
    };
    herald_gui::run(notifier, dialog_config).expect("failed to run frontend");
}

/// Fires a representative notification sequence from a background thread so
/// the window has something to render.
fn spawn_demo_traffic(notifier: Notifier) {
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(2));
        report(notifier.notify_information("Welcome to herald"));

        thread::sleep(Duration::from_secs(3));
        report(notifier.notify_warning("Disk space is running low"));

        thread::sleep(Duration::from_secs(3));
        report(notifier.notify_exception(
            "Could not save the session",
            anyhow::anyhow!("permission denied"),
        ));
    });
}

fn report(result: anyhow::Result<()>) {
    if let Err(error) = result {
        log::error!("Broadcast failed: {error:#}");
    }
}
