//! Omok GUI
//!
//! A graphical interface for playing Omok against another player or a
//! random-move computer opponent.

use omok::ui::OmokApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1040.0, 780.0])
            .with_min_inner_size([800.0, 620.0])
            .with_title("Omok - Five in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Omok",
        options,
        Box::new(|cc| Ok(Box::new(OmokApp::new(cc)))),
    )
}
