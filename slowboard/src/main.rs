//! slowBoard - two-player chess on one device
//!
//! Drag pieces with the mouse. R resets, C concedes for the side to move,
//! D logs the occupancy grid.

mod app;

use app::SlowBoardApp;
use eframe::NativeOptions;
use slowboard::BoardConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BoardConfig::load();
    let size = config.board_size;
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size, size])
            .with_min_inner_size([size, size])
            .with_title("slowBoard"),
        ..Default::default()
    };

    eframe::run_native(
        "slowBoard",
        options,
        Box::new(move |cc| {
            slowcore::SlowTheme::default().apply(&cc.egui_ctx);
            Box::new(SlowBoardApp::new(cc, &config))
        }),
    )
}
