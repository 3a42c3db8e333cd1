mod app;
mod panels;

use app::TillRankApp;
use eframe::egui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Set up file logging to /tmp/tillrank.log
    let file_appender = tracing_appender::rolling::never("/tmp", "tillrank.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize tracing with both stdout and file output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("tillrank_services=debug,tillrank_gui=info")
        }))
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    tracing::info!("TillRank starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("TillRank"),
        ..Default::default()
    };

    eframe::run_native(
        "TillRank",
        options,
        Box::new(|cc| Ok(Box::new(TillRankApp::new(cc)))),
    )
}
