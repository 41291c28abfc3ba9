//! knobkit demo — a live style-guide page whose preview component is
//! configured entirely through knobs.

use clap::Parser;

mod app;

use app::DemoApp;

/// Interactive control-panel demo for knobkit.
#[derive(Parser, Debug)]
#[command(name = "knobkit-demo")]
#[command(about = "Interactive control-panel demo for knobkit")]
#[command(version)]
struct Args {
    /// UI scale factor.
    #[arg(long, default_value = "1.0")]
    zoom: f32,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // eframe and egui still emit log:: records, so route them through tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();

    tracing::info!("Starting knobkit demo");
    tracing::info!(zoom = args.zoom, "ui config");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([680.0, 760.0])
            .with_min_inner_size([520.0, 480.0])
            .with_title("knobkit"),
        ..Default::default()
    };

    eframe::run_native(
        "knobkit",
        options,
        Box::new(move |cc| Ok(Box::new(DemoApp::new(cc, args.zoom)))),
    )
}
