// Entry point: load recorded moves, average per step, show the plot.
use std::error::Error;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use moveprofile::app::run_window;
use moveprofile::cli::Args;
use moveprofile::config::AppConfig;
use moveprofile::core::dataset::Dataset;
use moveprofile::core::step_profile;
use moveprofile::ui::export::render_png;
use moveprofile::ui::viewdata::ProfileView;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let mut cfg = AppConfig::load_or_default(&args.config);
    if let Some(input) = args.input {
        cfg.input.path = input;
    }
    let shape = cfg.grid.shape()?;

    let dataset = Dataset::load(&cfg.input.path)?;
    info!(
        "Loaded {} records from {} (longest {} steps)",
        dataset.len(),
        cfg.input.path.display(),
        dataset.longest_record()
    );

    let profile = step_profile(&dataset, shape)?;

    if args.nogui {
        render_png(&args.png, &profile, &cfg.plot)?;
        info!("Saved plot to {}", args.png.display());
    } else {
        let view = ProfileView {
            title: cfg.plot.title.clone(),
            source: cfg.input.path.display().to_string(),
            records: dataset.len(),
            marker_radius: cfg.plot.marker_radius,
            profile,
        };
        run_window(view, [cfg.plot.width as f32, cfg.plot.height as f32])?;
    }

    println!("End");
    Ok(())
}
