use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use salary_dashboard::app::SalaryDashboardApp;
use salary_dashboard::cli::Cli;
use salary_dashboard::data::currency::CurrencyTable;
use salary_dashboard::data::pipeline::SalaryData;
use salary_dashboard::headless;
use salary_dashboard::state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let data = SalaryData::load(&cli.data)
        .with_context(|| format!("cannot start without salary data ({})", cli.data.display()))?;

    if cli.headless {
        let summary = headless::export_both(
            &data,
            &cli.criteria(),
            &CurrencyTable::default(),
            &cli.export_dir,
        )?;
        println!(
            "Wrote {} US rows to {} and {} Global rows to {}",
            summary.us_rows,
            summary.us_path.display(),
            summary.global_rows,
            summary.global_path.display()
        );
        return Ok(());
    }

    let state = AppState::new(data, cli.data.clone(), cli.export_dir.clone())
        .with_criteria(cli.criteria());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Games Salary Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(SalaryDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI failed: {e}"))
}
