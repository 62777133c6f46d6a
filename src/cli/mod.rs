//! Command-line interface and pipeline orchestration

use crate::services::{
    display_label, line_chart_config, Aggregator, BstatsClient, QuickChartClient,
};
use clap::Parser;
use std::path::PathBuf;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Export a bStats plugin chart as a rendered line-chart image
#[derive(Parser)]
#[command(name = "bstats-chart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// bStats plugin id to export
    pub plugin_id: u32,

    /// Path of the image file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Number of trailing days to cover
    #[arg(long, default_value_t = 100)]
    pub days: u32,

    /// Chart key to export (e.g. "servers" or "players")
    #[arg(long, default_value = "servers")]
    pub chart: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Run the export pipeline end to end
    ///
    /// Ctrl-C cancels the shared token; every stage checks it at each await
    /// point and aborts with `ExportError::Cancelled`.
    pub async fn run(self) -> anyhow::Result<()> {
        let cancel = CancellationToken::new();
        let signal_cancel = cancel.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                warn!("Interrupt received, stopping");
                signal_cancel.cancel();
            }
        });

        info!(
            "Exporting chart '{}' of plugin {} over the last {} days",
            self.chart, self.plugin_id, self.days
        );
        let points = BstatsClient::new()?
            .fetch_chart_data(self.plugin_id, &self.chart, self.days, &cancel)
            .await?;
        info!("Fetched {} raw samples", points.len());

        let daily = Aggregator::daily_max(&points);
        let series = Aggregator::dense_series(&daily);
        info!("Aggregated {} days ({} with data)", series.len(), daily.len());

        let chart = line_chart_config(&display_label(&self.chart), &series);
        QuickChartClient::new()?
            .render_to_file(&chart, &self.output, &cancel)
            .await?;
        info!("Wrote {}", self.output.display());

        Ok(())
    }
}
