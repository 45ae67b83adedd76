use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "reviewdeck",
    version,
    about = "Terminal presenter for precomputed restaurant-review analytics reports"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Report source (file, dir, or url); falls back to bundled sample data on failure"
    )]
    pub report: Option<String>,
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        conflicts_with = "sample",
        help = "Replace the active document with pasted JSON ('-' reads stdin)"
    )]
    pub paste: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Render from the bundled sample document, skipping retrieval"
    )]
    pub sample: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Executive summary: headline metrics and variability meters
    Summary,
    /// Rating/likes quartile summaries and the per-city table
    Distribution,
    /// Cuisine and restaurant breakdowns
    Segments,
    /// Hypothesis tests: ANOVA, t-test, correlation
    Tests,
    /// Outlier detection and anomaly summary
    Outliers,
    /// Time-series aggregates: top days, months, city-month table
    Trends,
    /// The full report, all sections in page order
    Show,
    /// Loader state, active source, and any advisory message
    Status,
    /// Validate the active document against the report schema
    Validate,
}
