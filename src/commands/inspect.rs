use crate::cli::{Cli, Commands};
use crate::domain::models::StatusReport;
use crate::report;
use crate::services::loader::ReportLoader;
use crate::services::output::print_one;

pub fn handle_inspect_commands(
    cli: &Cli,
    loader: &ReportLoader,
    report_source: &str,
) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Status => {
            let status = StatusReport {
                state: loader.state_label().to_string(),
                source: loader.source_label().to_string(),
                report_source: report_source.to_string(),
                message: loader.message().map(str::to_string),
                fallback_reason: loader.fallback_reason().map(str::to_string),
            };
            print_one(cli.json, status, |s| {
                format!(
                    "state={} source={} report_source={} message={}",
                    s.state,
                    s.source,
                    s.report_source,
                    s.message.as_deref().unwrap_or("-")
                )
            })?;
        }
        Commands::Validate => {
            let doc = match loader.document() {
                Some(doc) => doc,
                None => anyhow::bail!("no report document loaded"),
            };
            report::validate(doc)?;
            print_one(cli.json, "valid", |_| "report valid".to_string())?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
