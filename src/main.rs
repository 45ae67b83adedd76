use clap::Parser;

mod cli;
mod commands;
mod domain;
mod report;
mod services;

use cli::Cli;
use domain::constants::DEFAULT_REPORT_SOURCE;
use services::config::{load_config, ConfigFile};
use services::loader::ReportLoader;
use services::output::print_error;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        print_error(cli.json, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let (loader, report_source) = acquire_document(cli, &config)?;

    // Advisory and rejection messages go to stderr so JSON stdout stays
    // machine-clean; the status command carries them as data as well.
    if let Some(msg) = loader.message() {
        eprintln!("{msg}");
    }

    if commands::handle_section_commands(cli, &loader)? {
        return Ok(());
    }
    if commands::handle_inspect_commands(cli, &loader, &report_source)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command")
}

/// Runs the source-priority chain for this invocation: one retrieval
/// attempt (unless `--sample` predetermines the outcome), then the
/// user-override paths on top of whatever the chain settled on.
fn acquire_document(cli: &Cli, config: &ConfigFile) -> anyhow::Result<(ReportLoader, String)> {
    let report_source = cli
        .report
        .clone()
        .or_else(|| config.general.report_source.clone())
        .unwrap_or_else(|| DEFAULT_REPORT_SOURCE.to_string());

    let mut loader = ReportLoader::new();
    if cli.sample {
        loader.use_sample();
        return Ok((loader, report_source));
    }

    loader.settle(report::fetch_document(
        &report_source,
        config.general.fetch_timeout_ms,
    ));

    if let Some(paste) = &cli.paste {
        let text = read_paste_input(paste)?;
        loader.submit_text(&text);
    }

    Ok((loader, report_source))
}

fn read_paste_input(arg: &str) -> anyhow::Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin().lock(), &mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(arg)?)
}
