use serde::Serialize;

use crate::cli::{Cli, Commands};
use crate::domain::models::JsonOut;
use crate::report::ReportData;
use crate::services::format::thousands;
use crate::services::loader::ReportLoader;
use crate::services::render;

pub fn handle_section_commands(cli: &Cli, loader: &ReportLoader) -> anyhow::Result<bool> {
    if !matches!(
        cli.command,
        Commands::Summary
            | Commands::Distribution
            | Commands::Segments
            | Commands::Tests
            | Commands::Outliers
            | Commands::Trends
            | Commands::Show
    ) {
        return Ok(false);
    }

    let doc = match loader.document() {
        Some(doc) => doc,
        None => anyhow::bail!("no report document loaded"),
    };

    // The full document passes through verbatim; the loader transports it
    // opaquely and so does `show --json`.
    if matches!(cli.command, Commands::Show) && cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data: doc })?
        );
        return Ok(true);
    }

    let data = ReportData::from_document(doc)?;

    match &cli.command {
        Commands::Summary => print_section(
            cli.json,
            data.stage_1_descriptive_statistics.as_ref(),
            "stage_1_descriptive_statistics",
            render::summary_lines,
        )?,
        Commands::Distribution => print_section(
            cli.json,
            data.stage_1_descriptive_statistics.as_ref(),
            "stage_1_descriptive_statistics",
            render::distribution_lines,
        )?,
        Commands::Segments => print_section(
            cli.json,
            data.stage_1_descriptive_statistics.as_ref(),
            "stage_1_descriptive_statistics",
            |stats| render::segments_lines(stats, data.stage_4_time_series.as_ref()),
        )?,
        Commands::Tests => print_section(
            cli.json,
            data.stage_2_statistical_tests.as_ref(),
            "stage_2_statistical_tests",
            render::tests_lines,
        )?,
        Commands::Outliers => print_section(
            cli.json,
            data.stage_3_outlier_detection.as_ref(),
            "stage_3_outlier_detection",
            render::outliers_lines,
        )?,
        Commands::Trends => print_section(
            cli.json,
            data.stage_4_time_series.as_ref(),
            "stage_4_time_series",
            render::trends_lines,
        )?,
        Commands::Show => print_full_report(&data),
        _ => unreachable!("guarded above"),
    }

    Ok(true)
}

fn print_section<T: Serialize>(
    json: bool,
    section: Option<&T>,
    name: &str,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    match section {
        Some(section) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: section
                    })?
                );
            } else {
                for line in lines(section) {
                    println!("{line}");
                }
            }
        }
        None => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: serde_json::Value::Null
                    })?
                );
            } else {
                println!("no {name} in active document");
            }
        }
    }
    Ok(())
}

fn print_full_report(data: &ReportData) {
    let mut sections: Vec<Vec<String>> = Vec::new();
    if let Some(stats) = &data.stage_1_descriptive_statistics {
        sections.push(render::summary_lines(stats));
        sections.push(render::distribution_lines(stats));
        sections.push(render::segments_lines(
            stats,
            data.stage_4_time_series.as_ref(),
        ));
    }
    if let Some(tests) = &data.stage_2_statistical_tests {
        sections.push(render::tests_lines(tests));
    }
    if let Some(outliers) = &data.stage_3_outlier_detection {
        sections.push(render::outliers_lines(outliers));
    }
    if let Some(series) = &data.stage_4_time_series {
        sections.push(render::trends_lines(series));
    }
    if let Some(stats) = &data.stage_1_descriptive_statistics {
        sections.push(vec![format!(
            "report generated from {} reviews",
            thousands(stats.key_insights.total_reviews)
        )]);
    }

    if sections.is_empty() {
        println!("active document has no report sections");
        return;
    }
    for (i, lines) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for line in lines {
            println!("{line}");
        }
    }
}
