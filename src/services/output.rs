use serde::Serialize;

use crate::domain::models::{ErrorBody, ErrorOut, JsonOut};
use crate::report::ReportError;

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Fatal-error reporting: a machine-readable envelope in JSON mode,
/// plain stderr otherwise. The process exits nonzero either way.
pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        let out = ErrorOut {
            ok: false,
            error: ErrorBody {
                code: error_code(err).to_string(),
                message: err.to_string(),
            },
        };
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(_) => eprintln!("error: {err:#}"),
        }
    } else {
        eprintln!("error: {err:#}");
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<ReportError>() {
        Some(ReportError::SchemaMismatch(_)) => "SCHEMA_INVALID",
        None => "RUNTIME",
    }
}
