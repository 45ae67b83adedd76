use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Loader introspection surfaced by the `status` command.
#[derive(Serialize)]
pub struct StatusReport {
    pub state: String,
    pub source: String,
    pub report_source: String,
    pub message: Option<String>,
    pub fallback_reason: Option<String>,
}
