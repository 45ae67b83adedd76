//! Stable literals shared across the crate.

/// Default report source: a file next to the working directory, the same
/// name the upstream analysis pipeline writes.
pub const DEFAULT_REPORT_SOURCE: &str = "report_data.json";

/// Advisory shown when the initial retrieval fails and the bundled sample
/// takes over. Non-fatal.
pub const SAMPLE_DATA_NOTICE: &str =
    "Using sample data. Place your report_data.json in the public folder to use your own data.";

/// Rejection message for pasted text that does not parse as JSON.
pub const INVALID_JSON_INPUT: &str = "Invalid JSON format. Please check your input.";
