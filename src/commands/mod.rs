//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `sections.rs` — report section rendering (summary/distribution/…/show).
//! - `inspect.rs` — loader introspection (status) and schema validation.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*` and `report`.
//! - Keep behavior and output schema stable.

pub mod inspect;
pub mod sections;

pub use inspect::handle_inspect_commands;
pub use sections::handle_section_commands;
