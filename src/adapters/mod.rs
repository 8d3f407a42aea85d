//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` against the
//! console, and renders results for the user.
//!
//! Adapter categories:
//! - `console`: Prompting stdin source and argument-supplied odds
//! - `report`: Text and JSON rendering of an allocation

pub mod console;
pub mod report;

pub use console::{FixedSource, PromptSource, TokenReader};
pub use report::{render_json, render_text, write_report, ReportFormat};
