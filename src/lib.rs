//! Export GUI builder designs as Go source for the Fyne toolkit.
//!
//! A design is a tree of [`widget::Node`]s plus per-node [`widget::Metadata`].
//! [`export::export_go`] turns it into a `gui` struct with a `makeUI`
//! function that rebuilds the tree; [`export::export_go_preview`] adds a
//! `main` so the result runs on its own.

pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod project;
pub mod registry;
pub mod widget;

pub use config::ExportConfig;
pub use error::{DesignError, ExportError, FormatError};
pub use export::{Exporter, export_go, export_go_preview};
pub use project::Design;
