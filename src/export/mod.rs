//! Writing the export: JSON records, the on-disk layout and the final zip archive
//!
//! Layout relative to the export root:
//!
//! - `users.json`
//! - `channels.json`
//! - `<room-name>/<YYYY-MM-DD>.json`

pub mod archive;
pub mod dump;
pub mod json;
pub mod writer;

pub use archive::create_zip;
pub use dump::{ExportSummary, Exporter, export_workspace};
pub use json::marshal_indent;
pub use writer::{DirectoryWriter, ExportSink, write_json};
