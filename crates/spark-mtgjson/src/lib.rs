//! # spark-mtgjson
//!
//! Bulk import pipeline for the MTGJSON AllPrintings document and the
//! comprehensive-rules text dump.
//!
//! The importer streams `data.<SET>.cards[]` records through a normalization
//! step into batched, idempotent full-row upserts. Per-record failures are
//! logged and skipped; a missing card uuid or an unreadable source file
//! aborts the run. Re-running the importer is the retry mechanism — every
//! write is keyed by the stable upstream uuid.

pub mod download;
pub mod error;
pub mod import;
pub mod normalize;
pub mod raw;
pub mod rules_text;

pub use error::ImportError;
pub use import::{import_all_printings, import_document, import_rules};
