//! tyre-page-gen: tyre size page generator core library
//!
//! Normalises tyre size strings, classifies them into a marketing segment,
//! and fills fixed copy templates to produce a Markdown page, optional
//! JSON-LD documents and a .docx export. Bulk mode repeats this over a CSV
//! of sizes and zips the results.
//!
//! Compiles to both native (rlib) and WebAssembly (cdylib via wasm-pack).

pub mod spec;
pub mod error;
pub mod config;
pub mod parse;
pub mod segment;
pub mod suggest;
pub mod content;
pub mod schema;
pub mod docx;
pub mod pipeline;
pub mod bulk;

// Re-exports for convenience
pub use spec::{Brand, PageSpec, SPEC};
pub use error::{Error, Result};
pub use config::GeneratorConfig;
pub use parse::{parse_tyre_size, TyreSize};
pub use segment::{classify, Segment};
pub use suggest::suggest;
pub use content::{sanitize, limit_chars, PageCopy};
pub use schema::SchemaKind;
pub use pipeline::{assemble, PageOptions, PageResult};
pub use bulk::{bulk_from_csv, BulkOutput};
