pub mod cleanup;
pub mod config;
pub mod error;
pub mod filter;
pub mod generate;
pub mod ident;
pub mod manifest;
pub mod serialize;
pub mod walk;
pub mod writer;

// Convenience re-exports
pub use cleanup::{cleanup, CleanupReport};
pub use config::{
    resolve_cleanup_config, resolve_config, CleanupConfig, ConfigOverrides, FileConfig,
    PayloadConfig,
};
pub use error::{PayloadError, PayloadResult};
pub use filter::SkipFilter;
pub use generate::{check, generate, plan, render, CheckOutcome, GenerateReport, GeneratedPayload};
pub use ident::{sanitize_identifier, IdentifierTable};
pub use manifest::{render_header, HeaderEmitter, Manifest, ManifestRecord, PayloadEntry};
pub use walk::{discover, SourcePath};
pub use writer::write_atomic;
