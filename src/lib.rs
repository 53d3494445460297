pub mod name;
pub mod reduce;
pub mod format;
pub mod source;
pub mod header;
pub mod embedder;
pub mod config;

pub use name::extract_name;
pub use reduce::reduce_code;
pub use format::{format_code, parse_array_body, ArrayFormat, FormatError, LICENSE};
pub use source::{discover, SourceFile};
pub use header::{EmbeddedEntry, OutputDocument};
pub use embedder::{BuildMode, EmbedError, EmbedOptions, EmbedReport, Embedder};
pub use config::EmbedConfig;
