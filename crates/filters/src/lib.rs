#![forbid(unsafe_code)]

pub mod classify;
pub mod config;
pub mod error;
pub mod passthrough;

pub use classify::{classify, resolve_field, ClassificationResult};
pub use config::{FieldRead, FilterConfig};
pub use error::FilterError;
pub use passthrough::{assemble, filter_indices, passthrough_filter, run, PassThroughOutput};
