//! json-stamp core
//!
//! Sets a constant field on every object of a JSON array file and writes the
//! array back to the same file.
//!
//! # Core Operations
//!
//! - **Ingress**: read the file and decode it as JSON
//! - **Shape check**: require an array of objects, failing on the first
//!   element that is not an object
//! - **Stamp**: set the field on every record, in order
//! - **Egress**: render with 2-space indentation and overwrite the file
//!
//! # Example
//!
//! ```rust,no_run
//! use stamp_core::{Annotator, StampConfig};
//!
//! # fn example() -> Result<(), stamp_core::StampError> {
//! let config = StampConfig::new().with_file_path("tickers.json");
//! let report = Annotator::new(config).run()?;
//! println!("stamped {} records", report.outcome.records);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod annotator;
pub mod codec;
pub mod config;
pub mod document;
pub mod error;
pub mod fs;
pub mod hash;

// Re-exports for convenience
pub use annotator::{Annotator, StampReport};
pub use codec::JsonCodec;
pub use config::{
    StampConfig, WriteMode, DEFAULT_FIELD_NAME, DEFAULT_FIELD_VALUE, DEFAULT_FILE_PATH,
};
pub use document::{Document, Record, StampOutcome};
pub use error::{ConfigError, LoadError, ShapeError, StampError, StampResult, StoreError};
pub use hash::ContentHash;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with json-stamp
    pub use crate::annotator::{Annotator, StampReport};
    pub use crate::config::{StampConfig, WriteMode};
    pub use crate::document::{Document, StampOutcome};
    pub use crate::error::{StampError, StampResult};
}
