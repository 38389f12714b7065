//! # Roster Check Loader
//!
//! Fetches a tabular source from a local path or an HTTP(S) URL, enforces a
//! byte-size ceiling before parsing, and parses CSV or spreadsheet content
//! into a [`Dataset`](roster_core::Dataset).
//!
//! I/O runs on `tokio`; parsing and validation are synchronous.
//!
//! ## Example
//!
//! ```no_run
//! use roster_config::LoaderConfig;
//! use roster_loader::Loader;
//!
//! # async fn example() -> Result<(), roster_loader::LoadError> {
//! let loader = Loader::new(LoaderConfig::default());
//! let loaded = loader.load("data/people.xlsx").await?;
//!
//! println!("{} rows from {}", loaded.dataset.len(), loaded.source);
//! # Ok(())
//! # }
//! ```

mod error;
mod fetch;
mod loader;
mod parser;
mod source;

pub use error::*;
pub use fetch::*;
pub use loader::*;
pub use parser::*;
pub use source::*;
