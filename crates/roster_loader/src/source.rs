//! Source locations.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a tabular source lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A path on the local filesystem
    Local(PathBuf),
    /// An `http://` or `https://` URL
    Remote(String),
}

impl Source {
    /// Resolves a user-supplied location.
    ///
    /// Anything starting with `http://` or `https://` is remote; everything
    /// else is treated as a local path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Remote(location.to_string())
        } else {
            Source::Local(PathBuf::from(location))
        }
    }

    /// Returns true for remote sources.
    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }

    /// Returns the lowercase file extension of the source, if any.
    ///
    /// For URLs the query string and fragment are ignored.
    pub fn extension(&self) -> Option<String> {
        let path = match self {
            Source::Local(path) => path.as_path(),
            Source::Remote(url) => {
                let without_query = url.split(['?', '#']).next().unwrap_or(url);
                let after_scheme = without_query
                    .split_once("://")
                    .map(|(_, rest)| rest)
                    .unwrap_or(without_query);
                // No path segment means no extension (e.g. "https://host.csv").
                let (_, path) = after_scheme.split_once('/')?;
                Path::new(path)
            }
        };

        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Local(path) => write!(f, "{}", path.display()),
            Source::Remote(url) => f.write_str(url),
        }
    }
}
