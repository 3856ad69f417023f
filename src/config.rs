//! Configuration for a directory scan.
//!
//! The [`Config`] struct is not constructable, use [`ConfigBuilder`].
//!
//! # Examples
//!
//! ```
//! # use antpath::config::ConfigBuilder;
//! ConfigBuilder::default()
//!     .patterns(vec!["**/*.rs".into()])
//!     .root(".")
//!     .build()
//!     .expect("invalid config");
//! ```

use std::path::PathBuf;

/// Arguments to the scanner
#[derive(Builder, Clone, Debug)]
#[builder(setter(into, strip_option))]
#[builder(build_fn(validate = "Self::validate"))]
#[non_exhaustive]
pub struct Config {
    /// Patterns a path must match to be selected. Glob format.
    pub patterns: Vec<String>,
    /// Patterns that deselect a path even when it is included. Glob format.
    #[builder(default)]
    pub excludes: Vec<String>,
    /// Root directory of the scan; candidates are matched relative to it.
    pub root: PathBuf,
    /// Compare patterns and paths without regard to case.
    #[builder(default)]
    pub ignore_case: bool,
    /// Follow symbolic links while walking.
    #[builder(default)]
    pub follow_links: bool,
    /// Descend at most this many directory levels below the root.
    #[builder(default)]
    pub max_depth: Option<usize>,
    /// Report directories as candidates too, not only files.
    #[builder(default)]
    pub dirs: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.patterns.as_ref().map_or(true, Vec::is_empty) {
            return Err("patterns must not be empty".into());
        }

        Ok(())
    }
}
