//! Directory walking filtered through a fileset.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::fileset::FileSet;
use crate::pattern::forwardify_slashes;

/// Walks the configured root and returns the paths its fileset selects,
/// relative to the root and in walk order.
pub fn scan(config: &Config) -> Result<Vec<PathBuf>> {
    let set = FileSet::new(&config.patterns, &config.excludes, config.ignore_case);

    let mut walker = WalkDir::new(&config.root).follow_links(config.follow_links);
    if let Some(depth) = config.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut selected = vec![];
    for entry in walker {
        let entry = entry?;

        if entry.file_type().is_dir() && !config.dirs {
            continue;
        }

        let relative = match entry.path().strip_prefix(&config.root) {
            Ok(relative) => relative,
            Err(_) => continue,
        };

        let candidate = forwardify_slashes(&relative.to_string_lossy());
        // The root itself is never a candidate.
        if candidate.is_empty() {
            continue;
        }

        if set.selects(&candidate) {
            debug!("Selected {:?}", entry.path());
            selected.push(relative.to_path_buf());
        }
    }

    Ok(selected)
}
