//! Query document discovery

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::CoreError;

/// A GraphQL query read from disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDocument {
    /// File name without the query suffix, used as the job name
    pub name: String,
    /// Raw query text, sent verbatim
    pub query: String,
    /// File the query was read from
    pub path: PathBuf,
}

/// Load every query document in `dir` whose file name ends in `suffix`
///
/// Documents are returned sorted by file name. Subdirectories and
/// non-matching files are ignored; files that cannot be read are logged and
/// skipped.
///
/// # Errors
/// Returns [`CoreError::QueryDir`] if the directory itself cannot be listed.
pub fn load_queries(dir: &Path, suffix: &str) -> Result<Vec<QueryDocument>, CoreError> {
    let entries = fs::read_dir(dir).map_err(|source| CoreError::QueryDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };

        let Some(name) = file_name.strip_suffix(suffix) else {
            debug!(path = %path.display(), "ignoring file without query suffix");
            continue;
        };

        if name.is_empty() {
            warn!(path = %path.display(), "skipping query file with empty name");
            continue;
        }

        candidates.push((name.to_string(), path));
    }

    candidates.sort_by(|a, b| a.1.cmp(&b.1));

    let mut documents = Vec::with_capacity(candidates.len());
    for (name, path) in candidates {
        match fs::read_to_string(&path) {
            Ok(query) if query.trim().is_empty() => {
                warn!(path = %path.display(), "skipping empty query file");
            }
            Ok(query) => {
                debug!(job = %name, path = %path.display(), "loaded query");
                documents.push(QueryDocument { name, query, path });
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read query file, skipping");
            }
        }
    }

    info!(dir = %dir.display(), count = documents.len(), "loaded query documents");
    Ok(documents)
}
