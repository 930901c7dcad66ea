//! Raw file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Lists CSV files whose stem contains `pattern` (case-insensitive).
///
/// An empty pattern selects every CSV file.
pub fn discover_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let needle = pattern.to_lowercase();
    let files: Vec<PathBuf> = list_csv_files(dir)?
        .into_iter()
        .filter(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| stem.to_lowercase().contains(&needle))
        })
        .collect();
    tracing::debug!(
        dir = %dir.display(),
        pattern,
        file_count = files.len(),
        "discovered customer files"
    );
    Ok(files)
}

/// Output file name for a raw file: `customers_dirty2.csv` becomes
/// `customers_clean2.csv`. Stems without `dirty` get a `_clean` suffix.
pub fn cleaned_file_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("customers");
    if stem.contains("dirty") {
        format!("{}.csv", stem.replace("dirty", "clean"))
    } else {
        format!("{stem}_clean.csv")
    }
}
