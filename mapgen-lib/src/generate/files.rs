use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Returns the names of the entries in `dir` ending with `suffix`, sorted
/// lexicographically.
///
/// The match is a plain suffix match on the entry name, not an extension
/// match, so a file named `mytrim` matches the suffix `trim`.  Entries are
/// selected by name alone: directories are listed like files, contents are
/// never inspected, and there is no recursion.  Names that are not valid
/// UTF-8 cannot appear on a shell command line and are skipped.
pub fn find_input_files<P: AsRef<Path>>(dir: &P, suffix: &str) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to list input directory {}", dir.as_ref().display()))?;

    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("failed to read an entry of {}", dir.as_ref().display())
        })?;
        match entry.file_name().to_str() {
            Some(name) if name.ends_with(suffix) => names.push(name.to_string()),
            Some(_) => (),
            None => debug!("skipping non-UTF-8 entry {:?}", entry.file_name()),
        }
    }
    names.sort_unstable();
    Ok(names)
}
