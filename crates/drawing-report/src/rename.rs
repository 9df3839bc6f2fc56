//! Applying computed names inside a drawing folder.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use drawing_model::Mapping;

/// Outcome of applying renames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    /// `(from, to)` pairs that were renamed.
    pub renamed: Vec<(String, String)>,
    /// Target names that already existed; their sources were left alone.
    pub skipped_existing: Vec<String>,
}

/// Renames every file whose mapping changes its name.
///
/// Existing targets are never overwritten. Unchanged mappings are ignored.
pub fn apply_renames(folder: &Path, mappings: &[Mapping]) -> Result<RenameReport> {
    let mut report = RenameReport::default();
    for mapping in mappings.iter().filter(|m| m.is_renamed()) {
        let source = folder.join(mapping.original_name());
        let target = folder.join(&mapping.new_name);
        if target.exists() {
            warn!(target = %mapping.new_name, "target exists, skipping rename");
            report.skipped_existing.push(mapping.new_name.clone());
            continue;
        }
        std::fs::rename(&source, &target).with_context(|| {
            format!("rename {} to {}", source.display(), target.display())
        })?;
        report
            .renamed
            .push((mapping.original_name().to_string(), mapping.new_name.clone()));
    }
    info!(
        renamed = report.renamed.len(),
        skipped = report.skipped_existing.len(),
        "applied renames"
    );
    Ok(report)
}
