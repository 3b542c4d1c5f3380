//! FileProcessor: run a rule set over an ordered list of files.
//!
//! Files are processed strictly sequentially, in list order. A listed path
//! that does not exist is reported and skipped; any actual read or write
//! failure propagates immediately and aborts the run, leaving files already
//! processed in their final state and later entries untouched.

use crate::event::{FileOutcome, FileReport};
use crate::patch::apply_rules;
use crate::rule::RuleSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Apply `rules` to every path in `paths`, writing changed files back.
///
/// Write-back is a plain full-file overwrite and happens if and only if the
/// patched content differs from what was read.
pub fn apply_files(paths: &[PathBuf], rules: &RuleSet) -> Result<Vec<FileReport>, ProcessError> {
    process_files(paths, rules, WriteMode::Apply)
}

/// Evaluate `rules` against every path without writing anything.
///
/// Mirrors [`apply_files`] report semantics: `Updated` means "would be
/// updated".
pub fn check_files(paths: &[PathBuf], rules: &RuleSet) -> Result<Vec<FileReport>, ProcessError> {
    process_files(paths, rules, WriteMode::Check)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    Apply,
    Check,
}

fn process_files(
    paths: &[PathBuf],
    rules: &RuleSet,
    mode: WriteMode,
) -> Result<Vec<FileReport>, ProcessError> {
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        reports.push(process_file(path, rules, mode)?);
    }
    Ok(reports)
}

fn process_file(path: &Path, rules: &RuleSet, mode: WriteMode) -> Result<FileReport, ProcessError> {
    if !path.exists() {
        return Ok(FileReport {
            path: path.to_path_buf(),
            outcome: FileOutcome::Missing,
        });
    }

    let original = fs::read_to_string(path).map_err(|source| ProcessError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = apply_rules(&original, rules);

    if outcome.content == original {
        return Ok(FileReport {
            path: path.to_path_buf(),
            outcome: FileOutcome::Unchanged,
        });
    }

    if mode == WriteMode::Apply {
        fs::write(path, &outcome.content).map_err(|source| ProcessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        outcome: FileOutcome::Updated {
            events: outcome.events,
        },
    })
}
