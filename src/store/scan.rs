//! Record discovery and filtering
//!
//! Pipeline: discover → window (file name) → project (file name) → tag
//! (file body) → sort. Nothing here returns an error; whatever cannot be
//! read is skipped.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use regex::{Regex, RegexBuilder};

use crate::core::{FilterCriteria, TimeWindow};
use crate::store::record::TaskRecord;

pub(crate) struct RecordStore {
    root: PathBuf,
    extension: String,
}

impl RecordStore {
    pub(crate) fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    fn find_files(&self) -> Vec<PathBuf> {
        let pattern = format!(
            "{}/**/*.{}",
            glob::Pattern::escape(&self.root.to_string_lossy()),
            self.extension
        );
        let suffix = format!(".{}", self.extension);

        let mut files = Vec::new();
        let Ok(entries) = glob::glob(&pattern) else {
            log::debug!("Bad record pattern {pattern}");
            return files;
        };
        for entry in entries {
            match entry {
                Ok(path) => {
                    let named_like_record = path
                        .file_name()
                        .and_then(|s| s.to_str())
                        .is_some_and(|s| s.ends_with(&suffix));
                    if named_like_record && path.is_file() {
                        files.push(path);
                    }
                }
                Err(err) => log::debug!("Skipping unreadable entry: {err}"),
            }
        }
        files
    }

    pub(crate) fn find(&self, criteria: &FilterCriteria) -> Vec<TaskRecord> {
        let projects = match alternation(&criteria.projects, project_pattern) {
            Ok(re) => re,
            Err(err) => {
                log::warn!("Invalid project filter: {err}");
                return Vec::new();
            }
        };
        let tags = match alternation(&criteria.tags, |tag| regex::escape(tag)) {
            Ok(re) => re,
            Err(err) => {
                log::warn!("Invalid tag filter: {err}");
                return Vec::new();
            }
        };

        let discovery_start = Instant::now();
        let files = self.find_files();
        log::debug!(
            "Found {} record files under {} ({:.2}ms)",
            files.len(),
            self.root.display(),
            discovery_start.elapsed().as_secs_f64() * 1000.0
        );

        let mut records: Vec<TaskRecord> = files
            .into_iter()
            .map(TaskRecord::from_path)
            .filter(|record| in_window(record, &criteria.window))
            .filter(|record| {
                projects
                    .as_ref()
                    .is_none_or(|re| re.is_match(record.file_name()))
            })
            .filter(|record| tags.as_ref().is_none_or(|re| body_matches(record.path(), re)))
            .collect();

        // Byte order of the whole path, so `acme-web/` sorts before `acme/`.
        records.sort_by(|a, b| a.path().as_os_str().cmp(b.path().as_os_str()));
        log::debug!("{} records matched", records.len());
        records
    }
}

fn in_window(record: &TaskRecord, window: &TimeWindow) -> bool {
    if !window.is_active() {
        return true;
    }
    match record.time_key() {
        Some(key) => window.contains_key(key),
        None => {
            log::debug!("No stamp in {}, excluded by window", record.file_name());
            false
        }
    }
}

/// Project identifiers use `-` where file names may use any separator.
fn project_pattern(project: &str) -> String {
    project
        .split('-')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".")
}

/// One case-insensitive regex matching any of `terms`; `None` when empty.
fn alternation<F>(terms: &[String], to_pattern: F) -> Result<Option<Regex>, regex::Error>
where
    F: Fn(&str) -> String,
{
    if terms.is_empty() {
        return Ok(None);
    }
    let pattern = terms
        .iter()
        .map(|t| to_pattern(t))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map(Some)
}

fn body_matches(path: &Path, re: &Regex) -> bool {
    match fs::read(path) {
        Ok(bytes) => re.is_match(&String::from_utf8_lossy(&bytes)),
        Err(err) => {
            log::debug!("Failed to read {}: {}", path.display(), err);
            false
        }
    }
}
