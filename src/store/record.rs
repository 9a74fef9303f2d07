//! Task record handles and the file name schema
//!
//! Record files are named `YYYYMMDD-HHMMSS-<project>.<ext>`. The stamp is
//! the creation time; the project part may use `_` or `.` where the
//! project identifier itself uses `-`.
//!
//! The stamp must stand alone: a digit directly before the date or after
//! the time (`120200102-093000-x.task`) makes the name malformed rather
//! than yielding a shifted date.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::AppError;

static STAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(?P<date>[0-9]{8})-(?P<time>[0-9]{6})(?:[^0-9]|$)")
        .expect("stamp pattern must compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordName {
    pub(crate) date: String,
    pub(crate) time: String,
    pub(crate) project: Option<String>,
}

impl RecordName {
    pub(crate) fn parse(file_name: &str) -> Result<Self, AppError> {
        let caps = STAMP
            .captures(file_name)
            .ok_or_else(|| AppError::MalformedRecordName {
                name: file_name.to_string(),
            })?;
        let (Some(date), Some(time)) = (caps.name("date"), caps.name("time")) else {
            return Err(AppError::MalformedRecordName {
                name: file_name.to_string(),
            });
        };

        let rest = &file_name[time.end()..];
        let stem = rest.rsplit_once('.').map_or(rest, |(stem, _)| stem);
        let project = stem.trim_start_matches(['-', '_', '.']);

        Ok(Self {
            date: date.as_str().to_string(),
            time: time.as_str().to_string(),
            project: (!project.is_empty()).then(|| project.to_string()),
        })
    }

    /// Date and time tokens read as the number `YYYYMMDDHHMMSS`.
    pub(crate) fn key(&self) -> u64 {
        self.date
            .bytes()
            .chain(self.time.bytes())
            .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
    }
}

/// One record file found by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskRecord {
    path: PathBuf,
    name: Option<RecordName>,
}

impl TaskRecord {
    pub(super) fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .and_then(|s| RecordName::parse(s).ok());
        Self { path, name }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    pub(crate) fn time_key(&self) -> Option<u64> {
        self.name.as_ref().map(RecordName::key)
    }

    pub(crate) fn project(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.project.as_deref())
    }

    /// Creation time from the name; `None` for stamps like `20201399-...`.
    pub(crate) fn stamp(&self) -> Option<NaiveDateTime> {
        let name = self.name.as_ref()?;
        NaiveDateTime::parse_from_str(&format!("{}{}", name.date, name.time), "%Y%m%d%H%M%S").ok()
    }
}
