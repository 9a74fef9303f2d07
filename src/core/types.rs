//! Query types shared by the record store and its callers

use crate::utils::NormalizedTimestamp;

/// Inclusive time window for queries
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TimeWindow {
    pub(crate) from: Option<NormalizedTimestamp>,
    pub(crate) until: Option<NormalizedTimestamp>,
}

impl TimeWindow {
    pub(crate) fn new(from: Option<NormalizedTimestamp>, until: Option<NormalizedTimestamp>) -> Self {
        Self { from, until }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.from.is_some() || self.until.is_some()
    }

    /// Check a `YYYYMMDDHHMMSS` key against both bounds.
    pub(crate) fn contains_key(&self, key: u64) -> bool {
        if let Some(from) = self.from
            && key < from.comparison_key()
        {
            return false;
        }
        if let Some(until) = self.until
            && key > until.comparison_key()
        {
            return false;
        }
        true
    }
}

/// What a record scan should keep. Empty lists disable that filter.
#[derive(Debug, Clone, Default)]
pub(crate) struct FilterCriteria {
    pub(crate) window: TimeWindow,
    pub(crate) projects: Vec<String>,
    pub(crate) tags: Vec<String>,
}

impl FilterCriteria {
    pub(crate) fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = window;
        self
    }

    pub(crate) fn with_projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projects = projects.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
