use crate::db::predicate::BoundingBox;
use serde::{Deserialize, Serialize};

///
/// QueryParams
///
/// Caller-supplied, not yet validated query input.
/// Every filter is independent and optional; absent filters match everything.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    pub usage: Vec<String>,
    pub dpe_min: Option<String>,
    pub dpe_max: Option<String>,
    pub search: Option<String>,
    pub bbox: Option<BoundingBox>,
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn usage<I, S>(mut self, usage: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.usage = usage.into_iter().map(Into::into).collect();
        self
    }

    /// Keep grades at least as good as `grade`.
    #[must_use]
    pub fn dpe_min(mut self, grade: impl Into<String>) -> Self {
        self.dpe_min = Some(grade.into());
        self
    }

    /// Keep grades at least as bad as `grade`.
    #[must_use]
    pub fn dpe_max(mut self, grade: impl Into<String>) -> Self {
        self.dpe_max = Some(grade.into());
        self
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    #[must_use]
    pub const fn bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort = Some(field.into());
        self
    }
}
