use crate::{model::building::Building, traits::RecordSource};
use std::sync::Arc;

///
/// StaticDataset
///
/// Record source over a fixed, shared slice of buildings.
/// Cloning is cheap; every clone and every snapshot shares one allocation.
///

#[derive(Clone, Debug, Default)]
pub struct StaticDataset {
    records: Arc<[Building]>,
}

impl StaticDataset {
    #[must_use]
    pub fn new(records: impl Into<Arc<[Building]>>) -> Self {
        Self {
            records: records.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Building] {
        &self.records
    }
}

impl RecordSource for StaticDataset {
    fn snapshot(&self) -> Arc<[Building]> {
        Arc::clone(&self.records)
    }
}

impl From<Vec<Building>> for StaticDataset {
    fn from(records: Vec<Building>) -> Self {
        Self::new(records)
    }
}
