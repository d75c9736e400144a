use crate::model::building::Building;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Aggregations
///
/// Group counts over the filtered, not-yet-paginated record set.
/// Keys are exactly the distinct values present; key order carries no meaning.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregations {
    pub by_usage: BTreeMap<String, u64>,
    #[serde(rename = "byDpe")]
    pub by_rating: BTreeMap<String, u64>,
}

impl Aggregations {
    /// Number of records counted.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.by_usage.values().sum()
    }
}

/// Count records by usage tag and by raw rating label in one pass.
#[must_use]
pub fn aggregate<'a, I>(records: I) -> Aggregations
where
    I: IntoIterator<Item = &'a Building>,
{
    let mut aggregations = Aggregations::default();

    for building in records {
        bump(&mut aggregations.by_usage, &building.usage);
        bump(&mut aggregations.by_rating, &building.dpe);
    }

    aggregations
}

fn bump(counts: &mut BTreeMap<String, u64>, key: &str) {
    if let Some(count) = counts.get_mut(key) {
        *count = count.saturating_add(1);
    } else {
        counts.insert(key.to_string(), 1);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::fixture_records;

    #[test]
    fn aggregate_counts_usage_and_rating() {
        let records = fixture_records();
        let aggregations = aggregate(&records);

        assert_eq!(aggregations.by_usage.get("residential"), Some(&4));
        assert_eq!(aggregations.by_usage.get("office"), Some(&3));
        assert_eq!(aggregations.by_rating.get("A"), Some(&2));
        assert_eq!(aggregations.by_rating.get("N/C"), Some(&1));
        assert_eq!(aggregations.by_rating.get("Z"), None);
        assert_eq!(aggregations.total(), 13);
        assert_eq!(aggregations.by_rating.values().sum::<u64>(), 13);
    }

    #[test]
    fn aggregate_of_empty_set_has_no_keys() {
        let aggregations = aggregate(std::iter::empty());

        assert!(aggregations.by_usage.is_empty());
        assert!(aggregations.by_rating.is_empty());
        assert_eq!(aggregations.total(), 0);
    }

    #[test]
    fn aggregations_serialize_with_wire_names() {
        let records = fixture_records();
        let json = serde_json::to_value(aggregate(&records)).expect("aggregations encode");

        assert!(json.get("byUsage").is_some());
        assert!(json.get("byDpe").is_some());
    }
}
