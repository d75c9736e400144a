//! Module: predicate
//! Responsibility: conjunctive record filtering (usage, rating range, text
//! search, bounding box).
//! Does not own: parameter validation or ordering.

mod bbox;
pub(crate) mod text;

#[cfg(test)]
mod tests;

pub use bbox::{BoundingBox, BoundingBoxError};

use crate::{
    db::{predicate::text::contains_folded, query::ValidatedQuery},
    model::{
        building::Building,
        rating::{Rating, RatingScale},
    },
};

///
/// RatingRange
///
/// Inclusive, independently optional rating bounds.
/// `best` keeps grades at least as good as it; `worst` keeps grades at least
/// as bad as it.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RatingRange {
    pub best: Option<Rating>,
    pub worst: Option<Rating>,
}

impl RatingRange {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.best.is_some() || self.worst.is_some()
    }

    /// Whether a record's rating (if recognized) satisfies both bounds.
    /// Unrecognized ratings never satisfy an active range.
    #[must_use]
    pub fn admits(&self, rating: Option<Rating>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(rating) = rating else {
            return false;
        };

        self.best.is_none_or(|bound| rating.at_least_as_good_as(bound))
            && self.worst.is_none_or(|bound| rating.at_least_as_bad_as(bound))
    }
}

///
/// FilterProgram
///
/// Predicate set compiled once per query; evaluation is allocation-free for
/// ASCII text. Inactive predicates always pass.
///

#[derive(Clone, Debug)]
pub struct FilterProgram<'q> {
    usage: &'q [String],
    rating: RatingRange,
    search: Option<String>,
    bbox: Option<BoundingBox>,
    scale: &'q RatingScale,
}

impl<'q> FilterProgram<'q> {
    #[must_use]
    pub fn compile(query: &'q ValidatedQuery, scale: &'q RatingScale) -> Self {
        let search = query
            .search
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(|term| text::casefold(term).into_owned());

        Self {
            usage: &query.usage,
            rating: query.rating,
            search,
            bbox: query.bbox,
            scale,
        }
    }

    /// Evaluate every active predicate against one record.
    #[must_use]
    pub fn eval(&self, building: &Building) -> bool {
        self.usage_matches(building)
            && self.rating_matches(building)
            && self.search_matches(building)
            && self.bbox_matches(building)
    }

    fn usage_matches(&self, building: &Building) -> bool {
        self.usage.is_empty() || self.usage.iter().any(|usage| *usage == building.usage)
    }

    fn rating_matches(&self, building: &Building) -> bool {
        self.rating.admits(self.scale.rating(building.rating_label()))
    }

    fn search_matches(&self, building: &Building) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };

        contains_folded(&building.name, term)
            || contains_folded(&building.address, term)
            || contains_folded(&building.city, term)
    }

    fn bbox_matches(&self, building: &Building) -> bool {
        self.bbox.is_none_or(|bbox| bbox.contains(building.lng, building.lat))
    }
}

/// Keep the records every active predicate admits, preserving input order.
#[must_use]
pub fn filter<'a>(records: &'a [Building], program: &FilterProgram<'_>) -> Vec<&'a Building> {
    records
        .iter()
        .filter(|building| program.eval(building))
        .collect()
}
