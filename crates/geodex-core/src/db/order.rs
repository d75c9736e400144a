//! Module: order
//! Responsibility: the canonical total order over buildings for one sort
//! field, shared by sorting and cursor resume.
//! Does not own: cursor token encoding or page slicing.

use crate::{
    db::predicate::text::casefold,
    model::{
        building::Building,
        rating::{Rating, RatingScale},
    },
};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, cmp::Ordering, fmt};

///
/// SortField
///
/// Primary sort key. Every field tie-breaks on the record id, so the order
/// is total and cursor positions are never ambiguous.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "dpe")]
    Rating,
    #[serde(rename = "city")]
    City,
    #[serde(rename = "constructionYear")]
    ConstructionYear,
}

impl SortField {
    /// Fields a caller may select explicitly, in their wire spelling.
    pub const SELECTABLE: [Self; 4] = [Self::Name, Self::Rating, Self::City, Self::ConstructionYear];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Rating => "dpe",
            Self::City => "city",
            Self::ConstructionYear => "constructionYear",
        }
    }

    /// Parse a selectable wire field name. `id` is not selectable; it is
    /// only the order used when no field is given.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        Self::SELECTABLE
            .into_iter()
            .find(|field| field.as_str() == input)
    }

    /// Comma-separated wire names of the selectable fields.
    #[must_use]
    pub fn selectable_names() -> String {
        Self::SELECTABLE.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// SortValue
///
/// Primary-field value captured from one record, as carried by a cursor.
/// Text fields keep the record's spelling and are folded only when compared;
/// ratings store the grade label.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SortValue {
    Text(String),
    Int(i64),
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

///
/// OrderKey
///
/// Comparable projection of one primary-field value.
/// Records and cursor anchors both project into this shape, so sorting and
/// resume use one comparison.
///

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) enum OrderKey<'a> {
    Text(Cow<'a, str>),
    Int(i64),
    Rating(Option<Rating>),
}

/// Capture the primary-field value a cursor anchored on `building` carries.
#[must_use]
pub fn sort_value(building: &Building, field: SortField) -> SortValue {
    match field {
        SortField::Id => SortValue::Text(building.id.clone()),
        SortField::Name => SortValue::Text(building.name.clone()),
        SortField::City => SortValue::Text(building.city.clone()),
        SortField::ConstructionYear => SortValue::Int(building.construction_year),
        SortField::Rating => SortValue::Text(building.dpe.clone()),
    }
}

// Project one record onto its primary order key.
pub(crate) fn order_key<'a>(
    building: &'a Building,
    field: SortField,
    scale: &RatingScale,
) -> OrderKey<'a> {
    match field {
        SortField::Id => OrderKey::Text(Cow::Borrowed(&building.id)),
        SortField::Name => OrderKey::Text(casefold(&building.name)),
        SortField::City => OrderKey::Text(casefold(&building.city)),
        SortField::ConstructionYear => OrderKey::Int(building.construction_year),
        SortField::Rating => OrderKey::Rating(scale.rating(building.rating_label())),
    }
}

// Project a cursor value onto the order key of `field`.
// Returns `None` when the value's shape cannot belong to that field.
pub(crate) fn anchor_key<'a>(
    value: &'a SortValue,
    field: SortField,
    scale: &RatingScale,
) -> Option<OrderKey<'a>> {
    match (field, value) {
        (SortField::Id, SortValue::Text(text)) => Some(OrderKey::Text(Cow::Borrowed(text))),
        (SortField::Name | SortField::City, SortValue::Text(text)) => {
            Some(OrderKey::Text(casefold(text)))
        }
        (SortField::ConstructionYear, SortValue::Int(year)) => Some(OrderKey::Int(*year)),
        (SortField::Rating, SortValue::Text(label)) => Some(OrderKey::Rating(scale.rating(label))),
        _ => None,
    }
}

/// Compare two records under `field`, tie-breaking on id.
///
/// Unrecognized ratings order before every recognized grade.
#[must_use]
pub fn compare_buildings(
    left: &Building,
    right: &Building,
    field: SortField,
    scale: &RatingScale,
) -> Ordering {
    order_key(left, field, scale)
        .cmp(&order_key(right, field, scale))
        .then_with(|| left.id.cmp(&right.id))
}

/// Stable in-place sort under the canonical order for `field`.
pub fn apply_order(rows: &mut [&Building], field: SortField, scale: &RatingScale) {
    rows.sort_by(|left, right| compare_buildings(left, right, field, scale));
}

///
/// TESTS
///
