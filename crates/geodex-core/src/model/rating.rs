use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

/// Energy-performance grades, best to worst.
pub const DPE_GRADES: [&str; 7] = ["A", "B", "C", "D", "E", "F", "G"];

///
/// RatingScaleError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum RatingScaleError {
    #[error("rating scale must contain at least one grade")]
    Empty,

    #[error("rating scale grade at position {position} is empty")]
    EmptyLabel { position: usize },

    #[error("rating scale grade '{label}' appears more than once")]
    DuplicateLabel { label: String },
}

///
/// Rating
///
/// Ordinal position of one grade within a [`RatingScale`].
/// Lower positions are better; ordering never looks at label text.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rating(usize);

impl Rating {
    #[must_use]
    pub const fn position(self) -> usize {
        self.0
    }

    /// Whether this grade is at least as good as `bound`.
    #[must_use]
    pub fn at_least_as_good_as(self, bound: Self) -> bool {
        self <= bound
    }

    /// Whether this grade is at least as bad as `bound`.
    #[must_use]
    pub fn at_least_as_bad_as(self, bound: Self) -> bool {
        self >= bound
    }
}

///
/// RatingScale
///
/// Fixed total order over categorical grades, best to worst.
/// The default is the seven-grade energy-performance scale; a relabeled
/// scale orders by position exactly the same way.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RatingScale {
    labels: Vec<String>,
}

impl RatingScale {
    /// Build a scale from labels listed best to worst.
    pub fn new<I, S>(labels: I) -> Result<Self, RatingScaleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();

        if labels.is_empty() {
            return Err(RatingScaleError::Empty);
        }
        for (position, label) in labels.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(RatingScaleError::EmptyLabel { position });
            }
            if labels[..position].contains(label) {
                return Err(RatingScaleError::DuplicateLabel {
                    label: label.clone(),
                });
            }
        }

        Ok(Self { labels })
    }

    /// Resolve a label to its ordinal position, if it belongs to the scale.
    #[must_use]
    pub fn rating(&self, label: &str) -> Option<Rating> {
        self.labels.iter().position(|l| l == label).map(Rating)
    }

    /// Borrow the label at one ordinal position.
    #[must_use]
    pub fn label(&self, rating: Rating) -> Option<&str> {
        self.labels.get(rating.0).map(String::as_str)
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            labels: DPE_GRADES.iter().map(|g| (*g).to_string()).collect(),
        }
    }
}

impl fmt::Display for RatingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels.join(", "))
    }
}

impl TryFrom<Vec<String>> for RatingScale {
    type Error = RatingScaleError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<RatingScale> for Vec<String> {
    fn from(scale: RatingScale) -> Self {
        scale.labels
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_is_energy_grades_best_to_worst() {
        let scale = RatingScale::default();

        assert_eq!(scale.len(), 7);
        assert_eq!(scale.to_string(), "A, B, C, D, E, F, G");
        assert!(scale.rating("A") < scale.rating("G"));
        assert_eq!(scale.rating("H"), None);
        assert_eq!(scale.rating("a"), None);
    }

    #[test]
    fn relabeled_scale_orders_by_position_not_text() {
        let scale = RatingScale::new(["Z", "Q", "M", "B"]).expect("scale should build");
        let best = scale.rating("Z").expect("Z is on the scale");
        let worst = scale.rating("B").expect("B is on the scale");

        assert!(best < worst);
        assert!(best.at_least_as_good_as(worst));
        assert!(worst.at_least_as_bad_as(best));
        assert_eq!(scale.label(best), Some("Z"));
    }

    #[test]
    fn new_rejects_empty_and_duplicate_labels() {
        assert_eq!(
            RatingScale::new(Vec::<String>::new()),
            Err(RatingScaleError::Empty)
        );
        assert_eq!(
            RatingScale::new(["A", " "]),
            Err(RatingScaleError::EmptyLabel { position: 1 })
        );
        assert_eq!(
            RatingScale::new(["A", "B", "A"]),
            Err(RatingScaleError::DuplicateLabel {
                label: "A".to_string()
            })
        );
    }
}
