use crate::{db::order::SortField, model::building::Building};

/// Payload ceiling every query accepts, whatever its records hold.
const MIN_PAYLOAD_BYTES: usize = 4 * 1024;

/// Upper bound on the token framing around the sort value and id: version,
/// field name, value tag, map keys and string length headers.
const FRAMING_BYTES: usize = 128;

///
/// TokenBudget
///
/// Size ceiling for cursor payloads accepted by one query, sized from the
/// records the query pages over. Any cursor minted from one of those records
/// fits the budget, however long its sort text or id.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TokenBudget {
    payload_bytes: usize,
}

impl TokenBudget {
    /// Budget that holds no matter which records a query sees.
    #[must_use]
    pub const fn floor() -> Self {
        Self {
            payload_bytes: MIN_PAYLOAD_BYTES,
        }
    }

    /// Budget large enough for a cursor anchored on any of `rows` under `field`.
    #[must_use]
    pub fn for_rows(rows: &[&Building], field: SortField) -> Self {
        let widest = rows
            .iter()
            .map(|building| anchor_bytes(building, field))
            .max()
            .unwrap_or(0);

        Self {
            payload_bytes: widest.saturating_add(FRAMING_BYTES).max(MIN_PAYLOAD_BYTES),
        }
    }

    #[must_use]
    pub const fn payload_bytes(self) -> usize {
        self.payload_bytes
    }

    /// Longest hex text that can carry a payload within budget.
    #[must_use]
    pub const fn text_len(self) -> usize {
        self.payload_bytes.saturating_mul(2)
    }
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self::floor()
    }
}

// Variable-length bytes an anchor on `building` carries.
fn anchor_bytes(building: &Building, field: SortField) -> usize {
    let value = match field {
        SortField::Id => building.id.len(),
        SortField::Name => building.name.len(),
        SortField::City => building.city.len(),
        SortField::Rating => building.dpe.len(),
        SortField::ConstructionYear => 0,
    };

    value.saturating_add(building.id.len())
}

///
/// TESTS
///
