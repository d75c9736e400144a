use serde::{Deserialize, Serialize};

///
/// Building
///
/// One geocoded record as supplied by the data provider.
/// Records are read-only for the lifetime of a query; the rating is kept as
/// its raw label so unrecognized grades survive loading.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub usage: String,
    pub dpe: String,
    pub lat: f64,
    pub lng: f64,
    pub surface: f64,
    pub floors: u32,
    pub construction_year: i64,
}

impl Building {
    /// Borrow the raw rating label.
    #[must_use]
    pub fn rating_label(&self) -> &str {
        &self.dpe
    }

    /// Return `(lng, lat)` in GeoJSON coordinate order.
    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        (self.lng, self.lat)
    }
}

///
/// TESTS
///
