//! Postal address entity.

use serde::{Deserialize, Serialize};

/// Postal address referenced by a user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Direction {
    pub id: Option<i64>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub neighborhood: Option<String>,
    pub apartment: Option<String>,
    pub additional_info: Option<String>,
    pub postal_code: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Direction {
    /// Latitude and longitude, only when both are known
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
