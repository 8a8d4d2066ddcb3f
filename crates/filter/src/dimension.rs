use std::fmt;

use serde::{Deserialize, Serialize};

/// One attribute axis a predicate is evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Price,
    WineType,
    Country,
    Subregion,
    Vintage,
    Grape,
    Aroma,
    Tannin,
    Sweetness,
    Acidity,
    Body,
    Alcohol,
}

impl Dimension {
    /// Every dimension, in evaluation order.
    pub const ALL: [Dimension; 12] = [
        Dimension::Price,
        Dimension::WineType,
        Dimension::Country,
        Dimension::Subregion,
        Dimension::Vintage,
        Dimension::Grape,
        Dimension::Aroma,
        Dimension::Tannin,
        Dimension::Sweetness,
        Dimension::Acidity,
        Dimension::Body,
        Dimension::Alcohol,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Price => "price",
            Dimension::WineType => "wine_type",
            Dimension::Country => "country",
            Dimension::Subregion => "subregion",
            Dimension::Vintage => "vintage",
            Dimension::Grape => "grape",
            Dimension::Aroma => "aroma",
            Dimension::Tannin => "tannin",
            Dimension::Sweetness => "sweetness",
            Dimension::Acidity => "acidity",
            Dimension::Body => "body",
            Dimension::Alcohol => "alcohol",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
