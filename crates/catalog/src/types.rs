//! Record model for catalog entries.
//!
//! A [`WineRecord`] is one read-only catalog entry. The serde field names
//! follow the catalog's JSON form (`wine_name`, `wine_type`, `price_krw`, ...)
//! so a catalog export deserializes directly.
//!
//! ```text
//! WineRecord
//! ├── name: String            ("wine_name", not unique)
//! ├── wine_type: String
//! ├── country: String
//! ├── subregion: String
//! ├── grape_or_style: String
//! ├── vintage: Option<i32>
//! ├── alcohol: Option<f32>    (percent, open-ended)
//! ├── tannin: Option<f32>     (1-5)
//! ├── sweetness: Option<f32>  (1-5)
//! ├── acidity: Option<f32>    (1-5)
//! ├── body: Option<f32>       (1-5)
//! ├── price: Option<u64>      ("price_krw", open-ended)
//! └── aromas: Vec<String>
//! ```
//!
//! Every numeric attribute is independently optional. `None` means "no value
//! recorded", never zero. A JSON `null` in a text or aroma field decodes as
//! empty.
use serde::{Deserialize, Deserializer, Serialize};

/// Lower bound of the tasting profile scale.
pub const PROFILE_MIN: f32 = 1.0;
/// Upper bound of the tasting profile scale.
pub const PROFILE_MAX: f32 = 5.0;

/// One catalog entry.
///
/// # Examples
///
/// ```rust
/// use catalog::WineRecord;
///
/// let wine = WineRecord::new("Casillero del Diablo")
///     .with_country("Chile")
///     .with_subregion("Central Valley")
///     .with_vintage(2020)
///     .with_price(18_000)
///     .with_aromas(["cherry", "vanilla"]);
///
/// assert_eq!(wine.country, "Chile");
/// assert_eq!(wine.tannin, None);
/// assert!(wine.has_aroma("vanilla"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WineRecord {
    #[serde(rename = "wine_name")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wine_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subregion: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grape_or_style: String,
    #[serde(default)]
    pub vintage: Option<i32>,
    #[serde(default)]
    pub alcohol: Option<f32>,
    #[serde(default)]
    pub tannin: Option<f32>,
    #[serde(default)]
    pub sweetness: Option<f32>,
    #[serde(default)]
    pub acidity: Option<f32>,
    #[serde(default)]
    pub body: Option<f32>,
    #[serde(rename = "price_krw", default)]
    pub price: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aromas: Vec<String>,
}

impl WineRecord {
    /// Create a record with only a name; every other attribute is empty or absent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_wine_type(mut self, wine_type: impl Into<String>) -> Self {
        self.wine_type = wine_type.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_subregion(mut self, subregion: impl Into<String>) -> Self {
        self.subregion = subregion.into();
        self
    }

    pub fn with_grape(mut self, grape_or_style: impl Into<String>) -> Self {
        self.grape_or_style = grape_or_style.into();
        self
    }

    pub fn with_vintage(mut self, vintage: i32) -> Self {
        self.vintage = Some(vintage);
        self
    }

    pub fn with_alcohol(mut self, alcohol: f32) -> Self {
        self.alcohol = Some(alcohol);
        self
    }

    pub fn with_price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the tasting profile in `(tannin, sweetness, acidity, body)` order.
    pub fn with_profile(mut self, tannin: f32, sweetness: f32, acidity: f32, body: f32) -> Self {
        self.tannin = Some(tannin);
        self.sweetness = Some(sweetness);
        self.acidity = Some(acidity);
        self.body = Some(body);
        self
    }

    pub fn with_aromas<I, S>(mut self, aromas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aromas = aromas.into_iter().map(Into::into).collect();
        self
    }

    /// Exact, case-sensitive aroma membership.
    pub fn has_aroma(&self, aroma: &str) -> bool {
        self.aromas.iter().any(|a| a == aroma)
    }

    /// Clear numeric values that cannot be a real measurement.
    ///
    /// Profile values outside the 1-5 scale (catalog exports use `0` for
    /// "not rated") and negative or NaN alcohol become absent. Returns the
    /// names of the cleared fields.
    pub fn clear_unrated(&mut self) -> Vec<&'static str> {
        let mut cleared = Vec::new();
        for (field, value) in [
            ("tannin", &mut self.tannin),
            ("sweetness", &mut self.sweetness),
            ("acidity", &mut self.acidity),
            ("body", &mut self.body),
        ] {
            if value.is_some_and(|v| !(PROFILE_MIN..=PROFILE_MAX).contains(&v)) {
                *value = None;
                cleared.push(field);
            }
        }
        if self.alcohol.is_some_and(|a| a.is_nan() || a < 0.0) {
            self.alcohol = None;
            cleared.push("alcohol");
        }
        cleared
    }

    /// Check the record against the data model.
    ///
    /// Returns a human-readable reason for the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("wine_name empty".into());
        }
        let profile = [
            ("tannin", self.tannin),
            ("sweetness", self.sweetness),
            ("acidity", self.acidity),
            ("body", self.body),
        ];
        for (field, value) in profile {
            if let Some(v) = value {
                if !(PROFILE_MIN..=PROFILE_MAX).contains(&v) {
                    return Err(format!(
                        "{field} {v} outside {PROFILE_MIN}-{PROFILE_MAX} scale"
                    ));
                }
            }
        }
        if let Some(alcohol) = self.alcohol {
            if !(alcohol >= 0.0) {
                return Err(format!("alcohol {alcohol} must be a non-negative number"));
            }
        }
        Ok(())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_field_names() {
        let json = r#"{
            "wine_name": "Tignanello",
            "country": "Italy",
            "subregion": "Tuscany",
            "vintage": null,
            "wine_type": "Red",
            "grape_or_style": "Sangiovese Blend",
            "alcohol": 14.0,
            "tannin": 4,
            "sweetness": 1,
            "acidity": 4,
            "body": 4,
            "aromas": ["cherry", "leather"],
            "price_krw": 230000
        }"#;
        let wine: WineRecord = serde_json::from_str(json).expect("record decodes");
        assert_eq!(wine.name, "Tignanello");
        assert_eq!(wine.vintage, None);
        assert_eq!(wine.price, Some(230_000));
        assert_eq!(wine.tannin, Some(4.0));
        assert_eq!(wine.aromas, vec!["cherry", "leather"]);
    }

    #[test]
    fn missing_optional_fields_default_to_absent() {
        let wine: WineRecord =
            serde_json::from_str(r#"{"wine_name": "Mystery"}"#).expect("record decodes");
        assert_eq!(wine, WineRecord::new("Mystery"));
        assert!(wine.aromas.is_empty());
    }

    #[test]
    fn null_text_and_aromas_decode_as_empty() {
        let json = r#"{
            "wine_name": "Cuvee",
            "wine_type": null,
            "country": "France",
            "subregion": null,
            "grape_or_style": null,
            "aromas": null
        }"#;
        let wine: WineRecord = serde_json::from_str(json).expect("record decodes");
        assert_eq!(wine, WineRecord::new("Cuvee").with_country("France"));
    }

    #[test]
    fn clear_unrated_drops_out_of_scale_values() {
        let mut wine = WineRecord::new("Unrated")
            .with_profile(0.0, 2.0, 7.5, 3.0)
            .with_alcohol(-1.0);
        assert_eq!(wine.clear_unrated(), vec!["tannin", "acidity", "alcohol"]);
        assert_eq!(wine.tannin, None);
        assert_eq!(wine.sweetness, Some(2.0));
        assert_eq!(wine.acidity, None);
        assert_eq!(wine.alcohol, None);
        assert!(wine.validate().is_ok());
        assert!(wine.clear_unrated().is_empty());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let err = WineRecord::new("   ").validate().unwrap_err();
        assert!(err.contains("wine_name"));
    }

    #[test]
    fn validate_rejects_out_of_scale_profile() {
        let wine = WineRecord::new("Loud").with_profile(6.0, 1.0, 1.0, 1.0);
        let err = wine.validate().unwrap_err();
        assert!(err.contains("tannin"));
    }

    #[test]
    fn validate_rejects_nan_alcohol() {
        let wine = WineRecord::new("Odd").with_alcohol(f32::NAN);
        assert!(wine.validate().is_err());
    }

    #[test]
    fn validate_accepts_sparse_record() {
        assert!(WineRecord::new("Sparse").validate().is_ok());
    }
}
