//! Resolved style values exchanged with the cascade evaluator.
//!
//! The cascade hands styles over as maps from property name to a resolved
//! value. Colors frequently arrive as canonical strings (`#ff8800`,
//! `rgba(255, 136, 0, 0.5)`, named colors), so [`StyleValue::as_color`]
//! coerces keyword text through the CSS color parser on demand.

use csscolorparser::Color as CssColor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

const NUMBER_EPSILON: f64 = 1e-6;
const COLOR_EPSILON: f32 = 1e-3;

/// A resolved style value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StyleValue {
    /// Numeric value (opacity, width, height, ...).
    Number { value: f64 },
    /// RGBA color components in the 0..=1 range.
    Color { rgba: [f32; 4] },
    /// Any other resolved value, kept as text.
    Keyword { value: String },
}

impl StyleValue {
    /// Try to extract a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number { value } => Some(*value),
            _ => None,
        }
    }

    /// Try to view this value as an RGBA color.
    ///
    /// `Keyword` text is run through the CSS color parser, so canonical
    /// color strings coerce transparently.
    pub fn as_color(&self) -> Option<[f32; 4]> {
        match self {
            Self::Color { rgba } => Some(*rgba),
            Self::Keyword { value } => parse_css_color(value),
            Self::Number { .. } => None,
        }
    }

    /// Try to extract keyword text.
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Self::Keyword { value } => Some(value),
            _ => None,
        }
    }

    /// Type-aware approximate equality.
    ///
    /// Numbers and colors compare within a small epsilon; everything else
    /// falls back to exact equality. A keyword that spells a color compares
    /// as a color, so `#ff0000` matches `rgb(255,0,0)`.
    pub fn approx_matches(&self, other: &StyleValue) -> bool {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            return (a - b).abs() < NUMBER_EPSILON;
        }
        if let (Some(a), Some(b)) = (self.as_color(), other.as_color()) {
            return colors_approx_eq(a, b);
        }
        self == other
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number { value }
    }
}

impl From<f32> for StyleValue {
    fn from(value: f32) -> Self {
        Self::Number {
            value: value as f64,
        }
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Number {
            value: value as f64,
        }
    }
}

impl From<[f32; 4]> for StyleValue {
    fn from(rgba: [f32; 4]) -> Self {
        Self::Color { rgba }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Keyword {
            value: value.to_string(),
        }
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Keyword { value }
    }
}

/// Parse CSS color text into RGBA components.
pub fn parse_css_color(raw: &str) -> Option<[f32; 4]> {
    let v = raw.trim();
    if v.is_empty() {
        return None;
    }
    CssColor::from_str(v)
        .ok()
        .map(|c| [c.r as f32, c.g as f32, c.b as f32, c.a as f32])
}

fn colors_approx_eq(a: [f32; 4], b: [f32; 4]) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x - y).abs() < COLOR_EPSILON)
}

/// A snapshot of resolved style values keyed by property name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMap {
    /// Property values at the time of snapshot.
    pub values: HashMap<String, StyleValue>,
}

impl StyleMap {
    /// Create a new empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.values.insert(property.into(), value.into());
    }

    /// Get a property value.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.values.get(property)
    }

    /// Check if the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the number of properties in the snapshot.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over all property-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let v: StyleValue = 0.5.into();
        assert_eq!(v.as_number(), Some(0.5));
        assert_eq!(v.as_color(), None);

        let v: StyleValue = [1.0, 0.5, 0.0, 1.0].into();
        assert_eq!(v.as_color(), Some([1.0, 0.5, 0.0, 1.0]));
        assert_eq!(v.as_number(), None);

        let v: StyleValue = "bold".into();
        assert_eq!(v.as_keyword(), Some("bold"));
        assert_eq!(v.as_number(), None);
    }

    #[test]
    fn test_keyword_color_coercion() {
        let v = StyleValue::from("#ff0000");
        let rgba = v.as_color().unwrap();
        assert!((rgba[0] - 1.0).abs() < 1e-4);
        assert!(rgba[1].abs() < 1e-4);
        assert!(rgba[2].abs() < 1e-4);
        assert!((rgba[3] - 1.0).abs() < 1e-4);

        assert!(StyleValue::from("rgba(0, 255, 0, 0.5)").as_color().is_some());
        assert!(StyleValue::from("rebeccapurple").as_color().is_some());
        assert!(StyleValue::from("bold").as_color().is_none());
    }

    #[test]
    fn test_approx_matches_numbers() {
        let a = StyleValue::from(0.5);
        assert!(a.approx_matches(&StyleValue::from(0.5)));
        assert!(a.approx_matches(&StyleValue::from(0.5 + 1e-9)));
        assert!(!a.approx_matches(&StyleValue::from(0.6)));
    }

    #[test]
    fn test_approx_matches_colors_across_spellings() {
        let hex = StyleValue::from("#ff0000");
        let func = StyleValue::from("rgb(255, 0, 0)");
        let components = StyleValue::from([1.0, 0.0, 0.0, 1.0]);

        assert!(hex.approx_matches(&func));
        assert!(hex.approx_matches(&components));
        assert!(!hex.approx_matches(&StyleValue::from("#00ff00")));
    }

    #[test]
    fn test_approx_matches_keywords_and_mismatches() {
        let bold = StyleValue::from("bold");
        assert!(bold.approx_matches(&StyleValue::from("bold")));
        assert!(!bold.approx_matches(&StyleValue::from("normal")));

        // Different kinds never match.
        assert!(!StyleValue::from(1.0).approx_matches(&StyleValue::from("#ffffff")));
    }

    #[test]
    fn test_style_map() {
        let mut map = StyleMap::new();
        assert!(map.is_empty());

        map.set("opacity", 0.5);
        map.set("background-color", "#336699");
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("opacity").and_then(StyleValue::as_number), Some(0.5));
        assert!(map.get("background-color").unwrap().as_color().is_some());
        assert!(map.get("width").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let value = StyleValue::Color {
            rgba: [1.0, 0.5, 0.0, 1.0],
        };
        let json = serde_json::to_string(&value).unwrap();
        assert!(json.contains("\"color\""));
        let parsed: StyleValue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        let mut map = StyleMap::new();
        map.set("opacity", 0.5);
        let json = serde_json::to_string(&map).unwrap();
        let parsed: StyleMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);
    }
}
