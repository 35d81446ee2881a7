use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// One of the three residential units players live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum House {
    #[serde(rename = "Widdersdorf 1")]
    Widdersdorf1,
    #[serde(rename = "Widdersdorf 2")]
    Widdersdorf2,
    #[serde(rename = "Widdersdorf 3")]
    Widdersdorf3,
}

impl House {
    pub const ALL: [House; 3] = [House::Widdersdorf1, House::Widdersdorf2, House::Widdersdorf3];

    pub fn label(&self) -> &'static str {
        match self {
            House::Widdersdorf1 => "Widdersdorf 1",
            House::Widdersdorf2 => "Widdersdorf 2",
            House::Widdersdorf3 => "Widdersdorf 3",
        }
    }

    /// URL-friendly form, e.g. `widdersdorf-1`.
    pub fn slug(&self) -> &'static str {
        match self {
            House::Widdersdorf1 => "widdersdorf-1",
            House::Widdersdorf2 => "widdersdorf-2",
            House::Widdersdorf3 => "widdersdorf-3",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for House {
    type Err = String;

    /// Accepts the label (`Widdersdorf 2`), the slug (`widdersdorf-2`) or a
    /// bare house number (`2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        House::ALL
            .into_iter()
            .find(|h| {
                h.label().eq_ignore_ascii_case(trimmed)
                    || h.slug().eq_ignore_ascii_case(trimmed)
                    || h.label().ends_with(&format!(" {}", trimmed))
            })
            .ok_or_else(|| format!("Unknown house: {}", trimmed))
    }
}

// Bodies, query strings and paths all go through `FromStr`.
impl<'de> Deserialize<'de> for House {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_label_slug_and_number() {
        assert_eq!("Widdersdorf 1".parse::<House>(), Ok(House::Widdersdorf1));
        assert_eq!("widdersdorf-2".parse::<House>(), Ok(House::Widdersdorf2));
        assert_eq!("3".parse::<House>(), Ok(House::Widdersdorf3));
        assert!("Widdersdorf 4".parse::<House>().is_err());
        assert!("".parse::<House>().is_err());
    }

    #[test]
    fn test_deserialize_uses_the_same_forms() {
        let houses: Vec<House> =
            serde_json::from_str(r#"["Widdersdorf 1", "widdersdorf-2", "3"]"#).unwrap();
        assert_eq!(
            houses,
            vec![House::Widdersdorf1, House::Widdersdorf2, House::Widdersdorf3]
        );
        let err = serde_json::from_str::<House>(r#""Rodenkirchen""#).unwrap_err();
        assert!(err.to_string().contains("Unknown house: Rodenkirchen"));
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&House::Widdersdorf2).unwrap();
        assert_eq!(json, "\"Widdersdorf 2\"");
    }
}
