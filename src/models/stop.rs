//! Delivery stop and priority class types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Coordinate;
use crate::error::{Result, RoutingError};

/// Priority class of a delivery stop.
///
/// Variants are declared in rank order, so the derived `Ord` sorts `High`
/// first.
///
/// # Examples
///
/// ```
/// use u_delivery::models::Priority;
///
/// let p: Priority = " High ".parse().unwrap();
/// assert_eq!(p, Priority::High);
/// assert_eq!(p.rank(), 1);
/// assert!(Priority::High < Priority::Low);
/// assert_eq!(Priority::Medium.to_string(), "medium");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Priority {
    /// Rank 1.
    High,
    /// Rank 2.
    Medium,
    /// Rank 3.
    Low,
}

impl Priority {
    /// Numeric rank; lower ranks are visited earlier.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// Lowercase label, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label does not name a [`Priority`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized priority label {0:?}")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("high") {
            Ok(Self::High)
        } else if label.eq_ignore_ascii_case("medium") {
            Ok(Self::Medium)
        } else if label.eq_ignore_ascii_case("low") {
            Ok(Self::Low)
        } else {
            Err(ParsePriorityError(s.to_string()))
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = ParsePriorityError;

    fn try_from(label: String) -> std::result::Result<Self, Self::Error> {
        label.parse()
    }
}

/// A single delivery stop.
///
/// The priority is kept as the label the caller supplied; it is resolved
/// to a [`Priority`] when stops are ordered, so that a bad label surfaces
/// as [`RoutingError::InvalidPriority`] naming this stop.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, Priority, Stop};
///
/// let origin = Coordinate::new(0.0, 0.0).unwrap();
/// let s = Stop::new("A", Priority::High, origin);
/// assert_eq!(s.id(), "A");
/// assert_eq!(s.priority().unwrap(), Priority::High);
///
/// let bad = Stop::with_label("B", "urgent", origin);
/// assert!(bad.priority().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: String,
    priority: String,
    coordinate: Coordinate,
}

impl Stop {
    /// Creates a stop with a known priority class.
    pub fn new(id: impl Into<String>, priority: Priority, coordinate: Coordinate) -> Self {
        Self::with_label(id, priority.as_str(), coordinate)
    }

    /// Creates a stop from a raw priority label, validated later.
    pub fn with_label(
        id: impl Into<String>,
        label: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            priority: label.into(),
            coordinate,
        }
    }

    /// Creates a stop identified by its zero-based input position
    /// (`"Delivery 1"`, `"Delivery 2"`, ...).
    pub fn numbered(index: usize, label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self::with_label(format!("Delivery {}", index + 1), label, coordinate)
    }

    /// Identifier, used only for traceability.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The priority label as supplied.
    pub fn label(&self) -> &str {
        &self.priority
    }

    /// Position of this stop.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Resolves the label to a [`Priority`].
    pub fn priority(&self) -> Result<Priority> {
        self.priority
            .parse()
            .map_err(|_| RoutingError::InvalidPriority {
                stop_id: self.id.clone(),
                label: self.priority.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn origin() -> Coordinate {
        Coordinate::new(0.0, 0.0).expect("valid")
    }

    #[rstest]
    #[case("high", Priority::High)]
    #[case("HIGH", Priority::High)]
    #[case(" Medium ", Priority::Medium)]
    #[case("low", Priority::Low)]
    #[case("LoW", Priority::Low)]
    fn test_parse_labels(#[case] label: &str, #[case] expected: Priority) {
        assert_eq!(label.parse::<Priority>(), Ok(expected));
    }

    #[rstest]
    #[case("urgent")]
    #[case("")]
    #[case("hi")]
    #[case("1")]
    fn test_parse_rejects(#[case] label: &str) {
        assert_eq!(
            label.parse::<Priority>(),
            Err(ParsePriorityError(label.to_string()))
        );
    }

    #[test]
    fn test_rank_order() {
        assert_eq!(Priority::High.rank(), 1);
        assert_eq!(Priority::Medium.rank(), 2);
        assert_eq!(Priority::Low.rank(), 3);
        let mut ps = vec![Priority::Low, Priority::High, Priority::Medium];
        ps.sort();
        assert_eq!(ps, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn test_display_round_trip() {
        for p in [Priority::High, Priority::Medium, Priority::Low] {
            assert_eq!(p.to_string().parse::<Priority>(), Ok(p));
        }
    }

    #[test]
    fn test_stop_invalid_priority_names_stop() {
        let s = Stop::with_label("Delivery 4", "urgent", origin());
        assert_eq!(
            s.priority(),
            Err(RoutingError::InvalidPriority {
                stop_id: "Delivery 4".into(),
                label: "urgent".into(),
            })
        );
    }

    #[test]
    fn test_numbered_ids() {
        let s = Stop::numbered(0, "low", origin());
        assert_eq!(s.id(), "Delivery 1");
        assert_eq!(s.label(), "low");
        assert_eq!(s.priority(), Ok(Priority::Low));
    }

    #[test]
    fn test_stop_serde_shape() {
        let s = Stop::new("A", Priority::Medium, origin());
        let json = serde_json::to_value(&s).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "id": "A", "priority": "medium", "coordinate": [0.0, 0.0] })
        );
    }

    #[test]
    fn test_priority_serde_lowercase() {
        let json = serde_json::to_string(&Priority::High).expect("serialize");
        assert_eq!(json, "\"high\"");
    }

    #[rstest]
    #[case("\"high\"", Priority::High)]
    #[case("\"HIGH\"", Priority::High)]
    #[case("\" Medium \"", Priority::Medium)]
    #[case("\"LoW\"", Priority::Low)]
    fn test_priority_deserializes_like_parse(#[case] json: &str, #[case] expected: Priority) {
        let p: Priority = serde_json::from_str(json).expect("deserialize");
        assert_eq!(p, expected);
    }

    #[test]
    fn test_priority_deserialize_rejects_unknown() {
        let err = serde_json::from_str::<Priority>("\"urgent\"").expect_err("unknown label");
        assert!(err.to_string().contains("urgent"));
    }
}
