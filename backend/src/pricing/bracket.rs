//! First-match bracket resolution
//!
//! Both bracketed tables (diamond carat ranges and colored-gem weight ranges)
//! resolve the same way: walk candidates in a fixed order and take the first
//! one containing the size. A miss is `None`; callers decide the fail-soft
//! default.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A numeric range that can select a price tier
pub trait Bracket {
    /// True when `size` falls inside this bracket
    fn contains(&self, size: f64) -> bool;

    /// Display key, e.g. `"0.30-0.49"` or `"<1"`
    fn label(&self) -> String;
}

/// Return the first bracket containing `size`, in iteration order.
pub fn first_match<'a, B, I>(brackets: I, size: f64) -> Option<&'a B>
where
    B: Bracket + 'a,
    I: IntoIterator<Item = &'a B>,
{
    brackets.into_iter().find(|b| b.contains(size))
}

// ============================================================================
// Carat brackets (diamond table)
// ============================================================================

/// Closed carat range `min ≤ c ≤ max` with a display key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaratBracket {
    pub key: String,
    pub min: f64,
    pub max: f64,
}

impl CaratBracket {
    pub fn new(key: &str, min: f64, max: f64) -> Self {
        Self {
            key: key.to_string(),
            min,
            max,
        }
    }
}

impl Bracket for CaratBracket {
    fn contains(&self, size: f64) -> bool {
        size >= self.min && size <= self.max
    }

    fn label(&self) -> String {
        self.key.clone()
    }
}

// ============================================================================
// Weight brackets (specific-color gem table)
// ============================================================================

/// Errors parsing a weight bracket key
#[derive(Debug, Error, PartialEq)]
pub enum BracketParseError {
    #[error("Empty weight bracket key")]
    Empty,

    #[error("Invalid bound '{0}' in weight bracket key")]
    InvalidBound(String),

    #[error("Weight bracket '{0}' must be '<limit' or 'min-max'")]
    UnknownForm(String),

    #[error("Weight bracket minimum {min} exceeds maximum {max}")]
    Inverted { min: f64, max: f64 },
}

/// Per-stone weight range, written `"<1"` (open-ended, strict) or
/// `"1-1.5"` (closed, both ends inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WeightBracket {
    Below { limit: f64 },
    Between { min: f64, max: f64 },
}

impl WeightBracket {
    /// Lower edge used to order brackets ascending
    pub fn lower_bound(&self) -> f64 {
        match self {
            WeightBracket::Below { .. } => f64::NEG_INFINITY,
            WeightBracket::Between { min, .. } => *min,
        }
    }
}

impl Bracket for WeightBracket {
    fn contains(&self, size: f64) -> bool {
        match *self {
            WeightBracket::Below { limit } => size < limit,
            WeightBracket::Between { min, max } => size >= min && size <= max,
        }
    }

    fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeightBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightBracket::Below { limit } => write!(f, "<{}", limit),
            WeightBracket::Between { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

impl std::str::FromStr for WeightBracket {
    type Err = BracketParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(BracketParseError::Empty);
        }

        let parse_bound = |s: &str| -> Result<f64, BracketParseError> {
            s.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| BracketParseError::InvalidBound(s.trim().to_string()))
        };

        if let Some(limit) = key.strip_prefix('<') {
            return Ok(WeightBracket::Below {
                limit: parse_bound(limit)?,
            });
        }

        match key.split_once('-') {
            Some((min, max)) => {
                let (min, max) = (parse_bound(min)?, parse_bound(max)?);
                if min > max {
                    return Err(BracketParseError::Inverted { min, max });
                }
                Ok(WeightBracket::Between { min, max })
            }
            None => Err(BracketParseError::UnknownForm(key.to_string())),
        }
    }
}

impl TryFrom<String> for WeightBracket {
    type Error = BracketParseError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<WeightBracket> for String {
    fn from(bracket: WeightBracket) -> Self {
        bracket.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weight_brackets() {
        assert_eq!("<1".parse::<WeightBracket>(), Ok(WeightBracket::Below { limit: 1.0 }));
        assert_eq!(
            "1.5-2".parse::<WeightBracket>(),
            Ok(WeightBracket::Between { min: 1.5, max: 2.0 })
        );
        assert_eq!("".parse::<WeightBracket>(), Err(BracketParseError::Empty));
        assert_eq!(
            "2".parse::<WeightBracket>(),
            Err(BracketParseError::UnknownForm("2".to_string()))
        );
        assert_eq!(
            "3-2".parse::<WeightBracket>(),
            Err(BracketParseError::Inverted { min: 3.0, max: 2.0 })
        );
        assert!(matches!(
            "<x".parse::<WeightBracket>(),
            Err(BracketParseError::InvalidBound(_))
        ));
    }

    #[test]
    fn test_weight_bracket_label_round_trip() {
        let b: WeightBracket = "1-1.5".parse().unwrap();
        assert_eq!(b.label(), "1-1.5");
        assert_eq!(WeightBracket::Below { limit: 1.0 }.label(), "<1");
    }

    #[test]
    fn test_below_is_strict_between_is_inclusive() {
        let below = WeightBracket::Below { limit: 1.0 };
        assert!(below.contains(0.99));
        assert!(!below.contains(1.0));

        let between = WeightBracket::Between { min: 1.0, max: 1.5 };
        assert!(between.contains(1.0));
        assert!(between.contains(1.5));
        assert!(!between.contains(1.51));
    }

    #[test]
    fn test_first_match_takes_earliest() {
        let brackets = vec![
            CaratBracket::new("a", 0.0, 1.0),
            CaratBracket::new("b", 0.5, 2.0),
        ];
        assert_eq!(first_match(&brackets, 0.75).map(|b| b.key.as_str()), Some("a"));
        assert_eq!(first_match(&brackets, 1.5).map(|b| b.key.as_str()), Some("b"));
        assert!(first_match(&brackets, 3.0).is_none());
    }
}
