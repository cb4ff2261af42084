//! Validation of generation requests.
//!
//! These functions are pure: they turn raw text or integers into validated
//! values or a rejection reason. Re-prompting is the caller's concern.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted total node count.
pub const MIN_TOTAL_NODES: u32 = 10;
/// Largest accepted total node count.
pub const MAX_TOTAL_NODES: u32 = 2000;
/// Largest accepted per-node degree.
pub const MAX_DEGREE: u32 = 3;

/// Reason a raw input value was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("'{0}' is not a valid integer")]
    NotNumeric(String),
    #[error("{value} is outside the accepted range {min}..={max}")]
    OutOfRange { value: i64, min: u32, max: u32 },
    #[error("{value} is odd; the total node count must be even")]
    Odd { value: u32 },
}

/// Total number of nodes (entities plus activities). Always even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TotalNodes(u32);

impl TotalNodes {
    pub fn new(value: u32) -> Result<Self, InputRejection> {
        if !(MIN_TOTAL_NODES..=MAX_TOTAL_NODES).contains(&value) {
            return Err(InputRejection::OutOfRange {
                value: i64::from(value),
                min: MIN_TOTAL_NODES,
                max: MAX_TOTAL_NODES,
            });
        }
        if value % 2 != 0 {
            return Err(InputRejection::Odd { value });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Size of each partite set: entities and activities are equally many.
    pub fn partite_size(self) -> usize {
        (self.0 / 2) as usize
    }
}

impl TryFrom<u32> for TotalNodes {
    type Error = InputRejection;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TotalNodes> for u32 {
    fn from(value: TotalNodes) -> Self {
        value.0
    }
}

impl fmt::Display for TotalNodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Number of relations attached to every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Degree(u32);

impl Degree {
    pub fn new(value: u32) -> Result<Self, InputRejection> {
        if value > MAX_DEGREE {
            return Err(InputRejection::OutOfRange {
                value: i64::from(value),
                min: 0,
                max: MAX_DEGREE,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u32> for Degree {
    type Error = InputRejection;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Degree> for u32 {
    fn from(value: Degree) -> Self {
        value.0
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationInputs {
    pub total_nodes: TotalNodes,
    pub degree: Degree,
}

impl GenerationInputs {
    pub fn new(total_nodes: TotalNodes, degree: Degree) -> Self {
        Self {
            total_nodes,
            degree,
        }
    }

    pub fn partite_size(&self) -> usize {
        self.total_nodes.partite_size()
    }
}

/// Parse a raw total node count.
pub fn parse_total_nodes(raw: &str) -> Result<TotalNodes, InputRejection> {
    let value = parse_integer(raw)?;
    let value = u32::try_from(value).map_err(|_| InputRejection::OutOfRange {
        value,
        min: MIN_TOTAL_NODES,
        max: MAX_TOTAL_NODES,
    })?;
    TotalNodes::new(value)
}

/// Parse a raw degree.
pub fn parse_degree(raw: &str) -> Result<Degree, InputRejection> {
    let value = parse_integer(raw)?;
    let value = u32::try_from(value).map_err(|_| InputRejection::OutOfRange {
        value,
        min: 0,
        max: MAX_DEGREE,
    })?;
    Degree::new(value)
}

fn parse_integer(raw: &str) -> Result<i64, InputRejection> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputRejection::NotNumeric(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_even_counts_within_bounds() {
        assert_eq!(parse_total_nodes("10").map(TotalNodes::get), Ok(10));
        assert_eq!(parse_total_nodes(" 2000\n").map(TotalNodes::get), Ok(2000));
        assert_eq!(
            parse_total_nodes("20").map(TotalNodes::partite_size),
            Ok(10)
        );
    }

    #[test]
    fn rejects_total_nodes_with_reason() {
        assert_eq!(
            parse_total_nodes("abc"),
            Err(InputRejection::NotNumeric("abc".to_string()))
        );
        assert_eq!(
            parse_total_nodes("8"),
            Err(InputRejection::OutOfRange {
                value: 8,
                min: 10,
                max: 2000
            })
        );
        assert_eq!(
            parse_total_nodes("-4"),
            Err(InputRejection::OutOfRange {
                value: -4,
                min: 10,
                max: 2000
            })
        );
        assert_eq!(parse_total_nodes("11"), Err(InputRejection::Odd { value: 11 }));
        assert!(matches!(
            parse_total_nodes("12.0"),
            Err(InputRejection::NotNumeric(_))
        ));
    }

    #[test]
    fn degree_is_bounded() {
        assert_eq!(parse_degree("0").map(Degree::get), Ok(0));
        assert_eq!(parse_degree("3").map(Degree::get), Ok(3));
        assert_eq!(
            parse_degree("4"),
            Err(InputRejection::OutOfRange {
                value: 4,
                min: 0,
                max: 3
            })
        );
        assert!(matches!(parse_degree(""), Err(InputRejection::NotNumeric(_))));
    }

    #[test]
    fn inputs_deserialize_through_validation() {
        let inputs: GenerationInputs =
            serde_json::from_str(r#"{"total_nodes":20,"degree":2}"#).expect("valid inputs");
        assert_eq!(inputs.partite_size(), 10);

        let invalid: Result<GenerationInputs, _> =
            serde_json::from_str(r#"{"total_nodes":21,"degree":2}"#);
        assert!(invalid.is_err());
    }
}
