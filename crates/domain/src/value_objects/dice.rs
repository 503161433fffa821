//! Dice expressions for hit-point rolls
//!
//! Supports expressions like "4d6+2", "2d8-1", "3d10". The expression is only
//! ever used to preview the expected hit points; the stored HP value is
//! entered separately.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error when parsing a dice expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The expression string is empty
    #[error("Empty dice expression")]
    Empty,
    /// Invalid format - expected XdY or XdY+Z
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    /// Die size must be at least 2
    #[error("Die size must be at least 2")]
    InvalidDieSize,
}

/// A parsed dice expression like "4d6+2"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpression {
    /// Number of dice to roll (X in XdY)
    pub count: u32,
    /// Size of each die (Y in XdY)
    pub sides: u32,
    /// Flat modifier added after rolling
    pub modifier: i32,
}

impl DiceExpression {
    /// Create a new dice expression
    pub fn new(count: u32, sides: u32, modifier: i32) -> Result<Self, DiceParseError> {
        if count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if sides < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        Ok(Self {
            count,
            sides,
            modifier,
        })
    }

    /// Parse an expression like "4d6", "4d6+2" or "4d6-2"
    ///
    /// An explicit dice count is required; a sign with no digits after it
    /// counts as a zero modifier.
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = input.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let count_str = &input[..d_pos];
        let count: u32 = count_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", count_str))
        })?;

        let after_d = &input[d_pos + 1..];
        let sign_pos = after_d.find(['+', '-']);
        let (sides_str, modifier) = match sign_pos {
            Some(pos) => {
                let negative = after_d.as_bytes()[pos] == b'-';
                let mod_str = after_d[pos + 1..].trim_start_matches('-');
                let magnitude: i32 = if mod_str.is_empty() {
                    0
                } else {
                    mod_str.parse().map_err(|_| {
                        DiceParseError::InvalidFormat(format!("Invalid modifier: '{}'", mod_str))
                    })?
                };
                (
                    &after_d[..pos],
                    if negative { -magnitude } else { magnitude },
                )
            }
            None => (after_d, 0),
        };

        let sides: u32 = sides_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", sides_str))
        })?;

        Self::new(count, sides, modifier)
    }

    /// Lowest possible total
    pub fn min(&self) -> i64 {
        i64::from(self.count) + i64::from(self.modifier)
    }

    /// Highest possible total
    pub fn max(&self) -> i64 {
        i64::from(self.count) * i64::from(self.sides) + i64::from(self.modifier)
    }

    /// Expected total, rounded down the way stat blocks print it
    pub fn average(&self) -> i64 {
        // (sides + 1) / 2 per die, summed before halving
        (i64::from(self.count) * (i64::from(self.sides) + 1)) / 2 + i64::from(self.modifier)
    }
}

impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifier == 0 {
            write!(f, "{}d{}", self.count, self.sides)
        } else if self.modifier > 0 {
            write!(f, "{}d{}+{}", self.count, self.sides, self.modifier)
        } else {
            write!(f, "{}d{}{}", self.count, self.sides, self.modifier)
        }
    }
}
