//! Hit-point roll input gate
//!
//! Text typed into the "HP Roll" field is only committed to the monster once
//! it looks like a dice expression. The pattern is deliberately unanchored:
//! `"abc2d6xyz"` passes, `"d6"` does not (the first `d` must not lead).

use std::sync::LazyLock;

use regex_lite::Regex;

use combat_companion_domain::{DiceExpression, DomainError};

static HP_ROLL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)d(\d+)(\+|\-*)(\d*)").expect("valid regex"));

/// Recognizer for dice-roll text such as `4d6+2`.
pub struct HitPointsRoll;

impl HitPointsRoll {
    /// True when the first `d` in the text is not its first character.
    pub fn gate_applies(text: &str) -> bool {
        text.find('d').is_some_and(|pos| pos > 0)
    }

    /// True when the text passes the gate and contains a dice expression.
    pub fn matches(text: &str) -> bool {
        Self::gate_applies(text) && HP_ROLL_RE.is_match(text)
    }

    /// Extract the first dice expression, for the expected-HP preview.
    pub fn parse(text: &str) -> Result<DiceExpression, DomainError> {
        if !Self::gate_applies(text) {
            return Err(DomainError::parse(format!("Not a dice roll: {}", text)));
        }
        let caps = HP_ROLL_RE
            .captures(text)
            .ok_or_else(|| DomainError::parse(format!("Not a dice roll: {}", text)))?;

        let number = |i: usize| -> Result<u32, DomainError> {
            caps[i]
                .parse()
                .map_err(|_| DomainError::parse(format!("Number out of range in {}", text)))
        };
        let count = number(1)?;
        let sides = number(2)?;

        let modifier = match &caps[4] {
            "" => 0,
            digits => {
                let magnitude: i32 = digits
                    .parse()
                    .map_err(|_| DomainError::parse(format!("Modifier out of range in {}", text)))?;
                if caps[3].starts_with('-') {
                    -magnitude
                } else {
                    magnitude
                }
            }
        };

        Ok(DiceExpression::new(count, sides, modifier)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_expressions_match() {
        assert!(HitPointsRoll::matches("4d6+2"));
        assert!(HitPointsRoll::matches("2d8-1"));
        assert!(HitPointsRoll::matches("3d10"));
    }

    #[test]
    fn leading_d_fails_the_gate() {
        assert!(!HitPointsRoll::gate_applies("d6"));
        assert!(!HitPointsRoll::matches("d6"));
        assert!(!HitPointsRoll::matches(""));
    }

    #[test]
    fn pattern_is_unanchored() {
        assert!(HitPointsRoll::matches("abc2d6xyz"));
        assert!(HitPointsRoll::matches("hp 12d8+24 (avg)"));
    }

    #[test]
    fn gate_passes_but_pattern_fails() {
        assert!(HitPointsRoll::gate_applies("4d"));
        assert!(!HitPointsRoll::matches("4d"));
        assert!(!HitPointsRoll::matches("xd6"));
    }

    #[test]
    fn parse_extracts_modifier_sign() {
        let roll = HitPointsRoll::parse("4d6+2").unwrap();
        assert_eq!(roll, DiceExpression::new(4, 6, 2).unwrap());
        assert_eq!(HitPointsRoll::parse("2d8-1").unwrap().modifier, -1);
        assert_eq!(HitPointsRoll::parse("2d8--3").unwrap().modifier, -3);
        assert_eq!(HitPointsRoll::parse("2d8+").unwrap().modifier, 0);
    }

    #[test]
    fn parse_rejects_degenerate_dice() {
        assert!(HitPointsRoll::parse("0d6").is_err());
        assert!(HitPointsRoll::parse("d6").is_err());
    }
}
