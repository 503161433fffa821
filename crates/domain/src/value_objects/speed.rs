//! Movement speeds of a creature.
//!
//! Each movement mode is an optional distance string such as `"30 ft."`.
//! Values are stored as entered; [`Speed::normalized`] appends the unit
//! suffix before a speed is handed back to the owning record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Unit every saved, non-empty speed value ends with.
pub const SPEED_UNIT_SUFFIX: &str = "ft.";

/// One of the five named movement modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedKind {
    #[default]
    Walk,
    Fly,
    Swim,
    Climb,
    Burrow,
}

impl SpeedKind {
    /// All kinds in display order.
    pub const ALL: [SpeedKind; 5] = [
        SpeedKind::Walk,
        SpeedKind::Fly,
        SpeedKind::Swim,
        SpeedKind::Climb,
        SpeedKind::Burrow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SpeedKind::Walk => "Walk",
            SpeedKind::Fly => "Fly",
            SpeedKind::Swim => "Swim",
            SpeedKind::Climb => "Climb",
            SpeedKind::Burrow => "Burrow",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SpeedKind::Walk => "walk",
            SpeedKind::Fly => "fly",
            SpeedKind::Swim => "swim",
            SpeedKind::Climb => "climb",
            SpeedKind::Burrow => "burrow",
        }
    }
}

impl fmt::Display for SpeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for SpeedKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk" => Ok(SpeedKind::Walk),
            "fly" => Ok(SpeedKind::Fly),
            "swim" => Ok(SpeedKind::Swim),
            "climb" => Ok(SpeedKind::Climb),
            "burrow" => Ok(SpeedKind::Burrow),
            other => Err(DomainError::parse(format!("Unknown speed kind: {}", other))),
        }
    }
}

/// Named movement rates. Absent modes are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Speed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fly: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swim: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burrow: Option<String>,
}

impl Speed {
    /// A speed with only a walking rate.
    pub fn walking(value: impl Into<String>) -> Self {
        Self {
            walk: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn get(&self, kind: SpeedKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    /// Copy of this speed with one mode replaced.
    pub fn with(&self, kind: SpeedKind, value: Option<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(kind) = value;
        next
    }

    /// Copy of this speed with one mode cleared; all others untouched.
    pub fn cleared(&self, kind: SpeedKind) -> Self {
        self.with(kind, None)
    }

    /// Copy with the unit suffix appended to every non-empty value that
    /// does not already end with it. Applying it twice changes nothing.
    pub fn normalized(&self) -> Self {
        let mut next = self.clone();
        for kind in SpeedKind::ALL {
            if let Some(value) = next.slot_mut(kind) {
                if !value.is_empty() && !value.ends_with(SPEED_UNIT_SUFFIX) {
                    value.push(' ');
                    value.push_str(SPEED_UNIT_SUFFIX);
                }
            }
        }
        next
    }

    /// Set, non-empty modes in display order.
    pub fn entries(&self) -> impl Iterator<Item = (SpeedKind, &str)> + '_ {
        SpeedKind::ALL.into_iter().filter_map(move |kind| {
            self.get(kind)
                .filter(|value| !value.is_empty())
                .map(|value| (kind, value))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    fn slot(&self, kind: SpeedKind) -> &Option<String> {
        match kind {
            SpeedKind::Walk => &self.walk,
            SpeedKind::Fly => &self.fly,
            SpeedKind::Swim => &self.swim,
            SpeedKind::Climb => &self.climb,
            SpeedKind::Burrow => &self.burrow,
        }
    }

    fn slot_mut(&mut self, kind: SpeedKind) -> &mut Option<String> {
        match kind {
            SpeedKind::Walk => &mut self.walk,
            SpeedKind::Fly => &mut self.fly,
            SpeedKind::Swim => &mut self.swim,
            SpeedKind::Climb => &mut self.climb,
            SpeedKind::Burrow => &mut self.burrow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_appends_suffix() {
        let speed = Speed::walking("30");
        assert_eq!(speed.normalized(), Speed::walking("30 ft."));
    }

    #[test]
    fn normalize_is_idempotent() {
        let speed = Speed::walking("30 ft.");
        assert_eq!(speed.normalized(), speed);
        assert_eq!(speed.normalized().normalized(), speed);
    }

    #[test]
    fn normalize_touches_every_mode_but_skips_empty_and_absent() {
        let speed = Speed {
            walk: Some("25".into()),
            fly: Some("60 ft.".into()),
            swim: Some(String::new()),
            climb: None,
            burrow: Some("10".into()),
        };
        let normalized = speed.normalized();
        assert_eq!(normalized.walk.as_deref(), Some("25 ft."));
        assert_eq!(normalized.fly.as_deref(), Some("60 ft."));
        assert_eq!(normalized.swim.as_deref(), Some(""));
        assert_eq!(normalized.climb, None);
        assert_eq!(normalized.burrow.as_deref(), Some("10 ft."));
    }

    #[test]
    fn cleared_only_removes_one_mode() {
        let speed = Speed {
            walk: Some("30 ft.".into()),
            fly: Some("60 ft.".into()),
            swim: Some("20 ft.".into()),
            climb: None,
            burrow: None,
        };
        let cleared = speed.cleared(SpeedKind::Fly);
        assert_eq!(cleared.fly, None);
        assert_eq!(cleared.walk, speed.walk);
        assert_eq!(cleared.swim, speed.swim);
        assert_eq!(cleared.climb, None);
        assert_eq!(cleared.burrow, None);
    }

    #[test]
    fn entries_are_in_display_order() {
        let speed = Speed {
            burrow: Some("5 ft.".into()),
            walk: Some("30 ft.".into()),
            ..Speed::default()
        };
        let kinds: Vec<_> = speed.entries().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![SpeedKind::Walk, SpeedKind::Burrow]);
    }

    #[test]
    fn absent_modes_are_not_serialized() {
        let json = serde_json::to_value(Speed::walking("30 ft.")).unwrap();
        assert_eq!(json, serde_json::json!({ "walk": "30 ft." }));
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in SpeedKind::ALL {
            assert_eq!(kind.to_string().parse::<SpeedKind>().unwrap(), kind);
        }
        assert!("teleport".parse::<SpeedKind>().is_err());
    }
}
