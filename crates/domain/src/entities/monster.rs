//! Monster stat blocks
//!
//! Field names follow the dnd5e JSON shape so catalog monsters and custom
//! monsters share one record type. Every `with_*` helper returns a new
//! `Monster`; nothing here mutates a value in place.

use serde::{Deserialize, Serialize};

use crate::value_objects::{ApiReference, Speed};

/// One armor class entry (`{type, value}`), e.g. natural armor 12.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorClass {
    #[serde(rename = "type", default = "ArmorClass::default_type")]
    pub armor_type: String,
    pub value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

impl ArmorClass {
    pub fn natural(value: i32) -> Self {
        Self {
            armor_type: Self::default_type(),
            value,
            desc: None,
        }
    }

    fn default_type() -> String {
        "natural".to_string()
    }
}

/// Damage dealt by an action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Damage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<ApiReference>,
    #[serde(default)]
    pub damage_dice: String,
}

/// An action, legendary action or reaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_bonus: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub damage: Vec<Damage>,
}

impl Action {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            ..Self::default()
        }
    }
}

/// How often a special ability can be used (`{type: "per day", times: 3}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(rename = "type")]
    pub usage_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<i32>,
}

/// A passive trait such as "Pack Tactics".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecialAbility {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl SpecialAbility {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            usage: None,
        }
    }
}

/// Aggregate stat-block record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    #[serde(default)]
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub size: String,
    #[serde(rename = "type", default)]
    pub creature_type: String,
    #[serde(default)]
    pub alignment: String,
    #[serde(default)]
    pub armor_class: Vec<ArmorClass>,
    #[serde(default)]
    pub hit_points: i32,
    #[serde(default)]
    pub hit_dice: String,
    #[serde(default)]
    pub hit_points_roll: String,
    #[serde(default)]
    pub speed: Speed,
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub dexterity: i32,
    #[serde(default)]
    pub constitution: i32,
    #[serde(default)]
    pub intelligence: i32,
    #[serde(default)]
    pub wisdom: i32,
    #[serde(default)]
    pub charisma: i32,
    #[serde(default)]
    pub proficiency_bonus: i32,
    #[serde(default)]
    pub challenge_rating: f32,
    #[serde(default)]
    pub xp: i32,
    #[serde(default)]
    pub languages: String,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub legendary_actions: Vec<Action>,
    #[serde(default)]
    pub special_abilities: Vec<SpecialAbility>,
    #[serde(default)]
    pub reactions: Vec<Action>,
}

impl Monster {
    /// Index assigned to monsters built in the custom editor.
    pub const CUSTOM_INDEX: &'static str = "custom";

    /// Blank template the custom-monster editor starts from and resets to.
    pub fn custom_template() -> Self {
        Self {
            index: Self::CUSTOM_INDEX.to_string(),
            name: String::new(),
            size: "Medium".to_string(),
            creature_type: String::new(),
            alignment: String::new(),
            armor_class: vec![ArmorClass::natural(10)],
            hit_points: 0,
            hit_dice: String::new(),
            hit_points_roll: String::new(),
            speed: Speed::walking("30 ft."),
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
            proficiency_bonus: 2,
            challenge_rating: 0.0,
            xp: 0,
            languages: String::new(),
            actions: Vec::new(),
            legendary_actions: Vec::new(),
            special_abilities: Vec::new(),
            reactions: Vec::new(),
        }
    }

    /// Ability modifier for a score: floor((score - 10) / 2).
    pub fn ability_modifier(score: i32) -> i32 {
        (score - 10).div_euclid(2)
    }

    /// Value of the first armor class entry, the only one the editor shows.
    pub fn primary_armor_class(&self) -> i32 {
        self.armor_class.first().map(|ac| ac.value).unwrap_or_default()
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_hit_points(&self, hit_points: i32) -> Self {
        Self {
            hit_points,
            ..self.clone()
        }
    }

    pub fn with_hit_points_roll(&self, roll: impl Into<String>) -> Self {
        Self {
            hit_points_roll: roll.into(),
            ..self.clone()
        }
    }

    pub fn with_speed(&self, speed: Speed) -> Self {
        Self {
            speed,
            ..self.clone()
        }
    }

    pub fn with_proficiency_bonus(&self, proficiency_bonus: i32) -> Self {
        Self {
            proficiency_bonus,
            ..self.clone()
        }
    }

    /// Replace the armor class sequence with one updated copy of its first entry.
    ///
    /// Any further entries are dropped. The previous sequence is left untouched.
    pub fn with_armor_class_value(&self, value: i32) -> Self {
        let mut entry = self
            .armor_class
            .first()
            .cloned()
            .unwrap_or_else(|| ArmorClass::natural(value));
        entry.value = value;
        Self {
            armor_class: vec![entry],
            ..self.clone()
        }
    }

    pub fn with_actions(&self, actions: Vec<Action>) -> Self {
        Self {
            actions,
            ..self.clone()
        }
    }

    pub fn with_legendary_actions(&self, legendary_actions: Vec<Action>) -> Self {
        Self {
            legendary_actions,
            ..self.clone()
        }
    }

    pub fn with_special_abilities(&self, special_abilities: Vec<SpecialAbility>) -> Self {
        Self {
            special_abilities,
            ..self.clone()
        }
    }

    pub fn with_reactions(&self, reactions: Vec<Action>) -> Self {
        Self {
            reactions,
            ..self.clone()
        }
    }
}

impl Default for Monster {
    fn default() -> Self {
        Self::custom_template()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_has_one_armor_class_entry() {
        let template = Monster::custom_template();
        assert_eq!(template.armor_class.len(), 1);
        assert_eq!(template.primary_armor_class(), 10);
        assert!(template.hit_points_roll.is_empty());
    }

    #[test]
    fn armor_class_update_builds_new_sequence() {
        let original = Monster {
            armor_class: vec![
                ArmorClass::natural(12),
                ArmorClass {
                    armor_type: "shield".into(),
                    value: 14,
                    desc: None,
                },
            ],
            ..Monster::custom_template()
        };

        let updated = original.with_armor_class_value(15);

        assert_eq!(updated.armor_class, vec![ArmorClass::natural(15)]);
        // previous value keeps both entries and its old first value
        assert_eq!(original.armor_class.len(), 2);
        assert_eq!(original.armor_class[0].value, 12);
    }

    #[test]
    fn armor_class_update_on_empty_sequence_creates_entry() {
        let monster = Monster {
            armor_class: Vec::new(),
            ..Monster::custom_template()
        };
        assert_eq!(
            monster.with_armor_class_value(11).armor_class,
            vec![ArmorClass::natural(11)]
        );
    }

    #[test]
    fn ability_modifier_rounds_down() {
        assert_eq!(Monster::ability_modifier(10), 0);
        assert_eq!(Monster::ability_modifier(11), 0);
        assert_eq!(Monster::ability_modifier(18), 4);
        assert_eq!(Monster::ability_modifier(9), -1);
        assert_eq!(Monster::ability_modifier(1), -5);
    }

    #[test]
    fn decodes_partial_catalog_json() {
        let json = r#"{
            "index": "goblin",
            "name": "Goblin",
            "type": "humanoid",
            "armor_class": [{"type": "armor", "value": 15}],
            "hit_points": 7,
            "hit_points_roll": "2d6",
            "speed": {"walk": "30 ft."},
            "dexterity": 14
        }"#;
        let monster: Monster = serde_json::from_str(json).unwrap();
        assert_eq!(monster.creature_type, "humanoid");
        assert_eq!(monster.primary_armor_class(), 15);
        assert_eq!(monster.speed, Speed::walking("30 ft."));
        assert_eq!(monster.strength, 0);
        assert!(monster.actions.is_empty());
    }
}
