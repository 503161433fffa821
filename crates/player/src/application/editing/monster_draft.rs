//! Working copy behind the custom-monster form.
//!
//! Keeps the monster being edited, the raw text of the HP-roll field (which
//! may lag behind the committed roll) and the last initial value supplied by
//! the parent so a new one can be detected. A generation counter bumps on
//! every reset so nested editors can drop their own unsaved state.

use combat_companion_domain::{coerce_int, Action, Monster, SpecialAbility, Speed};

use super::hp_roll::HitPointsRoll;

/// Whether an HP-roll edit reached the working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpRollOutcome {
    /// The working copy's `hit_points_roll` now holds the text.
    Committed,
    /// Only the field text changed.
    DisplayOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonsterDraft {
    working: Monster,
    hp_roll_text: String,
    source: Monster,
    generation: u32,
}

impl MonsterDraft {
    pub fn new(initial: Monster) -> Self {
        Self {
            hp_roll_text: initial.hit_points_roll.clone(),
            working: initial.clone(),
            source: initial,
            generation: 0,
        }
    }

    /// Bumped whenever the working copy is replaced wholesale.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn working(&self) -> &Monster {
        &self.working
    }

    pub fn hp_roll_text(&self) -> &str {
        &self.hp_roll_text
    }

    /// Expected hit points of the displayed roll text, if it parses.
    pub fn expected_hit_points(&self) -> Option<i64> {
        HitPointsRoll::parse(&self.hp_roll_text)
            .ok()
            .map(|roll| roll.average())
    }

    /// Adopt a new initial value from the parent.
    ///
    /// Returns `true` when `initial` differs from the value the working copy
    /// was last reset to and the working copy was replaced. In-progress edits
    /// are discarded.
    pub fn resync(&mut self, initial: &Monster) -> bool {
        if *initial == self.source {
            return false;
        }
        let generation = self.generation.wrapping_add(1);
        *self = Self::new(initial.clone());
        self.generation = generation;
        true
    }

    /// Hand out the working copy and start over from the blank template.
    ///
    /// The template becomes the new reset point, so supplying the monster
    /// that was just submitted loads it again.
    pub fn submit(&mut self) -> Monster {
        let template = Monster::custom_template();
        self.hp_roll_text = template.hit_points_roll.clone();
        self.source = template.clone();
        self.generation = self.generation.wrapping_add(1);
        std::mem::replace(&mut self.working, template)
    }

    pub fn set_name(&mut self, value: &str) {
        self.working = self.working.with_name(value);
    }

    pub fn set_strength(&mut self, value: &str) {
        self.working.strength = coerce_int(value);
    }

    pub fn set_dexterity(&mut self, value: &str) {
        self.working.dexterity = coerce_int(value);
    }

    pub fn set_constitution(&mut self, value: &str) {
        self.working.constitution = coerce_int(value);
    }

    pub fn set_intelligence(&mut self, value: &str) {
        self.working.intelligence = coerce_int(value);
    }

    pub fn set_wisdom(&mut self, value: &str) {
        self.working.wisdom = coerce_int(value);
    }

    pub fn set_charisma(&mut self, value: &str) {
        self.working.charisma = coerce_int(value);
    }

    pub fn set_hit_points(&mut self, value: &str) {
        self.working = self.working.with_hit_points(coerce_int(value));
    }

    /// Update the HP-roll field.
    ///
    /// The text is committed when it reads as a dice roll, or when a roll was
    /// already committed (so it can be edited or cleared afterwards).
    pub fn set_hp_roll(&mut self, value: &str) -> HpRollOutcome {
        self.hp_roll_text = value.to_string();

        if HitPointsRoll::matches(value) || !self.working.hit_points_roll.is_empty() {
            self.working = self.working.with_hit_points_roll(value);
            HpRollOutcome::Committed
        } else {
            HpRollOutcome::DisplayOnly
        }
    }

    /// Replace the armor class list with a single updated copy of its first entry.
    pub fn set_armor_class(&mut self, value: &str) {
        self.working = self.working.with_armor_class_value(coerce_int(value));
    }

    pub fn set_proficiency(&mut self, value: &str) {
        self.working = self.working.with_proficiency_bonus(coerce_int(value));
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.working = self.working.with_speed(speed);
    }

    pub fn set_actions(&mut self, actions: Vec<Action>) {
        self.working = self.working.with_actions(actions);
    }

    pub fn set_legendary_actions(&mut self, actions: Vec<Action>) {
        self.working = self.working.with_legendary_actions(actions);
    }

    pub fn set_special_abilities(&mut self, abilities: Vec<SpecialAbility>) {
        self.working = self.working.with_special_abilities(abilities);
    }

    pub fn set_reactions(&mut self, reactions: Vec<Action>) {
        self.working = self.working.with_reactions(reactions);
    }
}

impl Default for MonsterDraft {
    fn default() -> Self {
        Self::new(Monster::custom_template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_companion_domain::{ArmorClass, SpeedKind};

    #[test]
    fn integer_fields_coerce_to_zero() {
        let mut draft = MonsterDraft::default();
        draft.set_strength("");
        draft.set_dexterity("abc");
        draft.set_constitution("14");
        draft.set_hit_points("-");
        draft.set_proficiency("+3");

        let m = draft.working();
        assert_eq!(m.strength, 0);
        assert_eq!(m.dexterity, 0);
        assert_eq!(m.constitution, 14);
        assert_eq!(m.hit_points, 0);
        assert_eq!(m.proficiency_bonus, 3);
    }

    #[test]
    fn hp_roll_commits_dice_text() {
        let mut draft = MonsterDraft::default();
        assert_eq!(draft.set_hp_roll("4d6+2"), HpRollOutcome::Committed);
        assert_eq!(draft.working().hit_points_roll, "4d6+2");
        assert_eq!(draft.hp_roll_text(), "4d6+2");
        assert_eq!(draft.expected_hit_points(), Some(16));
    }

    #[test]
    fn hp_roll_partial_text_is_display_only_when_nothing_committed() {
        let mut draft = MonsterDraft::default();
        assert_eq!(draft.set_hp_roll("4"), HpRollOutcome::DisplayOnly);
        assert_eq!(draft.set_hp_roll("4d"), HpRollOutcome::DisplayOnly);
        assert_eq!(draft.set_hp_roll("d6"), HpRollOutcome::DisplayOnly);
        assert_eq!(draft.hp_roll_text(), "d6");
        assert_eq!(draft.working().hit_points_roll, "");
    }

    #[test]
    fn hp_roll_commits_anything_once_a_roll_exists() {
        let mut draft = MonsterDraft::default();
        draft.set_hp_roll("2d6");
        assert_eq!(draft.set_hp_roll("2d"), HpRollOutcome::Committed);
        assert_eq!(draft.working().hit_points_roll, "2d");
        assert_eq!(draft.set_hp_roll(""), HpRollOutcome::Committed);
        assert_eq!(draft.working().hit_points_roll, "");

        // back to gated behaviour after clearing
        assert_eq!(draft.set_hp_roll("x"), HpRollOutcome::DisplayOnly);
    }

    #[test]
    fn hp_roll_never_changes_hit_points() {
        let mut draft = MonsterDraft::default();
        draft.set_hit_points("11");
        draft.set_hp_roll("10d10+50");
        assert_eq!(draft.working().hit_points, 11);
    }

    #[test]
    fn armor_class_truncates_without_touching_source() {
        let initial = Monster {
            armor_class: vec![
                ArmorClass::natural(12),
                ArmorClass {
                    armor_type: "shield".into(),
                    value: 2,
                    desc: None,
                },
            ],
            ..Monster::custom_template()
        };
        let mut draft = MonsterDraft::new(initial.clone());
        draft.set_armor_class("15");

        assert_eq!(draft.working().armor_class, vec![ArmorClass::natural(15)]);
        assert_eq!(initial.armor_class.len(), 2);
        assert_eq!(initial.armor_class[0].value, 12);
        // the same initial value is not treated as new
        assert!(!draft.resync(&initial));
        assert_eq!(draft.working().primary_armor_class(), 15);
    }

    #[test]
    fn submit_returns_working_copy_and_resets() {
        let mut draft = MonsterDraft::default();
        draft.set_name("Owlbear");
        draft.set_hp_roll("7d10+21");
        draft.set_speed(Speed::walking("40 ft."));

        let submitted = draft.submit();
        assert_eq!(submitted.name, "Owlbear");
        assert_eq!(submitted.hit_points_roll, "7d10+21");
        assert_eq!(submitted.speed.get(SpeedKind::Walk), Some("40 ft."));

        assert_eq!(*draft.working(), Monster::custom_template());
        assert_eq!(draft.hp_roll_text(), "");
    }

    #[test]
    fn submitted_value_is_independent_of_later_edits() {
        let mut draft = MonsterDraft::default();
        draft.set_name("Wolf");
        let submitted = draft.submit();
        draft.set_name("Dire Wolf");
        draft.set_armor_class("14");
        assert_eq!(submitted.name, "Wolf");
        assert_eq!(submitted.primary_armor_class(), 10);
    }

    #[test]
    fn resync_replaces_working_copy_on_new_initial() {
        let mut draft = MonsterDraft::default();
        draft.set_name("half-typed");

        let loaded = Monster {
            name: "Bog Hag".into(),
            hit_points_roll: "8d8+16".into(),
            ..Monster::custom_template()
        };
        assert!(draft.resync(&loaded));
        assert_eq!(draft.working().name, "Bog Hag");
        assert_eq!(draft.hp_roll_text(), "8d8+16");

        draft.set_name("Bog Hag II");
        assert!(!draft.resync(&loaded));
        assert_eq!(draft.working().name, "Bog Hag II");
    }

    #[test]
    fn list_setters_replace_sequences() {
        let mut draft = MonsterDraft::default();
        draft.set_actions(vec![Action::new("Bite", "Melee attack")]);
        draft.set_legendary_actions(vec![Action::new("Tail", "Sweep")]);
        draft.set_special_abilities(vec![SpecialAbility::new("Keen Smell", "Advantage")]);
        draft.set_reactions(vec![Action::new("Parry", "+2 AC")]);

        let m = draft.working();
        assert_eq!(m.actions.len(), 1);
        assert_eq!(m.legendary_actions[0].name, "Tail");
        assert_eq!(m.special_abilities[0].name, "Keen Smell");
        assert_eq!(m.reactions[0].desc, "+2 AC");
    }

    #[test]
    fn same_monster_loads_again_after_submit() {
        let saved = Monster {
            name: "Bog Hag".into(),
            hit_points_roll: "8d8+16".into(),
            ..Monster::custom_template()
        };
        let mut draft = MonsterDraft::default();

        assert!(draft.resync(&saved));
        draft.submit();
        assert_eq!(*draft.working(), Monster::custom_template());

        assert!(draft.resync(&saved.clone()));
        assert_eq!(draft.working().name, "Bog Hag");
        assert_eq!(draft.hp_roll_text(), "8d8+16");
    }

    #[test]
    fn template_after_submit_is_not_a_new_initial_value() {
        let mut draft = MonsterDraft::default();
        draft.set_name("Wolf");
        draft.submit();
        let generation = draft.generation();

        assert!(!draft.resync(&Monster::custom_template()));
        assert_eq!(draft.generation(), generation);
    }

    #[test]
    fn generation_bumps_on_every_reset() {
        let mut draft = MonsterDraft::default();
        assert_eq!(draft.generation(), 0);

        draft.submit();
        assert_eq!(draft.generation(), 1);

        let loaded = Monster {
            name: "Ogre".into(),
            ..Monster::custom_template()
        };
        draft.resync(&loaded);
        assert_eq!(draft.generation(), 2);

        // plain field edits leave it alone
        draft.set_name("Ogre Chief");
        assert_eq!(draft.generation(), 2);
    }
}
