//! Creatures on the owner's combat screen and their active conditions.

use combat_companion_domain::Monster;

/// Identifier of a roster row; unique for the lifetime of the roster.
pub type RosterId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: RosterId,
    pub monster: Monster,
    /// Condition indices, in the order they were applied
    pub conditions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CombatRoster {
    entries: Vec<RosterEntry>,
    next_id: RosterId,
}

impl CombatRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn get(&self, id: RosterId) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Append a creature and return its row id.
    pub fn add(&mut self, monster: Monster) -> RosterId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(RosterEntry {
            id,
            monster,
            conditions: Vec::new(),
        });
        id
    }

    pub fn remove(&mut self, id: RosterId) -> Option<Monster> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos).monster)
    }

    /// Apply a condition; a condition already on the creature is not duplicated.
    pub fn add_condition(&mut self, id: RosterId, condition: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if condition.is_empty() || entry.conditions.iter().any(|c| c == condition) {
            return false;
        }
        entry.conditions.push(condition.to_string());
        true
    }

    pub fn remove_condition(&mut self, id: RosterId, condition: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        let before = entry.conditions.len();
        entry.conditions.retain(|c| c != condition);
        entry.conditions.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Monster {
        Monster::custom_template().with_name(name)
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut roster = CombatRoster::new();
        let a = roster.add(named("Goblin"));
        let b = roster.add(named("Goblin"));
        assert_ne!(a, b);

        assert_eq!(roster.remove(a).map(|m| m.name), Some("Goblin".to_string()));
        let c = roster.add(named("Wolf"));
        assert_ne!(c, a);
        assert_eq!(roster.entries().len(), 2);
        assert!(roster.remove(a).is_none());
    }

    #[test]
    fn conditions_are_unique_per_creature() {
        let mut roster = CombatRoster::new();
        let id = roster.add(named("Ogre"));

        assert!(roster.add_condition(id, "poisoned"));
        assert!(!roster.add_condition(id, "poisoned"));
        assert!(roster.add_condition(id, "prone"));
        assert!(!roster.add_condition(id, ""));
        assert_eq!(
            roster.get(id).map(|e| e.conditions.clone()),
            Some(vec!["poisoned".to_string(), "prone".to_string()])
        );

        assert!(roster.remove_condition(id, "poisoned"));
        assert!(!roster.remove_condition(id, "poisoned"));
        assert!(!roster.add_condition(99, "prone"));
    }
}
