//! List editors for actions, reactions and special abilities.
//!
//! Each list keeps a pending entry that is only appended when it has a name.
//! Every change hands a fresh list back to the owning monster draft.

use combat_companion_domain::{Action, SpecialAbility};

/// A list entry edited through a name and a description.
pub trait NamedEntry: Clone + Default + PartialEq {
    fn name(&self) -> &str;
    fn desc(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn set_desc(&mut self, desc: String);
}

impl NamedEntry for Action {
    fn name(&self) -> &str {
        &self.name
    }

    fn desc(&self) -> &str {
        &self.desc
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_desc(&mut self, desc: String) {
        self.desc = desc;
    }
}

impl NamedEntry for SpecialAbility {
    fn name(&self) -> &str {
        &self.name
    }

    fn desc(&self) -> &str {
        &self.desc
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_desc(&mut self, desc: String) {
        self.desc = desc;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryListDraft<T: NamedEntry> {
    items: Vec<T>,
    pending: T,
    is_adding: bool,
}

pub type ActionListDraft = EntryListDraft<Action>;
pub type AbilityListDraft = EntryListDraft<SpecialAbility>;

impl<T: NamedEntry> EntryListDraft<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            pending: T::default(),
            is_adding: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn pending(&self) -> &T {
        &self.pending
    }

    pub fn is_adding(&self) -> bool {
        self.is_adding
    }

    pub fn begin_add(&mut self) {
        self.is_adding = true;
    }

    /// Close the add form and drop the pending entry.
    pub fn cancel_add(&mut self) {
        self.is_adding = false;
        self.pending = T::default();
    }

    pub fn set_pending_name(&mut self, name: &str) {
        self.pending.set_name(name.to_string());
    }

    pub fn set_pending_desc(&mut self, desc: &str) {
        self.pending.set_desc(desc.to_string());
    }

    /// Append the pending entry.
    ///
    /// Returns the new list for the owner, or `None` when the name is blank
    /// (the form stays open).
    pub fn add(&mut self) -> Option<Vec<T>> {
        if self.pending.name().trim().is_empty() {
            return None;
        }
        let entry = std::mem::take(&mut self.pending);
        let mut items = self.items.clone();
        items.push(entry);
        self.items = items.clone();
        self.is_adding = false;
        Some(items)
    }

    /// Remove the entry at `index`; out-of-range indices change nothing.
    pub fn remove(&mut self, index: usize) -> Vec<T> {
        if index < self.items.len() {
            let mut items = self.items.clone();
            items.remove(index);
            self.items = items;
        }
        self.items.clone()
    }

    /// Start over from `items`, closing the add form.
    pub fn reset(&mut self, items: Vec<T>) {
        *self = Self::new(items);
    }

    /// Adopt the owner's list when it changes.
    pub fn sync(&mut self, items: &[T]) {
        if self.items != items {
            self.items = items.to_vec();
        }
    }
}

impl<T: NamedEntry> Default for EntryListDraft<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_pending_entry_and_closes() {
        let mut draft = ActionListDraft::default();
        draft.begin_add();
        draft.set_pending_name("Bite");
        draft.set_pending_desc("Melee Weapon Attack: +4 to hit");

        let items = draft.add().unwrap();
        assert_eq!(items, vec![Action::new("Bite", "Melee Weapon Attack: +4 to hit")]);
        assert!(!draft.is_adding());
        assert_eq!(draft.pending(), &Action::default());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut draft = AbilityListDraft::default();
        draft.begin_add();
        draft.set_pending_name("   ");
        draft.set_pending_desc("no name");

        assert!(draft.add().is_none());
        assert!(draft.is_adding());
        assert!(draft.items().is_empty());
        assert_eq!(draft.pending().desc, "no name");
    }

    #[test]
    fn remove_returns_new_list() {
        let mut draft = ActionListDraft::new(vec![
            Action::new("Bite", ""),
            Action::new("Claw", ""),
        ]);
        let before = draft.items().to_vec();
        let items = draft.remove(0);

        assert_eq!(items, vec![Action::new("Claw", "")]);
        assert_eq!(before.len(), 2);
        assert_eq!(draft.remove(5), items);
    }

    #[test]
    fn sync_replaces_items_but_keeps_pending() {
        let mut draft = AbilityListDraft::default();
        draft.begin_add();
        draft.set_pending_name("Pack Tactics");
        draft.sync(&[SpecialAbility::new("Keen Smell", "")]);

        assert_eq!(draft.items().len(), 1);
        assert_eq!(draft.pending().name, "Pack Tactics");
    }

    #[test]
    fn reset_closes_form_and_drops_pending() {
        let mut draft = ActionListDraft::default();
        draft.begin_add();
        draft.set_pending_name("Bite");
        draft.reset(Vec::new());

        assert!(!draft.is_adding());
        assert_eq!(draft.pending(), &Action::default());
        assert!(draft.items().is_empty());
    }

    #[test]
    fn cancel_drops_pending() {
        let mut draft = ActionListDraft::default();
        draft.begin_add();
        draft.set_pending_name("Bite");
        draft.cancel_add();
        assert!(!draft.is_adding());
        assert_eq!(draft.pending().name, "");
    }
}
