//! Speed editor state machine
//!
//! Display mode shows one chip per set speed; edit mode shows a kind selector
//! and a single text input for the selected kind. Saving normalizes every
//! value and returns to display mode. Deleting a chip is committed at once.

use combat_companion_domain::{Speed, SpeedKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedEditMode {
    #[default]
    Display,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedDraft {
    mode: SpeedEditMode,
    edit_kind: SpeedKind,
    speed: Speed,
    last_incoming: Speed,
}

impl SpeedDraft {
    pub fn new(current: Speed) -> Self {
        Self {
            mode: SpeedEditMode::Display,
            edit_kind: SpeedKind::Walk,
            speed: current.clone(),
            last_incoming: current,
        }
    }

    pub fn mode(&self) -> SpeedEditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == SpeedEditMode::Edit
    }

    pub fn edit_kind(&self) -> SpeedKind {
        self.edit_kind
    }

    pub fn speed(&self) -> &Speed {
        &self.speed
    }

    /// Open the editor (the "+" chip).
    pub fn begin_edit(&mut self) {
        self.mode = SpeedEditMode::Edit;
    }

    /// Switch which single attribute the text input edits.
    pub fn select_kind(&mut self, kind: SpeedKind) {
        self.edit_kind = kind;
    }

    /// Text typed into the input for the selected kind.
    pub fn input(&mut self, value: &str) {
        self.speed = self.speed.with(self.edit_kind, Some(value.to_string()));
    }

    /// Current text of the input for the selected kind.
    pub fn input_value(&self) -> &str {
        self.speed.get(self.edit_kind).unwrap_or_default()
    }

    /// Normalize, close the editor and return the record to hand to the owner.
    pub fn save(&mut self) -> Speed {
        self.mode = SpeedEditMode::Display;
        self.speed = self.speed.normalized();
        self.speed.clone()
    }

    /// Clear one attribute. The returned record is committed immediately.
    pub fn delete(&mut self, kind: SpeedKind) -> Speed {
        self.speed = self.speed.cleared(kind);
        self.speed.clone()
    }

    /// Start over from `speed`, dropping unsaved input.
    ///
    /// Used when the owning form resets, whether or not the speed differs.
    pub fn reset(&mut self, speed: Speed) {
        *self = Self::new(speed);
    }

    /// React to the owner's current value.
    ///
    /// Only an actual change is applied: the working copy is replaced and, if
    /// the new value has a non-empty walking speed, the editor closes. Returns
    /// whether anything changed.
    pub fn sync_incoming(&mut self, incoming: &Speed) -> bool {
        if *incoming == self.last_incoming {
            return false;
        }
        self.last_incoming = incoming.clone();
        self.speed = incoming.clone();
        if incoming.walk.as_deref().is_some_and(|walk| !walk.is_empty()) {
            self.mode = SpeedEditMode::Display;
        }
        true
    }

    /// Chip labels such as `"Walk: 30 ft."` for every set, non-empty speed.
    pub fn chips(&self) -> Vec<(SpeedKind, String)> {
        self.speed
            .entries()
            .map(|(kind, value)| (kind, format!("{}: {}", kind.label(), value)))
            .collect()
    }
}

impl Default for SpeedDraft {
    fn default() -> Self {
        Self::new(Speed::default())
    }
}
