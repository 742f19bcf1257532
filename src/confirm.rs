//! Confirmation prompts for destructive history actions
//!
//! A prompt is either absent (idle) or pending with the action it guards.
//! Resolving it consumes the prompt, and the guarded action is only handed
//! back on the confirmed transition.

/// A destructive action waiting for the user's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Delete the history entry at this index
    Delete { index: usize },
    /// Remove every history entry
    Clear,
}

/// The two buttons of a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Cancel,
    Confirm,
}

/// Outcome of a resolved prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Canceled,
    Confirmed(PendingAction),
}

/// A pending confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    action: PendingAction,
    selected: Choice,
}

impl Confirmation {
    /// Opens a prompt guarding `action`, with Cancel selected
    pub fn new(action: PendingAction) -> Self {
        Self {
            action,
            selected: Choice::Cancel,
        }
    }

    /// Prompt for deleting the entry at `index`
    pub fn delete(index: usize) -> Self {
        Self::new(PendingAction::Delete { index })
    }

    /// Prompt for clearing the whole history
    pub fn clear() -> Self {
        Self::new(PendingAction::Clear)
    }

    /// The currently highlighted button
    pub fn selected(&self) -> Choice {
        self.selected
    }

    /// Moves the highlight to the other button
    pub fn toggle(&mut self) {
        self.selected = match self.selected {
            Choice::Cancel => Choice::Confirm,
            Choice::Confirm => Choice::Cancel,
        };
    }

    pub fn title(&self) -> &'static str {
        match self.action {
            PendingAction::Delete { .. } => "Delete Confirmation",
            PendingAction::Clear => "Clear Confirmation",
        }
    }

    pub fn message(&self) -> &'static str {
        match self.action {
            PendingAction::Delete { .. } => "Are you sure you want to delete this search?",
            PendingAction::Clear => "Are you sure you want to clear the search history?",
        }
    }

    pub fn cancel_label(&self) -> &'static str {
        "Cancel"
    }

    pub fn confirm_label(&self) -> &'static str {
        match self.action {
            PendingAction::Delete { .. } => "Delete",
            PendingAction::Clear => "Clear",
        }
    }

    /// Resolves the prompt with an explicit answer
    pub fn resolve(self, choice: Choice) -> Resolution {
        match choice {
            Choice::Cancel => Resolution::Canceled,
            Choice::Confirm => Resolution::Confirmed(self.action),
        }
    }

    /// Resolves the prompt with the highlighted button
    pub fn activate(self) -> Resolution {
        let choice = self.selected;
        self.resolve(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prompt_selects_cancel() {
        assert_eq!(Confirmation::delete(2).selected(), Choice::Cancel);
        assert_eq!(Confirmation::clear().selected(), Choice::Cancel);
    }

    #[test]
    fn test_toggle_switches_between_buttons() {
        let mut prompt = Confirmation::clear();
        prompt.toggle();
        assert_eq!(prompt.selected(), Choice::Confirm);
        prompt.toggle();
        assert_eq!(prompt.selected(), Choice::Cancel);
    }

    #[test]
    fn test_resolve_cancel() {
        assert_eq!(
            Confirmation::delete(0).resolve(Choice::Cancel),
            Resolution::Canceled
        );
    }

    #[test]
    fn test_resolve_confirm_returns_action() {
        assert_eq!(
            Confirmation::delete(3).resolve(Choice::Confirm),
            Resolution::Confirmed(PendingAction::Delete { index: 3 })
        );
        assert_eq!(
            Confirmation::clear().resolve(Choice::Confirm),
            Resolution::Confirmed(PendingAction::Clear)
        );
    }

    #[test]
    fn test_activate_uses_highlighted_button() {
        let prompt = Confirmation::clear();
        assert_eq!(prompt.activate(), Resolution::Canceled);

        let mut prompt = Confirmation::clear();
        prompt.toggle();
        assert_eq!(prompt.activate(), Resolution::Confirmed(PendingAction::Clear));
    }

    #[test]
    fn test_delete_prompt_texts() {
        let prompt = Confirmation::delete(0);
        assert_eq!(prompt.title(), "Delete Confirmation");
        assert_eq!(
            prompt.message(),
            "Are you sure you want to delete this search?"
        );
        assert_eq!(prompt.cancel_label(), "Cancel");
        assert_eq!(prompt.confirm_label(), "Delete");
    }

    #[test]
    fn test_clear_prompt_texts() {
        let prompt = Confirmation::clear();
        assert_eq!(prompt.title(), "Clear Confirmation");
        assert_eq!(
            prompt.message(),
            "Are you sure you want to clear the search history?"
        );
        assert_eq!(prompt.confirm_label(), "Clear");
    }
}
