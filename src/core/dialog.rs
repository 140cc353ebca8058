//! # Dialogs
//!
//! Modal prompts with an ordered set of buttons. Choosing a button yields a
//! [`DialogAction`] that `update()` applies after closing the dialog.

use crate::core::navigation::Destination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Default,
    Cancel,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogAction {
    Dismiss,
    /// Pop the current screen.
    Back,
    Navigate(Destination),
    /// Replace this dialog with another one.
    Alert(Box<Dialog>),
    PlaceOrder,
    ClearNotifications,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogButton {
    pub label: String,
    pub style: ButtonStyle,
    pub action: DialogAction,
}

impl DialogButton {
    pub fn new(label: impl Into<String>, style: ButtonStyle, action: DialogAction) -> Self {
        Self {
            label: label.into(),
            style,
            action,
        }
    }

    pub fn ok() -> Self {
        Self::new("OK", ButtonStyle::Default, DialogAction::Dismiss)
    }

    pub fn cancel(label: impl Into<String>) -> Self {
        Self::new(label, ButtonStyle::Cancel, DialogAction::Dismiss)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub buttons: Vec<DialogButton>,
    /// Whether Esc dismisses the dialog without choosing a button.
    pub cancelable: bool,
    pub selected: usize,
}

impl Dialog {
    /// Informational dialog with a single OK button.
    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_buttons(title, message, vec![DialogButton::ok()])
    }

    pub fn with_buttons(
        title: impl Into<String>,
        message: impl Into<String>,
        buttons: Vec<DialogButton>,
    ) -> Self {
        let buttons = if buttons.is_empty() {
            vec![DialogButton::ok()]
        } else {
            buttons
        };
        Self {
            title: title.into(),
            message: message.into(),
            buttons,
            cancelable: true,
            selected: 0,
        }
    }

    pub fn not_cancelable(mut self) -> Self {
        self.cancelable = false;
        self
    }

    /// Start with the last button highlighted (the confirming one).
    pub fn focus_last(mut self) -> Self {
        self.selected = self.buttons.len().saturating_sub(1);
        self
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(self.buttons.len().saturating_sub(1));
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_action(&self) -> DialogAction {
        self.buttons
            .get(self.selected)
            .map(|b| b.action.clone())
            .unwrap_or(DialogAction::Dismiss)
    }

    pub fn action_at(&self, index: usize) -> Option<DialogAction> {
        self.buttons.get(index).map(|b| b.action.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_has_single_ok() {
        let dialog = Dialog::alert("Success", "Done");
        assert_eq!(dialog.buttons.len(), 1);
        assert_eq!(dialog.buttons[0].label, "OK");
        assert_eq!(dialog.selected_action(), DialogAction::Dismiss);
        assert!(dialog.cancelable);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut dialog = Dialog::with_buttons(
            "Clear",
            "Sure?",
            vec![
                DialogButton::cancel("Cancel"),
                DialogButton::new("Clear All", ButtonStyle::Destructive, DialogAction::ClearNotifications),
            ],
        );
        dialog.select_prev();
        assert_eq!(dialog.selected, 0);
        dialog.select_next();
        dialog.select_next();
        assert_eq!(dialog.selected, 1);
        assert_eq!(dialog.selected_action(), DialogAction::ClearNotifications);
    }

    #[test]
    fn test_empty_buttons_fall_back_to_ok() {
        let dialog = Dialog::with_buttons("t", "m", Vec::new());
        assert_eq!(dialog.buttons, vec![DialogButton::ok()]);
    }

    #[test]
    fn test_focus_last_and_not_cancelable() {
        let dialog = Dialog::with_buttons(
            "t",
            "m",
            vec![DialogButton::cancel("Cancel"), DialogButton::ok()],
        )
        .focus_last()
        .not_cancelable();
        assert_eq!(dialog.selected, 1);
        assert!(!dialog.cancelable);
        assert_eq!(dialog.action_at(0), Some(DialogAction::Dismiss));
        assert_eq!(dialog.action_at(5), None);
    }
}
