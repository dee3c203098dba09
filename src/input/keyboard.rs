//! Keyboard shortcuts: delete the selection, undo and redo.

use super::Modifiers;
use crate::canvas::Canvas;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Character(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl Canvas {
    /// Handle a key press. Returns whether the key was consumed.
    ///
    /// Shortcuts are ignored while a pointer gesture is in progress.
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> bool {
        if !self.input_state.is_idle() {
            return false;
        }

        let command = event.modifiers.command();
        match event.key {
            Key::Delete | Key::Backspace if !command => {
                if self.selection.is_empty() {
                    return false;
                }
                let ids = self.selection.ids();
                !self.remove_items(&ids).is_empty()
            }
            Key::Escape => {
                let had_selection = !self.selection.is_empty();
                self.selection.clear();
                had_selection
            }
            Key::Character(c) if command => match c.to_ascii_lowercase() {
                'z' if event.modifiers.shift => self.redo(),
                'z' => self.undo(),
                'y' => self.redo(),
                _ => false,
            },
            _ => false,
        }
    }
}
