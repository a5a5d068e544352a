//! Key bindings
//!
//! Each binding is one of the "buttons" of the demo: pressing the key
//! dispatches the bound action. Bindings are declared as text and parsed
//! into actions once at startup.

use ratatui::crossterm::event::KeyCode;
use ui_store::state::{BUG_SIDEBAR, CHAT_LIST, FILES_SIDEBAR};
use ui_store::{Action, ActionError};

/// What a key press does
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    Quit,
}

/// A single key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: char,
    pub label: &'static str,
    pub command: Command,
}

/// Key bindings in display order
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<KeyBinding>,
}

/// (key, label, action type, payload)
const BUTTONS: &[(char, &str, &str, Option<&str>)] = &[
    ('1', "Show Files Sidebar", "SidebarChangeActivePage", Some(FILES_SIDEBAR)),
    ('2', "Show Bugs Sidebar", "SidebarChangeActivePage", Some(BUG_SIDEBAR)),
    ('3', "Show Chat List", "SidebarChangeActivePage", Some(CHAT_LIST)),
    ('p', "Show User Profile", "UserProfileShow", None),
    ('h', "Hide User Profile", "UserProfileHide", None),
];

/// Build the default keymap
pub fn default_keymap() -> Result<Keymap, ActionError> {
    let mut bindings = BUTTONS
        .iter()
        .map(|&(key, label, kind, payload)| {
            Ok(KeyBinding {
                key,
                label,
                command: Command::Dispatch(Action::parse(kind, payload)?),
            })
        })
        .collect::<Result<Vec<_>, ActionError>>()?;

    bindings.push(KeyBinding {
        key: 'q',
        label: "Quit",
        command: Command::Quit,
    });

    Ok(Keymap { bindings })
}

impl Keymap {
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Find the command bound to a key. Esc always quits.
    pub fn command_for(&self, code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char(c) => self
                .bindings
                .iter()
                .find(|binding| binding.key == c)
                .map(|binding| binding.command.clone()),
            _ => None,
        }
    }
}
