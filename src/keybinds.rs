use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::persistence::config_dir;

const KEYBINDS_FILE: &str = "keybinds.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum KeyAction {
    // Global
    Save,
    RunCode,
    Quit,
    ToggleTerminal,
    MaximizeTerminal,
    ToggleAssistant,
    ToggleFullscreen,
    NextTheme,
    SearchFiles,
    ShowExplorer,
    ShowSearch,
    ShowSourceControl,
    ShowRunDebug,
    ShowExtensions,
    ShowSettings,
    // Editor
    Undo,
    Redo,
    SelectAll,
    Copy,
    Cut,
    Paste,
}

impl KeyAction {
    pub(crate) fn is_global(self) -> bool {
        !matches!(
            self,
            KeyAction::Undo
                | KeyAction::Redo
                | KeyAction::SelectAll
                | KeyAction::Copy
                | KeyAction::Cut
                | KeyAction::Paste
        )
    }

    pub(crate) fn is_editor(self) -> bool {
        !self.is_global()
    }

    pub(crate) fn all() -> &'static [KeyAction] {
        &[
            KeyAction::Save,
            KeyAction::RunCode,
            KeyAction::Quit,
            KeyAction::ToggleTerminal,
            KeyAction::MaximizeTerminal,
            KeyAction::ToggleAssistant,
            KeyAction::ToggleFullscreen,
            KeyAction::NextTheme,
            KeyAction::SearchFiles,
            KeyAction::ShowExplorer,
            KeyAction::ShowSearch,
            KeyAction::ShowSourceControl,
            KeyAction::ShowRunDebug,
            KeyAction::ShowExtensions,
            KeyAction::ShowSettings,
            KeyAction::Undo,
            KeyAction::Redo,
            KeyAction::SelectAll,
            KeyAction::Copy,
            KeyAction::Cut,
            KeyAction::Paste,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyBind {
    pub(crate) modifiers: KeyModifiers,
    pub(crate) code: KeyCode,
}

impl KeyBind {
    /// Some terminals report Ctrl+letter as the ASCII control character.
    fn normalize_code(code: KeyCode, modifiers: KeyModifiers) -> KeyCode {
        match code {
            KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
                let u = c as u32;
                if (1..=26).contains(&u) {
                    KeyCode::Char((b'a' + (u as u8) - 1) as char)
                } else {
                    KeyCode::Char(c.to_ascii_lowercase())
                }
            }
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }

    pub(crate) fn parse(s: &str) -> Option<KeyBind> {
        let parts: Vec<&str> = s.split('+').collect();
        let (key_str, mods) = parts.split_last()?;
        let mut modifiers = KeyModifiers::NONE;
        for part in mods {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                "alt" => modifiers |= KeyModifiers::ALT,
                _ => return None,
            }
        }
        let lower = key_str.to_ascii_lowercase();
        let code = match lower.as_str() {
            "space" => KeyCode::Char(' '),
            "esc" | "escape" => KeyCode::Esc,
            "enter" | "return" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            _ => {
                if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok())
                    && (1..=12).contains(&n)
                {
                    KeyCode::F(n)
                } else {
                    let mut chars = lower.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => KeyCode::Char(c),
                        _ => return None,
                    }
                }
            }
        };
        Some(KeyBind { modifiers, code })
    }

    pub(crate) fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        parts.push(match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        });
        parts.join("+")
    }

    pub(crate) fn matches(&self, key: &KeyEvent) -> bool {
        let bind_code = KeyBind::normalize_code(self.code, self.modifiers);
        let ev_code = KeyBind::normalize_code(key.code, key.modifiers);
        let mut bind_mods = self.modifiers;
        let mut ev_mods = key.modifiers;
        // Case is already folded for chars, so SHIFT carries no information.
        if matches!(ev_code, KeyCode::Char(_)) {
            ev_mods -= KeyModifiers::SHIFT;
        }
        if matches!(bind_code, KeyCode::Char(_)) {
            bind_mods -= KeyModifiers::SHIFT;
        }
        ev_code == bind_code && ev_mods == bind_mods
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyScope {
    Global,
    Editor,
}

#[derive(Debug, Clone)]
pub(crate) struct KeyBindings {
    pub(crate) map: HashMap<KeyAction, Vec<KeyBind>>,
}

impl KeyBindings {
    pub(crate) fn defaults() -> Self {
        let mut map: HashMap<KeyAction, Vec<KeyBind>> = HashMap::new();
        let mut bind = |action: KeyAction, s: &str| {
            map.entry(action)
                .or_default()
                .push(KeyBind::parse(s).expect("invalid default keybind"));
        };

        // Global
        bind(KeyAction::Save, "ctrl+s");
        bind(KeyAction::RunCode, "ctrl+enter");
        bind(KeyAction::RunCode, "f5");
        bind(KeyAction::Quit, "ctrl+q");
        bind(KeyAction::ToggleTerminal, "ctrl+t");
        bind(KeyAction::MaximizeTerminal, "alt+t");
        bind(KeyAction::ToggleAssistant, "alt+a");
        bind(KeyAction::ToggleFullscreen, "f11");
        bind(KeyAction::NextTheme, "ctrl+k");
        bind(KeyAction::SearchFiles, "ctrl+p");
        bind(KeyAction::ShowExplorer, "alt+1");
        bind(KeyAction::ShowSearch, "alt+2");
        bind(KeyAction::ShowSourceControl, "alt+3");
        bind(KeyAction::ShowRunDebug, "alt+4");
        bind(KeyAction::ShowExtensions, "alt+5");
        bind(KeyAction::ShowSettings, "alt+6");

        // Editor
        bind(KeyAction::Undo, "ctrl+z");
        bind(KeyAction::Redo, "ctrl+y");
        bind(KeyAction::SelectAll, "ctrl+a");
        bind(KeyAction::Copy, "ctrl+c");
        bind(KeyAction::Cut, "ctrl+x");
        bind(KeyAction::Paste, "ctrl+v");

        KeyBindings { map }
    }

    pub(crate) fn lookup(&self, key: &KeyEvent, scope: KeyScope) -> Option<KeyAction> {
        KeyAction::all().iter().copied().find(|action| {
            let in_scope = match scope {
                KeyScope::Global => action.is_global(),
                KeyScope::Editor => action.is_editor(),
            };
            in_scope
                && self
                    .map
                    .get(action)
                    .is_some_and(|binds| binds.iter().any(|b| b.matches(key)))
        })
    }

    pub(crate) fn display_for(&self, action: KeyAction) -> String {
        self.map
            .get(&action)
            .and_then(|v| v.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "unbound".to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SingleOrVec {
    Single(String),
    Multiple(Vec<String>),
}

pub(crate) fn parse_key_action_name(name: &str) -> Option<KeyAction> {
    serde_json::from_value::<KeyAction>(serde_json::Value::String(name.to_string())).ok()
}

/// Merges user overrides over `kb`. An empty list unbinds the action.
pub(crate) fn apply_keybinding_overrides(
    kb: &mut KeyBindings,
    overrides: HashMap<String, SingleOrVec>,
    source: &str,
) {
    for (action_name, val) in overrides {
        let Some(action) = parse_key_action_name(&action_name) else {
            tracing::warn!(source, action = %action_name, "unknown key action");
            continue;
        };
        let strings = match val {
            SingleOrVec::Single(s) => vec![s],
            SingleOrVec::Multiple(v) => v,
        };
        if strings.is_empty() {
            kb.map.insert(action, Vec::new());
            continue;
        }
        let mut binds = Vec::new();
        for s in strings {
            match KeyBind::parse(&s) {
                Some(parsed) => binds.push(parsed),
                None => tracing::warn!(source, action = %action_name, bind = %s, "invalid keybind"),
            }
        }
        if !binds.is_empty() {
            kb.map.insert(action, binds);
        }
    }
}

pub(crate) fn load_keybindings_from(path: &Path) -> KeyBindings {
    let mut kb = KeyBindings::defaults();
    let Ok(raw) = fs::read_to_string(path) else {
        return kb;
    };
    let source = path.display().to_string();
    match serde_json::from_str::<HashMap<String, SingleOrVec>>(&raw) {
        Ok(overrides) => apply_keybinding_overrides(&mut kb, overrides, &source),
        Err(err) => tracing::warn!(source, error = %err, "invalid keybinds json"),
    }
    kb
}

pub(crate) fn load_keybindings() -> KeyBindings {
    match config_dir() {
        Some(dir) => load_keybindings_from(&dir.join(KEYBINDS_FILE)),
        None => KeyBindings::defaults(),
    }
}
