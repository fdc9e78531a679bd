#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            meta: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Ctrl/Cmd+K: focus and select the search input.
    FocusSearch,
    /// Escape: close whatever modal is showing.
    DismissOverlay,
}

pub fn shortcut_for(chord: &KeyChord) -> Option<ShortcutAction> {
    if (chord.ctrl || chord.meta) && chord.key.eq_ignore_ascii_case("k") {
        return Some(ShortcutAction::FocusSearch);
    }
    if chord.key == "Escape" {
        return Some(ShortcutAction::DismissOverlay);
    }
    None
}
