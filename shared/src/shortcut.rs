/// A key press reduced to the parts the form cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self { key: key.into(), ctrl }
    }
}

/// Ctrl+Enter inside the email field submits the form.
pub fn is_submit_shortcut(press: &KeyPress) -> bool {
    press.ctrl && press.key == "Enter"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_enter_submits() {
        assert!(is_submit_shortcut(&KeyPress::new("Enter", true)));
    }

    #[test]
    fn plain_enter_inserts_newline() {
        assert!(!is_submit_shortcut(&KeyPress::new("Enter", false)));
    }

    #[test]
    fn other_ctrl_chords_are_ignored() {
        assert!(!is_submit_shortcut(&KeyPress::new("a", true)));
        assert!(!is_submit_shortcut(&KeyPress::new("enter", true)));
    }
}
