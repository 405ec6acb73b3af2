/// A keydown as seen by the document-level listener.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct KeyPress<'a> {
  pub key:   &'a str,
  pub ctrl:  bool,
  pub meta:  bool,
  pub alt:   bool,
  pub shift: bool
}

/// The element that currently receives keyboard input.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct FocusTarget<'a> {
  pub tag_name:         &'a str,
  pub input_type:       Option<&'a str>,
  pub content_editable: bool
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Shortcut {
  ClearCompleted,
  FocusInput
}

/// Keys handled by the new-task input itself.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum InputKey {
  Submit,
  Clear
}

const NON_TEXT_INPUT_TYPES: [&str; 5] = [
  "checkbox", "radio", "button", "submit",
  "reset"
];

impl InputKey {
  pub fn from_key(key: &str) -> Option<Self> {
    match key {
      | "Enter" => Some(Self::Submit),
      | "Escape" => Some(Self::Clear),
      | _ => None
    }
  }
}

/// True when typing into `target` would produce text, so global
/// shortcuts must stay out of the way.
pub fn is_text_editing(
  target: Option<&FocusTarget<'_>>
) -> bool {
  let Some(target) = target else {
    return false;
  };
  if target.content_editable {
    return true;
  }
  if target
    .tag_name
    .eq_ignore_ascii_case("TEXTAREA")
  {
    return true;
  }
  if !target
    .tag_name
    .eq_ignore_ascii_case("INPUT")
  {
    return false;
  }

  let kind = target
    .input_type
    .unwrap_or("text")
    .to_ascii_lowercase();
  !NON_TEXT_INPUT_TYPES.contains(&kind.as_str())
}

/// Resolves a document keydown into a shortcut, honoring the
/// text-editing and focus guards.
pub fn resolve_shortcut(
  press: &KeyPress<'_>,
  editing: bool,
  input_focused: bool
) -> Option<Shortcut> {
  let command = press.meta || press.ctrl;

  if command
    && press.key == "Backspace"
    && !press.alt
    && !press.shift
  {
    return (!editing)
      .then_some(Shortcut::ClearCompleted);
  }

  if press.key != "/" || command || press.alt {
    return None;
  }
  if editing || input_focused {
    return None;
  }

  Some(Shortcut::FocusInput)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(key: &str) -> KeyPress<'_> {
    KeyPress {
      key,
      ctrl: false,
      meta: false,
      alt: false,
      shift: false
    }
  }

  fn input(kind: Option<&str>) -> FocusTarget<'_> {
    FocusTarget {
      tag_name:         "INPUT",
      input_type:       kind,
      content_editable: false
    }
  }

  #[test]
  fn text_inputs_count_as_editing() {
    assert!(is_text_editing(Some(&input(None))));
    assert!(is_text_editing(Some(&input(Some("search")))));
    assert!(!is_text_editing(Some(&input(Some("checkbox")))));
    assert!(!is_text_editing(Some(&input(Some("SUBMIT")))));
    assert!(is_text_editing(Some(&FocusTarget {
      tag_name:         "TEXTAREA",
      input_type:       None,
      content_editable: false
    })));
    assert!(is_text_editing(Some(&FocusTarget {
      tag_name:         "DIV",
      input_type:       None,
      content_editable: true
    })));
    assert!(!is_text_editing(Some(&FocusTarget {
      tag_name:         "BUTTON",
      input_type:       None,
      content_editable: false
    })));
    assert!(!is_text_editing(None));
  }

  #[test]
  fn command_backspace_clears_unless_editing() {
    let ctrl = KeyPress {
      ctrl: true,
      ..press("Backspace")
    };
    let meta = KeyPress {
      meta: true,
      ..press("Backspace")
    };

    assert_eq!(
      resolve_shortcut(&ctrl, false, false),
      Some(Shortcut::ClearCompleted)
    );
    assert_eq!(
      resolve_shortcut(&meta, false, true),
      Some(Shortcut::ClearCompleted)
    );
    assert_eq!(resolve_shortcut(&ctrl, true, false), None);
    assert_eq!(
      resolve_shortcut(
        &KeyPress { shift: true, ..ctrl },
        false,
        false
      ),
      None
    );
    assert_eq!(
      resolve_shortcut(&press("Backspace"), false, false),
      None
    );
  }

  #[test]
  fn slash_focuses_input_when_idle() {
    assert_eq!(
      resolve_shortcut(&press("/"), false, false),
      Some(Shortcut::FocusInput)
    );
    assert_eq!(
      resolve_shortcut(
        &KeyPress { shift: true, ..press("/") },
        false,
        false
      ),
      Some(Shortcut::FocusInput)
    );
    assert_eq!(resolve_shortcut(&press("/"), true, false), None);
    assert_eq!(resolve_shortcut(&press("/"), false, true), None);
    assert_eq!(
      resolve_shortcut(
        &KeyPress { alt: true, ..press("/") },
        false,
        false
      ),
      None
    );
  }

  #[test]
  fn input_keys() {
    assert_eq!(InputKey::from_key("Enter"), Some(InputKey::Submit));
    assert_eq!(InputKey::from_key("Escape"), Some(InputKey::Clear));
    assert_eq!(InputKey::from_key("a"), None);
  }
}
