use chrono::Utc;
use serde::{
  Deserialize,
  Serialize
};
use serde_json::Value;
use uuid::Uuid;

/// A single todo record as it is kept in memory and persisted.
///
/// Field names on the wire are `id`, `text`, `done` and `createdAt`.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  pub id:         String,
  pub text:       String,
  pub done:       bool,
  pub created_at: i64
}

impl Task {
  /// Builds a fresh, not-done task. Returns `None` when `raw` normalizes
  /// to an empty string.
  pub fn new(raw: &str) -> Option<Self> {
    let text = normalize_text(raw);
    if text.is_empty() {
      return None;
    }

    Some(Self {
      id: new_task_id(),
      text,
      done: false,
      created_at: now_millis()
    })
  }

  /// Coerces one stored JSON entry into a task.
  ///
  /// Non-object entries and entries whose trimmed text is empty yield
  /// `None`; every other field is defaulted when missing or mistyped.
  pub fn from_stored(
    value: &Value
  ) -> Option<Self> {
    let object = value.as_object()?;

    let id = match object.get("id") {
      | Some(Value::String(id)) => {
        id.clone()
      }
      | _ => new_task_id()
    };
    let text = match object.get("text")
    {
      | Some(Value::String(text)) => {
        text.clone()
      }
      | _ => String::new()
    };
    let done =
      is_truthy(object.get("done"));
    let created_at = object
      .get("createdAt")
      .and_then(stored_millis)
      .unwrap_or_else(now_millis);

    if text
      .trim_matches(is_text_whitespace)
      .is_empty()
    {
      return None;
    }

    Some(Self {
      id,
      text,
      done,
      created_at
    })
  }
}

/// Whitespace as a browser's `trim()` and `\s` see it: Unicode
/// White_Space plus U+FEFF, without U+0085.
pub fn is_text_whitespace(c: char) -> bool {
  match c {
    | '\u{FEFF}' => true,
    | '\u{0085}' => false,
    | _ => c.is_whitespace()
  }
}

/// Trims and collapses every run of whitespace to a single space.
pub fn normalize_text(raw: &str) -> String {
  raw
    .split(is_text_whitespace)
    .filter(|word| !word.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

pub fn new_task_id() -> String {
  Uuid::new_v4().to_string()
}

pub fn now_millis() -> i64 {
  Utc::now().timestamp_millis()
}

fn stored_millis(
  value: &Value
) -> Option<i64> {
  match value {
    | Value::Number(number) => number
      .as_i64()
      .or_else(|| {
        number
          .as_f64()
          .map(|millis| millis as i64)
      }),
    | _ => None
  }
}

// Same truthiness rules a browser applies to `Boolean(value)`.
fn is_truthy(
  value: Option<&Value>
) -> bool {
  match value {
    | None | Some(Value::Null) => false,
    | Some(Value::Bool(flag)) => *flag,
    | Some(Value::Number(number)) => {
      number
        .as_f64()
        .is_some_and(|n| n != 0.0)
    }
    | Some(Value::String(text)) => {
      !text.is_empty()
    }
    | Some(Value::Array(_))
    | Some(Value::Object(_)) => true
  }
}
