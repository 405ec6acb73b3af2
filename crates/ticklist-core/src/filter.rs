use std::fmt;

use serde::{
  Deserialize,
  Serialize
};

use crate::task::Task;

/// Which subset of the list is visible.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
  #[default]
  All,
  Active,
  Done
}

impl Filter {
  pub fn all() -> [Self; 3] {
    [Self::All, Self::Active, Self::Done]
  }

  /// Accepts only the exact persisted literals.
  pub fn parse(raw: &str) -> Option<Self> {
    match raw {
      | "all" => Some(Self::All),
      | "active" => Some(Self::Active),
      | "done" => Some(Self::Done),
      | _ => None
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Done => "done"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "Все",
      | Self::Active => "Активные",
      | Self::Done => "Готовые"
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Active => !task.done,
      | Self::Done => task.done
    }
  }

  /// Visible tasks in list order.
  pub fn select<'a>(
    self,
    tasks: &'a [Task]
  ) -> Vec<&'a Task> {
    tasks
      .iter()
      .filter(|task| self.matches(task))
      .collect()
  }
}

impl fmt::Display for Filter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn task(id: &str, done: bool) -> Task {
    Task {
      id: id.to_string(),
      text: format!("task {id}"),
      done,
      created_at: 0
    }
  }

  #[test]
  fn select_respects_filter_and_order() {
    let tasks = vec![
      task("a", false),
      task("b", true),
      task("c", false),
    ];

    let ids = |filter: Filter| {
      filter
        .select(&tasks)
        .into_iter()
        .map(|task| task.id.as_str())
        .collect::<Vec<_>>()
    };

    assert_eq!(ids(Filter::Active), vec!["a", "c"]);
    assert_eq!(ids(Filter::Done), vec!["b"]);
    assert_eq!(ids(Filter::All), vec!["a", "b", "c"]);
  }

  #[test]
  fn parse_accepts_only_exact_literals() {
    for filter in Filter::all() {
      assert_eq!(
        Filter::parse(filter.as_str()),
        Some(filter)
      );
    }
    assert_eq!(Filter::parse("Done"), None);
    assert_eq!(Filter::parse(" all"), None);
    assert_eq!(Filter::parse(""), None);
  }
}
