use crate::filter::Filter;
use crate::store::{
  ActionKind,
  LastAction
};
use crate::task::Task;

/// Aggregate counters shown above the list.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Stats {
  pub total:     usize,
  pub done:      usize,
  pub remaining: usize,
  pub percent:   u32
}

impl Stats {
  pub fn from_tasks(tasks: &[Task]) -> Self {
    let total = tasks.len();
    let done = tasks
      .iter()
      .filter(|task| task.done)
      .count();
    let percent = if total == 0 {
      0
    } else {
      (done as f64 / total as f64 * 100.0)
        .round() as u32
    };

    Self {
      total,
      done,
      remaining: total - done,
      percent
    }
  }

  pub fn summary(&self) -> String {
    if self.total == 0 {
      "0 задач".to_string()
    } else if self.remaining == 0 {
      "Все готово".to_string()
    } else {
      format!("{} осталось", self.remaining)
    }
  }

  /// `done/total`, or empty when there is nothing to count.
  pub fn progress_label(&self) -> String {
    if self.total == 0 {
      String::new()
    } else {
      format!("{}/{}", self.done, self.total)
    }
  }

  pub fn ring_dasharray(&self) -> String {
    format!("{} 100", self.percent)
  }

  pub fn can_clear(&self) -> bool {
    self.done > 0
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct EmptyState {
  pub title:    &'static str,
  pub subtitle: &'static str
}

impl EmptyState {
  pub fn for_filter(
    has_any: bool,
    filter: Filter
  ) -> Self {
    let (title, subtitle) = match (
      has_any, filter,
    ) {
      | (false, _) => (
        "Пока пусто",
        "Введите задачу и нажмите Enter."
      ),
      | (true, Filter::Active) => (
        "Нет активных",
        "Все задачи выполнены."
      ),
      | (true, Filter::Done) => (
        "Нет выполненных",
        "Отметьте задачу — и она появится тут."
      ),
      | (true, Filter::All) => (
        "Пока пусто",
        "Добавьте новую задачу."
      )
    };

    Self { title, subtitle }
  }
}

/// Everything one render needs, derived from store state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
  pub filter:  Filter,
  pub visible: Vec<&'a Task>,
  pub stats:   Stats,
  pub empty:   Option<EmptyState>,
  cue:         Option<&'a LastAction>
}

impl<'a> ListView<'a> {
  pub fn new(
    tasks: &'a [Task],
    filter: Filter,
    last_action: Option<&'a LastAction>
  ) -> Self {
    let visible = filter.select(tasks);
    let empty = visible.is_empty().then(|| {
      EmptyState::for_filter(
        !tasks.is_empty(),
        filter
      )
    });

    Self {
      filter,
      stats: Stats::from_tasks(tasks),
      empty,
      cue: last_action.filter(|action| {
        visible
          .iter()
          .any(|task| task.id == action.id)
      }),
      visible
    }
  }

  /// The action to animate on row `id`, if it is the last action's
  /// target. Returns the kind with its sequence number.
  pub fn cue_for(
    &self,
    id: &str
  ) -> Option<(ActionKind, u64)> {
    self
      .cue
      .filter(|action| action.id == id)
      .map(|action| (action.kind, action.seq))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn task(id: &str, done: bool) -> Task {
    Task {
      id: id.to_string(),
      text: id.to_string(),
      done,
      created_at: 0
    }
  }

  #[test]
  fn stats_text_distinguishes_empty_and_finished(
  ) {
    let none = Stats::from_tasks(&[]);
    assert_eq!(none.summary(), "0 задач");
    assert_eq!(none.progress_label(), "");
    assert_eq!(none.ring_dasharray(), "0 100");
    assert!(!none.can_clear());

    let finished =
      Stats::from_tasks(&[task("a", true)]);
    assert_eq!(finished.summary(), "Все готово");
    assert_eq!(finished.progress_label(), "1/1");
    assert_eq!(finished.ring_dasharray(), "100 100");
    assert!(finished.can_clear());
  }

  #[test]
  fn stats_counts_remaining_and_rounds_percent(
  ) {
    let stats = Stats::from_tasks(&[
      task("a", true),
      task("b", false),
      task("c", false),
    ]);
    assert_eq!(stats.remaining, 2);
    assert_eq!(stats.summary(), "2 осталось");
    assert_eq!(stats.progress_label(), "1/3");
    assert_eq!(stats.percent, 33);

    let two_thirds = Stats::from_tasks(&[
      task("a", true),
      task("b", true),
      task("c", false),
    ]);
    assert_eq!(two_thirds.percent, 67);
  }

  #[test]
  fn empty_state_depends_on_filter() {
    let tasks = vec![task("a", false)];

    let done_view =
      ListView::new(&tasks, Filter::Done, None);
    assert_eq!(
      done_view.empty.map(|e| e.title),
      Some("Нет выполненных")
    );

    let all_view =
      ListView::new(&tasks, Filter::All, None);
    assert!(all_view.empty.is_none());

    let finished = vec![task("b", true)];
    let active_view = ListView::new(
      &finished,
      Filter::Active,
      None
    );
    assert_eq!(
      active_view.empty,
      Some(EmptyState {
        title:    "Нет активных",
        subtitle: "Все задачи выполнены."
      })
    );

    let nothing =
      ListView::new(&[], Filter::Done, None);
    assert_eq!(
      nothing.empty.map(|e| e.subtitle),
      Some("Введите задачу и нажмите Enter.")
    );
  }

  #[test]
  fn cue_targets_only_visible_action_row() {
    let tasks =
      vec![task("a", false), task("b", true)];
    let action = LastAction {
      kind: ActionKind::Toggle,
      id:   "b".to_string(),
      seq:  7
    };

    let all = ListView::new(
      &tasks,
      Filter::All,
      Some(&action)
    );
    assert_eq!(
      all.cue_for("b"),
      Some((ActionKind::Toggle, 7))
    );
    assert_eq!(all.cue_for("a"), None);

    let active = ListView::new(
      &tasks,
      Filter::Active,
      Some(&action)
    );
    assert_eq!(active.cue_for("b"), None);
  }
}
