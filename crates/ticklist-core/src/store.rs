use tracing::{
  debug,
  error,
  info
};

use crate::filter::Filter;
use crate::storage::{
  DataStore,
  KeyValueBackend
};
use crate::task::Task;
use crate::view::ListView;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ActionKind {
  Add,
  Toggle
}

/// The most recent add/toggle, targeted by the next render's one-shot
/// animation. `seq` increases with every recorded action.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct LastAction {
  pub kind: ActionKind,
  pub id:   String,
  pub seq:  u64
}

/// Owner of the task list, the active filter and the last action.
///
/// Every effective mutation persists through the [`DataStore`]; the
/// boolean results tell the caller whether a re-render is due.
#[derive(Debug, Clone)]
pub struct TaskStore<B> {
  data:        DataStore<B>,
  tasks:       Vec<Task>,
  filter:      Filter,
  last_action: Option<LastAction>,
  action_seq:  u64
}

impl<B: KeyValueBackend> TaskStore<B> {
  pub fn open(data: DataStore<B>) -> Self {
    let snapshot = data.load();
    info!(
      count = snapshot.tasks.len(),
      filter = %snapshot.filter,
      "loaded tasks"
    );

    Self {
      data,
      tasks: snapshot.tasks,
      filter: snapshot.filter,
      last_action: None,
      action_seq: 0
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn filter(&self) -> Filter {
    self.filter
  }

  pub fn last_action(
    &self
  ) -> Option<&LastAction> {
    self.last_action.as_ref()
  }

  pub fn data(&self) -> &DataStore<B> {
    &self.data
  }

  pub fn has_done(&self) -> bool {
    self.tasks.iter().any(|task| task.done)
  }

  pub fn view(&self) -> ListView<'_> {
    ListView::new(
      &self.tasks,
      self.filter,
      self.last_action.as_ref()
    )
  }

  /// Prepends a new task. Returns its id, or `None` for blank input.
  pub fn add(
    &mut self,
    raw: &str
  ) -> Option<String> {
    let task = Task::new(raw)?;
    let id = task.id.clone();
    debug!(id = %id, "adding task");

    self.tasks.insert(0, task);
    self.record(ActionKind::Add, &id);
    self.persist();
    Some(id)
  }

  pub fn toggle(
    &mut self,
    id: &str,
    done: bool
  ) -> bool {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    else {
      debug!(id, "toggle ignored; unknown task");
      return false;
    };

    task.done = done;
    debug!(id, done, "toggled task");
    self.record(ActionKind::Toggle, id);
    self.persist();
    true
  }

  /// Removes the task and persists even when the id was already gone.
  /// Returns whether anything was removed.
  pub fn delete(&mut self, id: &str) -> bool {
    let before = self.tasks.len();
    self.tasks.retain(|task| task.id != id);
    let removed = self.tasks.len() != before;
    debug!(id, removed, "deleted task");

    self.last_action = None;
    self.persist();
    removed
  }

  /// Drops all done tasks; returns how many were removed. Nothing is
  /// persisted when the count is zero.
  pub fn clear_completed(&mut self) -> usize {
    let before = self.tasks.len();
    self.tasks.retain(|task| !task.done);
    let removed = before - self.tasks.len();
    if removed == 0 {
      return 0;
    }

    info!(removed, "cleared completed tasks");
    self.last_action = None;
    self.persist();
    removed
  }

  pub fn set_filter(&mut self, next: Filter) {
    debug!(filter = %next, "set filter");
    self.filter = next;
    self.last_action = None;
    self.persist();
  }

  fn record(
    &mut self,
    kind: ActionKind,
    id: &str
  ) {
    self.action_seq += 1;
    self.last_action = Some(LastAction {
      kind,
      id: id.to_string(),
      seq: self.action_seq
    });
  }

  fn persist(&self) {
    if let Err(error) =
      self.data.save(&self.tasks, self.filter)
    {
      error!(
        error = %format!("{error:#}"),
        "failed persisting tasks"
      );
    }
  }
}
