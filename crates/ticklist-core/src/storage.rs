use std::cell::{
  Cell,
  RefCell
};
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::Context;
use serde_json::Value;
use tracing::{
  debug,
  info,
  warn
};

use crate::filter::Filter;
use crate::task::Task;

pub const DEFAULT_STORAGE_PREFIX: &str =
  "modern-todo-demo";
pub const DEFAULT_SCOPE: &str = "root";

/// String key-value storage the task list is persisted into.
pub trait KeyValueBackend {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

/// In-memory backend. Clones share the same items and write counter.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
  items:  Rc<RefCell<BTreeMap<String, String>>>,
  writes: Rc<Cell<usize>>
}

impl MemoryBackend {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds a value without counting it as a write.
  pub fn with_item(
    self,
    key: &str,
    value: &str
  ) -> Self {
    self
      .items
      .borrow_mut()
      .insert(key.to_string(), value.to_string());
    self
  }

  pub fn item(
    &self,
    key: &str
  ) -> Option<String> {
    self.items.borrow().get(key).cloned()
  }

  pub fn writes(&self) -> usize {
    self.writes.get()
  }
}

impl KeyValueBackend for MemoryBackend {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.item(key))
  }

  fn set_item(
    &self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .items
      .borrow_mut()
      .insert(key.to_string(), value.to_string());
    self.writes.set(self.writes.get() + 1);
    Ok(())
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct StorageKeys {
  pub tasks:  String,
  pub filter: String
}

impl StorageKeys {
  pub fn new(
    prefix: &str,
    scope: &str
  ) -> Self {
    Self {
      tasks:  format!("{prefix}:v1:{scope}"),
      filter: format!(
        "{prefix}:filter:v1:{scope}"
      )
    }
  }

  pub fn for_pathname(
    prefix: &str,
    pathname: Option<&str>
  ) -> Self {
    Self::new(
      prefix,
      &scope_from_pathname(pathname)
    )
  }
}

/// First non-empty path segment, so demos mounted under different paths
/// keep separate lists.
pub fn scope_from_pathname(
  pathname: Option<&str>
) -> String {
  pathname
    .unwrap_or("/")
    .split('/')
    .find(|segment| !segment.is_empty())
    .unwrap_or(DEFAULT_SCOPE)
    .to_string()
}

/// Parses a stored task list, dropping whatever cannot be salvaged.
pub fn parse_tasks(raw: &str) -> Vec<Task> {
  match serde_json::from_str::<Value>(raw) {
    | Ok(Value::Array(entries)) => {
      let total = entries.len();
      let tasks = entries
        .iter()
        .filter_map(Task::from_stored)
        .collect::<Vec<_>>();
      if tasks.len() != total {
        debug!(
          kept = tasks.len(),
          dropped = total - tasks.len(),
          "sanitized stored tasks"
        );
      }
      tasks
    }
    | Ok(_) => {
      warn!(
        "stored task list is not an \
         array; starting empty"
      );
      Vec::new()
    }
    | Err(error) => {
      warn!(
        %error,
        "failed parsing stored task \
         list; starting empty"
      );
      Vec::new()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Snapshot {
  pub tasks:  Vec<Task>,
  pub filter: Filter
}

#[derive(Debug, Clone)]
pub struct DataStore<B> {
  backend: B,
  keys:    StorageKeys
}

impl<B: KeyValueBackend> DataStore<B> {
  pub fn new(
    backend: B,
    keys: StorageKeys
  ) -> Self {
    info!(
      tasks_key = %keys.tasks,
      filter_key = %keys.filter,
      "opened task storage"
    );
    Self { backend, keys }
  }

  pub fn keys(&self) -> &StorageKeys {
    &self.keys
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  #[tracing::instrument(skip(self))]
  pub fn load(&self) -> Snapshot {
    Snapshot {
      tasks:  self.load_tasks(),
      filter: self.load_filter()
    }
  }

  pub fn load_tasks(&self) -> Vec<Task> {
    let raw = match self
      .backend
      .get_item(&self.keys.tasks)
    {
      | Ok(raw) => raw,
      | Err(error) => {
        warn!(
          error = %format!("{error:#}"),
          "failed reading stored tasks"
        );
        None
      }
    };

    parse_tasks(raw.as_deref().unwrap_or("[]"))
  }

  pub fn load_filter(&self) -> Filter {
    self
      .backend
      .get_item(&self.keys.filter)
      .unwrap_or_else(|error| {
        warn!(
          error = %format!("{error:#}"),
          "failed reading stored filter"
        );
        None
      })
      .as_deref()
      .and_then(Filter::parse)
      .unwrap_or_default()
  }

  #[tracing::instrument(skip(self, tasks), fields(count = tasks.len()))]
  pub fn save(
    &self,
    tasks: &[Task],
    filter: Filter
  ) -> anyhow::Result<()> {
    let json = serde_json::to_string(tasks)
      .context("failed to serialize tasks")?;
    self
      .backend
      .set_item(&self.keys.tasks, &json)
      .with_context(|| {
        format!(
          "failed to write {}",
          self.keys.tasks
        )
      })?;
    self
      .backend
      .set_item(
        &self.keys.filter,
        filter.as_str()
      )
      .with_context(|| {
        format!(
          "failed to write {}",
          self.keys.filter
        )
      })?;

    debug!(
      %filter,
      "persisted tasks and filter"
    );
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn store(
    backend: &MemoryBackend
  ) -> DataStore<MemoryBackend> {
    DataStore::new(
      backend.clone(),
      StorageKeys::new(
        DEFAULT_STORAGE_PREFIX,
        DEFAULT_SCOPE
      )
    )
  }

  #[test]
  fn scope_uses_first_path_segment() {
    assert_eq!(
      scope_from_pathname(Some("/demo/app/index.html")),
      "demo"
    );
    assert_eq!(
      scope_from_pathname(Some("//nested/")),
      "nested"
    );
    assert_eq!(scope_from_pathname(Some("/")), "root");
    assert_eq!(scope_from_pathname(Some("")), "root");
    assert_eq!(scope_from_pathname(None), "root");
  }

  #[test]
  fn keys_are_namespaced_by_scope() {
    let keys = StorageKeys::for_pathname(
      DEFAULT_STORAGE_PREFIX,
      Some("/todo/")
    );
    assert_eq!(keys.tasks, "modern-todo-demo:v1:todo");
    assert_eq!(
      keys.filter,
      "modern-todo-demo:filter:v1:todo"
    );
  }

  #[test]
  fn missing_values_load_as_defaults() {
    let backend = MemoryBackend::new();
    let snapshot = store(&backend).load();
    assert!(snapshot.tasks.is_empty());
    assert_eq!(snapshot.filter, Filter::All);
  }

  #[test]
  fn corrupted_values_load_as_defaults() {
    let backend = MemoryBackend::new()
      .with_item(
        "modern-todo-demo:v1:root",
        "{not json"
      )
      .with_item(
        "modern-todo-demo:filter:v1:root",
        "everything"
      );

    let snapshot = store(&backend).load();
    assert!(snapshot.tasks.is_empty());
    assert_eq!(snapshot.filter, Filter::All);
  }

  #[test]
  fn non_array_payload_loads_empty() {
    assert!(parse_tasks(r#"{"id":"a"}"#).is_empty());
    assert!(parse_tasks("null").is_empty());
  }

  #[test]
  fn parse_tasks_sanitizes_entries() {
    let tasks = parse_tasks(
      r#"[
        {"id":"a","text":"first","done":false,"createdAt":1},
        null,
        {"id":"b","text":"   "},
        {"text":"no id","done":1}
      ]"#
    );

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "a");
    assert_eq!(tasks[1].text, "no id");
    assert!(tasks[1].done);
  }

  #[test]
  fn save_then_load_round_trips() {
    let backend = MemoryBackend::new();
    let data = store(&backend);
    let tasks = vec![
      Task {
        id:         "one".to_string(),
        text:       "Buy milk".to_string(),
        done:       true,
        created_at: 10
      },
      Task {
        id:         "two".to_string(),
        text:       "Walk dog".to_string(),
        done:       false,
        created_at: 20
      },
    ];

    data
      .save(&tasks, Filter::Done)
      .expect("save succeeds");
    assert_eq!(backend.writes(), 2);

    let snapshot = data.load();
    assert_eq!(snapshot.tasks, tasks);
    assert_eq!(snapshot.filter, Filter::Done);
  }
}
