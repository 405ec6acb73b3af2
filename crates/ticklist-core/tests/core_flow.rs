use ticklist_core::storage::{
  DEFAULT_STORAGE_PREFIX,
  parse_tasks
};
use ticklist_core::{
  ActionKind,
  DataStore,
  Filter,
  MemoryBackend,
  StorageKeys,
  TaskStore
};

fn open(
  backend: &MemoryBackend
) -> TaskStore<MemoryBackend> {
  TaskStore::open(DataStore::new(
    backend.clone(),
    StorageKeys::for_pathname(
      DEFAULT_STORAGE_PREFIX,
      Some("/demo/index.html")
    )
  ))
}

#[test]
fn add_toggle_clear_scenario() {
  let backend = MemoryBackend::new();
  let mut store = open(&backend);

  let id = store.add("Buy milk").expect("add task");
  {
    let view = store.view();
    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.visible[0].text, "Buy milk");
    assert_eq!(view.stats.summary(), "1 осталось");
    assert_eq!(
      view.cue_for(&id).map(|(kind, _)| kind),
      Some(ActionKind::Add)
    );
    assert!(view.empty.is_none());
  }

  assert!(store.toggle(&id, true));
  {
    let view = store.view();
    assert_eq!(view.stats.summary(), "Все готово");
    assert_eq!(view.stats.progress_label(), "1/1");
    assert!(view.stats.can_clear());
  }

  assert_eq!(store.clear_completed(), 1);
  let view = store.view();
  assert!(view.visible.is_empty());
  assert_eq!(view.stats.summary(), "0 задач");
  let empty = view.empty.expect("empty state shown");
  assert_eq!(empty.title, "Пока пусто");
  assert_eq!(
    empty.subtitle,
    "Введите задачу и нажмите Enter."
  );
}

#[test]
fn state_survives_reopen_under_same_scope() {
  let backend = MemoryBackend::new();
  let mut store = open(&backend);
  let first = store.add("first").expect("add");
  let second = store.add("second").expect("add");
  store.toggle(&first, true);
  store.set_filter(Filter::Active);

  let reopened = open(&backend);
  assert_eq!(reopened.tasks(), store.tasks());
  assert_eq!(reopened.filter(), Filter::Active);
  assert!(reopened.last_action().is_none());

  let view = reopened.view();
  assert_eq!(view.visible.len(), 1);
  assert_eq!(view.visible[0].id, second);

  let raw = backend
    .item("modern-todo-demo:v1:demo")
    .expect("tasks persisted under scope");
  assert_eq!(parse_tasks(&raw), store.tasks());
}

#[test]
fn corrupted_storage_opens_empty() {
  let backend = MemoryBackend::new()
    .with_item("modern-todo-demo:v1:demo", "[{oops")
    .with_item("modern-todo-demo:filter:v1:demo", "DONE");

  let store = open(&backend);
  assert!(store.tasks().is_empty());
  assert_eq!(store.filter(), Filter::All);
  assert_eq!(backend.writes(), 0);
}

#[test]
fn filters_split_open_and_done() {
  let backend = MemoryBackend::new();
  let mut store = open(&backend);
  let done = store.add("done one").expect("add");
  let open_id = store.add("open one").expect("add");
  store.toggle(&done, true);

  store.set_filter(Filter::Active);
  let ids = |store: &TaskStore<MemoryBackend>| {
    store
      .view()
      .visible
      .iter()
      .map(|task| task.id.clone())
      .collect::<Vec<_>>()
  };
  assert_eq!(ids(&store), vec![open_id.clone()]);

  store.set_filter(Filter::Done);
  assert_eq!(ids(&store), vec![done.clone()]);

  store.set_filter(Filter::All);
  assert_eq!(ids(&store), vec![open_id, done]);
}
