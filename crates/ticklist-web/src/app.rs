use std::rc::Rc;

use gloo::console::log;
use gloo::events::EventListener;
use ticklist_core::keyboard::{
  FocusTarget,
  KeyPress,
  Shortcut,
  is_text_editing,
  resolve_shortcut
};
use gloo::timers::future::TimeoutFuture;
use ticklist_core::motion::{
  ExitBatch,
  MotionPreset
};
use ticklist_core::task::normalize_text;
use ticklist_core::{
  AppConfig,
  Filter,
  TaskStore
};
use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  HtmlElement,
  HtmlInputElement,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  NodeRef,
  Reducible,
  UseReducerDispatcher,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_node_ref,
  use_reducer
};

use crate::components::{
  EmptyStateBlock,
  FilterBar,
  NewTaskInput,
  StatsPanel,
  TodoList,
  TodoRow
};
use crate::motion::Motion;
use crate::storage::{
  LocalStorage,
  open_task_store
};

const APP_CONFIG_TOML: &str =
  include_str!("../assets/ticklist.toml");

pub enum TodoAction {
  Add(String),
  Toggle { id: String, done: bool },
  Delete(String),
  ClearCompleted,
  SetFilter(Filter)
}

#[derive(Clone)]
pub struct TodoState {
  store: TaskStore<LocalStorage>
}

impl Reducible for TodoState {
  type Action = TodoAction;

  // Returning `self` untouched skips the re-render.
  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    let changed = match action {
      | TodoAction::Add(raw) => {
        next.store.add(&raw).is_some()
      }
      | TodoAction::Toggle { id, done } => {
        next.store.toggle(&id, done)
      }
      | TodoAction::Delete(id) => {
        next.store.delete(&id);
        true
      }
      | TodoAction::ClearCompleted => {
        next.store.clear_completed() > 0
      }
      | TodoAction::SetFilter(filter) => {
        next.store.set_filter(filter);
        true
      }
    };

    if changed { Rc::new(next) } else { self }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    AppConfig::load_embedded(
      APP_CONFIG_TOML
    )
  });
  let motion = use_memo((), {
    let config = config.clone();
    move |_| {
      Motion::detect(config.motion.clone())
    }
  });
  let state = use_reducer({
    let config = config.clone();
    move || TodoState {
      store: open_task_store(&config)
    }
  });
  let input_ref = use_node_ref();
  let list_ref = use_node_ref();

  {
    // Re-apply the loaded filter once so sanitized state is written back.
    let dispatcher = state.dispatcher();
    let filter = state.store.filter();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and store \
         loaded"
      );
      dispatcher.dispatch(
        TodoAction::SetFilter(filter)
      );
      || ()
    });
  }

  {
    let dispatcher = state.dispatcher();
    let motion = (*motion).clone();
    let input_ref = input_ref.clone();
    let list_ref = list_ref.clone();
    let has_done = state.store.has_done();

    use_effect_with(has_done, move |has_done| {
      let has_done = *has_done;
      let document = gloo::utils::document();
      let listener = EventListener::new(
        &document,
        "keydown",
        move |event| {
          let Some(event) =
            event.dyn_ref::<KeyboardEvent>()
          else {
            return;
          };
          handle_global_key(
            event,
            has_done,
            &motion,
            &input_ref,
            &list_ref,
            &dispatcher
          );
        }
      );
      move || drop(listener)
    });
  }

  let on_add = {
    let dispatcher = state.dispatcher();
    let input_ref = input_ref.clone();
    Callback::from(move |()| {
      let Some(input) =
        input_ref.cast::<HtmlInputElement>()
      else {
        return;
      };
      let raw = input.value();
      if normalize_text(&raw).is_empty() {
        return;
      }

      input.set_value("");
      ui_debug("task.add", &raw);
      dispatcher.dispatch(TodoAction::Add(raw));
    })
  };

  let on_toggle = {
    let dispatcher = state.dispatcher();
    Callback::from(
      move |(id, done): (String, bool)| {
        dispatcher.dispatch(
          TodoAction::Toggle { id, done }
        );
      }
    )
  };

  let on_delete = {
    let dispatcher = state.dispatcher();
    Callback::from(move |id: String| {
      ui_debug("task.delete", &id);
      dispatcher
        .dispatch(TodoAction::Delete(id));
    })
  };

  let on_filter = {
    let dispatcher = state.dispatcher();
    Callback::from(move |filter: Filter| {
      ui_debug("filter.set", filter.as_str());
      dispatcher
        .dispatch(TodoAction::SetFilter(filter));
    })
  };

  let on_clear = {
    let dispatcher = state.dispatcher();
    let motion = (*motion).clone();
    let list_ref = list_ref.clone();
    let has_done = state.store.has_done();
    Callback::from(move |_: MouseEvent| {
      clear_completed_animated(
        has_done,
        &motion,
        &list_ref,
        &dispatcher
      );
    })
  };

  let view = state.store.view();
  let rows = view
    .visible
    .iter()
    .map(|task| TodoRow {
      task: (*task).clone(),
      cue:  view.cue_for(&task.id)
    })
    .collect::<Vec<_>>();

  html! {
      <main class="app">
          <header class="app__header">
              <h1 class="app__title">{ "Задачи" }</h1>
              <StatsPanel stats={view.stats} on_clear={on_clear} />
          </header>
          <NewTaskInput input_ref={input_ref} on_submit={on_add} />
          <FilterBar active={view.filter} on_select={on_filter} />
          <TodoList
              rows={rows}
              list_ref={list_ref}
              motion={(*motion).clone()}
              on_toggle={on_toggle}
              on_delete={on_delete}
          />
          <EmptyStateBlock state={view.empty} />
      </main>
  }
}

fn handle_global_key(
  event: &KeyboardEvent,
  has_done: bool,
  motion: &Motion,
  input_ref: &NodeRef,
  list_ref: &NodeRef,
  dispatcher: &UseReducerDispatcher<
    TodoState
  >
) {
  let key = event.key();
  let press = KeyPress {
    key:   &key,
    ctrl:  event.ctrl_key(),
    meta:  event.meta_key(),
    alt:   event.alt_key(),
    shift: event.shift_key()
  };

  let editing = event
    .target()
    .and_then(|target| {
      target.dyn_into::<Element>().ok()
    })
    .is_some_and(|element| {
      is_editing_element(&element)
    });
  let input = input_ref
    .cast::<HtmlInputElement>();
  let input_focused = input
    .as_ref()
    .zip(
      gloo::utils::document()
        .active_element()
    )
    .is_some_and(|(input, active)| {
      let input: &Element = input;
      *input == active
    });

  match resolve_shortcut(
    &press,
    editing,
    input_focused
  ) {
    | Some(Shortcut::ClearCompleted) => {
      event.prevent_default();
      clear_completed_animated(
        has_done, motion, list_ref,
        dispatcher
      );
    }
    | Some(Shortcut::FocusInput) => {
      event.prevent_default();
      if let Some(input) = input
        && let Err(error) = input.focus()
      {
        tracing::warn!(
          ?error,
          "failed focusing task input"
        );
      }
    }
    | None => {}
  }
}

fn is_editing_element(
  element: &Element
) -> bool {
  let tag_name = element.tag_name();
  let input_type =
    element.get_attribute("type");
  let content_editable = element
    .dyn_ref::<HtmlElement>()
    .is_some_and(|html| {
      html.is_content_editable()
    });

  is_text_editing(Some(&FocusTarget {
    tag_name: &tag_name,
    input_type: input_type.as_deref(),
    content_editable
  }))
}

/// Plays a staggered exit on every visible completed row, then removes
/// all completed tasks once each animation has settled. The batch is
/// released after the clear renders so rows that were unchecked
/// mid-exit become visible again.
fn clear_completed_animated(
  has_done: bool,
  motion: &Motion,
  list_ref: &NodeRef,
  dispatcher: &UseReducerDispatcher<
    TodoState
  >
) {
  if !has_done {
    return;
  }
  if !motion.allowed() {
    dispatcher
      .dispatch(TodoAction::ClearCompleted);
    return;
  }

  let rows = list_ref
    .cast::<Element>()
    .and_then(|list| {
      list
        .query_selector_all(".todo.is-done")
        .ok()
    })
    .map(|nodes| {
      (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| {
          node.dyn_into::<Element>().ok()
        })
        .collect::<Vec<_>>()
    })
    .unwrap_or_default();

  if rows.is_empty() {
    dispatcher
      .dispatch(TodoAction::ClearCompleted);
    return;
  }

  let batch = ExitBatch::new(
    rows
      .iter()
      .enumerate()
      .filter_map(|(index, row)| {
        motion.animate(
          row,
          &MotionPreset::clear_exit(
            &motion.config,
            index
          )
        )
      })
      .collect()
  );
  ui_debug(
    "tasks.clear_completed",
    &format!(
      "{} rows, {} animated",
      rows.len(),
      batch.len()
    )
  );

  let dispatcher = dispatcher.clone();
  wasm_bindgen_futures::spawn_local(
    async move {
      for animation in batch.animations() {
        animation.settled().await;
      }
      dispatcher
        .dispatch(TodoAction::ClearCompleted);
      // One macrotask lets the reducer render first.
      TimeoutFuture::new(0).await;
      let released = batch.release();
      tracing::trace!(
        released,
        "released clear exit animations"
      );
    }
  );
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
