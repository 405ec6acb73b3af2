use ticklist_core::motion::MotionPreset;
use ticklist_core::{
  ActionKind,
  Task
};
use web_sys::{
  Element,
  HtmlInputElement
};
use yew::{
  Callback,
  Event,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

use crate::motion::Motion;

const DELETING_ATTR: &str =
  "data-deleting";

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
  pub task:      Task,
  /// Set when this row is the last action's target.
  pub cue:       Option<(ActionKind, u64)>,
  pub motion:    Motion,
  pub on_toggle: Callback<(String, bool)>,
  pub on_delete: Callback<String>
}

#[function_component(TodoItem)]
pub fn todo_item(
  props: &TodoItemProps
) -> Html {
  let row_ref = use_node_ref();

  {
    let row_ref = row_ref.clone();
    let motion = props.motion.clone();
    use_effect_with(
      props.cue,
      move |cue| {
        if let Some((kind, seq)) = *cue
          && let Some(row) =
            row_ref.cast::<Element>()
        {
          let preset = match kind {
            | ActionKind::Add => {
              MotionPreset::enter(
                &motion.config
              )
            }
            | ActionKind::Toggle => {
              MotionPreset::pulse(
                &motion.config
              )
            }
          };
          tracing::trace!(
            ?kind,
            seq,
            "playing row cue"
          );
          // Fire and forget; nothing waits on enter/pulse.
          let _ = motion.animate(&row, &preset);
        }
        || ()
      }
    );
  }

  let on_change = {
    let id = props.task.id.clone();
    let on_toggle =
      props.on_toggle.clone();
    Callback::from(move |event: Event| {
      let checkbox: HtmlInputElement =
        event.target_unchecked_into();
      on_toggle
        .emit((id.clone(), checkbox.checked()));
    })
  };

  let on_delete_click = {
    let id = props.task.id.clone();
    let row_ref = row_ref.clone();
    let motion = props.motion.clone();
    let on_delete =
      props.on_delete.clone();
    Callback::from(move |_: MouseEvent| {
      let Some(row) =
        row_ref.cast::<Element>()
      else {
        return;
      };
      if row
        .get_attribute(DELETING_ATTR)
        .as_deref()
        == Some("1")
      {
        return;
      }

      let preset = MotionPreset::delete_exit(
        &motion.config
      );
      let Some(animation) =
        motion.animate(&row, &preset)
      else {
        on_delete.emit(id.clone());
        return;
      };

      if let Err(error) =
        row.set_attribute(DELETING_ATTR, "1")
      {
        tracing::debug!(
          ?error,
          "failed marking row as deleting"
        );
      }
      let id = id.clone();
      let on_delete = on_delete.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          animation.settled().await;
          on_delete.emit(id);
        }
      );
    })
  };

  let task = &props.task;

  html! {
      <li
          ref={row_ref}
          class={classes!("todo", task.done.then_some("is-done"))}
          data-todo-id={task.id.clone()}
      >
          <label class="todo__label">
              <input
                  class="todo__checkbox"
                  type="checkbox"
                  checked={task.done}
                  onchange={on_change}
              />
              <span class="todo__text">{ &task.text }</span>
          </label>
          <button
              class="todo__delete"
              type="button"
              title="Удалить"
              aria-label={format!("Удалить: {}", task.text)}
              onclick={on_delete_click}
          >
              <svg class="icon" viewBox="0 0 24 24" aria-hidden="true" focusable="false">
                  <path
                      d="M18 6L6 18M6 6l12 12"
                      fill="none"
                      stroke="currentColor"
                      stroke-width="2.5"
                      stroke-linecap="round"
                  />
              </svg>
          </button>
      </li>
  }
}
