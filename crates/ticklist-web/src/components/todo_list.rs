use ticklist_core::{
  ActionKind,
  Task
};
use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  function_component,
  html
};

use super::TodoItem;
use crate::motion::Motion;

#[derive(Clone, PartialEq)]
pub struct TodoRow {
  pub task: Task,
  pub cue:  Option<(ActionKind, u64)>
}

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
  pub rows:      Vec<TodoRow>,
  pub list_ref:  NodeRef,
  pub motion:    Motion,
  pub on_toggle: Callback<(String, bool)>,
  pub on_delete: Callback<String>
}

#[function_component(TodoList)]
pub fn todo_list(
  props: &TodoListProps
) -> Html {
  html! {
      <ul id="todoList" class="list" ref={props.list_ref.clone()}>
          {
              for props.rows.iter().cloned().map(|row| {
                  let key = row.task.id.clone();
                  html! {
                      <TodoItem
                          key={key}
                          task={row.task}
                          cue={row.cue}
                          motion={props.motion.clone()}
                          on_toggle={props.on_toggle.clone()}
                          on_delete={props.on_delete.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}
