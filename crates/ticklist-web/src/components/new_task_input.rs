use ticklist_core::keyboard::InputKey;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  KeyboardEvent,
  MouseEvent,
  NodeRef,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NewTaskInputProps {
  pub input_ref: NodeRef,
  pub on_submit: Callback<()>
}

#[function_component(NewTaskInput)]
pub fn new_task_input(
  props: &NewTaskInputProps
) -> Html {
  let on_keydown = {
    let on_submit =
      props.on_submit.clone();
    let input_ref =
      props.input_ref.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        match InputKey::from_key(
          &event.key()
        ) {
          | Some(InputKey::Submit) => {
            event.prevent_default();
            on_submit.emit(());
          }
          | Some(InputKey::Clear) => {
            if let Some(input) = input_ref
              .cast::<HtmlInputElement>()
            {
              input.set_value("");
            }
          }
          | None => {}
        }
      }
    )
  };

  let on_click = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(move |_: MouseEvent| {
      on_submit.emit(())
    })
  };

  html! {
      <div class="composer">
          <input
              id="newTodo"
              class="composer__input"
              type="text"
              placeholder="Что нужно сделать?"
              aria-label="Новая задача"
              autocomplete="off"
              ref={props.input_ref.clone()}
              onkeydown={on_keydown}
          />
          <button id="addTodo" class="composer__add" type="button" onclick={on_click}>
              { "Добавить" }
          </button>
      </div>
  }
}
