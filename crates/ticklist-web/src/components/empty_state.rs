use ticklist_core::EmptyState;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmptyStateBlockProps {
  pub state: Option<EmptyState>
}

#[function_component(EmptyStateBlock)]
pub fn empty_state_block(
  props: &EmptyStateBlockProps
) -> Html {
  let (title, subtitle) = props
    .state
    .map(|state| (state.title, state.subtitle))
    .unwrap_or_default();

  html! {
      <div id="emptyState" class="empty" hidden={props.state.is_none()}>
          <div class="empty__title">{ title }</div>
          <div class="empty__subtitle">{ subtitle }</div>
      </div>
  }
}
