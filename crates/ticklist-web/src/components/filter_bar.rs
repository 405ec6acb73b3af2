use ticklist_core::Filter;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub active:    Filter,
  pub on_select: Callback<Filter>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  html! {
      <div class="filters" role="group" aria-label="Фильтр задач">
          {
              for Filter::all().into_iter().map(|filter| {
                  let active = props.active == filter;
                  let on_select = props.on_select.clone();
                  html! {
                      <button
                          type="button"
                          class={classes!("filter", active.then_some("is-active"))}
                          data-filter={filter.as_str()}
                          aria-pressed={if active { "true" } else { "false" }}
                          onclick={move |_| on_select.emit(filter)}
                      >
                          { filter.label() }
                      </button>
                  }
              })
          }
      </div>
  }
}
