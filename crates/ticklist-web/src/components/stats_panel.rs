use ticklist_core::Stats;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatsPanelProps {
  pub stats:    Stats,
  pub on_clear: Callback<MouseEvent>
}

#[function_component(StatsPanel)]
pub fn stats_panel(
  props: &StatsPanelProps
) -> Html {
  let stats = props.stats;

  html! {
      <div class="stats">
          <div class="progress">
              <svg class="progress__ring" viewBox="0 0 36 36" aria-hidden="true" focusable="false">
                  <circle class="progress__track" cx="18" cy="18" r="15.9155" pathLength="100" />
                  <circle
                      id="progressRing"
                      class="progress__value"
                      cx="18"
                      cy="18"
                      r="15.9155"
                      pathLength="100"
                      stroke-dasharray={stats.ring_dasharray()}
                  />
              </svg>
              <span id="progressPct" class="progress__label">{ stats.progress_label() }</span>
          </div>
          <span id="stats" class="stats__text">{ stats.summary() }</span>
          <button
              id="clearDone"
              class="stats__clear"
              type="button"
              disabled={!stats.can_clear()}
              onclick={props.on_clear.clone()}
          >
              { "Очистить выполненные" }
          </button>
      </div>
  }
}
