use js_sys::{
  Function,
  Reflect
};
use ticklist_core::config::MotionConfig;
use ticklist_core::motion::{
  MotionPreset,
  Playback
};
use tracing::{
  debug,
  info,
  warn
};
use wasm_bindgen::{
  JsCast,
  JsValue
};
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

const REDUCED_MOTION_QUERY: &str =
  "(prefers-reduced-motion: reduce)";

fn prefers_reduced_motion() -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
    })
    .is_some_and(|query| query.matches())
}

/// Motion settings plus the reduced-motion preference read at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
  pub config: MotionConfig,
  reduced:    bool
}

/// An animation that is playing; await [`RunningAnimation::settled`]
/// before acting on its element.
pub struct RunningAnimation(
  web_sys::Animation
);

impl RunningAnimation {
  /// Resolves once the animation finished, was cancelled or failed.
  pub async fn settled(&self) {
    match self.0.finished() {
      | Ok(promise) => {
        if let Err(error) =
          JsFuture::from(promise).await
        {
          debug!(
            ?error,
            "animation did not finish"
          );
        }
      }
      | Err(error) => {
        debug!(
          ?error,
          "animation has no finished \
           promise"
        );
      }
    }
  }
}

impl Playback for RunningAnimation {
  fn cancel(&self) {
    self.0.cancel();
  }
}

impl Motion {
  pub fn detect(
    config: MotionConfig
  ) -> Self {
    let reduced = prefers_reduced_motion();
    info!(
      reduced,
      respect = config.respect_reduced_motion,
      "detected motion preference"
    );
    Self { config, reduced }
  }

  pub fn allowed(&self) -> bool {
    !(self.reduced
      && self.config.respect_reduced_motion)
  }

  /// Starts `preset` on `element`.
  ///
  /// Returns `None` when motion is not allowed, when the element has no
  /// `animate` method, or when calling it throws; the caller then applies
  /// its state change right away.
  pub fn animate(
    &self,
    element: &Element,
    preset: &MotionPreset
  ) -> Option<RunningAnimation> {
    if !self.allowed() {
      return None;
    }

    let animate = Reflect::get(
      element,
      &JsValue::from_str("animate")
    )
    .ok()?
    .dyn_into::<Function>()
    .ok()?;

    let keyframes =
      match serde_wasm_bindgen::to_value(
        &preset.keyframes
      ) {
        | Ok(value) => value,
        | Err(error) => {
          warn!(%error, "failed encoding keyframes");
          return None;
        }
      };
    let timing =
      match serde_wasm_bindgen::to_value(
        &preset.timing
      ) {
        | Ok(value) => value,
        | Err(error) => {
          warn!(%error, "failed encoding animation timing");
          return None;
        }
      };

    match animate.call2(
      element, &keyframes, &timing
    ) {
      | Ok(value) => value
        .dyn_into::<web_sys::Animation>()
        .ok()
        .map(RunningAnimation),
      | Err(error) => {
        debug!(
          ?error,
          "element.animate threw"
        );
        None
      }
    }
  }
}
