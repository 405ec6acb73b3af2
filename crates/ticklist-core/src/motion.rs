//! Keyframe presets for row animations.
//!
//! Both types serialize to the plain objects `Element.animate` accepts.

use serde::Serialize;

use crate::config::MotionConfig;

#[derive(
  Debug, Clone, PartialEq, Serialize,
)]
pub struct Keyframe {
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub opacity:   Option<f64>,
  pub transform: String
}

#[derive(
  Debug, Clone, PartialEq, Eq, Serialize,
)]
pub struct Timing {
  pub duration: u32,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub delay:    Option<u32>,
  pub easing:   String,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub fill:     Option<&'static str>
}

#[derive(
  Debug, Clone, PartialEq, Serialize,
)]
pub struct MotionPreset {
  pub keyframes: Vec<Keyframe>,
  pub timing:    Timing
}

fn frame(
  opacity: Option<f64>,
  transform: &str
) -> Keyframe {
  Keyframe {
    opacity,
    transform: transform.to_string()
  }
}

impl MotionPreset {
  /// Newly added row slides down into place.
  pub fn enter(config: &MotionConfig) -> Self {
    Self {
      keyframes: vec![
        frame(
          Some(0.0),
          "translateY(-6px) scale(0.99)"
        ),
        frame(
          Some(1.0),
          "translateY(0) scale(1)"
        ),
      ],
      timing:    Timing {
        duration: config.enter_ms,
        delay:    None,
        easing:   config.easing.clone(),
        fill:     None
      }
    }
  }

  /// Toggled row briefly shrinks.
  pub fn pulse(config: &MotionConfig) -> Self {
    Self {
      keyframes: vec![
        frame(None, "translateY(0) scale(1)"),
        frame(
          None,
          "translateY(0) scale(0.99)"
        ),
        frame(None, "translateY(0) scale(1)"),
      ],
      timing:    Timing {
        duration: config.pulse_ms,
        delay:    None,
        easing:   config.easing.clone(),
        fill:     None
      }
    }
  }

  pub fn delete_exit(
    config: &MotionConfig
  ) -> Self {
    Self {
      keyframes: vec![
        frame(
          Some(1.0),
          "translateX(0) scale(1)"
        ),
        frame(
          Some(0.0),
          "translateX(8px) scale(0.98)"
        ),
      ],
      timing:    Timing {
        duration: config.exit_ms,
        delay:    None,
        easing:   config.easing.clone(),
        fill:     Some("forwards")
      }
    }
  }

  /// Exit for the `index`-th completed row of a bulk clear.
  pub fn clear_exit(
    config: &MotionConfig,
    index: usize
  ) -> Self {
    let delay = u32::try_from(index)
      .unwrap_or(u32::MAX)
      .saturating_mul(config.clear_stagger_ms);

    Self {
      keyframes: vec![
        frame(
          Some(1.0),
          "translateY(0) scale(1)"
        ),
        frame(
          Some(0.0),
          "translateY(-6px) scale(0.98)"
        ),
      ],
      timing:    Timing {
        duration: config.clear_ms,
        delay:    Some(delay),
        easing:   config.easing.clone(),
        fill:     Some("forwards")
      }
    }
  }
}

/// A started animation whose held end frame can be dropped.
pub trait Playback {
  fn cancel(&self);
}

/// Exit animations started together by one bulk clear.
///
/// Exits hold their final frame, so a row that outlives the clear (one
/// unchecked mid-animation, say) stays hidden until the batch is
/// released.
pub struct ExitBatch<A: Playback> {
  animations: Vec<A>
}

impl<A: Playback> ExitBatch<A> {
  pub fn new(animations: Vec<A>) -> Self {
    Self { animations }
  }

  pub fn len(&self) -> usize {
    self.animations.len()
  }

  pub fn is_empty(&self) -> bool {
    self.animations.is_empty()
  }

  pub fn animations(&self) -> &[A] {
    &self.animations
  }

  /// Cancels every animation in the batch. Call once the clear has
  /// rendered; removed rows are detached by then.
  pub fn release(self) -> usize {
    for animation in &self.animations {
      animation.cancel();
    }
    self.animations.len()
  }
}
