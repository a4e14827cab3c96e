//! Animation primitives and derived progress values.
//!
//! - [`Tween`]: fixed-duration interpolation with delay and easing
//! - [`Spring`]: damped spring for settle/inertia motion
//! - pure helpers deriving panel offsets and overlay opacity from menu
//!   progress, so derived values are never stored separately

use super::easing::Easing;
use crate::config::{menu, springs, transition};
use crate::models::{Orientation, Side};

// =============================================================================
// Tween
// =============================================================================

/// Fixed-duration interpolation between two values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    /// Hold at `from` before starting
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            delay_ms: 0.0,
            easing,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Content fade-out starting at the current opacity.
    ///
    /// The duration is scaled by the remaining distance so a page that is
    /// already transparent finishes immediately.
    pub fn fade_out(current_opacity: f64) -> Self {
        let from = current_opacity.clamp(0.0, 1.0);
        Self::new(
            from,
            0.0,
            transition::FADE_OUT_MS * from,
            Easing::EaseInOut,
        )
    }

    /// Content fade-in with the post-reposition hold baked in.
    pub fn fade_in() -> Self {
        Self::new(0.0, 1.0, transition::FADE_IN_MS, Easing::EaseOut)
            .with_delay(transition::FADE_IN_DELAY_MS)
    }

    /// Total time from start to completion.
    pub fn total_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        let running = elapsed_ms - self.delay_ms;
        if running <= 0.0 {
            return self.from;
        }
        if self.duration_ms <= 0.0 || running >= self.duration_ms {
            return self.to;
        }
        let t = self.easing.apply(running / self.duration_ms);
        self.from + (self.to - self.from) * t
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.total_ms()
    }
}

// =============================================================================
// Spring
// =============================================================================

/// Spring parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Higher is faster
    pub stiffness: f64,
    /// 1.0 is critically damped; below bounces, above is sluggish
    pub damping: f64,
}

impl SpringConfig {
    /// Light panel returning to rest after a menu close or orientation swap.
    pub const PANEL: Self = Self {
        stiffness: springs::PANEL_STIFFNESS,
        damping: springs::PANEL_DAMPING,
    };

    /// Mobile sequence scrolling to a section.
    pub const SCROLL: Self = Self {
        stiffness: springs::SCROLL_STIFFNESS,
        damping: springs::SCROLL_DAMPING,
    };
}

/// A value pulled toward a target by a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    current: f64,
    target: f64,
    velocity: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(initial: f64, config: SpringConfig) -> Self {
        Self {
            current: initial,
            target: initial,
            velocity: 0.0,
            config,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn get(&self) -> f64 {
        self.current
    }

    /// Jump to a value with no motion.
    pub fn snap(&mut self, value: f64) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds.
    ///
    /// `a = -k*x - 2*damping*sqrt(k)*v`, semi-implicit Euler. `dt` is capped
    /// so a backgrounded tab does not explode the integration.
    pub fn tick(&mut self, dt: f64) {
        let dt = dt.clamp(0.0, springs::MAX_STEP_SECS);
        let k = self.config.stiffness;
        let displacement = self.current - self.target;
        let accel = -k * displacement - self.config.damping * 2.0 * k.sqrt() * self.velocity;

        self.velocity += accel * dt;
        self.current += self.velocity * dt;

        if self.is_settled() {
            self.current = self.target;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        (self.current - self.target).abs() < springs::REST_DISTANCE
            && self.velocity.abs() < springs::REST_VELOCITY
    }
}

// =============================================================================
// Derived values
// =============================================================================

/// Light panel horizontal offset (px) for a menu progress on a side.
///
/// The panel is pushed away from the menu: a left menu slides it right.
pub fn panel_offset(menu_progress: f64, menu_side: Side) -> f64 {
    -menu_side.sign() * menu_progress.clamp(0.0, 1.0) * menu::WIDTH_PX
}

/// Menu panel translation (px) relative to its resting on-screen position.
///
/// At progress 0 the menu is fully off-screen on its side.
pub fn menu_offset(menu_progress: f64, menu_side: Side) -> f64 {
    menu_side.sign() * (1.0 - menu_progress.clamp(0.0, 1.0)) * menu::WIDTH_PX
}

/// Opacity of the dimming overlay over the content.
pub fn overlay_opacity(menu_progress: f64) -> f64 {
    menu_progress.clamp(0.0, 1.0) * menu::OVERLAY_MAX_OPACITY
}

/// Menu progress implied by a drag distance (px) toward the content.
pub fn progress_from_drag(drag_px: f64) -> f64 {
    (drag_px / menu::WIDTH_PX).clamp(0.0, 1.0)
}

/// Left edge (px) of the light panel for an orientation.
fn light_panel_x(orientation: Orientation, viewport_width: f64) -> f64 {
    match orientation.panels().light {
        Side::Left => 0.0,
        Side::Right => viewport_width / 2.0,
    }
}

/// Offset that keeps the light panel visually in place after its
/// orientation changes, so it can spring from there to rest.
pub fn reposition_offset(previous: Orientation, next: Orientation, viewport_width: f64) -> f64 {
    light_panel_x(previous, viewport_width) - light_panel_x(next, viewport_width)
}
