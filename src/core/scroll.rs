//! Horizontal scroll math for the mobile swipe sequence.

use super::animation::{Spring, SpringConfig};
use crate::models::{NavigationEvent, Sequence};

/// Scroll offset at which section `index` is snapped into view.
pub fn section_offset(index: usize, section_width: f64) -> f64 {
    index as f64 * section_width.max(0.0)
}

/// Section whose center is nearest the viewport center.
///
/// Returns `None` for an empty sequence or a zero-width viewport.
pub fn closest_section(scroll_left: f64, section_width: f64, count: usize) -> Option<usize> {
    if count == 0 || section_width <= 0.0 {
        return None;
    }
    let index = (scroll_left.max(0.0) / section_width).round() as usize;
    Some(index.min(count - 1))
}

/// Scroll position sampler that ignores programmatic scrolling.
///
/// While an automatic scroll is running the browser still fires scroll
/// events; feeding those back into "closest page" would chase our own
/// animation, so they are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollSampler {
    auto_scrolling: bool,
    closest: Option<usize>,
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_auto_scroll(&mut self) {
        self.auto_scrolling = true;
    }

    pub fn end_auto_scroll(&mut self) {
        self.auto_scrolling = false;
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scrolling
    }

    /// Record a user scroll sample. Returns the closest section if it changed.
    pub fn sample(&mut self, scroll_left: f64, section_width: f64, count: usize) -> Option<usize> {
        if self.auto_scrolling {
            return None;
        }
        let closest = closest_section(scroll_left, section_width, count);
        if closest != self.closest {
            self.closest = closest;
            closest
        } else {
            None
        }
    }

    pub fn closest(&self) -> Option<usize> {
        self.closest
    }
}

/// How to move to a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    /// Jump straight there (first load)
    Instant,
    /// Spring there
    Animated,
}

impl ScrollMode {
    /// Mode for a scroll in sequence `current` when the last one happened in
    /// `previous`. A freshly laid out strip (first load, or another sequence
    /// in its place) jumps; the same strip springs.
    pub fn between(previous: Option<&str>, current: &str) -> Self {
        if previous == Some(current) {
            Self::Animated
        } else {
            Self::Instant
        }
    }
}

/// Section of `sequence` to scroll to for the latest navigation event.
///
/// `Some` only once a navigation has completed and its route is laid out,
/// so a sequence that arrives after the navigation still gets a position.
pub fn completed_position(
    event: Option<&NavigationEvent>,
    sequence: &Sequence,
) -> Option<usize> {
    match event? {
        NavigationEvent::Completed(route) => sequence.position(route),
        _ => None,
    }
}

/// Plan for scrolling to `target` from `current`.
///
/// Returns the spring to drive, or `None` when the jump is instant or there
/// is nowhere to go.
pub fn plan_scroll(current: f64, target: f64, mode: ScrollMode) -> Option<Spring> {
    if mode == ScrollMode::Instant || (current - target).abs() < f64::EPSILON {
        return None;
    }
    let mut spring = Spring::new(current, SpringConfig::SCROLL);
    spring.set_target(target);
    Some(spring)
}
