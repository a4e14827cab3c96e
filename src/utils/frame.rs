//! Frame-paced animation loops.
//!
//! Animations step on a fixed timer rather than `requestAnimationFrame` so
//! they keep running (and completing) in background tabs.

use gloo_timers::future::TimeoutFuture;

use super::dom::now_ms;
use crate::config::transition::FRAME_MS;
use crate::core::CancelToken;
use crate::core::animation::{Spring, Tween};
use crate::core::error::TransitionError;

/// Wait one animation frame.
pub async fn next_frame() {
    TimeoutFuture::new(FRAME_MS).await;
}

/// Drive `apply` along a tween until it completes.
pub async fn run_tween(
    tween: Tween,
    token: &CancelToken,
    mut apply: impl FnMut(f64),
) -> Result<(), TransitionError> {
    let start = now_ms();
    loop {
        token.check()?;
        let elapsed = now_ms() - start;
        apply(tween.value_at(elapsed));
        if tween.is_complete(elapsed) {
            return Ok(());
        }
        next_frame().await;
    }
}

/// Drive `apply` along a spring until it settles.
///
/// `stop` is polled each frame; returning `true` abandons the animation.
pub async fn run_spring(
    mut spring: Spring,
    mut stop: impl FnMut() -> bool,
    mut apply: impl FnMut(f64),
) -> bool {
    let mut last = now_ms();
    while !spring.is_settled() {
        if stop() {
            return false;
        }
        next_frame().await;
        let now = now_ms();
        spring.tick((now - last) / 1000.0);
        last = now;
        apply(spring.get());
    }
    apply(spring.get());
    true
}
