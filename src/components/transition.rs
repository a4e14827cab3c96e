//! DOM side of page transitions.
//!
//! [`DomDriver`] implements [`TransitionDriver`] over the signals in
//! [`AppContext`]: fades write `motion.opacity`, the panel settle springs
//! `motion.settle_offset`, and the layout store takes the reducer actions.
//! The orchestrator itself lives in a [`TransitionContext`] provided by the
//! router.

use leptos::prelude::*;

use crate::app::AppContext;
#[cfg(not(feature = "mock"))]
use crate::config::site;
use crate::config::transition::MENU_SLIDE_MS;
use crate::core::animation::{Spring, SpringConfig, Tween, panel_offset, reposition_offset};
use crate::core::easing::Easing;
use crate::core::error::TransitionError;
#[cfg(not(feature = "mock"))]
use crate::core::HttpContentProvider;
#[cfg(feature = "mock")]
use crate::core::MockContentProvider;
use crate::core::{
    CancelSource, CancelToken, Orchestrator, Phase, TransitionDriver, ran_to_end, resolve_route,
};
use crate::models::{LayoutAction, LayoutState, PageAttributes, Route};
use crate::utils::dom::{scroll_to_top, viewport_width};
use crate::utils::frame::{run_spring, run_tween};

/// Content source for this build.
#[cfg(not(feature = "mock"))]
pub type SiteProvider = HttpContentProvider;
#[cfg(feature = "mock")]
pub type SiteProvider = MockContentProvider;

#[cfg(not(feature = "mock"))]
pub fn site_provider() -> SiteProvider {
    HttpContentProvider::new(site().content_base_url.as_str())
}

#[cfg(feature = "mock")]
pub fn site_provider() -> SiteProvider {
    MockContentProvider::default()
}

// ============================================================================
// Driver
// ============================================================================

/// Drives transitions through the application signals.
#[derive(Clone)]
pub struct DomDriver {
    ctx: AppContext,
    provider: SiteProvider,
    /// Cancels the free-running menu slide when a navigation snaps it shut.
    menu: CancelSource,
}

impl DomDriver {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            provider: site_provider(),
            menu: CancelSource::new(),
        }
    }

    pub fn provider(&self) -> &SiteProvider {
        &self.provider
    }

    /// Slide the menu open or closed from wherever it currently is.
    ///
    /// Starting a slide cancels the previous one.
    pub async fn slide_menu(&self, open: bool) {
        let motion = self.ctx.motion;
        let token = self.menu.issue();
        let from = motion.menu_progress.get_untracked();
        let to = if open { 1.0 } else { 0.0 };
        let tween = Tween::new(from, to, MENU_SLIDE_MS * (to - from).abs(), Easing::EaseInOut);
        let progress = motion.menu_progress;
        match ran_to_end(run_tween(tween, &token, move |value| progress.set(value)).await) {
            Ok(true) => {}
            Ok(false) => tracing::trace!(open, "menu slide replaced"),
            Err(err) => tracing::warn!(open, error = %err, "menu slide failed"),
        }
    }
}

impl TransitionDriver for DomDriver {
    fn layout(&self) -> LayoutState {
        self.ctx.layout.get()
    }

    fn dispatch(&self, action: LayoutAction) {
        self.ctx.layout.dispatch(action);
    }

    fn enter_phase(&self, phase: Phase) {
        self.ctx.layout.phase.set(phase);
        if phase == Phase::FadingOut {
            self.ctx.motion.will_change.set(true);
        }
    }

    fn opacity(&self) -> f64 {
        self.ctx.motion.opacity.get_untracked()
    }

    async fn fade(&self, tween: Tween, token: &CancelToken) -> Result<(), TransitionError> {
        let opacity = self.ctx.motion.opacity;
        run_tween(tween, token, move |value| opacity.set(value)).await
    }

    async fn resolve(&self, route: &Route) -> Result<PageAttributes, TransitionError> {
        let registry = self.ctx.pages.get_value();
        resolve_route(&self.provider, &registry, route).await
    }

    /// Swap in the new page.
    ///
    /// The settle offset is reset to the distance between the old and new
    /// light panel positions; anything left over from an interrupted settle
    /// is discarded while the content is hidden.
    fn present(&self, page: &PageAttributes) {
        let motion = self.ctx.motion;
        let previous = self
            .ctx
            .page
            .with_untracked(|p| p.as_ref().map(|p| p.orientation));
        let offset = match (previous, viewport_width()) {
            (Some(previous), Some(width)) => reposition_offset(previous, page.orientation, width),
            _ => 0.0,
        };
        motion.settle_offset.set(offset);

        self.ctx.page.set(Some(page.clone()));
        self.ctx.sequences.update(|sequences| {
            sequences.cache(page);
        });
        scroll_to_top();
    }

    fn snap_menu_closed(&self) {
        let motion = self.ctx.motion;
        self.menu.cancel();
        let progress = motion.menu_progress.get_untracked();
        let side = motion.menu_side.get_untracked();
        motion
            .settle_offset
            .update(|offset| *offset += panel_offset(progress, side));
        motion.menu_progress.set(0.0);
    }

    async fn settle_panel(&self, token: &CancelToken) -> Result<(), TransitionError> {
        let offset = self.ctx.motion.settle_offset;
        let mut spring = Spring::new(offset.get_untracked(), SpringConfig::PANEL);
        spring.set_target(0.0);

        let watch = token.clone();
        let settled = run_spring(spring, move || watch.is_cancelled(), move |value| {
            offset.set(value)
        })
        .await;

        if settled {
            Ok(())
        } else {
            Err(TransitionError::Superseded)
        }
    }

    fn clear_hints(&self) {
        self.ctx.motion.will_change.set(false);
    }
}

// ============================================================================
// Context
// ============================================================================

/// Holds the site's orchestrator.
///
/// The orchestrator shares `Rc` state between clones, so it is kept in
/// local (non-`Send`) storage and cloned out before each `spawn_local`.
#[derive(Clone, Copy)]
pub struct TransitionContext {
    pub orchestrator: StoredValue<Orchestrator<DomDriver>, LocalStorage>,
}

impl TransitionContext {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            orchestrator: StoredValue::new_local(Orchestrator::new(DomDriver::new(ctx))),
        }
    }

    /// A handle to the orchestrator for use in a spawned task.
    pub fn handle(&self) -> Orchestrator<DomDriver> {
        self.orchestrator.get_value()
    }

    /// Toggle the menu unless a navigation is running.
    pub fn toggle_menu(&self) -> Option<bool> {
        self.orchestrator.with_value(|o| o.toggle_menu())
    }
}

pub fn use_transitions() -> TransitionContext {
    use_context::<TransitionContext>().expect("TransitionContext must be provided by AppRouter")
}
