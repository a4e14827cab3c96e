//! Page transition orchestration.
//!
//! A navigation runs as one async sequence:
//!
//! ```text
//! Idle -> FadingOut -> AwaitingRoute -> Repositioning -> FadingIn -> Idle
//! ```
//!
//! Each step awaits the previous one. DOM work happens behind the
//! [`TransitionDriver`] trait; this module only decides what happens when.
//!
//! # Overlapping navigations
//!
//! Starting a navigation supersedes any run in flight. Every run holds a
//! [`CancelToken`] tied to a shared generation counter; the old run notices
//! at its next await and returns [`TransitionError::Superseded`] without
//! touching layout state again. The new run fades out from whatever opacity
//! the page currently has.
//!
//! # Route failures
//!
//! If the target route cannot be resolved, the previous page is unfrozen in
//! place and faded back in before the error is returned.

use std::cell::Cell;
use std::rc::Rc;

use super::animation::Tween;
use super::error::TransitionError;
use crate::models::{LayoutAction, LayoutState, PageAttributes, Route};

/// Orchestrator phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Idle,
    FadingOut,
    AwaitingRoute,
    Repositioning,
    FadingIn,
}

impl Phase {
    /// Whether `next` may follow `self`.
    ///
    /// Any phase may jump to `FadingOut` (a new navigation supersedes the
    /// current one), and `AwaitingRoute` may skip to `FadingIn` when the route
    /// fails and the old page is restored.
    pub fn can_advance_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (_, FadingOut)
                | (FadingOut, AwaitingRoute)
                | (AwaitingRoute, Repositioning)
                | (AwaitingRoute, FadingIn)
                | (Repositioning, FadingIn)
                | (FadingIn, Idle)
        )
    }

    pub fn advance(self, next: Phase) -> Result<Phase, TransitionError> {
        if self.can_advance_to(next) {
            Ok(next)
        } else {
            Err(TransitionError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn is_idle(self) -> bool {
        self == Phase::Idle
    }
}

// =============================================================================
// Cancellation
// =============================================================================

/// Issues [`CancelToken`]s; issuing a new one cancels all earlier ones.
#[derive(Clone, Debug, Default)]
pub struct CancelSource {
    generation: Rc<Cell<u64>>,
}

impl CancelSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel outstanding tokens and return a fresh one.
    pub fn issue(&self) -> CancelToken {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        CancelToken {
            current: Rc::clone(&self.generation),
            issued: next,
        }
    }

    /// Cancel outstanding tokens without issuing a new one.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

/// Handle a run uses to find out it has been superseded.
#[derive(Clone, Debug)]
pub struct CancelToken {
    current: Rc<Cell<u64>>,
    issued: u64,
}

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.current.get() != self.issued
    }

    pub fn check(&self) -> Result<(), TransitionError> {
        if self.is_cancelled() {
            Err(TransitionError::Superseded)
        } else {
            Ok(())
        }
    }
}

/// Whether a cancellable animation ran to the end.
///
/// `Superseded` becomes `Ok(false)`; any other error is passed on.
pub fn ran_to_end(result: Result<(), TransitionError>) -> Result<bool, TransitionError> {
    match result {
        Ok(()) => Ok(true),
        Err(TransitionError::Superseded) => Ok(false),
        Err(err) => Err(err),
    }
}

// =============================================================================
// Driver
// =============================================================================

/// DOM side of a transition.
///
/// Implementations own the animated values; the orchestrator only asks for
/// them to move and waits for completion. Long-running methods should poll
/// the token each frame and bail out with `Superseded`.
#[allow(async_fn_in_trait)]
pub trait TransitionDriver {
    /// Current layout state.
    fn layout(&self) -> LayoutState;

    /// Apply a reducer action to the layout store.
    fn dispatch(&self, action: LayoutAction);

    /// Notification that the orchestrator entered a phase.
    fn enter_phase(&self, phase: Phase);

    /// Current content opacity.
    fn opacity(&self) -> f64;

    /// Animate content opacity along `tween`.
    async fn fade(&self, tween: Tween, token: &CancelToken) -> Result<(), TransitionError>;

    /// Resolve a route into renderable attributes (fetching content).
    async fn resolve(&self, route: &Route) -> Result<PageAttributes, TransitionError>;

    /// Swap the rendered page for `page`.
    fn present(&self, page: &PageAttributes);

    /// Close the menu without animating it.
    fn snap_menu_closed(&self);

    /// Spring the light panel back to its resting offset.
    async fn settle_panel(&self, token: &CancelToken) -> Result<(), TransitionError>;

    /// Drop `will-change` and similar hints once idle.
    fn clear_hints(&self);
}

// =============================================================================
// Orchestrator
// =============================================================================

/// What a completed navigation did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionReport {
    /// Phases entered, in order, ending with `Idle`
    pub phases: Vec<Phase>,
    /// Number of awaited completions
    pub awaited: usize,
    /// The light panel was animated back to rest
    pub repositioned: bool,
}

/// Runs navigations against a driver, one at a time.
pub struct Orchestrator<D> {
    driver: D,
    phase: Rc<Cell<Phase>>,
    runs: CancelSource,
}

impl<D: Clone> Clone for Orchestrator<D> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver.clone(),
            phase: Rc::clone(&self.phase),
            runs: self.runs.clone(),
        }
    }
}

impl<D: TransitionDriver> Orchestrator<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            phase: Rc::new(Cell::new(Phase::Idle)),
            runs: CancelSource::new(),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    pub fn is_busy(&self) -> bool {
        !self.phase().is_idle()
    }

    /// Invalidate any run in flight and issue a token for a new one.
    fn begin(&self) -> CancelToken {
        self.runs.issue()
    }

    fn enter(&self, next: Phase, report: &mut TransitionReport) -> Result<(), TransitionError> {
        let phase = self.phase.get().advance(next)?;
        self.phase.set(phase);
        self.driver.enter_phase(phase);
        report.phases.push(phase);
        tracing::debug!(?phase, "transition phase");
        Ok(())
    }

    /// Run a full navigation to `route`.
    pub async fn navigate(&self, route: Route) -> Result<TransitionReport, TransitionError> {
        let token = self.begin();
        let mut report = TransitionReport::default();
        tracing::info!(%route, "navigation started");

        // Freeze and fade out.
        self.enter(Phase::FadingOut, &mut report)?;
        let previous = self.driver.layout();
        self.driver.dispatch(LayoutAction::Freeze);
        self.driver
            .fade(Tween::fade_out(self.driver.opacity()), &token)
            .await?;
        token.check()?;
        report.awaited += 1;

        // Stop painting and wait for the new page.
        self.enter(Phase::AwaitingRoute, &mut report)?;
        self.driver.dispatch(LayoutAction::HideContent);
        let resolved = self.driver.resolve(&route).await;
        token.check()?;
        report.awaited += 1;

        let page = match resolved {
            Ok(page) => page,
            Err(err) => return self.recover(previous, err, &token, report).await,
        };

        // Swap in the new page and put the panel back where it belongs.
        self.enter(Phase::Repositioning, &mut report)?;
        self.driver.present(&page);
        self.driver.dispatch(LayoutAction::Unfreeze(page.orientation));

        let menu_was_open = self.driver.layout().menu_open;
        if menu_was_open {
            self.driver.snap_menu_closed();
            self.driver.dispatch(LayoutAction::CloseMenu);
        }
        if menu_was_open || previous.orientation != page.orientation {
            self.driver.settle_panel(&token).await?;
            token.check()?;
            report.awaited += 1;
            report.repositioned = true;
        }

        // Fade back in.
        self.enter(Phase::FadingIn, &mut report)?;
        self.driver.dispatch(LayoutAction::ShowContent);
        self.driver.fade(Tween::fade_in(), &token).await?;
        token.check()?;
        report.awaited += 1;

        self.enter(Phase::Idle, &mut report)?;
        self.driver.clear_hints();
        tracing::info!(%route, awaited = report.awaited, "navigation complete");
        Ok(report)
    }

    /// Restore the page that was showing before a failed navigation.
    async fn recover(
        &self,
        previous: LayoutState,
        err: TransitionError,
        token: &CancelToken,
        mut report: TransitionReport,
    ) -> Result<TransitionReport, TransitionError> {
        tracing::warn!(error = %err, "route failed, restoring previous page");

        self.enter(Phase::FadingIn, &mut report)?;
        self.driver
            .dispatch(LayoutAction::Unfreeze(previous.orientation));
        self.driver.dispatch(LayoutAction::ShowContent);
        self.driver.fade(Tween::fade_in(), token).await?;
        token.check()?;

        self.enter(Phase::Idle, &mut report)?;
        self.driver.clear_hints();
        Err(err)
    }

    /// Toggle the menu. Ignored while a navigation is running.
    ///
    /// Returns the new menu state, or `None` if the toggle was ignored.
    pub fn toggle_menu(&self) -> Option<bool> {
        if self.is_busy() {
            return None;
        }
        self.driver.dispatch(LayoutAction::ToggleMenu);
        Some(self.driver.layout().menu_open)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use super::*;
    use crate::models::{Orientation, PageContent, reduce};

    /// Pending once, then ready. Lets `tokio::join!` interleave two runs.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();
        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    fn yield_once() -> YieldOnce {
        YieldOnce(false)
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Fade { from: f64, to: f64 },
        Resolve(Route),
        Present(Route),
        Unfreeze(Orientation),
        SnapMenu,
        Settle,
        ClearHints,
    }

    #[derive(Clone, Default)]
    struct MockDriver {
        inner: Rc<MockState>,
    }

    #[derive(Default)]
    struct MockState {
        layout: RefCell<LayoutState>,
        opacity: Cell<f64>,
        panel_offset: Cell<f64>,
        phases: RefCell<Vec<Phase>>,
        calls: RefCell<Vec<Call>>,
        pages: RefCell<HashMap<Route, Orientation>>,
    }

    impl MockDriver {
        fn new(layout: LayoutState) -> Self {
            let driver = Self::default();
            *driver.inner.layout.borrow_mut() = layout;
            driver.inner.opacity.set(1.0);
            driver
                .inner
                .pages
                .borrow_mut()
                .extend([
                    (Route::Home, Orientation::Right),
                    (Route::Work, Orientation::Left),
                    (Route::Contact, Orientation::Full),
                ]);
            driver
        }

        fn calls(&self) -> Vec<Call> {
            self.inner.calls.borrow().clone()
        }

        fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
            self.inner.calls.borrow().iter().filter(|c| pred(c)).count()
        }
    }

    impl TransitionDriver for MockDriver {
        fn layout(&self) -> LayoutState {
            *self.inner.layout.borrow()
        }

        fn dispatch(&self, action: LayoutAction) {
            if let LayoutAction::Unfreeze(orientation) = action {
                self.inner.calls.borrow_mut().push(Call::Unfreeze(orientation));
            }
            let next = reduce(self.layout(), action);
            *self.inner.layout.borrow_mut() = next;
        }

        fn enter_phase(&self, phase: Phase) {
            self.inner.phases.borrow_mut().push(phase);
        }

        fn opacity(&self) -> f64 {
            self.inner.opacity.get()
        }

        async fn fade(&self, tween: Tween, token: &CancelToken) -> Result<(), TransitionError> {
            self.inner.calls.borrow_mut().push(Call::Fade {
                from: tween.from,
                to: tween.to,
            });
            yield_once().await;
            token.check()?;
            self.inner.opacity.set(tween.to);
            Ok(())
        }

        async fn resolve(&self, route: &Route) -> Result<PageAttributes, TransitionError> {
            self.inner.calls.borrow_mut().push(Call::Resolve(route.clone()));
            yield_once().await;
            let orientation = self
                .inner
                .pages
                .borrow()
                .get(route)
                .copied()
                .ok_or_else(|| TransitionError::RouteFailed(format!("no page for {}", route)))?;
            Ok(PageAttributes {
                route: route.clone(),
                page_name: route.display_name(),
                orientation,
                provides_heading: false,
                content: PageContent::NotFound,
            })
        }

        fn present(&self, page: &PageAttributes) {
            self.inner
                .calls
                .borrow_mut()
                .push(Call::Present(page.route.clone()));
        }

        fn snap_menu_closed(&self) {
            self.inner.calls.borrow_mut().push(Call::SnapMenu);
        }

        async fn settle_panel(&self, token: &CancelToken) -> Result<(), TransitionError> {
            self.inner.calls.borrow_mut().push(Call::Settle);
            yield_once().await;
            token.check()?;
            self.inner.panel_offset.set(0.0);
            Ok(())
        }

        fn clear_hints(&self) {
            self.inner.calls.borrow_mut().push(Call::ClearHints);
        }
    }

    const FULL_RUN: [Phase; 5] = [
        Phase::FadingOut,
        Phase::AwaitingRoute,
        Phase::Repositioning,
        Phase::FadingIn,
        Phase::Idle,
    ];

    #[test]
    fn test_phase_successors() {
        assert!(Phase::Idle.can_advance_to(Phase::FadingOut));
        assert!(Phase::AwaitingRoute.can_advance_to(Phase::FadingOut));
        assert!(Phase::AwaitingRoute.can_advance_to(Phase::FadingIn));
        assert!(!Phase::Idle.can_advance_to(Phase::FadingIn));
        assert!(!Phase::FadingOut.can_advance_to(Phase::Repositioning));
        assert_eq!(
            Phase::Repositioning.advance(Phase::Idle),
            Err(TransitionError::InvalidTransition {
                from: Phase::Repositioning,
                to: Phase::Idle,
            })
        );
    }

    #[tokio::test]
    async fn test_phase_order_for_all_menu_and_orientation_combinations() {
        for menu_open in [false, true] {
            for orientation_changes in [false, true] {
                let start = if orientation_changes {
                    Orientation::Right
                } else {
                    Orientation::Left
                };
                let mut layout = LayoutState::with_orientation(start);
                layout.menu_open = menu_open;
                let driver = MockDriver::new(layout);
                driver.inner.panel_offset.set(12.0);
                let orchestrator = Orchestrator::new(driver.clone());

                let report = orchestrator.navigate(Route::Work).await.unwrap();

                assert_eq!(report.phases, FULL_RUN.to_vec());
                assert_eq!(*driver.inner.phases.borrow(), FULL_RUN.to_vec());
                assert_eq!(orchestrator.phase(), Phase::Idle);

                let layout = driver.layout();
                assert!(!layout.menu_open);
                assert!(!layout.frozen);
                assert!(layout.display_content);
                assert_eq!(layout.orientation, Orientation::Left);

                let expect_reposition = menu_open || orientation_changes;
                assert_eq!(report.repositioned, expect_reposition);
                assert_eq!(driver.count(|c| *c == Call::Settle), expect_reposition as usize);
                assert_eq!(driver.count(|c| *c == Call::SnapMenu), menu_open as usize);
            }
        }
    }

    #[tokio::test]
    async fn test_no_reposition_leaves_panel_untouched() {
        let driver = MockDriver::new(LayoutState::with_orientation(Orientation::Left));
        driver.inner.panel_offset.set(12.0);
        let orchestrator = Orchestrator::new(driver.clone());

        let report = orchestrator.navigate(Route::Work).await.unwrap();

        assert!(!report.repositioned);
        assert_eq!(report.awaited, 3);
        assert_eq!(driver.inner.panel_offset.get(), 12.0);
    }

    #[tokio::test]
    async fn test_home_to_work_end_to_end() {
        let driver = MockDriver::new(LayoutState::with_orientation(Orientation::Right));
        let orchestrator = Orchestrator::new(driver.clone());

        let report = orchestrator.navigate(Route::Work).await.unwrap();

        assert_eq!(report.awaited, 4);
        assert!(report.repositioned);
        assert_eq!(
            driver.calls(),
            vec![
                Call::Fade { from: 1.0, to: 0.0 },
                Call::Resolve(Route::Work),
                Call::Present(Route::Work),
                Call::Unfreeze(Orientation::Left),
                Call::Settle,
                Call::Fade { from: 0.0, to: 1.0 },
                Call::ClearHints,
            ]
        );
    }

    #[tokio::test]
    async fn test_route_failure_restores_previous_page() {
        let driver = MockDriver::new(LayoutState::with_orientation(Orientation::Right));
        let orchestrator = Orchestrator::new(driver.clone());
        let missing = Route::Project {
            slug: "gone".to_string(),
        };

        let result = orchestrator.navigate(missing).await;

        assert!(matches!(result, Err(TransitionError::RouteFailed(_))));
        assert_eq!(
            *driver.inner.phases.borrow(),
            vec![
                Phase::FadingOut,
                Phase::AwaitingRoute,
                Phase::FadingIn,
                Phase::Idle
            ]
        );
        let layout = driver.layout();
        assert_eq!(layout.orientation, Orientation::Right);
        assert!(!layout.frozen);
        assert!(layout.display_content);
        assert_eq!(driver.opacity(), 1.0);
        assert_eq!(driver.count(|c| matches!(c, Call::Present(_))), 0);
    }

    #[tokio::test]
    async fn test_new_navigation_supersedes_running_one() {
        let driver = MockDriver::new(LayoutState::with_orientation(Orientation::Right));
        let orchestrator = Orchestrator::new(driver.clone());
        let second = orchestrator.clone();

        let (first, latest) = tokio::join!(orchestrator.navigate(Route::Work), async {
            yield_once().await;
            second.navigate(Route::Contact).await
        });

        assert_eq!(first, Err(TransitionError::Superseded));
        let report = latest.unwrap();
        assert_eq!(report.phases.last(), Some(&Phase::Idle));
        assert_eq!(orchestrator.phase(), Phase::Idle);
        assert_eq!(driver.layout().orientation, Orientation::Full);
        assert_eq!(driver.count(|c| *c == Call::Present(Route::Work)), 0);
        assert_eq!(driver.count(|c| *c == Call::Present(Route::Contact)), 1);
    }

    /// Navigate to `first`, and to `Contact` as soon as the first run has
    /// entered `phase`. Returns the first run's result and every driver call
    /// made from the moment the second navigation started.
    async fn supersede_during(
        start: Orientation,
        first: Route,
        phase: Phase,
    ) -> (Result<TransitionReport, TransitionError>, Vec<Call>, MockDriver) {
        let driver = MockDriver::new(LayoutState::with_orientation(start));
        let orchestrator = Orchestrator::new(driver.clone());
        let second = orchestrator.clone();
        let watch = driver.clone();

        let (first, (mark, latest)) = tokio::join!(orchestrator.navigate(first), async move {
            while watch.inner.phases.borrow().last() != Some(&phase) {
                yield_once().await;
            }
            let mark = watch.inner.calls.borrow().len();
            (mark, second.navigate(Route::Contact).await)
        });

        assert!(latest.is_ok(), "second navigation failed: {:?}", latest);
        assert_eq!(orchestrator.phase(), Phase::Idle);
        let after = driver.calls()[mark..].to_vec();
        (first, after, driver)
    }

    #[tokio::test]
    async fn test_superseded_while_awaiting_route_never_presents() {
        let (first, after, driver) =
            supersede_during(Orientation::Right, Route::Work, Phase::AwaitingRoute).await;

        assert_eq!(first, Err(TransitionError::Superseded));
        assert!(!after.contains(&Call::Present(Route::Work)));
        assert!(!after.contains(&Call::Unfreeze(Orientation::Left)));
        assert_eq!(driver.count(|c| *c == Call::Present(Route::Work)), 0);
        assert_eq!(driver.count(|c| *c == Call::Present(Route::Contact)), 1);
        assert_eq!(driver.layout().orientation, Orientation::Full);
    }

    #[tokio::test]
    async fn test_superseded_while_repositioning_stops_after_settle() {
        let (first, after, driver) =
            supersede_during(Orientation::Right, Route::Work, Phase::Repositioning).await;

        assert_eq!(first, Err(TransitionError::Superseded));
        // Work was presented before the second navigation began, never after.
        assert_eq!(driver.count(|c| *c == Call::Present(Route::Work)), 1);
        assert!(!after.contains(&Call::Present(Route::Work)));
        assert!(!after.contains(&Call::Unfreeze(Orientation::Left)));
        assert_eq!(
            after
                .iter()
                .filter(|c| matches!(c, Call::Present(_) | Call::Unfreeze(_)))
                .cloned()
                .collect::<Vec<_>>(),
            vec![
                Call::Present(Route::Contact),
                Call::Unfreeze(Orientation::Full)
            ]
        );
        assert_eq!(driver.layout().orientation, Orientation::Full);
        assert!(driver.layout().display_content);
    }

    #[tokio::test]
    async fn test_superseded_recovery_does_not_restore_old_page() {
        let missing = Route::Project {
            slug: "gone".to_string(),
        };
        let (first, after, driver) =
            supersede_during(Orientation::Right, missing, Phase::FadingIn).await;

        // The new navigation wins over the pending route failure.
        assert_eq!(first, Err(TransitionError::Superseded));
        assert!(!after.contains(&Call::Unfreeze(Orientation::Right)));
        assert_eq!(driver.count(|c| *c == Call::Unfreeze(Orientation::Right)), 1);
        assert_eq!(driver.layout().orientation, Orientation::Full);
        assert!(!driver.layout().frozen);
        assert_eq!(driver.opacity(), 1.0);
    }

    #[tokio::test]
    async fn test_toggle_menu_round_trip_and_busy_guard() {
        let initial = LayoutState::with_orientation(Orientation::Left);
        let driver = MockDriver::new(initial);
        let orchestrator = Orchestrator::new(driver.clone());

        assert_eq!(orchestrator.toggle_menu(), Some(true));
        assert_eq!(orchestrator.toggle_menu(), Some(false));
        assert_eq!(driver.layout(), initial);

        orchestrator.phase.set(Phase::AwaitingRoute);
        assert_eq!(orchestrator.toggle_menu(), None);
        assert_eq!(driver.layout(), initial);
    }

    #[test]
    fn test_cancel_token() {
        let driver = MockDriver::new(LayoutState::default());
        let orchestrator = Orchestrator::new(driver);
        let first = orchestrator.begin();
        assert!(first.check().is_ok());
        let second = orchestrator.begin();
        assert_eq!(first.check(), Err(TransitionError::Superseded));
        assert!(!second.is_cancelled());
    }

    #[test]
    fn test_ran_to_end_only_absorbs_superseded() {
        assert_eq!(ran_to_end(Ok(())), Ok(true));
        assert_eq!(ran_to_end(Err(TransitionError::Superseded)), Ok(false));
        let failed = TransitionError::RouteFailed("offline".to_string());
        assert_eq!(ran_to_end(Err(failed.clone())), Err(failed));
    }

    #[test]
    fn test_cancel_source_cancel_without_issue() {
        let source = CancelSource::new();
        let token = source.issue();
        source.cancel();
        assert!(token.is_cancelled());
        assert!(!source.issue().is_cancelled());
    }
}
