//! Root application module.
//!
//! Contains the main App component, the AppContext definition, the layout
//! store and the animated values shared by the desktop and mobile trees.

use leptos::prelude::*;

use crate::components::pages;
use crate::components::responsive::MediaQueryProvider;
use crate::components::router::AppRouter;
use crate::core::Phase;
use crate::core::error::RegistryError;
use crate::models::{
    LayoutAction, LayoutState, NavigationEvent, PageAttributes, PageRegistry, Route,
    SequenceRegistry, Side, reduce,
};

// ============================================================================
// LayoutStore
// ============================================================================

/// Single-writer store for [`LayoutState`].
///
/// Every mutation goes through [`dispatch`](Self::dispatch), which applies
/// the pure reducer to a copy and writes the result back.
#[derive(Clone, Copy)]
pub struct LayoutStore {
    pub state: RwSignal<LayoutState>,
    /// Orchestrator phase, mirrored for the view.
    pub phase: RwSignal<Phase>,
}

impl LayoutStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LayoutState::default()),
            phase: RwSignal::new(Phase::Idle),
        }
    }

    pub fn dispatch(&self, action: LayoutAction) {
        self.state.update(|state| *state = reduce(*state, action));
    }

    pub fn get(&self) -> LayoutState {
        self.state.get_untracked()
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Motion
// ============================================================================

/// Source animation values. Everything else on screen is derived from these.
#[derive(Clone, Copy)]
pub struct Motion {
    /// Content opacity, 0..1. Starts transparent; the first navigation
    /// fades the initial page in.
    pub opacity: RwSignal<f64>,
    /// Menu slide progress, 0 (closed) to 1 (open).
    pub menu_progress: RwSignal<f64>,
    /// Edge the menu is sliding in from.
    pub menu_side: RwSignal<Side>,
    /// Extra light panel offset (px) that springs back to zero.
    pub settle_offset: RwSignal<f64>,
    /// Emit `will-change` hints while a transition runs.
    pub will_change: RwSignal<bool>,
}

impl Motion {
    pub fn new() -> Self {
        Self {
            opacity: RwSignal::new(0.0),
            menu_progress: RwSignal::new(0.0),
            menu_side: RwSignal::new(Side::Right),
            settle_offset: RwSignal::new(0.0),
            will_change: RwSignal::new(false),
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap handles into the reactive arena.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Layout/menu state and orchestrator phase.
    pub layout: LayoutStore,
    /// Animated values.
    pub motion: Motion,
    /// Route the URL currently points at.
    pub route: RwSignal<Route>,
    /// Page being displayed. Only replaced while the layout is frozen and
    /// the new page has resolved.
    pub page: RwSignal<Option<PageAttributes>>,
    /// Mobile swipe sequences with lazily cached pages.
    pub sequences: RwSignal<SequenceRegistry>,
    /// Registered page specs.
    pub pages: StoredValue<PageRegistry>,
    /// Latest navigation lifecycle event.
    pub navigation: RwSignal<Option<NavigationEvent>>,
    /// Message from the last failed navigation, cleared on success.
    pub nav_error: RwSignal<Option<String>>,
    /// Mobile section nearest the viewport center. Read-only for consumers.
    pub closest_page: RwSignal<Option<usize>>,
}

impl AppContext {
    pub fn new(pages: PageRegistry) -> Self {
        Self {
            layout: LayoutStore::new(),
            motion: Motion::new(),
            route: RwSignal::new(Route::current()),
            page: RwSignal::new(None),
            sequences: RwSignal::new(SequenceRegistry::new()),
            pages: StoredValue::new(pages),
            navigation: RwSignal::new(None),
            nav_error: RwSignal::new(None),
            closest_page: RwSignal::new(None),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the site, which builds and provides the AppContext
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f4f1ea;
                    color: #1b1b1b;
                    font-family: Georgia, serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #5c5c5c; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #e8e4da;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #5c5c5c;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #b3261e;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #1b1b1b;
                                color: #f4f1ea;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-family: Georgia, serif;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Site />
        </ErrorBoundary>
    }
}

/// Builds the page registry, provides the context and mounts the router.
///
/// A registry error is returned to the surrounding boundary.
#[component]
fn Site() -> Result<impl IntoView, RegistryError> {
    let ctx = AppContext::new(pages::registry()?);
    provide_context(ctx);

    Ok(view! {
        <MediaQueryProvider>
            <AppRouter />
        </MediaQueryProvider>
    })
}
