//! Application router component.
//!
//! Handles URL-based routing with hash history for static hosting.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `ctx.route` follows `#/path`
//! - **Every hash change runs one transition**: the orchestrator fades the
//!   old page out, resolves the new one and fades it in; a newer hash change
//!   supersedes a running transition
//! - **Lifecycle is published**: `ctx.navigation` carries
//!   [`NavigationEvent`]s for the mobile layout and anything else listening
//! - **Failures restore the URL**: the previous page stays up and its hash
//!   is put back without a new history entry

use leptos::prelude::*;
use leptos::task::spawn_local;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use super::layout::SplitLayout;
use super::mobile::MobileLayout;
use super::responsive::Media;
use super::transition::TransitionContext;
use crate::app::AppContext;
use crate::config::breakpoints::DESKTOP_QUERY;
use crate::config::site;
use crate::core::ContentProvider;
use crate::core::error::TransitionError;
use crate::models::{NavigationEvent, PageAttributes, Route};
use crate::utils::dom::set_document_title;

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Routes:
/// - `#/` → Home
/// - `#/work` → Project listing
/// - `#/work/{slug}` → Project
/// - `#/contact` → Contact
/// - anything else → Not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let transitions = TransitionContext::new(ctx);
    provide_context(transitions);

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            let route = Route::current();
            if ctx.route.get_untracked() != route {
                ctx.route.set(route.clone());
                navigate(ctx, transitions, route);
            }
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Initial page, then the project listing for the work sequence
    navigate(ctx, transitions, ctx.route.get_untracked());
    prefetch_projects(ctx, transitions);

    view! {
        <Media query=DESKTOP_QUERY fallback=|| view! { <MobileLayout /> }>
            <SplitLayout />
        </Media>
    }
}

// ============================================================================
// Navigation
// ============================================================================

/// Run a transition to `route` in the background and publish its outcome.
pub fn navigate(ctx: AppContext, transitions: TransitionContext, route: Route) {
    let orchestrator = transitions.handle();
    let previous = ctx
        .page
        .with_untracked(|p| p.as_ref().map(|p| p.route.clone()));
    ctx.navigation
        .set(Some(NavigationEvent::Started(route.clone())));

    spawn_local(async move {
        match orchestrator.navigate(route.clone()).await {
            Ok(_) => {
                if let Some(page) = ctx.page.get_untracked() {
                    set_document_title(&document_title(&page, &site().title));
                }
                ctx.nav_error.set(None);
                ctx.navigation.set(Some(NavigationEvent::Completed(route)));
            }
            Err(TransitionError::Superseded) => {
                tracing::debug!(%route, "navigation superseded");
            }
            Err(err) => {
                tracing::warn!(%route, error = %err, "navigation failed");
                let message = err.to_string();
                ctx.nav_error.set(Some(message.clone()));
                ctx.navigation
                    .set(Some(NavigationEvent::Failed(route, message)));
                if let Some(previous) = previous {
                    previous.replace();
                    ctx.route.set(previous);
                }
            }
        }
    });
}

/// Fill the work sequence from the project listing.
fn prefetch_projects(ctx: AppContext, transitions: TransitionContext) {
    let provider = transitions.orchestrator.with_value(|o| o.driver().provider().clone());
    spawn_local(async move {
        match provider.projects().await {
            Ok(projects) => {
                tracing::debug!(count = projects.len(), "project sequence loaded");
                ctx.sequences.update(|s| s.set_projects(&projects));
            }
            Err(err) => tracing::warn!(error = %err, "failed to load project sequence"),
        }
    });
}

/// Document title for a page: `"{page} | {site}"`, or the site title alone
/// on the home page.
pub fn document_title(page: &PageAttributes, site_title: &str) -> String {
    match page.route {
        Route::Home => site_title.to_string(),
        _ => format!("{} | {}", page.page_name, site_title),
    }
}
