//! Slide-out menu.
//!
//! One menu sits off-screen on each edge; the one on the light panel's side
//! is the one that opens. Outside a navigation, opening and closing slides
//! `motion.menu_progress`; during a navigation the transition snaps it shut.
//! The open menu can also be swiped back toward its edge.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::transition::{TransitionContext, use_transitions};
use crate::config::site;
use crate::core::animation::{menu_offset, progress_from_drag};
use crate::models::{Route, Side};
use crate::utils::dom::ScrollLock;

stylance::import_crate_style!(css, "src/components/layout/menu.module.css");

/// Top-level pages listed in the menu.
const MENU_ROUTES: [Route; 3] = [Route::Home, Route::Work, Route::Contact];

/// Animate the menu when its open state changes and hold the touch scroll
/// lock while it is open.
pub fn use_menu_motion(ctx: AppContext, transitions: TransitionContext) {
    let layout = ctx.layout;
    let motion = ctx.motion;

    Effect::new(move |prev: Option<(bool, Option<ScrollLock>)>| {
        let open = layout.state.with(|s| s.menu_open);
        let (was_open, lock) = prev.unwrap_or((false, None));
        if open == was_open {
            return (open, lock);
        }

        if open {
            motion
                .menu_side
                .set(layout.get().orientation.menu_side());
        }
        // A navigation closes the menu itself, without a slide.
        if layout.phase.get_untracked().is_idle() {
            let driver = transitions
                .orchestrator
                .with_value(|o| o.driver().clone());
            spawn_local(async move { driver.slide_menu(open).await });
        }

        let lock = if open {
            lock.or_else(ScrollLock::install)
        } else {
            None
        };
        (open, lock)
    });
}

/// Menu button in the light panel's masthead.
#[component]
pub fn MenuToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let transitions = use_transitions();
    let open = Memo::new(move |_| ctx.layout.state.with(|s| s.menu_open));

    let on_click = move |_: leptos::ev::MouseEvent| {
        if transitions.toggle_menu().is_none() {
            tracing::debug!("menu toggle ignored during navigation");
        }
    };

    view! {
        <button
            class=css::toggle
            on:click=on_click
            aria-expanded=move || open.get().to_string()
            title=move || if open.get() { "Close menu" } else { "Open menu" }
        >
            {move || {
                if open.get() {
                    view! { <Icon icon=ic::CLOSE /> }
                } else {
                    view! { <Icon icon=ic::MENU /> }
                }
            }}
        </button>
    }
}

/// Menu panel on one edge of the viewport.
#[component]
pub fn Menu(side: Side) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let motion = ctx.motion;

    let active = Memo::new(move |_| motion.menu_side.get() == side);
    let style = move || {
        let progress = if active.get() {
            motion.menu_progress.get()
        } else {
            0.0
        };
        format!("transform: translate3d({:.2}px, 0, 0);", menu_offset(progress, side))
    };
    let class = match side {
        Side::Left => format!("{} {}", css::menu, css::left),
        Side::Right => format!("{} {}", css::menu, css::right),
    };
    let current = Memo::new(move |_| {
        let requested = ctx.route.get();
        ctx.page.with(|page| {
            let displayed = page.as_ref().map(|p| &p.route);
            ctx.layout
                .state
                .with(|s| s.current_route(displayed, &requested).clone())
        })
    });

    // Swipe toward the edge to close
    let transitions = use_transitions();
    let drag_start = StoredValue::new(None::<f64>);
    let touch_x = |ev: &leptos::ev::TouchEvent| {
        ev.touches().get(0).map(|touch| touch.client_x() as f64)
    };
    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if active.get_untracked() && ctx.layout.get().menu_open {
            drag_start.set_value(touch_x(&ev));
        }
    };
    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        let (Some(start), Some(x)) = (drag_start.get_value(), touch_x(&ev)) else {
            return;
        };
        let toward_edge = (x - start) * side.sign();
        motion.menu_progress.set(1.0 - progress_from_drag(toward_edge));
    };
    let on_touch_end = move |_: leptos::ev::TouchEvent| {
        if drag_start.get_value().is_none() {
            return;
        }
        drag_start.set_value(None);
        if motion.menu_progress.get_untracked() < 0.5 {
            transitions.toggle_menu();
        } else {
            let driver = transitions
                .orchestrator
                .with_value(|o| o.driver().clone());
            spawn_local(async move { driver.slide_menu(true).await });
        }
    };

    view! {
        <nav
            class=class
            style=style
            data-scroll-lock-allow=""
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            aria-hidden=move || (!active.get() || !ctx.layout.state.with(|s| s.menu_open)).to_string()
        >
            <ul class=css::pages>
                {MENU_ROUTES
                    .into_iter()
                    .map(|route| {
                        let href = route.to_hash();
                        let label = route.display_name();
                        let is_current = move || current.with(|c| c == &route);
                        view! {
                            <li>
                                <a
                                    href=href
                                    class=css::pageLink
                                    aria-current=move || is_current().then_some("page")
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <ul class=css::external>
                {site()
                    .menu_links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.url.clone() target="_blank" rel="noopener noreferrer">
                                    {link.label.clone()}
                                    <Icon icon=ic::EXTERNAL_LINK />
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
