//! Desktop split-panel layout.
//!
//! ## Layout
//!
//! - **`panel-on-left`**: fixed light panel left, scrolling dark panel right
//! - **`panel-on-right`**: the mirror image
//! - **`panel-full`**: a single full-bleed light panel, no dark panel
//!
//! The menu slides in over the light panel's edge and pushes both panels
//! away from it. All offsets are derived from `motion` on every frame.

use leptos::prelude::*;

use super::menu::{Menu, MenuToggle, use_menu_motion};
use crate::app::AppContext;
use crate::components::pages::{Panel, render_panel};
use crate::components::responsive::{Media, use_matching_queries};
use crate::components::transition::use_transitions;
use crate::config::breakpoints::WIDE_QUERY;
use crate::config::site;
use crate::core::animation::{overlay_opacity, panel_offset};
use crate::core::error::MediaQueryError;
use crate::models::Side;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Split-panel layout container.
#[component]
pub fn SplitLayout() -> Result<impl IntoView, MediaQueryError> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let transitions = use_transitions();
    let matching = use_matching_queries()?;
    use_menu_motion(ctx, transitions);

    let layout = ctx.layout.state;
    let motion = ctx.motion;
    let orientation = Memo::new(move |_| layout.with(|s| s.orientation));
    let display_content = Memo::new(move |_| layout.with(|s| s.display_content));
    let has_dark = Memo::new(move |_| orientation.get().has_dark_panel());
    let provides_heading = Memo::new(move |_| {
        ctx.page
            .with(|p| p.as_ref().is_some_and(|p| p.provides_heading))
    });

    let root_class = move || format!("{} {}", css::layout, orientation.get().class_name());

    // Push from the menu, shared by both panels
    let push = move || panel_offset(motion.menu_progress.get(), motion.menu_side.get());
    let hint = move |property: &str| {
        if motion.will_change.get() {
            format!(" will-change: {};", property)
        } else {
            String::new()
        }
    };
    let light_style = move || {
        format!(
            "transform: translate3d({:.2}px, 0, 0);{}",
            motion.settle_offset.get() + push(),
            hint("transform")
        )
    };
    let dark_style = move || {
        format!(
            "transform: translate3d({:.2}px, 0, 0);{}",
            push(),
            hint("transform")
        )
    };
    let content_style =
        move || format!("opacity: {:.3};{}", motion.opacity.get(), hint("opacity"));
    let overlay_style = move || {
        let progress = motion.menu_progress.get();
        format!(
            "opacity: {:.3}; pointer-events: {};",
            overlay_opacity(progress),
            if progress > 0.0 { "auto" } else { "none" }
        )
    };

    // Content is not rendered at all while a transition waits for the route.
    let panel = move |which: Panel| {
        if !display_content.get() {
            return None;
        }
        ctx.page.with(|page| {
            let page = page.as_ref()?;
            ctx.pages.with_value(|pages| render_panel(pages, page, which))
        })
    };

    let close_overlay = move |_| {
        transitions.toggle_menu();
    };

    Ok(view! {
        <div class=root_class data-media=move || matching.get().join(", ")>
            <Menu side=Side::Left />
            <Menu side=Side::Right />

            <Show when=move || has_dark.get()>
                <main class=css::dark style=dark_style>
                    <div class=css::content style=content_style>
                        {move || panel(Panel::Dark)}
                    </div>
                </main>
            </Show>

            <aside class=css::light style=light_style>
                <header class=css::masthead>
                    <MenuToggle />
                    <Show when=move || !provides_heading.get()>
                        <a class=css::siteTitle href="#/">{site().title.clone()}</a>
                    </Show>
                    <Media query=WIDE_QUERY fallback=|| ()>
                        <span class=css::tagline>{site().tagline.clone()}</span>
                    </Media>
                </header>
                <div class=css::content style=content_style>
                    {move || panel(Panel::Light)}
                </div>
                {move || {
                    ctx.nav_error
                        .get()
                        .map(|message| view! { <p class=css::error role="alert">{message}</p> })
                }}
            </aside>

            <div class=css::overlay style=overlay_style on:click=close_overlay></div>
        </div>
    })
}
