//! Mobile swipe-sequence layout.
//!
//! The pages of the active sequence sit side by side in a horizontally
//! scrolling, snapping strip. A route outside every sequence gets a strip of
//! its own. When a navigation completes the strip scrolls to the new route's
//! section: instantly when the strip was just laid out, with a spring when it
//! stays the same. If the sequence only shows up after the navigation (a
//! deep link racing the project listing), the scroll follows it. User
//! scrolling is sampled into `ctx.closest_page`; it does not navigate.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::AppContext;
use crate::components::pages::{Panel, render_panel};
use crate::config::site;
use crate::core::CancelSource;
use crate::core::scroll::{
    ScrollMode, ScrollSampler, completed_position, plan_scroll, section_offset,
};
use crate::models::Route;
use crate::utils::frame::run_spring;

stylance::import_crate_style!(css, "src/components/mobile/mobile.module.css");

/// Top-level pages in the header.
const NAV_ROUTES: [Route; 3] = [Route::Home, Route::Work, Route::Contact];

#[component]
pub fn MobileLayout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let strip = NodeRef::<leptos::html::Div>::new();
    let sampler = StoredValue::new(ScrollSampler::new());
    let scrolls = StoredValue::new_local(CancelSource::new());
    // Sequence the last scroll happened in
    let scrolled_in = StoredValue::new(None::<String>);

    let sequence = Memo::new(move |_| {
        let route = ctx.route.get();
        ctx.sequences.with(|s| s.sequence_for(&route))
    });
    let routes = move || {
        sequence.with(|s| s.pages.iter().map(|p| p.route.clone()).collect::<Vec<_>>())
    };

    // Where the completed navigation sits; changes when either the
    // navigation or the sequence around it does.
    let scroll_target = Memo::new(move |_| {
        ctx.navigation.with(|event| {
            sequence.with(|s| completed_position(event.as_ref(), s).map(|i| (s.name.clone(), i)))
        })
    });

    // Follow completed navigations
    Effect::new(move || {
        let Some((name, index)) = scroll_target.get() else {
            return;
        };
        let Some(el) = strip.get_untracked() else {
            return;
        };

        let target = section_offset(index, el.client_width() as f64);
        let mode = scrolled_in.with_value(|prev| ScrollMode::between(prev.as_deref(), &name));
        scrolled_in.set_value(Some(name));

        match plan_scroll(el.scroll_left() as f64, target, mode) {
            None => {
                scrolls.with_value(|s| s.cancel());
                sampler.update_value(|s| s.end_auto_scroll());
                el.set_scroll_left(target.round() as i32);
            }
            Some(spring) => {
                let token = scrolls.with_value(|s| s.issue());
                sampler.update_value(|s| s.begin_auto_scroll());
                spawn_local(async move {
                    let finished = run_spring(spring, move || token.is_cancelled(), move |x| {
                        el.set_scroll_left(x.round() as i32)
                    })
                    .await;
                    // A cancelled scroll was replaced by one still running.
                    if finished {
                        sampler.update_value(|s| s.end_auto_scroll());
                    }
                });
            }
        }
    });

    let on_scroll = move |_| {
        let Some(el) = strip.get_untracked() else {
            return;
        };
        let count = sequence.with_untracked(|s| s.len());
        let changed = sampler
            .try_update_value(|s| {
                s.sample(el.scroll_left() as f64, el.client_width() as f64, count)
            })
            .flatten();
        if let Some(index) = changed {
            ctx.closest_page.set(Some(index));
        }
    };

    let position = move || {
        let count = sequence.with(|s| s.len());
        ctx.closest_page
            .get()
            .filter(|_| count > 1)
            .map(|index| format!("{} / {}", index + 1, count))
    };

    view! {
        <div class=css::mobile>
            <header class=css::header>
                <a class=css::siteTitle href="#/">{site().title.clone()}</a>
                <nav class=css::nav>
                    {NAV_ROUTES
                        .into_iter()
                        .map(|route| {
                            view! { <a href=route.to_hash()>{route.display_name()}</a> }
                        })
                        .collect_view()}
                </nav>
                <span class=css::position>{position}</span>
            </header>
            <div class=css::strip node_ref=strip on:scroll=on_scroll>
                <For each=routes key=|route| route.clone() let:route>
                    <MobileSection route=route />
                </For>
            </div>
            {move || {
                ctx.nav_error
                    .get()
                    .map(|message| view! { <p class=css::error role="alert">{message}</p> })
            }}
        </div>
    }
}

/// One page of the strip: both panels stacked once visited, the title
/// alone until then.
#[component]
fn MobileSection(route: Route) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let page = {
        let route = route.clone();
        Memo::new(move |_| ctx.sequences.with(|s| s.page_for(&route)))
    };

    let title = move || page.with(|p| p.title.clone());
    let body = move || {
        page.with(|p| {
            let attributes = p.attributes.as_ref()?;
            ctx.pages.with_value(|pages| {
                let light = render_panel(pages, attributes, Panel::Light);
                let dark = render_panel(pages, attributes, Panel::Dark);
                Some(view! {
                    <div class=css::light>{light}</div>
                    {dark.map(|dark| view! { <div class=css::dark>{dark}</div> })}
                })
            })
        })
    };

    view! {
        <section class=css::section data-route=route.path()>
            {move || match body() {
                Some(body) => body.into_any(),
                None => view! { <h2 class=css::placeholder>{title}</h2> }.into_any(),
            }}
        </section>
    }
}
