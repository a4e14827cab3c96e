//! Responsive switch components.
//!
//! [`Media`] renders its children when a viewport query matches and its
//! `fallback` otherwise. Until the app has mounted both branches are in the
//! DOM and a generated stylesheet hides the wrong one; after that only the
//! matching branch is rendered.
//!
//! Switches nest. Each one pushes its query onto the scope it provides, so a
//! descendant asking for the same query reuses the ancestor's signal, and
//! [`use_matching_queries`] reports which enclosing queries currently match.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::core::error::MediaQueryError;
use crate::core::responsive::{
    Branch, MatchStack, MediaQuery, RenderPlan, branch_class, fallback_stylesheet,
};

#[derive(Clone)]
struct MediaContext {
    /// Set once the first render is in the document
    mounted: RwSignal<bool>,
    scope: MatchStack<Signal<bool>>,
    next_id: StoredValue<usize>,
}

/// Root wrapper required by every [`Media`] below it.
#[component]
pub fn MediaQueryProvider(children: Children) -> impl IntoView {
    let mounted = RwSignal::new(false);
    // Effects first run after the initial render has been mounted.
    Effect::new(move || mounted.set(true));

    provide_context(MediaContext {
        mounted,
        scope: MatchStack::new(),
        next_id: StoredValue::new(0),
    });

    children()
}

/// Render `children` on viewports matching `query`, `fallback` elsewhere.
///
/// Fails with [`MediaQueryError::MissingProvider`] outside a
/// [`MediaQueryProvider`], and with [`MediaQueryError::InvalidQuery`] for
/// anything other than width clauses.
#[component]
pub fn Media(
    #[prop(into)] query: String,
    children: ChildrenFn,
    #[prop(into)] fallback: ViewFn,
) -> Result<impl IntoView, MediaQueryError> {
    let media =
        use_context::<MediaContext>().ok_or(MediaQueryError::MissingProvider("Media"))?;
    let parsed = MediaQuery::parse(&query)?;

    let matches = match media.scope.find(&query) {
        Some(signal) => *signal,
        None => use_media_query(query.clone()),
    };

    let id = media.next_id.get_value();
    media.next_id.set_value(id + 1);

    provide_context(MediaContext {
        scope: media.scope.push(&query, matches),
        ..media.clone()
    });

    let mounted = media.mounted;
    let plan = Memo::new(move |_| RenderPlan::for_state(mounted.get(), matches.get()));
    let show_matched = Memo::new(move |_| plan.get().renders(Branch::Matched));
    let show_fallback = Memo::new(move |_| plan.get().renders(Branch::Fallback));

    let stylesheet = fallback_stylesheet(id, &parsed);
    let matched_class = branch_class(id, Branch::Matched);
    let fallback_class = branch_class(id, Branch::Fallback);

    Ok(view! {
        <Show when=move || !mounted.get()>
            <style>{stylesheet.clone()}</style>
        </Show>
        <Show when=move || show_matched.get()>
            <div class=matched_class.clone() style="display: contents">
                {children()}
            </div>
        </Show>
        <Show when=move || show_fallback.get()>
            <div class=fallback_class.clone() style="display: contents">
                {fallback.run()}
            </div>
        </Show>
    })
}

/// Queries of enclosing [`Media`] switches that currently match.
pub fn use_matching_queries() -> Result<Signal<Vec<String>>, MediaQueryError> {
    let media = use_context::<MediaContext>()
        .ok_or(MediaQueryError::MissingProvider("use_matching_queries"))?;
    let scope = media.scope;
    Ok(Signal::derive(move || {
        scope
            .map(|signal| signal.get())
            .matching()
            .into_iter()
            .map(str::to_string)
            .collect()
    }))
}
