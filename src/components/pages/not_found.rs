//! Fallback for unknown paths.

use leptos::prelude::*;

use crate::models::PageContent;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

pub fn light(_: &PageContent) -> AnyView {
    view! {
        <div class=css::intro>
            <h2 class=css::title>"Page not found"</h2>
            <p class=css::meta>"Nothing lives at this address."</p>
            <a class=css::more href="#/">"Back home"</a>
        </div>
    }
    .into_any()
}
