//! Home page: introduction on the dark side, portrait on the light side.

use leptos::prelude::*;

use super::image::ResponsiveImage;
use crate::models::PageContent;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

pub fn light(content: &PageContent) -> AnyView {
    let PageContent::Home(home) = content else {
        return ().into_any();
    };
    let portrait = home.portrait.clone();
    let links = home.links.clone();

    view! {
        <div class=css::portrait>
            {portrait.map(|image| view! { <ResponsiveImage image=image /> })}
        </div>
        <ul class=css::links>
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <li>
                            <a href=link.url target="_blank" rel="noopener noreferrer">
                                {link.label}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

pub fn dark(content: &PageContent) -> AnyView {
    let PageContent::Home(home) = content else {
        return ().into_any();
    };

    view! {
        <article class=css::article>
            <h1 class=css::title>{home.title.clone()}</h1>
            <div class=css::prose inner_html=home.body.clone()></div>
            <a class=css::more href="#/work">"See the work"</a>
        </article>
    }
    .into_any()
}
