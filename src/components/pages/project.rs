//! Single project: summary on the light side, case study on the dark side.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::image::ResponsiveImage;
use crate::components::icons as ic;
use crate::models::{PageContent, Route};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

pub fn light(content: &PageContent) -> AnyView {
    let PageContent::Project(project) = content else {
        return ().into_any();
    };
    let tags = project.tags.clone();
    let links = project.links.clone();

    view! {
        <div class=css::intro>
            <a class=css::back href=Route::Work.to_hash()>
                <Icon icon=ic::CHEVRON_LEFT />
                "All work"
            </a>
            <h1 class=css::title>{project.title.clone()}</h1>
            <ul class=css::tags>
                {tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
            </ul>
            <ul class=css::links>
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.url target="_blank" rel="noopener noreferrer">
                                    {link.label}
                                    <Icon icon=ic::EXTERNAL_LINK />
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_any()
}

pub fn dark(content: &PageContent) -> AnyView {
    let PageContent::Project(project) = content else {
        return ().into_any();
    };
    let images = project.images.clone();

    view! {
        <article class=css::article>
            <div class=css::prose inner_html=project.body.clone()></div>
            <div class=css::gallery>
                {images
                    .into_iter()
                    .map(|image| view! { <ResponsiveImage image=image /> })
                    .collect_view()}
            </div>
        </article>
    }
    .into_any()
}
