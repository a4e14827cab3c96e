//! Project listing.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::image::Thumbnail;
use crate::components::icons as ic;
use crate::models::{PageContent, ProjectSummary, Route};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

const THUMB_WIDTH: u32 = 640;
const THUMB_HEIGHT: u32 = 400;

pub fn light(content: &PageContent) -> AnyView {
    let PageContent::Work(projects) = content else {
        return ().into_any();
    };
    let count = projects.len();

    view! {
        <div class=css::intro>
            <h2 class=css::title>"Selected work"</h2>
            <p class=css::meta>
                {match count {
                    1 => "1 project".to_string(),
                    n => format!("{} projects", n),
                }}
            </p>
        </div>
    }
    .into_any()
}

pub fn dark(content: &PageContent) -> AnyView {
    let PageContent::Work(projects) = content else {
        return ().into_any();
    };
    let projects = projects.clone();

    view! {
        <ul class=css::cards>
            {projects.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
fn ProjectCard(project: ProjectSummary) -> impl IntoView {
    let href = Route::Project {
        slug: project.slug.clone(),
    }
    .to_hash();
    let ProjectSummary {
        title,
        summary,
        thumbnail,
        tags,
        ..
    } = project;

    view! {
        <li class=css::card>
            <a href=href>
                {thumbnail
                    .map(|image| {
                        view! { <Thumbnail image=image width=THUMB_WIDTH height=THUMB_HEIGHT /> }
                    })}
                <h3>
                    {title}
                    <Icon icon=ic::CHEVRON_RIGHT />
                </h3>
                <p>{summary}</p>
                <ul class=css::tags>
                    {tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
                </ul>
            </a>
        </li>
    }
}
