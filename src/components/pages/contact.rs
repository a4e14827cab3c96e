//! Contact page and form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::contact::MAX_MESSAGE_LEN;
use crate::config::site;
use crate::core::contact::{ContactMessage, FormStatus, submit};
use crate::models::PageContent;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

pub fn light(content: &PageContent) -> AnyView {
    let PageContent::Contact(page) = content else {
        return ().into_any();
    };
    let links = page.links.clone();

    view! {
        <div class=css::contact>
            <h1 class=css::title>{page.title.clone()}</h1>
            <div class=css::prose inner_html=page.body.clone()></div>
            <ContactForm />
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
        </div>
    }
    .into_any()
}

#[component]
fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(FormStatus::is_sending) {
            return;
        }

        let draft = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let validated = match draft.validate() {
            Ok(validated) => validated,
            Err(err) => {
                status.set(FormStatus::Failed(err.to_string()));
                return;
            }
        };

        status.set(FormStatus::Sending);
        spawn_local(async move {
            match submit(&site().contact_endpoint, &validated).await {
                Ok(()) => {
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    status.set(FormStatus::Sent);
                }
                Err(err) => status.set(FormStatus::Failed(err.to_string())),
            }
        });
    };

    let remaining = move || MAX_MESSAGE_LEN as i64 - message.with(|m| m.chars().count()) as i64;
    let sending = move || status.with(FormStatus::is_sending);

    view! {
        <form class=css::form on:submit=on_submit novalidate=true>
            <label>
                "Name"
                <input
                    type="text"
                    autocomplete="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Message"
                <textarea
                    rows="6"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
                <span class=move || {
                    if remaining() < 0 {
                        format!("{} {}", css::meta, css::over)
                    } else {
                        css::meta.to_string()
                    }
                }>
                    {move || format!("{} characters left", remaining())}
                </span>
            </label>
            <button type="submit" class=css::send disabled=sending>
                <Icon icon=ic::SEND />
                {move || if sending() { "Sending…" } else { "Send" }}
            </button>
            {move || match status.get() {
                FormStatus::Idle | FormStatus::Sending => None,
                FormStatus::Sent => {
                    Some(
                        view! {
                            <p class=css::status role="status">
                                <Icon icon=ic::MAIL />
                                "Thanks, your message is on its way."
                            </p>
                        }
                            .into_any(),
                    )
                }
                FormStatus::Failed(reason) => {
                    Some(
                        view! {
                            <p class=css::status role="alert">
                                {format!("Could not send: {}", reason)}
                            </p>
                        }
                            .into_any(),
                    )
                }
            }}
        </form>
    }
}
