use forum_core::{actions, render_nav};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::dom;
use crate::state::AppState;

#[component]
pub(crate) fn Nav(state: AppState) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        let Some(button) = dom::closest_with(&ev, "data-action") else {
            return;
        };

        let forum = state.forum();
        match button.get_attribute("data-action").as_deref() {
            Some(actions::SHOW_LOGIN) => forum.show_login(),
            Some(actions::SHOW_REGISTER) => forum.show_register(),
            Some(actions::SHOW_CREATE_POST) => {
                let _ = forum.show_create_post();
            }
            Some(actions::LOGOUT) => state.spawn(|forum| async move {
                let _ = forum.logout().await;
            }),
            _ => {}
        }
    };

    view! {
        <nav
            class="nav-links"
            on:click=on_click
            inner_html=move || state.page.with(|page| render_nav(&page.session).render_to_string())
        ></nav>
    }
}
