use std::rc::Rc;

use forum_core::{Forum, PageState, Session};
use leptos::prelude::*;

use crate::api::GlooApi;
use crate::components::auth_panel::AuthPanel;
use crate::components::nav::Nav;
use crate::components::post_form::CreatePostPanel;
use crate::components::posts_panel::PostsPanel;
use crate::state::{AppState, BrowserUi};

#[component]
pub fn App() -> impl IntoView {
    let page = RwSignal::new(PageState::default());
    let forum = Rc::new(Forum::new(GlooApi, BrowserUi::new(page), Session::new()));
    let state = AppState::new(page, forum);

    // сначала проверка сессии, затем посты
    state.spawn(|forum| async move {
        let _ = forum.start().await;
    });

    view! {
        <header class="header">
            <h1>"Forum"</h1>
            <Nav state=state />
        </header>
        <main class="container">
            <AuthPanel state=state />
            <CreatePostPanel state=state />
            <PostsPanel state=state />
        </main>
    }
}
