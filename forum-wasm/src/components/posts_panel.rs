use forum_core::{CATEGORIES, CommentForm, ReactionKind, actions, render_posts};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use web_sys::Event;

use crate::components::category_label;
use crate::dom;
use crate::state::AppState;

#[component]
pub(crate) fn PostsPanel(state: AppState) -> impl IntoView {
    let on_filter = move |ev: Event| {
        let category = event_target_value(&ev);
        state.spawn(move |forum| async move {
            let _ = forum.filter_posts(&category).await;
        });
    };

    // кнопки реакций приходят из отрендеренного HTML, слушаем клики на контейнере
    let on_click = move |ev: MouseEvent| {
        let Some(button) = dom::closest_with(&ev, "data-reaction") else {
            return;
        };
        let Some(kind) = button
            .get_attribute("data-reaction")
            .and_then(|raw| raw.parse::<ReactionKind>().ok())
        else {
            return;
        };

        match button.get_attribute("data-action").as_deref() {
            Some(actions::REACT_POST) => {
                if let Some(post_id) = dom::data_id(&button, "data-post-id") {
                    state.spawn(move |forum| async move {
                        let _ = forum.react_to_post(post_id, kind).await;
                    });
                }
            }
            Some(actions::REACT_COMMENT) => {
                if let Some(comment_id) = dom::data_id(&button, "data-comment-id") {
                    state.spawn(move |forum| async move {
                        let _ = forum.react_to_comment(comment_id, kind).await;
                    });
                }
            }
            _ => {}
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        let Some(form) = dom::closest_with(&ev, "data-post-id") else {
            return;
        };
        if !form.matches("form.comment-form").unwrap_or(false) {
            return;
        }
        ev.prevent_default();

        let Some(post_id) = dom::data_id(&form, "data-post-id") else {
            return;
        };
        let content = dom::textarea_value(&form, ".comment-input").unwrap_or_default();
        state.spawn(move |forum| async move {
            let _ = forum.add_comment(post_id, CommentForm::new(&content)).await;
        });
    };

    // переключение панелей не должно пересобирать список и стирать набранный комментарий
    let listing = Memo::new(move |_| {
        state.page.with(|page| render_posts(&page.posts, &page.session).render_to_string())
    });

    view! {
        <div class="filter">
            <select id="categoryFilter" on:change=on_filter>
                <option value="">"All Categories"</option>
                {CATEGORIES
                    .iter()
                    .map(|category| {
                        view! { <option value=*category>{category_label(category)}</option> }
                    })
                    .collect_view()}
            </select>
        </div>

        <div
            id="postsContainer"
            on:click=on_click
            on:submit=on_submit
            inner_html=move || listing.get()
        ></div>
    }
}
