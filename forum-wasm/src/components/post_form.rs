use forum_core::{CATEGORIES, Panel, PostForm};
use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::components::category_label;
use crate::dom;
use crate::state::AppState;

#[component]
pub(crate) fn CreatePostPanel(state: AppState) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let categories_ref = NodeRef::<html::Select>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let categories = categories_ref
            .get_untracked()
            .map(|select| dom::selected_values(&select))
            .unwrap_or_default();
        let form = PostForm::new(&title.get_untracked(), &content.get_untracked(), &categories);

        state.spawn(move |forum| async move {
            if forum.create_post(form).await.is_completed() {
                title.set(String::new());
                content.set(String::new());
                if let Some(select) = categories_ref.get_untracked() {
                    dom::clear_selection(&select);
                }
            }
        });
    };

    let visible = move || state.page.with(|page| page.panel == Some(Panel::CreatePost));

    view! {
        <div
            id=Panel::CreatePost.element_id()
            class="form-container"
            style:display=move || if visible() { "block" } else { "none" }
        >
            <h2>"Create Post"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <input
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <textarea
                        placeholder="Content"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <div class="form-group">
                    <select multiple=true node_ref=categories_ref>
                        {CATEGORIES
                            .iter()
                            .map(|category| {
                                view! { <option value=*category>{category_label(category)}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <button type="submit" class="btn">"Create Post"</button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| state.forum().hide_panels()
                >
                    "Cancel"
                </button>
            </form>
        </div>
    }
}
