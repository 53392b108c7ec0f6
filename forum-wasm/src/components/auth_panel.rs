use forum_core::{LoginForm, Panel, RegisterForm};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::state::AppState;

#[component]
pub(crate) fn AuthPanel(state: AppState) -> impl IntoView {
    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());

    let reg_email = RwSignal::new(String::new());
    let reg_username = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());

    let on_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm::new(&login_email.get_untracked(), &login_password.get_untracked());
        state.spawn(move |forum| async move {
            if forum.login(form).await.is_completed() {
                login_email.set(String::new());
                login_password.set(String::new());
            }
        });
    };

    let on_register = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm::new(
            &reg_email.get_untracked(),
            &reg_username.get_untracked(),
            &reg_password.get_untracked(),
        );
        state.spawn(move |forum| async move {
            if forum.register(form).await.is_completed() {
                reg_email.set(String::new());
                reg_username.set(String::new());
                reg_password.set(String::new());
            }
        });
    };

    let on_cancel = move |_: MouseEvent| state.forum().hide_panels();
    let display = move |panel: Panel| {
        if state.page.with(|page| page.panel == Some(panel)) {
            "block"
        } else {
            "none"
        }
    };

    view! {
        <div
            id=Panel::Login.element_id()
            class="form-container"
            style:display=move || display(Panel::Login)
        >
            <h2>"Login"</h2>
            <form on:submit=on_login>
                <div class="form-group">
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || login_email.get()
                        on:input=move |ev| login_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || login_password.get()
                        on:input=move |ev| login_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn">"Login"</button>
                <button type="button" class="btn btn-secondary" on:click=on_cancel>
                    "Cancel"
                </button>
            </form>
        </div>

        <div
            id=Panel::Register.element_id()
            class="form-container"
            style:display=move || display(Panel::Register)
        >
            <h2>"Register"</h2>
            <form on:submit=on_register>
                <div class="form-group">
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || reg_email.get()
                        on:input=move |ev| reg_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <input
                        placeholder="Username"
                        prop:value=move || reg_username.get()
                        on:input=move |ev| reg_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || reg_password.get()
                        on:input=move |ev| reg_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn">"Register"</button>
                <button type="button" class="btn btn-secondary" on:click=on_cancel>
                    "Cancel"
                </button>
            </form>
        </div>
    }
}
