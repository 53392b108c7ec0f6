use std::rc::Rc;

use forum_core::{Forum, PageState, Ui};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::api::GlooApi;

/// Контроллер форума, общий для всех компонентов страницы.
pub(crate) type AppForum = Forum<GlooApi, BrowserUi>;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    pub(crate) page: RwSignal<PageState>,
    forum: StoredValue<Rc<AppForum>, LocalStorage>,
}

impl AppState {
    pub(crate) fn new(page: RwSignal<PageState>, forum: Rc<AppForum>) -> Self {
        Self {
            page,
            forum: StoredValue::new_local(forum),
        }
    }

    pub(crate) fn forum(&self) -> Rc<AppForum> {
        self.forum.get_value()
    }

    /// Запускает асинхронный обработчик контроллера.
    pub(crate) fn spawn<F, Fut>(&self, handler: F)
    where
        F: FnOnce(Rc<AppForum>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        leptos::task::spawn_local(handler(self.forum()));
    }
}

/// Уведомления через `alert`, перерисовка через сигнал страницы.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrowserUi {
    page: RwSignal<PageState>,
}

impl BrowserUi {
    pub(crate) fn new(page: RwSignal<PageState>) -> Self {
        Self { page }
    }
}

impl Ui for BrowserUi {
    fn notify(&self, message: &str) {
        if window().alert_with_message(message).is_err() {
            web_sys::console::warn_1(&message.into());
        }
    }

    fn refresh(&self, page: &PageState) {
        self.page.set(page.clone());
    }
}
