use std::cell::{Cell, RefCell};

use tracing::{debug, info, warn};

use crate::api::ForumApi;
use crate::error::ApiError;
use crate::forms::{CommentForm, LoginForm, PostForm, RegisterForm};
use crate::models::{CommentReactionRequest, Post, PostReactionRequest, ReactionKind, User};
use crate::panels::{Panel, Panels};
use crate::session::{Session, SessionState};

/// Тексты уведомлений, которые видит пользователь.
pub mod notices {
    /// Действие требует входа: создание поста.
    pub const LOGIN_TO_POST: &str = "Please login to create a post";
    /// Действие требует входа: реакция на пост.
    pub const LOGIN_TO_REACT: &str = "Please login to react to posts";
    /// Действие требует входа: реакция на комментарий.
    pub const LOGIN_TO_REACT_COMMENT: &str = "Please login to react to comments";
    /// Действие требует входа: комментарий.
    pub const LOGIN_TO_COMMENT: &str = "Please login to comment";

    /// Не заполнены поля входа.
    pub const LOGIN_INCOMPLETE: &str = "Please enter your email and password";
    /// Не заполнены поля регистрации.
    pub const REGISTER_INCOMPLETE: &str = "Please fill in all registration fields";
    /// Некорректный email при регистрации.
    pub const REGISTER_BAD_EMAIL: &str = "Please enter a valid email address";
    /// Не заполнены заголовок или текст поста.
    pub const POST_INCOMPLETE: &str = "Please enter a title and content";
    /// Пустой комментарий.
    pub const COMMENT_EMPTY: &str = "Please enter a comment";

    /// Вход выполнен.
    pub const LOGIN_OK: &str = "Login successful!";
    /// Регистрация выполнена.
    pub const REGISTER_OK: &str = "Registration successful! Please login.";
    /// Пост создан.
    pub const POST_OK: &str = "Post created successfully!";

    /// Сервер отклонил вход без пояснений.
    pub const LOGIN_REJECTED: &str = "Login failed. Please check your credentials.";
    /// Вход не удался из-за сети.
    pub const LOGIN_FAILED: &str = "An error occurred during login.";
    /// Сервер отклонил регистрацию без пояснений.
    pub const REGISTER_REJECTED: &str = "Registration failed. Please try again.";
    /// Регистрация не удалась из-за сети.
    pub const REGISTER_FAILED: &str = "An error occurred during registration.";
    /// Сервер отклонил создание поста без пояснений.
    pub const POST_REJECTED: &str = "Failed to create post.";
    /// Создание поста не удалось из-за сети.
    pub const POST_FAILED: &str = "An error occurred while creating the post.";
    /// Не удалось загрузить посты.
    pub const LOAD_FAILED: &str = "Failed to load posts.";
    /// Не удалось отфильтровать посты.
    pub const FILTER_FAILED: &str = "Failed to filter posts";
    /// Не удалось поставить реакцию на пост.
    pub const REACTION_FAILED: &str = "Failed to add reaction.";
    /// Не удалось поставить реакцию на комментарий.
    pub const COMMENT_REACTION_FAILED: &str = "Failed to add comment reaction.";
    /// Не удалось добавить комментарий.
    pub const COMMENT_FAILED: &str = "Failed to add comment.";
}

/// Запасные тексты на случай отказа сервера без сообщения и сбоя сети.
#[derive(Debug, Clone, Copy)]
struct Fallback {
    rejected: &'static str,
    failed: &'static str,
}

impl Fallback {
    const fn same(message: &'static str) -> Self {
        Self {
            rejected: message,
            failed: message,
        }
    }

    fn notice<'a>(&self, err: &'a ApiError) -> &'a str {
        match err {
            ApiError::Rejected { message: Some(message), .. } => message.as_str(),
            ApiError::Rejected { message: None, .. } => self.rejected,
            ApiError::Network(_) | ApiError::Decode(_) => self.failed,
        }
    }
}

const LOGIN: Fallback = Fallback {
    rejected: notices::LOGIN_REJECTED,
    failed: notices::LOGIN_FAILED,
};
const REGISTER: Fallback = Fallback {
    rejected: notices::REGISTER_REJECTED,
    failed: notices::REGISTER_FAILED,
};
const CREATE_POST: Fallback = Fallback {
    rejected: notices::POST_REJECTED,
    failed: notices::POST_FAILED,
};
const LOAD: Fallback = Fallback::same(notices::LOAD_FAILED);
const FILTER: Fallback = Fallback::same(notices::FILTER_FAILED);
const REACTION: Fallback = Fallback::same(notices::REACTION_FAILED);
const COMMENT_REACTION: Fallback = Fallback::same(notices::COMMENT_REACTION_FAILED);
const COMMENT: Fallback = Fallback::same(notices::COMMENT_FAILED);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Снимок всего, что нужно для отрисовки страницы.
pub struct PageState {
    /// Сессия.
    pub session: SessionState,
    /// Видимая панель с формой.
    pub panel: Option<Panel>,
    /// Последний загруженный список постов.
    pub posts: Vec<Post>,
}

/// Приёмник результатов обработчиков.
pub trait Ui {
    /// Блокирующее уведомление пользователю.
    fn notify(&self, message: &str);

    /// Состояние страницы изменилось и её нужно перерисовать.
    fn refresh(&self, page: &PageState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
/// Итог обработчика. Об ошибке пользователь уже уведомлён.
pub enum Outcome {
    /// Действие выполнено.
    Completed,
    /// Действие отклонено или не удалось.
    Failed,
}

impl Outcome {
    /// `true`, если действие выполнено: фронтенд может очистить поля ввода.
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

/// Обработчики действий пользователя.
///
/// После каждой успешной мутации список постов загружается заново целиком.
/// Одновременные вызовы не координируются: побеждает последний ответ.
pub struct Forum<A, U> {
    api: A,
    ui: U,
    session: Session,
    panels: Cell<Panels>,
    posts: RefCell<Vec<Post>>,
}

impl<A: ForumApi, U: Ui> Forum<A, U> {
    /// Создаёт контроллер поверх транспорта, приёмника и сессии.
    pub fn new(api: A, ui: U, session: Session) -> Self {
        Self {
            api,
            ui,
            session,
            panels: Cell::new(Panels::default()),
            posts: RefCell::new(Vec::new()),
        }
    }

    /// Сессия, с которой работает контроллер.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Транспорт.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Приёмник результатов.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Текущий снимок страницы.
    pub fn page(&self) -> PageState {
        PageState {
            session: self.session.current(),
            panel: self.panels.get().visible(),
            posts: self.posts.borrow().clone(),
        }
    }

    fn publish(&self) {
        self.ui.refresh(&self.page());
    }

    fn fail(&self, action: &str, fallback: Fallback, err: &ApiError) -> Outcome {
        warn!(action, error = %err, "request failed");
        self.ui.notify(fallback.notice(err));
        Outcome::Failed
    }

    fn require_login(&self, notice: &str) -> Option<User> {
        let user = self.session.user();
        if user.is_none() {
            self.ui.notify(notice);
        }
        user
    }

    fn toggle(&self, update: impl FnOnce(&mut Panels)) {
        let mut panels = self.panels.get();
        update(&mut panels);
        self.panels.set(panels);
        self.publish();
    }

    /// Загрузка страницы: проверка сессии, затем список постов.
    pub async fn start(&self) -> Outcome {
        self.check_session().await;
        self.load_posts().await
    }

    /// Восстанавливает сессию по cookie. Ошибки только логируются.
    pub async fn check_session(&self) {
        match self.api.check_session().await {
            Ok(user) => {
                info!(username = %user.username, "session restored");
                self.session.sign_in(user);
                self.publish();
            }
            Err(err) if err.is_rejected() => debug!(error = %err, "no active session"),
            Err(err) => warn!(error = %err, "session check failed"),
        }
    }

    /// Загружает все посты.
    pub async fn load_posts(&self) -> Outcome {
        match self.api.list_posts().await {
            Ok(posts) => {
                debug!(count = posts.len(), "posts loaded");
                self.replace_posts(posts);
                Outcome::Completed
            }
            Err(err) => self.fail("load_posts", LOAD, &err),
        }
    }

    /// Посты категории; пустая категория означает все посты.
    pub async fn filter_posts(&self, category: &str) -> Outcome {
        let category = category.trim();
        if category.is_empty() {
            return self.load_posts().await;
        }

        match self.api.posts_by_category(category).await {
            Ok(posts) => {
                debug!(category, count = posts.len(), "posts filtered");
                self.replace_posts(posts);
                Outcome::Completed
            }
            Err(err) => self.fail("filter_posts", FILTER, &err),
        }
    }

    fn replace_posts(&self, posts: Vec<Post>) {
        *self.posts.borrow_mut() = posts;
        self.publish();
    }

    /// Показывает форму входа.
    pub fn show_login(&self) {
        self.toggle(|panels| panels.show(Panel::Login));
    }

    /// Показывает форму регистрации.
    pub fn show_register(&self) {
        self.toggle(|panels| panels.show(Panel::Register));
    }

    /// Показывает форму создания поста, если пользователь вошёл.
    pub fn show_create_post(&self) -> Outcome {
        if self.require_login(notices::LOGIN_TO_POST).is_none() {
            return Outcome::Failed;
        }
        self.toggle(|panels| panels.show(Panel::CreatePost));
        Outcome::Completed
    }

    /// Скрывает все формы.
    pub fn hide_panels(&self) {
        self.toggle(Panels::hide_all);
    }

    /// Вход.
    pub async fn login(&self, form: LoginForm) -> Outcome {
        if let Err(notice) = form.check() {
            self.ui.notify(notice);
            return Outcome::Failed;
        }

        match self.api.login(&form.into_request()).await {
            Ok(reply) => {
                let user = self.complete_login_reply(reply).await;
                info!(username = %user.username, "logged in");
                self.session.sign_in(user);
                self.toggle(Panels::hide_all);
                self.ui.notify(notices::LOGIN_OK);
                let _ = self.load_posts().await;
                Outcome::Completed
            }
            Err(err) => self.fail("login", LOGIN, &err),
        }
    }

    // сервер может ответить на вход одним сообщением, без пользователя
    async fn complete_login_reply(&self, reply: User) -> User {
        if reply.id.is_some() {
            return reply;
        }
        match self.api.check_session().await {
            Ok(user) => user,
            Err(err) => {
                debug!(error = %err, "login reply without user, session check failed");
                reply
            }
        }
    }

    /// Регистрация; после успеха открывается форма входа.
    pub async fn register(&self, form: RegisterForm) -> Outcome {
        if let Err(notice) = form.check() {
            self.ui.notify(notice);
            return Outcome::Failed;
        }

        match self.api.register(&form.into_request()).await {
            Ok(()) => {
                info!("registered");
                self.ui.notify(notices::REGISTER_OK);
                self.show_login();
                Outcome::Completed
            }
            Err(err) => self.fail("register", REGISTER, &err),
        }
    }

    /// Создаёт пост от имени текущего пользователя.
    pub async fn create_post(&self, form: PostForm) -> Outcome {
        let Some(user) = self.require_login(notices::LOGIN_TO_POST) else {
            return Outcome::Failed;
        };
        if let Err(notice) = form.check() {
            self.ui.notify(notice);
            return Outcome::Failed;
        }

        match self.api.create_post(&form.into_request(user.id)).await {
            Ok(()) => {
                self.toggle(Panels::hide_all);
                self.ui.notify(notices::POST_OK);
                let _ = self.load_posts().await;
                Outcome::Completed
            }
            Err(err) => self.fail("create_post", CREATE_POST, &err),
        }
    }

    /// Реакция на пост.
    pub async fn react_to_post(&self, post_id: i64, kind: ReactionKind) -> Outcome {
        if self.require_login(notices::LOGIN_TO_REACT).is_none() {
            return Outcome::Failed;
        }

        let request = PostReactionRequest { post_id, kind };
        match self.api.add_reaction(&request).await {
            Ok(()) => self.reload_after_mutation().await,
            Err(err) => self.fail("react_to_post", REACTION, &err),
        }
    }

    /// Реакция на комментарий.
    pub async fn react_to_comment(&self, comment_id: i64, kind: ReactionKind) -> Outcome {
        if self.require_login(notices::LOGIN_TO_REACT_COMMENT).is_none() {
            return Outcome::Failed;
        }

        let request = CommentReactionRequest { comment_id, kind };
        match self.api.add_comment_reaction(&request).await {
            Ok(()) => self.reload_after_mutation().await,
            Err(err) => self.fail("react_to_comment", COMMENT_REACTION, &err),
        }
    }

    /// Комментарий к посту.
    pub async fn add_comment(&self, post_id: i64, form: CommentForm) -> Outcome {
        if self.require_login(notices::LOGIN_TO_COMMENT).is_none() {
            return Outcome::Failed;
        }
        if let Err(notice) = form.check() {
            self.ui.notify(notice);
            return Outcome::Failed;
        }

        match self.api.add_comment(&form.into_request(post_id)).await {
            Ok(()) => self.reload_after_mutation().await,
            Err(err) => self.fail("add_comment", COMMENT, &err),
        }
    }

    async fn reload_after_mutation(&self) -> Outcome {
        let _ = self.load_posts().await;
        Outcome::Completed
    }

    /// Выход. Сервер не уведомляется: сессия очищается только на клиенте.
    pub async fn logout(&self) -> Outcome {
        info!("logged out");
        self.session.sign_out();
        self.publish();
        self.load_posts().await
    }
}
