use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    CommentReactionRequest, CreatePostRequest, LoginRequest, NewCommentRequest, Post,
    PostReactionRequest, RegisterRequest, User,
};

/// Пути эндпоинтов сервера форума.
pub mod paths {
    /// `POST` вход.
    pub const LOGIN: &str = "/login";
    /// `POST` регистрация.
    pub const REGISTER: &str = "/register";
    /// `GET` проверка сессии по cookie.
    pub const CHECK_SESSION: &str = "/check-session";
    /// `GET` все посты.
    pub const POSTS: &str = "/posts";
    /// `GET` посты категории (`?category=X`).
    pub const CATEGORY: &str = "/category";
    /// `POST` создание поста.
    pub const CREATE_POST: &str = "/create-post";
    /// `POST` реакция на пост.
    pub const ADD_REACTION: &str = "/add-reaction";
    /// `POST` реакция на комментарий.
    pub const COMMENT_REACTION: &str = "/commentreaction";
    /// `POST` новый комментарий.
    pub const COMMENT: &str = "/comment";
}

/// Транспорт до сервера форума.
///
/// Каждый метод выполняет ровно один HTTP-запрос с cookie сессии, без
/// повторов и таймаутов. Трейт не требует `Send`: браузерная реализация
/// работает на однопоточных future.
#[async_trait(?Send)]
pub trait ForumApi {
    /// `POST /login`, возвращает пользователя.
    async fn login(&self, request: &LoginRequest) -> ApiResult<User>;

    /// `POST /register`.
    async fn register(&self, request: &RegisterRequest) -> ApiResult<()>;

    /// `GET /check-session`, возвращает пользователя активной сессии.
    async fn check_session(&self) -> ApiResult<User>;

    /// `GET /posts`.
    async fn list_posts(&self) -> ApiResult<Vec<Post>>;

    /// `GET /category?category=X`.
    async fn posts_by_category(&self, category: &str) -> ApiResult<Vec<Post>>;

    /// `POST /create-post`.
    async fn create_post(&self, request: &CreatePostRequest) -> ApiResult<()>;

    /// `POST /add-reaction`.
    async fn add_reaction(&self, request: &PostReactionRequest) -> ApiResult<()>;

    /// `POST /commentreaction`.
    async fn add_comment_reaction(&self, request: &CommentReactionRequest) -> ApiResult<()>;

    /// `POST /comment`.
    async fn add_comment(&self, request: &NewCommentRequest) -> ApiResult<()>;
}
