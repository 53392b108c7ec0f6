//! Ядро клиента форума: модели, сессия, панели форм, рендеринг и обработчики
//! пользовательских действий.
//!
//! Крейт не зависит от целевой платформы. Транспорт подключается через трейт
//! [`ForumApi`]:
//! - `forum-client` (`reqwest`) для нативных целей;
//! - `forum-wasm` (`gloo-net`) для браузера.
//!
//! Контроллер [`Forum`] после каждой успешной мутации заново загружает весь
//! список постов и отдаёт новый снимок страницы через [`Ui::refresh`].
#![warn(missing_docs)]

mod api;
mod controller;
mod error;
mod forms;
mod models;
mod panels;
mod render;
mod session;
mod view;

pub use api::{ForumApi, paths};
pub use controller::{Forum, Outcome, PageState, Ui, notices};
pub use error::{ApiError, ApiResult};
pub use forms::{CommentForm, LoginForm, PostForm, RegisterForm};
pub use models::{
    CATEGORIES, Comment, CommentReactionRequest, CreatePostRequest, LoginRequest,
    NewCommentRequest, Post, PostReactionRequest, ReactionKind, RegisterRequest, User,
    decode_post_list,
};
pub use panels::{Panel, Panels};
pub use render::{EMPTY_STATE, actions, render_nav, render_page, render_posts};
pub use session::{Session, SessionState};
pub use view::{Element, View, escape_html};
