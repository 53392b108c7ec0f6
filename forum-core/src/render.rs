//! Рендеринг страницы из типизированных данных.
//!
//! Интерактивные элементы размечены атрибутами `data-action`, `data-post-id`,
//! `data-comment-id` и `data-reaction`: фронтенд вешает один обработчик на
//! контейнер и по ним понимает, что нажато.

use crate::controller::PageState;
use crate::models::{Comment, Post, ReactionKind};
use crate::session::SessionState;
use crate::view::{Element, View};

/// Текст пустого списка постов.
pub const EMPTY_STATE: &str = "No posts available.";

/// Значения атрибута `data-action`.
pub mod actions {
    /// Реакция на пост.
    pub const REACT_POST: &str = "react-post";
    /// Реакция на комментарий.
    pub const REACT_COMMENT: &str = "react-comment";
    /// Показать форму входа.
    pub const SHOW_LOGIN: &str = "show-login";
    /// Показать форму регистрации.
    pub const SHOW_REGISTER: &str = "show-register";
    /// Показать форму создания поста.
    pub const SHOW_CREATE_POST: &str = "show-create-post";
    /// Выйти.
    pub const LOGOUT: &str = "logout";
}

#[derive(Debug, Clone, Copy)]
enum ReactionTarget {
    Post(i64),
    Comment(i64),
}

fn nav_button(label: &'static str, action: &'static str) -> Element {
    Element::new("button")
        .class("btn")
        .attr("type", "button")
        .attr("data-action", action)
        .text(label)
}

/// Навигация: приветствие и действия для вошедшего пользователя, иначе
/// кнопки входа и регистрации.
pub fn render_nav(session: &SessionState) -> View {
    match session.user() {
        Some(user) => View::Fragment(vec![
            Element::new("span").text(greeting(&user.username)).into(),
            nav_button("Create Post", actions::SHOW_CREATE_POST).into(),
            nav_button("Logout", actions::LOGOUT).into(),
        ]),
        None => View::Fragment(vec![
            nav_button("Login", actions::SHOW_LOGIN).into(),
            nav_button("Register", actions::SHOW_REGISTER).into(),
        ]),
    }
}

fn greeting(username: &str) -> String {
    if username.is_empty() {
        return "Welcome".to_string();
    }
    format!("Welcome, {username}")
}

/// Список постов; форма комментария выводится только вошедшему пользователю.
pub fn render_posts(posts: &[Post], session: &SessionState) -> View {
    if posts.is_empty() {
        return Element::new("p").class("empty-state").text(EMPTY_STATE).into();
    }

    let logged_in = session.is_logged_in();
    View::Fragment(
        posts
            .iter()
            .map(|post| render_post(post, logged_in))
            .collect(),
    )
}

/// Навигация и список постов.
pub fn render_page(page: &PageState) -> View {
    View::Fragment(vec![
        Element::new("nav")
            .class("nav-links")
            .child(render_nav(&page.session))
            .into(),
        Element::new("div")
            .attr("id", "postsContainer")
            .child(render_posts(&page.posts, &page.session))
            .into(),
    ])
}

fn render_post(post: &Post, logged_in: bool) -> View {
    let header = Element::new("div")
        .class("post-header")
        .child(Element::new("h3").text(post.title.as_str()))
        .child(Element::new("span").text(format!("Posted by {}", post.username)));

    let categories = Element::new("div").class("post-categories").children(
        post.categories
            .iter()
            .map(|category| Element::new("span").class("category-tag").text(category.as_str())),
    );

    let mut comments = Element::new("div")
        .class("comments")
        .attr("id", format!("comments-{}", post.id))
        .children(post.comments.iter().map(render_comment));
    if logged_in {
        comments = comments.child(comment_form(post.id));
    }

    Element::new("div")
        .class("post")
        .attr("data-post-id", post.id)
        .child(header)
        .child(categories)
        .child(Element::new("p").text(post.content.as_str()))
        .child(reaction_buttons(ReactionTarget::Post(post.id), post.likes, post.dislikes))
        .child(comments)
        .into()
}

fn render_comment(comment: &Comment) -> Element {
    Element::new("div")
        .class("comment")
        .attr("data-comment-id", comment.id)
        .child(Element::new("p").text(comment.content.as_str()))
        .child(Element::new("small").text(format!("By {}", comment.username)))
        .child(reaction_buttons(
            ReactionTarget::Comment(comment.id),
            comment.likes,
            comment.dislikes,
        ))
}

fn comment_form(post_id: i64) -> Element {
    Element::new("form")
        .class("comment-form")
        .attr("data-post-id", post_id)
        .child(
            Element::new("div").class("form-group").child(
                Element::new("textarea")
                    .class("comment-input")
                    .attr("required", "required")
                    .attr("placeholder", "Add a comment..."),
            ),
        )
        .child(
            Element::new("button")
                .class("btn btn-secondary")
                .attr("type", "submit")
                .text("Comment"),
        )
}

fn reaction_buttons(target: ReactionTarget, likes: i64, dislikes: i64) -> Element {
    Element::new("div")
        .class("reaction-buttons")
        .child(reaction_button(target, ReactionKind::Like, likes))
        .child(reaction_button(target, ReactionKind::Dislike, dislikes))
}

fn reaction_button(target: ReactionTarget, kind: ReactionKind, count: i64) -> Element {
    let icon = match kind {
        ReactionKind::Like => "👍 ",
        ReactionKind::Dislike => "👎 ",
    };

    let button = Element::new("button")
        .class("reaction-btn")
        .attr("type", "button")
        .attr("data-reaction", kind);
    let button = match target {
        ReactionTarget::Post(id) => button
            .attr("data-action", actions::REACT_POST)
            .attr("data-post-id", id),
        ReactionTarget::Comment(id) => button
            .attr("data-action", actions::REACT_COMMENT)
            .attr("data-comment-id", id),
    };

    button
        .text(icon)
        .child(Element::new("span").text(count.to_string()))
}
