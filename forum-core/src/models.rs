use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Категории, которые можно выбрать при создании поста или в фильтре.
pub const CATEGORIES: &[&str] = &["general", "technology", "science", "sports", "entertainment"];

/// Сервер отдаёт `null` вместо пустых строк/списков, поэтому такие поля
/// читаются как значение по умолчанию.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Текущий пользователь в том виде, в каком его вернул сервер.
pub struct User {
    /// Идентификатор пользователя. Ответ на вход может его не содержать.
    #[serde(default)]
    pub id: Option<i64>,
    /// Отображаемое имя.
    #[serde(default, deserialize_with = "nullable")]
    pub username: String,
    /// Email.
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Комментарий к посту.
pub struct Comment {
    /// Идентификатор комментария (обязателен: по нему адресуются реакции).
    pub id: i64,
    /// Текст комментария.
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    /// Имя автора.
    #[serde(default, deserialize_with = "nullable")]
    pub username: String,
    /// Количество лайков.
    #[serde(default, deserialize_with = "nullable")]
    pub likes: i64,
    /// Количество дизлайков.
    #[serde(default, deserialize_with = "nullable")]
    pub dislikes: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Пост с категориями, счётчиками реакций и комментариями.
pub struct Post {
    /// Идентификатор поста (обязателен: по нему адресуются реакции и комментарии).
    pub id: i64,
    /// Заголовок.
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    /// Содержимое.
    #[serde(default, deserialize_with = "nullable")]
    pub content: String,
    /// Имя автора.
    #[serde(default, deserialize_with = "nullable")]
    pub username: String,
    /// Категории поста.
    #[serde(default, deserialize_with = "nullable")]
    pub categories: Vec<String>,
    /// Количество лайков.
    #[serde(default, deserialize_with = "nullable")]
    pub likes: i64,
    /// Количество дизлайков.
    #[serde(default, deserialize_with = "nullable")]
    pub dislikes: i64,
    /// Комментарии к посту.
    #[serde(default, deserialize_with = "nullable")]
    pub comments: Vec<Comment>,
}

/// Разбирает ответ `/posts` или `/category`.
///
/// `null` и любое значение, отличное от массива, дают пустой список.
pub fn decode_post_list(value: serde_json::Value) -> Result<Vec<Post>, serde_json::Error> {
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value),
        _ => Ok(Vec::new()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Тип реакции на пост или комментарий.
pub enum ReactionKind {
    /// Лайк.
    Like,
    /// Дизлайк.
    Dislike,
}

impl ReactionKind {
    /// Значение поля `type` в теле запроса.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "like" => Ok(Self::Like),
            "dislike" => Ok(Self::Dislike),
            other => Err(format!("unknown reaction type '{other}', expected like or dislike")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Тело `POST /login`.
pub struct LoginRequest {
    /// Email.
    pub email: String,
    /// Пароль.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Тело `POST /register`.
pub struct RegisterRequest {
    /// Email.
    pub email: String,
    /// Логин.
    pub username: String,
    /// Пароль.
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Тело `POST /create-post`.
pub struct CreatePostRequest {
    /// Заголовок.
    pub title: String,
    /// Содержимое.
    pub content: String,
    /// Выбранные категории.
    pub categories: Vec<String>,
    /// Идентификатор автора, если он известен клиенту.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Тело `POST /add-reaction`.
pub struct PostReactionRequest {
    /// Идентификатор поста.
    pub post_id: i64,
    /// Тип реакции.
    #[serde(rename = "type")]
    pub kind: ReactionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Тело `POST /commentreaction`.
pub struct CommentReactionRequest {
    /// Идентификатор комментария.
    pub comment_id: i64,
    /// Тип реакции.
    #[serde(rename = "type")]
    pub kind: ReactionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Тело `POST /comment`.
pub struct NewCommentRequest {
    /// Идентификатор поста.
    pub post_id: i64,
    /// Текст комментария.
    pub content: String,
}
