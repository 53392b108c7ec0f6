use validator::Validate;

use crate::controller::notices;
use crate::models::{CreatePostRequest, LoginRequest, NewCommentRequest, RegisterRequest};

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
/// Ввод формы входа.
pub struct LoginForm {
    /// Email без пробелов по краям.
    #[validate(length(min = 1))]
    pub email: String,
    /// Пароль как есть.
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginForm {
    /// Собирает форму из сырых значений полей.
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub(crate) fn check(&self) -> Result<(), &'static str> {
        self.validate().map_err(|_| notices::LOGIN_INCOMPLETE)
    }

    pub(crate) fn into_request(self) -> LoginRequest {
        LoginRequest {
            email: self.email,
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
/// Ввод формы регистрации.
pub struct RegisterForm {
    /// Email без пробелов по краям.
    #[validate(length(min = 1), email)]
    pub email: String,
    /// Логин без пробелов по краям.
    #[validate(length(min = 1))]
    pub username: String,
    /// Пароль как есть.
    #[validate(length(min = 1))]
    pub password: String,
}

impl RegisterForm {
    /// Собирает форму из сырых значений полей.
    pub fn new(email: &str, username: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub(crate) fn check(&self) -> Result<(), &'static str> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let missing_field = errors
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .any(|error| error.code == "length");
        if missing_field {
            return Err(notices::REGISTER_INCOMPLETE);
        }
        Err(notices::REGISTER_BAD_EMAIL)
    }

    pub(crate) fn into_request(self) -> RegisterRequest {
        RegisterRequest {
            email: self.email,
            username: self.username,
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
/// Ввод формы создания поста.
pub struct PostForm {
    /// Заголовок.
    #[validate(length(min = 1))]
    pub title: String,
    /// Содержимое.
    #[validate(length(min = 1))]
    pub content: String,
    /// Выбранные категории, без пустых значений.
    pub categories: Vec<String>,
}

impl PostForm {
    /// Собирает форму из сырых значений полей.
    pub fn new<I, S>(title: &str, content: &str, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let categories = categories
            .into_iter()
            .map(|category| category.as_ref().trim().to_string())
            .filter(|category| !category.is_empty())
            .collect();

        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            categories,
        }
    }

    pub(crate) fn check(&self) -> Result<(), &'static str> {
        self.validate().map_err(|_| notices::POST_INCOMPLETE)
    }

    pub(crate) fn into_request(self, user_id: Option<i64>) -> CreatePostRequest {
        CreatePostRequest {
            title: self.title,
            content: self.content,
            categories: self.categories,
            user_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
/// Ввод формы комментария.
pub struct CommentForm {
    /// Текст без пробелов по краям.
    #[validate(length(min = 1))]
    pub content: String,
}

impl CommentForm {
    /// Собирает форму из сырого значения поля.
    pub fn new(content: &str) -> Self {
        Self {
            content: content.trim().to_string(),
        }
    }

    pub(crate) fn check(&self) -> Result<(), &'static str> {
        self.validate().map_err(|_| notices::COMMENT_EMPTY)
    }

    pub(crate) fn into_request(self, post_id: i64) -> NewCommentRequest {
        NewCommentRequest {
            post_id,
            content: self.content,
        }
    }
}
