use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Ошибки обращения к серверу форума.
pub enum ApiError {
    /// Запрос не дошёл до сервера или ответ не был получен.
    #[error("network error: {0}")]
    Network(String),

    /// Сервер ответил статусом, отличным от 2xx.
    #[error("http error {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Rejected {
        /// HTTP-статус ответа.
        status: u16,
        /// Текст из поля `error` тела ответа, если тело было JSON.
        message: Option<String>,
    },

    /// Успешный ответ не удалось разобрать.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Результат запросов к серверу форума.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Строит ошибку из статуса и сырого тела ответа.
    ///
    /// Сообщение берётся из `{"error": "..."}`; пустое поле или тело не-JSON
    /// оставляют `message = None`.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.error)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty());

        Self::Rejected { status, message }
    }

    /// Сообщение сервера, если он его прислал.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// `true`, если ответ сервера вообще был получен и отклонён.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
