use forum_core::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки создания клиента `forum-client`.
pub enum ClientError {
    /// Базовый URL сервера не разбирается.
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl {
        /// Исходная строка.
        url: String,
        /// Причина отказа.
        reason: String,
    },

    /// `reqwest` не смог собрать клиента.
    #[error("failed to build http client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Результат операций настройки `forum-client`.
pub type ClientResult<T> = Result<T, ClientError>;

/// Переводит ошибку `reqwest` в ошибку транспорта форума.
pub(crate) fn from_reqwest(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        return ApiError::Decode(err.to_string());
    }
    if let Some(status) = err.status() {
        return ApiError::Rejected {
            status: status.as_u16(),
            message: None,
        };
    }
    ApiError::Network(err.to_string())
}
