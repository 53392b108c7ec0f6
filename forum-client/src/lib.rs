//! HTTP-клиент сервера форума для нативных целей.
//!
//! Реализует [`forum_core::ForumApi`] поверх `reqwest` с хранилищем cookie:
//! cookie сессии, выставленная сервером при входе, автоматически уходит во
//! все следующие запросы. Её можно сохранить между запусками через
//! [`HttpClient::session_cookie`] и [`HttpClient::restore_session_cookie`].
#![warn(missing_docs)]

mod error;
mod http_client;

pub use error::{ClientError, ClientResult};
pub use http_client::HttpClient;
