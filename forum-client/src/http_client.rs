use std::sync::Arc;

use async_trait::async_trait;
use forum_core::{
    ApiError, ApiResult, CommentReactionRequest, CreatePostRequest, ForumApi, LoginRequest,
    NewCommentRequest, Post, PostReactionRequest, RegisterRequest, User, decode_post_list, paths,
};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, ClientResult, from_reqwest};

#[derive(Debug, Clone)]
/// HTTP-клиент сервера форума с хранилищем cookie.
///
/// Таймаутов и повторов нет: каждый запрос отправляется ровно один раз.
pub struct HttpClient {
    base_url: Url,
    client: Client,
    cookies: Arc<Jar>,
}

impl HttpClient {
    /// Создаёт клиент с базовым URL сервера, например `http://127.0.0.1:8080`.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let parsed = Url::parse(base_url).map_err(|err| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;

        let cookies = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&cookies))
            .build()?;

        Ok(Self {
            base_url: parsed,
            client,
            cookies,
        })
    }

    /// Cookie, которые клиент отправит серверу, в формате заголовка `Cookie`.
    pub fn session_cookie(&self) -> Option<String> {
        self.cookies
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Восстанавливает cookie, ранее полученные через [`Self::session_cookie`].
    pub fn restore_session_cookie(&self, raw: &str) {
        for pair in raw.split(';').map(str::trim).filter(|pair| !pair.is_empty()) {
            self.cookies.add_cookie_str(pair, &self.base_url);
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn execute(&self, request: RequestBuilder) -> ApiResult<Response> {
        let response = request.send().await.map_err(from_reqwest)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "request rejected");
        Err(ApiError::rejected(status.as_u16(), &body))
    }

    /// универсальный helper для POST с json-payload
    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> ApiResult<Response> {
        debug!(path, "POST");
        let request = self.client.request(Method::POST, self.endpoint(path)).json(body);
        self.execute(request).await
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Response> {
        debug!(path, "GET");
        let mut request = self.client.request(Method::GET, self.endpoint(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request).await
    }

    async fn read_posts(response: Response) -> ApiResult<Vec<Post>> {
        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(from_reqwest)?;
        decode_post_list(value).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl ForumApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<User> {
        let response = self.post_json(paths::LOGIN, request).await?;
        response.json::<User>().await.map_err(from_reqwest)
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.post_json(paths::REGISTER, request).await?;
        Ok(())
    }

    async fn check_session(&self) -> ApiResult<User> {
        let response = self.get(paths::CHECK_SESSION, &[]).await?;
        response.json::<User>().await.map_err(from_reqwest)
    }

    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let response = self.get(paths::POSTS, &[]).await?;
        Self::read_posts(response).await
    }

    async fn posts_by_category(&self, category: &str) -> ApiResult<Vec<Post>> {
        let response = self.get(paths::CATEGORY, &[("category", category)]).await?;
        Self::read_posts(response).await
    }

    async fn create_post(&self, request: &CreatePostRequest) -> ApiResult<()> {
        self.post_json(paths::CREATE_POST, request).await?;
        Ok(())
    }

    async fn add_reaction(&self, request: &PostReactionRequest) -> ApiResult<()> {
        self.post_json(paths::ADD_REACTION, request).await?;
        Ok(())
    }

    async fn add_comment_reaction(&self, request: &CommentReactionRequest) -> ApiResult<()> {
        self.post_json(paths::COMMENT_REACTION, request).await?;
        Ok(())
    }

    async fn add_comment(&self, request: &NewCommentRequest) -> ApiResult<()> {
        self.post_json(paths::COMMENT, request).await?;
        Ok(())
    }
}
