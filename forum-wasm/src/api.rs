use async_trait::async_trait;
use forum_core::{
    ApiError, ApiResult, CommentReactionRequest, CreatePostRequest, ForumApi, LoginRequest,
    NewCommentRequest, Post, PostReactionRequest, RegisterRequest, User, decode_post_list, paths,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

// пустая строка: запросы идут на тот же origin, что и страница
const API_BASE_URL: &str = match option_env!("FORUM_API_BASE_URL") {
    Some(value) => value,
    None => "",
};

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn report(path: &str, err: &ApiError) {
    web_sys::console::warn_1(&format!("{path}: {err}").into());
}

async fn parse_json<T: DeserializeOwned>(path: &str, response: Response) -> ApiResult<T> {
    let result = response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()));
    if let Err(err) = &result {
        report(path, err);
    }
    result
}

async fn parse_error_body(response: Response) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    ApiError::rejected(status, &text)
}

async fn check(path: &str, sent: Result<Response, gloo_net::Error>) -> ApiResult<Response> {
    let result = match sent {
        Ok(response) if response.ok() => Ok(response),
        Ok(response) => Err(parse_error_body(response).await),
        Err(err) => Err(ApiError::Network(err.to_string())),
    };
    if let Err(err) = &result {
        report(path, err);
    }
    result
}

/// Клиент API форума поверх `fetch`.
///
/// Сессия живёт в cookie браузера, поэтому состояния у клиента нет.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GlooApi;

impl GlooApi {
    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> ApiResult<Response> {
        let request = Request::post(&endpoint(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        check(path, request.send().await).await
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<Response> {
        let mut request = Request::get(&endpoint(path)).credentials(RequestCredentials::Include);
        if !query.is_empty() {
            request = request.query(query.iter().copied());
        }
        check(path, request.send().await).await
    }

    async fn read_posts(path: &str, response: Response) -> ApiResult<Vec<Post>> {
        let value = parse_json::<serde_json::Value>(path, response).await?;
        decode_post_list(value).map_err(|err| {
            let err = ApiError::Decode(err.to_string());
            report(path, &err);
            err
        })
    }
}

#[async_trait(?Send)]
impl ForumApi for GlooApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<User> {
        let response = self.post_json(paths::LOGIN, request).await?;
        parse_json(paths::LOGIN, response).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<()> {
        self.post_json(paths::REGISTER, request).await?;
        Ok(())
    }

    async fn check_session(&self) -> ApiResult<User> {
        let response = self.get(paths::CHECK_SESSION, &[]).await?;
        parse_json(paths::CHECK_SESSION, response).await
    }

    async fn list_posts(&self) -> ApiResult<Vec<Post>> {
        let response = self.get(paths::POSTS, &[]).await?;
        Self::read_posts(paths::POSTS, response).await
    }

    async fn posts_by_category(&self, category: &str) -> ApiResult<Vec<Post>> {
        let response = self.get(paths::CATEGORY, &[("category", category)]).await?;
        Self::read_posts(paths::CATEGORY, response).await
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
