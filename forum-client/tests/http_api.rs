use std::cell::RefCell;

use forum_client::HttpClient;
use forum_core::{
    ApiError, CreatePostRequest, Forum, ForumApi, LoginForm, LoginRequest, PageState, PostForm,
    PostReactionRequest, ReactionKind, Session, Ui, notices, render_page,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingUi {
    notices: RefCell<Vec<String>>,
    last_page: RefCell<PageState>,
}

impl Ui for RecordingUi {
    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn refresh(&self, page: &PageState) {
        *self.last_page.borrow_mut() = page.clone();
    }
}

fn client(server: &MockServer) -> HttpClient {
    HttpClient::new(&server.uri()).expect("mock server uri must be valid")
}

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "a@example.com".to_string(),
        password: "password123".to_string(),
    }
}

#[tokio::test]
async fn login_sends_credentials_and_decodes_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "email": "a@example.com", "password": "password123" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "id": 1, "username": "a", "email": "a@example.com" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server)
        .login(&login_request())
        .await
        .expect("login must succeed");

    assert_eq!(user.id, Some(1));
    assert_eq!(user.username, "a");
}

#[tokio::test]
async fn rejection_carries_server_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "bad credentials" })))
        .mount(&server)
        .await;

    let err = client(&server)
        .login(&login_request())
        .await
        .expect_err("login must fail");

    assert_eq!(
        err,
        ApiError::Rejected {
            status: 401,
            message: Some("bad credentials".to_string()),
        }
    );
}

#[tokio::test]
async fn plain_text_rejection_has_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Invalid request payload\n"))
        .mount(&server)
        .await;

    let err = client(&server)
        .register(&forum_core::RegisterRequest {
            email: "a@example.com".to_string(),
            username: "a".to_string(),
            password: "pw".to_string(),
        })
        .await
        .expect_err("register must fail");

    assert_eq!(
        err,
        ApiError::Rejected {
            status: 400,
            message: None,
        }
    );
}

#[tokio::test]
async fn session_cookie_from_login_is_sent_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session_token=abc; Path=/; HttpOnly")
                .set_body_json(json!({ "id": 1, "username": "a" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/check-session"))
        .and(header("cookie", "session_token=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "username": "a" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.login(&login_request()).await.expect("login must succeed");
    let user = client.check_session().await.expect("session must be active");

    assert_eq!(user.username, "a");
    assert_eq!(client.session_cookie().as_deref(), Some("session_token=abc"));
}

#[tokio::test]
async fn null_post_list_decodes_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let posts = client(&server).list_posts().await.expect("list must succeed");
    assert!(posts.is_empty());
}

#[tokio::test]
async fn posts_decode_with_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 5,
                "title": "Hello",
                "content": "Body",
                "username": "alice",
                "categories": ["general"],
                "likes": 3,
                "comments": [{ "id": 8, "content": "hi", "username": "bob" }]
            }
        ])))
        .mount(&server)
        .await;

    let posts = client(&server).list_posts().await.expect("list must succeed");

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].likes, 3);
    assert_eq!(posts[0].dislikes, 0);
    assert_eq!(posts[0].comments[0].id, 8);
}

#[tokio::test]
async fn category_filter_sends_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category"))
        .and(query_param("category", "rock & roll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 2 }])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = client(&server)
        .posts_by_category("rock & roll")
        .await
        .expect("filter must succeed");
    assert_eq!(posts[0].id, 2);
}

#[tokio::test]
async fn mutations_send_camel_case_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-post"))
        .and(body_json(json!({
            "title": "t",
            "content": "c",
            "categories": ["general"],
            "userId": 7
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/commentreaction"))
        .and(body_json(json!({ "commentId": 3, "type": "dislike" })))
        .respond_with(ResponseTemplate::new(200).set_body_string("Reaction added successfully"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/comment"))
        .and(body_json(json!({ "postId": 4, "content": "nice" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client
        .create_post(&CreatePostRequest {
            title: "t".to_string(),
            content: "c".to_string(),
            categories: vec!["general".to_string()],
            user_id: Some(7),
        })
        .await
        .expect("create must succeed");
    client
        .add_comment_reaction(&forum_core::CommentReactionRequest {
            comment_id: 3,
            kind: ReactionKind::Dislike,
        })
        .await
        .expect("reaction must succeed");
    client
        .add_comment(&forum_core::NewCommentRequest {
            post_id: 4,
            content: "nice".to_string(),
        })
        .await
        .expect("comment must succeed");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = HttpClient::new("http://127.0.0.1:9").expect("valid url");

    let err = client
        .add_reaction(&PostReactionRequest {
            post_id: 1,
            kind: ReactionKind::Like,
        })
        .await
        .expect_err("nothing listens on the discard port");

    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn reaction_flow_posts_once_then_refetches_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/check-session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "username": "a" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/add-reaction"))
        .and(body_json(json!({ "postId": 5, "type": "like" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 5, "likes": 1 }])))
        .expect(1)
        .mount(&server)
        .await;

    let forum = Forum::new(client(&server), RecordingUi::default(), Session::new());
    forum.check_session().await;

    let outcome = forum.react_to_post(5, ReactionKind::Like).await;

    assert!(outcome.is_completed());
    assert_eq!(forum.page().posts[0].likes, 1);
    assert!(forum.ui().notices.borrow().is_empty());
}

#[tokio::test]
async fn login_flow_greets_user_or_shows_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "email": "a@example.com", "password": "good" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "username": "a" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "email": "a@example.com", "password": "bad" })))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "bad credentials" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let failing = Forum::new(client(&server), RecordingUi::default(), Session::new());
    let _ = failing.login(LoginForm::new("a@example.com", "bad")).await;
    assert_eq!(*failing.ui().notices.borrow(), vec!["bad credentials".to_string()]);
    assert!(!failing.session().is_logged_in());

    let forum = Forum::new(client(&server), RecordingUi::default(), Session::new());
    let outcome = forum.login(LoginForm::new("a@example.com", "good")).await;
    assert!(outcome.is_completed());
    assert_eq!(*forum.ui().notices.borrow(), vec![notices::LOGIN_OK.to_string()]);

    let html = render_page(&forum.ui().last_page.borrow()).render_to_string();
    assert!(html.contains("Welcome, a"));
}

#[tokio::test]
async fn create_post_while_logged_out_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-post"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let forum = Forum::new(client(&server), RecordingUi::default(), Session::new());
    let outcome = forum.create_post(PostForm::new("t", "c", ["general"])).await;

    assert!(!outcome.is_completed());
    assert_eq!(*forum.ui().notices.borrow(), vec![notices::LOGIN_TO_POST.to_string()]);
}

#[tokio::test]
async fn message_only_login_leaves_post_owner_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Login successful" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/check-session"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/create-post"))
        .and(body_json(json!({
            "title": "t",
            "content": "c",
            "categories": ["general"]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let forum = Forum::new(client(&server), RecordingUi::default(), Session::new());
    let login = forum.login(LoginForm::new("a@example.com", "good")).await;
    assert!(login.is_completed());

    let created = forum.create_post(PostForm::new("t", "c", ["general"])).await;

    assert!(created.is_completed());
    let html = render_page(&forum.ui().last_page.borrow()).render_to_string();
    assert!(!html.contains("Welcome,"));
}

#[tokio::test]
async fn message_only_login_takes_user_from_session_check() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Login successful" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/check-session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3, "username": "a" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/create-post"))
        .and(body_json(json!({
            "title": "t",
            "content": "c",
            "categories": ["general"],
            "userId": 3
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let forum = Forum::new(client(&server), RecordingUi::default(), Session::new());
    let _ = forum.login(LoginForm::new("a@example.com", "good")).await;
    let created = forum.create_post(PostForm::new("t", "c", ["general"])).await;

    assert!(created.is_completed());
    let html = render_page(&forum.ui().last_page.borrow()).render_to_string();
    assert!(html.contains("Welcome, a"));
}
