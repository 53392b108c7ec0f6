mod logging;

use std::cell::RefCell;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use forum_client::HttpClient;
use forum_core::{
    CommentForm, Forum, LoginForm, Outcome, PageState, PostForm, ReactionKind, RegisterForm,
    Session, Ui, render_page,
};

const SESSION_FILE: &str = ".forum_session";
const DEFAULT_SERVER: &str = "http://127.0.0.1:8080";
const SERVER_ENV: &str = "FORUM_SERVER";

#[derive(Debug, Parser)]
#[command(name = "forum-cli", version, about = "CLI клиент форума")]
struct Cli {
    /// Адрес сервера. Иначе берётся из FORUM_SERVER.
    #[arg(long, global = true)]
    server: Option<String>,

    /// Напечатать страницу как HTML вместо текстового списка.
    #[arg(long, global = true)]
    html: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Список постов, при необходимости по категории.
    Posts {
        #[arg(long)]
        category: Option<String>,
    },
    /// Регистрация пользователя.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Вход пользователя. Cookie сессии сохраняется в .forum_session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Выход: сохранённая cookie удаляется.
    Logout,
    /// Создание поста (требует входа).
    Post {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Можно указать несколько раз.
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Реакция на пост.
    React {
        #[arg(long)]
        post: i64,
        /// like или dislike.
        #[arg(long)]
        kind: ReactionKind,
    },
    /// Реакция на комментарий.
    ReactComment {
        #[arg(long)]
        comment: i64,
        #[arg(long)]
        kind: ReactionKind,
    },
    /// Комментарий к посту.
    Comment {
        #[arg(long)]
        post: i64,
        #[arg(long)]
        content: String,
    },
}

#[derive(Debug, Default)]
struct TerminalUi {
    page: RefCell<PageState>,
}

impl Ui for TerminalUi {
    fn notify(&self, message: &str) {
        println!("{message}");
    }

    fn refresh(&self, page: &PageState) {
        *self.page.borrow_mut() = page.clone();
    }
}

// клиент и контроллер не Send, поэтому хватает однопоточного рантайма
#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run().await {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Failed) => process::exit(1),
        Err(err) => {
            eprintln!("Ошибка: {err:#}");
            process::exit(1);
        }
    }
}

async fn run() -> Result<Outcome> {
    dotenvy::dotenv().ok();
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| logging::DEFAULT_LEVEL.to_string());
    logging::init_logging(&level)?;

    let cli = Cli::parse();
    let server = resolve_server(cli.server, env::var(SERVER_ENV).ok());
    let client = HttpClient::new(&server).context("не удалось создать HTTP клиент")?;

    if let Some(cookie) = load_session().context("не удалось прочитать .forum_session")? {
        client.restore_session_cookie(&cookie);
    }

    let forum = Forum::new(client, TerminalUi::default(), Session::new());
    forum.check_session().await;

    let mut keep_session = true;
    let outcome = match cli.command {
        Command::Posts { category } => match category {
            Some(category) => forum.filter_posts(&category).await,
            None => forum.load_posts().await,
        },
        Command::Register {
            email,
            username,
            password,
        } => {
            forum
                .register(RegisterForm::new(&email, &username, &password))
                .await
        }
        Command::Login { email, password } => forum.login(LoginForm::new(&email, &password)).await,
        Command::Logout => {
            keep_session = false;
            forum.logout().await
        }
        Command::Post {
            title,
            content,
            categories,
        } => {
            forum
                .create_post(PostForm::new(&title, &content, &categories))
                .await
        }
        Command::React { post, kind } => forum.react_to_post(post, kind).await,
        Command::ReactComment { comment, kind } => forum.react_to_comment(comment, kind).await,
        Command::Comment { post, content } => {
            forum.add_comment(post, CommentForm::new(&content)).await
        }
    };

    if keep_session {
        persist_session(forum.api().session_cookie())
            .context("не удалось сохранить .forum_session")?;
    } else {
        clear_session().context("не удалось удалить .forum_session")?;
    }

    let page = forum.ui().page.borrow();
    if cli.html {
        println!("{}", render_page(&page).render_to_string());
    } else {
        print!("{}", format_page(&page));
    }

    Ok(outcome)
}

fn resolve_server(flag: Option<String>, from_env: Option<String>) -> String {
    let raw = flag
        .or(from_env)
        .filter(|server| !server.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER.to_string());
    normalize_server(raw.trim().to_string())
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_session_content(raw: &str) -> Option<String> {
    let cookie = raw.trim();
    if cookie.is_empty() {
        return None;
    }
    Some(cookie.to_string())
}

fn load_session() -> io::Result<Option<String>> {
    if !Path::new(SESSION_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(SESSION_FILE)?;
    Ok(parse_session_content(&raw))
}

fn persist_session(cookie: Option<String>) -> io::Result<()> {
    match cookie {
        Some(cookie) => fs::write(SESSION_FILE, cookie),
        None => Ok(()),
    }
}

fn clear_session() -> io::Result<()> {
    match fs::remove_file(SESSION_FILE) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
        _ => Ok(()),
    }
}

fn format_page(page: &PageState) -> String {
    let mut out = String::new();
    match page.session.user() {
        Some(user) => {
            let _ = writeln!(out, "Вы вошли как {}", user.username);
        }
        None => {
            let _ = writeln!(out, "Вы не вошли");
        }
    }

    if page.posts.is_empty() {
        let _ = writeln!(out, "{}", forum_core::EMPTY_STATE);
        return out;
    }

    for post in &page.posts {
        let _ = writeln!(
            out,
            "- [{}] {} (автор: {}) 👍 {} 👎 {}",
            post.id, post.title, post.username, post.likes, post.dislikes
        );
        if !post.categories.is_empty() {
            let _ = writeln!(out, "    категории: {}", post.categories.join(", "));
        }
        let _ = writeln!(out, "    {}", post.content);
        for comment in &post.comments {
            let _ = writeln!(
                out,
                "    * [{}] {}: {} 👍 {} 👎 {}",
                comment.id, comment.username, comment.content, comment.likes, comment.dislikes
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use forum_core::{Comment, Post, SessionState, User};

    use super::*;

    #[test]
    fn normalize_server_keeps_scheme() {
        let s = normalize_server("https://example.com:8080".to_string());
        assert_eq!(s, "https://example.com:8080");
    }

    #[test]
    fn normalize_server_adds_http_scheme() {
        let s = normalize_server("127.0.0.1:9000".to_string());
        assert_eq!(s, "http://127.0.0.1:9000");
    }

    #[test]
    fn resolve_server_defaults() {
        assert_eq!(resolve_server(None, None), DEFAULT_SERVER);
    }

    #[test]
    fn resolve_server_prefers_flag_over_env() {
        let server = resolve_server(
            Some("localhost:9999".to_string()),
            Some("http://env:1".to_string()),
        );
        assert_eq!(server, "http://localhost:9999");
    }

    #[test]
    fn resolve_server_uses_env_and_skips_blank() {
        assert_eq!(
            resolve_server(None, Some("forum.local".to_string())),
            "http://forum.local"
        );
        assert_eq!(resolve_server(None, Some("  ".to_string())), DEFAULT_SERVER);
    }

    #[test]
    fn parse_session_content_trims_whitespace() {
        let cookie = parse_session_content("  session_token=abc \n");
        assert_eq!(cookie.as_deref(), Some("session_token=abc"));
    }

    #[test]
    fn parse_session_content_rejects_blank() {
        assert!(parse_session_content("   ").is_none());
    }

    #[test]
    fn reaction_kind_parses_from_argument() {
        let cli = Cli::try_parse_from(["forum-cli", "react", "--post", "5", "--kind", "Like"])
            .expect("arguments must parse");
        match cli.command {
            Command::React { post, kind } => {
                assert_eq!(post, 5);
                assert_eq!(kind, ReactionKind::Like);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn post_accepts_repeated_categories() {
        let cli = Cli::try_parse_from([
            "forum-cli",
            "post",
            "--title",
            "t",
            "--content",
            "c",
            "--category",
            "general",
            "--category",
            "science",
        ])
        .expect("arguments must parse");
        match cli.command {
            Command::Post { categories, .. } => assert_eq!(categories, ["general", "science"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn format_page_shows_empty_state() {
        let text = format_page(&PageState::default());
        assert!(text.contains("Вы не вошли"));
        assert!(text.contains(forum_core::EMPTY_STATE));
    }

    #[test]
    fn format_page_lists_posts_and_comments() {
        let page = PageState {
            session: SessionState::LoggedIn(User {
                id: Some(1),
                username: "kate".to_string(),
                email: String::new(),
            }),
            panel: None,
            posts: vec![Post {
                id: 5,
                title: "Hello".to_string(),
                content: "Body".to_string(),
                username: "alice".to_string(),
                categories: vec!["general".to_string()],
                likes: 2,
                dislikes: 1,
                comments: vec![Comment {
                    id: 8,
                    content: "hi".to_string(),
                    username: "bob".to_string(),
                    likes: 0,
                    dislikes: 0,
                }],
            }],
        };

        let text = format_page(&page);
        assert!(text.contains("Вы вошли как kate"));
        assert!(text.contains("- [5] Hello (автор: alice) 👍 2 👎 1"));
        assert!(text.contains("категории: general"));
        assert!(text.contains("* [8] bob: hi"));
    }
}
