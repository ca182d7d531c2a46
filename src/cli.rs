//! One user action per invocation: parse it from the arguments, run it against the backend, and
//! hand back the page to print.
use crate::app::{routes::Route, App};
use crate::backend::{rest::RestBackend, structs::PostId, Backend};
use crate::config::Config;
use crate::store::PostStore;
use crate::twoface::{Cause, Describe, DescribeErr, ExternalError, Fallible};
use anyhow::anyhow;

pub const USAGE: &str = "usage: quietblog <config.toml> <command>

commands:
  list [query]          list posts, newest first, optionally filtered
  show <id>             show one post
  new <title> <body>    create a post
  delete <id>           delete a post
  edit <id>             open the edit form for a post
  about                 show the about page
  open <path>           open a view by path, e.g. /post/3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(String),
    Show(PostId),
    New { title: String, body: String },
    Delete(PostId),
    Edit(PostId),
    About,
    Open(String),
}

const BAD_USAGE: ExternalError = ExternalError {
    cause: Cause::UserInvalidInput,
    text: "Unrecognised command, run without arguments for usage",
};

impl Command {
    pub fn parse(args: &[String]) -> Fallible<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let command = match &args[..] {
            ["list", query @ ..] => Self::List(query.join(" ")),
            ["show", id] => Self::Show(parse_id(id)?),
            ["new", title, body] => Self::New {
                title: (*title).to_owned(),
                body: (*body).to_owned(),
            },
            ["delete", id] => Self::Delete(parse_id(id)?),
            ["edit", id] => Self::Edit(parse_id(id)?),
            ["about"] => Self::About,
            ["open", path] => Self::Open((*path).to_owned()),
            _ => return Err(anyhow!("bad arguments: {:?}", args).describe(BAD_USAGE)),
        };
        Ok(command)
    }
}

fn parse_id(id: &str) -> Fallible<PostId> {
    id.parse().describe_err(ExternalError {
        cause: Cause::UserInvalidInput,
        text: "Post ids are whole numbers",
    })
}

/// Load the posts from the configured backend, run the command, and render where it ended up.
pub async fn run(config: &Config, command: Command) -> Fallible<String> {
    let backend = RestBackend::from_config(config).describe_err(ExternalError {
        cause: Cause::UserInvalidInput,
        text: "The configured backend_url can't be used",
    })?;
    let mut app = App::new(PostStore::new(backend));
    app.start().await?;
    execute(&mut app, command).await?;
    Ok(app.render())
}

/// `run` on a fresh actix system, for callers outside any runtime. The system needs a `'static`
/// future, so the config is moved in.
pub fn run_blocking(config: Config, command: Command) -> Fallible<String> {
    let mut sys = actix_rt::System::new("quietblog");
    sys.block_on(async move { run(&config, command).await })
}

pub async fn execute<B: Backend>(app: &mut App<B>, command: Command) -> Fallible<()> {
    match command {
        Command::List(query) => {
            app.set_search(query);
            app.navigate(Route::Home);
        }
        Command::Show(id) => app.navigate(Route::PostPage(id)),
        Command::New { title, body } => {
            app.navigate(Route::NewPost);
            let form = app.new_post_form_mut();
            form.title = title;
            form.body = body;
            app.submit_new_post().await?;
        }
        Command::Delete(id) => {
            app.navigate(Route::PostPage(id));
            app.delete_post(id).await?;
        }
        Command::Edit(id) => app.navigate(Route::EditPost(id)),
        Command::About => app.navigate(Route::About),
        Command::Open(path) => app.open(&path),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{errors::BackendError, mock, structs::Post};

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_owned()).collect()
    }

    fn post(id: PostId, title: &str) -> Post {
        Post {
            id,
            title: title.to_owned(),
            datetime: "July 01, 2021 11:17:36 AM".to_owned(),
            body: "body".to_owned(),
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            Command::parse(&args(&["list"])).unwrap(),
            Command::List(String::new())
        );
        assert_eq!(
            Command::parse(&args(&["list", "big", "dogs"])).unwrap(),
            Command::List("big dogs".to_owned())
        );
        assert_eq!(Command::parse(&args(&["show", "4"])).unwrap(), Command::Show(4));
        assert_eq!(
            Command::parse(&args(&["new", "Title", ""])).unwrap(),
            Command::New {
                title: "Title".to_owned(),
                body: String::new()
            }
        );
        assert_eq!(
            Command::parse(&args(&["open", "/about"])).unwrap(),
            Command::Open("/about".to_owned())
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let err = Command::parse(&args(&["show", "four"])).unwrap_err();
        assert_eq!(err.to_string(), "UserInvalidInput: Post ids are whole numbers");
        assert_eq!(
            Command::parse(&args(&[])).unwrap_err().cause(),
            Cause::UserInvalidInput
        );
        assert!(Command::parse(&args(&["new", "only a title"])).is_err());
        assert!(Command::parse(&args(&["frobnicate"])).is_err());
    }

    async fn app_with(posts: Vec<Post>) -> (mock::Backend, App<mock::Backend>) {
        let backend = mock::Backend::with_posts(posts);
        let mut app = App::new(PostStore::new(backend.clone()));
        app.start().await.unwrap();
        (backend, app)
    }

    #[actix_rt::test]
    async fn test_new_then_list() {
        let (backend, mut app) = app_with(vec![post(3, "Cats")]).await;
        execute(
            &mut app,
            Command::New {
                title: "Dogs".to_owned(),
                body: "woof".to_owned(),
            },
        )
        .await
        .unwrap();
        assert_eq!(backend.posts().last().map(|p| p.id), Some(4));

        execute(&mut app, Command::List("dog".to_owned())).await.unwrap();
        let page = app.render();
        assert!(page.contains("Dogs (/post/4)"));
        assert!(!page.contains("Cats"));
    }

    #[test]
    fn test_run_blocking_reports_unreachable_backend() {
        let config = Config::from_toml(r#"backend_url = "http://127.0.0.1:1""#).unwrap();
        let err = run_blocking(config, Command::About).unwrap_err();
        assert_eq!(err.cause(), Cause::TransportError);
    }

    #[actix_rt::test]
    async fn test_failed_delete_stays_on_post_page() {
        let (backend, mut app) = app_with(vec![post(3, "Cats")]).await;
        backend.fail_with(BackendError::Transport {
            message: "timed out".to_owned(),
        });
        let err = execute(&mut app, Command::Delete(3)).await.unwrap_err();
        assert_eq!(err.cause(), Cause::TransportError);
        assert_eq!(app.route(), Route::PostPage(3));
        assert_eq!(app.store().posts().len(), 1);
    }
}
