//! Plain-text rendering of each view.
use crate::app::{forms::PostForm, routes::Route};
use crate::backend::structs::Post;
use std::fmt::Write;

const PREVIEW_CHARS: usize = 25;

/// Wrap a page in the header, search line and navigation shared by every view.
pub fn layout(search: &str, route: Route, page: &str) -> String {
    let mut out = String::new();
    out.push_str("Quiet Blog\n");
    let _ = writeln!(out, "Search: {}", search);
    let _ = writeln!(out, "Home (/) | Post (/post) | About (/about)    at {}", route);
    out.push_str("----------------------------------------\n");
    out.push_str(page);
    out
}

pub fn home(posts: &[&Post]) -> String {
    if posts.is_empty() {
        return "No posts to display.\n".to_owned();
    }
    let mut out = String::new();
    for post in posts {
        let _ = writeln!(out, "{} (/post/{})", post.title, post.id);
        let _ = writeln!(out, "  {}", post.datetime);
        let _ = writeln!(out, "  {}\n", preview(&post.body));
    }
    out
}

pub fn post_page(post: Option<&Post>) -> String {
    guard!(let Some(post) = post else {
        return "Post Not Found\nNothing lives here. Head back to the homepage (/).\n".to_owned();
    });
    format!(
        "{}\n{}\n\n{}\n\nEdit Post (/edit/{id}) | Delete Post\n",
        post.title,
        post.datetime,
        post.body,
        id = post.id
    )
}

pub fn new_post(form: &PostForm) -> String {
    format!("New Post\nTitle: {}\nPost: {}\n", form.title, form.body)
}

pub fn edit_post(post: Option<&Post>, form: &PostForm) -> String {
    match post {
        Some(post) => format!(
            "Edit Post #{}\nTitle: {}\nPost: {}\n",
            post.id, form.title, form.body
        ),
        None => "Post Not Found\nThere is no post to edit here. Head back to the homepage (/).\n"
            .to_owned(),
    }
}

pub fn about() -> String {
    "About\nA small blog. Posts live on the configured backend; search runs locally.\n".to_owned()
}

pub fn missing() -> String {
    "Page Not Found\nWell, that's disappointing. Visit the homepage (/).\n".to_owned()
}

/// The start of a post body, cut on a character boundary.
fn preview(body: &str) -> String {
    if body.chars().count() <= PREVIEW_CHARS {
        body.to_owned()
    } else {
        let start: String = body.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", start)
    }
}
