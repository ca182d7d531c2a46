//! The views a user can open, and the paths that name them.
use crate::backend::structs::PostId;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::digit1,
    combinator::{all_consuming, map, map_res, opt},
    sequence::{preceded, terminated},
    IResult,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`: the search results.
    Home,
    /// `/post`: the new post form.
    NewPost,
    /// `/post/{id}`
    PostPage(PostId),
    /// `/edit/{id}`
    EditPost(PostId),
    /// `/about`
    About,
    /// Any other path.
    Missing,
}

impl Route {
    /// Never fails: paths that name no view are `Route::Missing`.
    pub fn parse(path: &str) -> Self {
        route(path).map(|(_, r)| r).unwrap_or(Route::Missing)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "/"),
            Self::NewPost => write!(f, "/post"),
            Self::PostPage(id) => write!(f, "/post/{}", id),
            Self::EditPost(id) => write!(f, "/edit/{}", id),
            Self::About => write!(f, "/about"),
            Self::Missing => write!(f, "/missing"),
        }
    }
}

fn id(input: &str) -> IResult<&str, PostId> {
    map_res(digit1, |digits: &str| digits.parse::<PostId>())(input)
}

fn route(input: &str) -> IResult<&str, Route> {
    all_consuming(terminated(
        alt((
            map(preceded(tag("/post/"), id), Route::PostPage),
            map(preceded(tag("/edit/"), id), Route::EditPost),
            map(tag("/post"), |_| Route::NewPost),
            map(tag("/about"), |_| Route::About),
            map(tag("/"), |_| Route::Home),
        )),
        opt(tag("/")),
    ))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/post"), Route::NewPost);
        assert_eq!(Route::parse("/post/"), Route::NewPost);
        assert_eq!(Route::parse("/post/12"), Route::PostPage(12));
        assert_eq!(Route::parse("/edit/3/"), Route::EditPost(3));
        assert_eq!(Route::parse("/about"), Route::About);
    }

    #[test]
    fn test_unknown_paths_are_missing() {
        for path in &["", "about", "/post/abc", "/edit", "/edit/", "/about/us", "/posts/1"] {
            assert_eq!(Route::parse(path), Route::Missing, "path {:?}", path);
        }
        // Too large for an id.
        assert_eq!(Route::parse("/post/99999999999999999999"), Route::Missing);
    }

    #[test]
    fn test_display_parses_back() {
        for route in &[
            Route::Home,
            Route::NewPost,
            Route::PostPage(7),
            Route::EditPost(8),
            Route::About,
        ] {
            assert_eq!(Route::parse(&route.to_string()), *route);
        }
    }
}
