//! The views of the blog and the state behind them: the search box, one form per view that has
//! one, and which view is showing.
pub mod forms;
pub mod pages;
pub mod routes;

use crate::backend::{
    structs::{Post, PostId},
    Backend,
};
use crate::store::{search::FilteredView, PostStore};
use crate::twoface::Fallible;
use forms::PostForm;
use routes::Route;
use tracing::debug;

pub struct App<B> {
    store: PostStore<B>,
    search: String,
    new_post: PostForm,
    edit_post: PostForm,
    route: Route,
}

impl<B: Backend> App<B> {
    pub fn new(store: PostStore<B>) -> Self {
        Self {
            store,
            search: String::new(),
            new_post: PostForm::default(),
            edit_post: PostForm::default(),
            route: Route::Home,
        }
    }

    /// Fill the store from the backend. On failure the store stays empty.
    pub async fn start(&mut self) -> Fallible<()> {
        self.store.load().await
    }

    pub fn store(&self) -> &PostStore<B> {
        &self.store
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// What the home page lists.
    pub fn search_results(&self) -> FilteredView<'_> {
        self.store.filter(&self.search)
    }

    pub fn new_post_form(&self) -> &PostForm {
        &self.new_post
    }

    pub fn new_post_form_mut(&mut self) -> &mut PostForm {
        &mut self.new_post
    }

    pub fn edit_form(&self) -> &PostForm {
        &self.edit_post
    }

    pub fn edit_form_mut(&mut self) -> &mut PostForm {
        &mut self.edit_post
    }

    pub fn navigate(&mut self, route: Route) {
        debug!(from = %self.route, to = %route, "navigate");
        if let Route::EditPost(id) = route {
            if let Some(post) = self.store.find(id) {
                self.edit_post = PostForm::filled_from(post);
            }
        }
        self.route = route;
    }

    pub fn open(&mut self, path: &str) {
        self.navigate(Route::parse(path));
    }

    /// Post the new post form. Only on success is the form cleared and the home page shown.
    pub async fn submit_new_post(&mut self) -> Fallible<Post> {
        let post = self
            .store
            .create(&self.new_post.title, &self.new_post.body)
            .await?;
        self.new_post.clear();
        self.navigate(Route::Home);
        Ok(post)
    }

    /// Delete a post. Only on success is the home page shown.
    pub async fn delete_post(&mut self, id: PostId) -> Fallible<()> {
        self.store.delete(id).await?;
        self.navigate(Route::Home);
        Ok(())
    }

    /// The current view as text.
    pub fn render(&self) -> String {
        let page = match self.route {
            Route::Home => pages::home(&self.search_results()),
            Route::NewPost => pages::new_post(&self.new_post),
            // Post pages only show posts the current search lets through.
            Route::PostPage(id) => {
                pages::post_page(self.search_results().into_iter().find(|p| p.id == id))
            }
            Route::EditPost(id) => pages::edit_post(self.store.find(id), &self.edit_post),
            Route::About => pages::about(),
            Route::Missing => pages::missing(),
        };
        pages::layout(self.search(), self.route, &page)
    }
}
