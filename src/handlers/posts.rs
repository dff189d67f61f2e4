use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Extension, Form, Router,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{models::post::PostForm, views, AppState, Result};

pub fn posts_handler() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/posts", post(create_post))
        .route("/posts/{id}/update", post(update_post))
        .route("/posts/{id}/delete", post(delete_post))
}

#[derive(Debug, Deserialize)]
struct IndexQuery {
    q: Option<String>,
    edit: Option<Uuid>,
}

async fn index(
    Extension(app_state): Extension<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
) -> Result<impl IntoResponse> {
    let posts = app_state.posts_service.list_posts().await?;

    // An edit id that is no longer in the list falls back to create mode.
    let edit_target = query.edit.and_then(|id| posts.iter().find(|p| p.id == id));
    let search = query.q.as_deref().unwrap_or("");

    let page = views::posts::index_page(&posts, edit_target, search);
    let html = page.render()?;

    Ok(Html(html))
}

async fn create_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Result<impl IntoResponse> {
    // Empty fields mean no store call at all, mirroring the form's
    // client-side required check.
    if form.validate().is_err() {
        return Ok(Redirect::to("/"));
    }

    app_state
        .posts_service
        .create_post(&form.title, &form.author, &form.content)
        .await?;

    Ok(Redirect::to("/"))
}

async fn update_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
    Form(form): Form<PostForm>,
) -> Result<impl IntoResponse> {
    if form.validate().is_err() {
        return Ok(Redirect::to(&format!("/?edit={post_id}")));
    }

    app_state
        .posts_service
        .update_post(post_id, &form.title, &form.author, &form.content)
        .await?;

    Ok(Redirect::to("/"))
}

async fn delete_post(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(post_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    app_state.posts_service.delete_post(post_id).await?;

    Ok(Redirect::to("/"))
}
