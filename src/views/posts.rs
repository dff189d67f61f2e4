use askama::Template;
use uuid::Uuid;

use crate::models::post::Post;

/// Content longer than this renders truncated with a Read more toggle.
pub const CONTENT_PREVIEW_LIMIT: usize = 320;

/// The single form, in either create or edit mode.
pub struct PostFormView {
    pub heading: &'static str,
    pub action: String,
    pub submit_label: &'static str,
    pub editing: bool,
    pub title: String,
    pub author: String,
    pub content: String,
}

pub struct PostCardView {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub preview: String,
    pub content: String,
    pub has_more: bool,
}

/// Everything the page needs, built fresh from the fetched post list on
/// every request. Search and edit mode live in the query string, per-card
/// expansion stays in the browser.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub form: PostFormView,
    pub search: String,
    pub cards: Vec<PostCardView>,
}

pub fn index_page(posts: &[Post], edit_target: Option<&Post>, search: &str) -> IndexPage {
    let cards = filter_posts(posts, search)
        .into_iter()
        .map(post_card)
        .collect();

    IndexPage {
        form: form_view(edit_target),
        search: search.to_string(),
        cards,
    }
}

pub fn form_view(edit_target: Option<&Post>) -> PostFormView {
    match edit_target {
        Some(post) => PostFormView {
            heading: "Edit Post",
            action: format!("/posts/{}/update", post.id),
            submit_label: "Save",
            editing: true,
            title: post.title.clone(),
            author: post.author.clone(),
            content: post.content.clone(),
        },
        None => PostFormView {
            heading: "Create a Post",
            action: "/posts".to_string(),
            submit_label: "Publish",
            editing: false,
            title: String::new(),
            author: String::new(),
            content: String::new(),
        },
    }
}

/// Case-insensitive substring match over title, author, and content.
/// An empty search keeps every post.
pub fn filter_posts<'a>(posts: &'a [Post], search: &str) -> Vec<&'a Post> {
    if search.is_empty() {
        return posts.iter().collect();
    }

    let needle = search.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.author.to_lowercase().contains(&needle)
                || p.content.to_lowercase().contains(&needle)
        })
        .collect()
}

fn post_card(post: &Post) -> PostCardView {
    let (preview, has_more) = content_preview(&post.content);

    PostCardView {
        id: post.id,
        title: post.title.clone(),
        author: post.author.clone(),
        preview,
        content: post.content.clone(),
        has_more,
    }
}

/// First 320 characters plus an ellipsis, or the content untouched if it
/// already fits. Counts chars, not bytes, so multibyte text stays intact.
pub fn content_preview(content: &str) -> (String, bool) {
    if content.chars().count() <= CONTENT_PREVIEW_LIMIT {
        return (content.to_string(), false);
    }

    let mut preview: String = content.chars().take(CONTENT_PREVIEW_LIMIT).collect();
    preview.push('…');
    (preview, true)
}
