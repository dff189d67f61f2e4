use std::sync::Arc;

use uuid::Uuid;

use crate::{models::post::Post, repositories::posts_repo::PostsRepository, Result};

#[derive(Clone)]
pub struct PostsService {
    repo: Arc<dyn PostsRepository>,
}

impl PostsService {
    pub fn new(repo: Arc<dyn PostsRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let posts = self.repo.list_posts().await?;

        Ok(posts)
    }

    pub async fn create_post(&self, title: &str, author: &str, content: &str) -> Result<Post> {
        let post = self.repo.create_post(title, author, content).await?;

        Ok(post)
    }

    pub async fn update_post(
        &self,
        post_id: Uuid,
        title: &str,
        author: &str,
        content: &str,
    ) -> Result<()> {
        self.repo
            .update_post(post_id, title, author, content)
            .await?;

        Ok(())
    }

    pub async fn delete_post(&self, post_id: Uuid) -> Result<()> {
        self.repo.delete_post(post_id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use crate::repositories::posts_repo::in_memory::InMemoryRepo;

    use super::*;

    fn service(repo: InMemoryRepo) -> PostsService {
        PostsService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn created_post_shows_up_in_list() {
        let svc = service(InMemoryRepo::new());

        let before = Utc::now();
        svc.create_post("Hello", "Ann", "World").await.unwrap();

        let posts = svc.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[0].author, "Ann");
        assert_eq!(posts[0].content, "World");
        assert!(posts[0].created_at >= before);
    }

    #[tokio::test]
    async fn list_is_newest_first_with_unique_ids() {
        let now = Utc::now();
        let svc = service(InMemoryRepo::seeded(vec![
            InMemoryRepo::post("oldest", "a", "x", now - Duration::hours(2)),
            InMemoryRepo::post("newest", "b", "y", now),
            InMemoryRepo::post("middle", "c", "z", now - Duration::hours(1)),
        ]));

        let posts = svc.list_posts().await.unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["newest", "middle", "oldest"]);

        let ids: HashSet<Uuid> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len());
    }

    #[tokio::test]
    async fn update_changes_fields_but_not_created_at() {
        let svc = service(InMemoryRepo::new());
        let post = svc.create_post("Hello", "Ann", "World").await.unwrap();

        svc.update_post(post.id, "X", "Ann", "World").await.unwrap();

        let posts = svc.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, post.id);
        assert_eq!(posts[0].title, "X");
        assert_eq!(posts[0].author, "Ann");
        assert_eq!(posts[0].content, "World");
        assert_eq!(posts[0].created_at, post.created_at);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_a_no_op() {
        let svc = service(InMemoryRepo::new());
        svc.create_post("Hello", "Ann", "World").await.unwrap();

        svc.update_post(Uuid::now_v7(), "X", "Y", "Z").await.unwrap();

        let posts = svc.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
    }

    #[tokio::test]
    async fn delete_removes_the_post() {
        let svc = service(InMemoryRepo::new());
        let post = svc.create_post("Hello", "Ann", "World").await.unwrap();

        svc.delete_post(post.id).await.unwrap();

        let posts = svc.list_posts().await.unwrap();
        assert!(posts.iter().all(|p| p.id != post.id));
        assert!(posts.is_empty());
    }
}
