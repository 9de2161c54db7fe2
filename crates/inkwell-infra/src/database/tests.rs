#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use inkwell_core::domain::Post;
    use inkwell_core::error::RepoError;
    use inkwell_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    fn model(title: &str, updated_at: chrono::DateTime<chrono::Utc>) -> post::Model {
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            body: "Content".to_owned(),
            featured_image: None,
            created_at: updated_at.into(),
            updated_at: updated_at.into(),
        }
    }

    fn model_of(p: &Post) -> post::Model {
        post::Model {
            id: p.id,
            title: p.title.clone(),
            body: p.body.clone(),
            featured_image: p.featured_image.clone(),
            created_at: p.created_at.into(),
            updated_at: p.updated_at.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                title: "Test Post".to_owned(),
                body: "Content".to_owned(),
                featured_image: Some("images/posts/featured-images/a.jpg".to_owned()),
                created_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.id, post_id);
        assert_eq!(
            post.featured_image.as_deref(),
            Some("images/posts/featured-images/a.jpg")
        );
    }

    #[tokio::test]
    async fn test_list_recent_maps_models() {
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model("Newer", now),
                model("Older", now - chrono::Duration::seconds(60)),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let posts = repo.list_recent().await.unwrap();

        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Older"]);
    }

    #[tokio::test]
    async fn test_save_new_post_issues_insert() {
        let post = Post::new("Fresh".to_owned(), "Content".to_owned(), None);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model_of(&post)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let saved: Post = repo.save(post.clone()).await.unwrap();
        assert_eq!(saved.id, post.id);
        assert_eq!(saved.title, "Fresh");

        // A brand-new record must go through INSERT (with the upsert
        // clause), never a bare UPDATE that matches zero rows.
        let log = repo
            .db
            .into_transaction_log()
            .iter()
            .flat_map(|t| t.statements())
            .map(|s| s.sql.clone())
            .collect::<Vec<_>>()
            .join("\n");
        assert!(log.contains("INSERT INTO \"posts\""), "log: {log}");
        assert!(log.contains("ON CONFLICT"), "log: {log}");
        assert!(!log.contains("UPDATE \"posts\""), "log: {log}");
    }

    #[tokio::test]
    async fn test_save_unique_violation_maps_to_constraint() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"posts_pkey\"".to_owned(),
            ))])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = repo
            .save(Post::new("Fresh".to_owned(), "Content".to_owned(), None))
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_delete_existing_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        assert!(
            BaseRepository::<Post, _>::delete(&repo, uuid::Uuid::new_v4())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        let result = BaseRepository::<Post, _>::delete(&repo, uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
