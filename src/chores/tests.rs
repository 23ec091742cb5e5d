//! Tests for chores module
//!
//! These tests verify core chore functionality including:
//! - Wire-format field names
//! - Named-column row decoding against an in-memory database
//! - Ordering and single-row lookup contracts

#[cfg(test)]
mod tests {
    use super::super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        // Single connection so every statement sees the same in-memory db
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("open in-memory database");

        crate::common::migrations::run_migrations(&pool)
            .await
            .expect("run migrations");

        pool
    }

    async fn insert_chore(pool: &SqlitePool, id: i64, name: &str, description: &str, score: i64) {
        sqlx::query("INSERT INTO chores (chore_id, name, description, score) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(description)
            .bind(score)
            .execute(pool)
            .await
            .expect("insert chore");
    }

    #[test]
    fn test_chore_serializes_with_legacy_field_names() {
        let chore = models::Chore {
            id: 7,
            name: "Dishes".to_string(),
            description: "Wash dishes".to_string(),
            score: 5,
        };

        let json = serde_json::to_value(&chore).expect("serialize chore");
        assert_eq!(
            json,
            serde_json::json!({
                "Id": 7,
                "Name": "Dishes",
                "Description": "Wash dishes",
                "Score": 5
            })
        );
    }

    #[tokio::test]
    async fn test_list_chores_preserves_row_order() {
        let pool = test_pool().await;
        insert_chore(&pool, 1, "Dishes", "Wash dishes", 5).await;
        insert_chore(&pool, 3, "Trash", "Take out trash", 2).await;
        insert_chore(&pool, 2, "Laundry", "Fold laundry", 4).await;

        let chores = services::list_chores(&pool).await.expect("list chores");

        let ids: Vec<i64> = chores.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_list_chores_is_idempotent_without_mutation() {
        let pool = test_pool().await;
        insert_chore(&pool, 1, "Dishes", "Wash dishes", 5).await;
        insert_chore(&pool, 2, "Laundry", "Fold laundry", 4).await;

        let first = services::list_chores(&pool).await.expect("first list");
        let second = services::list_chores(&pool).await.expect("second list");

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_list_chores_empty_table() {
        let pool = test_pool().await;

        let chores = services::list_chores(&pool).await.expect("list chores");
        assert!(chores.is_empty());
    }

    #[tokio::test]
    async fn test_get_chore_round_trip() {
        let pool = test_pool().await;
        insert_chore(&pool, 7, "Dishes", "Wash dishes", 5).await;

        let chore = services::get_chore(&pool, 7)
            .await
            .expect("get chore")
            .expect("chore exists");

        assert_eq!(chore.id, 7);
        assert_eq!(chore.name, "Dishes");
        assert_eq!(chore.description, "Wash dishes");
        assert_eq!(chore.score, 5);
    }

    #[tokio::test]
    async fn test_get_chore_missing_row_is_none() {
        let pool = test_pool().await;
        insert_chore(&pool, 7, "Dishes", "Wash dishes", 5).await;

        let chore = services::get_chore(&pool, 42).await.expect("get chore");
        assert!(chore.is_none());
    }

    #[tokio::test]
    async fn test_pool_has_no_checked_out_connections_after_calls() {
        let pool = test_pool().await;
        insert_chore(&pool, 1, "Dishes", "Wash dishes", 5).await;

        let _ = services::list_chores(&pool).await.expect("list chores");
        let _ = services::get_chore(&pool, 1).await.expect("get chore");
        let _ = services::get_chore(&pool, 999).await.expect("get missing");

        // Every statement releases its connection on exit
        assert_eq!(pool.size() as usize - pool.num_idle(), 0);
    }
}
