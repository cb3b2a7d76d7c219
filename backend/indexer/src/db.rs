//! Database layer — migrations, queries, and cursor management.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

use crate::errors::Result;
use crate::events::{EventRecord, RegistryEvent};

/// Establish a SQLite connection pool and run pending migrations.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    let url = if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else {
        format!("sqlite:{database_url}")
    };

    // `mode=rwc` creates the database file on first start.
    let url = if url.contains('?') || url.contains(":memory:") {
        url
    } else {
        format!("{url}?mode=rwc")
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

/// Apply the embedded migrations to `pool`.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied successfully");
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Cursor helpers
// ─────────────────────────────────────────────────────────

/// Read the last-seen ledger from the cursor row.
/// Returns `0` when no cursor has been persisted yet.
pub async fn get_last_ledger(pool: &SqlitePool) -> Result<i64> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT last_ledger FROM indexer_cursor WHERE id = 1")
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(v,)| v).unwrap_or(0))
}

/// Persist the last-seen ledger (and optionally a pagination cursor string).
pub async fn save_cursor(
    pool: &SqlitePool,
    last_ledger: i64,
    last_cursor: Option<&str>,
) -> Result<()> {
    sqlx::query("UPDATE indexer_cursor SET last_ledger = ?1, last_cursor = ?2 WHERE id = 1")
        .bind(last_ledger)
        .bind(last_cursor)
        .execute(pool)
        .await?;
    Ok(())
}

/// Read back the raw cursor string (used to resume pagination mid-ledger).
pub async fn get_cursor_string(pool: &SqlitePool) -> Result<Option<String>> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT last_cursor FROM indexer_cursor WHERE id = 1")
            .fetch_optional(pool)
            .await?;
    Ok(row.and_then(|(v,)| v))
}

// ─────────────────────────────────────────────────────────
// Event writes
// ─────────────────────────────────────────────────────────

/// Persist a batch of decoded events.  Events that share the same
/// `(ledger, tx_hash, event_type, release_id)` tuple are silently ignored
/// to make the indexer idempotent.
pub async fn insert_events(pool: &SqlitePool, events: &[RegistryEvent]) -> Result<usize> {
    let mut count = 0usize;
    for ev in events {
        let rows_affected = sqlx::query(
            r#"
            INSERT OR IGNORE INTO events
                (event_type, release_id, project_id, actor, amount, ledger, timestamp,
                 contract_id, tx_hash)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&ev.event_type)
        .bind(&ev.release_id)
        .bind(&ev.project_id)
        .bind(&ev.actor)
        .bind(&ev.amount)
        .bind(ev.ledger)
        .bind(ev.timestamp)
        .bind(&ev.contract_id)
        .bind(&ev.tx_hash)
        .execute(pool)
        .await?
        .rows_affected();

        count += rows_affected as usize;
    }
    Ok(count)
}

// ─────────────────────────────────────────────────────────
// Event reads
// ─────────────────────────────────────────────────────────

const SELECT_EVENTS: &str = r#"
    SELECT id, event_type, release_id, project_id, actor, amount, ledger, timestamp,
           contract_id, tx_hash, created_at
    FROM   events
"#;

/// Fetch the full history of one release, ordered by ledger ascending.
pub async fn get_events_for_release(
    pool: &SqlitePool,
    release_id: &str,
) -> Result<Vec<EventRecord>> {
    let sql = format!("{SELECT_EVENTS} WHERE release_id = ?1 ORDER BY ledger ASC, id ASC");
    let rows = sqlx::query_as::<_, EventRecord>(&sql)
        .bind(release_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch all release events of a project, ordered by ledger ascending.
pub async fn get_events_for_project(
    pool: &SqlitePool,
    project_id: &str,
) -> Result<Vec<EventRecord>> {
    let sql = format!("{SELECT_EVENTS} WHERE project_id = ?1 ORDER BY ledger ASC, id ASC");
    let rows = sqlx::query_as::<_, EventRecord>(&sql)
        .bind(project_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Fetch all events, ordered by ledger ascending.
pub async fn get_all_events(pool: &SqlitePool) -> Result<Vec<EventRecord>> {
    let sql = format!("{SELECT_EVENTS} ORDER BY ledger ASC, id ASC");
    let rows = sqlx::query_as::<_, EventRecord>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A single connection keeps the in-memory database alive and shared.
    pub(crate) async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        migrate(&pool).await.unwrap();
        pool
    }

    pub(crate) fn event(
        kind: &str,
        release_id: Option<&str>,
        project_id: Option<&str>,
        ledger: i64,
    ) -> RegistryEvent {
        RegistryEvent {
            event_type: kind.to_string(),
            release_id: release_id.map(String::from),
            project_id: project_id.map(String::from),
            actor: Some("GACTOR".to_string()),
            amount: Some("1000".to_string()),
            ledger,
            timestamp: 1_704_067_200,
            contract_id: "CONTRACT1".to_string(),
            tx_hash: Some(format!("TX{ledger}")),
        }
    }

    #[tokio::test]
    async fn insert_is_idempotent() {
        let pool = memory_pool().await;
        let batch = vec![
            event("release_requested", Some("0"), Some("1"), 10),
            event("fee_updated", None, None, 11),
        ];

        assert_eq!(insert_events(&pool, &batch).await.unwrap(), 2);
        assert_eq!(insert_events(&pool, &batch).await.unwrap(), 0);
        assert_eq!(get_all_events(&pool).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn queries_filter_by_release_and_project() {
        let pool = memory_pool().await;
        let batch = vec![
            event("release_requested", Some("0"), Some("1"), 10),
            event("release_requested", Some("1"), Some("2"), 11),
            event("release_updated", Some("0"), Some("1"), 12),
            event("release_completed", Some("0"), Some("1"), 13),
        ];
        insert_events(&pool, &batch).await.unwrap();

        let history = get_events_for_release(&pool, "0").await.unwrap();
        let kinds: Vec<_> = history.iter().map(|e| e.event_type.as_str()).collect();
        assert_eq!(
            kinds,
            ["release_requested", "release_updated", "release_completed"]
        );

        assert_eq!(get_events_for_project(&pool, "2").await.unwrap().len(), 1);
        assert!(get_events_for_release(&pool, "9").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cursor_round_trips() {
        let pool = memory_pool().await;
        assert_eq!(get_last_ledger(&pool).await.unwrap(), 0);
        assert_eq!(get_cursor_string(&pool).await.unwrap(), None);

        save_cursor(&pool, 4242, Some("0001-0002")).await.unwrap();
        assert_eq!(get_last_ledger(&pool).await.unwrap(), 4242);
        assert_eq!(
            get_cursor_string(&pool).await.unwrap().as_deref(),
            Some("0001-0002")
        );
    }
}
