//! Database layer — migrations, queries, and cursor management.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

use crate::errors::Result;
use crate::events::{CampaignRecord, CrowdfundEvent, EventRecord};

/// Establish a SQLite connection pool and run pending migrations.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    // Make sure the file is created if it doesn't exist yet.
    let url = if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else {
        format!("sqlite:{database_url}")
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database migrations applied successfully");
    Ok(pool)
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
/// `(ledger, tx_hash, event_type, campaign_id, actor)` tuple are silently
/// ignored to make the indexer idempotent.
pub async fn insert_events(pool: &SqlitePool, events: &[CrowdfundEvent]) -> Result<usize> {
    let mut count = 0usize;
    for ev in events {
        let rows_affected = sqlx::query(
            r#"
            INSERT OR IGNORE INTO events
                (event_type, campaign_id, actor, amount, reward, ledger, timestamp, contract_id, tx_hash)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(&ev.event_type)
        .bind(&ev.campaign_id)
        .bind(&ev.actor)
        .bind(&ev.amount)
        .bind(&ev.reward)
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
// Campaign cache writes
// ─────────────────────────────────────────────────────────

/// Cache a campaign from a `created` event. The on-chain record keeps only
/// the title fingerprint; this row holds the human-readable text.
pub async fn upsert_campaign(pool: &SqlitePool, ev: &CrowdfundEvent) -> Result<()> {
    let Some(campaign_id) = &ev.campaign_id else {
        return Ok(());
    };
    sqlx::query(
        r#"
        INSERT INTO campaigns (campaign_id, creator, title, goal, deadline, first_ledger)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT (campaign_id) DO UPDATE SET
            creator  = COALESCE(excluded.creator, campaigns.creator),
            title    = COALESCE(excluded.title, campaigns.title),
            goal     = COALESCE(excluded.goal, campaigns.goal),
            deadline = COALESCE(excluded.deadline, campaigns.deadline)
        "#,
    )
    .bind(campaign_id)
    .bind(&ev.actor)
    .bind(&ev.title)
    .bind(&ev.goal)
    .bind(ev.deadline)
    .bind(ev.ledger)
    .execute(pool)
    .await?;
    Ok(())
}

/// Record the finalize outcome for a cached campaign.
pub async fn set_campaign_outcome(
    pool: &SqlitePool,
    campaign_id: &str,
    successful: bool,
) -> Result<()> {
    sqlx::query("UPDATE campaigns SET successful = ?2 WHERE campaign_id = ?1")
        .bind(campaign_id)
        .bind(successful)
        .execute(pool)
        .await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Reads
// ─────────────────────────────────────────────────────────

/// Fetch all events for a given campaign, ordered by ledger ascending.
pub async fn get_events_for_campaign(
    pool: &SqlitePool,
    campaign_id: &str,
) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_type, campaign_id, actor, amount, reward, ledger,
               timestamp, contract_id, tx_hash, created_at
        FROM   events
        WHERE  campaign_id = ?1
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .bind(campaign_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch all events, ordered by ledger ascending.
pub async fn get_all_events(pool: &SqlitePool) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_type, campaign_id, actor, amount, reward, ledger,
               timestamp, contract_id, tx_hash, created_at
        FROM   events
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch all cached campaigns, ordered by campaign id.
pub async fn get_campaigns(pool: &SqlitePool) -> Result<Vec<CampaignRecord>> {
    let rows = sqlx::query_as::<_, CampaignRecord>(
        r#"
        SELECT campaign_id, creator, title, goal, deadline, successful, first_ledger
        FROM   campaigns
        ORDER  BY CAST(campaign_id AS INTEGER) ASC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch one cached campaign by id.
pub async fn get_campaign(pool: &SqlitePool, campaign_id: &str) -> Result<Option<CampaignRecord>> {
    let row = sqlx::query_as::<_, CampaignRecord>(
        r#"
        SELECT campaign_id, creator, title, goal, deadline, successful, first_ledger
        FROM   campaigns
        WHERE  campaign_id = ?1
        "#,
    )
    .bind(campaign_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
