/*
 * Responsibility
 * - events テーブルの読み取り (read-only)
 * - 日付の昇順で返す (日付未定は最後)
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
    pub ticket_link: Option<String>,
}

pub async fn list(db: &PgPool) -> Result<Vec<EventRow>, RepoError> {
    let rows = sqlx::query_as::<_, EventRow>(
        r#"
        SELECT id, title, date, city, state, venue, description, ticket_link
        FROM events
        ORDER BY date ASC NULLS LAST, id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}
