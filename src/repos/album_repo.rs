/*
 * Responsibility
 * - albums テーブルの読み取り (read-only)
 * - tracklist は JSONB 列: [{"trackNumber": 1, "title": "..."}]
 */
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRow {
    pub track_number: Option<i32>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AlbumRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub genre: Option<String>,
    pub tracklist: Json<Vec<TrackRow>>,
}

pub async fn list(db: &PgPool) -> Result<Vec<AlbumRow>, RepoError> {
    let rows = sqlx::query_as::<_, AlbumRow>(
        r#"
        SELECT id, title, artist, release_date, genre, tracklist
        FROM albums
        ORDER BY release_date DESC NULLS LAST, id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}
