/*
 * Responsibility
 * - GraphQL object types (Event / Album / Track)
 * - repo row → GraphQL 型への変換 (field 名は camelCase: ticketLink, releaseDate, trackNumber)
 */
use async_graphql::{ID, SimpleObject};
use chrono::{DateTime, Utc};

use crate::repos::{
    album_repo::{AlbumRow, TrackRow},
    event_repo::EventRow,
};

#[derive(Debug, Clone, SimpleObject)]
pub struct Event {
    pub id: ID,
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
    pub ticket_link: Option<String>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Track {
    pub track_number: Option<i32>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct Album {
    pub id: ID,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub genre: Option<String>,
    pub tracklist: Vec<Track>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: ID(row.id.to_string()),
            title: row.title,
            date: row.date,
            city: row.city,
            state: row.state,
            venue: row.venue,
            description: row.description,
            ticket_link: row.ticket_link,
        }
    }
}

impl From<TrackRow> for Track {
    fn from(row: TrackRow) -> Self {
        Self {
            track_number: row.track_number,
            title: row.title,
        }
    }
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Self {
            id: ID(row.id.to_string()),
            title: row.title,
            artist: row.artist,
            release_date: row.release_date,
            genre: row.genre,
            tracklist: row.tracklist.0.into_iter().map(Track::from).collect(),
        }
    }
}
