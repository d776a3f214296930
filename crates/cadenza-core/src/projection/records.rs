//! Output records sent to API clients.
//!
//! Field names are part of the wire contract; do not rename them without
//! versioning the API.

use serde::Serialize;

use crate::domain::{ArtistId, PlaylistStatus, ProfileId, UserId};

/// Public view of an account. There is no password field on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
  pub id: UserId,
  pub username: String,
  pub email: String,
}

/// Every stored profile field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
  pub id: ProfileId,
  pub user: UserId,
  pub bio: Option<String>,
  pub avatar_url: Option<String>,
}

/// Every stored artist field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistRecord {
  pub id: ArtistId,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongRecord {
  pub name: String,
  pub artists: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistRecord {
  pub name: String,
  #[serde(serialize_with = "serialize_status")]
  pub status: PlaylistStatus,
  pub songs: Vec<String>,
}

/// Shared by played songs and user played songs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedSongRecord {
  pub song_name: String,
  pub artist_name: Vec<String>,
}

/// Shared by played playlists and user played playlists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedPlaylistRecord {
  pub playlist_name: String,
  pub songs: Vec<PlaylistSongEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSongEntry {
  pub song_name: String,
  pub artist_names: Vec<String>,
}

fn serialize_status<S: serde::Serializer>(status: &PlaylistStatus, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(status.label())
}
