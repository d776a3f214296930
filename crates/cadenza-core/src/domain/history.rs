//! Historial de reproducción.
//!
//! Hay dos niveles: la reproducción en sí (`PlayedSong`, `PlayedPlaylist`) y
//! su atribución a un usuario (`UserPlayedSong`, `UserPlayedPlaylist`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ids::{
  PlayedPlaylistId, PlayedSongId, PlaylistId, SongId, UserId, UserPlayedPlaylistId, UserPlayedSongId,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedSong {
  pub id: PlayedSongId,
  pub song: SongId,
  pub played_at: DateTime<Utc>,
}

impl PlayedSong {
  pub fn now(song: SongId) -> Self {
    Self { id: PlayedSongId::new(), song, played_at: Utc::now() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPlayedSong {
  pub id: UserPlayedSongId,
  pub user: UserId,
  pub played_song: PlayedSongId,
}

impl UserPlayedSong {
  pub fn new(user: UserId, played_song: PlayedSongId) -> Self {
    Self { id: UserPlayedSongId::new(), user, played_song }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedPlaylist {
  pub id: PlayedPlaylistId,
  pub playlist: PlaylistId,
  pub played_at: DateTime<Utc>,
}

impl PlayedPlaylist {
  pub fn now(playlist: PlaylistId) -> Self {
    Self { id: PlayedPlaylistId::new(), playlist, played_at: Utc::now() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPlayedPlaylist {
  pub id: UserPlayedPlaylistId,
  pub user: UserId,
  pub played_playlist: PlayedPlaylistId,
}

impl UserPlayedPlaylist {
  pub fn new(user: UserId, played_playlist: PlayedPlaylistId) -> Self {
    Self { id: UserPlayedPlaylistId::new(), user, played_playlist }
  }
}
