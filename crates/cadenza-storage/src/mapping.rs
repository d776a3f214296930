//! Row <-> domain conversions.
//!
//! Ids are stored as UUID text and timestamps as RFC 3339 with a fixed
//! microsecond precision, so `ORDER BY played_at` sorts chronologically.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};

use cadenza_core::domain::{
  Artist, PlayedPlaylist, PlayedSong, Playlist, Profile, User, UserPlayedPlaylist, UserPlayedSong,
};
use cadenza_core::errors::CoreError;

use crate::models::{
  ArtistRow, PlayedPlaylistRow, PlayedSongRow, PlaylistRow, ProfileRow, UserPlayedPlaylistRow, UserPlayedSongRow,
  UserRow,
};

pub(crate) fn parse_id<T>(raw: &str) -> Result<T, CoreError>
where
  T: FromStr<Err = uuid::Error>,
{
  raw.parse().map_err(|e| CoreError::Repository(format!("invalid uuid {raw:?} in DB: {e}")))
}

pub(crate) fn format_timestamp(at: &DateTime<Utc>) -> String {
  at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, CoreError> {
  DateTime::parse_from_rfc3339(raw)
    .map(|t| t.with_timezone(&Utc))
    .map_err(|e| CoreError::Repository(format!("invalid timestamp {raw:?} in DB: {e}")))
}

pub(crate) fn user_to_row(user: &User) -> UserRow {
  UserRow {
    id: user.id.to_string(),
    username: user.username.clone(),
    email: user.email.clone(),
    password: user.password.clone(),
  }
}

pub(crate) fn row_to_user(row: UserRow) -> Result<User, CoreError> {
  Ok(User { id: parse_id(&row.id)?, username: row.username, email: row.email, password: row.password })
}

pub(crate) fn profile_to_row(profile: &Profile) -> ProfileRow {
  ProfileRow {
    id: profile.id.to_string(),
    user_id: profile.user.to_string(),
    bio: profile.bio.clone(),
    avatar_url: profile.avatar_url.clone(),
  }
}

pub(crate) fn row_to_profile(row: ProfileRow) -> Result<Profile, CoreError> {
  Ok(Profile { id: parse_id(&row.id)?, user: parse_id(&row.user_id)?, bio: row.bio, avatar_url: row.avatar_url })
}

pub(crate) fn artist_to_row(artist: &Artist) -> ArtistRow {
  ArtistRow { id: artist.id.to_string(), name: artist.name.clone() }
}

pub(crate) fn row_to_artist(row: ArtistRow) -> Result<Artist, CoreError> {
  Ok(Artist { id: parse_id(&row.id)?, name: row.name })
}

pub(crate) fn playlist_to_row(playlist: &Playlist) -> PlaylistRow {
  PlaylistRow { id: playlist.id.to_string(), name: playlist.name.clone(), status: playlist.status.code().to_string() }
}

pub(crate) fn played_song_to_row(played: &PlayedSong) -> PlayedSongRow {
  PlayedSongRow {
    id: played.id.to_string(),
    song_id: played.song.to_string(),
    played_at: format_timestamp(&played.played_at),
  }
}

pub(crate) fn row_to_played_song(row: PlayedSongRow) -> Result<PlayedSong, CoreError> {
  Ok(PlayedSong { id: parse_id(&row.id)?, song: parse_id(&row.song_id)?, played_at: parse_timestamp(&row.played_at)? })
}

pub(crate) fn user_played_song_to_row(played: &UserPlayedSong) -> UserPlayedSongRow {
  UserPlayedSongRow {
    id: played.id.to_string(),
    user_id: played.user.to_string(),
    played_song_id: played.played_song.to_string(),
  }
}

pub(crate) fn row_to_user_played_song(row: UserPlayedSongRow) -> Result<UserPlayedSong, CoreError> {
  Ok(UserPlayedSong {
    id: parse_id(&row.id)?,
    user: parse_id(&row.user_id)?,
    played_song: parse_id(&row.played_song_id)?,
  })
}

pub(crate) fn played_playlist_to_row(played: &PlayedPlaylist) -> PlayedPlaylistRow {
  PlayedPlaylistRow {
    id: played.id.to_string(),
    playlist_id: played.playlist.to_string(),
    played_at: format_timestamp(&played.played_at),
  }
}

pub(crate) fn row_to_played_playlist(row: PlayedPlaylistRow) -> Result<PlayedPlaylist, CoreError> {
  Ok(PlayedPlaylist {
    id: parse_id(&row.id)?,
    playlist: parse_id(&row.playlist_id)?,
    played_at: parse_timestamp(&row.played_at)?,
  })
}

pub(crate) fn user_played_playlist_to_row(played: &UserPlayedPlaylist) -> UserPlayedPlaylistRow {
  UserPlayedPlaylistRow {
    id: played.id.to_string(),
    user_id: played.user.to_string(),
    played_playlist_id: played.played_playlist.to_string(),
  }
}

pub(crate) fn row_to_user_played_playlist(row: UserPlayedPlaylistRow) -> Result<UserPlayedPlaylist, CoreError> {
  Ok(UserPlayedPlaylist {
    id: parse_id(&row.id)?,
    user: parse_id(&row.user_id)?,
    played_playlist: parse_id(&row.played_playlist_id)?,
  })
}
