use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{
  Artist, CreditedArtist, PlayedPlaylist, PlayedSong, Playlist, Profile, Song, SongId, User, UserPlayedPlaylist,
  UserPlayedSong,
};
use crate::errors::CoreError;
use crate::ports::LibraryRepository;

use super::records::{
  ArtistRecord, PlayedPlaylistRecord, PlayedSongRecord, PlaylistRecord, PlaylistSongEntry, ProfileRecord, SongRecord,
  UserRecord,
};

/// Builds the denormalized records the API layer serializes.
///
/// Borrows the repository for the duration of a request. Nothing here writes;
/// projecting the same unchanged entity twice yields the same record.
pub struct ReadModelProjector<'a, R: ?Sized> {
  repo: &'a R,
}

impl<'a, R> ReadModelProjector<'a, R>
where
  R: LibraryRepository + ?Sized,
{
  pub fn new(repo: &'a R) -> Self {
    Self { repo }
  }

  // -------- entity-only projections --------

  pub fn project_user(&self, user: &User) -> UserRecord {
    UserRecord { id: user.id, username: user.username.clone(), email: user.email.clone() }
  }

  pub fn project_profile(&self, profile: &Profile) -> ProfileRecord {
    ProfileRecord {
      id: profile.id,
      user: profile.user,
      bio: profile.bio.clone(),
      avatar_url: profile.avatar_url.clone(),
    }
  }

  pub fn project_artist(&self, artist: &Artist) -> ArtistRecord {
    ArtistRecord { id: artist.id, name: artist.name.clone() }
  }

  // -------- catalogue --------

  pub fn project_song(&self, song: &Song) -> Result<SongRecord, CoreError> {
    Ok(SongRecord { name: song.name.clone(), artists: self.song_artist_names(song.id)? })
  }

  pub fn project_playlist(&self, playlist: &Playlist) -> Result<PlaylistRecord, CoreError> {
    let songs = self.repo.playlist_songs(playlist.id)?;

    Ok(PlaylistRecord {
      name: playlist.name.clone(),
      status: playlist.status,
      songs: songs.into_iter().map(|s| s.name).collect(),
    })
  }

  // -------- play history --------

  pub fn project_played_song(&self, played: &PlayedSong) -> Result<PlayedSongRecord, CoreError> {
    let song = self.repo.find_song(played.song)?.ok_or_else(|| dangling("song", played.song))?;

    Ok(PlayedSongRecord { artist_name: self.song_artist_names(song.id)?, song_name: song.name })
  }

  pub fn project_user_played_song(&self, played: &UserPlayedSong) -> Result<PlayedSongRecord, CoreError> {
    let inner =
      self.repo.find_played_song(played.played_song)?.ok_or_else(|| dangling("played song", played.played_song))?;

    self.project_played_song(&inner)
  }

  pub fn project_played_playlist(&self, played: &PlayedPlaylist) -> Result<PlayedPlaylistRecord, CoreError> {
    let playlist =
      self.repo.find_playlist(played.playlist)?.ok_or_else(|| dangling("playlist", played.playlist))?;

    let songs = self
      .repo
      .playlist_songs(playlist.id)?
      .into_iter()
      .map(|song| Ok(PlaylistSongEntry { artist_names: self.song_artist_names(song.id)?, song_name: song.name }))
      .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(PlayedPlaylistRecord { playlist_name: playlist.name, songs })
  }

  pub fn project_user_played_playlist(&self, played: &UserPlayedPlaylist) -> Result<PlayedPlaylistRecord, CoreError> {
    let inner = self
      .repo
      .find_played_playlist(played.played_playlist)?
      .ok_or_else(|| dangling("played playlist", played.played_playlist))?;

    self.project_played_playlist(&inner)
  }

  /// Names of every artist credited on the song, main or collaborator, each
  /// listed once.
  pub fn song_artist_names(&self, song: SongId) -> Result<Vec<String>, CoreError> {
    let credits = self.repo.song_artists(song)?;
    let names = distinct_artist_names(credits);
    debug!(%song, artists = names.len(), "resolved song artists");
    Ok(names)
  }
}

/// Orders credits main-first then by credit position and keeps the first
/// occurrence of every artist.
pub fn distinct_artist_names(mut credits: Vec<CreditedArtist>) -> Vec<String> {
  credits.sort_by_key(|c| (c.role, c.position));

  let mut seen = HashSet::with_capacity(credits.len());
  credits.into_iter().filter(|c| seen.insert(c.artist.id)).map(|c| c.artist.name).collect()
}

fn dangling(entity: &'static str, id: impl ToString) -> CoreError {
  let id = id.to_string();
  warn!(entity, %id, "play history points at a missing record");
  CoreError::dangling(entity, id)
}
