//! In-memory `LibraryRepository` used by the core's unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::*;
use crate::errors::CoreError;
use crate::ports::LibraryRepository;

#[derive(Default)]
pub struct MemoryLibrary {
  users: RefCell<Vec<User>>,
  profiles: RefCell<HashMap<ProfileId, Profile>>,
  artists: RefCell<Vec<Artist>>,
  songs: RefCell<Vec<Song>>,
  playlists: RefCell<Vec<Playlist>>,
  played_songs: RefCell<HashMap<PlayedSongId, PlayedSong>>,
  user_played_songs: RefCell<Vec<UserPlayedSong>>,
  played_playlists: RefCell<HashMap<PlayedPlaylistId, PlayedPlaylist>>,
  user_played_playlists: RefCell<Vec<UserPlayedPlaylist>>,
}

impl MemoryLibrary {
  pub fn artist(&self, name: &str) -> Artist {
    let artist = Artist::new(name);
    self.save_artist(&artist).unwrap();
    artist
  }

  pub fn song(&self, name: &str, main: &[&Artist], collab: &[&Artist]) -> Song {
    let song = Song::new(name)
      .with_main_artists(main.iter().map(|a| a.id))
      .with_collaborators(collab.iter().map(|a| a.id));
    self.save_song(&song).unwrap();
    song
  }

  pub fn playlist(&self, name: &str, status: PlaylistStatus, songs: &[&Song]) -> Playlist {
    let playlist = Playlist::new(name, status).with_songs(songs.iter().map(|s| s.id));
    self.save_playlist(&playlist).unwrap();
    playlist
  }

  pub fn user_count(&self) -> usize {
    self.users.borrow().len()
  }

  pub fn forget_song(&self, id: SongId) {
    self.songs.borrow_mut().retain(|s| s.id != id);
  }

  pub fn forget_playlist(&self, id: PlaylistId) {
    self.playlists.borrow_mut().retain(|p| p.id != id);
  }
}

fn upsert<T: Clone>(items: &RefCell<Vec<T>>, item: &T, same: impl Fn(&T) -> bool) {
  let mut items = items.borrow_mut();
  match items.iter_mut().find(|i| same(i)) {
    Some(existing) => *existing = item.clone(),
    None => items.push(item.clone()),
  }
}

impl LibraryRepository for MemoryLibrary {
  fn save_user(&self, user: &User) -> Result<(), CoreError> {
    if self.users.borrow().iter().any(|u| u.username == user.username && u.id != user.id) {
      return Err(CoreError::Repository(format!("UNIQUE constraint failed: users.username ({})", user.username)));
    }
    upsert(&self.users, user, |u| u.id == user.id);
    Ok(())
  }

  fn save_profile(&self, profile: &Profile) -> Result<(), CoreError> {
    self.profiles.borrow_mut().insert(profile.id, profile.clone());
    Ok(())
  }

  fn save_artist(&self, artist: &Artist) -> Result<(), CoreError> {
    upsert(&self.artists, artist, |a| a.id == artist.id);
    Ok(())
  }

  fn save_song(&self, song: &Song) -> Result<(), CoreError> {
    upsert(&self.songs, song, |s| s.id == song.id);
    Ok(())
  }

  fn save_playlist(&self, playlist: &Playlist) -> Result<(), CoreError> {
    upsert(&self.playlists, playlist, |p| p.id == playlist.id);
    Ok(())
  }

  fn save_played_song(&self, played: &PlayedSong) -> Result<(), CoreError> {
    self.played_songs.borrow_mut().insert(played.id, played.clone());
    Ok(())
  }

  fn save_user_played_song(&self, played: &UserPlayedSong) -> Result<(), CoreError> {
    upsert(&self.user_played_songs, played, |p| p.id == played.id);
    Ok(())
  }

  fn save_played_playlist(&self, played: &PlayedPlaylist) -> Result<(), CoreError> {
    self.played_playlists.borrow_mut().insert(played.id, played.clone());
    Ok(())
  }

  fn save_user_played_playlist(&self, played: &UserPlayedPlaylist) -> Result<(), CoreError> {
    upsert(&self.user_played_playlists, played, |p| p.id == played.id);
    Ok(())
  }

  fn find_user(&self, id: UserId) -> Result<Option<User>, CoreError> {
    Ok(self.users.borrow().iter().find(|u| u.id == id).cloned())
  }

  fn find_user_by_username(&self, username: &str) -> Result<Option<User>, CoreError> {
    Ok(self.users.borrow().iter().find(|u| u.username == username).cloned())
  }

  fn find_profile(&self, id: ProfileId) -> Result<Option<Profile>, CoreError> {
    Ok(self.profiles.borrow().get(&id).cloned())
  }

  fn find_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError> {
    Ok(self.artists.borrow().iter().find(|a| a.id == id).cloned())
  }

  fn find_song(&self, id: SongId) -> Result<Option<Song>, CoreError> {
    Ok(self.songs.borrow().iter().find(|s| s.id == id).cloned())
  }

  fn find_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>, CoreError> {
    Ok(self.playlists.borrow().iter().find(|p| p.id == id).cloned())
  }

  fn find_played_song(&self, id: PlayedSongId) -> Result<Option<PlayedSong>, CoreError> {
    Ok(self.played_songs.borrow().get(&id).cloned())
  }

  fn find_user_played_song(&self, id: UserPlayedSongId) -> Result<Option<UserPlayedSong>, CoreError> {
    Ok(self.user_played_songs.borrow().iter().find(|p| p.id == id).cloned())
  }

  fn find_played_playlist(&self, id: PlayedPlaylistId) -> Result<Option<PlayedPlaylist>, CoreError> {
    Ok(self.played_playlists.borrow().get(&id).cloned())
  }

  fn find_user_played_playlist(&self, id: UserPlayedPlaylistId) -> Result<Option<UserPlayedPlaylist>, CoreError> {
    Ok(self.user_played_playlists.borrow().iter().find(|p| p.id == id).cloned())
  }

  fn song_artists(&self, song: SongId) -> Result<Vec<CreditedArtist>, CoreError> {
    let Some(song) = self.find_song(song)? else {
      return Ok(vec![]);
    };

    let credits = song
      .main_artist_ids
      .iter()
      .enumerate()
      .map(|(i, id)| (ArtistRole::Main, i, *id))
      .chain(song.collaborator_ids.iter().enumerate().map(|(i, id)| (ArtistRole::Collaborator, i, *id)));

    // Reversed on purpose: callers must not rely on the store's order.
    let mut out = Vec::new();
    for (role, position, id) in credits {
      if let Some(artist) = self.find_artist(id)? {
        out.push(CreditedArtist { artist, role, position: position as u32 });
      }
    }
    out.reverse();
    Ok(out)
  }

  fn playlist_songs(&self, playlist: PlaylistId) -> Result<Vec<Song>, CoreError> {
    let Some(playlist) = self.find_playlist(playlist)? else {
      return Ok(vec![]);
    };

    let mut out = Vec::new();
    for id in playlist.song_ids {
      if let Some(song) = self.find_song(id)? {
        out.push(song);
      }
    }
    Ok(out)
  }

  fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
    Ok(self.artists.borrow().clone())
  }

  fn list_songs(&self) -> Result<Vec<Song>, CoreError> {
    Ok(self.songs.borrow().clone())
  }

  fn list_playlists(&self) -> Result<Vec<Playlist>, CoreError> {
    Ok(self.playlists.borrow().clone())
  }

  fn list_user_played_songs(&self, user: UserId) -> Result<Vec<UserPlayedSong>, CoreError> {
    let played_songs = self.played_songs.borrow();
    let mut out: Vec<_> = self.user_played_songs.borrow().iter().filter(|p| p.user == user).cloned().collect();
    out.sort_by_key(|p| std::cmp::Reverse(played_songs.get(&p.played_song).map(|s| s.played_at)));
    Ok(out)
  }

  fn list_user_played_playlists(&self, user: UserId) -> Result<Vec<UserPlayedPlaylist>, CoreError> {
    let played_playlists = self.played_playlists.borrow();
    let mut out: Vec<_> = self.user_played_playlists.borrow().iter().filter(|p| p.user == user).cloned().collect();
    out.sort_by_key(|p| std::cmp::Reverse(played_playlists.get(&p.played_playlist).map(|s| s.played_at)));
    Ok(out)
  }
}
