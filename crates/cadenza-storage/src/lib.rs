pub mod config;
mod mapping;
pub mod models;
pub mod schema;

use std::cell::{RefCell, RefMut};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use cadenza_core::domain::{
  Artist, ArtistId, ArtistRole, CreditedArtist, PlayedPlaylist, PlayedPlaylistId, PlayedSong, PlayedSongId, Playlist,
  PlaylistId, PlaylistStatus, Profile, ProfileId, Song, SongId, User, UserId, UserPlayedPlaylist, UserPlayedPlaylistId,
  UserPlayedSong, UserPlayedSongId,
};
use cadenza_core::errors::CoreError;
use cadenza_core::ports::LibraryRepository;

use crate::config::StorageConfig;
use crate::mapping::*;
use crate::models::{
  ArtistRow, NewPlaylistSongRow, NewSongArtistRow, PlayedPlaylistRow, PlayedSongRow, PlaylistRow, ProfileRow, SongRow,
  UserPlayedPlaylistRow, UserPlayedSongRow, UserRow,
};
use crate::schema::{
  artists, played_playlists, played_songs, playlist_songs, playlists, profiles, song_artists, songs,
  user_played_playlists, user_played_songs, users,
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn db_err(e: diesel::result::Error) -> CoreError {
  CoreError::Repository(e.to_string())
}

fn parse_role(raw: &str) -> Result<ArtistRole, CoreError> {
  raw.parse().map_err(|e| CoreError::Repository(format!("{e} in DB")))
}

/// SQLite-backed [`LibraryRepository`].
///
/// Holds a single connection, so it is `!Sync`: open one per thread or
/// request.
pub struct SqliteLibraryRepository {
  conn: RefCell<SqliteConnection>,
}

impl SqliteLibraryRepository {
  pub fn new(database_url: &str) -> Result<Self, CoreError> {
    Self::open(database_url, None)
  }

  pub fn open_in_memory() -> Result<Self, CoreError> {
    Self::open(":memory:", None)
  }

  pub fn new_from_config() -> Result<Self, CoreError> {
    let cfg = StorageConfig::load().map_err(|e| CoreError::Repository(e.to_string()))?;
    Self::from_config(&cfg)
  }

  pub fn from_config(cfg: &StorageConfig) -> Result<Self, CoreError> {
    let url = cfg.db_path.to_string_lossy();
    Self::open(&url, cfg.journal_mode.as_deref())
  }

  /// Connects, enables foreign keys, applies the journal mode and runs any
  /// pending migrations.
  pub fn open(database_url: &str, journal_mode: Option<&str>) -> Result<Self, CoreError> {
    let mut conn =
      SqliteConnection::establish(database_url).map_err(|e| CoreError::Repository(e.to_string()))?;

    conn.batch_execute("PRAGMA foreign_keys = ON;").map_err(db_err)?;

    if let Some(mode) = journal_mode {
      if mode.is_empty() || !mode.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::Repository(format!("invalid journal mode {mode:?}")));
      }
      conn.batch_execute(&format!("PRAGMA journal_mode = {mode};")).map_err(db_err)?;
    }

    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| CoreError::Repository(e.to_string()))?;
    if !applied.is_empty() {
      info!(database_url, count = applied.len(), "applied storage migrations");
    }

    debug!(database_url, "opened library database");
    Ok(Self { conn: RefCell::new(conn) })
  }

  fn conn(&self) -> RefMut<'_, SqliteConnection> {
    self.conn.borrow_mut()
  }
}

/// Fills the credit lists of a song row.
fn hydrate_song(conn: &mut SqliteConnection, row: SongRow) -> Result<Song, CoreError> {
  let credits = song_artists::table
    .filter(song_artists::song_id.eq(&row.id))
    .order((song_artists::role.asc(), song_artists::position.asc()))
    .select((song_artists::artist_id, song_artists::role))
    .load::<(String, String)>(conn)
    .map_err(db_err)?;

  let mut song = Song { id: parse_id(&row.id)?, name: row.name, main_artist_ids: vec![], collaborator_ids: vec![] };
  for (artist_id, role) in credits {
    let artist_id: ArtistId = parse_id(&artist_id)?;
    match parse_role(&role)? {
      ArtistRole::Main => song.main_artist_ids.push(artist_id),
      ArtistRole::Collaborator => song.collaborator_ids.push(artist_id),
    }
  }
  Ok(song)
}

/// Fills the membership of a playlist row.
fn hydrate_playlist(conn: &mut SqliteConnection, row: PlaylistRow) -> Result<Playlist, CoreError> {
  let song_ids = playlist_songs::table
    .filter(playlist_songs::playlist_id.eq(&row.id))
    .order(playlist_songs::position.asc())
    .select(playlist_songs::song_id)
    .load::<String>(conn)
    .map_err(db_err)?;

  Ok(Playlist {
    id: parse_id(&row.id)?,
    name: row.name,
    status: PlaylistStatus::from_code(&row.status),
    song_ids: song_ids.iter().map(|id| parse_id(id)).collect::<Result<_, _>>()?,
  })
}

fn credit_rows(song: &Song) -> Vec<NewSongArtistRow> {
  let song_id = song.id.to_string();
  let credits = song
    .main_artist_ids
    .iter()
    .enumerate()
    .map(|(i, id)| (ArtistRole::Main, i, id))
    .chain(song.collaborator_ids.iter().enumerate().map(|(i, id)| (ArtistRole::Collaborator, i, id)));

  credits
    .map(|(role, position, artist_id)| NewSongArtistRow {
      id: uuid::Uuid::new_v4().to_string(),
      song_id: song_id.clone(),
      artist_id: artist_id.to_string(),
      role: role.code().to_string(),
      position: position as i32,
    })
    .collect()
}

impl LibraryRepository for SqliteLibraryRepository {
  fn save_user(&self, user: &User) -> Result<(), CoreError> {
    let row = user_to_row(user);
    diesel::insert_into(users::table)
      .values(&row)
      .on_conflict(users::id)
      .do_update()
      .set(&row)
      .execute(&mut *self.conn())
      .map_err(db_err)?;
    Ok(())
  }

  fn save_profile(&self, profile: &Profile) -> Result<(), CoreError> {
    let row = profile_to_row(profile);
    diesel::insert_into(profiles::table)
      .values(&row)
      .on_conflict(profiles::id)
      .do_update()
      .set(&row)
      .execute(&mut *self.conn())
      .map_err(db_err)?;
    Ok(())
  }

  fn save_artist(&self, artist: &Artist) -> Result<(), CoreError> {
    let row = artist_to_row(artist);
    diesel::insert_into(artists::table)
      .values(&row)
      .on_conflict(artists::id)
      .do_update()
      .set(&row)
      .execute(&mut *self.conn())
      .map_err(db_err)?;
    Ok(())
  }

  fn save_song(&self, song: &Song) -> Result<(), CoreError> {
    let row = SongRow { id: song.id.to_string(), name: song.name.clone() };
    let credits = credit_rows(song);
    let mut conn = self.conn();

    conn
      .transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::insert_into(songs::table).values(&row).on_conflict(songs::id).do_update().set(&row).execute(conn)?;
        diesel::delete(song_artists::table.filter(song_artists::song_id.eq(&row.id))).execute(conn)?;
        // A repeated id inside one role list collapses into a single credit.
        for credit in &credits {
          diesel::insert_or_ignore_into(song_artists::table).values(credit).execute(conn)?;
        }
        Ok(())
      })
      .map_err(db_err)?;

    debug!(song = %song.id, credits = credits.len(), "saved song");
    Ok(())
  }

  fn save_playlist(&self, playlist: &Playlist) -> Result<(), CoreError> {
    let row = playlist_to_row(playlist);
    let members: Vec<NewPlaylistSongRow> = playlist
      .song_ids
      .iter()
      .enumerate()
      .map(|(position, song_id)| NewPlaylistSongRow {
        id: uuid::Uuid::new_v4().to_string(),
        playlist_id: row.id.clone(),
        song_id: song_id.to_string(),
        position: position as i32,
      })
      .collect();
    let mut conn = self.conn();

    conn
      .transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::insert_into(playlists::table)
          .values(&row)
          .on_conflict(playlists::id)
          .do_update()
          .set(&row)
          .execute(conn)?;
        diesel::delete(playlist_songs::table.filter(playlist_songs::playlist_id.eq(&row.id))).execute(conn)?;
        for member in &members {
          diesel::insert_into(playlist_songs::table).values(member).execute(conn)?;
        }
        Ok(())
      })
      .map_err(db_err)?;

    debug!(playlist = %playlist.id, songs = members.len(), "saved playlist");
    Ok(())
  }

  fn save_played_song(&self, played: &PlayedSong) -> Result<(), CoreError> {
    let row = played_song_to_row(played);
    diesel::insert_into(played_songs::table)
      .values(&row)
      .on_conflict(played_songs::id)
      .do_update()
      .set(&row)
      .execute(&mut *self.conn())
      .map_err(db_err)?;
    Ok(())
  }

  fn save_user_played_song(&self, played: &UserPlayedSong) -> Result<(), CoreError> {
    let row = user_played_song_to_row(played);
    diesel::insert_into(user_played_songs::table)
      .values(&row)
      .on_conflict(user_played_songs::id)
      .do_update()
      .set(&row)
      .execute(&mut *self.conn())
      .map_err(db_err)?;
    Ok(())
  }

  fn save_played_playlist(&self, played: &PlayedPlaylist) -> Result<(), CoreError> {
    let row = played_playlist_to_row(played);
    diesel::insert_into(played_playlists::table)
      .values(&row)
      .on_conflict(played_playlists::id)
      .do_update()
      .set(&row)
      .execute(&mut *self.conn())
      .map_err(db_err)?;
    Ok(())
  }

  fn save_user_played_playlist(&self, played: &UserPlayedPlaylist) -> Result<(), CoreError> {
    let row = user_played_playlist_to_row(played);
    diesel::insert_into(user_played_playlists::table)
      .values(&row)
      .on_conflict(user_played_playlists::id)
      .do_update()
      .set(&row)
      .execute(&mut *self.conn())
      .map_err(db_err)?;
    Ok(())
  }

  fn find_user(&self, id: UserId) -> Result<Option<User>, CoreError> {
    let row = users::table
      .find(id.to_string())
      .select(UserRow::as_select())
      .first(&mut *self.conn())
      .optional()
      .map_err(db_err)?;
    row.map(row_to_user).transpose()
  }

  fn find_user_by_username(&self, username: &str) -> Result<Option<User>, CoreError> {
    let row = users::table
      .filter(users::username.eq(username))
      .select(UserRow::as_select())
      .first(&mut *self.conn())
      .optional()
      .map_err(db_err)?;
    row.map(row_to_user).transpose()
  }

  fn find_profile(&self, id: ProfileId) -> Result<Option<Profile>, CoreError> {
    let row = profiles::table
      .find(id.to_string())
      .select(ProfileRow::as_select())
      .first(&mut *self.conn())
      .optional()
      .map_err(db_err)?;
    row.map(row_to_profile).transpose()
  }

  fn find_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError> {
    let row = artists::table
      .find(id.to_string())
      .select(ArtistRow::as_select())
      .first(&mut *self.conn())
      .optional()
      .map_err(db_err)?;
    row.map(row_to_artist).transpose()
  }

  fn find_song(&self, id: SongId) -> Result<Option<Song>, CoreError> {
    let mut conn = self.conn();
    let row = songs::table
      .find(id.to_string())
      .select(SongRow::as_select())
      .first(&mut *conn)
      .optional()
      .map_err(db_err)?;
    row.map(|row| hydrate_song(&mut conn, row)).transpose()
  }

  fn find_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>, CoreError> {
    let mut conn = self.conn();
    let row = playlists::table
      .find(id.to_string())
      .select(PlaylistRow::as_select())
      .first(&mut *conn)
      .optional()
      .map_err(db_err)?;
    row.map(|row| hydrate_playlist(&mut conn, row)).transpose()
  }

  fn find_played_song(&self, id: PlayedSongId) -> Result<Option<PlayedSong>, CoreError> {
    let row = played_songs::table
      .find(id.to_string())
      .select(PlayedSongRow::as_select())
      .first(&mut *self.conn())
      .optional()
      .map_err(db_err)?;
    row.map(row_to_played_song).transpose()
  }

  fn find_user_played_song(&self, id: UserPlayedSongId) -> Result<Option<UserPlayedSong>, CoreError> {
    let row = user_played_songs::table
      .find(id.to_string())
      .select(UserPlayedSongRow::as_select())
      .first(&mut *self.conn())
      .optional()
      .map_err(db_err)?;
    row.map(row_to_user_played_song).transpose()
  }

  fn find_played_playlist(&self, id: PlayedPlaylistId) -> Result<Option<PlayedPlaylist>, CoreError> {
    let row = played_playlists::table
      .find(id.to_string())
      .select(PlayedPlaylistRow::as_select())
      .first(&mut *self.conn())
      .optional()
      .map_err(db_err)?;
    row.map(row_to_played_playlist).transpose()
  }

  fn find_user_played_playlist(&self, id: UserPlayedPlaylistId) -> Result<Option<UserPlayedPlaylist>, CoreError> {
    let row = user_played_playlists::table
      .find(id.to_string())
      .select(UserPlayedPlaylistRow::as_select())
      .first(&mut *self.conn())
      .optional()
      .map_err(db_err)?;
    row.map(row_to_user_played_playlist).transpose()
  }

  fn song_artists(&self, song: SongId) -> Result<Vec<CreditedArtist>, CoreError> {
    let rows = song_artists::table
      .inner_join(artists::table)
      .filter(song_artists::song_id.eq(song.to_string()))
      .select((song_artists::role, song_artists::position, ArtistRow::as_select()))
      .load::<(String, i32, ArtistRow)>(&mut *self.conn())
      .map_err(db_err)?;

    rows
      .into_iter()
      .map(|(role, position, artist)| {
        Ok(CreditedArtist { artist: row_to_artist(artist)?, role: parse_role(&role)?, position: position as u32 })
      })
      .collect()
  }

  fn playlist_songs(&self, playlist: PlaylistId) -> Result<Vec<Song>, CoreError> {
    let mut conn = self.conn();
    let rows = playlist_songs::table
      .inner_join(songs::table)
      .filter(playlist_songs::playlist_id.eq(playlist.to_string()))
      .order(playlist_songs::position.asc())
      .select(SongRow::as_select())
      .load::<SongRow>(&mut *conn)
      .map_err(db_err)?;

    rows.into_iter().map(|row| hydrate_song(&mut conn, row)).collect()
  }

  fn list_artists(&self) -> Result<Vec<Artist>, CoreError> {
    let rows = artists::table
      .order(artists::name.asc())
      .select(ArtistRow::as_select())
      .load::<ArtistRow>(&mut *self.conn())
      .map_err(db_err)?;
    rows.into_iter().map(row_to_artist).collect()
  }

  fn list_songs(&self) -> Result<Vec<Song>, CoreError> {
    let mut conn = self.conn();
    let rows =
      songs::table.order(songs::name.asc()).select(SongRow::as_select()).load::<SongRow>(&mut *conn).map_err(db_err)?;
    rows.into_iter().map(|row| hydrate_song(&mut conn, row)).collect()
  }

  fn list_playlists(&self) -> Result<Vec<Playlist>, CoreError> {
    let mut conn = self.conn();
    let rows = playlists::table
      .order(playlists::name.asc())
      .select(PlaylistRow::as_select())
      .load::<PlaylistRow>(&mut *conn)
      .map_err(db_err)?;
    rows.into_iter().map(|row| hydrate_playlist(&mut conn, row)).collect()
  }

  fn list_user_played_songs(&self, user: UserId) -> Result<Vec<UserPlayedSong>, CoreError> {
    let rows = user_played_songs::table
      .inner_join(played_songs::table)
      .filter(user_played_songs::user_id.eq(user.to_string()))
      .order(played_songs::played_at.desc())
      .select(UserPlayedSongRow::as_select())
      .load::<UserPlayedSongRow>(&mut *self.conn())
      .map_err(db_err)?;
    rows.into_iter().map(row_to_user_played_song).collect()
  }

  fn list_user_played_playlists(&self, user: UserId) -> Result<Vec<UserPlayedPlaylist>, CoreError> {
    let rows = user_played_playlists::table
      .inner_join(played_playlists::table)
      .filter(user_played_playlists::user_id.eq(user.to_string()))
      .order(played_playlists::played_at.desc())
      .select(UserPlayedPlaylistRow::as_select())
      .load::<UserPlayedPlaylistRow>(&mut *self.conn())
      .map_err(db_err)?;
    rows.into_iter().map(row_to_user_played_playlist).collect()
  }
}
