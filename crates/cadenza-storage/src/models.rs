use crate::schema::{
  artists, played_playlists, played_songs, playlist_songs, playlists, profiles, song_artists, songs,
  user_played_playlists, user_played_songs, users,
};

use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserRow {
  pub id: String,
  pub username: String,
  pub email: String,
  pub password: String,
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct ProfileRow {
  pub id: String,
  pub user_id: String,
  pub bio: Option<String>,
  pub avatar_url: Option<String>,
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = artists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArtistRow {
  pub id: String,
  pub name: String,
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = songs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SongRow {
  pub id: String,
  pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = song_artists)]
pub struct NewSongArtistRow {
  pub id: String,
  pub song_id: String,
  pub artist_id: String,
  pub role: String,
  pub position: i32,
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = playlists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlaylistRow {
  pub id: String,
  pub name: String,
  pub status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = playlist_songs)]
pub struct NewPlaylistSongRow {
  pub id: String,
  pub playlist_id: String,
  pub song_id: String,
  pub position: i32,
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = played_songs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayedSongRow {
  pub id: String,
  pub song_id: String,
  pub played_at: String,
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = user_played_songs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserPlayedSongRow {
  pub id: String,
  pub user_id: String,
  pub played_song_id: String,
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = played_playlists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlayedPlaylistRow {
  pub id: String,
  pub playlist_id: String,
  pub played_at: String,
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = user_played_playlists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserPlayedPlaylistRow {
  pub id: String,
  pub user_id: String,
  pub played_playlist_id: String,
}
