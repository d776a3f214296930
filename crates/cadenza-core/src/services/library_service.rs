use crate::domain::{PlaylistId, SongId, UserId};
use crate::errors::CoreError;
use crate::ports::LibraryRepository;
use crate::projection::{
  ArtistRecord, PlayedPlaylistRecord, PlayedSongRecord, PlaylistRecord, ReadModelProjector, SongRecord,
};

/// Fachada de lectura que usa la capa API: consulta el repositorio y
/// devuelve registros ya proyectados.
pub struct LibraryService<R>
where
  R: LibraryRepository,
{
  repo: R,
}

impl<R> LibraryService<R>
where
  R: LibraryRepository,
{
  pub fn new(repo: R) -> Self {
    Self { repo }
  }

  pub fn repository(&self) -> &R {
    &self.repo
  }

  fn projector(&self) -> ReadModelProjector<'_, R> {
    ReadModelProjector::new(&self.repo)
  }

  // -------- QUERY (read) --------

  pub fn artists(&self) -> Result<Vec<ArtistRecord>, CoreError> {
    let projector = self.projector();
    Ok(self.repo.list_artists()?.iter().map(|a| projector.project_artist(a)).collect())
  }

  pub fn songs(&self) -> Result<Vec<SongRecord>, CoreError> {
    let projector = self.projector();
    self.repo.list_songs()?.iter().map(|s| projector.project_song(s)).collect()
  }

  pub fn playlists(&self) -> Result<Vec<PlaylistRecord>, CoreError> {
    let projector = self.projector();
    self.repo.list_playlists()?.iter().map(|p| projector.project_playlist(p)).collect()
  }

  pub fn song(&self, id: SongId) -> Result<Option<SongRecord>, CoreError> {
    self.repo.find_song(id)?.map(|s| self.projector().project_song(&s)).transpose()
  }

  pub fn playlist(&self, id: PlaylistId) -> Result<Option<PlaylistRecord>, CoreError> {
    self.repo.find_playlist(id)?.map(|p| self.projector().project_playlist(&p)).transpose()
  }

  /// Canciones que escuchó el usuario, la más reciente primero.
  pub fn user_song_history(&self, user: UserId) -> Result<Vec<PlayedSongRecord>, CoreError> {
    let projector = self.projector();
    self.repo.list_user_played_songs(user)?.iter().map(|p| projector.project_user_played_song(p)).collect()
  }

  /// Playlists que escuchó el usuario, la más reciente primero.
  pub fn user_playlist_history(&self, user: UserId) -> Result<Vec<PlayedPlaylistRecord>, CoreError> {
    let projector = self.projector();
    self.repo.list_user_played_playlists(user)?.iter().map(|p| projector.project_user_played_playlist(p)).collect()
  }
}
