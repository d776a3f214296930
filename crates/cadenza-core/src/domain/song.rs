use crate::domain::ids::{ArtistId, SongId};
use serde::{Deserialize, Serialize};

/// La Canción (Song): la obra musical tal como la ve el reproductor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
  /// Identificador único de la canción dentro del sistema.
  pub id: SongId,
  /// El título de la canción.
  pub name: String,
  /// El/los intérprete(s) principal(es), en orden de crédito.
  pub main_artist_ids: Vec<ArtistId>,
  /// El/los artista(s) colaborador(es), en orden de crédito.
  ///
  /// Un mismo artista puede figurar aquí y en `main_artist_ids`.
  pub collaborator_ids: Vec<ArtistId>,
}

impl Song {
  pub fn new(name: impl Into<String>) -> Self {
    Self { id: SongId::new(), name: name.into(), main_artist_ids: vec![], collaborator_ids: vec![] }
  }

  pub fn with_main_artists(mut self, ids: impl IntoIterator<Item = ArtistId>) -> Self {
    self.main_artist_ids.extend(ids);
    self
  }

  pub fn with_collaborators(mut self, ids: impl IntoIterator<Item = ArtistId>) -> Self {
    self.collaborator_ids.extend(ids);
    self
  }
}
