use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ids::{PlaylistId, SongId};

/// Estado de publicación de una playlist.
///
/// En la base de datos se guarda como un código corto (`"pub"` / `"priv"`).
/// La decodificación es total: cualquier código distinto de `"pub"` se
/// interpreta como privada.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaylistStatus {
  Published,
  #[default]
  Private,
}

impl PlaylistStatus {
  pub const PUBLISHED_CODE: &'static str = "pub";
  pub const PRIVATE_CODE: &'static str = "priv";

  pub fn from_code(code: &str) -> Self {
    if code == Self::PUBLISHED_CODE { PlaylistStatus::Published } else { PlaylistStatus::Private }
  }

  pub fn code(self) -> &'static str {
    match self {
      PlaylistStatus::Published => Self::PUBLISHED_CODE,
      PlaylistStatus::Private => Self::PRIVATE_CODE,
    }
  }

  /// Palabra legible que se envía al cliente.
  pub fn label(self) -> &'static str {
    match self {
      PlaylistStatus::Published => "public",
      PlaylistStatus::Private => "private",
    }
  }
}

impl fmt::Display for PlaylistStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Lista de reproducción creada por un usuario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
  pub id: PlaylistId,
  pub name: String,
  pub status: PlaylistStatus,
  /// Canciones de la playlist en orden de pertenencia.
  pub song_ids: Vec<SongId>,
}

impl Playlist {
  pub fn new(name: impl Into<String>, status: PlaylistStatus) -> Self {
    Self { id: PlaylistId::new(), name: name.into(), status, song_ids: vec![] }
  }

  pub fn with_songs(mut self, ids: impl IntoIterator<Item = SongId>) -> Self {
    self.song_ids.extend(ids);
    self
  }
}
