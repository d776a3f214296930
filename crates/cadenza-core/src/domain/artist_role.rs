use crate::domain::artist::Artist;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rol de un artista respecto a una canción concreta.
///
/// El orden de las variantes importa: los créditos principales se listan
/// antes que los colaboradores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArtistRole {
  /// Artista principal que interpreta la canción.
  Main,
  /// Artista invitado o colaborador.
  Collaborator,
}

impl ArtistRole {
  /// Código con el que se persiste el rol.
  pub fn code(self) -> &'static str {
    match self {
      ArtistRole::Main => "main",
      ArtistRole::Collaborator => "collab",
    }
  }
}

impl fmt::Display for ArtistRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown artist role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for ArtistRole {
  type Err = UnknownRole;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "main" => Ok(ArtistRole::Main),
      "collab" => Ok(ArtistRole::Collaborator),
      other => Err(UnknownRole(other.to_string())),
    }
  }
}

/// Crédito de un artista en una canción.
///
/// Es lo que devuelve el repositorio al preguntar "¿quién aparece en esta
/// canción?": el artista, el rol y su posición dentro de la lista de ese rol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditedArtist {
  pub artist: Artist,
  pub role: ArtistRole,
  pub position: u32,
}
