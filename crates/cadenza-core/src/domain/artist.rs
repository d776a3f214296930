use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Representa a un artista dentro del sistema.
///
/// Un artista puede aparecer en una canción como intérprete principal o como
/// colaborador; el rol no forma parte del artista sino del crédito
/// (ver [`crate::domain::artist_role::CreditedArtist`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Nombre con el que se acredita al artista.
  pub name: String,
}

impl Artist {
  pub fn new(name: impl Into<String>) -> Self {
    Self { id: ArtistId::new(), name: name.into() }
  }
}
