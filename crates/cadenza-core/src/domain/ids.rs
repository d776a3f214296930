use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declara un identificador opaco respaldado por un `Uuid`.
///
/// Todos los IDs del dominio comparten la misma forma: se generan con UUID v4,
/// se guardan en la base de datos como texto y se vuelven a parsear al leer.
macro_rules! entity_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(Uuid);

    impl $name {
      /// Genera un nuevo identificador único.
      pub fn new() -> Self {
        $name(Uuid::new_v4())
      }

      /// Construye el ID a partir de un `Uuid` existente.
      pub fn from_uuid(u: Uuid) -> Self {
        $name(u)
      }

      /// Devuelve el `Uuid` interno.
      pub fn as_uuid(&self) -> Uuid {
        self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<Uuid> for $name {
      fn from(u: Uuid) -> Self {
        $name(u)
      }
    }

    impl From<$name> for Uuid {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl FromStr for $name {
      type Err = uuid::Error;

      fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map($name)
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
      }
    }
  };
}

entity_id!(
  /// Identificador de una cuenta de usuario.
  UserId
);

entity_id!(
  /// Identificador del perfil público asociado a un usuario.
  ProfileId
);

entity_id!(
  /// Identificador único del artista.
  ArtistId
);

entity_id!(SongId);

entity_id!(PlaylistId);

entity_id!(
  /// Identificador de una reproducción global de una canción.
  PlayedSongId
);

entity_id!(
  /// Identificador de una reproducción de canción atribuida a un usuario.
  UserPlayedSongId
);

entity_id!(PlayedPlaylistId);

entity_id!(UserPlayedPlaylistId);
