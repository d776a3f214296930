use serde::Deserialize;

use crate::domain::ids::{ProfileId, UserId};

/// Cuenta de usuario.
///
/// `password` contiene siempre el hash de la credencial (formato PHC), nunca
/// el texto plano. No implementa `Serialize` a propósito: lo que sale hacia
/// el cliente es [`crate::projection::UserRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
  pub id: UserId,
  pub username: String,
  pub email: String,
  pub password: String,
}

/// Perfil público asociado a una cuenta.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
  pub id: ProfileId,
  pub user: UserId,
  pub bio: Option<String>,
  pub avatar_url: Option<String>,
}

impl Profile {
  pub fn empty(user: UserId) -> Self {
    Self { id: ProfileId::new(), user, bio: None, avatar_url: None }
  }
}
