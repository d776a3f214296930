use crate::errors::CoreError;

/// Port que abstrae el hash de contraseñas.
///
/// Implementaciones posibles:
/// - Argon2id (ver [`crate::services::credentials::Argon2Hasher`])
/// - un hasher trivial en tests
pub trait CredentialHasher {
  /// Devuelve el hash en formato PHC.
  fn hash(&self, password: &str) -> Result<String, CoreError>;
  fn verify(&self, password: &str, hash: &str) -> Result<bool, CoreError>;
}
