// crates/cadenza-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de Cadenza.
///
/// Las capas superiores (API, CLI, etc.) deberían mapear este error
/// a respuestas HTTP o logs.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("repository error: {0}")]
  Repository(String),

  #[error("not found")]
  NotFound,

  /// Un registro apunta a otro que ya no existe (p. ej. una reproducción
  /// cuya canción fue borrada).
  #[error("dangling reference to {entity} {id}")]
  DanglingReference { entity: &'static str, id: String },

  #[error("credential error: {0}")]
  Credentials(String),
}

impl CoreError {
  pub fn dangling(entity: &'static str, id: impl ToString) -> Self {
    CoreError::DanglingReference { entity, id: id.to_string() }
  }
}
