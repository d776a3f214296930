use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::{User, UserId};
use crate::errors::CoreError;
use crate::ports::{CredentialHasher, LibraryRepository};

#[derive(Debug, Error)]
pub enum RegistrationError {
  /// The confirmation did not match. Reported against the `password` field.
  #[error("Passwords must match.")]
  PasswordMismatch,

  #[error("username already taken: {0}")]
  UsernameTaken(String),

  #[error(transparent)]
  Core(#[from] CoreError),
}

impl RegistrationError {
  /// Input field the error belongs to, if any.
  pub fn field(&self) -> Option<&'static str> {
    match self {
      RegistrationError::PasswordMismatch => Some("password"),
      RegistrationError::UsernameTaken(_) => Some("username"),
      RegistrationError::Core(_) => None,
    }
  }
}

/// Sign-up form as posted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
  pub email: String,
  pub username: String,
  pub password: String,
  pub password2: String,
}

/// Creates accounts. The returned `User` carries the hash, never the
/// plaintext; project it with `ReadModelProjector::project_user` before it
/// leaves the process.
pub struct RegistrationService<R, H>
where
  R: LibraryRepository,
  H: CredentialHasher,
{
  repo: R,
  hasher: H,
}

impl<R, H> RegistrationService<R, H>
where
  R: LibraryRepository,
  H: CredentialHasher,
{
  pub fn new(repo: R, hasher: H) -> Self {
    Self { repo, hasher }
  }

  pub fn repository(&self) -> &R {
    &self.repo
  }

  /// Sign-up with password confirmation.
  pub fn register(&self, account: NewAccount) -> Result<User, RegistrationError> {
    if account.password != account.password2 {
      return Err(RegistrationError::PasswordMismatch);
    }
    self.create_user(&account.username, &account.email, &account.password)
  }

  /// Direct account creation, no confirmation step.
  pub fn create_user(&self, username: &str, email: &str, password: &str) -> Result<User, RegistrationError> {
    if self.repo.find_user_by_username(username)?.is_some() {
      return Err(RegistrationError::UsernameTaken(username.to_string()));
    }

    let user = User {
      id: UserId::new(),
      username: username.to_string(),
      email: email.to_string(),
      password: self.hasher.hash(password)?,
    };
    self.repo.save_user(&user)?;

    info!(user = %user.id, username = %user.username, "registered account");
    Ok(user)
  }
}
