pub mod credentials;
pub mod library_service;
pub mod registration;

pub use credentials::Argon2Hasher;
pub use library_service::LibraryService;
pub use registration::{NewAccount, RegistrationError, RegistrationService};
