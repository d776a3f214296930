pub mod credentials;
pub mod library_repository;

pub use credentials::CredentialHasher;
pub use library_repository::LibraryRepository;
