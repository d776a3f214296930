pub mod domain;
pub mod errors;
pub mod ports;
pub mod projection;
pub mod services;

#[cfg(test)]
mod testing;

pub use errors::CoreError;
pub use projection::ReadModelProjector;
