pub mod auth;
pub mod config;
pub mod dates;
pub mod nostalgia;
pub mod record;
pub mod render;
pub mod store;

#[cfg(test)]
mod tests;

pub use auth::{AuthError, Gate};
pub use config::Config;
pub use dates::Clock;
pub use nostalgia::Nostalgia;
pub use record::{Entry, RECORD_SIZE, derive_weekday};
pub use store::{Store, StoreError};
