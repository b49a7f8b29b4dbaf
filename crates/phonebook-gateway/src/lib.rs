//! HTTP surface of the phonebook service.
//!
//! Routes map one-to-one onto [`PersonStore`](phonebook_core::PersonStore)
//! operations; failures are translated into responses by
//! [`AppError`](crate::error::AppError).

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
