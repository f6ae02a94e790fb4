pub mod client;
pub mod error;
pub mod models;

pub use client::{DarajaClient, DarajaSettings};
pub use error::{PaymentError, Result};
