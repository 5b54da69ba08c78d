//! brickset-core - Core types and traits for the BrickSet API client.

pub mod catalog;
pub mod credentials;
pub mod error;
pub mod tokens;
pub mod traits;
pub mod types;

pub use catalog::{
    Instructions, Minifig, MinifigNote, Review, ReviewRating, Set, SetImage, SetNote,
    SetOwnership, Theme, YearCount,
};
pub use catalog::{SetQuery, SetRef, Term, Years};
pub use credentials::Credentials;
pub use error::Error;
pub use tokens::{ApiKey, UserToken};
pub use traits::{Account, Catalog};
pub use types::{ApiUrl, SetNumber};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
