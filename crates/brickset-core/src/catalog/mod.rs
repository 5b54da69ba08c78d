//! Catalog records and search parameters.

mod instructions;
mod query;
mod types;

pub use query::{SetQuery, SetRef, Term, Years};
pub use types::{
    Instructions, Minifig, MinifigNote, Review, ReviewRating, Set, SetImage, SetNote,
    SetOwnership, Theme, YearCount,
};
