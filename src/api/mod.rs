//! Typed client for the catalog REST API.
//!
//! No caching, no retries, no shared session: every operation is a single
//! request that resolves with the decoded entity or fails with a typed
//! [`ApiError`].

mod client;
mod error;
mod types;

pub use client::CatalogClient;
pub use error::ApiError;
pub use types::{
    AppStats, Book, BookCreate, BookId, BookUpdate, Genre, GenreTag, Review, ReviewCreate,
    ReviewId,
};
