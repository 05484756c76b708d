use crate::api::{AppStats, Book, BookId};
use crate::view::mvi::Intent;

/// Events that move the catalog state forward.
///
/// Only confirmed server results, feed events, and local form edits appear
/// here. Failed calls carry no intent, so a failure leaves state exactly as
/// it was.
#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// A fresh list fetch completed; replaces the catalog wholesale.
    ListRefreshed(Vec<Book>),
    /// A fresh detail fetch completed.
    DetailRefreshed(Book),
    /// The detail fetch came back not-found.
    DetailMissing(BookId),
    /// The stats feed delivered a valid snapshot.
    StatsSnapshot(AppStats),
    /// The stats feed ended; snapshot display ends with it.
    FeedClosed,
    /// The user picked a rating in the review form.
    SetReviewRating(u8),
    /// The user edited the review comment.
    SetReviewComment(String),
    /// The server accepted the review; reset the form.
    ClearReviewForm,
}

impl Intent for CatalogIntent {}
