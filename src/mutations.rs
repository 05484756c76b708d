//! Sequencing of user-initiated mutations and the refreshes they require.
//!
//! Each operation is one logical unit: the transport call, then, only on
//! definitive success, the re-fetch of whichever view the mutation
//! invalidated. The view model is never patched from the mutation's input;
//! it is refreshed from the server or left alone.

use tracing::info;

use crate::api::{
    ApiError, Book, BookCreate, BookId, BookUpdate, CatalogClient, Review, ReviewCreate,
};
use crate::view::{CatalogIntent, CatalogViewModel};

/// Outcome of a delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The book is gone and the list has been refreshed.
    Deleted,
    /// The caller declined the confirmation; nothing was sent.
    Declined,
}

/// Runs one mutation and its follow-up refresh as a single unit.
///
/// The view model passed into each method is only touched after the
/// transport call succeeds; a failed mutation leaves it exactly as it was.
/// A refresh that fails after the mutation committed surfaces as the
/// returned error while the view keeps its last good contents.
pub struct MutationCoordinator {
    client: CatalogClient,
}

impl MutationCoordinator {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// Create a book, refresh the list, and hand back the created entity.
    ///
    /// An `Ok` is also the signal to leave the form and return to the
    /// list view.
    pub async fn create(
        &self,
        vm: &mut CatalogViewModel,
        draft: BookCreate,
    ) -> Result<Book, ApiError> {
        let book = self.client.create_book(&draft).await?;
        info!(id = book.id, title = %book.title, "book created");
        vm.load_list().await?;
        Ok(book)
    }

    /// Update a book, refresh the list, and hand back the updated entity.
    pub async fn update(
        &self,
        vm: &mut CatalogViewModel,
        id: BookId,
        patch: BookUpdate,
    ) -> Result<Book, ApiError> {
        let book = self.client.update_book(id, &patch).await?;
        info!(id, "book updated");
        vm.load_list().await?;
        Ok(book)
    }

    /// Delete a book, gated on the caller's confirmation decision.
    ///
    /// `confirmed` must already hold the user's answer. Declined means
    /// declined: no transport call is made and the view model is untouched.
    pub async fn remove(
        &self,
        vm: &mut CatalogViewModel,
        id: BookId,
        confirmed: bool,
    ) -> Result<DeleteOutcome, ApiError> {
        if !confirmed {
            return Ok(DeleteOutcome::Declined);
        }

        self.client.delete_book(id).await?;
        info!(id, "book deleted");
        vm.load_list().await?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Submit a review, clear the input, and refresh the detail view.
    ///
    /// The form clears as soon as the server accepts the review; a failed
    /// refresh leaves the detail stale but never re-arms the form. A failed
    /// submit leaves the form populated for correction and retry.
    pub async fn review(
        &self,
        vm: &mut CatalogViewModel,
        book_id: BookId,
        draft: ReviewCreate,
    ) -> Result<Review, ApiError> {
        let review = self.client.add_review(book_id, &draft).await?;
        info!(book_id, review_id = review.id, "review added");
        vm.apply(CatalogIntent::ClearReviewForm);
        vm.load_detail(book_id).await?;
        Ok(review)
    }
}
