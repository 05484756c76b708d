use crate::view::intent::CatalogIntent;
use crate::view::mvi::Reducer;
use crate::view::state::{CatalogState, DetailState, ReviewForm};

/// Folds catalog intents into the next state.
///
/// Replacement is always wholesale: a refreshed list supersedes the old
/// one entirely, a snapshot supersedes the previous snapshot. Each intent
/// touches its own field and leaves the rest alone.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut next = state;
        match intent {
            CatalogIntent::ListRefreshed(books) => next.books = books,
            CatalogIntent::DetailRefreshed(book) => next.detail = DetailState::Loaded(book),
            CatalogIntent::DetailMissing(id) => next.detail = DetailState::Missing(id),
            CatalogIntent::StatsSnapshot(snapshot) => next.stats = Some(snapshot),
            CatalogIntent::FeedClosed => next.stats = None,
            CatalogIntent::SetReviewRating(rating) => next.review_form.rating = rating,
            CatalogIntent::SetReviewComment(comment) => next.review_form.comment = comment,
            CatalogIntent::ClearReviewForm => next.review_form = ReviewForm::default(),
        }
        next
    }
}
