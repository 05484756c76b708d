use std::mem;

use crate::api::{ApiError, AppStats, BookId, CatalogClient};
use crate::view::intent::CatalogIntent;
use crate::view::mvi::Reducer;
use crate::view::reducer::CatalogReducer;
use crate::view::state::CatalogState;

/// Owns the rendered catalog state and the only paths that change it.
///
/// Effects live here; transitions live in [`CatalogReducer`]. A load that
/// fails returns the error and applies nothing, so the views keep their
/// last good contents. Dropping the model mid-flight just drops the
/// pending result with it.
pub struct CatalogViewModel {
    client: CatalogClient,
    state: CatalogState,
}

impl CatalogViewModel {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            state: CatalogState::default(),
        }
    }

    /// Current state, for rendering.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Apply one intent through the reducer.
    pub fn apply(&mut self, intent: CatalogIntent) {
        self.state = CatalogReducer::reduce(mem::take(&mut self.state), intent);
    }

    /// Refresh the whole catalog list.
    ///
    /// Success replaces `books` wholesale; failure leaves them untouched
    /// and returns the error for display.
    pub async fn load_list(&mut self) -> Result<(), ApiError> {
        let books = self.client.list_books().await?;
        self.apply(CatalogIntent::ListRefreshed(books));
        Ok(())
    }

    /// Load one book into the detail view.
    ///
    /// Not-found records the missing id in the detail state and still
    /// returns the error; any other failure keeps the prior contents.
    pub async fn load_detail(&mut self, id: BookId) -> Result<(), ApiError> {
        match self.client.get_book(id).await {
            Ok(book) => {
                self.apply(CatalogIntent::DetailRefreshed(book));
                Ok(())
            }
            Err(ApiError::NotFound) => {
                self.apply(CatalogIntent::DetailMissing(id));
                Err(ApiError::NotFound)
            }
            Err(other) => Err(other),
        }
    }

    /// Take the latest feed snapshot. Never fails; a snapshot is already
    /// validated by the time it gets here.
    pub fn on_stats_message(&mut self, snapshot: AppStats) {
        self.apply(CatalogIntent::StatsSnapshot(snapshot));
    }

    /// The feed ended; stats display ends with it.
    pub fn on_feed_closed(&mut self) {
        self.apply(CatalogIntent::FeedClosed);
    }
}
