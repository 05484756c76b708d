use crate::api::{AppStats, Book, BookId, ReviewCreate};
use crate::view::mvi::ViewState;

/// What the detail view currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    /// No book selected yet.
    #[default]
    Absent,
    /// A book fetched from the catalog, reviews included.
    Loaded(Book),
    /// The requested id does not exist on the server.
    Missing(BookId),
}

impl DetailState {
    /// The loaded book, if any.
    pub fn book(&self) -> Option<&Book> {
        match self {
            DetailState::Loaded(book) => Some(book),
            _ => None,
        }
    }
}

/// Input buffer for the add-review form on the detail view.
///
/// Survives failed submits so the user can correct and resend; cleared only
/// once the server accepts the review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    /// 1 to 5. Starts at the form's preselected top rating.
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            rating: 5,
            comment: String::new(),
        }
    }
}

impl ReviewForm {
    /// Snapshot the buffer as a submission draft.
    pub fn draft(&self) -> ReviewCreate {
        ReviewCreate {
            rating: self.rating,
            comment: self.comment.clone(),
        }
    }
}

/// Single source of truth for what the catalog views render.
///
/// Every field is replaced wholesale by its intent; nothing in here is
/// patched incrementally from mutation inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogState {
    /// Full catalog, replaced by each successful list load.
    pub books: Vec<Book>,
    /// Contents of the detail view.
    pub detail: DetailState,
    /// Latest snapshot from the stats feed; `None` before the first
    /// snapshot and again once the feed ends.
    pub stats: Option<AppStats>,
    /// Review input for the detail view.
    pub review_form: ReviewForm,
}

impl ViewState for CatalogState {}
