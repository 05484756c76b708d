//! The catalog view model: pure state transitions under a thin async shell.

pub mod mvi;

mod intent;
mod model;
mod reducer;
mod state;

pub use intent::CatalogIntent;
pub use model::CatalogViewModel;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, DetailState, ReviewForm};
