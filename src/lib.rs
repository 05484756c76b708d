//! Client-side synchronization layer for the Book Grader catalog.
//!
//! Three independently-updating sources are reconciled into one view model:
//!
//! - [`api::CatalogClient`]: typed request/response calls to the catalog.
//! - [`feed::StatsFeed`]: a push connection delivering aggregate snapshots.
//! - [`mutations::MutationCoordinator`]: locally-initiated mutations and the
//!   refreshes they require.
//!
//! The refresh rule is pull-after-push: after any successful mutation the
//! affected view is re-fetched wholesale, never patched from the mutation's
//! input, so displayed state always traces back to a real server response.

pub mod api;
pub mod config;
pub mod feed;
pub mod mutations;
pub mod view;
