//! State/intent/reducer primitives for the view layer.
//!
//! These traits pin down unidirectional data flow for a client that is fed
//! from several directions at once (request results, push messages, local
//! edits).
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: self-contained snapshot of what the views show
//! - **Intent**: confirmed server results, feed events, local form edits
//! - **Reducer**: pure function that folds intents into the next state
//!
//! Effects (network calls, the feed socket) stay outside; only their
//! confirmed outcomes enter as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
