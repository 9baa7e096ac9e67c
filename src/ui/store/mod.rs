//! State store primitives.
//!
//! Every feature module follows the same unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a feature's slice
//! - **Intent**: user action or system event
//! - **Reducer**: pure function transforming state based on intents
//! - **Store**: thread-safe container applying dispatches atomically

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
pub use store::Store;
