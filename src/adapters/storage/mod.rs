//! Storage Adapters
//!
//! In-memory implementations of the persistence ports.
//!
//! ## Available Adapters
//!
//! - **InMemoryPollStore** - Questions, choices and votes in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryPollStore;
//!
//! let store = InMemoryPollStore::new();
//! let handler = CastVoteHandler::new(
//!     Arc::new(store.clone()),
//!     Arc::new(store.clone()),
//!     Arc::new(store),
//! );
//! ```

mod in_memory_poll_store;

pub use in_memory_poll_store::InMemoryPollStore;
