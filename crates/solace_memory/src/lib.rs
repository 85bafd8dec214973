//! Session storage.
//!
//! Sessions live in process memory for the lifetime of the store. Nothing is
//! persisted: dropping the store (or restarting the process) forgets every
//! conversation.

mod store;


pub use store::InMemorySessionStore;
