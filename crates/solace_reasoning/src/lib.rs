//! # Solace Reasoning
//!
//! [`ReplyEngine`] turns one message from one user into a [`solace_core::Reply`]:
//!
//! 1. classify emotion and intent ([`solace_limbic`])
//! 2. log the interaction on the user's session
//! 3. [`decision::route`] to a branch: crisis, video, knowledge search,
//!    gratitude or default support
//! 4. update the session and [`compose`] the reply
//!
//! Each call is synchronous and does no I/O. Calls for the same user are
//! serialized on that user's session lock.

pub mod compose;
pub mod decision;
pub mod engine;
pub mod selection;

pub use decision::{Route, VideoStep};
pub use engine::ReplyEngine;
