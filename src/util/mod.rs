//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from routing logic so
//! the decision code stays pure and testable natively.

pub mod gate;
pub mod storage;
