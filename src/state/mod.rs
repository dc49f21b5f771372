//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so routing code depends only on the small
//! session model it actually reads.

pub mod session;
