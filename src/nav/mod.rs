//! Navigation authorization: what happens to a page transition before it
//! commits.
//!
//! ARCHITECTURE
//! ============
//! Two ordered gates. The global interceptor enforces the signed-in /
//! signed-out split from route metadata; then each entry guard on the matched
//! chain runs parent-first. The first `RedirectTo` short-circuits everything
//! after it. `pipeline` composes the gates and follows redirect chains.

pub mod decision;
pub mod guards;
pub mod interceptor;
pub mod pipeline;
pub mod redirect;

pub use decision::{Decision, NavigationIntent};
pub use interceptor::intercept;
pub use pipeline::{NavigationError, NavigationPipeline, Resolution};
