//! Static route declarations and path resolution.
//!
//! ARCHITECTURE
//! ============
//! `table` declares routes and checks them once at startup, `matcher` turns a
//! path into the parent-first chain of routes it hits, and `location` is the
//! path + query value both sides exchange.

pub mod location;
pub mod matcher;
pub mod table;

pub use location::Location;
pub use matcher::RouteMatch;
pub use table::{EntryGuard, RouteDescriptor, RouteMeta, RouteTable, RouteTableError};
