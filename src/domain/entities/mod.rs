//! Core domain entities.
//!
//! - [`Link`] - A stored mapping between an identifier and a target URL
//! - [`Visit`] - A single timestamped redirect
//!
//! `NewLink` carries the fields needed to create a record; the store fills in
//! the id, creation time and the (initially empty) visit history.

pub mod link;
pub mod visit;

pub use link::{Link, NewLink};
pub use visit::Visit;
