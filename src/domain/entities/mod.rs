//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping
//! - [`Click`] - A recorded visit to a link
//! - [`ClickHistory`] - The read model of a link's clicks
//!
//! Creation input uses a separate struct ([`NewLink`]); links are never updated
//! apart from appending clicks.

pub mod click;
pub mod link;

pub use click::{Click, ClickHistory};
pub use link::{Link, NewLink};
