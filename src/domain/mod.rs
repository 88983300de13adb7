//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Queued click model
//! - [`click_worker`] - Asynchronous click recording worker
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented by the
//! infrastructure layer.
//!
//! # Click Recording Flow
//!
//! 1. HTTP handler resolves the short code
//! 2. Inline mode: the click is appended before the redirect is returned
//! 3. Queued mode: a [`click_event::ClickEvent`] is sent to the bounded channel
//!    and [`click_worker::run_click_worker`] appends it with retry

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
