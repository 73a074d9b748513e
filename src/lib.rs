//! carousel-tui: a circular card carousel paged by drag gestures.
//!
//! The engine is three small pieces: an immutable [`catalog`], a pure
//! [`layout`] geometry module, and a [`carousel`] gesture controller that
//! owns the active index. The [`tui`] module renders it all in the
//! terminal.

pub mod carousel;
pub mod catalog;
pub mod layout;
pub mod report;
pub mod tui;
