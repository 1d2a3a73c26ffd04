//! models — user-facing duration humanizer.
//!
//! The facade type [`Humanizer`] wraps the `core` building blocks into the
//! accumulate-then-render surface most consumers should depend on.

pub mod humanizer;

pub use self::humanizer::Humanizer;
