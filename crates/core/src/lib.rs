//! Functional core for the sportsbook services.
//!
//! Holds the domain types for sports events and races, the filters callers
//! use to narrow listings, the pure query builder that turns those filters
//! into SQL, and the repository traits implemented by the storage backends.

pub mod event;
pub mod race;
#[cfg(feature = "seed")]
pub mod seed;
pub mod storage;
