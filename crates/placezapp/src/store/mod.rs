//! # Storage Layer
//!
//! This module defines the storage abstraction for placez. The
//! [`StorageBackend`](backend::StorageBackend) trait is a plain key-value port
//! (get / set / remove over string keys), so the catalog logic runs the same
//! against a directory of JSON files or an in-memory map.
//!
//! ## Keys
//!
//! | Key | Backend | Contents |
//! |-----|---------|----------|
//! | `travelPlaces` | local | JSON array of places (the source of truth) |
//! | `travelStats` | local | JSON statistics object (a cache) |
//! | `travelUsers` | local | JSON array of `{username, password}` |
//! | `currentUser` | session | JSON session object |
//!
//! ## Truth and Cache
//!
//! The place collection is authoritative. Statistics are derived from it and
//! rewritten after every mutation; if the cached copy is missing or unreadable
//! it is recomputed on demand.
//!
//! ## Recovery
//!
//! - **Missing collection**: seeded with the sample places.
//! - **Corrupted collection**: both the collection and statistics keys are
//!   discarded and the seed set is written back. Logged, never surfaced.
//! - **Corrupted statistics**: recomputed from the collection.
//!
//! ## Concurrency
//!
//! Every mutation is a read-modify-write of the whole collection with no
//! locking. This is correct only because a single caller drives the store.
//! Two processes writing the same data directory race: last writer wins.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod place_store;

pub const PLACES_KEY: &str = "travelPlaces";
pub const STATS_KEY: &str = "travelStats";
pub const USERS_KEY: &str = "travelUsers";
pub const SESSION_KEY: &str = "currentUser";
