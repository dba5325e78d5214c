#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A string-keyed, string-valued map with strict removal and bulk merge.
///
/// This module provides `Dictionary`, a thin layer over `HashMap<String,
/// String>` whose `erase` reports an error on a missing key.
pub mod dictionary;

/// Errors shared by every container in the crate.
pub mod error;

/// A HashMap implementation using separate chaining.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a key-value map interface with configurable hashers.
pub mod hash_map;

pub mod hash_table;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// Hasher builder used when none is named: foldhash's fast, randomly
        /// seeded builder.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else if #[cfg(feature = "std")] {
        /// Hasher builder used when none is named: the standard library's
        /// randomly seeded SipHash builder.
        pub type DefaultHashBuilder = std::hash::RandomState;
    } else {
        /// Placeholder for the default hasher builder when neither `foldhash`
        /// nor `std` is enabled. It cannot be constructed, so a hasher must be
        /// supplied explicitly.
        #[derive(Clone, Copy, Debug)]
        pub enum DefaultHashBuilder {}
    }
}

pub use dictionary::Dictionary;
pub use error::Error;
pub use error::Result;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_table::HashTable;
