//! rusty-forms validation core
//!
//! Pure check functions over primitive values, compatible with both std and no_std.
//! Every function answers a yes/no question; messages and grouping belong to the
//! engine in the `rusty-forms` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod collection;
pub mod numeric;
pub mod password;
pub mod text;

pub use collection::*;
pub use numeric::*;
pub use password::*;
pub use text::*;
