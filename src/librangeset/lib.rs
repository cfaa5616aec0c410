// Copyright 2022 Joshua Graffman

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library represents subsets of the real line as finite unions of half-open intervals `[min..max)` with `f64` bounds, possibly infinite. An [`IntervalSet`](interval_set/index.html) is immutable and always stored in a canonical form (sorted, merged, non-touching intervals), which makes structural equality coincide with set equality, so algebraic laws such as De Morgan's hold exactly, bit for bit on the bounds.
//!
//! Set operations are exposed through the operation traits of [gcollections](https://crates.io/crates/gcollections) (`Union`, `Intersection`, `Difference`, `Complement`, `Contains`, ...), which are re-exported as `rangeset::gcollections`.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::*;
//! use rangeset::gcollections::ops::*;
//!
//! let a = IntervalSet::new(2.0, 4.0).unwrap()
//!   .union(&Interval::new(6.0, 8.0).unwrap())
//!   .union(&Interval::new(4.0, 6.0).unwrap());
//! assert_eq!(a, IntervalSet::new(2.0, 8.0).unwrap());
//! assert_eq!(a.measure(), 6.0);
//! assert_eq!(UNIVERSAL.complement(), *NULL);
//! ```
//!
//! For more examples see the [interval module](interval/index.html) or the [interval_set module](interval_set/index.html).

pub mod error;
pub mod interval;
pub mod interval_set;
pub mod ops;

pub use gcollections;

pub use crate::error::InvalidInterval;
pub use crate::interval::Interval;
pub use crate::interval_set::{IntervalSet, NULL, UNIVERSAL};
pub use crate::ops::{Hull, Measure, Whole};
