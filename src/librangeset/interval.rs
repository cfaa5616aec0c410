// Copyright 2022 Joshua Graffman

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Half-open interval of real numbers.
//!
//! An interval `[min..max)` holds every `x` such that `min <= x < max`. Bounds are `f64` and may be infinite, so `[-inf..max)` or `[min..+inf)` describe unbounded ranges. An interval is never empty: the constructor rejects any pair of bounds that does not satisfy `min < max`.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::Interval;
//! use rangeset::gcollections::ops::*;
//!
//! let a = Interval::new(1.0, 3.0).unwrap();
//! let b = Interval::new(2.0, 4.0).unwrap();
//! assert!(a.contains(&1.0));
//! assert!(!a.contains(&3.0));
//! assert!(a.overlap(&b));
//! assert_eq!(a.intersection(&b), Some(Interval::new(2.0, 3.0).unwrap()));
//! assert!(Interval::new(5.0, 5.0).is_err());
//! ```

use crate::error::InvalidInterval;
use crate::ops::{Hull, Measure, Whole};
use gcollections::kind::*;
use gcollections::ops::*;
use std::fmt::{Display, Error, Formatter};
use std::hash::{Hash, Hasher};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
  lb: f64,
  ub: f64
}

impl Interval
{
  /// Builds `[min..max)`, failing unless `min < max`.
  pub fn new(min: f64, max: f64) -> Result<Interval, InvalidInterval> {
    if min < max {
      Ok(Interval::from_bounds(min, max))
    }
    else {
      Err(InvalidInterval { min, max })
    }
  }

  /// Caller guarantees `lb < ub`.
  pub(crate) fn from_bounds(lb: f64, ub: f64) -> Interval {
    debug_assert!(lb < ub, "Interval bounds must satisfy `lb < ub`, got [{}..{}).", lb, ub);
    Interval { lb, ub }
  }

  pub fn lower(&self) -> f64 {
    self.lb
  }

  pub fn upper(&self) -> f64 {
    self.ub
  }

  pub fn length(&self) -> f64 {
    self.ub - self.lb
  }

  pub fn is_bounded(&self) -> bool {
    self.lb.is_finite() && self.ub.is_finite()
  }

  /// `true` if the two intervals share at least one point or touch (`self.upper() == rhs.lower()` or the reverse), that is when their union is a single interval.
  pub fn is_joinable(&self, rhs: &Interval) -> bool {
    self.lb <= rhs.ub && rhs.lb <= self.ub
  }
}

// Bounds are never NaN.
impl Eq for Interval {}

impl Hash for Interval
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    // `-0.0 + 0.0` is `0.0`, so both zeros hash alike as they compare equal.
    (self.lb + 0.0).to_bits().hash(state);
    (self.ub + 0.0).to_bits().hash(state);
  }
}

impl Collection for Interval
{
  type Item = f64;
}

impl Bounded for Interval
{
  fn lower(&self) -> f64 {
    self.lb
  }

  fn upper(&self) -> f64 {
    self.ub
  }
}

impl Whole for Interval
{
  fn whole() -> Interval {
    Interval::from_bounds(f64::NEG_INFINITY, f64::INFINITY)
  }
}

impl Measure for Interval
{
  fn measure(&self) -> f64 {
    self.length()
  }
}

impl Contains for Interval
{
  fn contains(&self, value: &f64) -> bool {
    *value >= self.lb && *value < self.ub
  }
}

impl Overlap for Interval
{
  fn overlap(&self, rhs: &Interval) -> bool {
    self.lb < rhs.ub && rhs.lb < self.ub
  }
}

impl Disjoint for Interval
{
  fn is_disjoint(&self, rhs: &Interval) -> bool {
    !self.overlap(rhs)
  }
}

impl Subset for Interval
{
  fn is_subset(&self, rhs: &Interval) -> bool {
    self.lb >= rhs.lb && self.ub <= rhs.ub
  }
}

impl Intersection for Interval
{
  type Output = Option<Interval>;

  fn intersection(&self, rhs: &Interval) -> Option<Interval> {
    if self.overlap(rhs) {
      Some(Interval::from_bounds(self.lb.max(rhs.lb), self.ub.min(rhs.ub)))
    }
    else {
      None
    }
  }
}

impl Hull for Interval
{
  type Output = Interval;

  fn hull(&self, rhs: &Interval) -> Interval {
    Interval::from_bounds(self.lb.min(rhs.lb), self.ub.max(rhs.ub))
  }
}

impl Display for Interval
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    write!(formatter, "[{}..{})", self.lb, self.ub)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::hash_map::DefaultHasher;

  const i1_2: Interval = Interval {lb: 1.0, ub: 2.0};
  const i0_10: Interval = Interval {lb: 0.0, ub: 10.0};
  const i5_10: Interval = Interval {lb: 5.0, ub: 10.0};
  const i0_5: Interval = Interval {lb: 0.0, ub: 5.0};
  const i20_30: Interval = Interval {lb: 20.0, ub: 30.0};
  const im30_m20: Interval = Interval {lb: -30.0, ub: -20.0};

  fn hash_of(i: &Interval) -> u64 {
    let mut hasher = DefaultHasher::new();
    i.hash(&mut hasher);
    hasher.finish()
  }

  #[test]
  fn new_rejects_invalid_bounds() {
    assert_eq!(Interval::new(5.0, 5.0), Err(InvalidInterval { min: 5.0, max: 5.0 }));
    assert_eq!(Interval::new(5.0, 3.0), Err(InvalidInterval { min: 5.0, max: 3.0 }));
    assert!(Interval::new(f64::NAN, 1.0).is_err());
    assert!(Interval::new(0.0, f64::NAN).is_err());
    assert!(Interval::new(f64::INFINITY, f64::INFINITY).is_err());
    assert_eq!(Interval::new(1.0, 2.0), Ok(i1_2));
    assert_eq!(Interval::new(f64::NEG_INFINITY, f64::INFINITY), Ok(Interval::whole()));
  }

  #[test]
  fn length_test() {
    assert_eq!(i1_2.length(), 1.0);
    assert_eq!(i0_10.length(), 10.0);
    assert_eq!(im30_m20.length(), 10.0);
    assert_eq!(Interval::whole().length(), f64::INFINITY);
    assert!(!Interval::whole().is_bounded());
    assert!(i0_10.is_bounded());
  }

  #[test]
  fn contains_is_half_open() {
    assert!(i0_10.contains(&0.0));
    assert!(i0_10.contains(&9.999));
    assert!(!i0_10.contains(&10.0));
    assert!(!i0_10.contains(&-0.001));
    assert!(!i0_10.contains(&f64::NAN));
    assert!(Interval::whole().contains(&f64::MAX));
    assert!(!Interval::whole().contains(&f64::INFINITY));
  }

  #[test]
  fn overlap_test() {
    assert!(i0_10.overlap(&i5_10));
    assert!(i0_10.overlap(&i1_2));
    assert!(!i0_5.overlap(&i5_10));
    assert!(!i5_10.overlap(&i0_5));
    assert!(i0_5.is_disjoint(&i5_10));
    assert!(!i0_10.overlap(&i20_30));
    assert!(i0_5.is_joinable(&i5_10));
    assert!(!i0_10.is_joinable(&i20_30));
  }

  #[test]
  fn intersection_test() {
    assert_eq!(i0_10.intersection(&i5_10), Some(i5_10));
    assert_eq!(i0_10.intersection(&i1_2), Some(i1_2));
    assert_eq!(i0_5.intersection(&i5_10), None);
    assert_eq!(im30_m20.intersection(&i20_30), None);
  }

  #[test]
  fn subset_test() {
    assert!(i1_2.is_subset(&i0_10));
    assert!(i0_10.is_subset(&i0_10));
    assert!(!i0_10.is_subset(&i5_10));
    assert!(i20_30.is_subset(&Interval::whole()));
  }

  #[test]
  fn signed_zero_hashes_alike() {
    let pos = Interval::new(0.0, 1.0).unwrap();
    let neg = Interval::new(-0.0, 1.0).unwrap();
    assert_eq!(pos, neg);
    assert_eq!(hash_of(&pos), hash_of(&neg));
  }

  #[test]
  fn display_test() {
    assert_eq!(i1_2.to_string(), "[1..2)");
    assert_eq!(Interval::new(-0.5, 2.25).unwrap().to_string(), "[-0.5..2.25)");
    assert_eq!(Interval::whole().to_string(), "[-inf..inf)");
  }
}
