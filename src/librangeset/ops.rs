// Copyright 2022 Joshua Graffman

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval and set specific operations that are not covered by `gcollections`.

pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// The value covering the whole real line.
pub trait Whole
{
  fn whole() -> Self;
}

/// Total length of the points covered. The result is infinite as soon as one bound is.
pub trait Measure
{
  fn measure(&self) -> f64;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::interval::*;
  use crate::interval_set::*;

  fn i(lb: f64, ub: f64) -> Interval {
    Interval::new(lb, ub).unwrap()
  }

  #[test]
  fn hull_spans_gaps() {
    assert_eq!(i(0.0, 1.0).hull(&i(3.0, 4.0)), i(0.0, 4.0));
    assert_eq!(i(3.0, 4.0).hull(&i(0.0, 1.0)), i(0.0, 4.0));
    assert_eq!(i(0.0, 5.0).hull(&i(1.0, 2.0)), i(0.0, 5.0));
  }

  #[test]
  fn whole_measure_is_infinite() {
    assert_eq!(Interval::whole().measure(), f64::INFINITY);
    assert_eq!(IntervalSet::whole().measure(), f64::INFINITY);
  }
}
