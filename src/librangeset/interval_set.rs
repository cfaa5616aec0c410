// Copyright 2022 Joshua Graffman

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Immutable set of reals stored as half-open intervals.
//!
//! A set is kept in canonical form: its intervals are sorted, and two consecutive intervals are separated by a gap (`previous.upper() < next.lower()`), so touching or overlapping intervals are always merged. For example `[1..2) U [2..3) U [5..6)` is stored as `{[1..3),[5..6)}`. Since the canonical form of a set is unique, structural equality of the interval sequences is set equality.
//!
//! Every operation returns a new set and never modifies its operands. Binary operations are single sweeps over both operands and run in `O(n+m)`.
//!
//! # Examples
//!
//! ```rust
//! use rangeset::{Interval, IntervalSet};
//! use rangeset::gcollections::ops::*;
//!
//! let wall = IntervalSet::new(0.0, 10.0).unwrap();
//! let holes = IntervalSet::from_intervals(vec![
//!   Interval::new(-1.0, 1.0).unwrap(),
//!   Interval::new(5.0, 7.0).unwrap(),
//!   Interval::new(9.0, 11.0).unwrap()]);
//! let left = wall.difference(&holes);
//! assert_eq!(left.to_string(), "{[1..5),[7..9)}");
//! assert!(left.contains(&1.0));
//! assert!(!left.contains(&5.0));
//! ```
//!
//! # See also
//! [interval](../interval/index.html)

use crate::error::InvalidInterval;
use crate::interval::Interval;
use crate::ops::{Hull, Measure, Whole};
use gcollections::kind::*;
use gcollections::ops::*;
use std::fmt::{Display, Error, Formatter};
use std::iter::{FromIterator, IntoIterator, Peekable};
use std::slice;
use lazy_static::lazy_static;

lazy_static! {
  /// The empty set.
  pub static ref NULL: IntervalSet = IntervalSet::empty();
  /// The whole real line, `{[-inf..inf)}`.
  pub static ref UNIVERSAL: IntervalSet = IntervalSet::whole();
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IntervalSet {
  intervals: Vec<Interval>
}

impl IntervalSet
{
  /// The set `{[min..max)}`, failing unless `min < max`.
  pub fn new(min: f64, max: f64) -> Result<IntervalSet, InvalidInterval> {
    Interval::new(min, max).map(IntervalSet::from_interval)
  }

  pub fn from_interval(i: Interval) -> IntervalSet {
    IntervalSet {
      intervals: vec![i]
    }
  }

  /// Union of arbitrary intervals, in any order and possibly overlapping.
  pub fn from_intervals<I>(intervals: I) -> IntervalSet where
   I: IntoIterator<Item=Interval>
  {
    let mut sorted: Vec<Interval> = intervals.into_iter().collect();
    sorted.sort_by(|a, b| a.lower().total_cmp(&b.lower()));
    let mut res = IntervalSet::empty();
    res.extend(sorted);
    res
  }

  pub fn interval_count(&self) -> usize {
    self.intervals.len()
  }

  pub fn iter(&self) -> slice::Iter<'_, Interval> {
    self.intervals.iter()
  }

  pub fn is_whole(&self) -> bool {
    self.intervals.len() == 1 && self.intervals[0] == Interval::whole()
  }

  /// Smallest interval enclosing the whole set, `None` if the set is empty.
  pub fn span(&self) -> Option<Interval> {
    match (self.intervals.first(), self.intervals.last()) {
      (Some(front), Some(back)) => Some(front.hull(back)),
      _ => None
    }
  }

  /// The longest interval of the set. Ties are resolved in favor of the leftmost one.
  pub fn largest_interval(&self) -> Option<Interval> {
    self.intervals.iter().fold(None, |largest: Option<Interval>, i| {
      match largest {
        Some(l) if l.length() >= i.length() => Some(l),
        _ => Some(*i)
      }
    })
  }

  pub fn union_all<I>(&self, intervals: I) -> IntervalSet where
   I: IntoIterator<Item=Interval>
  {
    self.union(&IntervalSet::from_intervals(intervals))
  }

  pub fn intersection_all<I>(&self, intervals: I) -> IntervalSet where
   I: IntoIterator<Item=Interval>
  {
    self.intersection(&IntervalSet::from_intervals(intervals))
  }

  pub fn difference_all<I>(&self, intervals: I) -> IntervalSet where
   I: IntoIterator<Item=Interval>
  {
    self.difference(&IntervalSet::from_intervals(intervals))
  }

  fn back(&self) -> Option<&Interval> {
    self.intervals.last()
  }

  fn push(&mut self, x: Interval) {
    debug_assert!(self.back().map_or(true, |back| back.upper() < x.lower()),
      "The intervals array must be ordered and intervals must not be joinable. For a safe push, use `join_or_push`.");
    self.intervals.push(x);
  }

  fn join_or_push(&mut self, x: Interval) {
    match self.intervals.last_mut() {
      Some(back) if back.is_joinable(&x) => {
        debug_assert!(back.lower() <= x.lower(),
          "This operation is only for pushing interval to the back of the array, possibly overlapping with the last element.");
        *back = back.hull(&x);
      }
      _ => self.intervals.push(x)
    }
  }
}

impl Extend<Interval> for IntervalSet
{
  /// Appends intervals sorted by lower bound, merging them with the back of the set when they touch or overlap.
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=Interval>
  {
    for interval in iterable {
      self.join_or_push(interval);
    }
  }
}

impl FromIterator<Interval> for IntervalSet
{
  fn from_iter<I>(iter: I) -> IntervalSet where
   I: IntoIterator<Item=Interval>
  {
    IntervalSet::from_intervals(iter)
  }
}

impl From<Interval> for IntervalSet
{
  fn from(i: Interval) -> IntervalSet {
    IntervalSet::from_interval(i)
  }
}

impl<'a> IntoIterator for &'a IntervalSet
{
  type Item = &'a Interval;
  type IntoIter = slice::Iter<'a, Interval>;

  fn into_iter(self) -> slice::Iter<'a, Interval> {
    self.iter()
  }
}

impl Collection for IntervalSet
{
  type Item = f64;
}

impl Empty for IntervalSet
{
  fn empty() -> IntervalSet {
    IntervalSet {
      intervals: vec![]
    }
  }
}

impl Whole for IntervalSet
{
  fn whole() -> IntervalSet {
    IntervalSet::from_interval(Interval::whole())
  }
}

impl IsEmpty for IntervalSet
{
  fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }
}

impl Measure for IntervalSet
{
  fn measure(&self) -> f64 {
    self.intervals.iter().map(Interval::length).sum()
  }
}

impl Contains for IntervalSet
{
  fn contains(&self, value: &f64) -> bool {
    // First interval not lying entirely to the left of `value`.
    let idx = self.intervals.partition_point(|i| i.upper() <= *value);
    self.intervals.get(idx).map_or(false, |i| i.contains(value))
  }
}

fn advance_one<I, F>(a: &mut Peekable<I>, b: &mut Peekable<I>, choose: F) -> Option<Interval> where
 I: Iterator<Item=Interval>,
 F: Fn(&Interval, &Interval) -> bool
{
  let who_advance = match (a.peek(), b.peek()) {
    (Some(i), Some(j)) => choose(i, j),
    _ => return None
  };
  let to_advance = if who_advance { a } else { b };
  to_advance.next()
}

fn advance_lower<I>(a: &mut Peekable<I>, b: &mut Peekable<I>) -> Option<Interval> where
 I: Iterator<Item=Interval>
{
  advance_one(a, b, |i, j| i.lower() < j.lower())
}

// Advance the one with the lower upper bound.
fn advance_lub<I>(a: &mut Peekable<I>, b: &mut Peekable<I>) -> Option<Interval> where
 I: Iterator<Item=Interval>
{
  advance_one(a, b, |i, j| i.upper() < j.upper())
}

impl Union for IntervalSet
{
  type Output = IntervalSet;

  fn union(&self, rhs: &IntervalSet) -> IntervalSet {
    let a = &mut self.intervals.iter().cloned().peekable();
    let b = &mut rhs.intervals.iter().cloned().peekable();
    let mut res = IntervalSet::empty();
    while let Some(lower) = advance_lower(a, b) {
      res.join_or_push(lower);
    }
    // The first leftover can still touch the last merged interval.
    res.extend(a);
    res.extend(b);
    res
  }
}

impl Union<Interval> for IntervalSet
{
  type Output = IntervalSet;

  fn union(&self, rhs: &Interval) -> IntervalSet {
    self.union(&IntervalSet::from_interval(*rhs))
  }
}

// Returns `false` when one of the iterator is consumed.
// Iterators are not consumed if the intervals are already overlapping.
fn advance_to_first_overlapping<I>(a: &mut Peekable<I>, b: &mut Peekable<I>) -> bool where
 I: Iterator<Item=Interval>
{
  loop {
    let overlapping = match (a.peek(), b.peek()) {
      (Some(i), Some(j)) => i.overlap(j),
      _ => return false
    };
    if overlapping {
      return true
    }
    // Disjoint, so the one starting first also ends before the other starts.
    advance_lower(a, b);
  }
}

impl Intersection for IntervalSet
{
  type Output = IntervalSet;

  fn intersection(&self, rhs: &IntervalSet) -> IntervalSet {
    let mut res = IntervalSet::empty();
    if self.is_empty() || rhs.is_empty() {
      return res;
    }
    let a = &mut self.intervals.iter().cloned().peekable();
    let b = &mut rhs.intervals.iter().cloned().peekable();
    while advance_to_first_overlapping(a, b) {
      if let (Some(i), Some(j)) = (a.peek(), b.peek()) {
        if let Some(common) = i.intersection(j) {
          res.push(common);
        }
      }
      advance_lub(a, b);
    }
    res
  }
}

impl Intersection<Interval> for IntervalSet
{
  type Output = IntervalSet;

  fn intersection(&self, rhs: &Interval) -> IntervalSet {
    self.intersection(&IntervalSet::from_interval(*rhs))
  }
}

impl Difference for IntervalSet
{
  type Output = IntervalSet;

  fn difference(&self, rhs: &IntervalSet) -> IntervalSet {
    let mut res = IntervalSet::empty();
    let mut a = self.intervals.iter().cloned();
    let mut b = rhs.intervals.iter().cloned().peekable();
    // Part of the current interval of `self` not yet cut by `rhs`.
    let mut fragment = a.next();
    while let Some(current) = fragment {
      match b.peek().copied() {
        None => {
          res.push(current);
          res.extend(a.by_ref());
          break;
        }
        Some(cut) if current.upper() <= cut.lower() => {
          res.push(current);
          fragment = a.next();
        }
        Some(cut) if cut.upper() <= current.lower() => {
          b.next();
        }
        Some(cut) => {
          if current.lower() < cut.lower() {
            res.push(Interval::from_bounds(current.lower(), cut.lower()));
          }
          if cut.upper() >= current.upper() {
            // `cut` may still reach into the next interval, keep it.
            fragment = a.next();
          }
          else {
            fragment = Some(Interval::from_bounds(cut.upper(), current.upper()));
            b.next();
          }
        }
      }
    }
    res
  }
}

impl Difference<Interval> for IntervalSet
{
  type Output = IntervalSet;

  fn difference(&self, rhs: &Interval) -> IntervalSet {
    self.difference(&IntervalSet::from_interval(*rhs))
  }
}

impl Complement for IntervalSet
{
  fn complement(&self) -> IntervalSet {
    let mut res = IntervalSet::empty();
    let mut gap_start = f64::NEG_INFINITY;
    for i in &self.intervals {
      if i.lower() != f64::NEG_INFINITY {
        res.push(Interval::from_bounds(gap_start, i.lower()));
      }
      gap_start = i.upper();
    }
    if gap_start != f64::INFINITY {
      res.push(Interval::from_bounds(gap_start, f64::INFINITY));
    }
    res
  }
}

impl Overlap for IntervalSet
{
  fn overlap(&self, rhs: &IntervalSet) -> bool {
    !self.intersection(rhs).is_empty()
  }
}

impl Disjoint for IntervalSet
{
  fn is_disjoint(&self, rhs: &IntervalSet) -> bool {
    !self.overlap(rhs)
  }
}

impl Subset for IntervalSet
{
  fn is_subset(&self, rhs: &IntervalSet) -> bool {
    self.difference(rhs).is_empty()
  }
}

impl Display for IntervalSet
{
  fn fmt(&self, formatter: &mut Formatter) -> Result<(), Error> {
    formatter.write_str("{")?;
    for (idx, i) in self.intervals.iter().enumerate() {
      if idx > 0 {
        formatter.write_str(",")?;
      }
      write!(formatter, "{}", i)?;
    }
    formatter.write_str("}")
  }
}
