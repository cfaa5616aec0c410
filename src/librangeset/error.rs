// Copyright 2022 Joshua Graffman

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised when building intervals.

use thiserror::Error;

/// Raised when the bounds given to an interval constructor do not describe a non-empty half-open range, that is when `min < max` does not hold. NaN bounds are rejected as well.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid interval [{min}..{max}): the lower bound must be strictly less than the upper bound")]
pub struct InvalidInterval {
  pub min: f64,
  pub max: f64
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn message_names_bounds() {
    let err = InvalidInterval { min: 5.0, max: 3.0 };
    assert_eq!(err.to_string(),
      "invalid interval [5..3): the lower bound must be strictly less than the upper bound");
  }
}
