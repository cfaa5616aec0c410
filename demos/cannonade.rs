// Copyright 2022 Joshua Graffman

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fires a cannon at a wall and reports the largest gap blown into it.
//!
//! Run with `cargo run --example cannonade -- --seed 42`, and `RUST_LOG=debug` to trace every shot.

use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rangeset::gcollections::ops::*;
use rangeset::{Interval, IntervalSet, InvalidInterval};
use std::io::{self, BufRead, Write};

const UNIT: &str = "meter";

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
  /// Length of the wall
  #[clap(long, default_value = "20")]
  wall_length: f64,
  /// Half the width of the hole blown by a single shot
  #[clap(long, default_value = "0.5")]
  half_gap: f64,
  /// Seed of the random generator, random by default
  #[clap(long)]
  seed: Option<u64>,
}

enum Outcome {
  Destroyed,
  LargestGap(f64),
}

fn fire(wall: &IntervalSet, wall_length: f64, half_gap: f64, shots: u32, rng: &mut StdRng)
  -> Result<Outcome, InvalidInterval>
{
  let mut remaining = wall.clone();
  for shot in 0..shots {
    let target = rng.gen::<f64>() * wall_length;
    let hole = Interval::new(target - half_gap, target + half_gap)?;
    remaining = remaining.difference(&hole);
    debug!("shot #{} hits {:.3}, {} pieces left", shot + 1, target, remaining.interval_count());
  }
  if remaining.is_empty() {
    return Ok(Outcome::Destroyed);
  }
  let gaps = remaining.complement().intersection(wall);
  info!("remaining wall {}, gaps {}", remaining, gaps);
  Ok(Outcome::LargestGap(gaps.largest_interval().map_or(0.0, |gap| gap.length())))
}

fn read_shot_count(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Option<u32>> {
  for line in lines {
    if let Ok(count) = line?.trim().parse::<u32>() {
      return Ok(Some(count));
    }
  }
  Ok(None)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  env_logger::init();
  let cli = Cli::parse();

  let wall = IntervalSet::new(0.0, cli.wall_length)?;
  let mut rng = match cli.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let stdin = io::stdin();
  let mut lines = stdin.lock().lines();
  loop {
    println!("There is a {} {} long wall in front of you and you have a cannon.", cli.wall_length, UNIT);
    println!("When you fire your cannon a random spot along this length is targeted and a {} {} space is blown out on either side of the target.", cli.half_gap, UNIT);
    println!("I will tell you the largest combined gap produced by your cannonade.");
    println!("How many times do you wish to fire your cannon? (0 to quit)");
    io::stdout().flush()?;

    let shots = match read_shot_count(&mut lines)? {
      Some(0) | None => break,
      Some(shots) => shots,
    };

    println!();
    match fire(&wall, cli.wall_length, cli.half_gap, shots, &mut rng)? {
      Outcome::Destroyed => println!("Congratulations! You destroyed the entire wall!"),
      Outcome::LargestGap(gap) => println!("You have created a {:.2} {} gap in the wall", gap, UNIT),
    }
    println!();
    println!();
  }
  Ok(())
}
