//! Single-layer perceptron that classifies people as fans or non-fans of a
//! technology from five personality traits.

use colored::Colorize;

pub mod activation;
pub mod config;
pub mod dataset;
mod error;
mod perceptron;
mod stats;
mod trainer;

pub use {
    activation::ActivationKind,
    dataset::{Dataset, LabeledExample, Person, FEATURE_COUNT},
    error::*,
    perceptron::*,
    stats::*,
    trainer::*,
};


/// Prints `arr` on one line, shading each value from red (-1) to green (+1).
pub fn print_array<const SIZE: usize>(comment: &str, arr: &[f64; SIZE]) {
    print!("{}", comment);
    for num in arr.iter() {
        let (r, g, b) = shade(*num);
        print!("{}, ", format!("{:+.5}", num).truecolor(r, g, b));
    }
    println!();
}

fn shade(v: f64) -> (u8, u8, u8) {
    let t = (v.clamp(-1., 1.) + 1.) / 2.;
    (((1. - t) * 255.) as u8, (t * 255.) as u8, 0)
}
