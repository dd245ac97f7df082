use std::fmt;

use crate::stats::DEFAULT_TOPIC;


pub const DEFAULT_NAME: &str = "John Doe";

/// Width of the personality feature vector: conscientiousness, agreeableness,
/// neuroticism, openness, extraversion.
pub const FEATURE_COUNT: usize = 5;

/// A named feature vector with its ground-truth binary class.
///
/// Construction never fails: blank names, out-of-range features and invalid
/// labels are replaced with defaults.
#[derive(Debug, Clone)]
pub struct LabeledExample<const SIZE: usize> {
    name: String,
    features: [f64; SIZE],
    label: u8,
}

pub type Person = LabeledExample<FEATURE_COUNT>;

fn is_blank(name: &str) -> bool { name.trim().is_empty() }

fn clamp_features<const SIZE: usize>(features: &[f64]) -> Option<[f64; SIZE]> {
    let mut result = [0.; SIZE];
    if features.len() != SIZE {
        return None;
    }
    for (r, f) in result.iter_mut().zip(features) {
        *r = if (-1.0..=1.0).contains(f) { *f } else { 0. };
    }
    Some(result)
}

impl<const SIZE: usize> Default for LabeledExample<SIZE> {
    fn default() -> Self {
        Self { name: DEFAULT_NAME.to_string(), features: [0.; SIZE], label: 1 }
    }
}

impl<const SIZE: usize> LabeledExample<SIZE> {
    pub fn new(name: &str, features: &[f64], label: i64) -> Self {
        Self {
            name: if is_blank(name) { DEFAULT_NAME.to_string() } else { name.to_string() },
            features: clamp_features(features).unwrap_or([0.; SIZE]),
            label: if label == 0 { 0 } else { 1 },
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &str { &self.name }
    #[inline(always)]
    pub fn features(&self) -> &[f64; SIZE] { &self.features }
    #[inline(always)]
    pub fn label(&self) -> u8 { self.label }

    pub fn set_name(&mut self, name: &str) {
        if !is_blank(name) {
            self.name = name.to_string();
        }
    }

    pub fn set_features(&mut self, features: &[f64]) {
        if let Some(features) = clamp_features(features) {
            self.features = features;
        }
    }

    pub fn set_label(&mut self, label: i64) {
        if label == 0 || label == 1 {
            self.label = label as u8;
        }
    }

    pub fn describe(&self, topic: &str) -> String {
        format!(
            "This Person's name is {} and they are {} of {}.",
            self.name,
            if self.label == 1 { "a fan" } else { "not a fan" },
            topic
        )
    }
}

impl<const SIZE: usize> PartialEq for LabeledExample<SIZE> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.label == other.label
    }
}

impl<const SIZE: usize> fmt::Display for LabeledExample<SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(DEFAULT_TOPIC))
    }
}
