use crate::{LabeledExample, Perceptron, PredictionStats, Result};


/// Owns the statistics shared by all models it drives.
#[derive(Debug, Default)]
pub struct Trainer {
    stats: PredictionStats,
}

impl Trainer {
    pub fn new(topic: impl Into<String>) -> Self {
        Self { stats: PredictionStats::new(topic) }
    }

    pub fn train<const SIZE: usize>(&mut self, model: &mut Perceptron<SIZE>, set: &[LabeledExample<SIZE>], epochs: usize) -> Result<()> {
        if set.is_empty() {
            tracing::warn!(model = model.id(), "training on an empty set");
        }
        model.train(set, epochs, &mut self.stats)
    }

    pub fn predict<const SIZE: usize>(&mut self, model: &Perceptron<SIZE>, example: &LabeledExample<SIZE>) -> u8 {
        model.predict(example, &mut self.stats)
    }

    pub fn evaluate<const SIZE: usize>(&mut self, model: &Perceptron<SIZE>, set: &[LabeledExample<SIZE>]) -> Vec<u8> {
        set.iter().map(|example| model.predict(example, &mut self.stats)).collect()
    }

    #[inline(always)]
    pub fn stats(&self) -> &PredictionStats { &self.stats }
}
