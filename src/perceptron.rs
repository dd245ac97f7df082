use std::fmt;

use rand::Rng;

use crate::{
    activation::{sigmoid, ActivationKind},
    dataset::{LabeledExample, FEATURE_COUNT},
    error::{Error, Result},
    stats::PredictionStats,
};


pub const LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_ID: i32 = 7;
pub const THRESHOLD: f64 = 0.5;

/// Single-layer perceptron with a sigmoid output, trained by the delta rule.
///
/// Cloning gives the copy form: same id, kind and bias, independent weights.
#[derive(Debug, Clone)]
pub struct Perceptron<const SIZE: usize> {
    id: i32,
    weights: [f64; SIZE],
    bias: f64,
    activation: ActivationKind,
}

pub type Model = Perceptron<FEATURE_COUNT>;


impl<const SIZE: usize> Default for Perceptron<SIZE> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_ID, ActivationKind::Elu)
    }
}

impl<const SIZE: usize> Perceptron<SIZE> {
    pub fn new(id: i32, activation: ActivationKind) -> Self {
        Self::with_rng(id, activation, &mut rand::thread_rng())
    }

    /// Draws every weight and the bias uniformly from `[-1, 1)`.
    pub fn with_rng<R: Rng>(id: i32, activation: ActivationKind, rng: &mut R) -> Self {
        let mut weights = [0.; SIZE];
        for w in weights.iter_mut() {
            *w = rng.gen_range((-1.)..(1.));
        }
        let bias = rng.gen_range((-1.)..(1.));
        Self { id, weights, bias, activation }
    }

    pub fn from_parameters(id: i32, activation: ActivationKind, weights: [f64; SIZE], bias: f64) -> Self {
        Self { id, weights, bias, activation }
    }

    #[inline(always)]
    pub fn id(&self) -> i32 { self.id }
    #[inline(always)]
    pub fn set_id(&mut self, id: i32) { self.id = id }
    #[inline(always)]
    pub fn bias(&self) -> f64 { self.bias }
    #[inline(always)]
    pub fn weights(&self) -> [f64; SIZE] { self.weights }
    #[inline(always)]
    pub fn activation(&self) -> ActivationKind { self.activation }

    /// Forward pass. Returns the activated features together with the
    /// sigmoid of the weighted sum.
    pub fn proceed(&self, features: &[f64; SIZE]) -> ([f64; SIZE], f64) {
        let mut activated = [0.; SIZE];
        for (a, f) in activated.iter_mut().zip(features) {
            *a = self.activation.apply(*f);
        }
        let mut sum = 0.;
        for i in 0..SIZE {
            sum += self.weights[i] * activated[i];
        }
        (activated, sigmoid(sum + self.bias))
    }

    /// Thresholded class of the forward pass. Touches no statistics.
    pub fn classify(&self, features: &[f64; SIZE]) -> u8 {
        let (_, predicted) = self.proceed(features);
        if predicted > THRESHOLD { 1 } else { 0 }
    }

    /// Online delta-rule training over `data` in order.
    ///
    /// The epoch loop bound is inclusive: `epochs + 1` passes are executed
    /// while the history records `epochs`. `epochs == 0` is rejected without
    /// touching the parameters or `stats`.
    pub fn train(&mut self, data: &[LabeledExample<SIZE>], epochs: usize, stats: &mut PredictionStats) -> Result<()> {
        if epochs < 1 {
            tracing::warn!(model = self.id, "invalid number of epochs, the model must train on data at least once");
            return Err(Error::InvalidArgument(format!("epochs must be at least 1, got {}", epochs)));
        }

        for epoch in 0..=epochs {
            for example in data {
                let (activated, predicted) = self.proceed(example.features());
                let error = example.label() as f64 - predicted;

                for (w, a) in self.weights.iter_mut().zip(activated.iter()) {
                    *w += LEARNING_RATE * error * a;
                }
                self.bias += LEARNING_RATE * error;

                tracing::debug!(model = self.id, "epoch {}: error = {:4.2}", epoch, error);
            }
        }

        tracing::info!(model = self.id, samples = data.len(), epochs, "training finished");
        stats.record_training(self.id, data.len(), epochs);
        Ok(())
    }

    /// Classifies `example` and records the outcome in `stats`.
    ///
    /// Every call counts as a prediction, repeated calls on the same example
    /// included, so this is not a pure function of the model.
    pub fn predict(&self, example: &LabeledExample<SIZE>, stats: &mut PredictionStats) -> u8 {
        let class = self.classify(example.features());
        stats.record_prediction(self.id, example.name(), class, example.label());
        class
    }
}

impl<const SIZE: usize> PartialEq for Perceptron<SIZE> {
    /// Ids identify a model; otherwise all parameters must match exactly.
    fn eq(&self, other: &Self) -> bool {
        if self.id == other.id {
            return true;
        }
        self.bias == other.bias
            && self.activation == other.activation
            && self.weights == other.weights
    }
}

impl<const SIZE: usize> fmt::Display for Perceptron<SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "This Model's id is {} and it's activation function type is {}.", self.id, self.activation)
    }
}


#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::dataset::Person;

    fn zeroed(kind: ActivationKind) -> Model {
        Model::from_parameters(1, kind, [0.; FEATURE_COUNT], 0.)
    }

    #[test]
    fn construction_forms() {
        let model = Model::new(1, ActivationKind::Relu);
        assert_eq!(model.id(), 1);
        assert_eq!(model.activation(), ActivationKind::Relu);
        assert_eq!(model.weights().len(), FEATURE_COUNT);
        for w in model.weights() {
            assert!((-1.0..1.0).contains(&w));
        }
        assert!((-1.0..1.0).contains(&model.bias()));

        let default = Model::default();
        assert_eq!(default.id(), 7);
        assert_eq!(default.activation(), ActivationKind::Elu);
    }

    #[test]
    fn seeded_construction_is_reproducible() {
        let a = Model::with_rng(1, ActivationKind::Elu, &mut StdRng::seed_from_u64(3));
        let b = Model::with_rng(2, ActivationKind::Elu, &mut StdRng::seed_from_u64(3));
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.bias(), b.bias());
        assert_eq!(a, b);
    }

    #[test]
    fn copy_is_independent() {
        let original = Model::new(5, ActivationKind::Sigmoid);
        let mut copy = original.clone();
        assert_eq!(copy.id(), original.id());
        assert_eq!(copy.activation(), original.activation());
        assert_eq!(copy.weights(), original.weights());
        assert_eq!(copy.bias(), original.bias());

        let mut stats = PredictionStats::default();
        copy.train(&[Person::new("x", &[0.5; 5], 1)], 3, &mut stats).unwrap();
        assert_ne!(copy.weights(), original.weights());
    }

    #[test]
    fn equality_rules() {
        let a = Model::from_parameters(1, ActivationKind::Relu, [0.1; 5], 0.2);
        let mut b = a.clone();
        b.set_id(2);
        assert_eq!(a, b);

        let c = Model::from_parameters(3, ActivationKind::Relu, [0.1, 0.1, 0.1, 0.1, 0.3], 0.2);
        assert_ne!(a, c);
        let d = Model::from_parameters(4, ActivationKind::Elu, [0.1; 5], 0.2);
        assert_ne!(a, d);

        let same_id = Model::from_parameters(1, ActivationKind::Sigmoid, [0.9; 5], -0.7);
        assert_eq!(a, same_id);
    }

    #[test]
    fn zero_input_sits_on_threshold() {
        let model = zeroed(ActivationKind::Sigmoid);
        let (_, predicted) = model.proceed(&[0.; 5]);
        assert!((predicted - 0.5).abs() < 1e-12);
        assert_eq!(model.classify(&[0.; 5]), 0);
    }

    #[test]
    fn forward_pass_uses_weighted_sum_plus_bias() {
        let model = Model::from_parameters(1, ActivationKind::Relu, [1., -1., 0.5, 0., 2.], 0.25);
        let (activated, predicted) = model.proceed(&[0.4, -0.6, 0.2, 0.9, 0.1]);
        assert_eq!(activated, [0.4, 0., 0.2, 0.9, 0.1]);
        assert!((predicted - sigmoid(0.4 + 0.1 + 0.2 + 0.25)).abs() < 1e-12);
        assert_eq!(model.classify(&[0.4, -0.6, 0.2, 0.9, 0.1]), 1);
    }

    #[test]
    fn train_moves_toward_label() {
        let mut model = zeroed(ActivationKind::Relu);
        let mut stats = PredictionStats::default();
        let data = [Person::new("pos", &[0.5, 0.2, 0.1, 0.3, 0.4], 1)];
        model.train(&data, 1, &mut stats).unwrap();

        for w in model.weights() {
            assert!(w > 0.);
        }
        assert!(model.bias() > 0.);
        assert_eq!(stats.history(), "Model 1: Trained on 1 data points for 1 epochs.\n");
        assert_eq!(stats.total_predictions(), 0);
    }

    #[test]
    fn train_runs_one_extra_pass() {
        let mut model = zeroed(ActivationKind::Sigmoid);
        let mut stats = PredictionStats::default();
        let data = [Person::new("zero", &[0.; 5], 1)];
        model.train(&data, 1, &mut stats).unwrap();

        // sigmoid(0) = 0.5 for every feature, so both passes are reproducible by hand
        let mut weights = [0.; 5];
        let mut bias = 0.;
        for _ in 0..2 {
            let sum: f64 = weights.iter().map(|w| w * 0.5).sum::<f64>() + bias;
            let error = 1. - sigmoid(sum);
            for w in weights.iter_mut() {
                *w += LEARNING_RATE * error * 0.5;
            }
            bias += LEARNING_RATE * error;
        }
        for (a, e) in model.weights().iter().zip(weights.iter()) {
            assert!((a - e).abs() < 1e-12);
        }
        assert!((model.bias() - bias).abs() < 1e-12);
    }

    #[test]
    fn train_rejects_zero_epochs() {
        let mut model = Model::new(1, ActivationKind::Relu);
        let before = model.clone();
        let mut stats = PredictionStats::default();
        let result = model.train(&[Person::default()], 0, &mut stats);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(model.weights().map(f64::to_bits), before.weights().map(f64::to_bits));
        assert_eq!(model.bias().to_bits(), before.bias().to_bits());
        assert_eq!(stats.history(), "");
        assert_eq!(stats.total_predictions(), 0);
    }

    #[test]
    fn predict_records_every_call() {
        let model = Model::new(1, ActivationKind::Relu);
        let person = Person::new("Test", &[0.5, 0.3, -0.2, 0.1, 0.4], 1);
        let mut stats = PredictionStats::default();

        let first = model.predict(&person, &mut stats);
        let second = model.predict(&person, &mut stats);
        assert!(first == 0 || first == 1);
        assert_eq!(first, second);
        assert_eq!(stats.total_predictions(), 2);
        let expected_correct = if first == 1 { 2 } else { 0 };
        assert_eq!(stats.correct_predictions(), expected_correct);
        assert_eq!(stats.history().lines().count(), 2);
    }

    #[test]
    fn display() {
        let model = Model::from_parameters(62, ActivationKind::Relu, [0.; 5], 0.);
        assert_eq!(model.to_string(), "This Model's id is 62 and it's activation function type is relu.");
    }
}
