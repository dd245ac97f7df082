use std::fmt;


pub const DEFAULT_TOPIC: &str = "ChatGPT";

/// Running prediction counters and the history log, shared by every model
/// driven from the same harness. There is no reset: counters only grow.
#[derive(Debug, Clone)]
pub struct PredictionStats {
    total_predictions: u64,
    correct_predictions: u64,
    history: String,
    topic: String,
}

impl Default for PredictionStats {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC)
    }
}

impl PredictionStats {
    pub fn new(topic: impl Into<String>) -> Self {
        Self { total_predictions: 0, correct_predictions: 0, history: String::new(), topic: topic.into() }
    }

    pub fn record_training(&mut self, model_id: i32, samples: usize, epochs: usize) {
        self.history.push_str(&format!("Model {}: Trained on {} data points for {} epochs.\n", model_id, samples, epochs));
    }

    pub fn record_prediction(&mut self, model_id: i32, subject: &str, predicted: u8, label: u8) {
        self.total_predictions += 1;
        if predicted == label {
            self.correct_predictions += 1;
        }
        let verdict = if predicted == 0 { "not be" } else { "be" };
        self.history.push_str(&format!("Model {}: Predicted {} to {} a fan of {}.\n", model_id, subject, verdict, self.topic));
    }

    #[inline(always)]
    pub fn total_predictions(&self) -> u64 { self.total_predictions }
    #[inline(always)]
    pub fn correct_predictions(&self) -> u64 { self.correct_predictions }
    #[inline(always)]
    pub fn history(&self) -> &str { &self.history }
    #[inline(always)]
    pub fn topic(&self) -> &str { &self.topic }

    /// Percentage of correct predictions, `0.0` before the first prediction.
    pub fn accuracy(&self) -> f64 {
        if self.total_predictions < 1 {
            0.
        } else {
            self.correct_predictions as f64 / self.total_predictions as f64 * 100.
        }
    }
}

impl fmt::Display for PredictionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model Statistics")?;
        writeln!(f, "Total Predictions made: {}", self.total_predictions)?;
        writeln!(f, "Overall accuracy: {:.2}%", self.accuracy())?;
        writeln!(f, "Model History:")?;
        if self.history.trim().is_empty() {
            writeln!(f, "None!")
        } else {
            write!(f, "{}", self.history)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_is_zero_without_predictions() {
        let stats = PredictionStats::default();
        assert_eq!(stats.accuracy(), 0.);
        assert_eq!(stats.total_predictions(), 0);
        assert!(stats.to_string().contains("None!"));
    }

    #[test]
    fn accuracy_tracks_correct_ratio() {
        let mut stats = PredictionStats::default();
        stats.record_prediction(1, "a", 1, 1);
        stats.record_prediction(1, "b", 0, 1);
        stats.record_prediction(1, "c", 0, 0);
        assert_eq!(stats.total_predictions(), 3);
        assert_eq!(stats.correct_predictions(), 2);
        assert!((stats.accuracy() - 200. / 3.).abs() < 1e-9);
        assert!(stats.to_string().contains("Overall accuracy: 66.67%"));
    }

    #[test]
    fn history_lines() {
        let mut stats = PredictionStats::new("Rust");
        stats.record_training(32, 3, 10);
        stats.record_prediction(32, "Ada", 0, 1);
        stats.record_prediction(32, "Linus", 1, 1);
        assert_eq!(
            stats.history(),
            "Model 32: Trained on 3 data points for 10 epochs.\n\
             Model 32: Predicted Ada to not be a fan of Rust.\n\
             Model 32: Predicted Linus to be a fan of Rust.\n"
        );
        assert!(!stats.to_string().contains("None!"));
    }
}
