//! Scenario files describing which people to classify and which models to
//! train on them. YAML and JSON are accepted, chosen by file extension.

use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::{
    dataset::{Dataset, Person, FEATURE_COUNT},
    error::{Error, Result},
    stats::DEFAULT_TOPIC,
    ActivationKind,
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleSpec {
    pub name: String,
    pub features: Vec<f64>,
    pub label: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub id: i32,
    pub activation: ActivationKind,
    pub epochs: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Technology the people are or aren't fans of.
    #[serde(default = "default_topic")]
    pub topic: String,
    /// Seeds model initialization when present.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub examples: Vec<ExampleSpec>,
    #[serde(default)]
    pub models: Vec<ModelSpec>,
}

fn default_topic() -> String { DEFAULT_TOPIC.to_string() }

impl Default for ScenarioConfig {
    fn default() -> Self {
        let example = |name: &str, features: &[f64], label| ExampleSpec { name: name.to_string(), features: features.to_vec(), label };
        let model = |id, activation, epochs| ModelSpec { id, activation, epochs };
        Self {
            topic: default_topic(),
            seed: None,
            examples: vec![
                example("Showmick Das", &[0.9, 0.6, -0.3, 0.2, 0.5], 0),
                example("John Doe", &[0.; FEATURE_COUNT], 1),
                example("Ronjan Mian", &[0.82, 0.54, -0.23, 0.21, 0.58], 0),
            ],
            models: vec![
                model(32, ActivationKind::Elu, 10),
                model(47, ActivationKind::Sigmoid, 20),
                model(62, ActivationKind::Relu, 30),
            ],
        }
    }
}

impl ScenarioConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&std::fs::read_to_string(path)?),
            Some("json") => Self::from_json(&std::fs::read_to_string(path)?),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_yaml(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Dataset<FEATURE_COUNT> for ScenarioConfig {
    fn examples(&self) -> Vec<Person> {
        self.examples.iter().map(|e| Person::new(&e.name, &e.features, e.label)).collect()
    }

    fn class_name(&self, class: u8) -> Option<String> {
        match class {
            0 => Some(format!("not a fan of {}", self.topic)),
            1 => Some(format!("a fan of {}", self.topic)),
            _ => None,
        }
    }
}
