//! Vectorization, the linear classifier and evaluation.

use crate::types::{FeatureMap, Label};
use crate::Error;
use indexmap::IndexMap;
use log::info;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One-hot vectorizer over observed `name=value` pairs.
///
/// The vocabulary is fixed at fit time; pairs unseen during fitting are
/// silently dropped at transform time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vectorizer {
    vocabulary: IndexMap<String, usize>,
}

impl Vectorizer {
    pub fn fit(features: &[FeatureMap]) -> Self {
        let mut vocabulary = IndexMap::new();

        for map in features {
            for (name, value) in map {
                let len = vocabulary.len();
                vocabulary
                    .entry(format!("{}={}", name, value))
                    .or_insert(len);
            }
        }

        Vectorizer { vocabulary }
    }

    /// The indices of the active columns for this feature mapping, sorted.
    pub fn transform(&self, features: &FeatureMap) -> Vec<usize> {
        let mut indices: Vec<usize> = features
            .iter()
            .filter_map(|(name, value)| {
                self.vocabulary
                    .get(&format!("{}={}", name, value))
                    .copied()
            })
            .collect();
        indices.sort_unstable();

        indices
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

/// Options for training and evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainOptions {
    pub epochs: usize,
    pub learning_rate: f64,
    pub l2: f64,
    /// Held-out fraction used by [Classifier::evaluate].
    pub test_fraction: f64,
    /// Seed for the split shuffle, fixed for reproducibility.
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        TrainOptions {
            epochs: 200,
            learning_rate: 0.1,
            l2: 1e-4,
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Binary logistic regression over sparse binary features.
/// [Label::Adv] is the positive class.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LogisticRegression {
    weights: Vec<f64>,
    bias: f64,
}

impl LogisticRegression {
    fn fit(rows: &[Vec<usize>], labels: &[Label], dimensions: usize, options: &TrainOptions) -> Self {
        let mut weights = vec![0.0; dimensions];
        let mut bias = 0.0;

        for _ in 0..options.epochs {
            for (row, label) in rows.iter().zip(labels) {
                let target = match label {
                    Label::Adv => 1.0,
                    Label::Adj => 0.0,
                };

                let score: f64 = bias + row.iter().map(|&i| weights[i]).sum::<f64>();
                let gradient = sigmoid(score) - target;

                bias -= options.learning_rate * gradient;
                for &i in row {
                    weights[i] -= options.learning_rate * (gradient + options.l2 * weights[i]);
                }
            }
        }

        LogisticRegression { weights, bias }
    }

    fn predict(&self, row: &[usize]) -> Label {
        let score: f64 = self.bias + row.iter().map(|&i| self.weights[i]).sum::<f64>();

        if sigmoid(score) >= 0.5 {
            Label::Adv
        } else {
            Label::Adj
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// The trained classifier state: feature vocabulary plus linear model weights.
/// Immutable after training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
    vectorizer: Vectorizer,
    model: LogisticRegression,
}

impl Classifier {
    /// Fits the vocabulary and the linear model on all given samples.
    pub fn fit(
        features: &[FeatureMap],
        labels: &[Label],
        options: &TrainOptions,
    ) -> Result<Self, Error> {
        if features.is_empty() || features.len() != labels.len() {
            return Err(Error::EmptyTrainingSet);
        }

        let vectorizer = Vectorizer::fit(features);
        let rows: Vec<Vec<usize>> = features.iter().map(|x| vectorizer.transform(x)).collect();

        info!(
            "fitting on {} samples with {} features",
            rows.len(),
            vectorizer.len()
        );

        let model = LogisticRegression::fit(&rows, labels, vectorizer.len(), options);

        Ok(Classifier { vectorizer, model })
    }

    /// Splits into train and held-out partitions, fits on the former and
    /// reports per-label metrics on the latter.
    pub fn evaluate(
        features: &[FeatureMap],
        labels: &[Label],
        options: &TrainOptions,
    ) -> Result<Evaluation, Error> {
        let (train, test) = train_test_split(features.len(), options.test_fraction, options.seed);
        if train.is_empty() || test.is_empty() {
            return Err(Error::EmptyTrainingSet);
        }

        let train_features: Vec<FeatureMap> = train.iter().map(|&i| features[i].clone()).collect();
        let train_labels: Vec<Label> = train.iter().map(|&i| labels[i]).collect();

        let classifier = Classifier::fit(&train_features, &train_labels, options)?;

        let pairs: Vec<(Label, Label)> = test
            .iter()
            .map(|&i| (labels[i], classifier.predict(&features[i])))
            .collect();

        Ok(Evaluation::from_pairs(&pairs))
    }

    pub fn predict(&self, features: &FeatureMap) -> Label {
        self.model.predict(&self.vectorizer.transform(features))
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }
}

/// Shuffles `0..n` with a seeded generator and splits off the test fraction.
/// Returns `(train, test)` index sets.
pub fn train_test_split(n: usize, test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = (n as f64 * test_fraction).round() as usize;
    let test = indices[..n_test].to_vec();
    let train = indices[n_test..].to_vec();

    (train, test)
}

/// Precision, recall and F1 for one label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Held-out metrics per label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub adj: Metrics,
    pub adv: Metrics,
    pub accuracy: f64,
}

impl Evaluation {
    /// Computes metrics from `(gold, predicted)` pairs.
    pub fn from_pairs(pairs: &[(Label, Label)]) -> Self {
        let correct = pairs.iter().filter(|(gold, pred)| gold == pred).count();
        let accuracy = if pairs.is_empty() {
            0.0
        } else {
            correct as f64 / pairs.len() as f64
        };

        Evaluation {
            adj: Self::metrics_for(pairs, Label::Adj),
            adv: Self::metrics_for(pairs, Label::Adv),
            accuracy,
        }
    }

    fn metrics_for(pairs: &[(Label, Label)], label: Label) -> Metrics {
        let tp = pairs
            .iter()
            .filter(|(gold, pred)| *gold == label && *pred == label)
            .count() as f64;
        let fp = pairs
            .iter()
            .filter(|(gold, pred)| *gold != label && *pred == label)
            .count() as f64;
        let fn_ = pairs
            .iter()
            .filter(|(gold, pred)| *gold == label && *pred != label)
            .count() as f64;

        let precision = if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 };
        let recall = if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        Metrics {
            precision,
            recall,
            f1,
            support: (tp + fn_) as usize,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, metrics) in &[(Label::Adj, self.adj), (Label::Adv, self.adv)] {
            writeln!(
                f,
                "{}: precision={:.3} recall={:.3} f1={:.3} support={}",
                label, metrics.precision, metrics.recall, metrics.f1, metrics.support
            )?;
        }
        write!(f, "accuracy={:.3}", self.accuracy)
    }
}
