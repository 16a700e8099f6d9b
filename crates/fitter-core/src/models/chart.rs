// ABOUTME: Display-ready chart series derived from weight history
// ABOUTME: Parallel label and value vectors ordered oldest to newest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Chart data for the weight-history view
///
/// `labels[i]` is the `month/day` label for `values[i]`. Both vectors always
/// have the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// `month/day` labels
    pub labels: Vec<String>,
    /// Weights in kilograms
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(label, weight)` pairs
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
