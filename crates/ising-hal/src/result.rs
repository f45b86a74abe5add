//! Measurement results.
//!
//! Bitstrings follow the little-endian display convention: character `k`
//! counted from the right holds classical bit `k`, so `"01"` means `c[0] = 1`
//! and `c[1] = 0`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// Histogram of measured bitstrings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: BTreeMap<String, u64>,
}

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a histogram from `(bitstring, count)` pairs, summing repeats.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, u64)>) -> Self {
        let mut counts = Self::new();
        for (bitstring, count) in pairs {
            counts.insert(bitstring, count);
        }
        counts
    }

    /// Add `count` observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Observations of `bitstring`, zero if never seen.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Number of distinct bitstrings.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate in lexicographic bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counts.iter()
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// The most frequent bitstring. Ties go to the lexicographically
    /// smallest one.
    pub fn most_frequent(&self) -> Option<(&String, u64)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&String, u64)>, (k, &v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((k, v)),
            })
    }

    /// Entries sorted by descending count, ties in bitstring order.
    pub fn sorted(&self) -> Vec<(&String, u64)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(k, &v)| (k, v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Relative frequency of each bitstring. Empty when no shots were
    /// recorded.
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        let total = self.total_shots();
        if total == 0 {
            return BTreeMap::new();
        }
        self.counts
            .iter()
            .map(|(k, &v)| (k.clone(), v as f64 / total as f64))
            .collect()
    }

    /// Check the histogram against a run of `shots` over `num_clbits` bits.
    pub fn validate(&self, shots: u32, num_clbits: usize) -> HalResult<()> {
        for bitstring in self.counts.keys() {
            let well_formed = bitstring.len() == num_clbits
                && bitstring.bytes().all(|b| b == b'0' || b == b'1');
            if !well_formed {
                return Err(HalError::MalformedBitstring {
                    bitstring: bitstring.clone(),
                    num_clbits,
                });
            }
        }

        let got = self.total_shots();
        if got != u64::from(shots) {
            return Err(HalError::CountsMismatch {
                expected: u64::from(shots),
                got,
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Counts {
    type Item = (&'a String, &'a u64);
    type IntoIter = std::collections::btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Outcome of running a circuit on a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measured bitstring histogram.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Result with no timing information.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the backend-reported execution time.
    pub fn with_execution_time(mut self, ms: u64) -> Self {
        self.execution_time_ms = Some(ms);
        self
    }

    /// Check the counts against the shot count and `num_clbits`.
    pub fn validate(&self, num_clbits: usize) -> HalResult<()> {
        self.counts.validate(self.shots, num_clbits)
    }
}
