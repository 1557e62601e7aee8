//! Entropy
//!
//! Binary class entropy, information gain and the attribute and label
//! choices ID3 induction is driven by.
use crate::constants::N_LABELS;
use crate::data::{Dataset, DatasetView};
use std::f64::consts::LN_2;

/// Entropy in bits of a label count pair, with 0·log₂0 taken as 0.
pub fn entropy_from_counts(counts: &[usize; N_LABELS]) -> f64 {
    let n: usize = counts.iter().sum();
    if n == 0 {
        return 0.0;
    }
    let mut h = 0.0;
    for &c in counts {
        if c > 0 {
            let p = c as f64 / n as f64;
            h -= p * p.ln();
        }
    }
    h / LN_2
}

/// Binary entropy of the labels in `view`. An empty view has entropy 0.
pub fn class_entropy(view: &DatasetView) -> f64 {
    entropy_from_counts(&view.label_counts())
}

/// Entropy of `view` minus the size weighted entropy of the subsets
/// induced by each legal value of `attribute`.
///
/// Rows holding a value outside the domain fall in no subset but still
/// count towards the total size.
pub fn information_gain(view: &DatasetView, attribute: usize) -> f64 {
    let n = view.len();
    if n == 0 {
        return 0.0;
    }
    let n_values = view.schema().values(attribute).len();
    let mut buckets = vec![[0_usize; N_LABELS]; n_values];
    for row in view.rows() {
        if let Some(v) = row.values[attribute] {
            buckets[v][row.label] += 1;
        }
    }
    let remainder: f64 = buckets
        .iter()
        .map(|b| {
            let size: usize = b.iter().sum();
            // Empty buckets contribute nothing.
            (size as f64 / n as f64) * entropy_from_counts(b)
        })
        .sum();
    class_entropy(view) - remainder
}

/// Active attribute with the highest information gain. Ties go to the
/// attribute that comes first in the schema.
pub fn best_attribute(view: &DatasetView) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for a in view.active_attributes() {
        let gain = information_gain(view, a);
        match best {
            Some((_, g)) if gain <= g => {}
            _ => best = Some((a, gain)),
        }
    }
    best.map(|(a, _)| a)
}

/// Majority label of `view`. Ties go to the label declared first.
pub fn plurality(view: &DatasetView) -> usize {
    let counts = view.label_counts();
    let mut label = 0;
    for (l, &c) in counts.iter().enumerate() {
        if c > counts[label] {
            label = l;
        }
    }
    label
}

/// The label shared by every row of `view`, `None` if the view is empty or mixed.
pub fn single_label(view: &DatasetView) -> Option<usize> {
    let mut rows = view.rows();
    let first = rows.next()?.label;
    rows.all(|r| r.label == first).then_some(first)
}

/// Information gain of every schema attribute on the whole dataset,
/// in schema order.
pub fn root_info_gain(data: &Dataset) -> Vec<(String, f64)> {
    let view = DatasetView::full(data);
    data.schema()
        .attributes()
        .iter()
        .enumerate()
        .map(|(a, name)| (name.clone(), information_gain(&view, a)))
        .collect()
}
