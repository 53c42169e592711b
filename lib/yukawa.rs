//! Categorical suppression weights for fusion paths.
//!
//! A path through a sequence of anyons is weighted by the inverse product of
//! their quantum dimensions,
//! ```math
//! w = \prod_k d_{a_k}^{-1}.
//! ```

use std::collections::HashMap;
use tracing::trace;
use crate::utils::{ trim_label, owned_label };

/// Mapping from anyon label to quantum dimension.
///
/// Labels without an entry have dimension 1. Keys are trimmed on insertion.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "HashMap<String, f64>", into = "HashMap<String, f64>")
)]
pub struct QuantumDims {
    dims: HashMap<String, f64>,
}

impl QuantumDims {
    pub fn new() -> Self { Self::default() }

    pub fn insert<S>(&mut self, label: S, dim: f64) -> Option<f64>
    where S: AsRef<str>
    {
        return self.dims.insert(owned_label(label), dim);
    }

    /// Dimension of `label` after trimming, defaulting to 1.
    pub fn get(&self, label: &str) -> f64 {
        return self.dims.get(trim_label(label)).copied().unwrap_or(1.0);
    }

    pub fn len(&self) -> usize { self.dims.len() }

    pub fn is_empty(&self) -> bool { self.dims.is_empty() }

    /// Total quantum dimension $`\mathcal{D} = \sqrt{\sum_a d_a^2}`$ over the
    /// labels present in the map.
    pub fn total_dimension(&self) -> f64 {
        return self.dims.values().map(|d| d * d).sum::<f64>().sqrt();
    }
}

impl<S> FromIterator<(S, f64)> for QuantumDims
where S: AsRef<str>
{
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = (S, f64)>
    {
        let mut dims = Self::new();
        iter.into_iter().for_each(|(label, d)| { dims.insert(label, d); });
        return dims;
    }
}

impl From<HashMap<String, f64>> for QuantumDims {
    fn from(dims: HashMap<String, f64>) -> Self { dims.into_iter().collect() }
}

impl From<QuantumDims> for HashMap<String, f64> {
    fn from(dims: QuantumDims) -> Self { dims.dims }
}

/// Inverse product of the quantum dimensions of `objects`.
///
/// Returns 0 rather than dividing by zero if the product vanishes. An empty
/// path has weight 1.
///
/// ```
/// use qgf::yukawa::{ QuantumDims, estimate_path_weight };
///
/// let dims: QuantumDims = [("sigma", 2.0_f64.sqrt())].into_iter().collect();
/// let w = estimate_path_weight(&["sigma", "sigma", "psi"], &dims);
/// assert!((w - 0.5).abs() < 1e-12);
/// ```
pub fn estimate_path_weight<S>(objects: &[S], dims: &QuantumDims) -> f64
where S: AsRef<str>
{
    let prod: f64
        = objects.iter()
        .map(|obj| dims.get(obj.as_ref()))
        .product();
    let weight = if prod != 0.0 { 1.0 / prod } else { 0.0 };
    trace!(len = objects.len(), prod, weight, "path weight");
    return weight;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_has_unit_weight() {
        let none: [&str; 0] = [];
        assert_eq!(estimate_path_weight(&none, &QuantumDims::new()), 1.0);
    }

    #[test]
    fn zero_dimension_gives_zero_weight() {
        let dims: QuantumDims = [("a", 0.0)].into_iter().collect();
        assert_eq!(estimate_path_weight(&["a"], &dims), 0.0);
        assert_eq!(estimate_path_weight(&["b", "a", "b"], &dims), 0.0);
    }

    #[test]
    fn missing_labels_default_to_one() {
        let dims: QuantumDims = [("tau", 2.0)].into_iter().collect();
        assert_eq!(dims.get("phi"), 1.0);
        assert_eq!(estimate_path_weight(&["tau", "phi", "tau"], &dims), 0.25);
    }

    #[test]
    fn object_labels_are_trimmed() {
        let dims: QuantumDims = [(" tau ", 4.0)].into_iter().collect();
        assert_eq!(dims.get("tau"), 4.0);
        assert_eq!(
            estimate_path_weight(&[String::from("  tau\n")], &dims),
            0.25,
        );
    }

    #[test]
    fn total_dimension_of_ising() {
        let dims: QuantumDims
            = [("1", 1.0), ("sigma", 2.0_f64.sqrt()), ("psi", 1.0)]
            .into_iter()
            .collect();
        assert!((dims.total_dimension() - 2.0).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn dims_deserialize_from_map() {
        let dims: QuantumDims
            = serde_json::from_str(r#"{"tau": 1.618, "1": 1.0}"#).unwrap();
        assert_eq!(dims.get("tau"), 1.618);
        assert_eq!(dims.len(), 2);
    }

    #[test]
    fn map_conversion_trims_keys() {
        let raw: HashMap<String, f64>
            = [(String::from(" tau "), 4.0)].into_iter().collect();
        let dims = QuantumDims::from(raw);
        assert_eq!(dims.get("tau"), 4.0);
        let built: QuantumDims = [("tau", 4.0)].into_iter().collect();
        assert_eq!(dims, built);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_keys_are_trimmed() {
        let dims: QuantumDims
            = serde_json::from_str(r#"{" tau ": 4.0}"#).unwrap();
        assert_eq!(dims.get("tau"), 4.0);
        let built: QuantumDims = [("tau", 4.0)].into_iter().collect();
        assert_eq!(dims, built);
        assert_eq!(serde_json::to_string(&dims).unwrap(), r#"{"tau":4.0}"#);
    }
}
