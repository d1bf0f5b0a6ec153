use std::collections::btree_map::{BTreeMap, Iter};
use std::fmt;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// A hyperparameter value
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serializable", serde(untagged))]
pub enum HyperValue {
    /// Flag option
    Bool(bool),
    /// Integer option (iteration counts, depths, seeds...)
    Int(i64),
    /// Real valued option (learning rates, regularization...)
    Float(f64),
    /// Named choice
    Text(String),
}

impl HyperValue {
    /// Flag value, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer value, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Integers are widened so that `max_iter = 100` reads as `100.0`
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Text value, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for HyperValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Text(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<bool> for HyperValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for HyperValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<i64> for HyperValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

/// Sizes beyond `i64::MAX` are kept as [`HyperValue::Float`]
impl From<usize> for HyperValue {
    fn from(v: usize) -> Self {
        i64::try_from(v)
            .map(Self::Int)
            .unwrap_or(Self::Float(v as f64))
    }
}

impl From<f32> for HyperValue {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<f64> for HyperValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for HyperValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for HyperValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Open-ended set of named options given to an estimator at construction.
///
/// No schema, no validation and no default values are attached to the names:
/// each estimator decides which options it recognizes.
///
/// ```
/// use simple_ml::Hyperparameters;
///
/// let params = Hyperparameters::new().set("alpha", 0.1).set("max_iter", 100);
/// assert_eq!(Some(0.1), params.get("alpha").and_then(|v| v.as_float()));
/// assert_eq!(2, params.len());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serializable", serde(transparent))]
pub struct Hyperparameters(BTreeMap<String, HyperValue>);

impl Hyperparameters {
    /// Empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` option to `value`, replacing any previous value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<HyperValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Value of `name` option, if set
    pub fn get(&self, name: &str) -> Option<&HyperValue> {
        self.0.get(name)
    }

    /// Whether `name` option is set
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no option is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Options in name order
    pub fn iter(&self) -> Iter<'_, String, HyperValue> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<HyperValue>> FromIterator<(K, V)> for Hyperparameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Hyperparameters(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Hyperparameters {
    type Item = (&'a String, &'a HyperValue);
    type IntoIter = Iter<'a, String, HyperValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Hyperparameters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let opts: Vec<String> = self.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        write!(f, "{}", opts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_last_value() {
        let params = Hyperparameters::new()
            .set("kernel", "linear")
            .set("kernel", "rbf")
            .set("verbose", true);
        assert_eq!(2, params.len());
        assert_eq!(Some("rbf"), params.get("kernel").and_then(|v| v.as_str()));
        assert_eq!(Some(true), params.get("verbose").and_then(|v| v.as_bool()));
        assert!(!params.contains("alpha"));
    }

    #[test]
    fn test_collect_from_pairs() {
        let params: Hyperparameters = [("max_iter", 100), ("seed", 42)].into_iter().collect();
        assert_eq!(Some(100), params.get("max_iter").and_then(|v| v.as_int()));
        assert_eq!(Some(42.), params.get("seed").and_then(|v| v.as_float()));
        assert_eq!(None, params.get("seed").and_then(|v| v.as_str()));
    }

    #[test]
    fn test_usize_values_keep_their_magnitude() {
        let params = Hyperparameters::new()
            .set("n_start", 20usize)
            .set("max_iter", usize::MAX);
        assert_eq!(Some(20), params.get("n_start").and_then(|v| v.as_int()));
        let max_iter = params.get("max_iter").expect("max_iter is set");
        if usize::BITS < 64 {
            assert_eq!(Some(usize::MAX as i64), max_iter.as_int());
        } else {
            assert_eq!(None, max_iter.as_int());
            assert_eq!(Some(usize::MAX as f64), max_iter.as_float());
            assert!(max_iter.as_float().unwrap() > 0.);
        }
    }

    #[test]
    fn test_display_in_name_order() {
        let params = Hyperparameters::new()
            .set("max_iter", 100)
            .set("alpha", 0.5)
            .set("tol", 1.0)
            .set("solver", "sgd");
        assert_eq!(
            "alpha=0.5, max_iter=100, solver=\"sgd\", tol=1.0",
            params.to_string()
        );
        assert_eq!("", Hyperparameters::new().to_string());
    }

    #[cfg(feature = "serializable")]
    #[test]
    fn test_read_options_from_json() {
        let params: Hyperparameters =
            serde_json::from_str(r#"{"alpha": 0.1, "max_iter": 100, "fit_intercept": true}"#)
                .expect("valid options");
        assert_eq!(Some(&HyperValue::Float(0.1)), params.get("alpha"));
        assert_eq!(Some(&HyperValue::Int(100)), params.get("max_iter"));
        assert_eq!(Some(&HyperValue::Bool(true)), params.get("fit_intercept"));

        let json = serde_json::to_string(&params).expect("serializable options");
        assert_eq!(r#"{"alpha":0.1,"fit_intercept":true,"max_iter":100}"#, json);
    }
}
