use crate::errors::{EstimatorError, Result};
use crate::estimator::{Estimator, FromParams};
use crate::hyperparameters::Hyperparameters;
use log::{debug, warn};
use std::fmt;

/// Base estimator of the library.
///
/// It accepts any set of hyperparameters and implements [`Estimator`] for any
/// kind of data, but `fit`, `predict` and `evaluate` always fail with
/// [`EstimatorError::NotImplemented`]: actual estimators have to provide these
/// operations themselves.
#[derive(Clone, Debug, Default)]
pub struct BaseEstimator;

impl BaseEstimator {
    /// Constructor, hyperparameters are neither stored nor validated.
    pub fn new(params: Hyperparameters) -> Self {
        debug!("BaseEstimator built with {} hyperparameter(s)", params.len());
        BaseEstimator
    }

    fn not_implemented<V>(method: &'static str) -> Result<V> {
        warn!("BaseEstimator::{} called, estimator has to implement it", method);
        Err(EstimatorError::NotImplemented { method })
    }
}

impl FromParams for BaseEstimator {
    type Params = Hyperparameters;

    fn with_params(params: Hyperparameters) -> Self {
        BaseEstimator::new(params)
    }
}

impl<R, T> Estimator<R, T> for BaseEstimator {
    type Prediction = T;
    type Metric = f64;

    fn fit(&mut self, _x: &R, _y: &T) -> Result<&mut Self> {
        Self::not_implemented("fit")
    }

    fn predict(&self, _x: &R) -> Result<T> {
        Self::not_implemented("predict")
    }

    fn evaluate(&self, _x: &R, _y: &T) -> Result<f64> {
        Self::not_implemented("evaluate")
    }
}

impl fmt::Display for BaseEstimator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", <Self as Estimator<(), ()>>::repr(self))
    }
}
