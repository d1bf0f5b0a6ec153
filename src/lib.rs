/*!
This library defines the contract shared by the estimators of a small machine learning
library: an estimator is built from hyperparameters, fitted to labeled data, then used
to predict labels of new data and to evaluate its predictive performance.

The contract is the [Estimator] trait, generic over the feature data `R` and the label
data `T`. [BaseEstimator] implements it for any data while failing on every core operation
with [EstimatorError::NotImplemented]: it marks capabilities an estimator has not provided.

Example:
```
use simple_ml::{BaseEstimator, Estimator, Hyperparameters};
use ndarray::array;

let mut base = BaseEstimator::new(Hyperparameters::new().set("alpha", 0.1).set("max_iter", 100));
let err = base.fit(&array![[1., 2.]], &array![1.]).unwrap_err();
assert_eq!(Some("fit"), err.missing_method());
assert_eq!("<BaseEstimator>", base.to_string());
```
*/
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
mod base;
mod errors;
mod estimator;
mod hyperparameters;

pub use base::*;
pub use errors::*;
pub use estimator::*;
pub use hyperparameters::*;
