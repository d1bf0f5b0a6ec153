use crate::errors::Result;
use linfa::dataset::Records;
use linfa::DatasetBase;

/// A trait for estimators which can be built from a configuration value.
///
/// Each estimator picks its own `Params` type, typically a struct with the
/// options it recognizes.
pub trait FromParams {
    /// Configuration accepted at construction
    type Params;

    /// Build an unfitted estimator from given `params`
    fn with_params(params: Self::Params) -> Self;
}

/// The contract every estimator of the library has to fulfill.
///
/// `R` is the type of the feature data `x` (rows are samples, columns are features)
/// and `T` the type of the labels `y`, paired positionally with the rows of `x`.
/// Neither is constrained here: an estimator chooses the containers it works with
/// (usually ndarray `Array2<F>` and `Array1<F>`).
///
/// ```
/// use simple_ml::{Estimator, EstimatorError, Result};
///
/// struct MeanRegressor {
///     mean: f64,
/// }
///
/// impl Estimator<Vec<f64>, Vec<f64>> for MeanRegressor {
///     type Prediction = Vec<f64>;
///     type Metric = f64;
///
///     fn fit(&mut self, _x: &Vec<f64>, y: &Vec<f64>) -> Result<&mut Self> {
///         if y.is_empty() {
///             return Err(EstimatorError::InvalidValue("no training labels".to_string()));
///         }
///         self.mean = y.iter().sum::<f64>() / y.len() as f64;
///         Ok(self)
///     }
///
///     fn predict(&self, x: &Vec<f64>) -> Result<Vec<f64>> {
///         Ok(vec![self.mean; x.len()])
///     }
///
///     fn evaluate(&self, x: &Vec<f64>, y: &Vec<f64>) -> Result<f64> {
///         let pred = self.predict(x)?;
///         Ok(pred.iter().zip(y).map(|(p, t)| (p - t).abs()).sum::<f64>() / y.len() as f64)
///     }
/// }
///
/// let mut model = MeanRegressor { mean: 0. };
/// let x = vec![1., 2., 3.];
/// let y = vec![2., 4., 6.];
/// let pred = model.fit(&x, &y)?.predict(&x)?;
/// assert_eq!(vec![4., 4., 4.], pred);
/// assert_eq!("<MeanRegressor>", model.repr());
/// # Ok::<(), EstimatorError>(())
/// ```
pub trait Estimator<R, T> {
    /// Labels returned by [`Estimator::predict`]
    type Prediction;
    /// Performance measure returned by [`Estimator::evaluate`] (accuracy, RMSE, R2...)
    type Metric;

    /// Fit the estimator to training data `x` and labels `y`.
    ///
    /// Returns the estimator itself to allow chaining, e.g. `model.fit(&x, &y)?.predict(&x)`.
    fn fit(&mut self, x: &R, y: &T) -> Result<&mut Self>;

    /// Predict one label per row of `x` using the fitted estimator.
    fn predict(&self, x: &R) -> Result<Self::Prediction>;

    /// Evaluate predictions on `x` against true labels `y` with the estimator metric.
    fn evaluate(&self, x: &R, y: &T) -> Result<Self::Metric>;

    /// Short textual representation: the estimator type name within angle brackets
    /// (ex: `<LinearModel>`).
    fn repr(&self) -> String {
        format!("<{}>", short_type_name::<Self>())
    }

    /// Fit the estimator to the records and targets of a linfa dataset
    fn fit_dataset(&mut self, dataset: &DatasetBase<R, T>) -> Result<&mut Self>
    where
        R: Records,
    {
        self.fit(&dataset.records, &dataset.targets)
    }

    /// Evaluate the estimator on the records and targets of a linfa dataset
    fn evaluate_dataset(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Metric>
    where
        R: Records,
    {
        self.evaluate(&dataset.records, &dataset.targets)
    }
}

/// Type name of `E` without module paths nor generic arguments
/// (ex: `my_crate::models::LinearModel<f64>` gives `LinearModel`).
///
/// Compound types keep their structure with each component shortened:
/// `(a::X, b::Y<f64>)` gives `(X, Y)` and `[a::X; 3]` gives `[X; 3]`.
pub fn short_type_name<E: ?Sized>() -> String {
    let name = std::any::type_name::<E>();

    // drop generic arguments, `->` is not a closing bracket
    let mut bare = String::with_capacity(name.len());
    let mut depth = 0usize;
    let mut prev = ' ';
    for c in name.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 && prev != '-' => depth -= 1,
            _ if depth == 0 => bare.push(c),
            _ => (),
        }
        prev = c;
    }

    // keep the last segment of each path
    let mut short = String::with_capacity(bare.len());
    let mut path = String::new();
    for c in bare.chars().chain(std::iter::once(' ')) {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            if let Some(last) = path.rsplit("::").next() {
                short.push_str(last);
            }
            path.clear();
            short.push(c);
        }
    }
    short.pop();
    short
}
