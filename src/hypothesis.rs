//! Defines the `Classifier` trait shared by tree nodes and whole trees.
use crate::dataset::Example;
use crate::error::Result;


/// A trait that predicts a class label for categorical examples
/// and renders itself as indented text.
pub trait Classifier {
    /// Predicts the class label of `example`.
    /// Returns `Err` if the example follows a path the model never learned.
    fn classify(&self, example: &[String]) -> Result<&str>;


    /// Human-readable representation of the model.
    /// `level` is the indentation level of the top-most branch lines.
    fn render(&self, level: usize) -> String;


    /// Predicts the class labels of `examples`.
    /// Stops at the first example that cannot be classified.
    fn classify_all(&self, examples: &[Example]) -> Result<Vec<&str>> {
        examples.iter()
            .map(|example| self.classify(example))
            .collect()
    }
}
