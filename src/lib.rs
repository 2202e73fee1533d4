#![warn(missing_docs)]

//!
//! A crate that grows binary decision trees from categorical data.
//!
//! The learner follows the classic top-down induction:
//! at every node it picks the attribute with the largest
//! information gain, splits the examples into an affirmative
//! and a negative group, and recurses until the examples are pure,
//! the attributes run out, or the depth limit is reached.
//!
//! Both the target and the features are binarized through a
//! [`Vocabulary`].
//! The default vocabulary reads congressional voting records:
//! the target is `republican` or not,
//! and a vote is affirmative if it is `Yea` or `Present`.
//!
//! ```no_run
//! use minitree::DatasetReader;
//!
//! let dataset = DatasetReader::default()
//!     .file("congress_small.csv")
//!     .read()
//!     .unwrap();
//! let f = minitree::induce(
//!     &dataset, "class", &["vote4", "vote5", "vote6", "vote7"], 5
//! ).unwrap();
//! print!("{f}");
//! ```

pub mod error;
pub mod vocabulary;
pub mod dataset;
pub mod hypothesis;
pub mod tree;
pub mod prelude;


pub use error::{Result, TreeError};
pub use vocabulary::Vocabulary;

pub use dataset::{Dataset, DatasetReader, Example};

pub use hypothesis::Classifier;

pub use tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
};


/// Grow a decision tree that predicts `target_name`
/// from `feature_names` under the default [`Vocabulary`].
///
/// A `depth_limit` of `0` returns a single plurality leaf.
/// Returns `Err` if one of the names is not an attribute of `dataset`.
pub fn induce<S: AsRef<str>>(
    dataset:       &Dataset,
    target_name:   &str,
    feature_names: &[S],
    depth_limit:   usize,
) -> Result<DecisionTreeClassifier>
{
    let tree = DecisionTreeBuilder::new(dataset)
        .target(target_name)
        .features(feature_names)
        .max_depth(depth_limit)
        .build()?;
    Ok(tree.induce())
}
