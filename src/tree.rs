//! A depth-limited, binary-split decision tree for categorical data.
//!
//! [`DecisionTreeBuilder`] configures the target, the candidate features,
//! and the depth limit. [`DecisionTree`] grows the tree
//! by information gain and returns a [`DecisionTreeClassifier`].

pub mod depth;
pub mod evaluator;
pub mod splitter;
pub mod node;
pub(crate) mod builder;
pub(crate) mod dtree;
pub mod classifier;


pub use builder::{DecisionTreeBuilder, DEFAULT_MAX_DEPTH};
pub use classifier::DecisionTreeClassifier;
pub use depth::Depth;
pub use dtree::DecisionTree;
pub use evaluator::{BinaryClass, ClassCounts, Evaluator};
pub use node::Node;
pub use splitter::{Outcome, Splitter};
