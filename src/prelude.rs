//! Exports the standard types and traits.
//!
pub use crate::dataset::{
    Dataset,
    DatasetReader,
    Example,
};


pub use crate::tree::{
    // Induction ------------------------------
    DecisionTree,
    DecisionTreeBuilder,
    Depth,
    DEFAULT_MAX_DEPTH,


    // Scoring and splitting ------------------
    BinaryClass,
    ClassCounts,
    Evaluator,
    Outcome,
    Splitter,


    // Model ----------------------------------
    DecisionTreeClassifier,
    Node,
};


pub use crate::hypothesis::Classifier;


pub use crate::error::{Result, TreeError};
pub use crate::vocabulary::Vocabulary;
