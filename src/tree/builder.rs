use crate::dataset::Dataset;
use crate::error::Result;
use crate::vocabulary::Vocabulary;
use super::depth::Depth;
use super::dtree::DecisionTree;
use super::evaluator::Evaluator;
use super::splitter::Splitter;

/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitree::{DatasetReader, DecisionTreeBuilder};
///
/// let dataset = DatasetReader::default()
///     .file("/path/to/congress.csv")
///     .read()
///     .unwrap();
/// let tree = DecisionTreeBuilder::new(&dataset)
///     .target("class")
///     .features(["vote4", "vote5", "vote6", "vote7"])
///     .max_depth(5)
///     .build()
///     .unwrap();
/// let f = tree.induce();
/// println!("{f}");
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a> {
    dataset: &'a Dataset,
    target: Option<String>,
    features: Option<Vec<String>>,
    max_depth: Depth,
    vocabulary: Vocabulary,
}

impl<'a> DecisionTreeBuilder<'a> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// target: the last attribute,
    /// features: every other attribute in header order,
    /// max_depth: DEFAULT_MAX_DEPTH == 5,
    /// vocabulary: Vocabulary::default(),
    /// ```
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            target: None,
            features: None,
            max_depth: Depth::from(DEFAULT_MAX_DEPTH),
            vocabulary: Vocabulary::default(),
        }
    }

    /// Set the attribute to predict.
    pub fn target<S: AsRef<str>>(mut self, name: S) -> Self {
        self.target = Some(name.as_ref().to_string());
        self
    }

    /// Set the attributes the tree may split on.
    /// Earlier names win ties in information gain.
    pub fn features<I, S>(mut self, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let names = names.into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        self.features = Some(names);
        self
    }

    /// Specify the maximal depth of the tree.
    /// A depth of `0` yields a single leaf.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Depth::from(depth);
        self
    }

    /// Set the binarization rules.
    pub fn vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Build a `DecisionTree`.
    /// Returns `Err` if an attribute name is unknown
    /// or the vocabulary is invalid.
    /// This method consumes `self`.
    pub fn build(self) -> Result<DecisionTree<'a>> {
        self.vocabulary.validate()?;

        let attributes = self.dataset.attributes();
        let target = match self.target {
            Some(name) => self.dataset.index_of(name)?,
            None => attributes.len() - 1,
        };

        let features = match self.features {
            Some(names) => {
                names.iter()
                    .map(|name| self.dataset.index_of(name))
                    .collect::<Result<Vec<_>>>()?
            },
            None => (0..attributes.len()).filter(|&j| j != target).collect(),
        };

        let evaluator = Evaluator::new(
            target, &self.vocabulary.reference_class
        );
        let splitter = Splitter::new(
            self.vocabulary.affirmative_tokens.iter().cloned()
        );

        Ok(DecisionTree::new(
            self.dataset,
            features,
            self.max_depth,
            evaluator,
            splitter,
            self.vocabulary,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;
    use std::io::BufReader;

    fn dataset() -> Dataset {
        let csv = b"\
        vote1,vote2,class\n\
        Yea,Nay,republican\n\
        Nay,Yea,democrat\n";
        Dataset::from_reader(BufReader::new(&csv[..]), true).unwrap()
    }

    #[test]
    fn defaults_use_last_column_as_target() {
        let data = dataset();
        let tree = DecisionTreeBuilder::new(&data).build().unwrap();
        assert_eq!(tree.target(), 2);
        assert_eq!(tree.features(), &[0, 1]);
        assert_eq!(tree.max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn built_tree_is_debuggable() {
        let data = dataset();
        let tree = DecisionTreeBuilder::new(&data)
            .features(["vote2"])
            .build();
        let text = format!("{tree:?}");
        assert!(text.starts_with("Ok(DecisionTree {"), "got {text}");
        assert!(text.contains("features: [1]"), "got {text}");
    }

    #[test]
    fn explicit_names_are_resolved() {
        let data = dataset();
        let tree = DecisionTreeBuilder::new(&data)
            .target("class")
            .features(["vote2"])
            .max_depth(0)
            .build()
            .unwrap();
        assert_eq!(tree.target(), 2);
        assert_eq!(tree.features(), &[1]);
        assert_eq!(tree.max_depth(), 0);
    }

    #[test]
    fn unknown_target_is_an_error() {
        let data = dataset();
        let err = DecisionTreeBuilder::new(&data)
            .target("party")
            .build()
            .unwrap_err();
        assert!(matches!(err, TreeError::UnknownAttribute { name } if name == "party"));
    }

    #[test]
    fn unknown_feature_is_an_error() {
        let data = dataset();
        let err = DecisionTreeBuilder::new(&data)
            .features(["vote1", "vote3"])
            .build()
            .unwrap_err();
        assert!(matches!(err, TreeError::UnknownAttribute { name } if name == "vote3"));
    }

    #[test]
    fn invalid_vocabulary_is_an_error() {
        let data = dataset();
        let vocabulary = Vocabulary {
            affirmative_tokens: Vec::new(),
            ..Vocabulary::default()
        };
        let err = DecisionTreeBuilder::new(&data)
            .vocabulary(vocabulary)
            .build()
            .unwrap_err();
        assert!(matches!(err, TreeError::InvalidVocabulary(_)));
    }
}
