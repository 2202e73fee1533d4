use rayon::prelude::*;
use tracing::{debug, info, trace};

use crate::dataset::{Dataset, Example};
use crate::error::Result;
use crate::hypothesis::Classifier;
use crate::vocabulary::Vocabulary;

use super::{
    classifier::DecisionTreeClassifier,
    depth::Depth,
    evaluator::{BinaryClass, Evaluator},
    node::Node,
    splitter::{Outcome, Splitter},
};

use std::fmt;

/// The decision tree induction algorithm.
/// Given a [`Dataset`] of categorical examples,
/// [`DecisionTree`] grows a binary tree top-down,
/// splitting on the attribute with the largest information gain,
/// and outputs a [`DecisionTreeClassifier`].
///
/// The recursion follows `DECISION-TREE-LEARNING` of the book:
/// Artificial Intelligence: A Modern Approach
/// by Stuart Russell and Peter Norvig,
/// with an additional depth limit.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use std::io::BufReader;
/// use minitree::{Classifier, Dataset, DecisionTreeBuilder};
///
/// let csv = b"voteX,class\n\
///     Yea,republican\n\
///     Yea,republican\n\
///     Nay,democrat\n\
///     Nay,democrat\n";
/// let dataset = Dataset::from_reader(BufReader::new(&csv[..]), true)
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&dataset)
///     .target("class")
///     .features(["voteX"])
///     .max_depth(1)
///     .build()
///     .unwrap();
/// let f = tree.induce();
///
/// let example = vec!["Nay".to_string(), "?".to_string()];
/// assert_eq!(f.classify(&example).unwrap(), "Democrats");
/// ```
#[derive(Debug)]
pub struct DecisionTree<'a> {
    dataset:    &'a Dataset,
    features:   Vec<usize>,
    max_depth:  Depth,
    evaluator:  Evaluator,
    splitter:   Splitter,
    vocabulary: Vocabulary,
}

impl<'a> DecisionTree<'a> {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        dataset:    &'a Dataset,
        features:   Vec<usize>,
        max_depth:  Depth,
        evaluator:  Evaluator,
        splitter:   Splitter,
        vocabulary: Vocabulary,
    ) -> Self
    {
        Self { dataset, features, max_depth, evaluator, splitter, vocabulary, }
    }

    /// Index of the target attribute.
    pub fn target(&self) -> usize {
        self.evaluator.target()
    }

    /// Indices of the candidate attributes, in tie-breaking order.
    pub fn features(&self) -> &[usize] {
        &self.features[..]
    }

    /// The depth limit.
    pub fn max_depth(&self) -> Depth {
        self.max_depth
    }

    /// The evaluator used to score splits.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// The splitter used to partition examples.
    pub fn splitter(&self) -> &Splitter {
        &self.splitter
    }

    /// Grow a tree over every example of the dataset.
    pub fn induce(&self) -> DecisionTreeClassifier {
        let examples = self.dataset.examples()
            .iter()
            .collect::<Vec<_>>();
        info!(
            examples = examples.len(),
            features = self.features.len(),
            max_depth = %self.max_depth,
            "growing a decision tree"
        );

        let root = self.grow(&examples, &self.features, &[], self.max_depth);
        DecisionTreeClassifier::from(root)
    }

    /// Grow a subtree for `examples`.
    /// `parent` is the example set of the caller,
    /// used when `examples` is empty.
    fn grow(
        &self,
        examples:   &[&'a Example],
        attributes: &[usize],
        parent:     &[&'a Example],
        depth:      Depth,
    ) -> Box<Node>
    {
        // The depth limit is checked before anything else,
        // so a zero depth never looks at the attributes.
        if depth.is_exhausted() {
            return self.plurality_leaf(examples, "depth limit");
        }

        if examples.is_empty() {
            return self.plurality_leaf(parent, "no examples");
        }

        if let Some(class) = self.evaluator.counts(examples).pure_class() {
            return self.leaf(class, "pure");
        }

        if attributes.is_empty() {
            return self.plurality_leaf(examples, "no attributes");
        }

        let (best, gain) = self.best_attribute(examples, attributes);
        let name = self.dataset.attributes()[best].clone();

        let mut rest = attributes.to_vec();
        if let Some(pos) = rest.iter().position(|&a| a == best) {
            rest.remove(pos);
        }

        let partitions = self.splitter.split(best, examples);
        debug!(
            attribute = %name,
            gain,
            affirmative = partitions[0].len(),
            negative = partitions[1].len(),
            "split"
        );

        let depth = depth - 1;
        let children = Outcome::ALL.map(|outcome| {
            let part = &partitions[outcome.index()];
            let child = self.grow(part, &rest, examples, depth);
            (self.outcome_label(outcome).to_string(), child)
        });

        Box::new(Node::branch(best, name, children))
    }

    /// Returns the attribute with the largest information gain
    /// and the gain itself.
    /// The first attribute in `attributes` wins ties.
    fn best_attribute(&self, examples: &[&'a Example], attributes: &[usize])
        -> (usize, f64)
    {
        let gains = attributes.par_iter()
            .map(|&attribute| {
                let partitions = self.splitter.split(attribute, examples);
                self.evaluator.information_gain(examples, &partitions)
            })
            .collect::<Vec<f64>>();

        let mut best = (attributes[0], gains[0]);
        for (&attribute, &gain) in attributes.iter().zip(&gains).skip(1) {
            if gain > best.1 {
                best = (attribute, gain);
            }
        }
        best
    }

    /// A leaf predicting the majority class of `examples`.
    fn plurality_leaf(&self, examples: &[&'a Example], reason: &str)
        -> Box<Node>
    {
        let class = self.evaluator.counts(examples).plurality();
        self.leaf(class, reason)
    }

    fn leaf(&self, class: BinaryClass, reason: &str) -> Box<Node> {
        let label = self.class_label(class);
        trace!(class = label, reason, "leaf");
        Box::new(Node::leaf(label))
    }

    /// The label a leaf of `class` predicts.
    pub fn class_label(&self, class: BinaryClass) -> &str {
        match class {
            BinaryClass::Reference => self.vocabulary.reference_label.as_str(),
            BinaryClass::Other => self.vocabulary.other_label.as_str(),
        }
    }

    /// The branch label of `outcome`.
    pub fn outcome_label(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Affirmative => self.vocabulary.affirmative_outcome.as_str(),
            Outcome::Negative => self.vocabulary.negative_outcome.as_str(),
        }
    }

    /// Fraction of `examples` whose binarized target
    /// matches the prediction of `f`.
    /// Returns `0` for no examples and `Err`
    /// on the first example that `f` cannot classify.
    ///
    /// # Panics
    /// Panics if an example is narrower than the target column.
    pub fn accuracy(&self, f: &DecisionTreeClassifier, examples: &[Example])
        -> Result<f64>
    {
        if examples.is_empty() { return Ok(0f64); }

        let mut correct = 0_usize;
        for example in examples {
            let truth = self.class_label(self.evaluator.class_of(example));
            if f.classify(example)? == truth {
                correct += 1;
            }
        }
        Ok(correct as f64 / examples.len() as f64)
    }
}

impl fmt::Display for DecisionTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes = self.dataset.attributes();
        let features = self.features.iter()
            .map(|&j| attributes[j].as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Target: {target} (reference class `{reference}`)\n\
            - Features: [{features}]\n\
            - Max depth: {depth}\n\
            - Affirmative tokens: {tokens:?}\
            ",
            target = attributes[self.target()],
            reference = self.vocabulary.reference_class,
            depth = self.max_depth,
            tokens = self.vocabulary.affirmative_tokens,
        )?;

        write!(f, "----------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::builder::DecisionTreeBuilder;
    use std::io::BufReader;

    fn dataset(csv: &[u8]) -> Dataset {
        Dataset::from_reader(BufReader::new(csv), true).unwrap()
    }

    fn leaf_class(node: &Node) -> &str {
        match node {
            Node::Leaf { class } => class.as_str(),
            Node::Branch { .. } => panic!("expected a leaf, got {node:?}"),
        }
    }

    #[test]
    fn greedy_split_then_recurse() {
        let data = dataset(b"\
        voteA,voteB,class\n\
        Yea,Yea,republican\n\
        Yea,Nay,democrat\n\
        Nay,Nay,democrat\n\
        Nay,Nay,democrat\n\
        Nay,Nay,republican\n");
        let tree = DecisionTreeBuilder::new(&data)
            .features(["voteB", "voteA"])
            .max_depth(3)
            .build()
            .unwrap();
        let f = tree.induce();

        // gain(voteB) = 0.32 > gain(voteA) = 0.02
        let root = f.root();
        match root {
            Node::Branch { name, .. } => assert_eq!(name, "voteB"),
            _ => panic!("expected a branch, got {root:?}"),
        }
        assert_eq!(leaf_class(root.child("Yea").unwrap()), "Republicans");

        // Under voteB = Nay: voteA = Yea is a pure democrat,
        // voteA = Nay has 2 democrats and 1 republican,
        // which no attribute can separate any more.
        let nay = root.child("Nay").unwrap();
        assert_eq!(leaf_class(nay.child("Yea").unwrap()), "Democrats");
        assert_eq!(leaf_class(nay.child("Nay").unwrap()), "Democrats");
    }

    #[test]
    fn empty_partition_takes_parent_plurality() {
        // Every example votes `Yea`, so the negative side is empty
        // and inherits the plurality of the 2 republicans vs 1 democrat.
        let data = dataset(b"\
        vote,class\n\
        Yea,republican\n\
        Yea,republican\n\
        Yea,democrat\n");
        let f = DecisionTreeBuilder::new(&data)
            .max_depth(2)
            .build()
            .unwrap()
            .induce();

        let root = f.root();
        assert!(!root.is_leaf());
        assert_eq!(leaf_class(root.child("Nay").unwrap()), "Republicans");
        // The affirmative side runs out of attributes.
        assert_eq!(leaf_class(root.child("Yea").unwrap()), "Republicans");
    }

    #[test]
    fn first_attribute_wins_ties() {
        let data = dataset(b"\
        a,b,class\n\
        Yea,Yea,republican\n\
        Nay,Nay,democrat\n");
        for (features, expected) in [(["a", "b"], "a"), (["b", "a"], "b")] {
            let f = DecisionTreeBuilder::new(&data)
                .features(features)
                .build()
                .unwrap()
                .induce();
            match f.root() {
                Node::Branch { name, .. } => assert_eq!(name, expected),
                leaf => panic!("expected a branch, got {leaf:?}"),
            }
        }
    }

    #[test]
    fn empty_dataset_gives_other_class() {
        let data = dataset(b"vote,class\n");
        let f = DecisionTreeBuilder::new(&data).build().unwrap().induce();
        assert_eq!(leaf_class(f.root()), "Democrats");
    }

    #[test]
    fn accuracy_on_training_data() {
        let data = dataset(b"\
        vote,class\n\
        Yea,republican\n\
        Yea,democrat\n\
        Nay,democrat\n\
        Nay,democrat\n");
        let tree = DecisionTreeBuilder::new(&data).build().unwrap();
        let f = tree.induce();

        // `Yea` is a 1:1 tie, which goes to `Democrats`.
        let acc = tree.accuracy(&f, data.examples()).unwrap();
        assert!((acc - 0.75).abs() < 1e-12, "got {acc}.");
        assert_eq!(tree.accuracy(&f, &[]).unwrap(), 0f64);
    }

    #[test]
    fn display_lists_the_parameters() {
        let data = dataset(b"vote,class\nYea,republican\n");
        let tree = DecisionTreeBuilder::new(&data).build().unwrap();
        let text = format!("{tree}");
        assert!(text.contains("- Target: class"));
        assert!(text.contains("- Features: [vote]"));
        assert!(text.contains("- Max depth: 5"));
    }
}
