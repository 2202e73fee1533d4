//! Defines the decision tree classifier.
use std::fmt;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::error::Result;
use crate::hypothesis::Classifier;
use super::node::*;


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl From<Box<Node>> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Box<Node>) -> Self {
        Self { root: *root }
    }
}


impl Classifier for DecisionTreeClassifier {
    fn classify(&self, example: &[String]) -> Result<&str> {
        self.root.classify(example)
    }

    fn render(&self, level: usize) -> String {
        self.root.render(level)
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Human-readable, indented representation of the tree,
    /// starting at level `1`.
    pub fn render(&self) -> String {
        Classifier::render(self, 1)
    }


    /// Returns the tree in Graphviz `dot` format.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("graph DecisionTree {\n");
        self.root.to_dot_info(0).0
            .into_iter()
            .for_each(|row| dot.push_str(&row));
        dot.push('}');
        dot
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;
        Ok(())
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> DecisionTreeClassifier {
        let root = Node::branch(0, "voteX".to_string(), [
            ("Yea".to_string(), Box::new(Node::leaf("Republicans"))),
            ("Nay".to_string(), Box::new(Node::leaf("Democrats"))),
        ]);
        DecisionTreeClassifier::from(root)
    }

    #[test]
    fn classify_all_in_order() {
        let f = stump();
        let examples = vec![
            vec!["Nay".to_string()],
            vec!["Yea".to_string()],
        ];
        let predictions = f.classify_all(&examples).unwrap();
        assert_eq!(predictions, vec!["Democrats", "Republicans"]);
    }

    #[test]
    fn classify_all_stops_at_unseen_branch() {
        let f = stump();
        let examples = vec![
            vec!["Nay".to_string()],
            vec!["Absent".to_string()],
        ];
        assert!(f.classify_all(&examples).is_err());
    }

    #[test]
    fn display_matches_render() {
        let f = stump();
        assert_eq!(format!("{f}"), f.render());
        assert!(f.render().starts_with("Test: voteX\n"));
        assert_eq!(Classifier::render(&f, 1), f.render());
        assert_eq!(Classifier::render(&f, 2), f.root().render(2));
    }

    #[test]
    fn dot_is_a_graph() {
        let dot = stump().to_dot();
        assert!(dot.starts_with("graph DecisionTree {\n"));
        assert!(dot.ends_with('}'));
        assert!(dot.contains("node_0 -- node_1 [ label = \"Yea\" ]"));
        assert!(dot.contains("node_0 -- node_2 [ label = \"Nay\" ]"));
    }
}
