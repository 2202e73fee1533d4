//! The inner representation of a decision tree.
use std::fmt::{self, Write};

use crate::error::{Result, TreeError};
use crate::hypothesis::Classifier;

/// Either a test on one attribute, or a predicted class.
#[derive(Clone, PartialEq, Eq)]
pub enum Node {
    /// A node that tests one attribute and has exactly two children,
    /// affirmative first.
    Branch {
        /// Index of the tested attribute.
        attribute: usize,
        /// Display name of the tested attribute.
        name:      String,
        /// Pairs of branch label and subtree.
        children:  [(String, Box<Node>); 2],
    },
    /// A node that predicts a class.
    Leaf {
        /// The predicted class label.
        class: String,
    },
}

impl Node {
    /// Construct a branch node. `children` is ordered
    /// as `[affirmative, negative]`.
    pub fn branch(
        attribute: usize,
        name:      String,
        children:  [(String, Box<Node>); 2],
    ) -> Self
    {
        Self::Branch { attribute, name, children, }
    }

    /// Construct a leaf node.
    pub fn leaf<S: Into<String>>(class: S) -> Self {
        Self::Leaf { class: class.into() }
    }

    /// Returns `true` if `self` is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Returns the subtree under the branch labeled `label`.
    pub fn child<S: AsRef<str>>(&self, label: S) -> Option<&Node> {
        match self {
            Self::Branch { children, .. } => {
                children.iter()
                    .find(|(l, _)| l == label.as_ref())
                    .map(|(_, child)| child.as_ref())
            },
            Self::Leaf { .. } => None,
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                1 + children.iter()
                    .map(|(_, child)| child.depth())
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }

    /// Number of leaves below (and including) `self`.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.iter()
                    .map(|(_, child)| child.n_leaves())
                    .sum()
            },
            Self::Leaf { .. } => 1,
        }
    }

    fn write_to<W: Write>(&self, out: &mut W, level: usize) -> fmt::Result {
        match self {
            Self::Branch { name, children, .. } => {
                writeln!(out, "Test: {name}")?;
                let indent = 4 * level;
                for (label, child) in children {
                    write!(out, "{:indent$} if {name} = {label} ==> ", "")?;
                    child.write_to(out, level + 1)?;
                }
                Ok(())
            },
            Self::Leaf { class } => {
                writeln!(out, "Predicted class: {class}")
            },
        }
    }

    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { name, children, .. } => {
                let test = format!(
                    "\tnode_{id} [ label = \"{name} ?\" ];\n",
                );

                let mut info = vec![test];
                let mut next_id = id + 1;
                for (label, child) in children {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);
                    info.push(format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{label}\" ];\n",
                    ));
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Node::Leaf { class } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{class}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}

impl Classifier for Node {
    fn classify(&self, example: &[String]) -> Result<&str> {
        match self {
            Self::Branch { attribute, name, children } => {
                let value = example.get(*attribute)
                    .map_or("", String::as_str);
                children.iter()
                    .find(|(label, _)| label == value)
                    .ok_or_else(|| TreeError::UnseenBranch {
                        attribute: name.clone(),
                        value: value.to_string(),
                    })?
                    .1
                    .classify(example)
            },
            Self::Leaf { class } => Ok(class.as_str()),
        }
    }

    fn render(&self, level: usize) -> String {
        let mut out = String::new();
        self.write_to(&mut out, level)
            .expect("writing to a `String` never fails");
        out
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch { attribute, name, children } => {
                let mut s = f.debug_struct("Branch");
                s.field("attribute", &attribute)
                    .field("name", &name);
                for (label, child) in children {
                    s.field(label, &child);
                }
                s.finish()
            },
            Self::Leaf { class } => {
                f.debug_struct("Leaf")
                    .field("class", &class)
                    .finish()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    //       vote0
    //      /     \
    //   Yea       Nay
    //   R        vote1
    //           /     \
    //        Yea       Nay
    //        R         D
    fn tree() -> Node {
        let inner = Node::branch(1, "vote1".to_string(), [
            ("Yea".to_string(), Box::new(Node::leaf("Republicans"))),
            ("Nay".to_string(), Box::new(Node::leaf("Democrats"))),
        ]);
        Node::branch(0, "vote0".to_string(), [
            ("Yea".to_string(), Box::new(Node::leaf("Republicans"))),
            ("Nay".to_string(), Box::new(inner)),
        ])
    }

    #[test]
    fn classify_walks_to_a_leaf() {
        let tree = tree();
        assert_eq!(tree.classify(&example(&["Yea", "Nay"])).unwrap(), "Republicans");
        assert_eq!(tree.classify(&example(&["Nay", "Yea"])).unwrap(), "Republicans");
        assert_eq!(tree.classify(&example(&["Nay", "Nay"])).unwrap(), "Democrats");
    }

    #[test]
    fn unseen_value_is_an_error() {
        let tree = tree();
        let err = tree.classify(&example(&["Nay", "Present"])).unwrap_err();
        match err {
            TreeError::UnseenBranch { attribute, value } => {
                assert_eq!(attribute, "vote1");
                assert_eq!(value, "Present");
            },
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn leaf_ignores_the_example() {
        let leaf = Node::leaf("Democrats");
        assert_eq!(leaf.classify(&[]).unwrap(), "Democrats");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.depth(), 0);
        assert_eq!(leaf.n_leaves(), 1);
    }

    #[test]
    fn shape_of_the_tree() {
        let tree = tree();
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 3);
        assert!(tree.child("Yea").unwrap().is_leaf());
        assert!(!tree.child("Nay").unwrap().is_leaf());
        assert!(tree.child("Present").is_none());
    }

    #[test]
    fn render_indents_by_level() {
        let expected = "\
Test: vote0
     if vote0 = Yea ==> Predicted class: Republicans
     if vote0 = Nay ==> Test: vote1
         if vote1 = Yea ==> Predicted class: Republicans
         if vote1 = Nay ==> Predicted class: Democrats
";
        assert_eq!(tree().render(1), expected);
    }

    #[test]
    fn render_through_the_trait_object() {
        let tree = tree();
        let inner = tree.child("Nay").unwrap();
        let models: [&dyn Classifier; 2] = [&tree, inner];
        assert!(models[0].render(1).starts_with("Test: vote0\n"));

        // A subtree rendered one level deeper, as its parent does.
        let expected = "\
Test: vote1
         if vote1 = Yea ==> Predicted class: Republicans
         if vote1 = Nay ==> Predicted class: Democrats
";
        assert_eq!(models[1].render(2), expected);
        assert_eq!(
            Node::leaf("Democrats").render(3),
            "Predicted class: Democrats\n",
        );
    }

    #[test]
    fn dot_info_numbers_every_node() {
        let (info, next_id) = tree().to_dot_info(0);
        assert_eq!(next_id, 5);
        assert_eq!(info.iter().filter(|row| row.contains(" -- ")).count(), 4);
        assert!(info[0].contains("vote0 ?"));
    }
}
