//! Partitions examples into an affirmative and a negative group.
use std::collections::HashSet;
use std::fmt;

use crate::dataset::Example;

/// The two outcomes of a split, in the order the tree visits them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    /// The tested value is one of the affirmative tokens.
    Affirmative,
    /// Any other value.
    Negative,
}

impl Outcome {
    /// Both outcomes, affirmative first.
    pub const ALL: [Outcome; 2] = [Outcome::Affirmative, Outcome::Negative];

    /// Position of the outcome in a split.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Outcome::Affirmative => 0,
            Outcome::Negative => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Affirmative => "Affirmative",
            Self::Negative => "Negative",
        };
        write!(f, "{name}")
    }
}

/// Splits on exact membership in a set of affirmative tokens.
#[derive(Clone, Debug)]
pub struct Splitter {
    tokens: HashSet<String>,
}

impl Splitter {
    /// Construct a new `Splitter` from the affirmative tokens.
    pub fn new<I, S>(tokens: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>,
    {
        let tokens = tokens.into_iter()
            .map(Into::into)
            .collect();
        Self { tokens }
    }

    /// Returns the outcome of a single value.
    #[inline]
    pub fn outcome(&self, value: &str) -> Outcome {
        if self.tokens.contains(value) {
            Outcome::Affirmative
        } else {
            Outcome::Negative
        }
    }

    /// Partition `examples` by the value of the `attribute`-th column.
    /// Returns `[affirmative, negative]`, each in input order.
    pub fn split<'a>(&self, attribute: usize, examples: &[&'a Example])
        -> [Vec<&'a Example>; 2]
    {
        let mut groups = [Vec::new(), Vec::new()];
        for &example in examples {
            let outcome = self.outcome(&example[attribute]);
            groups[outcome.index()].push(example);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn votes(values: &[&str]) -> Vec<Example> {
        values.iter()
            .map(|v| vec![v.to_string(), "democrat".to_string()])
            .collect()
    }

    #[test]
    fn yea_and_present_are_affirmative() {
        let splitter = Splitter::new(["Yea", "Present"]);
        let rows = votes(&["Yea", "Present", "Nay", "Absent"]);
        let examples = rows.iter().collect::<Vec<_>>();

        let [yes, no] = splitter.split(0, &examples);
        assert_eq!(yes.len(), 2);
        assert_eq!(no.len(), 2);
        assert_eq!(yes[0][0], "Yea");
        assert_eq!(yes[1][0], "Present");
        assert_eq!(no[0][0], "Nay");
        assert_eq!(no[1][0], "Absent");
    }

    #[test]
    fn tokens_are_case_sensitive() {
        let splitter = Splitter::new(["Yea"]);
        assert_eq!(splitter.outcome("Yea"), Outcome::Affirmative);
        assert_eq!(splitter.outcome("yea"), Outcome::Negative);
        assert_eq!(splitter.outcome(""), Outcome::Negative);
    }

    #[test]
    fn empty_input_gives_empty_groups() {
        let splitter = Splitter::new(["Yea"]);
        let [yes, no] = splitter.split(0, &[]);
        assert!(yes.is_empty() && no.is_empty());
    }
}
