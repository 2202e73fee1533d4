//! Entropy and information gain of a set of examples
//! with respect to a binarized target.
use crate::dataset::Example;

/// The two effective classes of the target.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum BinaryClass {
    /// The target equals the reference class (ignoring case).
    Reference,
    /// Any other target value.
    Other,
}

/// Number of examples in each [`BinaryClass`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ClassCounts {
    /// Examples of the reference class.
    pub reference: usize,
    /// Examples of the other class.
    pub other: usize,
}

impl ClassCounts {
    /// Total number of counted examples.
    #[inline]
    pub fn total(&self) -> usize {
        self.reference + self.other
    }

    /// Returns the class shared by every counted example, if any.
    /// An empty count is shared by neither class.
    pub fn pure_class(&self) -> Option<BinaryClass> {
        match (self.reference, self.other) {
            (0, 0) => None,
            (0, _) => Some(BinaryClass::Other),
            (_, 0) => Some(BinaryClass::Reference),
            _ => None,
        }
    }

    /// Returns the majority class.
    /// Ties, including the empty count, go to [`BinaryClass::Other`].
    pub fn plurality(&self) -> BinaryClass {
        if self.other >= self.reference {
            BinaryClass::Other
        } else {
            BinaryClass::Reference
        }
    }
}

/// Computes class distributions over the target column.
#[derive(Clone, Debug)]
pub struct Evaluator {
    target: usize,
    reference: String,
}

impl Evaluator {
    /// Construct a new `Evaluator` for the column `target`.
    /// `reference_class` is compared case-insensitively.
    pub fn new<S: AsRef<str>>(target: usize, reference_class: S) -> Self {
        let reference = reference_class.as_ref().to_lowercase();
        Self { target, reference, }
    }

    /// Returns the index of the target column.
    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the binarized class of `example`.
    #[inline]
    pub fn class_of(&self, example: &Example) -> BinaryClass {
        if example[self.target].to_lowercase() == self.reference {
            BinaryClass::Reference
        } else {
            BinaryClass::Other
        }
    }

    /// Count the examples per binarized class.
    pub fn counts(&self, examples: &[&Example]) -> ClassCounts {
        examples.iter()
            .fold(ClassCounts::default(), |mut counts, example| {
                match self.class_of(example) {
                    BinaryClass::Reference => counts.reference += 1,
                    BinaryClass::Other => counts.other += 1,
                }
                counts
            })
    }

    /// Returns the binary entropy (in bits) of the class distribution.
    ///
    /// # Panics
    /// Panics if `examples` is empty.
    pub fn entropy(&self, examples: &[&Example]) -> f64 {
        assert!(
            !examples.is_empty(),
            "entropy of an empty example set is undefined"
        );
        let counts = self.counts(examples);
        let total = counts.total() as f64;

        let p_reference = counts.reference as f64 / total;
        let p_other = counts.other as f64 / total;

        -plogp(p_reference) - plogp(p_other)
    }

    /// Returns the information gain of splitting `parent`
    /// into `partitions`. Empty partitions contribute nothing.
    ///
    /// # Panics
    /// Panics if `parent` is empty.
    pub fn information_gain(
        &self,
        parent: &[&Example],
        partitions: &[Vec<&Example>],
    ) -> f64
    {
        let total = parent.len() as f64;
        let remainder = partitions.iter()
            .filter(|part| !part.is_empty())
            .map(|part| (part.len() as f64 / total) * self.entropy(&part[..]))
            .sum::<f64>();

        self.entropy(parent) - remainder
    }
}

/// `p * log2(p)` with `0 * log2(0) = 0`.
#[inline(always)]
fn plogp(p: f64) -> f64 {
    if p <= 0f64 { 0f64 } else { p * p.log2() }
}
