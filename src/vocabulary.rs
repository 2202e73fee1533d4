//! The strings that give meaning to a categorical dataset.
//!
//! The tree only ever sees two target classes and two split outcomes.
//! [`Vocabulary`] says which raw values belong to which side,
//! and how the two sides are labeled in the resulting tree.
use serde::{Serialize, Deserialize};

use crate::error::{Result, TreeError};

/// The default reference class (compared case-insensitively).
pub const DEFAULT_REFERENCE_CLASS: &str = "republican";
/// The default affirmative tokens (compared exactly).
pub const DEFAULT_AFFIRMATIVE_TOKENS: [&str; 2] = ["Yea", "Present"];

/// Binarization rules for the target and the features.
///
/// # Example
/// ```
/// use minitree::Vocabulary;
/// let vocab = Vocabulary::from_json(r#"{
///     "reference_class": "spam",
///     "reference_label": "Spam",
///     "other_label": "Ham"
/// }"#).unwrap();
/// assert_eq!(vocab.reference_class, "spam");
/// assert_eq!(vocab.affirmative_outcome, "Yea");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Target value that counts as the reference class.
    /// Every other value falls into the other class.
    pub reference_class: String,
    /// Feature values that go to the affirmative branch.
    pub affirmative_tokens: Vec<String>,
    /// Class predicted by a leaf dominated by the reference class.
    pub reference_label: String,
    /// Class predicted by a leaf dominated by the other class.
    pub other_label: String,
    /// Branch label of the affirmative group.
    /// Must be one of `affirmative_tokens`,
    /// since examples are routed by their raw value.
    pub affirmative_outcome: String,
    /// Branch label of the negative group.
    /// Must not be one of `affirmative_tokens`.
    pub negative_outcome: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            reference_class: DEFAULT_REFERENCE_CLASS.to_string(),
            affirmative_tokens: DEFAULT_AFFIRMATIVE_TOKENS.iter()
                .map(|token| token.to_string())
                .collect(),
            reference_label: "Republicans".to_string(),
            other_label: "Democrats".to_string(),
            affirmative_outcome: "Yea".to_string(),
            negative_outcome: "Nay".to_string(),
        }
    }
}

impl Vocabulary {
    /// Parse a vocabulary from JSON.
    /// Missing fields take their default value.
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Self> {
        let vocab: Self = serde_json::from_str(json.as_ref())?;
        vocab.validate()?;
        Ok(vocab)
    }

    /// Serialize the vocabulary to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that both sides of every binary choice are distinguishable,
    /// and that the branch labels agree with the affirmative tokens.
    pub fn validate(&self) -> Result<()> {
        if self.affirmative_tokens.is_empty() {
            return Err(TreeError::InvalidVocabulary(
                "`affirmative_tokens` is empty".to_string()
            ));
        }
        if self.reference_label == self.other_label {
            return Err(TreeError::InvalidVocabulary(format!(
                "both classes are labeled `{}`", self.other_label
            )));
        }
        if self.affirmative_outcome == self.negative_outcome {
            return Err(TreeError::InvalidVocabulary(format!(
                "both outcomes are labeled `{}`", self.negative_outcome
            )));
        }
        if !self.affirmative_tokens.contains(&self.affirmative_outcome) {
            return Err(TreeError::InvalidVocabulary(format!(
                "affirmative outcome `{}` is not an affirmative token",
                self.affirmative_outcome,
            )));
        }
        if self.affirmative_tokens.contains(&self.negative_outcome) {
            return Err(TreeError::InvalidVocabulary(format!(
                "negative outcome `{}` is an affirmative token",
                self.negative_outcome,
            )));
        }
        Ok(())
    }
}
