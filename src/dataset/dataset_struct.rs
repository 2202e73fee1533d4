//! Defines the `Dataset` struct and its loaders.
use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::collections::{BTreeSet, HashMap};

use polars::prelude::*;
use rayon::prelude::*;

use crate::error::{Result, TreeError};

/// One row of categorical values, one per attribute.
pub type Example = Vec<String>;

/// An immutable table of categorical examples.
///
/// Every example has exactly one value per attribute,
/// and attribute names are looked up by their first occurrence
/// in the header.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) attributes: Vec<String>,
    pub(super) examples: Vec<Example>,
    pub(super) domains: Vec<Vec<String>>,
}

impl Dataset {
    /// Construct a new instance of `Dataset` from a header
    /// and the rows below it.
    /// Returns `Err` if the header is empty or
    /// a row does not match the header width.
    pub fn new(attributes: Vec<String>, examples: Vec<Example>)
        -> Result<Self>
    {
        if attributes.is_empty() {
            return Err(TreeError::EmptyDataset);
        }

        let expected = attributes.len();
        if let Some((i, row)) = examples.iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(TreeError::RaggedRow {
                line: i + 2, expected, found: row.len(),
            });
        }

        Ok(Self::from_raw(attributes, examples))
    }

    /// Assemble `Self` from validated parts.
    fn from_raw(attributes: Vec<String>, examples: Vec<Example>) -> Self {
        let mut name_to_index = HashMap::with_capacity(attributes.len());
        for (i, name) in attributes.iter().enumerate() {
            name_to_index.entry(name.clone()).or_insert(i);
        }

        let domains = (0..attributes.len()).into_par_iter()
            .map(|j| {
                examples.iter()
                    .map(|row| row[j].as_str())
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        Self { name_to_index, attributes, examples, domains, }
    }

    /// Read a CSV format file to [`Dataset`] type.
    /// This method returns `Err` if the file does not exist.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }

    /// Read comma-separated rows from a [`BufReader`].
    ///
    /// Blank (or whitespace-only) lines are skipped,
    /// including those before the header.
    /// If `has_header` is `false`, the columns are named
    /// `Attr. [1]`, `Attr. [2]`, ..., `Attr. [n]`.
    pub fn from_reader<R>(reader: BufReader<R>, has_header: bool)
        -> Result<Self>
        where R: Read,
    {
        let mut attributes: Option<Vec<String>> = None;
        let mut examples = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;

            if line.trim().is_empty() { continue; }

            let row = split_fields(&line);
            let expected = match attributes.as_ref().map(Vec::len) {
                Some(n_attributes) => n_attributes,
                None if has_header => {
                    attributes = Some(row);
                    continue;
                },
                None => {
                    let names = (1..=row.len())
                        .map(|k| format!("Attr. [{k}]"))
                        .collect::<Vec<_>>();
                    attributes.insert(names).len()
                },
            };

            if row.len() != expected {
                return Err(TreeError::RaggedRow {
                    line: line_no, expected, found: row.len(),
                });
            }
            examples.push(row);
        }

        let attributes = attributes.ok_or(TreeError::EmptyDataset)?;
        Ok(Self::from_raw(attributes, examples))
    }

    /// Convert a `polars::DataFrame` to [`Dataset`].
    /// Every column is cast to strings and nulls become `""`.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self> {
        let attributes = data.get_column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        if attributes.is_empty() {
            return Err(TreeError::EmptyDataset);
        }

        let mut examples = vec![
            Vec::with_capacity(attributes.len()); data.height()
        ];
        for series in data.get_columns() {
            let series = series.cast(&DataType::Utf8)?;
            let values = series.utf8()?;
            for (row, value) in examples.iter_mut().zip(values.into_iter()) {
                row.push(value.unwrap_or_default().to_string());
            }
        }

        Ok(Self::from_raw(attributes, examples))
    }

    /// Returns the attribute names in column order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }

    /// Returns the examples in input order.
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }

    /// Returns the sorted distinct values of every attribute.
    pub fn domains(&self) -> &[Vec<String>] {
        &self.domains[..]
    }

    /// Returns the sorted distinct values of the `j`-th attribute.
    pub fn domain(&self, j: usize) -> Option<&[String]> {
        self.domains.get(j).map(|d| &d[..])
    }

    /// Returns the column index of the attribute named `name`.
    pub fn index_of<S: AsRef<str>>(&self, name: S) -> Result<usize> {
        let name = name.as_ref();
        self.name_to_index.get(name)
            .copied()
            .ok_or_else(|| TreeError::UnknownAttribute {
                name: name.to_string()
            })
    }

    /// Returns the pair of the number of examples and
    /// the number of attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.attributes.len())
    }
}

#[inline]
fn split_fields(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::to_string)
        .collect()
}
