//! A builder that reads a CSV file into `Dataset`.
use std::path::Path;
use std::io;

use super::dataset_struct::Dataset;
use crate::error::Result;

/// A builder that reads a CSV file into [`Dataset`].
///
/// # Example
/// ```no_run
/// use minitree::DatasetReader;
/// let dataset = DatasetReader::default()
///     .file("/path/to/congress.csv")
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct DatasetReader<P> {
    file: Option<P>,
    has_header: bool,
}

impl<P> Default for DatasetReader<P> {
    fn default() -> Self {
        Self { file: None, has_header: true, }
    }
}

impl<P> DatasetReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `true`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}

impl<P> DatasetReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Reads the file and returns the [`Dataset`].
    /// This method consumes `self`.
    pub fn read(self) -> Result<Dataset> {
        let file = self.file.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "the file name for the dataset is not set",
            )
        })?;
        Dataset::from_csv(file, self.has_header)
    }
}
