//! Struct `Dataset` holds the categorical examples a tree is grown from.

pub mod dataset_struct;
pub mod reader;


pub use dataset_struct::{Dataset, Example};
pub use reader::DatasetReader;
