//! Struct `Sample` represents a batch of boolean-valued examples.

// Provides attribute identifiers and class labels.
pub(crate) mod attribute;
// Provides the example struct.
pub(crate) mod example;
// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use attribute::{AttributeId, Label};
pub use example::Example;
pub use sample_reader::SampleReader;
pub use sample_struct::Sample;
