//! Defines [`Model`], the trained artifact handed to prediction.
use serde::{Serialize, Deserialize};

use crate::{
    Classifier,
    DecisionTreeClassifier,
    Example,
    Label,
    Result,
    Sample,
    WeightedMajority,
};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;


/// A trained model.
/// Either a single decision tree or a boosted chain of stumps.
///
/// A `Model` is written to disk as JSON.
/// The `kind` field tells the two variants apart.
///
/// # Example
/// ```no_run
/// use boolboost::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(&sample)
///     .build()
///     .produce(&sample)
///     .unwrap();
///
/// let model = Model::from(tree);
/// model.save("/path/to/model.json").unwrap();
///
/// let model = Model::load("/path/to/model.json").unwrap();
/// let labels = model.classify_all(&sample).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Model {
    /// A tree grown by information gain.
    DecisionTree(DecisionTreeClassifier),
    /// A weighted chain of stumps produced by `AdaBoost`.
    Boosting(WeightedMajority<DecisionTreeClassifier>),
}


impl From<DecisionTreeClassifier> for Model {
    fn from(tree: DecisionTreeClassifier) -> Self {
        Self::DecisionTree(tree)
    }
}


impl From<WeightedMajority<DecisionTreeClassifier>> for Model {
    fn from(ensemble: WeightedMajority<DecisionTreeClassifier>) -> Self {
        Self::Boosting(ensemble)
    }
}


impl Model {
    /// Returns the class predicted for `example`.
    pub fn classify(&self, example: &Example) -> Result<Label> {
        self.predict(example)
    }


    /// Returns the class predicted for each example of `sample`, in order.
    pub fn classify_all(&self, sample: &Sample) -> Result<Vec<Label>> {
        self.predict_all(sample)
    }


    /// Write `self` to `path` as JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }


    /// Read a model written by [`Model::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let model = serde_json::from_reader(reader)?;
        Ok(model)
    }
}


impl Classifier for Model {
    fn confidence(&self, example: &Example) -> Result<f64> {
        match self {
            Self::DecisionTree(tree) => tree.confidence(example),
            Self::Boosting(ensemble) => ensemble.confidence(example),
        }
    }
}
