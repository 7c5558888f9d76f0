use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::{Error, Result};
use super::attribute::{AttributeId, Label};
use super::example::Example;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV file of boolean attributes.
///
/// Each attribute column holds one of
/// `True`/`False`, `true`/`false`, `T`/`F`, or `1`/`0`.
/// An empty cell leaves the answer undefined.
/// The target column holds one of two class names;
/// an empty target cell yields an unlabeled example.
///
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use boolboost::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .positive_class("en")
///     .negative_class("nl")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    target: Option<String>,
    positive: Option<String>,
    negative: Option<String>,
}


impl<P> SampleReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Without a header, columns are named `Feat. [1]`, `Feat. [2]`, ...
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for target label.
    pub fn target_feature<S: Into<String>>(mut self, column: S) -> Self {
        self.target = Some(column.into());
        self
    }


    /// Set the class name read as [`Label::Positive`].
    /// By default, the first class name found in the file is positive.
    pub fn positive_class<S: Into<String>>(mut self, name: S) -> Self {
        self.positive = Some(name.into());
        self
    }


    /// Set the class name read as [`Label::Negative`].
    pub fn negative_class<S: Into<String>>(mut self, name: S) -> Self {
        self.negative = Some(name.into());
        self
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns `Result<Sample>`.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| Error::Parse {
                line: 0,
                message: "the file name is not set".into(),
            })?;
        let target = self.target
            .ok_or_else(|| Error::Parse {
                line: 0,
                message: "target (class) column is not specified. \
                          Use `SampleReader::target_feature`.".into(),
            })?;
        let mut classes = ClassNames::new(self.positive, self.negative);

        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines().enumerate().peekable();

        let header = if self.has_header {
            match lines.next() {
                Some((_, line)) => split_row(&line?),
                None => Vec::new(),
            }
        } else {
            let width = match lines.peek() {
                Some((_, Ok(line))) => split_row(line).len(),
                _ => 0,
            };
            (1..=width).map(|i| format!("Feat. [{i}]")).collect()
        };

        let target_pos = header.iter()
            .position(|name| *name == target)
            .ok_or_else(|| Error::UnknownAttribute(target.clone()))?;

        let attributes = header.iter()
            .enumerate()
            .filter_map(|(i, name)| (i != target_pos).then(|| name.clone()))
            .collect::<Vec<_>>();
        let n_attributes = attributes.len();


        let mut examples = Vec::new();
        for (i, line) in lines {
            let line = line?;
            let lineno = i + 1;
            if line.trim().is_empty() { continue; }

            let cells = split_row(&line);
            if cells.len() != header.len() {
                return Err(Error::Parse {
                    line: lineno,
                    message: format!(
                        "expected {} columns, found {}",
                        header.len(), cells.len()
                    ),
                });
            }

            let mut example = Example::new(n_attributes);
            let mut attr = 0_usize;
            for (j, cell) in cells.iter().enumerate() {
                if j == target_pos {
                    let label = classes.label(cell, lineno)?;
                    example.set_label(label);
                    continue;
                }
                if let Some(answer) = parse_bool(cell, lineno)? {
                    example.set_answer(AttributeId(attr), answer);
                }
                attr += 1;
            }
            examples.push(example);
        }

        let [positive, negative] = classes.into_names();
        let sample = Sample::from_examples(attributes, examples)
            .class_names(positive, negative);
        Ok(sample)
    }
}


/// Keeps the mapping from class names to labels
/// while the target column is read.
struct ClassNames {
    positive: Option<String>,
    negative: Option<String>,
}


impl ClassNames {
    fn new(positive: Option<String>, negative: Option<String>) -> Self {
        Self { positive, negative }
    }


    fn label(&mut self, cell: &str, line: usize) -> Result<Option<Label>> {
        if cell.is_empty() {
            return Ok(None);
        }
        if self.positive.as_deref() == Some(cell) {
            return Ok(Some(Label::Positive));
        }
        if self.negative.as_deref() == Some(cell) {
            return Ok(Some(Label::Negative));
        }

        if self.positive.is_none() {
            self.positive = Some(cell.to_string());
            Ok(Some(Label::Positive))
        } else if self.negative.is_none() {
            self.negative = Some(cell.to_string());
            Ok(Some(Label::Negative))
        } else {
            Err(Error::Parse {
                line,
                message: format!("unknown class `{cell}`"),
            })
        }
    }


    fn into_names(self) -> [String; 2] {
        [
            self.positive.unwrap_or_else(|| "positive".into()),
            self.negative.unwrap_or_else(|| "negative".into()),
        ]
    }
}


fn split_row(line: &str) -> Vec<String> {
    line.split(',')
        .map(|cell| cell.trim().to_string())
        .collect()
}


fn parse_bool(cell: &str, line: usize) -> Result<Option<bool>> {
    match cell {
        "" => Ok(None),
        "True" | "true" | "T" | "1" => Ok(Some(true)),
        "False" | "false" | "F" | "0" => Ok(Some(false)),
        _ => Err(Error::Parse {
            line,
            message: format!("`{cell}` is not a boolean"),
        }),
    }
}
