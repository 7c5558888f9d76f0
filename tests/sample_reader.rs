use boolboost::prelude::*;

use std::fs;
use std::path::PathBuf;


fn write_csv(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("sample.csv");
    fs::write(&path, body).unwrap();
    path
}


/// Tests for `SampleReader`.
#[cfg(test)]
pub mod sample_reader_tests {
    use super::*;

    #[test]
    fn reads_header_and_boolean_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "\
            sunny,class,windy\n\
            True,yes,F\n\
            0,no,true\n\
            T,,1\n\
        ");

        let sample = SampleReader::default()
            .file(path)
            .has_header(true)
            .target_feature("class")
            .read()
            .unwrap();

        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.attributes(), ["sunny", "windy"]);
        assert_eq!(sample.attribute_id("windy").unwrap(), AttributeId(1));

        let sunny = AttributeId(0);
        let windy = AttributeId(1);
        assert!(sample[0].answer(sunny).unwrap());
        assert!(!sample[0].answer(windy).unwrap());
        assert!(!sample[1].answer(sunny).unwrap());
        assert!(sample[2].answer(windy).unwrap());

        // The first class seen is the positive one.
        assert_eq!(sample[0].label(), Some(Label::Positive));
        assert_eq!(sample[1].label(), Some(Label::Negative));
        assert_eq!(sample[2].label(), None);
        assert_eq!(sample.class_name(Label::Positive), "yes");
        assert_eq!(sample.label_of("no"), Some(Label::Negative));

        let total = sample.weights().iter().sum::<f64>();
        assert!((total - 1.0).abs() < 1e-12);
    }


    #[test]
    fn class_names_can_be_fixed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "nl,1\nen,0\n");

        let sample = SampleReader::default()
            .file(path)
            .target_feature("Feat. [1]")
            .positive_class("en")
            .negative_class("nl")
            .read()
            .unwrap();

        assert_eq!(sample.attributes(), ["Feat. [2]"]);
        assert_eq!(sample[0].label(), Some(Label::Negative));
        assert_eq!(sample[1].label(), Some(Label::Positive));
    }


    #[test]
    fn empty_cell_leaves_the_answer_undefined() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&dir, "a,b,y\n1,,p\n0,1,n\n");

        let sample = SampleReader::default()
            .file(path)
            .has_header(true)
            .target_feature("y")
            .read()
            .unwrap();

        let b = sample.attribute_id("b").unwrap();
        assert!(!sample[0].is_defined_on(&[b]));
        assert!(matches!(
            sample[0].answer(b),
            Err(Error::MalformedExample { row: None, .. })
        ));

        let attributes = sample.attribute_ids();
        assert!(matches!(
            induce(&sample, &attributes, None, Some(b)),
            Err(Error::MalformedExample { row: Some(0), .. })
        ));
    }


    #[test]
    fn bad_input_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();

        let path = write_csv(&dir, "a,y\nmaybe,p\n");
        let err = SampleReader::default()
            .file(path)
            .has_header(true)
            .target_feature("y")
            .read()
            .unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let path = write_csv(&dir, "a,y\n1,p\n0,n\n1,q\n");
        let err = SampleReader::default()
            .file(path)
            .has_header(true)
            .target_feature("y")
            .read()
            .unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }));

        let path = write_csv(&dir, "a,y\n1,p,0\n");
        let err = SampleReader::default()
            .file(path)
            .has_header(true)
            .target_feature("y")
            .read()
            .unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let path = write_csv(&dir, "a,y\n1,p\n");
        let err = SampleReader::default()
            .file(path)
            .has_header(true)
            .target_feature("class")
            .read()
            .unwrap_err();
        assert!(matches!(err, Error::UnknownAttribute(_)));
    }
}
