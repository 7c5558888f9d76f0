use boolboost::prelude::*;
use boolboost::TreeKind;

use rand::prelude::*;
use rand::rngs::StdRng;


fn sample(names: &[&str], rows: &[(&[bool], Label)]) -> Sample {
    let examples = rows.iter()
        .map(|(x, y)| Example::from_answers(x, Some(*y)))
        .collect();
    Sample::from_examples(names.iter().copied(), examples)
}


/// Tests for `DecisionTree`.
#[cfg(test)]
pub mod dtree_tests {
    use super::*;
    use boolboost::Label::{Positive as P, Negative as N};

    #[test]
    fn unanimous_labels_give_a_leaf() {
        let s = sample(&["A", "B"], &[
            (&[true, false], N),
            (&[false, true], N),
            (&[true, true], N),
        ]);
        let root = induce(&s, &s.attribute_ids(), None, None).unwrap();
        assert_eq!(root, Node::Leaf { label: N });
        assert_eq!(root.depth(), 0);
    }


    #[test]
    fn the_more_informative_attribute_is_asked_first() {
        // `A` separates the classes, `B` says nothing.
        let s = sample(&["A", "B"], &[
            (&[true, true], P),
            (&[true, false], P),
            (&[false, true], N),
            (&[false, false], N),
        ]);
        let root = induce(&s, &s.attribute_ids(), None, None).unwrap();
        assert_eq!(root.attribute(), Some(AttributeId(0)));
        assert_eq!(root.child(true), Some(&Node::Leaf { label: P }));
        assert_eq!(root.child(false), Some(&Node::Leaf { label: N }));
    }


    #[test]
    fn forced_attribute_gives_a_stump() {
        // Even a unanimous sample is split on the forced attribute.
        let s = sample(&["A", "B", "C"], &[
            (&[true, true, false], P),
            (&[false, true, true], P),
            (&[true, false, true], P),
        ]);
        let attrs = s.attribute_ids();
        for max_depth in [None, Some(0), Some(1), Some(5)] {
            for forced in attrs.iter().copied() {
                let root = induce(&s, &attrs, max_depth, Some(forced))
                    .unwrap();
                assert_eq!(root.depth(), 1, "max_depth = {max_depth:?}");
                assert_eq!(root.attribute(), Some(forced));
                assert_eq!(root.n_leaves(), 2);
            }
        }

        let stump = DecisionTreeBuilder::new(&s)
            .build()
            .produce_forced(&s, AttributeId(2))
            .unwrap();
        assert_eq!(stump.kind(), TreeKind::Stump);
        assert_eq!(stump.root_attribute(), Some(AttributeId(2)));
    }


    #[test]
    fn max_depth_zero_is_the_majority_leaf() {
        let s = sample(&["A"], &[
            (&[true], P),
            (&[false], N),
            (&[false], N),
        ]);
        let root = induce(&s, &s.attribute_ids(), Some(0), None).unwrap();
        assert_eq!(root, Node::Leaf { label: N });
    }


    #[test]
    fn even_split_goes_to_positive() {
        // No attribute is left to ask and the classes are balanced.
        let s = sample(&["A"], &[
            (&[true], P),
            (&[true], N),
            (&[false], P),
            (&[false], N),
        ]);
        let root = induce(&s, &[], None, None).unwrap();
        assert_eq!(root, Node::Leaf { label: P });
    }


    #[test]
    fn boosting_weights_do_not_change_plain_induction() {
        // A 3 to 3 split whose weights `boost` moves away from uniform.
        let mut s = sample(&["A", "B"], &[
            (&[true, true], N),
            (&[true, false], N),
            (&[false, true], P),
            (&[true, true], P),
            (&[false, false], P),
            (&[false, true], N),
        ]);
        let attrs = s.attribute_ids();
        let before = induce(&s, &attrs, Some(0), None).unwrap();
        assert_eq!(before, Node::Leaf { label: P });

        boost(&mut s, &attrs).unwrap();
        assert_ne!(s.weights(), vec![1.0 / 6.0; 6]);
        let after = induce(&s, &attrs, Some(0), None).unwrap();
        assert_eq!(after, before);

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..50 {
            let examples = (0..8)
                .map(|_| {
                    let x = [rng.gen_bool(0.5), rng.gen_bool(0.5)];
                    let y = if rng.gen_bool(0.5) { P } else { N };
                    Example::from_answers(&x[..], Some(y))
                })
                .collect();
            let mut s = Sample::from_examples(["A", "B"], examples);
            let attrs = s.attribute_ids();

            let trees = |s: &Sample| {
                [None, Some(0), Some(1)].map(|max_depth| {
                    induce(s, &attrs, max_depth, None).unwrap()
                })
            };
            let before = trees(&s);
            boost(&mut s, &attrs).unwrap();
            assert_eq!(trees(&s), before);
        }
    }


    #[test]
    fn full_depth_tree_reproduces_training_labels() {
        let mut rng = StdRng::seed_from_u64(7);
        let names = ["A", "B", "C", "D"];
        for _ in 0..50 {
            // Assign one random label per distinct answer vector,
            // so the attributes always separate the examples.
            let table = (0..16)
                .map(|_| if rng.gen_bool(0.5) { P } else { N })
                .collect::<Vec<_>>();
            let examples = (0..24)
                .map(|_| {
                    let code = rng.gen_range(0..16_usize);
                    let answers = (0..4)
                        .map(|i| (code >> i) & 1 == 1)
                        .collect::<Vec<_>>();
                    Example::from_answers(&answers[..], Some(table[code]))
                })
                .collect();
            let s = Sample::from_examples(names, examples);

            let tree = DecisionTreeBuilder::new(&s).build();
            let f = tree.produce(&s).unwrap();
            assert_eq!(f.kind(), TreeKind::Full);
            assert_eq!(f.predict_all(&s).unwrap(), s.target().unwrap());

            let model = Model::from(f);
            assert_eq!(classify(&model, &s).unwrap(), s.target().unwrap());
        }
    }


    #[test]
    fn no_attribute_is_asked_twice_on_a_path() {
        fn check(node: &Node, asked: &mut Vec<AttributeId>) {
            if let Node::Branch { attribute, true_branch, false_branch } = node {
                assert!(!asked.contains(attribute));
                asked.push(*attribute);
                check(true_branch, asked);
                check(false_branch, asked);
                asked.pop();
            }
        }

        // label = A xor B xor C needs every attribute on every path.
        let rows = (0..8_usize)
            .map(|code| {
                let x = [code & 1 == 1, code & 2 == 2, code & 4 == 4];
                let y = if code.count_ones() % 2 == 1 { P } else { N };
                (x, y)
            })
            .collect::<Vec<_>>();
        let rows = rows.iter()
            .map(|(x, y)| (&x[..], *y))
            .collect::<Vec<_>>();
        let s = sample(&["A", "B", "C"], &rows[..]);

        let root = induce(&s, &s.attribute_ids(), None, None).unwrap();
        assert_eq!(root.depth(), 3);
        check(&root, &mut Vec::new());
    }


    #[test]
    fn undefined_answer_is_a_malformed_example() {
        let mut s = sample(&["A", "B"], &[
            (&[true, true], P),
            (&[false, true], N),
        ]);
        s.push_named([("B", false)], Some(N)).unwrap();

        let err = induce(&s, &s.attribute_ids(), None, Some(AttributeId(0)))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedExample { row: Some(2), attribute: AttributeId(0) }
        ));
    }


    #[test]
    fn tree_is_written_as_dot() {
        let s = sample(&["rainy", "windy"], &[
            (&[true, true], N),
            (&[true, false], P),
            (&[false, true], P),
            (&[false, false], P),
        ]);
        let f = DecisionTreeBuilder::new(&s).build().produce(&s).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.dot");
        f.to_dot_file(&path, &s).unwrap();

        let dot = std::fs::read_to_string(&path).unwrap();
        assert!(dot.starts_with("graph DecisionTree {"));
        assert!(dot.contains("rainy ?"));
        assert!(dot.contains("windy ?"));
        assert!(dot.trim_end().ends_with('}'));
    }
}
