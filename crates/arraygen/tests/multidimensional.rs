use arraygen::dimensional::{self, LeafSpec, Nested};
use arraygen::{Error, utils};

#[test]
fn empty_two_by_two() {
    let arr: Nested<i32> = dimensional::empty(2, 2).unwrap();
    let expected = Nested::Node(vec![Nested::Leaf(vec![]), Nested::Leaf(vec![])]);
    assert_eq!(arr, expected);
}

#[test]
fn empty_one_by_three() {
    let arr: Nested<i32> = dimensional::empty(1, 3).unwrap();
    let expected = Nested::Node(vec![Nested::Node(vec![Nested::Leaf(vec![])])]);
    assert_eq!(arr, expected);
}

#[test]
fn uniform_wraps_scalar_once_per_leaf() {
    let arr = dimensional::uniform(7, 2, 2).unwrap();
    let expected = Nested::Node(vec![Nested::Leaf(vec![7]), Nested::Leaf(vec![7])]);
    assert_eq!(arr, expected);
}

#[test]
fn uniform_depth_three_has_length_siblings_per_level() {
    let arr = dimensional::uniform(1, 3, 3).unwrap();
    assert_eq!(arr.len(), 3);
    if let Nested::Node(children) = &arr {
        for child in children {
            assert_eq!(child.len(), 3);
            if let Nested::Node(leaves) = child {
                assert!(leaves.iter().all(|leaf| *leaf == Nested::Leaf(vec![1])));
            } else {
                panic!("expected nodes at depth 2");
            }
        }
    } else {
        panic!("expected a node at the top level");
    }
}

#[test]
fn array_leaves_are_fresh_copies() {
    let mut arr = dimensional::build(LeafSpec::Array(vec![1, 2]), 2, 2).unwrap();
    if let Nested::Node(children) = &mut arr {
        if let Nested::Leaf(first) = &mut children[0] {
            first.push(9);
        }
        assert_eq!(children[1], Nested::Leaf(vec![1, 2]));
    } else {
        panic!("expected a node at the top level");
    }
}

#[test]
fn producer_runs_fresh_for_every_leaf() {
    let mut next = 0;
    let arr = dimensional::custom(
        move || {
            next += 1;
            vec![next]
        },
        2,
        2,
    )
    .unwrap();
    let expected = Nested::Node(vec![Nested::Leaf(vec![1]), Nested::Leaf(vec![2])]);
    assert_eq!(arr, expected);
}

#[test]
fn leaf_count_matches_length_to_the_depth() {
    let arr = dimensional::uniform(0, 3, 4).unwrap();
    // length^(depth-1) leaves, one element each.
    assert_eq!(utils::flatten(arr).len(), 27);
}

#[test]
fn depth_below_two_is_rejected() {
    assert!(matches!(
        dimensional::uniform(1, 3, 1),
        Err(Error::InvalidParameter { .. })
    ));
    let shallow: arraygen::Result<Nested<i32>> = dimensional::empty(3, 0);
    assert!(shallow.is_err());
}

#[test]
fn zero_length_is_rejected() {
    let empty: arraygen::Result<Nested<i32>> = dimensional::empty(0, 2);
    assert!(empty.is_err());
}
