//! End-to-end tests: pattern text to automaton dump.

use nfarex_automaton::{Flags, TransitionKind};

use crate::ast::{CharGroup, Node, QuantifierKind, SetItem};
use crate::test_utils::automaton;
use crate::{CompileError, compile, parse};

#[test]
fn compile_sequence() {
    insta::assert_snapshot!(automaton("ab", Flags::default()), @r"
    states: 3
    final: 2
    rules:
    0->1 a
    1->2 b
    ");
}

#[test]
fn compile_empty_pattern() {
    insta::assert_snapshot!(automaton("", Flags::default()), @r"
    states: 1
    final: 0
    rules:
    ");
}

#[test]
fn compile_alternation() {
    insta::assert_snapshot!(automaton("a|b", Flags::default()), @r"
    states: 6
    final: 5
    rules:
    0->1 \e
    0->3 \e
    1->2 a
    2->5 \e
    3->4 b
    4->5 \e
    ");
}

#[test]
fn compile_capture_group() {
    insta::assert_snapshot!(automaton("(a)", Flags::default()), @r"
    # group 1: 1-3
    states: 4
    final: 3
    rules:
    0->1 \e
    1->2 a
    2->3 \e
    ");
}

#[test]
fn compile_non_capturing_group() {
    insta::assert_snapshot!(automaton("(?:a)", Flags::default()), @r"
    states: 2
    final: 1
    rules:
    0->1 a
    ");
}

#[test]
fn compile_anchors_with_flags() {
    let flags = Flags::default().multiline(true);
    insta::assert_snapshot!(automaton(r"^a$\b", flags), @r"
    # flags: m
    states: 5
    final: 4
    rules:
    0->1 \^
    1->2 a
    2->3 \$
    3->4 \b
    ");
}

#[test]
fn compile_classes_and_sets() {
    insta::assert_snapshot!(automaton(r"\d.[a-c\d][^x]", Flags::default()), @r"
    states: 5
    final: 4
    rules:
    0->1 \d
    1->2 \.
    2->3 [0-9a-c]
    3->4 [^x]
    ");
}

#[test]
fn set_members_toggle() {
    // Listing a character twice removes it again.
    insta::assert_snapshot!(automaton("[aab]", Flags::default()), @r"
    states: 2
    final: 1
    rules:
    0->1 [b]
    ");
}

#[test]
fn set_with_negated_class_covers_non_ascii() {
    let tree = parse(r"[\W]").unwrap();
    let automaton = compile(&tree, Flags::default()).unwrap();
    let TransitionKind::Set(set) = &automaton.transitions(automaton.start())[0].kind else {
        panic!("expected a set edge");
    };

    assert!(set.contains('é'));
    assert!(set.contains('-'));
    assert!(!set.contains('a'));
}

#[test]
fn repeated_group_records_every_copy() {
    insta::assert_snapshot!(automaton("(a){2}", Flags::default()), @r"
    # group 1: 1-3 4-6
    states: 7
    final: 6
    rules:
    0->1 \e
    1->2 a
    2->3 \e
    3->4 \e
    4->5 a
    5->6 \e
    ");
}

#[test]
fn group_under_zero_repetition_is_declared() {
    insta::assert_snapshot!(automaton("(a){0}", Flags::default()), @r"
    # group 1: (none)
    states: 1
    final: 0
    rules:
    ");
}

#[test]
fn group_count_follows_highest_index() {
    let tree = parse("(a)(?:(b)|(c))").unwrap();
    let automaton = compile(&tree, Flags::default()).unwrap();

    assert_eq!(automaton.group_count(), 3);
    assert_eq!(automaton.group_spans(2).len(), 1);
}

#[test]
fn every_edge_targets_an_existing_state() {
    for pattern in ["(a|b)*c", "(?:x{2,4}?)+", r"^(\w+)@(\w+)$", "a{0}|b{1,}"] {
        let tree = parse(pattern).unwrap();
        let automaton = compile(&tree, Flags::default()).unwrap();
        assert!(automaton.dangling_ids().is_empty(), "{pattern}");
        assert_eq!(automaton.finals().len(), 1, "{pattern}");
    }
}

#[test]
fn reject_empty_alternation() {
    let err = compile(&Node::Alternation(vec![]), Flags::default()).unwrap_err();
    assert_eq!(err, CompileError::EmptyAlternation);
}

#[test]
fn reject_inverted_bounds() {
    let tree = Node::quantified(
        Node::Literal('a'),
        QuantifierKind::Range {
            min: 3,
            max: Some(1),
        },
        true,
    );
    let err = compile(&tree, Flags::default()).unwrap_err();
    assert_eq!(err, CompileError::BoundsOutOfOrder { min: 3, max: 1 });
    assert_eq!(err.to_string(), "quantifier bounds out of order: {3,1}");
}

#[test]
fn reject_oversized_unrolling() {
    let inner = Node::quantified(
        Node::Literal('a'),
        QuantifierKind::Range {
            min: 1000,
            max: Some(1000),
        },
        true,
    );
    let tree = Node::quantified(
        inner,
        QuantifierKind::Range {
            min: 2000,
            max: None,
        },
        true,
    );
    let err = compile(&tree, Flags::default()).unwrap_err();
    assert_eq!(err, CompileError::TooManyStates { limit: 1 << 20 });
}

#[test]
fn reject_bad_set_members() {
    let set = |items| {
        Node::Set(CharGroup {
            negated: false,
            items,
        })
    };

    let err = compile(&set(vec![SetItem::Literal('é')]), Flags::default()).unwrap_err();
    assert_eq!(err, CompileError::UnsupportedSetMember('é'));

    let err = compile(&set(vec![SetItem::Range('z', 'a')]), Flags::default()).unwrap_err();
    assert_eq!(err, CompileError::RangeOutOfOrder { lo: 'z', hi: 'a' });
}

#[test]
fn reject_zero_group_index() {
    let tree = Node::capture(Node::literals("ab"), 0);
    let err = compile(&tree, Flags::default()).unwrap_err();
    assert_eq!(err, CompileError::ZeroGroupIndex);
}
