use indoc::indoc;

use crate::{Anchor, Automaton, ClassKind, LoadError, StateId, Transition, TransitionKind};

fn kinds(automaton: &Automaton, id: u32) -> Vec<TransitionKind> {
    automaton
        .transitions(StateId(id))
        .iter()
        .map(|t| t.kind.clone())
        .collect()
}

#[test]
fn load_all_label_forms() {
    let automaton = Automaton::from_text(indoc! {r#"
        type: nfa
        states: 3
        final: 1 2
        rules:
        0->1 a \e x-z \s \.
        1->2 \^ \$ \b \B
    "#})
    .unwrap();

    assert_eq!(automaton.state_count(), 3);
    assert!(automaton.is_final(StateId(1)));
    assert!(automaton.is_final(StateId(2)));
    assert_eq!(
        kinds(&automaton, 0),
        vec![
            TransitionKind::Literal('a'),
            TransitionKind::Epsilon(None),
            TransitionKind::Range('x', 'z'),
            TransitionKind::Class(ClassKind::Space),
            TransitionKind::Class(ClassKind::Any),
        ]
    );
    assert_eq!(
        kinds(&automaton, 1),
        vec![
            TransitionKind::Epsilon(Some(Anchor::Start)),
            TransitionKind::Epsilon(Some(Anchor::End)),
            TransitionKind::Epsilon(Some(Anchor::WordBoundary)),
            TransitionKind::Epsilon(Some(Anchor::NotWordBoundary)),
        ]
    );
}

#[test]
fn load_space_label() {
    let automaton = Automaton::from_text("states: 2\nfinal: 1\nrules:\n0->1 a   b\n").unwrap();
    assert_eq!(
        kinds(&automaton, 0),
        vec![
            TransitionKind::Literal('a'),
            TransitionKind::Literal(' '),
            TransitionKind::Literal('b'),
        ]
    );
}

#[test]
fn rule_without_labels_is_epsilon() {
    let automaton = Automaton::from_text("states: 2\nfinal: 1\nrules:\n0->1\n").unwrap();
    assert_eq!(
        automaton.transitions(StateId(0)),
        &[Transition::epsilon(StateId(1))]
    );
}

#[test]
fn rule_lines_keep_priority_order() {
    let automaton = Automaton::from_text(indoc! {r#"
        states: 3
        final: 2
        rules:
        0->2 b
        0->1 a
    "#})
    .unwrap();
    let targets: Vec<u32> = automaton
        .transitions(StateId(0))
        .iter()
        .map(|t| t.target.get())
        .collect();
    assert_eq!(targets, vec![2, 1]);
}

#[test]
fn final_before_states_is_rejected() {
    let err = Automaton::from_text("final: 1\nstates: 2\n").unwrap_err();
    assert_eq!(err, LoadError::StatesNotDeclared { line: 1 });
}

#[test]
fn out_of_range_target_reports_line() {
    let err = Automaton::from_text("states: 2\nfinal: 1\nrules:\n0->5 a\n").unwrap_err();
    assert_eq!(
        err,
        LoadError::StateOutOfRange {
            line: 4,
            id: 5,
            count: 2
        }
    );
    assert_eq!(err.to_string(), "line 4: state 5 is out of range (0..2)");
}

#[test]
fn unknown_escape_is_rejected() {
    let err = Automaton::from_text("states: 2\nrules:\n0->1 \\q\n").unwrap_err();
    assert_eq!(
        err,
        LoadError::UnknownLabel {
            line: 3,
            label: "\\q".to_string()
        }
    );
}

#[test]
fn garbage_line_is_rejected() {
    let err = Automaton::from_text("states: 2\nhello\n").unwrap_err();
    assert!(matches!(err, LoadError::Malformed { line: 2, .. }));
}

#[test]
fn bad_state_count_and_type() {
    assert!(matches!(
        Automaton::from_text("states: zero\n"),
        Err(LoadError::InvalidStateCount { line: 1, .. })
    ));
    assert!(matches!(
        Automaton::from_text("states: 0\n"),
        Err(LoadError::InvalidStateCount { line: 1, .. })
    ));
    assert!(matches!(
        Automaton::from_text("type: dfa\nstates: 1\n"),
        Err(LoadError::UnsupportedType { line: 1, .. })
    ));
    assert_eq!(Automaton::from_text("\n\n"), Err(LoadError::Empty));
}
