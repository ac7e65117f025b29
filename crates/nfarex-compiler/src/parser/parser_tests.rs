use indoc::indoc;

use crate::Error;
use crate::diagnostics::DiagnosticKind;
use crate::parser::{ParseConfig, parse_with};
use crate::test_utils::{ast, parse_error};

#[test]
fn alternation_of_sequences() {
    insta::assert_snapshot!(ast("a|bc"), @r"
    Alternation
      Literal 'a'
      Sequence
        Literal 'b'
        Literal 'c'
    ");
}

#[test]
fn empty_branches() {
    insta::assert_snapshot!(ast("a||b"), @r"
    Alternation
      Literal 'a'
      Sequence
      Literal 'b'
    ");
    assert_eq!(ast(""), "Sequence\n");
}

#[test]
fn groups_numbered_by_opening_paren() {
    insta::assert_snapshot!(ast("((a)b)(?:c(d))"), @r"
    Sequence
      Group #1
        Sequence
          Group #2
            Literal 'a'
          Literal 'b'
      Group (?:)
        Sequence
          Literal 'c'
          Group #3
            Literal 'd'
    ");
}

#[test]
fn quantifiers() {
    insta::assert_snapshot!(ast("a*?b+c{2,}d{3}e{1,2}?f??"), @r"
    Sequence
      Quantified * lazy
        Literal 'a'
      Quantified +
        Literal 'b'
      Quantified {2,}
        Literal 'c'
      Quantified {3}
        Literal 'd'
      Quantified {1,2} lazy
        Literal 'e'
      Quantified ? lazy
        Literal 'f'
    ");
}

#[test]
fn malformed_braces_are_literal() {
    insta::assert_snapshot!(ast("a{,2}"), @r"
    Sequence
      Literal 'a'
      Literal '{'
      Literal ','
      Literal '2'
      Literal '}'
    ");
}

#[test]
fn anchors() {
    insta::assert_snapshot!(ast(r"^\bx\B$"), @r"
    Sequence
      Anchor Start
      Anchor WordBoundary
      Literal 'x'
      Anchor NotWordBoundary
      Anchor End
    ");
}

#[test]
fn escapes_and_classes() {
    insta::assert_snapshot!(ast(r"\d\W.\n\.\t\q"), @r"
    Sequence
      Class \d
      Class \W
      Class .
      Literal '\n'
      Literal '.'
      Literal '\t'
      Literal 'q'
    ");
}

#[test]
fn sets() {
    insta::assert_snapshot!(ast(r"[^a-c\s-][a-][.*(][\]\-]"), @r"
    Sequence
      Set ^ 'a'-'c' \s '-'
      Set 'a' '-'
      Set '.' '*' '('
      Set ']' '-'
    ");
}

#[test]
fn empty_set_then_literal_bracket() {
    insta::assert_snapshot!(ast("[]a]"), @r"
    Sequence
      Set
      Literal 'a'
      Literal ']'
    ");
}

#[test]
fn unclosed_group() {
    let diag = parse_error("(a");
    assert_eq!(diag.kind, DiagnosticKind::UnclosedGroup);
    assert_eq!(diag.range, 0..1);
}

#[test]
fn unmatched_paren() {
    let diag = parse_error("a)");
    assert_eq!(diag.kind, DiagnosticKind::UnmatchedParen);
    assert_eq!(diag.range, 1..2);
}

#[test]
fn nothing_to_repeat() {
    assert_eq!(parse_error("*a").range, 0..1);
    assert_eq!(parse_error("a**").range, 2..3);
    assert_eq!(parse_error("^*").range, 1..2);
    assert_eq!(parse_error("a|+").kind, DiagnosticKind::NothingToRepeat);
}

#[test]
fn unclosed_set() {
    let diag = parse_error("x[ab");
    assert_eq!(diag.kind, DiagnosticKind::UnclosedSet);
    assert_eq!(diag.range, 1..2);
}

#[test]
fn bad_bounds() {
    let diag = parse_error("a{3,1}");
    assert_eq!(diag.kind, DiagnosticKind::BoundsOutOfOrder);
    assert_eq!(diag.range, 1..6);

    assert_eq!(
        parse_error("a{99999999999}").kind,
        DiagnosticKind::BoundTooLarge
    );

    let diag = parse_error("a{4000000000}");
    assert_eq!(diag.kind, DiagnosticKind::BoundTooLarge);
    assert_eq!(diag.range, 1..13);
    assert_eq!(diag.message, "quantifier bound exceeds 1000");

    assert_eq!(parse_error("a{2,1001}").kind, DiagnosticKind::BoundTooLarge);
    assert!(crate::parse("a{1000}").is_ok());
}

#[test]
fn bad_set_members() {
    let diag = parse_error("[z-a]");
    assert_eq!(diag.kind, DiagnosticKind::RangeOutOfOrder);
    assert_eq!(diag.range, 1..4);

    let diag = parse_error("[é]");
    assert_eq!(diag.kind, DiagnosticKind::NonAsciiInSet);
    assert_eq!(diag.range, 1..3);
}

#[test]
fn dangling_backslash() {
    let diag = parse_error("ab\\");
    assert_eq!(diag.kind, DiagnosticKind::DanglingBackslash);
    assert_eq!(diag.range, 2..3);
}

#[test]
fn nesting_limit() {
    let shallow = ParseConfig::new().with_max_depth(2);
    assert!(parse_with("((a))", shallow).is_ok());

    let tight = ParseConfig::new().with_max_depth(1);
    assert!(matches!(
        parse_with("((a))", tight),
        Err(Error::RecursionLimitExceeded)
    ));
}

#[test]
fn deep_nesting_within_default_limit() {
    let depth = 100;
    let source = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
    let tree = crate::parse(&source).unwrap();
    assert_eq!(tree.captures().len(), depth);
}

#[test]
fn error_display() {
    let err = crate::parse("(a").unwrap_err();
    assert_eq!(err.to_string(), "pattern parsing failed with 1 errors");

    let source = indoc! {"
        ab)
    "}
    .trim();
    let Error::ParseError(diagnostics) = crate::parse(source).unwrap_err() else {
        panic!("expected parse error");
    };
    insta::assert_snapshot!(diagnostics.printer().render(), @"error at 2..3: unmatched `)`");
}
