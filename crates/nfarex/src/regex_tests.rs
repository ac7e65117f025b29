use indoc::indoc;

use crate::{Colors, Error, Flags, FuelLimits, Regex, RuntimeError, Verbosity};

#[test]
fn whole_match_and_groups() {
    let re = Regex::new("(a)(b)").unwrap();
    let m = re.find("xaby").unwrap().unwrap();

    assert_eq!(re.group_count(), 2);
    assert_eq!(m.as_str(), "ab");
    assert_eq!(m.start(), 1);
    assert_eq!(m.group(1), Some("a"));
    assert_eq!(m.group(2), Some("b"));
}

#[test]
fn last_repetition_wins() {
    let re = Regex::new("(a)*").unwrap();
    let m = re.find("aaa").unwrap().unwrap();

    assert_eq!(m.as_str(), "aaa");
    assert_eq!(m.group(1), Some("a"));
}

#[test]
fn greedy_and_lazy() {
    let greedy = Regex::new("a*").unwrap();
    assert_eq!(greedy.find("aaa").unwrap().unwrap().as_str(), "aaa");

    let lazy = Regex::new("a*?").unwrap();
    assert_eq!(lazy.find("aaa").unwrap().unwrap().as_str(), "");
}

#[test]
fn anchors_and_multiline() {
    let re = Regex::new("^abc$").unwrap();
    assert!(re.is_match("abc").unwrap());
    assert!(!re.is_match("xabc").unwrap());
    assert!(!re.is_match("abcx").unwrap());

    assert!(!Regex::new("^b").unwrap().is_match("a\nb").unwrap());

    let re = Regex::builder("^b").multiline(true).build().unwrap();
    assert_eq!(re.find("a\nb").unwrap().map(|m| m.start()), Some(2));
}

#[test]
fn flag_string() {
    let re = Regex::builder("^a.b$").flags("ms").build().unwrap();
    assert_eq!(re.flags(), Flags::default().multiline(true).dotall(true));
    assert!(re.is_match("x\na\nb").unwrap());

    let err = Regex::builder("a").flags("mx").build().unwrap_err();
    assert!(matches!(err, Error::UnknownFlag(_)));
    assert_eq!(err.to_string(), "unknown flag 'x'");
}

#[test]
fn replace_all() {
    let re = Regex::new(r"(\w+)@(\w+)").unwrap();
    assert_eq!(re.replace_all("user@host", "$2:$1").unwrap(), "host:user");
    assert_eq!(re.replace_all("user@host", "$$1").unwrap(), "$1");
    assert_eq!(
        re.replace_all("a@b, c@d", "$2.$1").unwrap(),
        "b.a, d.c"
    );
}

#[test]
fn find_all_offsets() {
    let re = Regex::new("a").unwrap();
    let starts: Vec<_> = re
        .find_all("aaa")
        .unwrap()
        .iter()
        .map(|m| (m.start(), m.as_str()))
        .collect();

    assert_eq!(starts, vec![(0, "a"), (1, "a"), (2, "a")]);
}

#[test]
fn nested_star_terminates() {
    let re = Regex::new("(a*)*b").unwrap();
    assert!(!re.is_match("aaaaaaaaaaaaaaaaaaaaaaaac").unwrap());
}

#[test]
fn exec_is_anchored() {
    let re = Regex::new("b+").unwrap();
    assert!(re.exec("abb", 0).unwrap().is_reject());
    assert_eq!(re.exec("abb", 1).unwrap().as_str(), "bb");
}

#[test]
fn parse_error_renders() {
    let source = "a(b";
    let Error::Pattern(nfarex_compiler::Error::ParseError(diagnostics)) =
        Regex::new(source).unwrap_err()
    else {
        panic!("expected a parse error");
    };

    insta::assert_snapshot!(diagnostics.printer().source(source).render(), @r"
    error: missing closing `)`
      |
    1 | a(b
      |  ^ missing closing `)`
    ");
}

#[test]
fn nesting_limit() {
    let err = Regex::builder("((a))").max_depth(1).build().unwrap_err();
    assert!(matches!(
        err,
        Error::Pattern(nfarex_compiler::Error::RecursionLimitExceeded)
    ));
}

#[test]
fn fuel_limit() {
    let re = Regex::builder("(a|b)*c").exec_fuel(10).build().unwrap();
    let err = re.find("abababab").unwrap_err();
    assert!(matches!(
        err,
        Error::Runtime(RuntimeError::ExecFuelExhausted(10))
    ));

    let relaxed = re.with_limits(FuelLimits::new());
    assert!(!relaxed.is_match("abababab").unwrap());
}

#[test]
fn loaded_automaton() {
    let re = Regex::from_text(indoc! {r"
        type: nfa
        states: 4
        final: 3
        rules:
        0->1 \^
        1->2 a-c
        2->2 a-c
        2->3 \$
    "})
    .unwrap();

    assert!(re.is_match("abcba").unwrap());
    assert!(!re.is_match("abd").unwrap());
    assert_eq!(re.group_count(), 0);
}

#[test]
fn loaded_automaton_with_flags() {
    let source = indoc! {r"
        states: 3
        final: 2
        rules:
        0->1 \^
        1->2 b
    "};

    let re = Regex::from_text(source).unwrap();
    assert!(!re.is_match("a\nb").unwrap());

    let re = re.with_flags(Flags::default().multiline(true));
    assert!(re.flags().multiline);
    assert_eq!(re.find("a\nb").unwrap().map(|m| m.start()), Some(2));
}

#[test]
fn long_text_within_default_limits() {
    let text = "a".repeat(300_000);
    let m = Regex::new("a*").unwrap().find(&text).unwrap().unwrap();
    assert_eq!(m.end(), 300_000);
}

#[test]
fn load_error_surfaces() {
    let err = Regex::from_text("final: 0").unwrap_err();
    assert!(matches!(err, Error::Load(_)));
}

#[test]
fn from_str_and_try_from() {
    let re: Regex = "x+".parse().unwrap();
    assert!(re.is_match("axxb").unwrap());

    let re = Regex::try_from("[").map(|_| ());
    assert!(re.is_err());
}

#[test]
fn dump_compiled_pattern() {
    let re = Regex::new("a|b").unwrap();
    insta::assert_snapshot!(re.dump(Colors::OFF), @r"
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
fn trace_find() {
    let re = Regex::new("b").unwrap();
    insta::assert_snapshot!(re.trace("ab", Verbosity::Default, Colors::OFF).unwrap(), @r#"
    scan @0
      pop 0 @0 #0 a
    reject @0
    scan @1
      pop 0 @1 #0 b
      pop 1 @2 #1 $
    accept 1..2 "b"
    "#);
}

#[test]
fn automaton_serializes() {
    let re = Regex::new(r"(\d+)-[a-f]").unwrap();
    let json = serde_json::to_string(re.automaton()).unwrap();
    let back: crate::Automaton = serde_json::from_str(&json).unwrap();

    assert_eq!(&back, re.automaton());
    let reloaded = Regex::from_automaton(back);
    assert_eq!(
        reloaded.find("x12-c").unwrap().unwrap().group(1),
        Some("12")
    );
}

#[test]
fn character_sets() {
    let re = Regex::new("^[^a-c]$").unwrap();
    assert!(!re.is_match("b").unwrap());
    assert!(re.is_match("d").unwrap());

    assert!(Regex::new("[a-zA-Z]").unwrap().is_match("M").unwrap());
}

#[test]
fn path_reassembles_match() {
    let re = Regex::new("(a|b)+c").unwrap();
    let path = re.exec("abac", 0).unwrap();

    assert_eq!(path.consumed().len(), path.states().len() - 1);
    assert_eq!(path.consumed().concat(), "abac");
    assert_eq!(path.as_str(), "abac");
}
