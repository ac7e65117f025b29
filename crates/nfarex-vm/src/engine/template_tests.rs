use super::{Template, VM};
use crate::test_utils::compile;

fn expand(template: &str) -> String {
    let automaton = compile("(a)(b)");
    let m = VM::new(&automaton).find("ab").unwrap().unwrap();
    Template::parse(template).expand(&m)
}

#[test]
fn group_references() {
    assert_eq!(expand("$2$1"), "ba");
    assert_eq!(expand("[$0]"), "[ab]");
}

#[test]
fn dollar_forms() {
    assert_eq!(expand("$2$1$$ $3 $x $"), "ba$  $x $");
    assert_eq!(expand("$$$1"), "$a");
}

#[test]
fn digits_are_taken_greedily() {
    assert_eq!(expand("$12"), "");
    assert_eq!(expand("$01"), "a");
    assert_eq!(expand("$99999999999999999999999"), "");
}

#[test]
fn literal_templates() {
    assert!(Template::parse("plain $ text $$").is_literal());
    assert!(!Template::parse("x$1").is_literal());
    assert_eq!(expand("plain $ text $$"), "plain $ text $");
}
