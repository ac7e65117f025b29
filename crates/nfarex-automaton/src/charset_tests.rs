use nfarex_core::ClassKind;

use crate::CharSet;

#[test]
fn negated_range_rejects_members() {
    let mut set = CharSet::new(true);
    set.toggle_range('a', 'c');
    assert!(!set.contains('b'));
    assert!(set.contains('d'));
    assert!(set.contains('é'));
}

#[test]
fn two_ranges_accept_both_cases() {
    let mut set = CharSet::new(false);
    set.toggle_range('a', 'z');
    set.toggle_range('A', 'Z');
    assert!(set.contains('M'));
    assert!(set.contains('q'));
    assert!(!set.contains('5'));
}

#[test]
fn overlapping_items_cancel() {
    let mut set = CharSet::new(false);
    set.toggle_range('a', 'e');
    set.toggle('c');
    assert!(set.contains('b'));
    assert!(!set.contains('c'));
    assert_eq!(set.ranges(), vec![('a', 'b'), ('d', 'e')]);
}

#[test]
fn negated_class_covers_non_ascii_slot() {
    let mut set = CharSet::new(false);
    set.toggle_class(ClassKind::NotWord);
    assert!(set.has_other());
    assert!(set.contains('ж'));
    assert!(set.contains('-'));
    assert!(!set.contains('x'));
}

#[test]
fn non_ascii_literals_are_not_representable() {
    let mut set = CharSet::new(false);
    assert!(!set.toggle('ß'));
    assert!(!set.toggle_range('a', 'ß'));
    assert_eq!(set, CharSet::new(false));
}

#[test]
fn display_lists_ranges() {
    let mut set = CharSet::new(true);
    set.toggle_range('0', '9');
    set.toggle('_');
    assert_eq!(set.to_string(), "[^0-9_]");
}
