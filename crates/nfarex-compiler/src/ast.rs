//! Syntax tree produced by the parser and consumed by the compiler.

use std::fmt::Write;

pub use nfarex_automaton::Anchor;
pub use nfarex_core::ClassKind;

/// A pattern node. Children are owned; the tree has no sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Ordered choice: earlier branches are preferred.
    Alternation(Vec<Node>),
    /// Concatenation. Empty matches the empty string.
    Sequence(Vec<Node>),
    Quantified(Box<Quantified>),
    Group(Box<Group>),
    Anchor(Anchor),
    Literal(char),
    /// Named class, including `.` as `ClassKind::Any`.
    Class(ClassKind),
    Set(CharGroup),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantified {
    pub body: Node,
    pub kind: QuantifierKind,
    pub greedy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantifierKind {
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
    /// `{m}`, `{m,}` or `{m,n}`.
    Range { min: u32, max: Option<u32> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub body: Node,
    /// 1-based capture index; `None` for `(?:...)`.
    pub capture: Option<u32>,
}

/// Bracketed set `[...]` / `[^...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGroup {
    pub negated: bool,
    pub items: Vec<SetItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetItem {
    Literal(char),
    Range(char, char),
    Class(ClassKind),
}

impl Node {
    pub fn literals(text: &str) -> Self {
        Node::Sequence(text.chars().map(Node::Literal).collect())
    }

    pub fn quantified(body: Node, kind: QuantifierKind, greedy: bool) -> Self {
        Node::Quantified(Box::new(Quantified { body, kind, greedy }))
    }

    pub fn capture(body: Node, index: u32) -> Self {
        Node::Group(Box::new(Group {
            body,
            capture: Some(index),
        }))
    }

    /// Capture indices in pre-order.
    pub fn captures(&self) -> Vec<u32> {
        let mut out = Vec::new();
        self.collect_captures(&mut out);
        out
    }

    fn collect_captures(&self, out: &mut Vec<u32>) {
        match self {
            Node::Alternation(nodes) | Node::Sequence(nodes) => {
                for node in nodes {
                    node.collect_captures(out);
                }
            }
            Node::Quantified(q) => q.body.collect_captures(out),
            Node::Group(g) => {
                if let Some(index) = g.capture {
                    out.push(index);
                }
                g.body.collect_captures(out);
            }
            Node::Anchor(_) | Node::Literal(_) | Node::Class(_) | Node::Set(_) => {}
        }
    }

    /// Indented one-node-per-line rendering, used by tests and debugging.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Node::Alternation(branches) => {
                writeln!(out, "{indent}Alternation").unwrap();
                for branch in branches {
                    branch.dump_into(out, depth + 1);
                }
            }
            Node::Sequence(items) => {
                writeln!(out, "{indent}Sequence").unwrap();
                for item in items {
                    item.dump_into(out, depth + 1);
                }
            }
            Node::Quantified(q) => {
                let lazy = if q.greedy { "" } else { " lazy" };
                writeln!(out, "{indent}Quantified {}{lazy}", q.kind).unwrap();
                q.body.dump_into(out, depth + 1);
            }
            Node::Group(g) => {
                match g.capture {
                    Some(index) => writeln!(out, "{indent}Group #{index}").unwrap(),
                    None => writeln!(out, "{indent}Group (?:)").unwrap(),
                }
                g.body.dump_into(out, depth + 1);
            }
            Node::Anchor(anchor) => writeln!(out, "{indent}Anchor {anchor:?}").unwrap(),
            Node::Literal(c) => writeln!(out, "{indent}Literal {c:?}").unwrap(),
            Node::Class(kind) => writeln!(out, "{indent}Class {kind}").unwrap(),
            Node::Set(group) => {
                write!(out, "{indent}Set").unwrap();
                if group.negated {
                    out.push_str(" ^");
                }
                for item in &group.items {
                    match item {
                        SetItem::Literal(c) => write!(out, " {c:?}").unwrap(),
                        SetItem::Range(lo, hi) => write!(out, " {lo:?}-{hi:?}").unwrap(),
                        SetItem::Class(kind) => write!(out, " {kind}").unwrap(),
                    }
                }
                out.push('\n');
            }
        }
    }
}

impl std::fmt::Display for QuantifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuantifierKind::ZeroOrOne => f.write_str("?"),
            QuantifierKind::ZeroOrMore => f.write_str("*"),
            QuantifierKind::OneOrMore => f.write_str("+"),
            QuantifierKind::Range { min, max: None } => write!(f, "{{{min},}}"),
            QuantifierKind::Range {
                min,
                max: Some(max),
            } if min == max => write!(f, "{{{min}}}"),
            QuantifierKind::Range {
                min,
                max: Some(max),
            } => write!(f, "{{{min},{max}}}"),
        }
    }
}
