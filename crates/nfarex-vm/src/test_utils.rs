use nfarex_automaton::{Automaton, Flags};

pub fn compile(pattern: &str) -> Automaton {
    compile_with(pattern, Flags::default())
}

pub fn compile_with(pattern: &str, flags: Flags) -> Automaton {
    let tree = nfarex_compiler::parse(pattern).unwrap();
    nfarex_compiler::compile(&tree, flags).unwrap()
}
