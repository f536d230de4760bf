//! Shared helpers for the integration suites: compile a pattern and
//! check acceptance by epsilon-closure simulation over the state arena.

use std::collections::HashSet;

use re2nfa::fsm::{Label, RegexNfa, State};

pub fn compile(pattern: &str) -> RegexNfa {
    let mut nfa = RegexNfa::new(pattern);
    nfa.compile().unwrap();
    nfa
}

pub fn epsilon_closure(nfa: &RegexNfa, states: &HashSet<State>) -> HashSet<State> {
    let mut closure = states.clone();
    let mut stack: Vec<State> = states.iter().cloned().collect();
    while let Some(state) = stack.pop() {
        for &(label, end) in nfa.transitions(state) {
            if label == Label::Epsilon && closure.insert(end) {
                stack.push(end);
            }
        }
    }
    closure
}

pub fn accepts(nfa: &RegexNfa, input: &str) -> bool {
    let mut current = epsilon_closure(nfa, &HashSet::from([nfa.start]));
    for symbol in input.chars() {
        let mut next = HashSet::new();
        for &state in &current {
            for &(label, end) in nfa.transitions(state) {
                if label == Label::Symbol(symbol) {
                    next.insert(end);
                }
            }
        }
        current = epsilon_closure(nfa, &next);
        if current.is_empty() {
            return false;
        }
    }
    current.iter().any(|&state| nfa.is_accepting(state))
}

/// All strings over `alphabet` of length at most `max_len`, shortest
/// first.
pub fn strings_over(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &layer {
            for &symbol in alphabet {
                let mut string = prefix.clone();
                string.push(symbol);
                next.push(string);
            }
        }
        all.extend(next.iter().cloned());
        layer = next;
    }
    all
}
