use std::{error::Error, fmt::Display};

use log::debug;

use crate::{
    parser::{run_eval, EvalError},
    utils::BuildFlags,
};

pub type State = usize;

/// A transition label: either a literal input symbol or the empty-word
/// label. The letter `e` is reserved for the empty word and `.` for
/// concatenation, so neither can be matched literally.
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Epsilon,
    Symbol(char),
}

impl Label {
    pub fn from_symbol(symbol: char) -> Label {
        if symbol == 'e' {
            Label::Epsilon
        } else {
            Label::Symbol(symbol)
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Epsilon => write!(f, "ε"),
            Self::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

#[derive(Debug)]
struct StateNode {
    transitions: Vec<(Label, State)>,
    accepting: bool,
}

/// A sub-automaton with one entry state and one accepting exit state.
///
/// Fragments are consumed by the composition operations on [`RegexNfa`]:
/// passing one to `concatenate`, `union`, `star` or `plus` moves it in
/// and clears its end state's accepting flag, so the composite fragment
/// is the only one left with an accepting end.
#[derive(Debug)]
pub struct Fragment {
    pub start: State,
    pub end: State,
}

#[derive(Debug)]
pub enum ReError {
    EvaluationFailed(EvalError),
}

impl Display for ReError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EvaluationFailed(eval_error) => write!(f, "{}", eval_error),
        }
    }
}

impl Error for ReError {}

#[derive(Debug)]
pub struct RegexNfa {
    pattern: String,
    flags: BuildFlags,
    states: Vec<StateNode>,
    pub start: State,
    pub accept: State,
}

impl RegexNfa {
    pub fn new(pattern: &str) -> RegexNfa {
        RegexNfa::with_flags(pattern, BuildFlags::NO_FLAG)
    }

    pub fn with_flags(pattern: &str, flags: BuildFlags) -> RegexNfa {
        RegexNfa {
            pattern: String::from(pattern),
            flags,
            states: Vec::new(),
            start: Default::default(),
            accept: Default::default(),
        }
    }

    pub fn get_flags(&self) -> BuildFlags {
        self.flags
    }

    /// Total number of states allocated so far.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn gen_state(&mut self) -> State {
        self.states.push(StateNode {
            transitions: Vec::new(),
            accepting: false,
        });
        self.states.len() - 1
    }

    pub fn add_transition(&mut self, start: State, end: State, label: Label) {
        self.states[start].transitions.push((label, end));
    }

    pub fn epsilon(&mut self, start: State, end: State) {
        self.add_transition(start, end, Label::Epsilon)
    }

    /// Outgoing transitions of `state`, in registration order.
    pub fn transitions(&self, state: State) -> &[(Label, State)] {
        &self.states[state].transitions
    }

    pub fn is_accepting(&self, state: State) -> bool {
        self.states[state].accepting
    }

    pub fn symbol(&mut self, symbol: char) -> Fragment {
        let start = self.gen_state();
        let end = self.gen_state();
        self.states[end].accepting = true;
        self.add_transition(start, end, Label::from_symbol(symbol));
        Fragment { start, end }
    }

    pub fn concatenate(&mut self, first: Fragment, second: Fragment) -> Fragment {
        self.epsilon(first.end, second.start);
        self.states[first.end].accepting = false;
        Fragment {
            start: first.start,
            end: second.end,
        }
    }

    pub fn union(&mut self, first: Fragment, second: Fragment) -> Fragment {
        let start = self.gen_state();
        let end = self.gen_state();
        self.states[end].accepting = true;
        self.states[first.end].accepting = false;
        self.states[second.end].accepting = false;
        self.epsilon(start, first.start);
        self.epsilon(start, second.start);
        self.epsilon(first.end, end);
        self.epsilon(second.end, end);
        Fragment { start, end }
    }

    pub fn star(&mut self, inner: Fragment) -> Fragment {
        let start = self.gen_state();
        let end = self.gen_state();
        self.states[end].accepting = true;
        self.states[inner.end].accepting = false;
        self.epsilon(start, inner.start);
        self.epsilon(start, end);
        self.epsilon(inner.end, inner.start);
        self.epsilon(inner.end, end);
        Fragment { start, end }
    }

    pub fn plus(&mut self, inner: Fragment) -> Fragment {
        let start = self.gen_state();
        let end = self.gen_state();
        self.states[end].accepting = true;
        self.states[inner.end].accepting = false;
        self.epsilon(start, inner.start);
        self.epsilon(inner.end, inner.start);
        self.epsilon(inner.end, end);
        Fragment { start, end }
    }

    pub fn compile(&mut self) -> Result<(), ReError> {
        let pattern = self.pattern.clone();
        match run_eval(&pattern, self) {
            Ok(fragment) => {
                self.start = fragment.start;
                self.accept = fragment.end;
                debug!("compiled {:?} into {} states", self.pattern, self.states.len());
                if self.flags.intersects(BuildFlags::DEBUG) {
                    debug!("{}", self.as_graphviz_code());
                }
                Ok(())
            }
            Err(eval_error) => Err(ReError::EvaluationFailed(eval_error)),
        }
    }

    /// Convert the automaton to GraphViz dot code for debugging purposes.
    pub fn as_graphviz_code(&self) -> String {
        let mut out = String::new();
        let opts = "[fillcolor=\"#EEEEEE\" fontcolor=\"#888888\"]";
        for (index, node) in self.states.iter().enumerate() {
            if index == self.start {
                out += &format!("node_{}[label=\"{}\"]{}\n", index, index, "[fillcolor=green]");
            } else if node.accepting {
                out += &format!("node_{}[label=\"{}\"shape=doublecircle]\n", index, index);
            } else {
                out += &format!("node_{}[label=\"{}\"]{}\n", index, index, opts);
            }
        }
        for (index, node) in self.states.iter().enumerate() {
            for (label, end) in &node.transitions {
                if let Label::Epsilon = label {
                    out += &format!("node_{} -> node_{}[style=dashed]\n", index, end);
                } else {
                    out += &format!("node_{} -> node_{}[label=\"{}\"]\n", index, end, label);
                }
            }
        }
        format!(
            "digraph G {{  rankdir=\"LR\" graph [fontname = \"Courier New\"];
                node [fontname = \"verdana\", style = rounded];
                edge [fontname = \"verdana\"];
                {{\n{}\n}}}}",
            out
        )
    }
}
