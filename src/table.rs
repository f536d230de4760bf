use std::io::{self, Write};

use itertools::Itertools;
use log::debug;

use crate::fsm::{Label, RegexNfa, State};

const UNASSIGNED: usize = usize::MAX;

/// Symbol-indexed transition table extracted from a compiled automaton.
///
/// Display ids are assigned during a depth-first walk from the start
/// state (id 0). A state numbers all of its destinations, in transition
/// registration order, before the walk descends into any of them, so
/// row contents depend on registration order rather than symbol order.
#[derive(Debug, PartialEq)]
pub struct TransitionTable {
    state_count: usize,
    finals: Vec<bool>,
    rows: Vec<(Label, Vec<Vec<usize>>)>,
}

impl TransitionTable {
    pub fn extract(nfa: &RegexNfa) -> TransitionTable {
        let state_count = nfa.state_count();
        let mut table = TransitionTable {
            state_count,
            finals: vec![false; state_count],
            rows: Vec::new(),
        };
        if state_count == 0 {
            return table;
        }
        let mut ids = vec![UNASSIGNED; state_count];
        let mut visited = vec![false; state_count];
        let mut last_id = 0;
        ids[nfa.start] = 0;
        table.visit(nfa, nfa.start, 0, &mut ids, &mut visited, &mut last_id);
        debug!(
            "extracted {} label rows over {} states",
            table.rows.len(),
            state_count
        );
        table
    }

    fn visit(
        &mut self,
        nfa: &RegexNfa,
        state: State,
        id: usize,
        ids: &mut [usize],
        visited: &mut [bool],
        last_id: &mut usize,
    ) {
        if visited[state] {
            return;
        }
        visited[state] = true;
        self.finals[id] = nfa.is_accepting(state);
        for &(label, end) in nfa.transitions(state) {
            if ids[end] == UNASSIGNED {
                *last_id += 1;
                ids[end] = *last_id;
            }
            self.row_mut(label)[id].push(ids[end]);
        }
        for &(_, end) in nfa.transitions(state) {
            self.visit(nfa, end, ids[end], ids, visited, last_id);
        }
    }

    fn row_mut(&mut self, label: Label) -> &mut Vec<Vec<usize>> {
        let position = match self.rows.iter().position(|(row_label, _)| *row_label == label) {
            Some(position) => position,
            None => {
                self.rows.push((label, vec![Vec::new(); self.state_count]));
                self.rows.len() - 1
            }
        };
        &mut self.rows[position].1
    }

    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Accepting flags, indexed by display id.
    pub fn finals(&self) -> &[bool] {
        &self.finals
    }

    /// Label rows in first-encountered order; each cell holds the
    /// destination display ids for that label from the cell's state.
    pub fn rows(&self) -> &[(Label, Vec<Vec<usize>>)] {
        &self.rows
    }

    /// Render the table in the semicolon-delimited external format:
    /// a final-state flag line, a state-name line, then one row per
    /// label with comma-joined destination names per cell.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for &accepting in &self.finals {
            if accepting {
                write!(out, ";F")?;
            } else {
                write!(out, ";")?;
            }
        }
        writeln!(out)?;
        for id in 0..self.state_count {
            write!(out, ";q{}", id)?;
        }
        writeln!(out)?;
        for (label, cells) in &self.rows {
            write!(out, "{};", label)?;
            for cell in cells {
                write!(out, "{};", cell.iter().map(|id| format!("q{}", id)).join(","))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
