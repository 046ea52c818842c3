//! Cursor state machines behind the list prompts
//!
//! Both machines are pure: they consume navigation events and report an
//! outcome only on an explicit confirm or cancel.

use super::Selection;

/// Navigation events a list prompt understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Up,
    Down,
    Toggle,
    Confirm,
    Cancel,
}

fn step_cursor(cursor: usize, len: usize, nav: Nav) -> usize {
    match nav {
        Nav::Up if cursor == 0 => len - 1,
        Nav::Up => cursor - 1,
        Nav::Down => (cursor + 1) % len,
        _ => cursor,
    }
}

/// Pick exactly one option
#[derive(Debug, Clone)]
pub struct SingleSelect {
    cursor: usize,
    len: usize,
}

impl SingleSelect {
    /// `len` must be non-zero
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a list prompt needs at least one option");
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply one event; returns the outcome once the prompt is finished
    pub fn handle(&mut self, nav: Nav) -> Option<Selection<usize>> {
        match nav {
            Nav::Confirm => Some(Selection::Confirmed(self.cursor)),
            Nav::Cancel => Some(Selection::Cancelled),
            Nav::Toggle => None,
            Nav::Up | Nav::Down => {
                self.cursor = step_cursor(self.cursor, self.len, nav);
                None
            }
        }
    }
}

/// Toggle any subset of options. The chosen set keeps toggle order.
#[derive(Debug, Clone)]
pub struct MultiSelect {
    cursor: usize,
    len: usize,
    chosen: Vec<usize>,
}

impl MultiSelect {
    /// `len` must be non-zero
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "a list prompt needs at least one option");
        Self {
            cursor: 0,
            len,
            chosen: Vec::new(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn chosen(&self) -> &[usize] {
        &self.chosen
    }

    pub fn is_chosen(&self, index: usize) -> bool {
        self.chosen.contains(&index)
    }

    pub fn handle(&mut self, nav: Nav) -> Option<Selection<Vec<usize>>> {
        match nav {
            Nav::Confirm => Some(Selection::Confirmed(self.chosen.clone())),
            Nav::Cancel => Some(Selection::Cancelled),
            Nav::Toggle => {
                if let Some(pos) = self.chosen.iter().position(|&i| i == self.cursor) {
                    self.chosen.remove(pos);
                } else {
                    self.chosen.push(self.cursor);
                }
                None
            }
            Nav::Up | Nav::Down => {
                self.cursor = step_cursor(self.cursor, self.len, nav);
                None
            }
        }
    }
}
