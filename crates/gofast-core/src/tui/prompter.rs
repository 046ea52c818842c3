//! Keyboard-driven list prompts

use crate::resolver::{MultiSelect, Nav, Prompter, Selection, SingleSelect, Validator};
use crate::steps::Step;
use console::{style, Key, Term};
use std::io;
use tracing::debug;

/// [`Prompter`] on the controlling terminal
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn run_list<L: ListState>(&self, step: &Step, mut list: L) -> io::Result<Selection<L::Output>> {
        let _cursor = HiddenCursor::new(&self.term)?;

        loop {
            let drawn = self.draw(step, &list)?;
            let key = self.term.read_key()?;
            self.term.clear_last_lines(drawn)?;

            if let Some(outcome) = key_to_nav(&key, step.multi).and_then(|nav| list.handle(nav)) {
                return Ok(outcome);
            }
        }
    }

    fn draw<L: ListState>(&self, step: &Step, list: &L) -> io::Result<usize> {
        let mut lines = vec![format!("{}  {}", style("◆").cyan(), style(step.prompt).bold())];

        for (index, option) in step.options.iter().enumerate() {
            let focused = index == list.cursor();
            let marker = match (step.multi, list.is_chosen(index)) {
                (true, true) => style("■").green().to_string(),
                (true, false) => style("□").dim().to_string(),
                (false, _) if focused => style("●").green().to_string(),
                (false, _) => style("○").dim().to_string(),
            };
            let label = if focused {
                style(option.label).cyan().to_string()
            } else {
                option.label.to_string()
            };
            let pointer = if focused { style("›").cyan().to_string() } else { " ".to_string() };
            lines.push(format!(
                "{}  {} {} {}  {}",
                style("│").cyan(),
                pointer,
                marker,
                label,
                style(option.description).dim()
            ));
        }

        let hint = if step.multi {
            "↑/k ↓/j move · space toggle · enter/y confirm · esc/q cancel"
        } else {
            "↑/k ↓/j move · enter confirm · esc/q cancel"
        };
        lines.push(format!("{}  {}", style("└").cyan(), style(hint).dim()));

        for line in &lines {
            self.term.write_line(line)?;
        }
        Ok(lines.len())
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn input(&mut self, prompt: &str, validate: Validator) -> io::Result<Selection<String>> {
        let answer = cliclack::input(prompt)
            .placeholder("github.com/you/project")
            .validate(move |input: &String| validate(input.trim()))
            .interact::<String>();

        match answer {
            Ok(name) => Ok(Selection::Confirmed(name)),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Selection::Cancelled),
            Err(e) => Err(e),
        }
    }

    fn select(&mut self, step: &Step) -> io::Result<Selection<usize>> {
        let outcome = self.run_list(step, SingleSelect::new(step.options.len()))?;
        if let Selection::Confirmed(index) = &outcome {
            cliclack::log::success(format!("{}: {}", step.name, step.options[*index].label))?;
        }
        Ok(outcome)
    }

    fn multi_select(&mut self, step: &Step) -> io::Result<Selection<Vec<usize>>> {
        let outcome = self.run_list(step, MultiSelect::new(step.options.len()))?;
        if let Selection::Confirmed(indices) = &outcome {
            let labels: Vec<&str> = indices.iter().map(|&i| step.options[i].label).collect();
            let summary = if labels.is_empty() {
                "none".to_string()
            } else {
                labels.join(", ")
            };
            cliclack::log::success(format!("{}: {}", step.name, summary))?;
        }
        Ok(outcome)
    }
}

fn key_to_nav(key: &Key, multi: bool) -> Option<Nav> {
    match key {
        Key::ArrowUp | Key::Char('k') => Some(Nav::Up),
        Key::ArrowDown | Key::Char('j') => Some(Nav::Down),
        Key::Char(' ') if multi => Some(Nav::Toggle),
        Key::Enter => Some(Nav::Confirm),
        Key::Char('y') if multi => Some(Nav::Confirm),
        Key::Escape | Key::Char('q') | Key::CtrlC => Some(Nav::Cancel),
        _ => None,
    }
}

/// Common view over the two cursor machines
trait ListState {
    type Output;
    fn cursor(&self) -> usize;
    fn is_chosen(&self, index: usize) -> bool;
    fn handle(&mut self, nav: Nav) -> Option<Selection<Self::Output>>;
}

impl ListState for SingleSelect {
    type Output = usize;

    fn cursor(&self) -> usize {
        SingleSelect::cursor(self)
    }

    fn is_chosen(&self, _index: usize) -> bool {
        false
    }

    fn handle(&mut self, nav: Nav) -> Option<Selection<usize>> {
        SingleSelect::handle(self, nav)
    }
}

impl ListState for MultiSelect {
    type Output = Vec<usize>;

    fn cursor(&self) -> usize {
        MultiSelect::cursor(self)
    }

    fn is_chosen(&self, index: usize) -> bool {
        MultiSelect::is_chosen(self, index)
    }

    fn handle(&mut self, nav: Nav) -> Option<Selection<Vec<usize>>> {
        MultiSelect::handle(self, nav)
    }
}

/// Hides the cursor for the lifetime of a list prompt
struct HiddenCursor<'t> {
    term: &'t Term,
}

impl<'t> HiddenCursor<'t> {
    fn new(term: &'t Term) -> io::Result<Self> {
        term.hide_cursor()?;
        Ok(Self { term })
    }
}

impl Drop for HiddenCursor<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.term.show_cursor() {
            debug!(error = %e, "could not restore cursor after list prompt");
        }
    }
}
