//! The dispatch cycle and the menu loop.
//!
//! Each cycle is a two-state machine: it starts in
//! [`CycleState::AwaitingSelection`] and either stays there (a bound key was
//! chosen and its action ran) or moves to the absorbing
//! [`CycleState::Terminated`] (anything else was typed, or input ended).

use std::io::{BufRead, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

use crate::config::MenuConfig;
use crate::error::MenuResult;
use crate::registry::Registry;
use crate::selector::Selector;

/// Where a dispatch cycle left the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// An action ran; the menu should be shown again.
    AwaitingSelection,
    /// The selector matched nothing; the loop is over.
    Terminated,
}

impl CycleState {
    /// Returns true if the loop should stop.
    pub fn is_terminated(self) -> bool {
        self == Self::Terminated
    }
}

/// Run one present / read / invoke-or-terminate round.
pub fn run_cycle<R, W>(
    registry: &mut Registry<'_>,
    input: &mut R,
    output: &mut W,
    config: &MenuConfig,
) -> MenuResult<CycleState>
where
    R: BufRead,
    W: Write,
{
    if config.clear_screen {
        clear(output)?;
    }
    registry.render(output)?;
    write!(output, "{}", config.prompt)?;
    output.flush()?;

    let mut line = String::new();
    let selected = match input.read_line(&mut line)? {
        0 => None, // EOF
        _ => Selector::parse(&line),
    };

    if config.clear_screen {
        clear(output)?;
    } else {
        writeln!(output)?;
    }

    let Some(key) = selected
        .map(Selector::key)
        .filter(|&key| registry.contains(key))
    else {
        tracing::info!(input = line.trim(), "no menu entry selected, terminating");
        writeln!(output, "{}", config.farewell)?;
        output.flush()?;
        return Ok(CycleState::Terminated);
    };

    output.flush()?;
    if let Some(entry) = registry.get_mut(key) {
        tracing::debug!(key, label = entry.label(), "dispatching menu action");
        entry.invoke()?;
    }
    Ok(CycleState::AwaitingSelection)
}

fn clear<W: Write>(output: &mut W) -> MenuResult<()> {
    output
        .queue(Clear(ClearType::All))?
        .queue(MoveTo(0, 0))?;
    Ok(())
}

/// The top-level menu loop over a console.
pub struct Menu<R, W> {
    input: R,
    output: W,
    config: MenuConfig,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu reading selectors from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: MenuConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Run a single cycle against `registry`.
    pub fn cycle(&mut self, registry: &mut Registry<'_>) -> MenuResult<CycleState> {
        run_cycle(registry, &mut self.input, &mut self.output, &self.config)
    }

    /// Run cycles until one terminates, building a fresh registry for each.
    ///
    /// Returns how many actions ran.
    pub fn run<'a, F>(&mut self, mut build: F) -> MenuResult<usize>
    where
        F: FnMut() -> Registry<'a>,
    {
        let mut completed = 0;
        loop {
            let mut registry = build();
            if self.cycle(&mut registry)?.is_terminated() {
                break;
            }
            completed += 1;
            if self.config.pause {
                self.pause()?;
            }
        }
        self.output.flush()?;
        Ok(completed)
    }

    /// Wait for the user to acknowledge the last action.
    fn pause(&mut self) -> MenuResult<()> {
        write!(self.output, "\nPress Enter to continue . . . ")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    /// Take back the input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
