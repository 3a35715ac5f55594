//! Interactive stepping over the number table.

use anyhow::Result;
use numcube_layout::LayoutCache;
use numcube_scene::{Stage, StageSettings, StepCursor, StepError};
use numcube_testkit::{JsonlSink, StepEvent};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::report::StageReport;

const HELP: &str = "commands: n(ext), p(rev), r(eset), <index>, s(how), q(uit)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Reset,
    Jump(usize),
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; an empty line advances.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "" | "n" | "next" => Some(Self::Next),
            "p" | "prev" => Some(Self::Prev),
            "r" | "reset" => Some(Self::Reset),
            "s" | "show" => Some(Self::Show),
            "h" | "help" | "?" => Some(Self::Help),
            "q" | "quit" | "exit" => Some(Self::Quit),
            other => other.parse().ok().map(Self::Jump),
        }
    }

    fn action(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Reset => "reset",
            Self::Jump(_) => "jump",
            Self::Show => "show",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

pub struct Explorer {
    cursor: StepCursor<'static>,
    cache: LayoutCache,
    settings: StageSettings,
    json: bool,
    events: Option<JsonlSink>,
}

impl Explorer {
    pub fn new(cache: LayoutCache, settings: StageSettings, start_step: usize) -> Result<Self> {
        let mut cursor = StepCursor::standard();
        cursor.jump(start_step)?;
        Ok(Self {
            cursor,
            cache,
            settings,
            json: false,
            events: None,
        })
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_event_log(mut self, sink: JsonlSink) -> Self {
        self.events = Some(sink);
        self
    }

    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// Stage for the current step, laid out through the cache.
    pub fn stage(&mut self) -> Stage {
        let layout = self.cache.layout(self.cursor.current().value);
        Stage::compose(layout, &self.cache.policy(), &self.settings)
    }

    /// Move the cursor and log the event. `Show`, `Help` and `Quit` leave it alone.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Next => {
                self.cursor.next();
            }
            Command::Prev => {
                self.cursor.prev();
            }
            Command::Reset => {
                self.cursor.reset();
            }
            Command::Jump(index) => {
                self.cursor.jump(index)?;
            }
            Command::Show | Command::Help | Command::Quit => return Ok(()),
        }
        self.record(command.action())
    }

    fn record(&mut self, action: &str) -> Result<()> {
        if let Some(sink) = self.events.as_mut() {
            sink.write(&StepEvent {
                index: self.cursor.index(),
                value: self.cursor.current().value,
                action,
            })?;
        }
        Ok(())
    }

    fn print_current<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let index = self.cursor.index();
        let step = self.cursor.current();
        let stage = self.stage();
        StageReport::for_step(index, step, &stage).write_to(out, self.json)
    }

    /// Print the current step, then one step per command read from `input`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.record("open")?;
        self.print_current(out)?;

        for line in input.lines() {
            let line = line?;
            let Some(command) = Command::parse(&line) else {
                writeln!(out, "unknown command `{}` ({HELP})", line.trim())?;
                continue;
            };
            match command {
                Command::Quit => break,
                Command::Help => writeln!(out, "{HELP}")?,
                _ => match self.apply(command) {
                    Ok(()) => self.print_current(out)?,
                    Err(err) if err.downcast_ref::<StepError>().is_some() => {
                        writeln!(out, "{err}")?
                    }
                    Err(err) => return Err(err),
                },
            }
        }

        if let Some(sink) = self.events.as_mut() {
            sink.flush()?;
        }
        let stats = self.cache.stats();
        debug!(
            hits = stats.hits,
            misses = stats.misses,
            cached = stats.len,
            "explorer closed"
        );
        Ok(())
    }
}
