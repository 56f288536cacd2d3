//! Progress reporting for fetches and loads.
//!
//! Loaders talk to a [`Ui`]. The terminal view keeps a [`Dashboard`] with one
//! row per planned source and redraws it after every event; [`SilentUi`]
//! drops everything.

mod dashboard;

use dashboard::Dashboard;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

use crate::galaxy::{GalaxySummary, SourceTally};
use crate::schema::SourceSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Fetching,
    Loading,
    Linking,
    Sorting,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Phase::Fetching => "Fetching sources",
            Phase::Loading => "Loading entities",
            Phase::Linking => "Linking hyperlanes",
            Phase::Sorting => "Sorting orbits",
            Phase::Complete => "Complete",
        };
        f.write_str(label)
    }
}

/// Position within the current phase
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progress {
    pub current: u64,
    pub total: u64,
    pub label: String,
}

impl Progress {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.current as f64 / self.total as f64).min(1.0)
        }
    }
}

pub trait Ui {
    fn set_phase(&mut self, phase: Phase);

    /// Sources about to be loaded, in load order
    fn plan(&mut self, _sources: &[&'static SourceSchema]) {}

    fn source_started(&mut self, _source: &'static str) {}

    fn source_finished(&mut self, _source: &'static str, _tally: SourceTally) {}

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>);
    fn clear_progress(&mut self);
    fn log(&mut self, message: impl Into<String>);
}

/// Full-screen dashboard; the terminal is restored on drop
pub struct UiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    dashboard: Dashboard,
}

impl UiApp {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            dashboard: Dashboard::new(),
        })
    }

    fn redraw(&mut self) -> Result<()> {
        let dashboard = &self.dashboard;
        self.terminal.draw(|frame| dashboard.render(frame))?;
        Ok(())
    }

    /// Show the final counts and wait for a key press
    pub fn finish(mut self, summary: GalaxySummary) -> Result<()> {
        self.dashboard.complete(summary);
        self.redraw()?;

        loop {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        return Ok(());
                    }
                }
            }
        }
    }
}

// Drawing errors are not worth aborting a load over
impl Ui for UiApp {
    fn set_phase(&mut self, phase: Phase) {
        self.dashboard.set_phase(phase);
        self.redraw().ok();
    }

    fn plan(&mut self, sources: &[&'static SourceSchema]) {
        self.dashboard.plan(sources);
        self.redraw().ok();
    }

    fn source_started(&mut self, source: &'static str) {
        self.dashboard.start_source(source);
        self.redraw().ok();
    }

    fn source_finished(&mut self, source: &'static str, tally: SourceTally) {
        self.dashboard.finish_source(source, tally);
        self.redraw().ok();
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        self.dashboard.set_progress(Progress {
            current,
            total,
            label: label.into(),
        });
        self.redraw().ok();
    }

    fn clear_progress(&mut self) {
        self.dashboard.clear_progress();
        self.redraw().ok();
    }

    fn log(&mut self, message: impl Into<String>) {
        self.dashboard.push_message(message);
        self.redraw().ok();
    }
}

impl Drop for UiApp {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
        self.terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .ok();
        self.terminal.show_cursor().ok();
    }
}

/// Reports nothing; for library callers, tests and plain output
#[derive(Debug, Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn set_progress(&mut self, _current: u64, _total: u64, _label: impl Into<String>) {}
    fn clear_progress(&mut self) {}
    fn log(&mut self, _message: impl Into<String>) {}
}
