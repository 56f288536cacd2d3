//! Load dashboard: phase and running totals, a gauge, one table row per
//! planned source with its row outcomes, and recent messages.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table};
use ratatui::Frame;
use std::collections::VecDeque;

use super::{Phase, Progress};
use crate::galaxy::{GalaxySummary, SourceTally};
use crate::schema::SourceSchema;

const MAX_MESSAGES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Pending,
    Loading,
    Done(SourceTally),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub name: &'static str,
    pub file: &'static str,
    pub state: RowState,
}

#[derive(Debug)]
pub struct Dashboard {
    phase: Phase,
    rows: Vec<SourceRow>,
    progress: Option<Progress>,
    messages: VecDeque<String>,
    summary: Option<GalaxySummary>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            rows: Vec::new(),
            progress: None,
            messages: VecDeque::with_capacity(MAX_MESSAGES),
            summary: None,
        }
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Replace the table with the given sources, all pending
    pub fn plan(&mut self, sources: &[&'static SourceSchema]) {
        self.rows = sources
            .iter()
            .map(|s| SourceRow {
                name: s.name,
                file: s.source_file,
                state: RowState::Pending,
            })
            .collect();
    }

    pub fn start_source(&mut self, source: &str) {
        if let Some(row) = self.row_mut(source) {
            row.state = RowState::Loading;
        }
    }

    pub fn finish_source(&mut self, source: &str, tally: SourceTally) {
        if let Some(row) = self.row_mut(source) {
            row.state = RowState::Done(tally);
        }
    }

    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = Some(progress);
    }

    pub fn clear_progress(&mut self) {
        self.progress = None;
    }

    pub fn push_message(&mut self, message: impl Into<String>) {
        if self.messages.len() == MAX_MESSAGES {
            self.messages.pop_front();
        }
        self.messages.push_back(message.into());
    }

    pub fn complete(&mut self, summary: GalaxySummary) {
        self.phase = Phase::Complete;
        self.progress = None;
        self.summary = Some(summary);
    }

    /// Sum over the sources that have finished
    pub fn totals(&self) -> SourceTally {
        let mut totals = SourceTally::default();
        for row in &self.rows {
            if let RowState::Done(tally) = row.state {
                totals += tally;
            }
        }
        totals
    }

    fn row_mut(&mut self, source: &str) -> Option<&mut SourceRow> {
        self.rows.iter_mut().find(|r| r.name == source)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn render(&self, frame: &mut Frame) {
        let [status, gauge, table, log] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(6),
        ])
        .areas(frame.area());

        self.render_status(frame, status);
        self.render_gauge(frame, gauge);
        self.render_table(frame, table);
        self.render_log(frame, log);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let (glyph, color) = match self.phase {
            Phase::Fetching => ("↓", Color::Cyan),
            Phase::Loading => ("◐", Color::Cyan),
            Phase::Linking => ("⇄", Color::Cyan),
            Phase::Sorting => ("⚙", Color::Cyan),
            Phase::Complete => ("✓", Color::Green),
        };
        let phase_style = Style::default().fg(color).add_modifier(Modifier::BOLD);

        let detail = match &self.summary {
            Some(s) => format!(
                "{} systems ({} plottable), {} hyperlanes. Press any key to exit",
                s.systems, s.plottable_systems, s.hyperlanes
            ),
            None => {
                let totals = self.totals();
                format!(
                    "{} entities, {} unresolved, {} duplicates",
                    totals.loaded, totals.unresolved, totals.duplicates
                )
            }
        };

        let lines = vec![
            Line::from(Span::styled(format!(" {} {}", glyph, self.phase), phase_style)),
            Line::from(Span::styled(format!("   {}", detail), Style::default().fg(Color::Gray))),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Sky River ")
            .border_style(Style::default().fg(Color::Blue));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_gauge(&self, frame: &mut Frame, area: Rect) {
        let Some(progress) = &self.progress else {
            return;
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
            .ratio(progress.ratio())
            .label(format!("{} ({}/{})", progress.label, progress.current, progress.total));
        frame.render_widget(gauge, area);
    }

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let header = Row::new(["Source", "File", "Loaded", "Skipped", "Unresolved", "Duplicates"])
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows = self.rows.iter().map(|row| match row.state {
            RowState::Pending => Row::new([row.name, row.file, "-", "-", "-", "-"]).style(dim),
            RowState::Loading => Row::new([row.name, row.file, "…", "", "", ""])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            RowState::Done(tally) => {
                let flagged = |count: usize, color: Color| {
                    let style = if count > 0 { Style::default().fg(color) } else { dim };
                    Cell::from(count.to_string()).style(style)
                };
                let name_color = if tally.is_clean() { Color::Green } else { Color::Yellow };
                Row::new([
                    Cell::from(row.name).style(Style::default().fg(name_color)),
                    Cell::from(row.file),
                    Cell::from(tally.loaded.to_string()),
                    Cell::from(tally.skipped.to_string()).style(dim),
                    flagged(tally.unresolved, Color::Yellow),
                    flagged(tally.duplicates, Color::Red),
                ])
            }
        });

        let widths = [
            Constraint::Length(15),
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(11),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Sources ")
            .border_style(Style::default().fg(Color::Blue));
        frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
    }

    fn render_log(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let skip = self.messages.len().saturating_sub(visible);
        let items: Vec<ListItem> = self
            .messages
            .iter()
            .skip(skip)
            .map(|m| ListItem::new(format!(" {}", m)))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Messages ")
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(List::new(items).block(block), area);
    }
}
