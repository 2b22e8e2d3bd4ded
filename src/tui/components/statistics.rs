//! # Statistics Component
//!
//! Progress table with one row per exercise type, plus the kana that are
//! currently frequently wrong for each.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr;

use crate::core::exercise::ExerciseType;
use crate::core::scoring::Statistics;
use crate::tui::component::Component;

/// One exercise's figures as shown in the table.
pub struct StatisticsRow {
    pub exercise: ExerciseType,
    pub stats: Statistics,
    /// Cues of the frequently wrong kana, in catalog order
    pub trouble: Vec<String>,
}

/// Stateless statistics view.
pub struct StatisticsView {
    pub rows: Vec<StatisticsRow>,
}

impl StatisticsView {
    pub fn new(rows: Vec<StatisticsRow>) -> Self {
        Self { rows }
    }

    /// Joins cues into a single line that fits `width` display columns.
    fn trouble_line(cues: &[String], width: usize) -> String {
        let mut line = String::new();
        for cue in cues {
            let sep = if line.is_empty() { 0 } else { 1 };
            if line.width() + sep + cue.width() > width {
                line.push('…');
                break;
            }
            if sep == 1 {
                line.push(' ');
            }
            line.push_str(cue);
        }
        line
    }
}

impl Component for StatisticsView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let trouble_rows = self.rows.len() as u16 + 2;
        let [table_area, trouble_area] = Layout::vertical([
            Constraint::Length(self.rows.len() as u16 + 3),
            Constraint::Min(trouble_rows),
        ])
        .areas(area);

        let header = Row::new(["Exercise", "Practiced", "Often wrong", "Due", "Accuracy"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.exercise.label()),
                    Cell::from(row.stats.total_practiced.to_string()),
                    Cell::from(row.stats.frequently_wrong_count.to_string()),
                    Cell::from(row.stats.needs_review_count.to_string()),
                    Cell::from(format!("{:.0}%", row.stats.average_accuracy * 100.0)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(26),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(5),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Progress ")
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(table, table_area);

        let width = trouble_area.width.saturating_sub(4) as usize;
        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|row| {
                let label = format!("{}: ", row.exercise.label());
                let cues = if row.trouble.is_empty() {
                    "none".to_string()
                } else {
                    Self::trouble_line(&row.trouble, width.saturating_sub(label.width()))
                };
                Line::from(vec![
                    Span::styled(label, Style::default().fg(Color::Gray)),
                    Span::styled(cues, Style::default().fg(Color::Red)),
                ])
            })
            .collect();

        let trouble = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Frequently wrong ")
                .title_bottom(Line::from(" Esc Menu ").centered())
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(trouble, trouble_area);
    }
}
