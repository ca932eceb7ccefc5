//! Frame rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph};

use crate::ui::{AppLayout, CourseTreeView, HelpOverlay, format_size};

use super::App;
use super::state::{AppMode, View};

impl App {
    /// Draw one frame.
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let layout = AppLayout::new(frame.area());

        self.render_header(frame, layout.header);
        match self.view {
            View::Explorer => self.render_explorer(frame, layout.main),
            View::Warnings => self.render_warnings(frame, layout.main),
        }
        self.render_footer(frame, layout.footer);

        if self.mode == AppMode::Help {
            frame.render_widget(HelpOverlay::new(&self.theme), frame.area());
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let [title_area, gauge_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let title = match &self.tree {
            Some(tree) => tree.title(),
            None => self
                .config
                .root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.config.root.to_string_lossy().into_owned()),
        };

        let summary = if self.scanning {
            format!(
                "scanning… {} files in {} folders",
                self.scan_progress.files_scanned, self.scan_progress.dirs_scanned
            )
        } else if let Some(error) = &self.scan_error {
            error.clone()
        } else if let Some(tree) = &self.tree {
            format!(
                "{} videos · {} files · {}",
                tree.stats.total_videos,
                tree.stats.total_files,
                format_size(tree.stats.total_size)
            )
        } else {
            "no course loaded".to_string()
        };
        let summary_color = if self.scan_error.is_some() {
            self.theme.error
        } else {
            self.theme.muted
        };

        let title_line = Line::from(vec![
            Span::styled(format!(" {title} "), self.theme.title),
            Span::styled(summary, Style::default().fg(summary_color)),
        ]);
        frame.render_widget(
            Paragraph::new(title_line).style(self.theme.header),
            title_area,
        );

        let progress = self.progress();
        if progress.total_videos > 0 {
            let gauge = Gauge::default()
                .ratio((progress.percent / 100.0).clamp(0.0, 1.0))
                .gauge_style(self.theme.gauge)
                .style(self.theme.gauge_bg)
                .label(format!(
                    "{} / {} videos completed ({}%)",
                    progress.completed,
                    progress.total_videos,
                    progress.percent.round() as u64
                ));
            frame.render_widget(gauge, gauge_area);
        } else if self.tree.is_some() {
            frame.render_widget(
                Paragraph::new(" no videos found")
                    .style(Style::default().fg(self.theme.muted)),
                gauge_area,
            );
        }
    }

    fn render_explorer(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Course Content ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        if self.tree.is_none() {
            let message = if self.scanning {
                "Scanning course folder…"
            } else {
                "No course loaded"
            };
            frame.render_widget(
                Paragraph::new(message)
                    .style(Style::default().fg(self.theme.muted))
                    .block(block),
                area,
            );
            return;
        }

        let view = CourseTreeView::new(
            &self.rows,
            &self.theme,
            &self.completions,
            self.now_playing.as_deref(),
        )
        .block(block);
        frame.render_stateful_widget(view, area, &mut self.tree_state);
    }

    fn render_warnings(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Scan Warnings ")
            .title_style(self.theme.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border);

        let warnings = self
            .tree
            .as_ref()
            .map(|tree| tree.warnings.as_slice())
            .unwrap_or_default();

        if warnings.is_empty() {
            frame.render_widget(
                Paragraph::new("No warnings")
                    .style(Style::default().fg(self.theme.muted))
                    .block(block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = warnings
            .iter()
            .skip(self.warnings_offset)
            .map(|warning| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        warning.path.display().to_string(),
                        Style::default().fg(self.theme.warning),
                    ),
                    Span::raw(": "),
                    Span::styled(
                        warning.message.clone(),
                        Style::default().fg(self.theme.foreground),
                    ),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.status {
            Some(status) => format!(" {status}"),
            None => {
                " j/k move · Enter play · Space complete · Tab warnings · ? help · q quit"
                    .to_string()
            }
        };
        frame.render_widget(Paragraph::new(text).style(self.theme.footer), area);
    }
}
