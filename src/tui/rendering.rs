use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::canvas::{Canvas, Circle, Line as MapLine};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::format_timestamp;
use crate::content;
use crate::models::{LearningMode, Sender, Subject};
use crate::session::SessionSnapshot;
use crate::subjects;

/// Everything the renderer needs, borrowed from the app for one frame
pub struct RenderState<'a> {
    pub subjects: &'static [Subject],
    pub selected_idx: usize,
    pub active_subject: Option<&'a Subject>,
    pub mode: LearningMode,
    pub session: SessionSnapshot<'a>,
    pub input: &'a str,
    pub thinking: bool,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area(), state.session.is_open);

    render_header(frame, layout.header_area);
    render_map(frame, layout.map_area, state);
    render_content(frame, layout.content_area, state);
    if let Some(chat_area) = layout.chat_area {
        render_chat(frame, chat_area, state);
    }
    render_status_bar(frame, layout.status_area, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Line::from(vec![
        Span::styled("🧠 BrainLearn", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            "  Interactive Educational Experience",
            Style::default().fg(Color::Rgb(113, 113, 122)),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// SVG coordinates grow downward, the canvas grows upward
fn flip_y(y: u16) -> f64 {
    f64::from(subjects::MAP_HEIGHT - y)
}

fn render_map(frame: &mut Frame, area: Rect, state: &RenderState) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
                .title(" Brain Map "),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, f64::from(subjects::MAP_WIDTH)])
        .y_bounds([0.0, f64::from(subjects::MAP_HEIGHT)])
        .paint(|ctx| {
            // Neural connections behind the nodes
            for (a, b) in subjects::connections() {
                ctx.draw(&MapLine {
                    x1: f64::from(a.x),
                    y1: flip_y(a.y),
                    x2: f64::from(b.x),
                    y2: flip_y(b.y),
                    color: Color::Rgb(60, 60, 70),
                });
            }
            ctx.layer();

            for (idx, subject) in state.subjects.iter().enumerate() {
                let color = Color::Rgb(subject.color.0, subject.color.1, subject.color.2);
                let is_selected = idx == state.selected_idx;
                let is_active = state.active_subject.map(|s| s.id) == Some(subject.id);

                let radius = if is_selected { 28.0 } else { 20.0 };
                ctx.draw(&Circle {
                    x: f64::from(subject.x),
                    y: flip_y(subject.y),
                    radius,
                    color,
                });

                let label_style = if is_selected {
                    Style::default().fg(Color::Rgb(250, 250, 250)).add_modifier(Modifier::BOLD)
                } else if is_active {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Rgb(161, 161, 170))
                };
                let label = if is_selected {
                    format!("▶ {}", subject.name)
                } else {
                    subject.name.to_string()
                };
                ctx.print(
                    f64::from(subject.x),
                    flip_y(subject.y),
                    Line::from(Span::styled(label, label_style)),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn render_content(frame: &mut Frame, area: Rect, state: &RenderState) {
    let record = state
        .active_subject
        .map(|s| content::content_for(s.id))
        .unwrap_or(&content::DEFAULT_CONTENT);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
        .title(format!(" {} ", record.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Tabs
            Constraint::Min(1),    // Body
        ])
        .split(inner);

    let description = Paragraph::new(record.description)
        .style(Style::default().fg(Color::Rgb(113, 113, 122)));
    frame.render_widget(description, chunks[0]);

    let titles: Vec<Line> = LearningMode::all().iter().map(|m| Line::from(m.label())).collect();
    let tabs = Tabs::new(titles)
        .select(state.mode.index())
        .style(Style::default().fg(Color::Rgb(113, 113, 122)))
        .highlight_style(
            Style::default().fg(Color::Rgb(16, 185, 129)).add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[1]);

    let body = Paragraph::new(record.narrative(state.mode)).wrap(Wrap { trim: false });
    frame.render_widget(body, chunks[2]);
}

fn render_chat(frame: &mut Frame, area: Rect, state: &RenderState) {
    let title = match state.active_subject {
        Some(subject) => format!(" BrainLearn Assistant - {} ", subject.name),
        None => " BrainLearn Assistant ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(16, 185, 129)))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Message log
            Constraint::Length(1), // Input line
        ])
        .split(inner);

    render_message_log(frame, chunks[0], state);

    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Rgb(16, 185, 129))),
        Span::raw(state.input.to_string()),
        Span::styled("█", Style::default().fg(Color::Rgb(113, 113, 122))),
    ]);
    frame.render_widget(Paragraph::new(input_line), chunks[1]);
}

fn render_message_log(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut lines: Vec<Line> = Vec::new();

    for msg in state.session.messages {
        let (who, style) = match msg.sender {
            Sender::User => ("You", Style::default().fg(Color::Rgb(67, 97, 238))),
            Sender::Assistant => ("Assistant", Style::default().fg(Color::Rgb(16, 185, 129))),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", format_timestamp(&msg.created_at)),
                Style::default().fg(Color::Rgb(113, 113, 122)),
            ),
            Span::styled(format!("{}: ", who), style.add_modifier(Modifier::BOLD)),
            Span::raw(msg.text.clone()),
        ]));
    }

    if state.thinking {
        lines.push(Line::from(Span::styled(
            "Assistant is thinking…",
            Style::default().fg(Color::Rgb(113, 113, 122)).add_modifier(Modifier::ITALIC),
        )));
    }

    // Keep the tail of the conversation in view
    let visible = usize::from(area.height);
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }

    let log = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    frame.render_widget(log, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(msg) = state.status_message {
        let color = match msg.message_type {
            MessageType::Success => Color::Rgb(16, 185, 129),
            MessageType::Error => Color::Rgb(239, 68, 68),
        };
        (format!(" {} ", msg.text), Style::default().fg(color).bg(Color::Rgb(24, 24, 27)))
    } else {
        let mut parts = vec![];

        if state.session.is_open {
            parts.push("[CHAT]".to_string());
            parts.push("Enter: send".to_string());
            parts.push("Ctrl+Y: copy transcript".to_string());
            parts.push("Esc: minimize".to_string());
        } else {
            parts.push("[MAP]".to_string());
            parts.push(format!(
                "subject {}/{}",
                state.selected_idx + 1,
                state.subjects.len()
            ));
            parts.push("↑/↓: navigate".to_string());
            parts.push("Enter: select".to_string());
            parts.push("Tab: mode".to_string());
            parts.push("a: ask assistant".to_string());
            parts.push("q: quit".to_string());
        }
        parts.push("Ctrl+C: quit".to_string());

        (
            format!(" {} ", parts.join(" | ")),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(24, 24, 27)),
        )
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
