//! UI rendering
//!
//! Turns a [`RenderPayload`] into a frame. Pure: no I/O and no state
//! beyond the payload. Everything is laid out inside `frame.area()`, so
//! a terminal too small for the content gets a clipped frame.

mod dragon;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Padding, Paragraph},
};

use super::state::{MAX_DISPLAYED_SUGGESTIONS, RenderPayload};
use crate::types::{MAX_SCORE, PasswordRating};

const TITLE: &str = "🔐 Password Strength Analyzer";
const INSTRUCTIONS: &str = "Type your password (Enter to evaluate).";
const FOOTER: &str =
    "BACKSPACE erase | ENTER evaluate | TAB suggest a strong password | Ctrl+C quit";

const BOX_HEIGHT: u16 = 7;
const BOX_MIN_WIDTH: u16 = 60;
const BOX_MAX_WIDTH: u16 = 80;
const FOOTER_HEIGHT: u16 = 2;
/// Ticks per shimmer toggle.
const SHIMMER_PERIOD: u64 = 6;

const TEXT: Style = Style::new().fg(Color::Green);

/// Render the entire UI.
pub fn render(frame: &mut Frame, payload: &RenderPayload<'_>) {
    let area = frame.area();

    dragon::render_rain(frame.buffer_mut(), area, payload.phase, TEXT.add_modifier(Modifier::DIM));
    dragon::render_dragon(frame.buffer_mut(), area, payload.phase, TEXT);

    let [main_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);

    let box_width = area
        .width
        .saturating_sub(10)
        .clamp(BOX_MIN_WIDTH, BOX_MAX_WIDTH)
        .min(area.width);
    let [column] = Layout::horizontal([Constraint::Length(box_width)])
        .flex(Flex::Center)
        .areas(main_area);

    let suggestions_height = 1 + MAX_DISPLAYED_SUGGESTIONS as u16;
    let [
        title_area,
        suggested_area,
        box_area,
        rating_area,
        _,
        gauge_area,
        _,
        suggestions_area,
        banner_area,
    ] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(BOX_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(suggestions_height),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(column);

    frame.render_widget(
        Paragraph::new(TITLE)
            .style(TEXT.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        title_area,
    );
    render_suggested(frame, payload, suggested_area);
    render_input_box(frame, payload, box_area);
    render_rating(frame, payload, rating_area, gauge_area);
    render_suggestions(frame, payload, suggestions_area);

    if let Some(banner) = payload.banner {
        frame.render_widget(
            Paragraph::new(banner)
                .style(TEXT.add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            banner_area,
        );
    }

    frame.render_widget(
        Paragraph::new(FOOTER).style(TEXT).alignment(Alignment::Center),
        footer_area,
    );
}

fn render_suggested(frame: &mut Frame, payload: &RenderPayload<'_>, area: Rect) {
    let Some(suggestion) = payload.suggestion else {
        return;
    };
    let mut spans = Vec::with_capacity(2);
    if payload.copied {
        spans.push(Span::styled("[copied to clipboard] ", TEXT.add_modifier(Modifier::DIM)));
    }
    spans.push(Span::styled(format!("Suggested: {suggestion}"), TEXT));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        area,
    );
}

/// Bordered box with the instructions and one `*` per typed character.
fn render_input_box(frame: &mut Frame, payload: &RenderPayload<'_>, area: Rect) {
    let shimmer = (payload.phase / SHIMMER_PERIOD) % 2 == 0;
    let border_style = if shimmer {
        TEXT.add_modifier(Modifier::BOLD)
    } else {
        TEXT.add_modifier(Modifier::DIM)
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .padding(Padding::horizontal(2));

    let mask_width = usize::from(block.inner(area).width);
    let mask = "*".repeat(payload.masked_len.min(mask_width));

    let text = vec![
        Line::from(""),
        Line::styled(INSTRUCTIONS, TEXT),
        Line::from(""),
        Line::styled(mask, TEXT.add_modifier(Modifier::BOLD)),
    ];
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_rating(frame: &mut Frame, payload: &RenderPayload<'_>, line_area: Rect, gauge_area: Rect) {
    let analysis = &payload.analysis;
    // Debug keeps the trailing ".0" on whole values
    let line = format!(
        "[{}] Entropy: {:?} bits",
        analysis.rating, analysis.entropy_bits
    );
    frame.render_widget(
        Paragraph::new(line).style(TEXT).alignment(Alignment::Center),
        line_area,
    );

    let gauge = Gauge::default()
        .gauge_style(Style::new().fg(rating_color(analysis.rating)).bg(Color::Black))
        .ratio(analysis.ratio())
        .label(format!("{}/{}", analysis.score, MAX_SCORE));
    frame.render_widget(gauge, gauge_area);
}

fn render_suggestions(frame: &mut Frame, payload: &RenderPayload<'_>, area: Rect) {
    let mut lines = Vec::with_capacity(1 + MAX_DISPLAYED_SUGGESTIONS);
    lines.push(Line::styled(
        "Suggestions:",
        TEXT.add_modifier(Modifier::UNDERLINED),
    ));
    lines.extend(
        payload
            .displayed_suggestions()
            .iter()
            .map(|s| Line::styled(format!("  - {s}"), TEXT)),
    );
    frame.render_widget(Paragraph::new(lines), area);
}

fn rating_color(rating: PasswordRating) -> Color {
    match rating {
        PasswordRating::Empty => Color::DarkGray,
        PasswordRating::VeryWeakCommon | PasswordRating::Weak => Color::Red,
        PasswordRating::Medium => Color::Yellow,
        PasswordRating::Strong => Color::Green,
        PasswordRating::VeryStrong => Color::LightGreen,
    }
}

/// Screen contents as text, one line per row.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell(ratatui::layout::Position::new(x, y)) {
                text.push_str(cell.symbol());
            }
        }
        text.push('\n');
    }
    text
}
