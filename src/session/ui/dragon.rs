//! Decorations: the flying dragon and the falling "rain".
//!
//! Both are driven only by the animation phase and draw cell by cell,
//! dropping whatever falls outside the frame.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

const DRAGON_FRAMES: [&str; 4] = [
    "   __/\\\n  /  . \\\n /_  _\\ \\\n   \\/_/  ",
    "   __/\\\n  / o. \\\n /_  _\\ \\\n   \\/_/  ",
    "   __/\\\n  /  . \\\n /_  _\\ \\\n   \\/\\/  ",
    "   __/\\\n  / o. \\\n /_  _\\ \\\n   \\/\\/  ",
];

/// Row of the dragon's top line.
const DRAGON_ROW: i32 = 2;
/// Columns moved per tick.
const DRAGON_SPEED: i32 = 2;
const DRAGON_GAP: i32 = 5;

const RAIN_DROPS: [char; 4] = ['.', ',', '`', '\''];
const RAIN_COLUMN_STEP: usize = 5;
/// Ticks per rain row.
const RAIN_SLOWDOWN: u64 = 4;

/// Widest line of any frame.
fn dragon_width() -> i32 {
    DRAGON_FRAMES
        .iter()
        .flat_map(|frame| frame.lines())
        .map(|line| line.chars().count() as i32)
        .max()
        .unwrap_or(0)
}

/// Left column of the dragon at `phase`; it enters from the left and
/// wraps after leaving on the right.
pub fn dragon_column(phase: u64, width: u16) -> i32 {
    let start = -(dragon_width() + DRAGON_GAP);
    let span = i64::from(width) - i64::from(start) + 1;
    let travelled = (phase as i64).wrapping_mul(i64::from(DRAGON_SPEED)).rem_euclid(span);
    start + travelled as i32
}

pub fn render_dragon(buf: &mut Buffer, area: Rect, phase: u64, style: Style) {
    let frame = DRAGON_FRAMES[(phase % DRAGON_FRAMES.len() as u64) as usize];
    let left = dragon_column(phase, area.width);
    for (row, line) in frame.lines().enumerate() {
        put_str(buf, area, left, DRAGON_ROW + row as i32, line, style);
    }
}

pub fn render_rain(buf: &mut Buffer, area: Rect, phase: u64, style: Style) {
    if area.height == 0 {
        return;
    }
    let height = u64::from(area.height);
    for column in (0..area.width).step_by(RAIN_COLUMN_STEP) {
        let row = (u64::from(column) + phase / RAIN_SLOWDOWN) % height;
        let drop = RAIN_DROPS[((u64::from(column) + phase) % RAIN_DROPS.len() as u64) as usize];
        let position = Position::new(area.x + column, area.y + row as u16);
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_char(drop).set_style(style);
        }
    }
}

/// Writes `text` at an area-relative position, skipping clipped cells.
fn put_str(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, style: Style) {
    if y < 0 || y >= i32::from(area.height) {
        return;
    }
    for (offset, c) in text.chars().enumerate() {
        let column = x + offset as i32;
        if column < 0 || column >= i32::from(area.width) || c == ' ' {
            continue;
        }
        let position = Position::new(area.x + column as u16, area.y + y as u16);
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_char(c).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dragon_starts_off_screen() {
        assert!(dragon_column(0, 80) < 0);
    }

    #[test]
    fn test_dragon_moves_and_wraps() {
        assert_eq!(dragon_column(1, 80) - dragon_column(0, 80), DRAGON_SPEED);

        let mut phase = 0;
        while dragon_column(phase + 1, 80) > dragon_column(phase, 80) {
            phase += 1;
        }
        assert!(dragon_column(phase, 80) >= 79);
        assert!(dragon_column(phase + 1, 80) < 0);
    }

    #[test]
    fn test_rendering_in_tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        for phase in 0..200 {
            render_dragon(&mut buf, area, phase, Style::default());
            render_rain(&mut buf, area, phase, Style::default());
        }

        let empty = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(empty);
        render_dragon(&mut buf, empty, 3, Style::default());
        render_rain(&mut buf, empty, 3, Style::default());
    }

    #[test]
    fn test_dragon_visible_mid_flight() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        // 20 columns into its flight
        let phase = ((dragon_width() + DRAGON_GAP + 20) / DRAGON_SPEED) as u64;
        render_dragon(&mut buf, area, phase, Style::default());

        let row: String = (0..area.width)
            .filter_map(|x| buf.cell(Position::new(x, DRAGON_ROW as u16)))
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(row.contains("__/\\"));
    }
}
