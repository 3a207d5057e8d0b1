//! Centered popup frame drawn over the current screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear};

/// Returns a `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn modal_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    centered
}

/// Clears `area`, draws a titled border around it and returns the inner area.
#[mutants::skip]
pub fn draw_modal(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(modal_area(area, 60, 20), Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn clamps_to_small_area() {
        let area = Rect::new(0, 0, 30, 10);
        let modal = modal_area(area, 60, 20);
        assert_eq!(modal.width, 30);
        assert_eq!(modal.height, 10);
    }

    #[test]
    fn respects_area_offset() {
        let area = Rect::new(10, 5, 40, 20);
        let modal = modal_area(area, 20, 10);
        assert_eq!(modal, Rect::new(20, 10, 20, 10));
    }
}
