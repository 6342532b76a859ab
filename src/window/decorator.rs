//! Window chrome: border ring, header row, minimize/close buttons.
//!
//! The decorator owns both sides of the chrome contract: it paints the
//! header and it answers hit tests against it, so the button cells can
//! never drift apart from the cells the gesture controller checks.

use ratatui::layout::Rect;
use ratatui::widgets::Clear;

use crate::geometry::WindowRect;
use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

use super::Window;

/// What a pointer press on the chrome means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    None,
    Drag,
    Minimize,
    Close,
}

pub const MINIMIZE_GLYPH: &str = "▁";
pub const CLOSE_GLYPH: &str = "✕";

pub trait WindowDecorator: std::fmt::Debug {
    /// Paint the chrome for `window` clipped to `bounds`. Content is the
    /// caller's job; it goes into `content_area` afterwards.
    fn render_chrome(&self, frame: &mut UiFrame<'_>, window: &Window, bounds: Rect, focused: bool);

    /// Classify a pointer press at (`col`, `row`) against the chrome of
    /// a window occupying `rect`.
    fn hit_test(&self, rect: WindowRect, col: i32, row: i32) -> HeaderAction;

    /// Where content may draw: inside the border ring, below the header.
    fn content_area(&self, rect: WindowRect) -> WindowRect {
        WindowRect::new(
            rect.x + 1,
            rect.y + 2,
            rect.width.saturating_sub(2),
            rect.height.saturating_sub(3),
        )
    }
}

/// Default chrome: single-line border, header row inside the ring with
/// the title on the left and minimize/close cells on the right.
#[derive(Debug, Default)]
pub struct ChromeDecorator;

impl ChromeDecorator {
    fn close_col(rect: WindowRect) -> i32 {
        rect.right() - 2
    }

    fn minimize_col(rect: WindowRect) -> i32 {
        rect.right() - 4
    }

    /// Buttons need room for their cells plus one title cell.
    fn has_buttons(rect: WindowRect) -> bool {
        rect.width >= 8 && rect.height >= 3
    }
}

impl WindowDecorator for ChromeDecorator {
    fn render_chrome(&self, frame: &mut UiFrame<'_>, window: &Window, bounds: Rect, focused: bool) {
        let rect = window.rect;
        if rect.width < 2 || rect.height < 2 {
            return;
        }
        if let Some(visible) = rect.clipped(bounds) {
            frame.render_widget(Clear, visible);
        }

        let border = theme::window_border(focused);
        let top = rect.y;
        let bottom = rect.bottom();
        let left = rect.x;
        let right = rect.right();

        for col in left..=right {
            let symbol = if col == left {
                "┌"
            } else if col == right {
                "┐"
            } else {
                "─"
            };
            frame.put_symbol(bounds, col, top, symbol, border);
            let symbol = if col == left {
                "└"
            } else if col == right {
                "┘"
            } else {
                "─"
            };
            frame.put_symbol(bounds, col, bottom, symbol, border);
        }
        for row in (top + 1)..bottom {
            frame.put_symbol(bounds, left, row, "│", border);
            frame.put_symbol(bounds, right, row, "│", border);
        }

        // Header row: fill, left-aligned title, buttons on the right.
        let header_row = top + 1;
        if header_row >= bottom {
            return;
        }
        let header = theme::window_header(focused);
        for col in (left + 1)..right {
            frame.put_symbol(bounds, col, header_row, " ", header);
        }
        let title_width = if Self::has_buttons(rect) {
            (Self::minimize_col(rect) - left - 3).max(0) as usize
        } else {
            rect.width.saturating_sub(3) as usize
        };
        let title = truncate_to_width(&window.title, title_width);
        for (idx, ch) in title.chars().enumerate() {
            frame.put_symbol(
                bounds,
                left + 2 + idx as i32,
                header_row,
                &ch.to_string(),
                header,
            );
        }
        if Self::has_buttons(rect) {
            let button = header.patch(theme::header_button());
            frame.put_symbol(
                bounds,
                Self::minimize_col(rect),
                header_row,
                MINIMIZE_GLYPH,
                button,
            );
            frame.put_symbol(bounds, Self::close_col(rect), header_row, CLOSE_GLYPH, button);
        }
    }

    fn hit_test(&self, rect: WindowRect, col: i32, row: i32) -> HeaderAction {
        if rect.width < 3 || rect.height < 3 {
            return HeaderAction::None;
        }
        if row != rect.y + 1 || col <= rect.x || col >= rect.right() {
            return HeaderAction::None;
        }
        if Self::has_buttons(rect) {
            if col == Self::close_col(rect) {
                return HeaderAction::Close;
            }
            if col == Self::minimize_col(rect) {
                return HeaderAction::Minimize;
            }
        }
        HeaderAction::Drag
    }
}
