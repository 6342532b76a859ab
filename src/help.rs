//! Help overlay: keybinding reference rendered over the canvas.

use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::actions::Action;
use crate::keybindings::KeyCombo;
use crate::theme;
use crate::ui::UiFrame;

const INTRO: &str = indoc! {"
    Drag a window by its header row. Grab any border or corner to
    resize. Edges snap when released nearby; minimized windows dock
    as pills along the bottom.
"};

pub fn render_help(frame: &mut UiFrame<'_>, area: Rect, bindings: &[(KeyCombo, Action)]) {
    let intro_lines = INTRO.lines().count() as u16;
    let height = (bindings.len() as u16 + intro_lines + 4).min(area.height);
    let width = 54u16.min(area.width);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };
    frame.render_widget(Clear, overlay);

    let mut lines: Vec<Line> = INTRO.lines().map(Line::from).collect();
    lines.push(Line::default());
    for (combo, action) in bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>10}  ", combo.display()), theme::table_header()),
            Span::raw(action.to_string()),
        ]));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(theme::help_overlay());
    frame.render_widget(Paragraph::new(lines).block(block), overlay);
}
