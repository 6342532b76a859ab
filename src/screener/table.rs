//! Matrix table rendering: the volume-leader list inside the matrix
//! window, and the compact market summary shown in the collapsible
//! header panel. Ordering is fixed; sorting UX is deliberately absent.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use crate::theme;
use crate::ui::UiFrame;

use super::StockQuote;

fn format_volume(volume: u64) -> String {
    if volume >= 1_000_000 {
        format!("{:.1}M", volume as f64 / 1_000_000.0)
    } else {
        format!("{}K", volume / 1_000)
    }
}

fn quote_row(quote: &StockQuote, selected: bool) -> Row<'static> {
    let change_style = Style::default().fg(theme::change_color(quote.change));
    let row = Row::new(vec![
        Cell::from(quote.code.to_string()),
        Cell::from(quote.name.to_string()),
        Cell::from(format!("{:.2}", quote.price)),
        Cell::from(format!("{:+.2}%", quote.change_percent)).style(change_style),
        Cell::from(format_volume(quote.volume)),
        Cell::from(quote.phase.to_string()),
    ]);
    if selected { row.style(theme::row_selected()) } else { row }
}

/// The matrix window body: one row per screened stock, the selected
/// row highlighted.
pub fn render_matrix(frame: &mut UiFrame<'_>, area: Rect, quotes: &[StockQuote], selected: usize) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let header = Row::new(vec!["Code", "Name", "Price", "Chg%", "Vol", "Ph"])
        .style(theme::table_header());
    // Keep the selection visible once the list outgrows the window.
    let visible_rows = area.height.saturating_sub(1) as usize;
    let first = selected.saturating_sub(visible_rows.saturating_sub(1));
    let rows = quotes
        .iter()
        .enumerate()
        .skip(first)
        .map(|(idx, quote)| quote_row(quote, idx == selected));
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(2),
        ],
    )
    .header(header);
    frame.render_widget(table, area);
}

/// One-line market status for the collapsed header panel.
pub fn render_summary_line(frame: &mut UiFrame<'_>, area: Rect, quotes: &[StockQuote]) {
    let advancers = quotes.iter().filter(|q| q.change > 0.0).count();
    let decliners = quotes.iter().filter(|q| q.change < 0.0).count();
    let line = Line::from(vec![
        Span::styled("VV100 ", theme::panel_title()),
        Span::styled(
            format!("▲{advancers} "),
            Style::default().fg(theme::change_color(1.0)),
        ),
        Span::styled(
            format!("▼{decliners} "),
            Style::default().fg(theme::change_color(-1.0)),
        ),
        Span::raw("· volume leaders · press t to expand"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Expanded header panel: title plus the top volume leaders.
pub fn render_summary_table(frame: &mut UiFrame<'_>, area: Rect, quotes: &[StockQuote]) {
    if area.height < 2 {
        render_summary_line(frame, area, quotes);
        return;
    }
    let title_area = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new("Volume Leaders — Today's Matrix").style(theme::panel_title()),
        title_area,
    );
    let body = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };
    let mut leaders: Vec<&StockQuote> = quotes.iter().collect();
    leaders.sort_by_key(|q| std::cmp::Reverse(q.volume));
    let rows = leaders
        .into_iter()
        .take(body.height.saturating_sub(1) as usize)
        .map(|quote| quote_row(quote, false));
    let header = Row::new(vec!["Code", "Name", "Price", "Chg%", "Vol", "Ph"])
        .style(theme::table_header());
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(2),
        ],
    )
    .header(header);
    frame.render_widget(table, body);
}
