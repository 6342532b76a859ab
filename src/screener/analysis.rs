//! Per-stock analysis content: the daily/weekly moving-average grid in
//! the analysis window and the sparkline bodies of the chart panes.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Row, Sparkline, Table};

use crate::theme;
use crate::ui::UiFrame;

use super::StockQuote;

/// Which tape a chart pane shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartView {
    Daily,
    Weekly,
}

impl ChartView {
    pub fn label(self) -> &'static str {
        match self {
            ChartView::Daily => "Daily",
            ChartView::Weekly => "Weekly",
        }
    }
}

/// The analysis window body: headline quote line plus the MA summary
/// grid, weekly row over daily row.
pub fn render_analysis(frame: &mut UiFrame<'_>, area: Rect, quote: &StockQuote) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let headline = Line::from(vec![
        Span::styled(
            format!("{} {} ", quote.code, quote.name),
            theme::panel_title(),
        ),
        Span::raw(format!("{:.2} ", quote.price)),
        Span::styled(
            format!("{:+.2} ({:+.2}%)", quote.change, quote.change_percent),
            ratatui::style::Style::default().fg(theme::change_color(quote.change)),
        ),
        Span::raw(format!("  phase {}", quote.phase)),
    ]);
    frame.render_widget(Paragraph::new(headline), Rect { height: 1, ..area });
    if area.height < 3 {
        return;
    }

    let grid = Rect {
        y: area.y + 2,
        height: area.height - 2,
        ..area
    };
    let ratio = |a: f64, b: f64| if b == 0.0 { 0.0 } else { a / b };
    let header = Row::new(vec!["", "MA26/132", "MA10/50", "MA2/10", "x10", "x26"])
        .style(theme::table_header());
    let weekly = Row::new(vec![
        "W".to_string(),
        format!("{:.1}", quote.weekly_ma26),
        format!("{:.1}", quote.weekly_ma10),
        format!("{:.1}", quote.weekly_ma2),
        format!("{:.2}", ratio(quote.weekly_ma2, quote.weekly_ma10)),
        format!("{:.2}", ratio(quote.weekly_ma10, quote.weekly_ma26)),
    ]);
    let daily = Row::new(vec![
        "D".to_string(),
        format!("{:.1}", quote.ma132),
        format!("{:.1}", quote.ma50),
        format!("{:.1}", quote.ma10),
        format!("{:.2}", ratio(quote.ma10, quote.ma50)),
        format!("{:.2}", ratio(quote.ma50, quote.ma132)),
    ]);
    let table = Table::new(
        [weekly, daily],
        [
            Constraint::Length(2),
            Constraint::Length(9),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Length(5),
        ],
    )
    .header(header);
    frame.render_widget(table, grid);
}

/// A chart pane body: caption line plus a sparkline of the requested
/// tape.
pub fn render_chart(frame: &mut UiFrame<'_>, area: Rect, quote: &StockQuote, view: ChartView) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let caption = format!("{} {} — {}", quote.code, quote.name, view.label());
    frame.render_widget(
        Paragraph::new(caption).style(theme::panel_title()),
        Rect { height: 1, ..area },
    );
    if area.height < 2 {
        return;
    }
    let weekly;
    let data: &[u64] = match view {
        ChartView::Daily => &quote.history,
        ChartView::Weekly => {
            weekly = quote.weekly_history();
            &weekly
        }
    };
    let spark_area = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };
    let tail = data.len().saturating_sub(spark_area.width as usize);
    frame.render_widget(
        Sparkline::default().data(&data[tail..]).style(theme::sparkline()),
        spark_area,
    );
}
