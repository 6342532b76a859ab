//! Dashboard composition: owns the canvas, the window registry, and the
//! gesture controller, routes terminal events into them, and renders
//! the whole screen. Window content is resolved here by role; the
//! windowing core itself never sees a stock quote.

use std::collections::BTreeMap;
use std::sync::Arc;

use crossterm::event::{Event, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::actions::Action;
use crate::canvas::{Canvas, HeaderPanel};
use crate::geometry::{Viewport, WindowRect};
use crate::help::render_help;
use crate::keybindings::{self, KeyCombo, action_for};
use crate::screener::analysis::{ChartView, render_analysis, render_chart};
use crate::screener::table::{render_matrix, render_summary_line, render_summary_table};
use crate::screener::MarketData;
use crate::state::UiState;
use crate::theme;
use crate::ui::UiFrame;
use crate::window::decorator::{ChromeDecorator, WindowDecorator};
use crate::window::gesture::{GestureController, PointerResponse};
use crate::window::{Constraints, DockSide, WindowId, WindowRegistry, WindowSpec, dock};

/// Header panel heights in rows: a single status line when collapsed,
/// room for the volume-leader table when expanded.
const HEADER_COLLAPSED: u16 = 1;
const HEADER_EXPANDED: u16 = 8;

/// What a window shows. Dock side and default geometry derive from
/// this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowRole {
    Matrix,
    Analysis,
    Chart(ChartView),
}

impl WindowRole {
    const ALL: [WindowRole; 4] = [
        WindowRole::Matrix,
        WindowRole::Analysis,
        WindowRole::Chart(ChartView::Daily),
        WindowRole::Chart(ChartView::Weekly),
    ];

    fn title(self) -> &'static str {
        match self {
            WindowRole::Matrix => "MatrixTable",
            WindowRole::Analysis => "AnalysisPlatform",
            WindowRole::Chart(ChartView::Daily) => "Chart 1 · Daily",
            WindowRole::Chart(ChartView::Weekly) => "Chart 2 · Weekly",
        }
    }

    /// The matrix docks left; analysis-side panels dock right, like the
    /// original's left/right screen split.
    fn dock_side(self) -> DockSide {
        match self {
            WindowRole::Matrix => DockSide::Left,
            _ => DockSide::Right,
        }
    }
}

pub struct DashboardApp {
    canvas: Canvas,
    registry: WindowRegistry,
    gestures: GestureController,
    decorator: Arc<dyn WindowDecorator>,
    market: MarketData,
    ui: UiState,
    bindings: Vec<(KeyCombo, Action)>,
    roles: BTreeMap<WindowId, WindowRole>,
    selected: usize,
    show_previous: bool,
    quit: bool,
}

impl DashboardApp {
    /// `width`/`height` are the full terminal size; the bottom row is
    /// reserved for the status bar and everything above it is canvas.
    pub fn new(width: u16, height: u16, seed: u64) -> Self {
        let viewport = Viewport::new(width, height.saturating_sub(1));
        let mut app = Self {
            canvas: Canvas::new(viewport, HeaderPanel::new(HEADER_COLLAPSED, HEADER_EXPANDED)),
            registry: WindowRegistry::new(),
            gestures: GestureController::new(),
            decorator: Arc::new(ChromeDecorator),
            market: MarketData::generate(seed),
            ui: UiState::new(),
            bindings: keybindings::default_bindings(),
            roles: BTreeMap::new(),
            selected: 0,
            show_previous: false,
            quit: false,
        };
        app.open_missing_windows();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn take_mouse_capture_change(&mut self) -> Option<bool> {
        self.ui.take_mouse_capture_change()
    }

    /// Mount every default window whose role isn't on screen yet.
    /// Creation can legitimately fail on a terminal smaller than the
    /// role's minimum size; those windows just stay closed.
    fn open_missing_windows(&mut self) {
        let viewport = self.canvas.viewport();
        let min_y = self.canvas.min_y();
        for role in WindowRole::ALL {
            if self.roles.values().any(|&r| r == role) {
                continue;
            }
            let spec = self.default_spec(role, viewport, min_y);
            match self.registry.create(spec) {
                Ok(id) => {
                    self.roles.insert(id, role);
                }
                Err(err) => {
                    tracing::warn!(?role, %err, "window left closed");
                }
            }
        }
        self.canvas.reclamp(&mut self.registry);
    }

    fn default_spec(&self, role: WindowRole, viewport: Viewport, min_y: i32) -> WindowSpec {
        let vw = viewport.width as i32;
        let vh = viewport.height as i32;
        let canvas_h = (vh - min_y).max(0);
        let rect = match role {
            WindowRole::Matrix => WindowRect::new(
                1,
                min_y,
                (vw * 45 / 100) as u16,
                (canvas_h * 85 / 100) as u16,
            ),
            WindowRole::Analysis => WindowRect::new(
                vw * 48 / 100,
                min_y,
                (vw * 50 / 100) as u16,
                (canvas_h * 55 / 100) as u16,
            ),
            WindowRole::Chart(ChartView::Daily) => WindowRect::new(
                vw * 40 / 100,
                min_y + canvas_h * 55 / 100,
                (vw * 30 / 100) as u16,
                (canvas_h * 40 / 100) as u16,
            ),
            WindowRole::Chart(ChartView::Weekly) => WindowRect::new(
                vw * 68 / 100,
                min_y + canvas_h * 55 / 100,
                (vw * 30 / 100) as u16,
                (canvas_h * 40 / 100) as u16,
            ),
        };
        let constraints = match role {
            WindowRole::Matrix => Constraints::new(34, 8),
            WindowRole::Analysis => Constraints::new(44, 8),
            WindowRole::Chart(_) => Constraints::new(24, 6),
        }
        .with_min_y(min_y);
        WindowSpec::new(role.title(), rect)
            .constraints(constraints)
            .dock_side(role.dock_side())
    }

    /// Route one terminal event. Returns true when the event changed
    /// app state.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = action_for(&self.bindings, key) {
                    self.apply_action(action);
                    return true;
                }
                false
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => {
                self.canvas
                    .resize(*width, height.saturating_sub(1), &mut self.registry);
                true
            }
            Event::FocusLost => {
                self.gestures.cancel();
                true
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        let (col, row) = (mouse.column as i32, mouse.row as i32);
        match mouse.kind {
            MouseEventKind::Down(_) => {
                // Dock pills sit outside the window rects; check them
                // before the gesture system sees the press.
                if let Some(id) =
                    dock::pill_at(&self.registry, self.canvas_bounds(), mouse.column, mouse.row)
                {
                    dock::restore(&mut self.registry, id);
                    self.registry.focus(id);
                    // the boundary may have moved while the window was
                    // docked
                    self.canvas.reclamp(&mut self.registry);
                    return true;
                }
                let response =
                    self.gestures
                        .pointer_down(&mut self.registry, &*self.decorator, col, row);
                match response {
                    PointerResponse::MinimizePressed(id) => {
                        dock::minimize(&mut self.registry, id);
                    }
                    PointerResponse::ClosePressed(id) => {
                        self.close_window(id);
                    }
                    _ => {}
                }
                !matches!(response, PointerResponse::Ignored)
            }
            MouseEventKind::Drag(_) => {
                if self.gestures.is_idle() {
                    return false;
                }
                self.gestures.pointer_move(
                    &mut self.registry,
                    self.canvas.viewport(),
                    col,
                    row,
                );
                true
            }
            MouseEventKind::Up(_) => {
                let was_active = !self.gestures.is_idle();
                self.gestures.pointer_up();
                was_active
            }
            _ => false,
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::OpenHelp => self.ui.toggle_help(),
            Action::CloseHelp => self.ui.set_help_visible(false),
            Action::ToggleHeaderPanel => self.canvas.toggle_header(&mut self.registry),
            Action::FocusNext => self.cycle_focus(true),
            Action::FocusPrev => self.cycle_focus(false),
            Action::MinimizeFocused => {
                if let Some(id) = self.registry.top_window() {
                    dock::minimize(&mut self.registry, id);
                }
            }
            Action::CloseFocused => {
                if let Some(id) = self.registry.top_window() {
                    self.close_window(id);
                }
            }
            Action::RestoreAll => {
                for id in self.registry.ids() {
                    dock::restore(&mut self.registry, id);
                }
                self.canvas.reclamp(&mut self.registry);
            }
            Action::ReopenWindows => self.open_missing_windows(),
            Action::SelectNextStock => {
                self.selected = (self.selected + 1) % self.tape().len();
            }
            Action::SelectPrevStock => {
                let len = self.tape().len();
                self.selected = (self.selected + len - 1) % len;
            }
            Action::ToggleMatrixTape => {
                self.show_previous = !self.show_previous;
            }
            Action::ToggleMouseCapture => self.ui.toggle_mouse_capture(),
        }
    }

    /// The tape every view reads: today's matrix or yesterday's.
    fn tape(&self) -> &[crate::screener::StockQuote] {
        if self.show_previous {
            &self.market.previous
        } else {
            &self.market.main
        }
    }

    fn close_window(&mut self, id: WindowId) {
        self.registry.remove(id);
        self.roles.remove(&id);
    }

    /// Rotate the visible stack: raising the bottom-most window cycles
    /// forward, raising the one just under the top cycles back.
    fn cycle_focus(&mut self, forward: bool) {
        let visible: Vec<WindowId> = self
            .registry
            .ordered()
            .iter()
            .filter(|w| !w.minimized)
            .map(|w| w.id)
            .collect();
        if visible.len() < 2 {
            return;
        }
        let target = if forward {
            visible[0]
        } else {
            visible[visible.len() - 2]
        };
        self.registry.focus(target);
    }

    fn canvas_bounds(&self) -> Rect {
        let viewport = self.canvas.viewport();
        Rect {
            x: 0,
            y: 0,
            width: viewport.width,
            height: viewport.height,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let mut ui = UiFrame::new(frame);
        let full = ui.area();
        if full.width == 0 || full.height == 0 {
            return;
        }
        let header_height = self.canvas.header().height().min(full.height);
        let header_area = Rect {
            height: header_height,
            ..full
        };
        let status_area = Rect {
            y: full.y + full.height - 1,
            height: 1,
            ..full
        };

        if self.canvas.header().expanded() {
            render_summary_table(&mut ui, header_area, self.tape());
        } else {
            render_summary_line(&mut ui, header_area, self.tape());
        }

        let bounds = self.canvas_bounds();
        let focused = self.registry.top_window();
        for window in self.registry.ordered() {
            if window.minimized {
                continue;
            }
            let is_focused = focused == Some(window.id);
            self.decorator
                .render_chrome(&mut ui, window, bounds, is_focused);
            let Some(inner) = self.decorator.content_area(window.rect).clipped(bounds) else {
                continue;
            };
            match self.roles.get(&window.id) {
                Some(WindowRole::Matrix) => {
                    render_matrix(&mut ui, inner, self.tape(), self.selected);
                }
                Some(WindowRole::Analysis) => {
                    render_analysis(&mut ui, inner, &self.tape()[self.selected]);
                }
                Some(WindowRole::Chart(view)) => {
                    render_chart(&mut ui, inner, &self.tape()[self.selected], *view);
                }
                None => {}
            }
        }

        dock::render_pills(&mut ui, &self.registry, bounds);
        self.render_status(&mut ui, status_area, focused);

        if self.ui.help_visible() {
            render_help(&mut ui, full, &self.bindings);
        }
    }

    fn render_status(&self, ui: &mut UiFrame<'_>, area: Rect, focused: Option<WindowId>) {
        let title = focused
            .and_then(|id| self.registry.get(id))
            .map(|w| w.title.clone())
            .unwrap_or_else(|| "no windows".to_string());
        let quote = &self.tape()[self.selected];
        let tape = if self.show_previous { "prev" } else { "today" };
        let left = format!(" {} · {} {} · {}", title, quote.code, quote.name, tape);
        let right = "? help · Ctrl+q quit ".to_string();
        let pad = (area.width as usize).saturating_sub(left.len() + right.len());
        let line = format!("{left}{}{right}", " ".repeat(pad));
        ui.render_widget(
            Paragraph::new(Line::from(line)).style(theme::status_bar()),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, col: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn app() -> DashboardApp {
        DashboardApp::new(160, 50, 125)
    }

    #[test]
    fn opens_all_default_windows() {
        let app = app();
        assert_eq!(app.registry.len(), 4);
        let mut sides: Vec<DockSide> = app
            .registry
            .ids()
            .iter()
            .map(|id| app.registry.get(*id).unwrap().dock_side)
            .collect();
        sides.dedup();
        assert!(sides.contains(&DockSide::Left));
        assert!(sides.contains(&DockSide::Right));
    }

    #[test]
    fn header_toggle_moves_the_boundary_and_reclamps() {
        let mut app = app();
        // collapse, drag nothing: windows must all sit at or below the
        // collapsed boundary after reclamp
        app.handle_event(&key(KeyCode::Char('t')));
        let min_y = app.canvas.min_y();
        assert_eq!(min_y, HEADER_COLLAPSED as i32);
        app.handle_event(&key(KeyCode::Char('t')));
        let min_y = app.canvas.min_y();
        assert_eq!(min_y, HEADER_EXPANDED as i32);
        for window in app.registry.ordered() {
            assert!(window.rect.y >= min_y);
        }
    }

    #[test]
    fn minimize_and_restore_via_keys() {
        let mut app = app();
        let top = app.registry.top_window().unwrap();
        app.handle_event(&key(KeyCode::Char('m')));
        assert!(app.registry.get(top).unwrap().minimized);

        app.handle_event(&key(KeyCode::Char('r')));
        assert!(!app.registry.get(top).unwrap().minimized);
    }

    #[test]
    fn close_and_reopen_focused_window() {
        let mut app = app();
        let top = app.registry.top_window().unwrap();
        let role = *app.roles.get(&top).unwrap();
        app.handle_event(&key(KeyCode::Char('x')));
        assert!(!app.registry.contains(top));
        assert_eq!(app.registry.len(), 3);

        app.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char('n'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(app.registry.len(), 4);
        assert!(app.roles.values().any(|&r| r == role));
    }

    #[test]
    fn terminal_resize_keeps_windows_inside() {
        let mut app = app();
        app.handle_event(&Event::Resize(100, 30));
        let viewport = app.canvas.viewport();
        assert_eq!(viewport, Viewport::new(100, 29));
        for window in app.registry.ordered() {
            assert!(window.rect.x >= 0);
            assert!(window.rect.x + window.rect.width as i32 <= viewport.width as i32);
        }
    }

    #[test]
    fn mouse_drag_moves_the_top_window() {
        let mut app = app();
        let top = app.registry.top_window().unwrap();
        let rect = app.registry.get(top).unwrap().rect;
        let header = (rect.x as u16 + 6, rect.y as u16 + 1);

        app.handle_event(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            header.0,
            header.1,
        ));
        assert!(!app.gestures.is_idle());
        app.handle_event(&mouse(
            MouseEventKind::Drag(MouseButton::Left),
            header.0 + 4,
            header.1 + 3,
        ));
        let moved = app.registry.get(top).unwrap().rect;
        assert_eq!(moved.y, rect.y + 3);
        app.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert!(app.gestures.is_idle());
    }

    #[test]
    fn focus_loss_cancels_a_live_gesture() {
        let mut app = app();
        let top = app.registry.top_window().unwrap();
        let rect = app.registry.get(top).unwrap().rect;
        app.handle_event(&mouse(
            MouseEventKind::Down(MouseButton::Left),
            rect.x as u16 + 6,
            rect.y as u16 + 1,
        ));
        assert!(!app.gestures.is_idle());

        app.handle_event(&Event::FocusLost);
        assert!(app.gestures.is_idle());
    }

    #[test]
    fn stock_selection_wraps() {
        let mut app = app();
        let len = app.market.main.len();
        app.handle_event(&key(KeyCode::Up));
        assert_eq!(app.selected, len - 1);
        app.handle_event(&key(KeyCode::Down));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn tape_toggle_switches_matrices() {
        let mut app = app();
        let today = app.tape()[0].price;
        app.handle_event(&key(KeyCode::Char('p')));
        assert!(app.show_previous);
        let previous = app.tape()[0].price;
        // independently generated tapes for the same listing
        assert_ne!(today, previous);
        app.handle_event(&key(KeyCode::Char('p')));
        assert!(!app.show_previous);
    }

    #[test]
    fn render_smoke_test() {
        let mut app = app();
        let backend = ratatui::backend::TestBackend::new(160, 50);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        app.ui.set_help_visible(true);
        terminal.draw(|frame| app.render(frame)).unwrap();
    }
}
