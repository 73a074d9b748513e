//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view, animate) to the real terminal via crossterm and
//! ratatui. All state mutation happens synchronously while handling one
//! event; there is exactly one event producer (the terminal) and one
//! state owner (the loop), so no channels or threads are needed.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::carousel::DragTranslation;
use crate::catalog::Catalog;
use crate::layout;

use super::animate::Animation;
use super::state::{Action, App, Transition};
use super::update::update;
use super::view::{self, render};

/// Frame interval while an animation is running (~60 fps).
const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Poll interval when the layout is settled and we are only waiting
/// for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SwipeLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SwipeRight),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Layout units per terminal column: inverse of the view's rendering
/// factor, so a dragged card follows the pointer exactly.
const UNITS_PER_COLUMN: f64 = 1.0 / view::COLUMNS_PER_UNIT;

/// Layout units per terminal row. Rows are roughly twice as tall as
/// columns are wide; the vertical component never drives index changes
/// anyway.
const UNITS_PER_ROW: f64 = 2.0 / view::COLUMNS_PER_UNIT;

/// Converts raw mouse positions into the engine's drag deltas.
///
/// Remembers where the button went down; drags and the final release are
/// reported relative to that origin. A release without an origin (button
/// pressed before the TUI started, stray events) maps to nothing.
#[derive(Debug, Default)]
struct DragTracker {
    origin: Option<(u16, u16)>,
}

impl DragTracker {
    fn on_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        let at = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some(at);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => self
                .origin
                .map(|origin| Action::DragMoved(translation(origin, at))),
            MouseEventKind::Up(MouseButton::Left) => self
                .origin
                .take()
                .map(|origin| Action::DragEnded(translation(origin, at))),
            _ => None,
        }
    }
}

fn translation(origin: (u16, u16), current: (u16, u16)) -> DragTranslation {
    DragTranslation::new(
        (current.0 as f64 - origin.0 as f64) * UNITS_PER_COLUMN,
        (current.1 as f64 - origin.1 as f64) * UNITS_PER_ROW,
    )
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode with mouse capture.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    io::stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the carousel TUI until the user quits.
pub fn run(catalog: Catalog) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, App::new(catalog));
    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<()> {
    let mut drags = DragTracker::default();

    loop {
        let now = Instant::now();

        // Retire finished animations before drawing
        if app.animation.as_ref().is_some_and(|a| a.finished(now)) {
            app.animation = None;
        }

        terminal.draw(|frame| render(&app, now, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Tick fast while animating, lazily otherwise
        let timeout = if app.animation.is_some() {
            ANIMATION_TICK
        } else {
            IDLE_POLL
        };
        if !event::poll(timeout)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) => drags.on_mouse(mouse),
            _ => None, // resize redraws on the next pass
        };
        let Some(action) = action else { continue };

        match update(&mut app.carousel, &action) {
            Transition::Idle => {}
            Transition::IndexChanged { previous } => {
                // Start the glide from wherever the cards currently are:
                // mid-animation swipes pick up from the sampled state.
                let from = match app.animation.take() {
                    Some(animation) => animation.sample(now),
                    None => layout::transforms(previous, app.carousel.len()),
                };
                app.animation = Some(Animation::begin(from, app.carousel.transforms()));
            }
            Transition::Quit => {
                app.should_quit = true;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Keys --

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn arrow_keys_map_to_paging() {
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(map_key(left), Some(Action::SwipeLeft));
        assert_eq!(map_key(right), Some(Action::SwipeRight));
    }

    #[test]
    fn vim_keys_map_to_paging() {
        let h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE);
        let l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(map_key(h), Some(Action::SwipeLeft));
        assert_eq!(map_key(l), Some(Action::SwipeRight));
    }

    #[test]
    fn q_and_esc_quit() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(q), Some(Action::Quit));
        assert_eq!(map_key(esc), Some(Action::Quit));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
    }

    // -- Mouse drags --

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn press_drag_release_produces_translations() {
        let mut tracker = DragTracker::default();

        let down = mouse(MouseEventKind::Down(MouseButton::Left), 50, 10);
        assert_eq!(tracker.on_mouse(down), None);

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 44, 10);
        let moved = tracker.on_mouse(drag).unwrap();
        assert_eq!(
            moved,
            Action::DragMoved(DragTranslation::new(-6.0 * UNITS_PER_COLUMN, 0.0))
        );

        let up = mouse(MouseEventKind::Up(MouseButton::Left), 30, 11);
        let ended = tracker.on_mouse(up).unwrap();
        assert_eq!(
            ended,
            Action::DragEnded(DragTranslation::new(
                -20.0 * UNITS_PER_COLUMN,
                UNITS_PER_ROW
            ))
        );
    }

    #[test]
    fn release_clears_the_origin() {
        let mut tracker = DragTracker::default();
        tracker.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5));
        tracker.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 5, 5));
        // A drag with no preceding press maps to nothing
        let stray = mouse(MouseEventKind::Drag(MouseButton::Left), 9, 5);
        assert_eq!(tracker.on_mouse(stray), None);
    }

    #[test]
    fn non_left_buttons_are_ignored() {
        let mut tracker = DragTracker::default();
        let right = mouse(MouseEventKind::Down(MouseButton::Right), 5, 5);
        assert_eq!(tracker.on_mouse(right), None);
        let scroll = mouse(MouseEventKind::ScrollUp, 5, 5);
        assert_eq!(tracker.on_mouse(scroll), None);
    }

    #[test]
    fn a_sixteen_column_drag_crosses_the_threshold() {
        // Sanity-check the unit conversion against the swipe threshold:
        // 16 columns × 10/3 units ≈ 53 units, just past 50.
        let t = translation((50, 10), (34, 10));
        assert!(t.dx < -crate::carousel::SWIPE_THRESHOLD);
    }
}
