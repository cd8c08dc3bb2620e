use {
    crate::{
        engine::ViewController,
        store::{DataSource, RecordField},
    },
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    ratatui::{backend::CrosstermBackend, Terminal},
    std::time::Duration,
};

/// Discrete UI event derived from a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Quit,
    QueryInput(char),
    QueryBackspace,
    QueryClear,
    CycleScope,
    HeaderClick(RecordField),
    Refresh,
}

/// Map a key press to a UI action
pub fn map_key(key: KeyEvent) -> Option<UiAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(UiAction::Quit),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UiAction::QueryClear)
        }
        KeyCode::Char(c) => Some(UiAction::QueryInput(c)),
        KeyCode::Backspace => Some(UiAction::QueryBackspace),
        KeyCode::Tab => Some(UiAction::CycleScope),
        KeyCode::F(6) => Some(UiAction::Refresh),
        KeyCode::F(n @ 1..=5) => RecordField::TABLE_COLUMNS
            .get(usize::from(n) - 1)
            .copied()
            .map(UiAction::HeaderClick),
        _ => None,
    }
}

/// Apply an action to the controller. Returns `false` when the UI should exit.
pub fn apply_action(controller: &mut ViewController, source: &mut DataSource, action: UiAction) -> bool {
    match action {
        UiAction::Quit => return false,
        UiAction::QueryInput(c) => {
            let mut query = controller.filter_state().query.clone();
            query.push(c);
            controller.on_query_change(query);
        }
        UiAction::QueryBackspace => {
            let mut query = controller.filter_state().query.clone();
            query.pop();
            controller.on_query_change(query);
        }
        UiAction::QueryClear => controller.on_query_change(String::new()),
        UiAction::CycleScope => {
            let scope = controller.filter_state().scope.next();
            controller.on_scope_change(scope);
        }
        UiAction::HeaderClick(field) => controller.on_header_field(field),
        UiAction::Refresh => match source.reload() {
            Ok(store) => controller.replace_store(store),
            Err(e) => log::error!("Refresh from {} failed: {}", source.describe(), e),
        },
    }
    true
}

/// Run the TUI event loop
///
/// Each key press is handled to completion before the next frame is drawn.
pub fn run_ui(
    controller: &mut ViewController,
    source: &mut DataSource,
    max_rows: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    crossterm::terminal::enable_raw_mode()?;

    // Alternate screen keeps stderr logs out of the dashboard buffer
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )?;

    terminal.clear()?;

    let result = event_loop(&mut terminal, controller, source, max_rows);

    // Cleanup - restore terminal state even if the loop failed
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    controller: &mut ViewController,
    source: &mut DataSource,
    max_rows: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let poll_interval = Duration::from_millis(250);

    loop {
        let area = terminal.size()?;
        terminal.draw(|f| {
            if let Err(e) = crate::ui::layout::render_layout(f, area, &*controller, max_rows) {
                log::error!("Layout render error: {}", e);
            }
        })?;

        if !crossterm::event::poll(poll_interval)? {
            continue;
        }

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if let Some(action) = map_key(key) {
                if !apply_action(controller, source, action) {
                    break;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FilterScope, SortDirection, TopArtistRanking};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_map_key() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(UiAction::Quit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(UiAction::QueryInput('q')));
        assert_eq!(map_key(press(KeyCode::Tab)), Some(UiAction::CycleScope));
        assert_eq!(
            map_key(press(KeyCode::F(1))),
            Some(UiAction::HeaderClick(RecordField::SongName))
        );
        assert_eq!(
            map_key(press(KeyCode::F(5))),
            Some(UiAction::HeaderClick(RecordField::UserId))
        );
        assert_eq!(map_key(press(KeyCode::F(6))), Some(UiAction::Refresh));
        assert_eq!(map_key(press(KeyCode::F(9))), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(UiAction::Quit)
        );
    }

    #[test]
    fn test_apply_actions_drive_controller() {
        let mut source = DataSource::Mock { seed: 5, record_count: 30 };
        let mut controller = ViewController::new(source.load().unwrap(), TopArtistRanking::TrustOrder);

        for c in "drake".chars() {
            assert!(apply_action(&mut controller, &mut source, UiAction::QueryInput(c)));
        }
        assert_eq!(controller.filter_state().query, "drake");
        assert!(controller
            .view()
            .iter()
            .all(|r| r.artist.to_lowercase().contains("drake") || r.song_name.to_lowercase().contains("drake")));

        apply_action(&mut controller, &mut source, UiAction::QueryBackspace);
        assert_eq!(controller.filter_state().query, "drak");

        apply_action(&mut controller, &mut source, UiAction::CycleScope);
        assert_eq!(controller.filter_state().scope, FilterScope::Song);

        apply_action(&mut controller, &mut source, UiAction::HeaderClick(RecordField::DateStreamed));
        assert_eq!(controller.sort_config().direction, SortDirection::Ascending);

        apply_action(&mut controller, &mut source, UiAction::Refresh);
        assert_eq!(controller.store_version(), 1);

        assert!(!apply_action(&mut controller, &mut source, UiAction::Quit));
    }
}
