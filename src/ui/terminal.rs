use {
    crate::{
        dashboard::{render, Dashboard, DashboardState},
        filter::DateRange,
        store::OrderStore,
    },
    crossterm::event::KeyCode,
    ratatui::{backend::CrosstermBackend, Terminal},
    std::time::Duration,
};

/// Interactive state of the terminal dashboard
///
/// Every range change re-runs [`render`] over the loaded store; nothing else
/// is cached between key presses.
pub struct DashboardApp<'a> {
    store: &'a dyn OrderStore,
    bounds: Option<DateRange>,
    initial: DashboardState,
    state: DashboardState,
    dashboard: Dashboard,
}

impl<'a> DashboardApp<'a> {
    pub fn new(store: &'a dyn OrderStore, state: DashboardState, bounds: Option<DateRange>) -> Self {
        let dashboard = render(store, &state);
        Self {
            store,
            bounds,
            initial: state,
            state,
            dashboard,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn bounds(&self) -> Option<DateRange> {
        self.bounds
    }

    /// Apply a key press. Returns `false` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let range = self.state.range;
        let next = match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('[') => range.shift_start(-1),
            KeyCode::Char(']') => range.shift_start(1),
            KeyCode::Char('{') => range.shift_end(-1),
            KeyCode::Char('}') => range.shift_end(1),
            KeyCode::Char('r') => self.bounds.unwrap_or(self.initial.range),
            _ => return true,
        };

        let next = match self.bounds {
            Some(bounds) => next.clamp_to(&bounds),
            None => next,
        };
        if next != range {
            self.set_range(next);
        }
        true
    }

    fn set_range(&mut self, range: DateRange) {
        self.state.range = range;
        self.dashboard = render(self.store, &self.state);
        log::debug!(
            "Range {}..={} → {} orders",
            range.start,
            range.end,
            self.dashboard.total_orders
        );
    }
}

/// Run the TUI event loop until the user quits
pub fn run_ui(app: &mut DashboardApp<'_>) -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::enable_raw_mode()?;

    // Alternate screen keeps stderr logs from overlaying the dashboard
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )?;

    let result = event_loop(app);

    // Restore the terminal even when the loop failed; raw mode goes first
    // so a failed screen switch cannot leave it enabled
    let raw = crossterm::terminal::disable_raw_mode();
    let screen = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    );

    result?;
    raw?;
    screen?;
    Ok(())
}

fn event_loop(app: &mut DashboardApp<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    loop {
        terminal.draw(|f| {
            let area = f.size();
            crate::ui::layout::render_layout(f, area, &*app);
        })?;

        if crossterm::event::poll(Duration::from_millis(250))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if key.kind == crossterm::event::KeyEventKind::Press && !app.handle_key(key.code) {
                    break;
                }
            }
        }
    }

    Ok(())
}
