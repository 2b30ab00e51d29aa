use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::model::config::StoreConfig;
use crate::model::filter::FilterTag;
use crate::ops::reconcile::{LoadState, Reconciler};
use crate::ops::search::project;
use crate::store::{StoreClient, Subscription};

use super::input;
use super::render;
use super::theme::{Theme, ThemeMode};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    Modal,
}

/// Which input the create modal is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalField {
    #[default]
    Title,
    Description,
    DueDate,
}

impl ModalField {
    pub fn next(self) -> ModalField {
        match self {
            ModalField::Title => ModalField::Description,
            ModalField::Description => ModalField::DueDate,
            ModalField::DueDate => ModalField::Title,
        }
    }

    pub fn prev(self) -> ModalField {
        match self {
            ModalField::Title => ModalField::DueDate,
            ModalField::Description => ModalField::Title,
            ModalField::DueDate => ModalField::Description,
        }
    }
}

/// Form buffers for the create modal
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub field: ModalField,
}

/// Main application state
pub struct App {
    pub client: StoreClient,
    pub subscription: Subscription,
    pub reconciler: Reconciler,
    pub filter: FilterTag,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub theme_mode: ThemeMode,
    pub config: StoreConfig,
    /// Search bar visible (query may still be empty)
    pub search_open: bool,
    /// Live search query, applied as typed
    pub search_input: String,
    /// Cursor index into the visible (projected) list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Create-modal form state (Some while the modal is open)
    pub modal: Option<ModalState>,
    /// Transient status-row message (write failures, clear counts)
    pub status: Option<String>,
}

impl App {
    pub fn new(client: StoreClient, config: StoreConfig, ui_state: Option<UiState>) -> Self {
        let ui_state = ui_state.unwrap_or_default();

        // Persisted preference wins, then the config default, then dark.
        let theme_mode = ThemeMode::from_str(&ui_state.theme)
            .or_else(|| {
                config
                    .ui
                    .theme
                    .as_deref()
                    .and_then(ThemeMode::from_str)
            })
            .unwrap_or(ThemeMode::Dark);
        let theme = Theme::from_config(theme_mode, &config.ui);

        let filter = FilterTag::from_str(&ui_state.filter).unwrap_or(FilterTag::All);
        let search_input = ui_state.last_search.unwrap_or_default();

        let subscription = client.subscribe(filter);

        App {
            client,
            subscription,
            reconciler: Reconciler::new(),
            filter,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            theme_mode,
            config,
            search_open: !search_input.is_empty(),
            search_input,
            cursor: 0,
            scroll_offset: 0,
            modal: None,
            status: None,
        }
    }

    /// One event-loop tick of subscription work: apply a delivered
    /// snapshot, if any. Local reorder done since the last snapshot is
    /// discarded by the apply (snapshot-replace-wins).
    pub fn pump(&mut self) {
        if let Some(snapshot) = self.subscription.poll() {
            self.reconciler.apply(snapshot);
            self.clamp_cursor();
        }
    }

    /// The displayed list: reconciled state projected through the query.
    pub fn visible(&self) -> LoadState {
        project(self.reconciler.state(), &self.search_input)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().todos().map_or(0, |t| t.len())
    }

    /// The todo under the cursor, if the view is loaded and non-empty.
    pub fn selected(&self) -> Option<crate::model::todo::Todo> {
        self.visible()
            .todos()
            .and_then(|todos| todos.get(self.cursor).cloned())
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    // -----------------------------------------------------------------
    // View-state transitions
    // -----------------------------------------------------------------

    /// Switch the filter tag: re-issue the subscription and drop back to
    /// pending until its first snapshot arrives. The old subscription's
    /// in-flight delivery dies with it.
    pub fn set_filter(&mut self, filter: FilterTag) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.subscription = self.client.subscribe(filter);
        self.reconciler.reset();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
        self.theme = Theme::from_config(self.theme_mode, &self.config.ui);
    }

    /// Move the selected row locally (no store write; gone at the next
    /// snapshot). Disabled while a query is active: reordering a
    /// projection has no stable meaning.
    pub fn move_selected(&mut self, delta: i32) {
        if !self.search_input.is_empty() {
            return;
        }
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let from = self.cursor;
        let to = if delta < 0 {
            from.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (from + delta as usize).min(len - 1)
        };
        if from != to && self.reconciler.reorder(from, to) {
            self.cursor = to;
        }
    }

    // -----------------------------------------------------------------
    // Mutation dispatchers
    // -----------------------------------------------------------------
    // Fire-and-forget against the store: the visible item does not change
    // until the next snapshot arrives. Failures surface in the status row.

    pub fn toggle_selected(&mut self) {
        let Some(todo) = self.selected() else { return };
        if let Err(e) = self.client.set_completed(todo.id, !todo.completed) {
            self.status = Some(format!("update failed: {}", e));
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(todo) = self.selected() else { return };
        if let Err(e) = self.client.delete(todo.id) {
            self.status = Some(format!("delete failed: {}", e));
        }
    }

    pub fn clear_completed(&mut self) {
        match self.client.clear_completed() {
            Ok(count) => self.status = Some(format!("cleared {} completed", count)),
            Err(e) => self.status = Some(format!("clear failed: {}", e)),
        }
    }

    pub fn open_modal(&mut self) {
        self.modal = Some(ModalState::default());
        self.mode = Mode::Modal;
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.mode = Mode::Navigate;
    }

    /// Submit the create form. A blank title is silently refused and the
    /// modal stays open; everything else passes through verbatim, empty
    /// strings included.
    pub fn submit_modal(&mut self) {
        let Some(form) = &self.modal else { return };
        if form.title.trim().is_empty() {
            return;
        }
        let result = self.client.create(
            &form.title,
            Some(form.description.clone()),
            Some(form.due_date.clone()),
        );
        match result {
            Ok(_) => self.close_modal(),
            Err(e) => {
                self.status = Some(format!("create failed: {}", e));
                self.close_modal();
            }
        }
    }
}

/// Run the TUI application
pub fn run(store_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    // Discover and open the store
    let start = match store_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    let root = StoreClient::discover(&start)?;
    let client = StoreClient::open(&root)?;
    let config = config_io::read_config(client.store_dir())?;
    let ui_state = read_ui_state(client.store_dir());

    let mut app = App::new(client, config, ui_state);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Save UI state before exit
    save_ui_state(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        // Subscriptions deliver between keystrokes too: a snapshot may
        // arrive on any tick, pushed by another session's write.
        app.pump();

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced state save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_ui_state(app);
                save_counter = 0;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Persist theme, filter, and query to .state.json
fn save_ui_state(app: &App) {
    let state = UiState {
        theme: app.theme_mode.as_str().to_string(),
        filter: app.filter.as_str().to_string(),
        last_search: if app.search_input.is_empty() {
            None
        } else {
            Some(app.search_input.clone())
        },
    };
    let _ = write_ui_state(app.client.store_dir(), &state);
}
