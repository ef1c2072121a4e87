use std::sync::mpsc;
use std::time::Instant;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use stories_core::{update, AppState, AppViewModel, Msg};
use stories_logging::stories_info;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::constants::TICK_RATE;
use super::ui::{render, Focus, UiState};
use super::{logging, persistence};

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    logging::initialize(config.log, &config.state_dir);
    stories_info!(
        "Starting hacker_stories endpoint={} state_dir={:?}",
        config.endpoint,
        config.state_dir
    );

    let storage = persistence::open_storage(&config.state_dir);
    let search_term = persistence::restore_search_term(&storage);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let effects = EffectRunner::new(config.fetch.clone(), storage, msg_tx)
        .context("failed to start fetch engine")?;
    let mut app = App::new(AppState::new(config.endpoint, search_term), msg_rx, effects);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();
    stories_info!("Exiting hacker_stories");
    result
}

struct App {
    state: AppState,
    ui: UiState,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
    needs_redraw: bool,
}

impl App {
    fn new(state: AppState, msg_rx: mpsc::Receiver<Msg>, effects: EffectRunner) -> Self {
        Self {
            state,
            ui: UiState::default(),
            msg_rx,
            effects,
            needs_redraw: true,
        }
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        self.dispatch_msg(Msg::Started);
        let mut last_tick = Instant::now();

        loop {
            if self.needs_redraw {
                let view = self.state.view();
                terminal.draw(|frame| render::draw(frame, &view, &mut self.ui))?;
                self.needs_redraw = false;
            }

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let view = self.state.view();
                        if let Some(msg) = key_to_msg(&mut self.ui, &view, key) {
                            self.dispatch_msg(msg);
                        }
                        self.needs_redraw = true;
                    }
                    Event::Resize(..) => self.needs_redraw = true,
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.process_pending_messages();
                self.dispatch_msg(Msg::Tick);
                last_tick = Instant::now();
            }

            if self.ui.should_quit {
                return Ok(());
            }
        }
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch_msg(msg);
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_redraw = true;
        }
        self.state = state;
        self.effects.run(effects);
    }
}

/// Maps a key press to the core message it stands for, updating focus and
/// selection along the way.
fn key_to_msg(ui: &mut UiState, view: &AppViewModel, key: KeyEvent) -> Option<Msg> {
    if key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    {
        ui.should_quit = true;
        return None;
    }
    if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
        ui.toggle_focus();
        ui.clamp_selection(view.story_count());
        return None;
    }

    match ui.focus {
        // The list is hidden while loading.
        Focus::List if view.is_loading => None,
        Focus::Search => match key.code {
            KeyCode::Enter => Some(Msg::SearchSubmitted),
            KeyCode::Backspace => {
                let mut text = view.search_term.clone();
                text.pop()?;
                Some(Msg::SearchInput(text))
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = view.search_term.clone();
                text.push(c);
                Some(Msg::SearchInput(text))
            }
            KeyCode::Down => {
                ui.focus = Focus::List;
                ui.clamp_selection(view.story_count());
                None
            }
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                ui.select_next(view.story_count());
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                ui.select_previous(view.story_count());
                None
            }
            KeyCode::Delete | KeyCode::Char('d') => ui
                .selected()
                .and_then(|i| view.stories.get(i))
                .map(|story| Msg::RemoveStory(story.clone())),
            KeyCode::Char('/') => {
                ui.focus = Focus::Search;
                None
            }
            KeyCode::Char('q') => {
                ui.should_quit = true;
                None
            }
            _ => None,
        },
    }
}
