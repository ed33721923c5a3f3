use std::time::Instant;

use anyhow::Context;
use rand::rngs::ThreadRng;
use rand::Rng;
use roulette_core::{update, AppState, Msg};
use roulette_engine::TopicStore;
use roulette_logging::{roulette_debug, roulette_info};

use super::config;
use super::effects::EffectRunner;
use super::event::{Event, EventHandler};
use super::input::{map_key, Intent};
use super::logging::{self, LogDestination, LOG_FILENAME};
use super::persistence;
use super::terminal::{TerminalSession, Tui};
use super::ui;

pub fn run_app() -> anyhow::Result<()> {
    let config_path = config::config_path();
    let config = config::load(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;
    let data_dir = config.data_dir();

    logging::initialize(if config.log_to_file {
        LogDestination::File(data_dir.join(LOG_FILENAME))
    } else {
        LogDestination::Off
    });
    roulette_info!("Starting topic roulette with data dir {:?}", data_dir);

    let store = TopicStore::new(data_dir);
    let topics = persistence::load_topics(&store);

    let mut session = TerminalSession::enter().context("entering terminal UI")?;
    let events = EventHandler::new(config.tick_rate());
    let effects =
        EffectRunner::new(store, events.flash_sink()).context("starting flash timer")?;

    let mut app = App::new(AppState::with_timing(config.timing()), effects);
    app.dispatch(Msg::RestoreTopics(topics));

    let result = app.run(session.terminal(), &events);
    app.dispatch(Msg::Shutdown);
    roulette_info!("Topic roulette exiting");
    result
}

struct App {
    state: AppState,
    effects: EffectRunner,
    rng: ThreadRng,
    should_quit: bool,
}

impl App {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        Self {
            state,
            effects,
            rng: rand::thread_rng(),
            should_quit: false,
        }
    }

    fn run(&mut self, terminal: &mut Tui, events: &EventHandler) -> anyhow::Result<()> {
        let mut needs_draw = true;
        while !self.should_quit {
            if needs_draw {
                let view = self.state.view();
                terminal.draw(|frame| ui::render(frame, &view))?;
            }
            let event = events.next()?;
            needs_draw = self.handle_event(event);
        }
        Ok(())
    }

    /// Applies one event. Returns whether the screen needs redrawing.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => match map_key(&self.state, key) {
                Some(Intent::Quit) => self.should_quit = true,
                Some(Intent::Spin) => {
                    let roll = self.rng.gen::<f64>();
                    self.dispatch(Msg::SpinClicked {
                        roll,
                        now: Instant::now(),
                    });
                }
                Some(Intent::Send(msg)) => self.dispatch(msg),
                None => {}
            },
            Event::FlashDue(spin_id) => self.dispatch(Msg::FlashDue {
                spin_id,
                now: Instant::now(),
            }),
            Event::Tick => self.dispatch(Msg::Tick),
            Event::Resize => return true,
        }
        self.state.consume_dirty()
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if !effects.is_empty() {
            roulette_debug!("running {} effect(s)", effects.len());
        }
        self.effects.run(effects);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use roulette_core::{SpinState, SpinTiming};
    use roulette_engine::{FlashSink, SpinId};
    use tempfile::TempDir;

    use super::*;

    struct NullSink;

    impl FlashSink for NullSink {
        fn flash_due(&self, _spin_id: SpinId) {}
    }

    fn app(dir: &TempDir, topics: &[&str]) -> (App, TopicStore) {
        let store = TopicStore::new(dir.path().to_path_buf());
        let effects = EffectRunner::new(store.clone(), Arc::new(NullSink)).unwrap();
        let mut app = App::new(AppState::with_timing(SpinTiming::default()), effects);
        app.dispatch(Msg::RestoreTopics(
            topics.iter().map(|s| s.to_string()).collect(),
        ));
        app.state.consume_dirty();
        (app, store)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn typed_topic_is_added_and_saved() {
        let dir = TempDir::new().unwrap();
        let (mut app, store) = app(&dir, &["A"]);

        assert!(press(&mut app, KeyCode::Char('m')));
        for c in "Bee".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(press(&mut app, KeyCode::Enter));

        assert_eq!(app.state.topics().as_slice(), ["A", "Bee"]);
        assert_eq!(
            store.read().unwrap(),
            Some(vec!["A".to_string(), "Bee".to_string()])
        );
    }

    #[test]
    fn space_starts_spin_and_arms_timer() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = app(&dir, &["A", "B"]);

        assert!(press(&mut app, KeyCode::Char(' ')));

        assert!(app.state.spin_state().is_spinning());
        assert!(app.effects.flash_pending());
    }

    #[test]
    fn shutdown_disarms_timer() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = app(&dir, &["A", "B"]);
        press(&mut app, KeyCode::Char(' '));

        app.dispatch(Msg::Shutdown);

        assert_eq!(app.state.spin_state(), &SpinState::Idle);
        assert!(!app.effects.flash_pending());
    }

    #[test]
    fn quit_key_stops_loop() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = app(&dir, &[]);

        press(&mut app, KeyCode::Char('q'));

        assert!(app.should_quit);
    }

    #[test]
    fn tick_does_not_redraw() {
        let dir = TempDir::new().unwrap();
        let (mut app, _) = app(&dir, &["A"]);

        assert!(!app.handle_event(Event::Tick));
    }
}
