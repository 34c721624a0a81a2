use log::{info, warn};

use crate::pomodoro::{
    mode::Mode,
    settings::{Settings, SettingsResult, SettingsStore},
    timer::{Completion, Tick, Timer},
};

/// The side effects a running session needs from its surroundings.
///
/// Implementations decide how the timer is shown and how the user is
/// alerted; the session decides when.
pub trait Effects {
    /// Shows the current state of the timer.
    fn render(&mut self, timer: &Timer);
    /// Plays the alert sound at the end of a session.
    fn play_sound(&mut self);
    /// Tells the user a session has ended.
    fn notify(&mut self, completion: Completion);
}

/// A user command for a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start counting down.
    Start,
    /// Pause the countdown.
    Pause,
    /// Start when paused, pause when running.
    Toggle,
    /// Rewind the current session.
    Reset,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses a line of keyboard input.
    ///
    /// An empty line or a space toggles, `s` starts, `p` pauses, `r` resets
    /// and `q` quits. Matching is case insensitive.
    ///
    /// # Example
    /// ```
    /// use reckon::pomodoro::session::Command;
    ///
    /// assert_eq!(Command::parse(""), Some(Command::Toggle));
    /// assert_eq!(Command::parse("R"), Some(Command::Reset));
    /// assert_eq!(Command::parse("x"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "" => Some(Self::Toggle),
            "s" | "start" => Some(Self::Start),
            "p" | "pause" => Some(Self::Pause),
            "r" | "reset" => Some(Self::Reset),
            "q" | "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// A timer wired to its settings, a settings store and its side effects.
pub struct Session<E: Effects, S: SettingsStore> {
    timer:    Timer,
    settings: Settings,
    effects:  E,
    store:    S,
}

impl<E: Effects, S: SettingsStore> Session<E, S> {
    /// Creates a session from the stored settings and renders it once.
    ///
    /// Falls back to the default settings when nothing is stored or the
    /// stored blob cannot be used.
    pub fn new(effects: E, store: S) -> Self {
        let settings = match store.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                warn!("ignoring stored settings: {e}");
                Settings::default()
            },
        };

        let mut session = Self { timer: Timer::new(&settings),
                                 settings,
                                 effects,
                                 store };
        session.render();
        session
    }

    /// The current timer state.
    #[must_use]
    pub const fn timer(&self) -> &Timer {
        &self.timer
    }

    /// The settings in effect.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The injected effects collaborator.
    #[must_use]
    pub const fn effects(&self) -> &E {
        &self.effects
    }

    /// The settings store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Starts the countdown and renders, unless it is already running.
    pub fn start(&mut self) {
        if self.timer.is_running() {
            return;
        }
        self.timer.start();
        self.render();
    }

    /// Pauses the countdown and renders.
    pub fn pause(&mut self) {
        self.timer.pause();
        self.render();
    }

    /// Starts or pauses the countdown and renders.
    pub fn toggle(&mut self) {
        self.timer.toggle();
        self.render();
    }

    /// Rewinds the current session, pauses it and renders.
    pub fn reset(&mut self) {
        self.timer.reset(&self.settings);
        self.render();
    }

    /// Counts down one second and performs the resulting side effects.
    ///
    /// A completed session plays the sound and notifies before the new mode
    /// is rendered. An idle tick renders nothing.
    pub fn tick(&mut self) -> Tick {
        let tick = self.timer.tick(&self.settings);

        match tick {
            Tick::Idle => return tick,
            Tick::Running => {},
            Tick::Completed(completion) => {
                info!("{} finished, switching to {}", completion.finished, completion.next);
                self.effects.play_sound();
                self.effects.notify(completion);
            },
        }

        self.render();
        tick
    }

    /// Validates, persists and applies new settings.
    ///
    /// A focus session is rewound to the new focus length right away. A
    /// break keeps counting down with the duration it started with.
    pub fn update_settings(&mut self, settings: Settings) -> SettingsResult<()> {
        settings.validate()?;
        self.store.save(&settings)?;
        self.settings = settings;

        if self.timer.mode() == Mode::Focus {
            self.timer.reset(&self.settings);
        }
        self.render();
        Ok(())
    }

    /// Applies a user command.
    ///
    /// # Returns
    /// `false` once the session should end.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Toggle => self.toggle(),
            Command::Reset => self.reset(),
            Command::Quit => return false,
        }
        true
    }

    fn render(&mut self) {
        self.effects.render(&self.timer);
    }
}
