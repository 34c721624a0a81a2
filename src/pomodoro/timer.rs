use crate::pomodoro::{mode::Mode, settings::Settings};

/// Every this many completed focus sessions, the break is a long one.
pub const LONG_BREAK_INTERVAL: u32 = 4;

/// The outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// The mode that just ran out.
    pub finished: Mode,
    /// The mode the timer switched to.
    pub next:     Mode,
}

/// What a single tick did to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timer is paused; nothing changed.
    Idle,
    /// One second was counted down.
    Running,
    /// The countdown reached zero and the timer moved to the next mode.
    Completed(Completion),
}

/// Complete state of the countdown.
///
/// Transitions take the current [`Settings`] explicitly, so the same timer
/// can be driven by any settings source. Nothing here performs I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    mode:                     Mode,
    time_left:                u32,
    total_time:               u32,
    running:                  bool,
    focus_sessions_completed: u32,
    total_cycles:             u32,
}

impl Timer {
    /// Creates a paused timer at the start of a focus session.
    #[must_use]
    pub const fn new(settings: &Settings) -> Self {
        let total_time = settings.duration_for(Mode::Focus);
        Self { mode: Mode::Focus,
               time_left: total_time,
               total_time,
               running: false,
               focus_sessions_completed: 0,
               total_cycles: 0 }
    }

    /// The mode currently counting down.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Seconds remaining in the current session.
    #[must_use]
    pub const fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Length of the current session in seconds.
    #[must_use]
    pub const fn total_time(&self) -> u32 {
        self.total_time
    }

    /// Whether ticks currently count down.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Number of focus sessions that ran out so far.
    #[must_use]
    pub const fn focus_sessions_completed(&self) -> u32 {
        self.focus_sessions_completed
    }

    /// Number of long breaks reached so far.
    #[must_use]
    pub const fn total_cycles(&self) -> u32 {
        self.total_cycles
    }

    /// Starts counting down. Does nothing if already running.
    pub const fn start(&mut self) {
        self.running = true;
    }

    /// Stops counting down, keeping the remaining time.
    pub const fn pause(&mut self) {
        self.running = false;
    }

    /// Starts a paused timer or pauses a running one.
    pub const fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Pauses and rewinds the current session to its full length.
    pub const fn reset(&mut self, settings: &Settings) {
        self.pause();
        self.rewind(settings);
    }

    /// Moves to `mode` with a full-length countdown.
    ///
    /// The running flag is left untouched.
    pub const fn switch_mode(&mut self, mode: Mode, settings: &Settings) {
        self.mode = mode;
        self.rewind(settings);
    }

    const fn rewind(&mut self, settings: &Settings) {
        self.time_left = settings.duration_for(self.mode);
        self.total_time = self.time_left;
    }

    /// Counts down one second.
    ///
    /// A paused timer is left alone. When the countdown reaches zero the
    /// session completes: the timer pauses and switches to the next mode.
    ///
    /// # Example
    /// ```
    /// use reckon::pomodoro::{
    ///     mode::Mode,
    ///     settings::Settings,
    ///     timer::{Tick, Timer},
    /// };
    ///
    /// let settings = Settings::default();
    /// let mut timer = Timer::new(&settings);
    /// assert_eq!(timer.tick(&settings), Tick::Idle);
    ///
    /// timer.start();
    /// assert_eq!(timer.tick(&settings), Tick::Running);
    /// assert_eq!(timer.time_left(), 25 * 60 - 1);
    /// ```
    pub fn tick(&mut self, settings: &Settings) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return Tick::Running;
        }

        Tick::Completed(self.complete_session(settings))
    }

    /// Ends the current session and switches to the next mode.
    ///
    /// A focus session leads to a short break, except every
    /// [`LONG_BREAK_INTERVAL`]th one which leads to a long break and counts
    /// as a completed cycle. Either break leads back to focus.
    pub fn complete_session(&mut self, settings: &Settings) -> Completion {
        self.pause();

        let finished = self.mode;
        let next = match finished {
            Mode::Focus => {
                self.focus_sessions_completed += 1;
                if self.focus_sessions_completed % LONG_BREAK_INTERVAL == 0 {
                    self.total_cycles += 1;
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            },
            Mode::ShortBreak | Mode::LongBreak => Mode::Focus,
        };

        self.switch_mode(next, settings);
        Completion { finished, next }
    }

    /// Remaining time as a percentage of the session length.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_time == 0 {
            return 100.0;
        }
        f64::from(self.time_left) / f64::from(self.total_time) * 100.0
    }
}

/// Formats a number of seconds as zero padded `MM:SS`.
///
/// # Example
/// ```
/// use reckon::pomodoro::timer::format_time;
///
/// assert_eq!(format_time(25 * 60), "25:00");
/// assert_eq!(format_time(65), "01:05");
/// ```
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
