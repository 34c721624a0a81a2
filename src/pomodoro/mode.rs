/// The phase the timer is currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// A work session.
    #[default]
    Focus,
    /// The break after most focus sessions.
    ShortBreak,
    /// The break after every fourth focus session.
    LongBreak,
}

impl Mode {
    /// Human readable name shown next to the countdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::ShortBreak => "Short Break",
            Self::LongBreak => "Long Break",
        }
    }

    /// Message announced when a session in this mode runs out.
    #[must_use]
    pub const fn completion_message(self) -> &'static str {
        match self {
            Self::Focus => "Time for a break! Rest a little.",
            Self::ShortBreak => "Break is over! Time to focus!",
            Self::LongBreak => "Long break is over! Ready for more?",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
