/// Timer modes and their labels.
pub mod mode;
/// Session driver and the side effect collaborator trait.
///
/// The session owns a timer, its settings, a settings store and an
/// [`session::Effects`] implementation. Every transition goes through the
/// pure timer first; effects are only triggered afterwards.
pub mod session;
/// Timer settings and their persistence.
///
/// Defines the durations of each mode, their validation, and the
/// [`settings::SettingsStore`] trait with file and in-memory backends.
pub mod settings;
/// Terminal rendering and the real-time tick loop.
pub mod terminal;
/// The countdown state machine.
///
/// Holds all mutable timer state in a single value and exposes the
/// transitions (start, pause, reset, tick, session completion) as plain
/// methods with no side effects.
pub mod timer;
