use std::{
    io::{self, BufRead, Write},
    sync::mpsc::{Receiver, RecvTimeoutError, Sender},
    time::{Duration, Instant},
};

use log::{debug, warn};

use crate::pomodoro::{
    session::{Command, Effects, Session},
    settings::SettingsStore,
    timer::{Completion, Timer, format_time},
};

/// Width of the progress bar, in characters.
pub const BAR_WIDTH: usize = 20;

/// Renders a session as a single, continuously rewritten terminal line.
pub struct TerminalEffects<W: Write> {
    out: W,
}

impl<W: Write> TerminalEffects<W> {
    /// Creates effects that write to `out`, usually stdout.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush()) {
            warn!("failed to write to terminal: {e}");
        }
    }
}

/// Formats the status line for `timer`, e.g.
/// `Focus 24:59 [###################.]  99%`.
#[must_use]
pub fn status_line(timer: &Timer) -> String {
    let progress = timer.progress();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((progress / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);

    format!("{} {} [{}{}] {:>3.0}%",
            timer.mode(),
            format_time(timer.time_left()),
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled),
            progress)
}

impl<W: Write> Effects for TerminalEffects<W> {
    fn render(&mut self, timer: &Timer) {
        let state = if timer.is_running() { "" } else { " (paused)" };
        let line = format!("\r{}{state} | focus sessions: {} | cycles: {}   ",
                           status_line(timer),
                           timer.focus_sessions_completed(),
                           timer.total_cycles());
        self.write(&line);
    }

    fn play_sound(&mut self) {
        self.write("\x07");
    }

    fn notify(&mut self, completion: Completion) {
        let message = format!("\n{}\n", completion.finished.completion_message());
        self.write(&message);
    }
}

/// Reads commands from `input` line by line and sends them to `sender`.
///
/// Unrecognized lines are ignored. End of input sends [`Command::Quit`].
pub fn forward_commands<R: BufRead>(input: R, sender: &Sender<Command>) {
    for line in input.lines() {
        let Ok(line) = line else {
            break;
        };
        match Command::parse(&line) {
            Some(command) => {
                if sender.send(command).is_err() {
                    return;
                }
            },
            None => debug!("ignoring unknown command {line:?}"),
        }
    }
    let _ = sender.send(Command::Quit);
}

/// Drives `session` in real time until a quit command arrives.
///
/// The session ticks once every `interval`. Commands are applied as soon as
/// they are received without shifting the tick schedule. The loop also ends
/// when every command sender has been dropped.
pub fn run<E: Effects, S: SettingsStore>(session: &mut Session<E, S>,
                                         commands: &Receiver<Command>,
                                         interval: Duration) {
    let mut deadline = Instant::now() + interval;

    loop {
        let wait = deadline.saturating_duration_since(Instant::now());

        match commands.recv_timeout(wait) {
            Ok(command) => {
                if !session.handle(command) {
                    break;
                }
            },
            Err(RecvTimeoutError::Timeout) => {
                session.tick();
                deadline += interval;
            },
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Prints the keyboard shortcuts.
pub fn print_help(mut out: impl Write) -> io::Result<()> {
    writeln!(out, "Shortcuts: Enter = start/pause | s = start | p = pause | r = reset | q = quit")
}
