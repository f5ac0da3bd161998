/// Terminal emulator detection and launching
use anyhow::{Context, Result};
use std::process::Command;

/// Common terminal emulators in order of preference
const TERMINALS: &[&str] = &[
    "kitty",
    "alacritty",
    "wezterm",
    "foot",
    "gnome-terminal",
    "konsole",
    "xterm",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalKind {
    Kitty,
    Alacritty,
    Wezterm,
    Foot,
    GnomeTerminal,
    Konsole,
    Other(String),
}

impl TerminalKind {
    pub fn command(&self) -> &str {
        match self {
            TerminalKind::Kitty => "kitty",
            TerminalKind::Alacritty => "alacritty",
            TerminalKind::Wezterm => "wezterm",
            TerminalKind::Foot => "foot",
            TerminalKind::GnomeTerminal => "gnome-terminal",
            TerminalKind::Konsole => "konsole",
            TerminalKind::Other(cmd) => cmd,
        }
    }

    /// Arguments setting the window class and title, placed before the
    /// command to execute.
    pub fn window_args(&self, class: &str, title: &str) -> Vec<String> {
        let pair = |flag: &str, value: &str| vec![flag.to_string(), value.to_string()];
        match self {
            TerminalKind::Kitty | TerminalKind::Alacritty => {
                [pair("--class", class), pair("--title", title)].concat()
            }
            TerminalKind::Wezterm => vec!["start".to_string(), "--class".to_string(), class.to_string()],
            TerminalKind::Foot => [pair("--app-id", class), pair("--title", title)].concat(),
            TerminalKind::GnomeTerminal => [pair("--class", class), pair("--title", title)].concat(),
            TerminalKind::Konsole => Vec::new(),
            TerminalKind::Other(_) => [pair("-class", class), pair("-T", title)].concat(),
        }
    }

    /// Separator between the terminal's own flags and the command to run
    pub fn execute_flag(&self) -> &'static str {
        match self {
            TerminalKind::Kitty
            | TerminalKind::Alacritty
            | TerminalKind::Wezterm
            | TerminalKind::Foot
            | TerminalKind::GnomeTerminal => "--",
            TerminalKind::Konsole | TerminalKind::Other(_) => "-e",
        }
    }
}

impl From<&str> for TerminalKind {
    fn from(s: &str) -> Self {
        match s {
            "kitty" => TerminalKind::Kitty,
            "alacritty" => TerminalKind::Alacritty,
            "wezterm" => TerminalKind::Wezterm,
            "foot" => TerminalKind::Foot,
            "gnome-terminal" => TerminalKind::GnomeTerminal,
            "konsole" => TerminalKind::Konsole,
            other => TerminalKind::Other(other.to_string()),
        }
    }
}

/// Detect the available terminal emulator
///
/// A configured terminal wins, then `$TERMINAL`, then the first installed
/// entry of the preference list. Falls back to xterm.
pub fn detect_terminal(preferred: Option<&str>) -> String {
    let configured = preferred.map(str::to_string);
    let from_env = std::env::var("TERMINAL").ok();

    for term in [configured, from_env].into_iter().flatten() {
        if !term.is_empty() && is_available(&term) {
            return term;
        }
    }

    TERMINALS
        .iter()
        .find(|t| is_available(t))
        .map(|t| t.to_string())
        .unwrap_or_else(|| "xterm".to_string())
}

fn is_available(terminal: &str) -> bool {
    which::which(terminal).is_ok()
}

/// Build the command that opens a terminal window running `program args`.
pub fn gui_command(
    terminal: &TerminalKind,
    class: &str,
    title: &str,
    program: &str,
    args: &[String],
) -> Command {
    let mut cmd = Command::new(terminal.command());
    cmd.args(terminal.window_args(class, title));
    cmd.arg(terminal.execute_flag());
    cmd.arg(program);
    cmd.args(args);
    cmd
}

/// Launch the current binary with `args` in a new terminal window.
pub fn launch_gui_terminal(
    preferred: Option<&str>,
    class: &str,
    title: &str,
    args: &[String],
) -> Result<()> {
    let terminal = TerminalKind::from(detect_terminal(preferred).as_str());
    let current_exe = std::env::current_exe().context("Failed to get current executable path")?;

    gui_command(
        &terminal,
        class,
        title,
        &current_exe.to_string_lossy(),
        args,
    )
    .spawn()
    .with_context(|| format!("Failed to launch {} for GUI mode", terminal.command()))?;

    Ok(())
}
