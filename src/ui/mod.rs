use colored::*;
use lazy_static::lazy_static;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Debug => "debug",
        }
    }

    fn uses_stderr(self) -> bool {
        matches!(self, Level::Error | Level::Warn)
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// A rendered event line waiting for the terminal to be released.
struct HeldLine {
    stderr: bool,
    line: String,
}

lazy_static! {
    static ref RENDERER: RwLock<Renderer> = RwLock::new(Renderer::default());
    static ref HELD: Mutex<Vec<HeldLine>> = Mutex::new(Vec::new());
}

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

// Set while the wizard owns the alternate screen
static HOLD_OUTPUT: AtomicBool = AtomicBool::new(false);

pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

pub fn init(format: OutputFormat, color: bool) {
    if let Ok(mut r) = RENDERER.write() {
        r.format = format;
        r.color = color;
    }
}

pub mod nerd_font;
pub use nerd_font::NerdFont;

pub mod palette;

pub const SEPARATOR_HEAVY: &str = "━";
pub const SEPARATOR_LIGHT: &str = "─";

#[derive(Serialize)]
struct Event<'a> {
    level: &'a str,
    code: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

fn colorize(level: Level, s: &str, enable: bool) -> String {
    if !enable {
        return s.to_string();
    }
    match level {
        Level::Info => s.normal().to_string(),
        Level::Success => s.green().bold().to_string(),
        Level::Warn => s.yellow().bold().to_string(),
        Level::Error => s.red().bold().to_string(),
        Level::Debug => s.cyan().to_string(),
    }
}

fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI sequences end with a byte in @..=~
            for b in chars.by_ref() {
                if ('@'..='~').contains(&b) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}

fn format_event(
    renderer: &Renderer,
    level: Level,
    code: &str,
    message: &str,
    data: Option<serde_json::Value>,
) -> String {
    match renderer.format {
        OutputFormat::Text => colorize(level, message, renderer.color),
        OutputFormat::Json => {
            let clean_msg = strip_ansi(message);
            let ev = Event {
                level: level.as_str(),
                code,
                message: &clean_msg,
                data,
            };
            serde_json::to_string(&ev).unwrap_or_else(|_| clean_msg.clone())
        }
    }
}

fn write_line(stderr: bool, line: &str) {
    let mut out: Box<dyn Write> = if stderr {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let _ = writeln!(out, "{}", line);
}

/// Emit an event. Debug events are dropped unless debug mode is on.
pub fn emit(level: Level, code: &str, message: &str, data: Option<serde_json::Value>) {
    if level == Level::Debug && !is_debug_enabled() {
        return;
    }

    let r = match RENDERER.read() {
        Ok(r) => r.clone(),
        Err(_) => Renderer::default(),
    };
    let line = format_event(&r, level, code, message, data);

    if HOLD_OUTPUT.load(Ordering::SeqCst) {
        if let Ok(mut held) = HELD.lock() {
            held.push(HeldLine {
                stderr: level.uses_stderr(),
                line,
            });
        }
        return;
    }

    write_line(level.uses_stderr(), &line);
}

/// Queue events instead of printing them. Used while a full-screen TUI is
/// drawn so that log lines don't corrupt the frame.
pub fn hold_output() {
    HOLD_OUTPUT.store(true, Ordering::SeqCst);
}

/// Stop queueing and print everything held since `hold_output`.
pub fn release_output() {
    HOLD_OUTPUT.store(false, Ordering::SeqCst);
    let held = match HELD.lock() {
        Ok(mut held) => std::mem::take(&mut *held),
        Err(_) => return,
    };
    for HeldLine { stderr, line } in held {
        write_line(stderr, &line);
    }
}

#[cfg(test)]
pub fn is_output_held() -> bool {
    HOLD_OUTPUT.load(Ordering::SeqCst)
}

pub fn get_output_format() -> OutputFormat {
    match RENDERER.read() {
        Ok(r) => r.format,
        Err(_) => OutputFormat::Text,
    }
}

pub fn separator(light: bool) {
    if matches!(get_output_format(), OutputFormat::Json) {
        return;
    }
    let glyph = if light {
        SEPARATOR_LIGHT
    } else {
        SEPARATOR_HEAVY
    };
    write_line(false, &glyph.repeat(80));
}

pub mod prelude {
    pub use super::{Level, NerdFont, OutputFormat, emit, get_output_format, separator};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi_removes_color_codes() {
        let colored = "\x1b[1;33mwarning\x1b[0m: missing";
        assert_eq!(strip_ansi(colored), "warning: missing");
    }

    #[test]
    fn test_strip_ansi_keeps_plain_text() {
        assert_eq!(strip_ansi("Page 1 of 3 ●"), "Page 1 of 3 ●");
    }

    #[test]
    fn test_json_event_shape() {
        let renderer = Renderer {
            format: OutputFormat::Json,
            color: false,
        };
        let line = format_event(
            &renderer,
            Level::Warn,
            "wizard.asset.missing",
            "\x1b[33mSundial.svg\x1b[0m not found",
            Some(serde_json::json!({ "asset": "Sundial.svg" })),
        );
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "warn");
        assert_eq!(value["code"], "wizard.asset.missing");
        assert_eq!(value["message"], "Sundial.svg not found");
        assert_eq!(value["data"]["asset"], "Sundial.svg");
    }

    #[test]
    fn test_text_event_without_color_is_plain() {
        let renderer = Renderer {
            format: OutputFormat::Text,
            color: false,
        };
        let line = format_event(&renderer, Level::Success, "config.init", "done", None);
        assert_eq!(line, "done");
    }
}
