use std::io::stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::context::AppContext;
use super::navigator::{NavigatorError, PageNavigator, PageObserver};
use super::view::{self, ButtonAreas, Focus};
use crate::ui::{self, prelude::*};

const POLL_TIMEOUT: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    CycleFocus,
    Activate,
    Quit,
}

/// Map a key press to a wizard action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::PageDown => {
            Some(Action::Next)
        }
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('b')
        | KeyCode::PageUp
        | KeyCode::Backspace => Some(Action::Previous),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::CycleFocus),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        _ => None,
    }
}

/// Logs every page change the navigator hands to the view.
#[derive(Debug, Default)]
pub struct PageLog;

impl PageObserver for PageLog {
    fn show_page(&mut self, index: usize) {
        emit(
            Level::Debug,
            "wizard.page.show",
            &format!("Showing page {}", index + 1),
            Some(serde_json::json!({ "index": index })),
        );
    }
}

/// Navigation and button focus, independent of any terminal.
pub struct WizardSession {
    navigator: PageNavigator<PageLog>,
    focus: Focus,
}

impl WizardSession {
    pub fn new(page_count: usize) -> Result<Self, NavigatorError> {
        Ok(Self {
            navigator: PageNavigator::with_observer(page_count, PageLog)?,
            focus: Focus::default(),
        })
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn navigator(&self) -> &PageNavigator<PageLog> {
        &self.navigator
    }

    /// Apply an action. Returns false once the wizard should close.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Next => {
                self.navigator.next();
            }
            Action::Previous => {
                self.navigator.previous();
            }
            Action::CycleFocus => self.focus = self.focus.toggle(),
            Action::Activate => self.press(self.focus),
            Action::Quit => return false,
        }
        true
    }

    /// A button was activated, by keyboard or mouse.
    pub fn press(&mut self, button: Focus) {
        self.focus = button;
        match button {
            Focus::Back => self.navigator.previous(),
            Focus::Next => self.navigator.next(),
        };
    }
}

/// Run the wizard until the user quits.
pub fn run_wizard(ctx: AppContext) -> Result<()> {
    let session = WizardSession::new(ctx.catalog.len())?;
    let mut app = WizardApp::new(ctx, session)?;
    let result = app.run();
    app.cleanup()?;
    result
}

struct WizardApp {
    terminal: Terminal<CrosstermBackend<std::io::Stdout>>,
    ctx: AppContext,
    session: WizardSession,
    buttons: Option<ButtonAreas>,
    mouse: bool,
    cleaned_up: bool,
}

impl WizardApp {
    fn new(ctx: AppContext, session: WizardSession) -> Result<Self> {
        let mouse = ctx.config.mouse;

        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;
        ui::hold_output();

        Ok(Self {
            terminal,
            ctx,
            session,
            buttons: None,
            mouse,
            cleaned_up: false,
        })
    }

    fn run(&mut self) -> Result<()> {
        emit(Level::Debug, "wizard.start", "Starting wizard", None);

        loop {
            self.draw()?;

            if !event::poll(POLL_TIMEOUT)? {
                continue;
            }

            let keep_running = match event::read()? {
                Event::Key(key) => match action_for_key(key) {
                    Some(action) => self.session.apply(action),
                    None => true,
                },
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
                        && let Some(button) = self
                            .buttons
                            .and_then(|areas| areas.hit(mouse.column, mouse.row))
                    {
                        self.session.press(button);
                    }
                    true
                }
                // Redrawn on the next iteration
                Event::Resize(_, _) => true,
                _ => true,
            };

            if !keep_running {
                emit(Level::Debug, "wizard.close", "Closing wizard", None);
                return Ok(());
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let ctx = &self.ctx;
        let session = &self.session;
        let mut buttons = None;

        self.terminal.draw(|frame| {
            buttons = view::draw(frame, ctx, session.navigator(), session.focus());
        })?;

        self.buttons = buttons;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.cleaned_up {
            return Ok(());
        }
        self.cleaned_up = true;

        // Every step runs even when an earlier one fails
        let raw = disable_raw_mode().context("disabling raw mode");
        let screen = execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("leaving the alternate screen");
        let mouse = if self.mouse {
            execute!(self.terminal.backend_mut(), DisableMouseCapture)
                .context("disabling mouse capture")
        } else {
            Ok(())
        };
        let cursor = self.terminal.show_cursor().context("showing the cursor");

        finish_restore([raw, screen, mouse, cursor])
    }
}

/// Print the output held while the wizard was on screen and return the
/// first failed restore step, if any.
fn finish_restore<const N: usize>(steps: [Result<()>; N]) -> Result<()> {
    ui::release_output();
    steps.into_iter().collect()
}

impl Drop for WizardApp {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
