// src/app.rs
use crate::filesystem::DirNavigator;
use crate::workflow::HashForm;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::widgets::ListState;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Verify,
    Generate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Run,
    Clear,
    Back,
}

/// Every user-triggered operation flows through this enum and is handled
/// strictly sequentially by `App::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeSelected(Mode),
    FileSelected(PathBuf),
    OperationTriggered(Op),
    Quit,
}

/// Focusable widgets on a hash screen. The expected-hash input only exists
/// in verify mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Expected,
    Path,
    Browser,
}

pub struct HashScreen {
    pub mode: Mode,
    pub form: HashForm,
    pub navigator: DirNavigator,
    pub focus: Focus,
    pub browser_state: ListState,
}

impl HashScreen {
    pub fn new(mode: Mode, start_dir: PathBuf) -> Self {
        let navigator = DirNavigator::new(start_dir);
        let mut browser_state = ListState::default();
        if !navigator.entries.is_empty() {
            browser_state.select(Some(0));
        }
        HashScreen {
            mode,
            form: HashForm::default(),
            navigator,
            focus: match mode {
                Mode::Verify => Focus::Expected,
                Mode::Generate => Focus::Path,
            },
            browser_state,
        }
    }

    fn next_focus(&mut self) {
        self.focus = match (self.mode, self.focus) {
            (Mode::Verify, Focus::Expected) => Focus::Path,
            (Mode::Verify, Focus::Path) => Focus::Browser,
            (Mode::Verify, Focus::Browser) => Focus::Expected,
            (Mode::Generate, Focus::Path) => Focus::Browser,
            (Mode::Generate, _) => Focus::Path,
        };
    }

    fn browser_move(&mut self, delta: i32) {
        let len = self.navigator.entries.len();
        if len == 0 {
            self.browser_state.select(None);
            return;
        }
        let current = self.browser_state.selected().unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(len as i32) as usize;
        self.browser_state.select(Some(next));
    }

    fn browser_select(&mut self) -> Option<PathBuf> {
        let index = self.browser_state.selected()?;
        let selected = self.navigator.select(index);
        if selected.is_none() {
            // The listing was rebuilt; restart the cursor at the top.
            self.browser_state
                .select((!self.navigator.entries.is_empty()).then_some(0));
        }
        selected
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Expected => Some(&mut self.form.expected),
            Focus::Path => Some(&mut self.form.path),
            Focus::Browser => None,
        }
    }

    fn run(&mut self) {
        match self.mode {
            Mode::Verify => self.form.run_verify(),
            Mode::Generate => self.form.run_generate(),
        }
    }
}

pub enum Screen {
    Menu,
    Hash(HashScreen),
}

/// Top-level state machine: a stack of screens, menu at the bottom. Events
/// are produced by key handling and consumed one at a time.
pub struct App {
    pub screens: Vec<Screen>,
    pub menu_selected: usize,
    pub should_quit: bool,
    start_dir: PathBuf,
}

pub const MENU_ITEMS: [&str; 3] = ["1. Verify Hash", "2. Generate Hash", "Q. Quit"];

impl App {
    pub fn new(start_dir: PathBuf) -> Self {
        App {
            screens: vec![Screen::Menu],
            menu_selected: 0,
            should_quit: false,
            start_dir,
        }
    }

    /// The stack always holds at least the menu; back at the bottom sets
    /// `should_quit` instead of popping.
    pub fn current_screen(&self) -> &Screen {
        self.screens.last().expect("screen stack is never empty")
    }

    /// Translates a key press into zero or one events and applies it.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.apply(AppEvent::Quit);
            return;
        }
        let on_hash_screen = matches!(self.screens.last(), Some(Screen::Hash(_)));
        let event = if on_hash_screen {
            self.hash_key(code, modifiers)
        } else {
            self.menu_key(code)
        };
        if let Some(event) = event {
            self.apply(event);
        }
    }

    fn menu_key(&mut self, code: KeyCode) -> Option<AppEvent> {
        match code {
            KeyCode::Char('1') => Some(AppEvent::ModeSelected(Mode::Verify)),
            KeyCode::Char('2') => Some(AppEvent::ModeSelected(Mode::Generate)),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_selected = (self.menu_selected + 1) % MENU_ITEMS.len();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_selected = (self.menu_selected + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
                None
            }
            KeyCode::Enter => match self.menu_selected {
                0 => Some(AppEvent::ModeSelected(Mode::Verify)),
                1 => Some(AppEvent::ModeSelected(Mode::Generate)),
                _ => Some(AppEvent::Quit),
            },
            _ => None,
        }
    }

    fn hash_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<AppEvent> {
        let Some(Screen::Hash(screen)) = self.screens.last_mut() else {
            return None;
        };
        match code {
            KeyCode::Esc => return Some(AppEvent::OperationTriggered(Op::Back)),
            KeyCode::Tab => {
                screen.next_focus();
                return None;
            }
            KeyCode::Char('l') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(AppEvent::OperationTriggered(Op::Clear));
            }
            _ => {}
        }

        if screen.focus == Focus::Browser {
            match code {
                KeyCode::Down | KeyCode::Char('j') => screen.browser_move(1),
                KeyCode::Up | KeyCode::Char('k') => screen.browser_move(-1),
                KeyCode::Enter => return screen.browser_select().map(AppEvent::FileSelected),
                _ => {}
            }
            return None;
        }

        match code {
            KeyCode::Enter => Some(AppEvent::OperationTriggered(Op::Run)),
            KeyCode::Backspace => {
                if let Some(input) = screen.focused_input() {
                    input.pop();
                }
                None
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(input) = screen.focused_input() {
                    input.push(c);
                }
                None
            }
            _ => None,
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::ModeSelected(mode) => {
                self.screens
                    .push(Screen::Hash(HashScreen::new(mode, self.start_dir.clone())));
            }
            AppEvent::FileSelected(path) => {
                if let Some(Screen::Hash(screen)) = self.screens.last_mut() {
                    screen.form.path = path.to_string_lossy().to_string();
                    // Generate mode hashes as soon as a file is picked.
                    if screen.mode == Mode::Generate {
                        screen.form.run_generate();
                    }
                }
            }
            AppEvent::OperationTriggered(Op::Run) => {
                if let Some(Screen::Hash(screen)) = self.screens.last_mut() {
                    screen.run();
                }
            }
            AppEvent::OperationTriggered(Op::Clear) => {
                if let Some(Screen::Hash(screen)) = self.screens.last_mut() {
                    screen.form.clear();
                }
            }
            AppEvent::OperationTriggered(Op::Back) => {
                if self.screens.len() > 1 {
                    self.screens.pop();
                } else {
                    self.should_quit = true;
                }
            }
            AppEvent::Quit => self.should_quit = true,
        }
    }
}
