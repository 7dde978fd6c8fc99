use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Appointment, DATE_FORMAT, TIME_FORMAT, config};
use crate::ops::editor::{Editor, FieldChange, SequentialIds, Submission};
use crate::ops::store::{Store, StoreNotice};

use super::input;
use super::render;
use super::theme::Theme;

/// How long a notification stays up before auto-dismissing
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Which pane key input is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    List,
}

/// One form field, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PatientName,
    Phone,
    Email,
    Doctor,
    Department,
    Date,
    Time,
    VisitType,
    Notes,
    Consent,
}

/// Fields top to bottom as rendered and as Up/Down walks them
pub const FIELD_ORDER: [FormField; 10] = [
    FormField::PatientName,
    FormField::Phone,
    FormField::Email,
    FormField::Doctor,
    FormField::Department,
    FormField::Date,
    FormField::Time,
    FormField::VisitType,
    FormField::Notes,
    FormField::Consent,
];

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::PatientName => "Patient Name",
            FormField::Phone => "Phone Number",
            FormField::Email => "Email",
            FormField::Doctor => "Doctor",
            FormField::Department => "Department",
            FormField::Date => "Appointment Date",
            FormField::Time => "Appointment Time",
            FormField::VisitType => "Visit Type",
            FormField::Notes => "Symptoms / Notes",
            FormField::Consent => "Consent",
        }
    }

    /// Entry format hint shown next to the label
    pub fn hint(self) -> Option<&'static str> {
        match self {
            FormField::Date => Some("YYYY-MM-DD"),
            FormField::Time => Some("HH:MM"),
            _ => None,
        }
    }
}

/// Confirm-before-cancel dialog state for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmCancel {
    pub id: u64,
}

/// Transient status-row notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub deadline: Instant,
}

/// Main application state
pub struct App {
    pub store: Store,
    pub editor: Editor,
    pub ids: SequentialIds,
    pub focus: Focus,
    pub should_quit: bool,
    pub theme: Theme,
    /// Index into [`FIELD_ORDER`]
    pub field_cursor: usize,
    /// Char position of the text cursor within the focused field
    pub edit_cursor: usize,
    /// Raw text typed into the date field (parsed on every change)
    pub date_input: String,
    /// Raw text typed into the time field (parsed on every change)
    pub time_input: String,
    /// Cursor index into the card list
    pub list_cursor: usize,
    /// First visible card row
    pub list_scroll: usize,
    /// Pending confirm-before-cancel dialog
    pub confirm: Option<ConfirmCancel>,
    pub notification: Option<Notification>,
    pub show_help: bool,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        App {
            store: Store::new(),
            editor: Editor::new(),
            ids: SequentialIds::new(),
            focus: Focus::Form,
            should_quit: false,
            theme,
            field_cursor: 0,
            edit_cursor: 0,
            date_input: String::new(),
            time_input: String::new(),
            list_cursor: 0,
            list_scroll: 0,
            confirm: None,
            notification: None,
            show_help: false,
        }
    }

    /// The calendar date validation runs against
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    /// The field the form cursor is on
    pub fn field(&self) -> FormField {
        FIELD_ORDER[self.field_cursor.min(FIELD_ORDER.len() - 1)]
    }

    /// Current text of the focused field, for text fields
    pub fn current_text(&self) -> Option<&str> {
        match self.field() {
            FormField::PatientName => Some(self.editor.draft.patient_name.as_str()),
            FormField::Phone => Some(self.editor.draft.phone.as_str()),
            FormField::Email => Some(self.editor.draft.email.as_str()),
            FormField::Department => Some(self.editor.draft.department.as_str()),
            FormField::Date => Some(self.date_input.as_str()),
            FormField::Time => Some(self.time_input.as_str()),
            FormField::Notes => Some(self.editor.draft.notes.as_str()),
            _ => None,
        }
    }

    /// Store an edited text value back into the focused field, routing the
    /// date/time raw text through a parse into the draft's typed values
    pub fn apply_text(&mut self, text: String) {
        let today = self.today();
        let change = match self.field() {
            FormField::PatientName => FieldChange::PatientName(text),
            FormField::Phone => FieldChange::Phone(text),
            FormField::Email => FieldChange::Email(text),
            FormField::Department => FieldChange::Department(text),
            FormField::Date => {
                let parsed = NaiveDate::parse_from_str(&text, DATE_FORMAT).ok();
                self.date_input = text;
                FieldChange::Date(parsed)
            }
            FormField::Time => {
                let parsed =
                    chrono::NaiveTime::parse_from_str(&text, TIME_FORMAT).ok();
                self.time_input = text;
                FieldChange::Time(parsed)
            }
            FormField::Notes => FieldChange::Notes(text),
            // Choice fields never route through here
            _ => return,
        };
        self.editor.set_field(change, today);
    }

    /// Place the text cursor at the end of the focused field
    pub fn move_cursor_to_end(&mut self) {
        self.edit_cursor = self.current_text().map_or(0, |s| s.chars().count());
    }

    /// Refresh the raw date/time entry text from the draft (after a reset
    /// or when entering edit mode)
    pub fn sync_temporal_inputs(&mut self) {
        self.date_input = self
            .editor
            .draft
            .date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default();
        self.time_input = self
            .editor
            .draft
            .time
            .map(|t| t.format(TIME_FORMAT).to_string())
            .unwrap_or_default();
    }

    pub fn notify(&mut self, notice: StoreNotice) {
        self.notification = Some(Notification {
            message: notice.message().to_string(),
            deadline: Instant::now() + NOTIFICATION_TTL,
        });
    }

    /// Apply an editor submission to the store and raise its notification.
    /// An update whose id is no longer in the store is a silent no-op.
    pub fn apply_submission(&mut self, submission: Submission) {
        let notice = match submission {
            Submission::Create(record) => Some(self.store.add(record)),
            Submission::Update(record) => self.store.update(record.id, record),
        };
        if let Some(notice) = notice {
            self.notify(notice);
        }
        self.sync_temporal_inputs();
        self.edit_cursor = 0;
    }

    /// Hand a record to the editor and move focus to the form
    pub fn start_edit(&mut self, record: &Appointment) {
        self.editor.begin_edit(record);
        self.sync_temporal_inputs();
        self.focus = Focus::Form;
        self.field_cursor = 0;
        self.move_cursor_to_end();
    }

    /// Reset the form, cancelling an in-progress edit if there is one
    pub fn reset_form(&mut self) {
        self.editor.reset();
        self.sync_temporal_inputs();
        self.edit_cursor = 0;
    }

    /// Keep the list cursor on a record after removals
    pub fn clamp_list_cursor(&mut self) {
        let count = self.store.len();
        if count == 0 {
            self.list_cursor = 0;
            self.list_scroll = 0;
        } else {
            self.list_cursor = self.list_cursor.min(count - 1);
        }
    }

    /// Drop the notification once its deadline passes
    pub fn expire_notification(&mut self, now: Instant) {
        if let Some(n) = &self.notification
            && now >= n.deadline
        {
            self.notification = None;
        }
    }
}

/// Run the TUI application
pub fn run(theme_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let theme = match theme_path {
        Some(path) => Theme::from_config(&config::load_theme_config(path)?),
        None => Theme::default(),
    };

    let mut app = App::new(theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.expire_notification(Instant::now());

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
