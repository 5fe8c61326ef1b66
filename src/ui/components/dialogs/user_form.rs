use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{self, shortcuts};
use crate::api::RegisterRequest;
use crate::ui::core::actions::Action;
use crate::ui::layout::LayoutManager;
use crate::validation::{validate_form, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Username,
    Email,
    Password,
    Confirmation,
}

/// State of the user-creation form. Validation runs when the user submits;
/// a draft that fails any rule never produces a network request.
#[derive(Debug, Default)]
pub struct UserFormState {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
    pub focused: FormField,
    pub errors: FieldErrors,
    pub error_banner: Option<String>,
    pub submitting: bool,
    pub show_password: bool,
    pub show_confirmation: bool,
}

impl UserFormState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The confirmation field only becomes interactive once a password has
    /// been typed.
    pub fn confirmation_enabled(&self) -> bool {
        !self.password.is_empty()
    }

    pub fn next_field(&mut self) {
        self.focused = match self.focused {
            FormField::Username => FormField::Email,
            FormField::Email => FormField::Password,
            FormField::Password => {
                if self.confirmation_enabled() {
                    FormField::Confirmation
                } else {
                    FormField::Username
                }
            }
            FormField::Confirmation => FormField::Username,
        };
    }

    pub fn previous_field(&mut self) {
        self.focused = match self.focused {
            FormField::Username => {
                if self.confirmation_enabled() {
                    FormField::Confirmation
                } else {
                    FormField::Password
                }
            }
            FormField::Email => FormField::Username,
            FormField::Password => FormField::Email,
            FormField::Confirmation => FormField::Password,
        };
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            FormField::Username => &mut self.username,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::Confirmation => &mut self.confirmation,
        }
    }

    fn clear_focused_error(&mut self) {
        match self.focused {
            FormField::Username => self.errors.username = None,
            FormField::Email => self.errors.email = None,
            FormField::Password => self.errors.password = None,
            FormField::Confirmation => self.errors.confirmation = None,
        }
    }

    /// Validate the draft and build the request. Returns `None` and records
    /// field errors when any rule fails.
    pub fn submit(&mut self) -> Option<RegisterRequest> {
        let errors = validate_form(&self.username, &self.email, &self.password, &self.confirmation);
        if errors.is_empty() {
            self.errors = FieldErrors::default();
            self.error_banner = None;
            self.submitting = true;
            // The confirmation value stays local; only the credentials travel
            Some(RegisterRequest {
                username: self.username.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            })
        } else {
            self.errors = errors;
            None
        }
    }

    /// Server rejected the registration: keep the draft, show the message.
    pub fn registration_failed(&mut self, message: String) {
        self.submitting = false;
        self.error_banner = Some(message);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Esc {
            return Action::HideDialog;
        }

        // No edits while a request is in flight
        if self.submitting {
            return Action::None;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous_field();
                Action::None
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.focused {
                    FormField::Password => self.show_password = !self.show_password,
                    FormField::Confirmation => self.show_confirmation = !self.show_confirmation,
                    _ => {}
                }
                Action::None
            }
            KeyCode::Enter => match self.submit() {
                Some(request) => Action::RegisterUser(request),
                None => Action::None,
            },
            KeyCode::Char(c) => {
                self.focused_value_mut().push(c);
                self.clear_focused_error();
                self.error_banner = None;
                Action::None
            }
            KeyCode::Backspace => {
                self.focused_value_mut().pop();
                if self.focused == FormField::Password && !self.confirmation_enabled() {
                    // Confirmation goes dormant again with an empty password
                    self.confirmation.clear();
                    self.errors.confirmation = None;
                }
                self.clear_focused_error();
                Action::None
            }
            _ => Action::None,
        }
    }
}

fn masked(value: &str, visible: bool) -> String {
    if visible {
        value.to_string()
    } else {
        "*".repeat(value.chars().count())
    }
}

fn render_field(
    f: &mut Frame,
    field_area: Rect,
    error_area: Rect,
    title: &str,
    value: &str,
    focused: bool,
    error: Option<&String>,
) {
    f.render_widget(common::create_input_paragraph(value, title, focused), field_area);

    if let Some(message) = error {
        let error_line = Paragraph::new(Span::styled(message.clone(), Style::default().fg(Color::Red)));
        f.render_widget(error_line, error_area);
    }
}

pub fn render_user_form_dialog(f: &mut Frame, area: Rect, form: &UserFormState) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 22, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(" Create User ", Color::Green);
    f.render_widget(block, dialog_area);

    let content_area = dialog_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // username
            Constraint::Length(1),
            Constraint::Length(3), // email
            Constraint::Length(1),
            Constraint::Length(3), // password
            Constraint::Length(1),
            Constraint::Length(3), // confirmation
            Constraint::Length(1),
            Constraint::Length(1), // banner
            Constraint::Length(1), // instructions
        ])
        .split(content_area);

    render_field(
        f,
        chunks[0],
        chunks[1],
        "Username",
        &form.username,
        form.focused == FormField::Username,
        form.errors.username.as_ref(),
    );
    render_field(
        f,
        chunks[2],
        chunks[3],
        "Email",
        &form.email,
        form.focused == FormField::Email,
        form.errors.email.as_ref(),
    );
    render_field(
        f,
        chunks[4],
        chunks[5],
        "Password",
        &masked(&form.password, form.show_password),
        form.focused == FormField::Password,
        form.errors.password.as_ref(),
    );

    let confirmation_title = if form.confirmation_enabled() {
        "Confirm password"
    } else {
        "Confirm password (type a password first)"
    };
    render_field(
        f,
        chunks[6],
        chunks[7],
        confirmation_title,
        &masked(&form.confirmation, form.show_confirmation),
        form.focused == FormField::Confirmation,
        form.errors.confirmation.as_ref(),
    );

    if form.submitting {
        let banner = Paragraph::new(Span::styled("Submitting...", Style::default().fg(Color::Yellow)));
        f.render_widget(banner, chunks[8]);
    } else if let Some(message) = &form.error_banner {
        let banner = Paragraph::new(Span::styled(message.clone(), Style::default().fg(Color::Red)));
        f.render_widget(banner, chunks[8]);
    }

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::ENTER_SUBMIT,
        shortcuts::SEPARATOR,
        shortcuts::TAB_NEXT,
        shortcuts::SEPARATOR,
        ("Ctrl+U", Color::Cyan, " Show/hide"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[9]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn filled_form() -> UserFormState {
        UserFormState {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            confirmation: "hunter2hunter2".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn tab_skips_confirmation_while_password_empty() {
        let mut form = UserFormState::default();
        assert_eq!(form.focused, FormField::Username);
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focused, FormField::Password);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focused, FormField::Username);
    }

    #[test]
    fn tab_reaches_confirmation_once_password_typed() {
        let mut form = UserFormState {
            password: "secret".to_string(),
            focused: FormField::Password,
            ..Default::default()
        };
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focused, FormField::Confirmation);
    }

    #[test]
    fn mismatched_passwords_block_submission() {
        let mut form = filled_form();
        form.confirmation = "different1234".to_string();

        let action = form.handle_key(key(KeyCode::Enter));
        assert!(matches!(action, Action::None));
        assert!(!form.submitting);
        assert_eq!(form.errors.confirmation.as_deref(), Some("Passwords don't match"));
    }

    #[test]
    fn valid_draft_submits_without_confirmation_value() {
        let mut form = filled_form();
        let action = form.handle_key(key(KeyCode::Enter));
        match action {
            Action::RegisterUser(request) => {
                assert_eq!(request.username, "alice");
                assert_eq!(request.email, "alice@example.com");
                assert_eq!(request.password, "hunter2hunter2");
            }
            other => panic!("expected RegisterUser, got {other:?}"),
        }
        assert!(form.submitting);
    }

    #[test]
    fn server_failure_keeps_draft_and_shows_message() {
        let mut form = filled_form();
        form.handle_key(key(KeyCode::Enter));
        form.registration_failed("Email taken".to_string());

        assert!(!form.submitting);
        assert_eq!(form.error_banner.as_deref(), Some("Email taken"));
        assert_eq!(form.username, "alice");
        assert_eq!(form.email, "alice@example.com");
    }

    #[test]
    fn edits_ignored_while_submitting() {
        let mut form = filled_form();
        form.handle_key(key(KeyCode::Enter));
        form.handle_key(key(KeyCode::Char('x')));
        assert_eq!(form.username, "alice");
    }

    #[test]
    fn clearing_password_clears_confirmation() {
        let mut form = UserFormState {
            password: "s".to_string(),
            confirmation: "stale".to_string(),
            focused: FormField::Password,
            ..Default::default()
        };
        form.handle_key(key(KeyCode::Backspace));
        assert!(form.confirmation.is_empty());
    }
}
