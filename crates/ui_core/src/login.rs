//! Login form state and validation.

use serde::{Deserialize, Serialize};

/// Account type selected at login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

impl Role {
    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Estudiante",
            Role::Admin => "Administrador",
        }
    }
}

/// Inline message shown under the email field when it fails validation.
pub const EMAIL_ERROR: &str = "Por favor ingresa un email válido";

/// Inline message shown under the password field when it is too short.
pub const PASSWORD_ERROR: &str = "La contraseña debe tener al menos 6 caracteres";

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Route pushed after a successful submit.
pub const POST_LOGIN_PATH: &str = "/dashboard";

/// Welcome notification for a successful login.
pub fn success_message(role: Role) -> String {
    format!("Bienvenido a InnovaEd ({})", role.label())
}

/// State behind the login form: current field values plus the error text
/// from each field's last validation pass.
///
/// Error strings are empty exactly when the corresponding value passed its
/// last validation. They are stale between passes: typing into a field
/// does not clear a shown error until the next blur or submit re-checks it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub email_error: String,
    pub password_error: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the email value as typed. Never validates.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Replace the password value as typed. Never validates.
    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    /// Switch the account type. Never validates and never clears errors.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Re-check the email and refresh its error text.
    ///
    /// The value is used as typed; surrounding whitespace fails the check.
    pub fn validate_email(&mut self) -> bool {
        let valid = email_shape_ok(&self.email);
        self.email_error = if valid {
            String::new()
        } else {
            EMAIL_ERROR.to_string()
        };
        valid
    }

    /// Re-check the password length and refresh its error text.
    pub fn validate_password(&mut self) -> bool {
        let valid = self.password.chars().count() >= MIN_PASSWORD_CHARS;
        self.password_error = if valid {
            String::new()
        } else {
            PASSWORD_ERROR.to_string()
        };
        valid
    }

    /// Run a full submit pass.
    ///
    /// Both fields are re-validated unconditionally so the form surfaces
    /// every problem at once. Only when both pass does the form notify
    /// success (addressed to the current role) and ask the router for the
    /// dashboard; otherwise the refreshed error text is the only
    /// observable effect.
    pub fn submit<N, V>(&mut self, mut notify: N, mut navigate: V) -> bool
    where
        N: FnMut(&str),
        V: FnMut(&str),
    {
        let email_ok = self.validate_email();
        let password_ok = self.validate_password();
        if email_ok && password_ok {
            notify(&success_message(self.role));
            navigate(POST_LOGIN_PATH);
            true
        } else {
            false
        }
    }
}

/// Looks-like-an-email shape check: one `@` between whitespace-free runs,
/// with a `.` inside the domain that is neither its first nor its last
/// character. Not RFC validation.
fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_defaults() {
        let form = LoginForm::new();
        assert_eq!(form.role, Role::Student);
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert!(form.email_error.is_empty());
        assert!(form.password_error.is_empty());
    }

    #[test]
    fn test_email_accepts_plain_address() {
        let mut form = LoginForm::new();
        form.set_email("a@b.com".to_string());
        assert!(form.validate_email());
        assert!(form.email_error.is_empty());
    }

    #[test]
    fn test_email_rejects_empty() {
        let mut form = LoginForm::new();
        assert!(!form.validate_email());
        assert_eq!(form.email_error, EMAIL_ERROR);
    }

    #[test]
    fn test_email_rejects_missing_dot_suffix() {
        let mut form = LoginForm::new();
        form.set_email("a@b".to_string());
        assert!(!form.validate_email());
        assert_eq!(form.email_error, EMAIL_ERROR);
    }

    #[test]
    fn test_email_rejects_double_at() {
        let mut form = LoginForm::new();
        form.set_email("a@@b.com".to_string());
        assert!(!form.validate_email());
    }

    #[test]
    fn test_email_rejects_dot_at_domain_edges() {
        for bad in ["a@.com", "a@com.", "a@."] {
            let mut form = LoginForm::new();
            form.set_email(bad.to_string());
            assert!(!form.validate_email(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_email_is_not_trimmed() {
        let mut form = LoginForm::new();
        form.set_email(" a@b.com".to_string());
        assert!(!form.validate_email());

        form.set_email("a@b.com ".to_string());
        assert!(!form.validate_email());
    }

    #[test]
    fn test_password_length_boundary() {
        let mut form = LoginForm::new();
        assert!(!form.validate_password());
        assert_eq!(form.password_error, PASSWORD_ERROR);

        form.set_password("abcde".to_string());
        assert!(!form.validate_password());

        form.set_password("abcdef".to_string());
        assert!(form.validate_password());
        assert!(form.password_error.is_empty());
    }

    #[test]
    fn test_setters_leave_error_text_stale() {
        let mut form = LoginForm::new();
        form.validate_email();
        form.validate_password();
        assert_eq!(form.email_error, EMAIL_ERROR);
        assert_eq!(form.password_error, PASSWORD_ERROR);

        // Typing corrected values does not clear the shown errors.
        form.set_email("a@b.com".to_string());
        form.set_password("abcdef".to_string());
        assert_eq!(form.email_error, EMAIL_ERROR);
        assert_eq!(form.password_error, PASSWORD_ERROR);
    }

    #[test]
    fn test_role_switch_never_validates() {
        let mut form = LoginForm::new();
        form.validate_email();
        form.set_role(Role::Admin);
        assert_eq!(form.role, Role::Admin);
        assert_eq!(form.email_error, EMAIL_ERROR);
        assert!(form.password_error.is_empty());
    }

    #[test]
    fn test_submit_success_notifies_and_navigates_once() {
        let mut form = LoginForm::new();
        form.set_email("x@y.com".to_string());
        form.set_password("abcdef".to_string());
        form.set_role(Role::Admin);

        let mut notifications = Vec::new();
        let mut navigations = Vec::new();
        let ok = form.submit(
            |message| notifications.push(message.to_string()),
            |path| navigations.push(path.to_string()),
        );

        assert!(ok);
        assert_eq!(navigations, ["/dashboard"]);
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].contains("Administrador"));
        assert!(form.email_error.is_empty());
        assert!(form.password_error.is_empty());
    }

    #[test]
    fn test_submit_failure_is_silent() {
        let mut form = LoginForm::new();
        form.set_email("bad".to_string());
        form.set_password("ab".to_string());

        let mut notifications = 0u32;
        let mut navigations = 0u32;
        let ok = form.submit(|_| notifications += 1, |_| navigations += 1);

        assert!(!ok);
        assert_eq!(notifications, 0);
        assert_eq!(navigations, 0);
        assert_eq!(form.email_error, EMAIL_ERROR);
        assert_eq!(form.password_error, PASSWORD_ERROR);
    }

    #[test]
    fn test_submit_refreshes_both_fields() {
        // A failing email must not short-circuit the password check, and a
        // submit pass must clear errors for fields that now validate.
        let mut form = LoginForm::new();
        form.validate_email();
        form.validate_password();

        form.set_email("bad".to_string());
        form.set_password("abcdef".to_string());
        let ok = form.submit(|_| {}, |_| {});

        assert!(!ok);
        assert_eq!(form.email_error, EMAIL_ERROR);
        assert!(form.password_error.is_empty());
    }

    #[test]
    fn test_success_message_mentions_role() {
        assert_eq!(
            success_message(Role::Student),
            "Bienvenido a InnovaEd (Estudiante)"
        );
        assert_eq!(
            success_message(Role::Admin),
            "Bienvenido a InnovaEd (Administrador)"
        );
    }

    #[test]
    fn test_role_serde_round_trip() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        let parsed: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Role::Admin);
    }
}
