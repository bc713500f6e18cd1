//! Request-access modal state and contact deep links.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

/// Name used when a request-access trigger carries no project name.
pub const DEFAULT_PROJECT_NAME: &str = "Project";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Where demo requests are sent, and the text templates used for them.
///
/// Templates substitute `{owner}` and `{project}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactChannels {
    /// First name used in greetings.
    pub owner: String,
    /// Messaging number in international format, digits only.
    pub whatsapp: String,
    /// Email address receiving requests.
    pub email: String,
    #[serde(default = "default_message_template")]
    pub message_template: String,
    #[serde(default = "default_subject_template")]
    pub subject_template: String,
    #[serde(default = "default_body_template")]
    pub body_template: String,
}

fn default_message_template() -> String {
    "Hi {owner}! I'm interested in a live demonstration of your project: {project}. \
     Please let me know when you're available for a brief walkthrough."
        .to_string()
}

fn default_subject_template() -> String {
    "Demo Request: {project}".to_string()
}

fn default_body_template() -> String {
    "Hi {owner},\r\n\r\nI was exploring your portfolio and I am very interested in seeing \
     a live demonstration of \"{project}\".\r\n\r\nLet's connect!"
        .to_string()
}

impl ContactChannels {
    /// Channels with the default templates.
    pub fn new(owner: &str, whatsapp: &str, email: &str) -> Self {
        Self {
            owner: owner.to_string(),
            whatsapp: whatsapp.to_string(),
            email: email.to_string(),
            message_template: default_message_template(),
            subject_template: default_subject_template(),
            body_template: default_body_template(),
        }
    }

    fn fill(&self, template: &str, project: &str) -> String {
        template
            .replace("{owner}", &self.owner)
            .replace("{project}", project)
    }

    /// Messaging-app link with a pre-filled message about `project`.
    pub fn whatsapp_url(&self, project: &str) -> String {
        let message = self.fill(&self.message_template, project);
        format!(
            "https://wa.me/{}?text={}",
            self.whatsapp,
            encode_component(&message)
        )
    }

    /// `mailto:` link with subject and body about `project`.
    pub fn email_url(&self, project: &str) -> String {
        let subject = self.fill(&self.subject_template, project);
        let body = self.fill(&self.body_template, project);
        format!(
            "mailto:{}?subject={}&body={}",
            self.email,
            encode_component(&subject),
            encode_component(&body)
        )
    }

    /// Both deep links for `project`.
    pub fn links_for(&self, project: &str) -> DeepLinks {
        DeepLinks {
            whatsapp: self.whatsapp_url(project),
            email: self.email_url(project),
        }
    }
}

/// Generated links bound to the modal's two action buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeepLinks {
    pub whatsapp: String,
    pub email: String,
}

/// Visibility and context of the request-access dialog.
///
/// The dialog is visible exactly when a project name is held. Opening while
/// already open replaces the name; nothing about earlier openings is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactModal {
    project: Option<String>,
}

impl ContactModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the dialog for `project`. Blank names fall back to [`DEFAULT_PROJECT_NAME`].
    pub fn open(&mut self, project: &str) {
        let project = project.trim();
        let name = if project.is_empty() {
            DEFAULT_PROJECT_NAME
        } else {
            project
        };
        self.project = Some(name.to_string());
    }

    pub fn close(&mut self) {
        self.project = None;
    }

    pub fn is_open(&self) -> bool {
        self.project.is_some()
    }

    /// Project the dialog is currently showing, if open.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Handle a keydown. Escape closes an open dialog.
    ///
    /// Returns `true` when the key changed the state.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }
}
