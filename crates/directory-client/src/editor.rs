//! Single client editor.
//!
//! [`ClientEditor`] owns one record's form state and publishes every change
//! through a `watch` channel. Derived values such as [`EditorState::can_save`]
//! are computed from the snapshot on each read, so observers never see them
//! out of step with the fields.
//!
//! Async operations never return errors: a failure only sets
//! [`EditorState::error`] to a contextual prefix plus the server's response
//! text. Nothing is retried or cancelled; when two operations overlap the last
//! one to finish wins.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::formatting::{DateFormatter, DateFormatting};
use crate::gateway::{TransportError, TransportGateway};
use crate::records::{CategoryRecord, ClientRecord, ClientSubmission, StatusOption};
use crate::services::{
    CategoryListing, ClientRecords, GatewayCategoryListing, GatewayClientRecords,
};

/// Minimum length of a client name.
pub const NAME_MIN: usize = 3;
/// Maximum length of every text field.
pub const FIELD_MAX: usize = 100;
/// Pattern a non-empty email must match.
pub const EMAIL_PATTERN: &str = r"^\S+@\S+$";

const ADD_MODE: &str = "add";
const EDIT_MODE: &str = "edit";

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_matches(value: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

fn within_max(value: &str) -> bool {
    value.chars().count() <= FIELD_MAX
}

/// Construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorParams {
    /// Identity of the record to edit, `0` for a new one.
    pub client_id: i32,
    /// Where to go after a successful save or delete.
    pub list_link: String,
    /// `"add"` or `"edit"`, case-insensitive. Anything else selects neither.
    pub mode: String,
    /// Ordered status options for the drop-down.
    pub status_mapping: Vec<StatusOption>,
}

/// Capabilities the editor calls.
#[derive(Clone)]
pub struct EditorServices {
    /// Client record operations.
    pub records: Arc<dyn ClientRecords>,
    /// Timestamp rendering for `created_on`.
    pub formatter: Arc<dyn DateFormatting>,
    /// Category listing.
    pub categories: Arc<dyn CategoryListing>,
}

impl EditorServices {
    /// Production wiring: gateway-backed services and a local-time formatter.
    pub fn over_gateway(gateway: Arc<dyn TransportGateway>) -> Self {
        Self {
            records: Arc::new(GatewayClientRecords::new(gateway.clone())),
            formatter: Arc::new(DateFormatter::local()),
            categories: Arc::new(GatewayCategoryListing::new(gateway)),
        }
    }
}

/// Snapshot of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// Identity of the edited record.
    pub client_id: i32,
    /// Name field.
    pub name: String,
    /// Email field.
    pub email: String,
    /// Phone field.
    pub phone: String,
    /// Fax field.
    pub fax: String,
    /// Address field.
    pub address: String,
    /// Selected status code.
    pub status: Option<i32>,
    /// Selected category.
    pub category_id: Option<i32>,
    /// Formatted creation time, read-only.
    pub created_on: String,
    /// Categories for the drop-down.
    pub categories: Vec<CategoryRecord>,
    /// Status options for the drop-down.
    pub statuses: Vec<StatusOption>,
    /// Last failure; empty when there is none.
    pub error: String,
    /// Whether the form accepts input.
    pub edit_enabled: bool,
    /// Set to the list link once the editor navigates away.
    pub redirect: Option<String>,
    /// Mode token was `"add"`.
    pub is_add_mode: bool,
    /// Mode token was `"edit"`.
    pub is_edit_mode: bool,
}

impl EditorState {
    fn initial(params: &EditorParams) -> Self {
        let mode = params.mode.to_lowercase();
        let is_add_mode = mode == ADD_MODE;
        Self {
            client_id: params.client_id,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            fax: String::new(),
            address: String::new(),
            status: Some(0),
            category_id: Some(0),
            created_on: String::new(),
            categories: Vec::new(),
            statuses: params.status_mapping.clone(),
            error: String::new(),
            edit_enabled: is_add_mode,
            redirect: None,
            is_add_mode,
            is_edit_mode: mode == EDIT_MODE,
        }
    }

    /// Heading for the page.
    pub fn page_title(&self) -> String {
        if self.is_add_mode {
            if self.name.is_empty() {
                return "Add New Client".to_owned();
            }
            return format!("New Client: {}", self.name);
        }
        if self.is_edit_mode {
            return format!("Client: {}", self.name);
        }
        String::new()
    }

    /// Caption for the edit toggle.
    pub fn edit_label(&self) -> &'static str {
        if self.edit_enabled { "View" } else { "Edit" }
    }

    /// Whether an error should be shown.
    pub fn show_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Whether every field passes its rule.
    pub fn is_valid(&self) -> bool {
        let name_length = self.name.chars().count();
        let name_ok =
            !self.name.trim().is_empty() && (NAME_MIN..=FIELD_MAX).contains(&name_length);
        let email_ok =
            self.email.is_empty() || (email_matches(&self.email) && within_max(&self.email));
        name_ok
            && email_ok
            && within_max(&self.phone)
            && within_max(&self.fax)
            && within_max(&self.address)
            && self.status.is_some()
            && self.category_id.is_some()
    }

    /// Whether the save action is available.
    pub fn can_save(&self) -> bool {
        self.edit_enabled && self.is_valid()
    }

    /// The fields as sent to the server.
    pub fn submission(&self) -> ClientSubmission {
        ClientSubmission {
            client_id: self.client_id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            fax: self.fax.clone(),
            address: self.address.clone(),
            status: self.status,
            category_id: self.category_id,
        }
    }

    fn populate(&mut self, record: ClientRecord, created_on: String) {
        self.name = record.name;
        self.email = record.email.unwrap_or_default();
        self.phone = record.phone.unwrap_or_default();
        self.fax = record.fax.unwrap_or_default();
        self.address = record.address.unwrap_or_default();
        self.status = Some(record.status);
        self.created_on = created_on;
        self.category_id = Some(record.category_id);
    }
}

/// Editor for one client record.
pub struct ClientEditor {
    state: watch::Sender<EditorState>,
    list_link: String,
    services: EditorServices,
}

impl ClientEditor {
    /// Build the editor without loading anything.
    pub fn new(params: EditorParams, services: EditorServices) -> Self {
        let (state, _) = watch::channel(EditorState::initial(&params));
        Self {
            state,
            list_link: params.list_link,
            services,
        }
    }

    /// Build the editor and run the initial [`load`](Self::load).
    pub async fn open(params: EditorParams, services: EditorServices) -> Self {
        let editor = Self::new(params, services);
        editor.load().await;
        editor
    }

    /// Observe every state change.
    pub fn subscribe(&self) -> watch::Receiver<EditorState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn state(&self) -> EditorState {
        self.state.borrow().clone()
    }

    /// Set the name field.
    pub fn set_name(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.name = value);
    }

    /// Set the email field.
    pub fn set_email(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.email = value);
    }

    /// Set the phone field.
    pub fn set_phone(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.phone = value);
    }

    /// Set the fax field.
    pub fn set_fax(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.fax = value);
    }

    /// Set the address field.
    pub fn set_address(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.address = value);
    }

    /// Select a status code; `None` clears the selection.
    pub fn set_status(&self, value: Option<i32>) {
        self.state.send_modify(|state| state.status = value);
    }

    /// Select a category; `None` clears the selection.
    pub fn set_category_id(&self, value: Option<i32>) {
        self.state.send_modify(|state| state.category_id = value);
    }

    /// Toggle the editable flag.
    pub fn enable_edit(&self) {
        self.state
            .send_modify(|state| state.edit_enabled = !state.edit_enabled);
    }

    /// Fetch the categories and, in edit mode, the record itself.
    pub async fn load(&self) {
        let categories = match self.services.categories.list().await {
            Ok(categories) => categories,
            Err(err) => return self.report("Error retrieving categories: ", &err),
        };
        let (is_edit_mode, client_id) = {
            let state = self.state.borrow();
            (state.is_edit_mode, state.client_id)
        };
        self.state.send_modify(|state| state.categories = categories);
        if is_edit_mode {
            self.load_client(client_id).await;
        }
    }

    async fn load_client(&self, client_id: i32) {
        match self.services.records.get(client_id).await {
            Ok(record) => {
                let created_on = self.services.formatter.format_date(&record.created_on);
                debug!(client_id, "client loaded");
                self.state
                    .send_modify(|state| state.populate(record, created_on));
            }
            Err(err) => self.report("Error getting client: ", &err),
        }
    }

    /// Create (add mode) or update (edit mode) the record, then return to the
    /// list. Does nothing in neither mode.
    pub async fn save_click(&self) {
        let (submission, is_add_mode, is_edit_mode) = {
            let state = self.state.borrow();
            (state.submission(), state.is_add_mode, state.is_edit_mode)
        };
        if is_add_mode {
            match self.services.records.create(&submission).await {
                Ok(_) => self.redirect_to_list(),
                Err(err) => self.report("Error saving client! ", &err),
            }
        }
        if is_edit_mode {
            match self
                .services
                .records
                .update(submission.client_id, &submission)
                .await
            {
                Ok(_) => self.redirect_to_list(),
                Err(err) => self.report("Error updating client! ", &err),
            }
        }
    }

    /// Delete the record, then return to the list.
    pub async fn delete_click(&self) {
        let client_id = self.state.borrow().client_id;
        match self.services.records.delete(client_id).await {
            Ok(()) => self.redirect_to_list(),
            Err(err) => self.report("Error deleting client! ", &err),
        }
    }

    fn redirect_to_list(&self) {
        info!(link = %self.list_link, "returning to list");
        let link = self.list_link.clone();
        self.state.send_modify(|state| state.redirect = Some(link));
    }

    fn report(&self, prefix: &str, err: &TransportError) {
        let message = format!("{prefix}{}", err.response_text);
        self.state.send_modify(|state| state.error = message);
    }
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
