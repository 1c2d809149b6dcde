//! Client list with keyword search.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::records::ClientRecord;
use crate::services::ClientRecords;

/// Token in the edit link template replaced by each record's identity.
pub const CLIENT_ID_PLACEHOLDER: &str = "CLIENTID";

/// Construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryParams {
    /// Link to the add page.
    pub add_link: String,
    /// Edit page template containing [`CLIENT_ID_PLACEHOLDER`].
    pub edit_link: String,
}

/// Snapshot of the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryState {
    /// Every loaded client.
    pub clients: Vec<ClientRecord>,
    /// Current search text.
    pub search_keyword: String,
    /// Last failure; empty when there is none.
    pub error: String,
}

impl DirectoryState {
    /// Clients whose name contains the keyword, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use directory_client::DirectoryState;
    ///
    /// let state = DirectoryState::default();
    /// assert!(state.filtered_clients().is_empty());
    /// ```
    pub fn filtered_clients(&self) -> Vec<&ClientRecord> {
        let keyword = self.search_keyword.to_lowercase();
        if keyword.is_empty() {
            return self.clients.iter().collect();
        }
        self.clients
            .iter()
            .filter(|client| client.name.to_lowercase().contains(&keyword))
            .collect()
    }

    /// Whether the filter matched anything.
    pub fn clients_available(&self) -> bool {
        !self.filtered_clients().is_empty()
    }

    /// Whether to show the "no clients" notice: nothing matched and nothing
    /// failed.
    pub fn clients_unavailable(&self) -> bool {
        !self.show_error() && !self.clients_available()
    }

    /// Whether an error should be shown.
    pub fn show_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// List of clients loaded once from the server.
pub struct ClientsDirectory {
    state: watch::Sender<DirectoryState>,
    params: DirectoryParams,
    records: Arc<dyn ClientRecords>,
}

impl ClientsDirectory {
    /// Build the directory without loading anything.
    pub fn new(params: DirectoryParams, records: Arc<dyn ClientRecords>) -> Self {
        let (state, _) = watch::channel(DirectoryState::default());
        Self {
            state,
            params,
            records,
        }
    }

    /// Build the directory and run the initial [`load`](Self::load).
    pub async fn open(params: DirectoryParams, records: Arc<dyn ClientRecords>) -> Self {
        let directory = Self::new(params, records);
        directory.load().await;
        directory
    }

    /// Observe every state change.
    pub fn subscribe(&self) -> watch::Receiver<DirectoryState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn state(&self) -> DirectoryState {
        self.state.borrow().clone()
    }

    /// Link to the add page.
    pub fn add_link(&self) -> &str {
        &self.params.add_link
    }

    /// Replace the search text.
    pub fn set_search_keyword(&self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        self.state.send_modify(|state| state.search_keyword = keyword);
    }

    /// Fill in each record's edit link from the template.
    pub fn include_edit_links(&self, clients: &mut [ClientRecord]) {
        for client in clients {
            client.edit_link = self
                .params
                .edit_link
                .replace(CLIENT_ID_PLACEHOLDER, &client.client_id.to_string());
        }
    }

    /// Fetch every client.
    pub async fn load(&self) {
        match self.records.list().await {
            Ok(mut clients) => {
                self.include_edit_links(&mut clients);
                debug!(count = clients.len(), "clients loaded");
                self.state.send_modify(|state| state.clients = clients);
            }
            Err(err) => {
                let message = format!("Error retrieving clients: {}", err.response_text);
                self.state.send_modify(|state| state.error = message);
            }
        }
    }
}
