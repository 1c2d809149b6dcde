//! Client-side services and state machines for the clients directory.
//!
//! The crate talks to the directory REST API through a [`TransportGateway`]
//! and exposes two state machines built on it:
//!
//! - [`ClientEditor`] drives the add/edit/view form for one record.
//! - [`ClientsDirectory`] drives the searchable client list.
//!
//! Both publish snapshots through `tokio::sync::watch` channels and depend on
//! capability traits ([`ClientRecords`], [`CategoryListing`],
//! [`DateFormatting`]) so they can be driven without a server.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use directory_client::{
//!     ClientEditor, EditorParams, EditorServices, HttpGateway, StatusOption,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = HttpGateway::new("http://localhost:8080/".parse()?, Duration::from_secs(10))?;
//! let editor = ClientEditor::open(
//!     EditorParams {
//!         client_id: 1,
//!         list_link: "/".into(),
//!         mode: "edit".into(),
//!         status_mapping: StatusOption::defaults(),
//!     },
//!     EditorServices::over_gateway(Arc::new(gateway)),
//! )
//! .await;
//! println!("{}", editor.state().page_title());
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod editor;
pub mod formatting;
pub mod gateway;
pub mod records;
pub mod services;

pub use directory::{CLIENT_ID_PLACEHOLDER, ClientsDirectory, DirectoryParams, DirectoryState};
pub use editor::{ClientEditor, EditorParams, EditorServices, EditorState};
pub use formatting::{DateFormatter, DateFormatting};
pub use gateway::{HttpGateway, TransportError, TransportGateway};
pub use records::{CategoryRecord, ClientRecord, ClientSubmission, StatusOption};
pub use services::{CategoryListing, ClientRecords, GatewayCategoryListing, GatewayClientRecords};
