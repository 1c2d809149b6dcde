//! Tests for the client editor.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use super::*;
use crate::formatting::MockDateFormatting;
use crate::services::{MockCategoryListing, MockClientRecords};
use rstest::{fixture, rstest};

const LIST_LINK: &str = "/clients";

fn params(mode: &str, client_id: i32) -> EditorParams {
    EditorParams {
        client_id,
        list_link: LIST_LINK.to_owned(),
        mode: mode.to_owned(),
        status_mapping: StatusOption::defaults(),
    }
}

fn services(
    records: MockClientRecords,
    categories: MockCategoryListing,
    formatter: MockDateFormatting,
) -> EditorServices {
    EditorServices {
        records: Arc::new(records),
        formatter: Arc::new(formatter),
        categories: Arc::new(categories),
    }
}

fn idle_services() -> EditorServices {
    services(
        MockClientRecords::new(),
        MockCategoryListing::new(),
        MockDateFormatting::new(),
    )
}

fn categories_ok() -> MockCategoryListing {
    let mut categories = MockCategoryListing::new();
    categories.expect_list().times(1).returning(|| {
        Ok(vec![CategoryRecord {
            category_id: 2,
            name: "Partners".into(),
        }])
    });
    categories
}

fn stored_client() -> ClientRecord {
    ClientRecord {
        client_id: 7,
        name: "Name7".into(),
        email: Some("name7@ignas.me".into()),
        phone: Some("888888".into()),
        fax: None,
        address: Some("7 Street".into()),
        status: 2,
        created_on: "2026-03-02T14:05:00+00:00".into(),
        category_id: 2,
        category: None,
        edit_link: String::new(),
    }
}

#[fixture]
fn valid_state() -> EditorState {
    let mut state = EditorState::initial(&params("add", 0));
    state.name = "Acme".into();
    state.email = "hello@acme.test".into();
    state
}

#[rstest]
fn initial_state_uses_form_defaults() {
    let state = EditorState::initial(&params("view", 3));

    assert_eq!(state.client_id, 3);
    assert_eq!(state.name, "");
    assert_eq!(state.status, Some(0));
    assert_eq!(state.category_id, Some(0));
    assert_eq!(state.created_on, "");
    assert_eq!(state.statuses, StatusOption::defaults());
    assert!(!state.edit_enabled);
    assert!(state.redirect.is_none());
}

#[rstest]
#[case("add", true, false)]
#[case("ADD", true, false)]
#[case("Edit", false, true)]
#[case("edit", false, true)]
#[case("view", false, false)]
#[case("", false, false)]
fn mode_token_is_case_insensitive(#[case] mode: &str, #[case] add: bool, #[case] edit: bool) {
    let state = EditorState::initial(&params(mode, 0));
    assert_eq!(state.is_add_mode, add);
    assert_eq!(state.is_edit_mode, edit);
    assert_eq!(state.edit_enabled, add);
}

#[rstest]
#[case("add", "", "Add New Client")]
#[case("add", "AAA", "New Client: AAA")]
#[case("edit", "AAA", "Client: AAA")]
#[case("edit", "", "Client: ")]
#[case("other", "AAA", "")]
#[case("other", "", "")]
fn page_title_depends_on_mode_and_name(
    #[case] mode: &str,
    #[case] name: &str,
    #[case] expected: &str,
) {
    let mut state = EditorState::initial(&params(mode, 0));
    state.name = name.to_owned();
    assert_eq!(state.page_title(), expected);
}

#[rstest]
#[case(true, "View")]
#[case(false, "Edit")]
fn edit_label_follows_editable_flag(#[case] enabled: bool, #[case] expected: &str) {
    let mut state = EditorState::initial(&params("edit", 1));
    state.edit_enabled = enabled;
    assert_eq!(state.edit_label(), expected);
}

#[rstest]
fn show_error_tracks_message(valid_state: EditorState) {
    let mut state = valid_state;
    assert!(!state.show_error());
    state.error = "boom".into();
    assert!(state.show_error());
}

#[rstest]
fn valid_state_passes(valid_state: EditorState) {
    assert!(valid_state.is_valid());
}

#[rstest]
#[case::missing_name(|s: &mut EditorState| s.name.clear())]
#[case::blank_name(|s: &mut EditorState| s.name = "   ".into())]
#[case::short_name(|s: &mut EditorState| s.name = "ab".into())]
#[case::long_name(|s: &mut EditorState| s.name = "x".repeat(FIELD_MAX + 1))]
#[case::bad_email(|s: &mut EditorState| s.email = "email".into())]
#[case::long_email(|s: &mut EditorState| s.email = format!("a@{}", "b".repeat(FIELD_MAX)))]
#[case::long_phone(|s: &mut EditorState| s.phone = "1".repeat(FIELD_MAX + 1))]
#[case::long_fax(|s: &mut EditorState| s.fax = "1".repeat(FIELD_MAX + 1))]
#[case::long_address(|s: &mut EditorState| s.address = "x".repeat(FIELD_MAX + 1))]
#[case::missing_status(|s: &mut EditorState| s.status = None)]
#[case::missing_category(|s: &mut EditorState| s.category_id = None)]
fn broken_rules_fail_validation(valid_state: EditorState, #[case] breaks: fn(&mut EditorState)) {
    let mut state = valid_state;
    breaks(&mut state);
    assert!(!state.is_valid());
}

#[rstest]
fn empty_email_is_allowed(valid_state: EditorState) {
    let mut state = valid_state;
    state.email.clear();
    assert!(state.is_valid());
}

#[rstest]
#[case(true, true, true)]
#[case(true, false, false)]
#[case(false, true, false)]
#[case(false, false, false)]
fn can_save_needs_editable_and_valid(
    valid_state: EditorState,
    #[case] enabled: bool,
    #[case] valid: bool,
    #[case] expected: bool,
) {
    let mut state = valid_state;
    state.edit_enabled = enabled;
    if !valid {
        state.name.clear();
    }
    assert_eq!(state.can_save(), expected);
}

#[rstest]
fn enable_edit_toggles_and_publishes() {
    let editor = ClientEditor::new(params("edit", 1), idle_services());
    let mut observer = editor.subscribe();

    editor.enable_edit();
    assert!(observer.has_changed().expect("sender alive"));
    assert!(observer.borrow_and_update().edit_enabled);

    editor.enable_edit();
    assert!(!editor.state().edit_enabled);
}

#[rstest]
#[tokio::test]
async fn add_mode_loads_categories_only() {
    let editor = ClientEditor::open(
        params("add", 0),
        services(MockClientRecords::new(), categories_ok(), MockDateFormatting::new()),
    )
    .await;

    let state = editor.state();
    assert_eq!(state.categories.len(), 1);
    assert!(state.edit_enabled);
    assert!(!state.show_error());
}

#[rstest]
#[tokio::test]
async fn edit_mode_loads_the_record() {
    let mut records = MockClientRecords::new();
    records
        .expect_get()
        .withf(|id| *id == 7)
        .times(1)
        .returning(|_| Ok(stored_client()));
    let mut formatter = MockDateFormatting::new();
    formatter
        .expect_format_date()
        .times(1)
        .returning(|value| format!("formatted {value}"));

    let editor = ClientEditor::open(
        params("edit", 7),
        services(records, categories_ok(), formatter),
    )
    .await;

    let state = editor.state();
    assert_eq!(state.name, "Name7");
    assert_eq!(state.email, "name7@ignas.me");
    assert_eq!(state.phone, "888888");
    assert_eq!(state.fax, "");
    assert_eq!(state.address, "7 Street");
    assert_eq!(state.status, Some(2));
    assert_eq!(state.category_id, Some(2));
    assert_eq!(state.created_on, "formatted 2026-03-02T14:05:00+00:00");
    assert!(!state.edit_enabled);
    assert_eq!(state.page_title(), "Client: Name7");
}

#[rstest]
#[tokio::test]
async fn category_failure_skips_record_load() {
    let mut categories = MockCategoryListing::new();
    categories
        .expect_list()
        .times(1)
        .returning(|| Err(TransportError::status(500, "db down")));

    let editor = ClientEditor::open(
        params("edit", 7),
        services(MockClientRecords::new(), categories, MockDateFormatting::new()),
    )
    .await;

    let state = editor.state();
    assert_eq!(state.error, "Error retrieving categories: db down");
    assert!(state.categories.is_empty());
}

#[rstest]
#[tokio::test]
async fn record_failure_sets_error() {
    let mut records = MockClientRecords::new();
    records
        .expect_get()
        .times(1)
        .returning(|_| Err(TransportError::status(404, "Client with ID='7' not found.")));

    let editor = ClientEditor::open(
        params("edit", 7),
        services(records, categories_ok(), MockDateFormatting::new()),
    )
    .await;

    let state = editor.state();
    assert_eq!(
        state.error,
        "Error getting client: Client with ID='7' not found."
    );
    assert_eq!(state.categories.len(), 1);
}

#[rstest]
#[tokio::test]
async fn save_in_add_mode_creates_and_redirects() {
    let mut records = MockClientRecords::new();
    records
        .expect_create()
        .withf(|client| client.name == "Acme" && client.client_id == 0)
        .times(1)
        .returning(|_| Ok(stored_client()));
    let editor = ClientEditor::new(
        params("add", 0),
        services(records, MockCategoryListing::new(), MockDateFormatting::new()),
    );
    editor.set_name("Acme");

    editor.save_click().await;

    assert_eq!(editor.state().redirect.as_deref(), Some(LIST_LINK));
}

#[rstest]
#[tokio::test]
async fn save_in_edit_mode_updates_by_identity() {
    let mut records = MockClientRecords::new();
    records
        .expect_update()
        .withf(|id, client| *id == 7 && client.client_id == 7 && client.name == "Renamed")
        .times(1)
        .returning(|_, _| Ok(stored_client()));
    let editor = ClientEditor::new(
        params("edit", 7),
        services(records, MockCategoryListing::new(), MockDateFormatting::new()),
    );
    editor.set_name("Renamed");

    editor.save_click().await;

    assert_eq!(editor.state().redirect.as_deref(), Some(LIST_LINK));
}

#[rstest]
#[tokio::test]
async fn save_in_neither_mode_sends_nothing() {
    let editor = ClientEditor::new(params("view", 7), idle_services());

    editor.save_click().await;

    let state = editor.state();
    assert!(state.redirect.is_none());
    assert!(!state.show_error());
}

#[rstest]
#[case("add", "Error saving client! ")]
#[case("edit", "Error updating client! ")]
#[tokio::test]
async fn save_failure_sets_contextual_error(#[case] mode: &str, #[case] prefix: &str) {
    let mut records = MockClientRecords::new();
    records
        .expect_create()
        .returning(|_| Err(TransportError::status(400, "Invalid model.")));
    records
        .expect_update()
        .returning(|_, _| Err(TransportError::status(400, "Invalid model.")));
    let editor = ClientEditor::new(
        params(mode, 7),
        services(records, MockCategoryListing::new(), MockDateFormatting::new()),
    );

    editor.save_click().await;

    let state = editor.state();
    assert_eq!(state.error, format!("{prefix}Invalid model."));
    assert!(state.redirect.is_none());
}

#[rstest]
#[tokio::test]
async fn delete_redirects_on_success() {
    let mut records = MockClientRecords::new();
    records
        .expect_delete()
        .withf(|id| *id == 7)
        .times(1)
        .returning(|_| Ok(()));
    let editor = ClientEditor::new(
        params("edit", 7),
        services(records, MockCategoryListing::new(), MockDateFormatting::new()),
    );

    editor.delete_click().await;

    assert_eq!(editor.state().redirect.as_deref(), Some(LIST_LINK));
}

#[rstest]
#[tokio::test]
async fn delete_failure_sets_error() {
    let mut records = MockClientRecords::new();
    records
        .expect_delete()
        .times(1)
        .returning(|_| Err(TransportError::transport("connection refused")));
    let editor = ClientEditor::new(
        params("edit", 7),
        services(records, MockCategoryListing::new(), MockDateFormatting::new()),
    );

    editor.delete_click().await;

    let state = editor.state();
    assert_eq!(state.error, "Error deleting client! connection refused");
    assert!(state.redirect.is_none());
}

#[rstest]
fn field_edits_leave_mode_and_identity_alone() {
    let editor = ClientEditor::new(params("edit", 7), idle_services());
    let before = editor.state();

    editor.set_name("Renamed");
    editor.set_email("renamed@ignas.me");
    editor.set_phone("111111");
    editor.set_fax("222222");
    editor.set_address("Vilnius");
    editor.set_status(Some(2));
    editor.set_category_id(None);

    let state = editor.state();
    assert_eq!(state.name, "Renamed");
    assert_eq!(state.status, Some(2));
    assert_eq!(state.category_id, None);
    assert_eq!(state.client_id, before.client_id);
    assert_eq!(state.is_add_mode, before.is_add_mode);
    assert_eq!(state.is_edit_mode, before.is_edit_mode);
    assert_eq!(state.redirect, None);
    assert_eq!(state.edit_enabled, before.edit_enabled);
}
