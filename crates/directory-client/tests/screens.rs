//! Directory and editor wired to [`HttpGateway`] against a stub API.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, web};
use chrono::FixedOffset;
use directory_client::{
    ClientEditor, ClientsDirectory, DateFormatter, DirectoryParams, EditorParams, EditorServices,
    GatewayCategoryListing, GatewayClientRecords, HttpGateway, StatusOption, TransportGateway,
};
use rstest::rstest;
use serde_json::{Value, json};

#[derive(Default)]
struct Received {
    puts: Vec<Value>,
}

fn client_json(id: i32, name: &str) -> Value {
    json!({
        "clientId": id,
        "name": name,
        "email": format!("{}@ignas.me", name.to_lowercase()),
        "phone": "111111",
        "fax": null,
        "address": null,
        "status": 1,
        "createdOn": "2026-03-02T14:05:00+00:00",
        "categoryId": 1,
        "category": { "categoryId": 1, "name": "Partners" }
    })
}

async fn list_clients() -> HttpResponse {
    HttpResponse::Ok().json(json!([client_json(1, "Name1"), client_json(2, "Other")]))
}

async fn get_client(id: web::Path<i32>) -> HttpResponse {
    let id = id.into_inner();
    if id == 1 {
        return HttpResponse::Ok().json(client_json(1, "Name1"));
    }
    HttpResponse::NotFound().body(format!("Client with ID='{id}' not found."))
}

async fn put_client(
    received: web::Data<Mutex<Received>>,
    body: web::Json<Value>,
) -> HttpResponse {
    let body = body.into_inner();
    received.lock().expect("received lock").puts.push(body.clone());
    HttpResponse::Ok().json(body)
}

async fn list_categories() -> HttpResponse {
    HttpResponse::Ok().json(json!([{ "categoryId": 1, "name": "Partners" }]))
}

fn start_server() -> (Arc<dyn TransportGateway>, web::Data<Mutex<Received>>) {
    let received = web::Data::new(Mutex::new(Received::default()));
    let shared = received.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(shared.clone())
            .route("/api/clients", web::get().to(list_clients))
            .route("/api/clients/{id}", web::get().to(get_client))
            .route("/api/clients/{id}", web::put().to(put_client))
            .route("/api/categories", web::get().to(list_categories))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test server");
    let addr = *server.addrs().first().expect("bound address");
    actix_web::rt::spawn(server.run());

    let base = format!("http://{addr}/").parse().expect("base URL");
    let gateway = HttpGateway::new(base, Duration::from_secs(5)).expect("gateway");
    (Arc::new(gateway), received)
}

fn editor_services(gateway: Arc<dyn TransportGateway>) -> EditorServices {
    EditorServices {
        records: Arc::new(GatewayClientRecords::new(gateway.clone())),
        formatter: Arc::new(DateFormatter::with_offset(
            FixedOffset::east_opt(0).expect("offset"),
        )),
        categories: Arc::new(GatewayCategoryListing::new(gateway)),
    }
}

fn editor_params(mode: &str, client_id: i32) -> EditorParams {
    EditorParams {
        client_id,
        list_link: "/clients".to_owned(),
        mode: mode.to_owned(),
        status_mapping: StatusOption::defaults(),
    }
}

#[rstest]
#[actix_web::test]
async fn directory_lists_and_filters_server_records() {
    let (gateway, _) = start_server();
    let params = DirectoryParams {
        add_link: "/clients/add".to_owned(),
        edit_link: "/clients/edit/CLIENTID".to_owned(),
    };

    let directory =
        ClientsDirectory::open(params, Arc::new(GatewayClientRecords::new(gateway))).await;
    directory.set_search_keyword("oth");

    let state = directory.state();
    assert_eq!(state.clients.len(), 2);
    let filtered = state.filtered_clients();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.first().expect("match").edit_link, "/clients/edit/2");
}

#[rstest]
#[actix_web::test]
async fn editor_loads_then_saves_an_existing_client() {
    let (gateway, received) = start_server();

    let editor = ClientEditor::open(editor_params("edit", 1), editor_services(gateway)).await;
    let loaded = editor.state();
    assert_eq!(loaded.name, "Name1");
    assert_eq!(loaded.created_on, "02 Mar 2026 14:05:00");
    assert_eq!(loaded.categories.len(), 1);
    assert_eq!(loaded.page_title(), "Client: Name1");

    editor.enable_edit();
    editor.set_phone("222222");
    assert!(editor.state().can_save());
    editor.save_click().await;

    assert_eq!(editor.state().redirect.as_deref(), Some("/clients"));
    let puts = received.lock().expect("received lock").puts.clone();
    assert_eq!(puts.len(), 1);
    let sent = puts.first().expect("put body");
    assert_eq!(sent["clientId"], 1);
    assert_eq!(sent["phone"], "222222");
    assert_eq!(sent["email"], "name1@ignas.me");
}

#[rstest]
#[actix_web::test]
async fn editor_reports_missing_client_text() {
    let (gateway, _) = start_server();

    let editor = ClientEditor::open(editor_params("edit", 9), editor_services(gateway)).await;

    assert_eq!(
        editor.state().error,
        "Error getting client: Client with ID='9' not found."
    );
}
