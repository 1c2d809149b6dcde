//! In-process HTTP harness over the in-memory store.

use std::sync::Arc;

use actix_web::http::header::HeaderMap;
use actix_web::http::{Method, StatusCode};
use actix_web::{App, test as actix_test, web};
use directory_backend::Trace;
use directory_backend::domain::{CategoriesService, ClientsService, ExampleDataSeeder};
use directory_backend::inbound::http::configure_api;
use directory_backend::inbound::http::state::HttpState;
use directory_backend::outbound::memory::MemoryStore;
use mockable::DefaultClock;
use serde_json::Value;

/// Captured response: status, headers, and the JSON body (`Null` when empty).
pub(crate) struct Captured {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Value,
}

/// Build HTTP state over a fresh store, optionally seeded with sample rows.
pub(crate) async fn memory_state(seeded: bool) -> HttpState {
    let store = Arc::new(MemoryStore::new());
    if seeded {
        ExampleDataSeeder::new(store.clone(), store.clone(), Arc::new(DefaultClock))
            .seed_if_empty()
            .await
            .expect("seed memory store");
    }
    HttpState::new(
        Arc::new(ClientsService::new(store.clone(), Arc::new(DefaultClock))),
        Arc::new(CategoriesService::new(store)),
    )
}

/// Send one request through the full `/api` stack.
pub(crate) async fn send(
    state: &HttpState,
    method: Method,
    path: &str,
    payload: Option<Value>,
) -> Captured {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Trace)
            .service(web::scope("/api").configure(configure_api)),
    )
    .await;

    let request = actix_test::TestRequest::default().method(method).uri(path);
    let request = match payload {
        Some(payload) => request.set_json(payload),
        None => request,
    };
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = actix_test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    Captured {
        status,
        headers,
        body,
    }
}
