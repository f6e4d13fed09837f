//! A stand-in for the Supabase REST endpoint, bound to an ephemeral local port.
//!
//! Responses are canned per table; every request is recorded so tests can
//! assert on what the client actually sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::Value;

pub const SERVICE_KEY: &str = "test-service-role-key";

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub table: String,
    pub query: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct FakePostgrest {
    /// `(status, body)` served for `GET /rest/v1/{table}`.
    pub selects: HashMap<String, (u16, String)>,
    /// `(status, body)` served for any insert.
    pub insert: Option<(u16, String)>,
    pub requests: Vec<Recorded>,
}

impl FakePostgrest {
    pub fn serve_json(&mut self, table: &str, rows: Value) {
        self.selects
            .insert(table.to_string(), (200, rows.to_string()));
    }

    pub fn fail_table(&mut self, table: &str, status: u16, body: &str) {
        self.selects
            .insert(table.to_string(), (status, body.to_string()));
    }
}

pub type Shared = Arc<Mutex<FakePostgrest>>;

fn record(req: &HttpRequest, table: &str, body: String, state: &Shared) {
    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();
    let headers = req
        .headers()
        .iter()
        .map(|(k, v)| {
            (
                k.as_str().to_string(),
                v.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    state.lock().unwrap().requests.push(Recorded {
        method: req.method().to_string(),
        table: table.to_string(),
        query,
        headers,
        body,
    });
}

fn respond(status: u16, body: String) -> HttpResponse {
    HttpResponse::build(StatusCode::from_u16(status).unwrap())
        .content_type("application/json")
        .body(body)
}

async fn select(
    req: HttpRequest,
    table: web::Path<String>,
    state: web::Data<Mutex<FakePostgrest>>,
) -> HttpResponse {
    let state = state.into_inner();
    record(&req, &table, String::new(), &state);
    let canned = state.lock().unwrap().selects.get(table.as_str()).cloned();
    match canned {
        Some((status, body)) => respond(status, body),
        None => respond(200, "[]".to_string()),
    }
}

async fn insert(
    req: HttpRequest,
    table: web::Path<String>,
    body: web::Bytes,
    state: web::Data<Mutex<FakePostgrest>>,
) -> HttpResponse {
    let state = state.into_inner();
    record(
        &req,
        &table,
        String::from_utf8_lossy(&body).into_owned(),
        &state,
    );
    let canned = state.lock().unwrap().insert.clone();
    match canned {
        Some((status, body)) => respond(status, body),
        None => {
            // Echo the first submitted row back with an id, as PostgREST does.
            let rows: Value = serde_json::from_slice(&body).unwrap();
            let mut row = rows[0].clone();
            row["id"] = Value::from(1);
            respond(201, row.to_string())
        }
    }
}

/// Start the fake endpoint and return its base URL and shared state.
pub fn start_fake_postgrest(fake: FakePostgrest) -> (String, Shared) {
    let state: Shared = Arc::new(Mutex::new(fake));
    let data = web::Data::from(state.clone());
    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/rest/v1/{table}", web::get().to(select))
            .route("/rest/v1/{table}", web::post().to(insert))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind fake PostgREST");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (format!("http://{}", addr), state)
}

/// Bind to port 0 to let the OS assign a free port, then release it.
pub fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .expect("bind failed")
        .local_addr()
        .expect("addr failed")
        .port()
}
