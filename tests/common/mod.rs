use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Deserialize)]
struct PageQuery {
    limit: usize,
    sort_by: String,
    offset: usize,
}

/// How the mock answers one specific page request
#[derive(Clone)]
#[allow(dead_code)]
pub enum Fault {
    Status(u16),
    Malformed,
}

#[derive(Default)]
pub struct MockLedgerData {
    pub by_transaction_count: Vec<Value>,
    pub by_balance: Vec<Value>,
    /// (sort_by, offset) pairs that fail instead of serving data
    pub faults: Vec<(String, usize, Fault)>,
}

struct MockState {
    data: MockLedgerData,
    requests: Mutex<Vec<(String, usize, usize)>>,
}

/// In-process stand-in for the ledger-query service
pub struct MockLedger {
    state: Arc<MockState>,
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

async fn list_accounts(
    State(state): State<Arc<MockState>>,
    Query(query): Query<PageQuery>,
) -> (StatusCode, String) {
    state
        .requests
        .lock()
        .unwrap()
        .push((query.sort_by.clone(), query.offset, query.limit));

    if let Some((_, _, fault)) = state
        .data
        .faults
        .iter()
        .find(|(sort_by, offset, _)| *sort_by == query.sort_by && *offset == query.offset)
    {
        return match fault {
            Fault::Status(code) => (
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "mock failure".to_string(),
            ),
            Fault::Malformed => (StatusCode::OK, "{\"accounts\": [".to_string()),
        };
    }

    let all = match query.sort_by.as_str() {
        "-transaction_count" => &state.data.by_transaction_count,
        "-balance" => &state.data.by_balance,
        _ => return (StatusCode::BAD_REQUEST, "unknown sort".to_string()),
    };

    let start = query.offset.min(all.len());
    let end = (query.offset + query.limit).min(all.len());
    let body = json!({
        "total": all.len(),
        "accounts": &all[start..end],
    });

    (StatusCode::OK, body.to_string())
}

impl MockLedger {
    pub async fn start(data: MockLedgerData) -> Self {
        let state = Arc::new(MockState {
            data,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/accounts", get(list_accounts))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock ledger");
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockLedger {
            state,
            base_url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// (sort_by, offset, limit) for every request received so far
    pub fn requests(&self) -> Vec<(String, usize, usize)> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockLedger {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn account_json(id: &str, balance: &str, transaction_count: &str, updated_at: i64) -> Value {
    json!({
        "account_identifier": id,
        "balance": balance,
        "transaction_count": transaction_count,
        "updated_at": updated_at,
    })
}
