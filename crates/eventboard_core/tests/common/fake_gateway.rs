//! In-process json-server stand-in: events, categories and users kept in memory,
//! served over real HTTP on an ephemeral port.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use eventboard_core::{Gateway, GatewayConfig};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Store {
    events: Vec<Value>,
    categories: Vec<Value>,
    users: Vec<Value>,
    next_id: u64,
    event_posts: usize,
    user_posts: usize,
    reject_users: bool,
    reject_event_updates: bool,
    failing_event_posts: usize,
}

impl Store {
    fn assign_id(&mut self, mut body: Value) -> Value {
        self.next_id += 1;
        body["id"] = json!(self.next_id);
        body
    }
}

type Shared = Arc<Mutex<Store>>;

fn id_of(v: &Value) -> Option<u64> {
    v.get("id").and_then(|id| id.as_u64())
}

pub struct FakeGateway {
    pub base_url: String,
    store: Shared,
}

impl FakeGateway {
    /// Start with the three categories the app ships with and one user.
    pub async fn start() -> Self {
        let store = Store {
            categories: vec![
                json!({"id": 1, "name": "sports"}),
                json!({"id": 2, "name": "games"}),
                json!({"id": 3, "name": "relaxation"}),
            ],
            users: vec![json!({"id": 1, "name": "Ignacio Doe", "image": "https://x/ignacio.jpg"})],
            next_id: 100,
            ..Default::default()
        };
        let store = Arc::new(Mutex::new(store));

        let app = Router::new()
            .route("/events", get(list_events).post(create_event))
            .route(
                "/events/:id",
                get(get_event).put(update_event).delete(delete_event),
            )
            .route("/categories", get(list_categories))
            .route("/users", get(list_users).post(create_user))
            .with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake gateway");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake gateway");
        });

        FakeGateway {
            base_url: format!("http://{}", addr),
            store,
        }
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::new(GatewayConfig::new(&self.base_url))
    }

    pub fn seed_event(&self, event: Value) -> u64 {
        let mut store = self.store.lock().unwrap();
        let event = store.assign_id(event);
        let id = id_of(&event).unwrap();
        store.events.push(event);
        id
    }

    /// Seed an event exactly as given (id included), e.g. to test string ids.
    pub fn seed_raw_event(&self, event: Value) {
        self.store.lock().unwrap().events.push(event);
    }

    pub fn reject_user_creation(&self) {
        self.store.lock().unwrap().reject_users = true;
    }

    pub fn reject_event_updates(&self) {
        self.store.lock().unwrap().reject_event_updates = true;
    }

    /// The next `count` POSTs to /events answer 500 without storing anything.
    pub fn fail_next_event_posts(&self, count: usize) {
        self.store.lock().unwrap().failing_event_posts = count;
    }

    pub fn users_named(&self, name: &str) -> usize {
        let store = self.store.lock().unwrap();
        store.users.iter().filter(|u| u["name"] == name).count()
    }

    pub fn event_posts(&self) -> usize {
        self.store.lock().unwrap().event_posts
    }

    pub fn user_posts(&self) -> usize {
        self.store.lock().unwrap().user_posts
    }

    pub fn stored_event(&self, id: u64) -> Option<Value> {
        let store = self.store.lock().unwrap();
        store.events.iter().find(|e| id_of(e) == Some(id)).cloned()
    }
}

async fn list_events(State(store): State<Shared>) -> Json<Value> {
    Json(Value::Array(store.lock().unwrap().events.clone()))
}

async fn get_event(
    State(store): State<Shared>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    let store = store.lock().unwrap();
    store
        .events
        .iter()
        .find(|e| id_of(e) == Some(id))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_event(
    State(store): State<Shared>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let mut store = store.lock().unwrap();
    store.event_posts += 1;
    if store.failing_event_posts > 0 {
        store.failing_event_posts -= 1;
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let event = store.assign_id(body);
    store.events.push(event.clone());
    Ok((StatusCode::CREATED, Json(event)))
}

async fn update_event(
    State(store): State<Shared>,
    Path(id): Path<u64>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = store.lock().unwrap();
    if store.reject_event_updates {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let slot = store
        .events
        .iter_mut()
        .find(|e| id_of(e) == Some(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    body["id"] = json!(id);
    *slot = body.clone();
    Ok(Json(body))
}

async fn delete_event(
    State(store): State<Shared>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = store.lock().unwrap();
    let before = store.events.len();
    store.events.retain(|e| id_of(e) != Some(id));
    if store.events.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({})))
}

async fn list_categories(State(store): State<Shared>) -> Json<Value> {
    Json(Value::Array(store.lock().unwrap().categories.clone()))
}

async fn list_users(State(store): State<Shared>) -> Json<Value> {
    Json(Value::Array(store.lock().unwrap().users.clone()))
}

async fn create_user(
    State(store): State<Shared>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let mut store = store.lock().unwrap();
    store.user_posts += 1;
    if store.reject_users {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let user = store.assign_id(body);
    store.users.push(user.clone());
    Ok((StatusCode::CREATED, Json(user)))
}
