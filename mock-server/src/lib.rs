//! In-memory stand-in for the public TODO API.
//!
//! Ids are decimal strings assigned sequentially, tasks list in id order,
//! and DELETE answers 200 with an empty object, matching the live service.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub user_id: String,
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// Body of POST and PUT. Any `id` in the payload is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    tasks: BTreeMap<u64, Task>,
}

impl Store {
    /// Seed with existing tasks. Ids that are not canonical decimals are skipped.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let tasks: BTreeMap<u64, Task> = tasks
            .into_iter()
            .filter_map(|t| canonical_id(&t.id).map(|n| (n, t)))
            .collect();
        let next_id = tasks.keys().next_back().copied().unwrap_or(0);
        Self { next_id, tasks }
    }

    /// `None` once the id space is exhausted.
    fn insert(&mut self, input: TaskInput) -> Option<Task> {
        self.next_id = self.next_id.checked_add(1)?;
        let task = Task {
            user_id: input.user_id,
            id: self.next_id.to_string(),
            title: input.title,
            completed: input.completed,
        };
        self.tasks.insert(self.next_id, task.clone());
        Some(task)
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(tasks: Vec<Task>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::with_tasks(tasks)));
    Router::new()
        .route("/todos", get(list_tasks).post(create_task))
        .route("/todos/{id}", get(get_task).put(update_task).delete(delete_task))
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Parse an id only in its canonical form, so `01` and `+1` miss.
fn canonical_id(id: &str) -> Option<u64> {
    id.parse::<u64>().ok().filter(|n| n.to_string() == id)
}

fn key(id: &str) -> Result<u64, StatusCode> {
    canonical_id(id).ok_or(StatusCode::NOT_FOUND)
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    let store = db.read().await;
    Json(store.tasks.values().cloned().collect())
}

async fn create_task(
    State(db): State<Db>,
    Json(input): Json<TaskInput>,
) -> Result<(StatusCode, Json<Task>), StatusCode> {
    let Some(task) = db.write().await.insert(input) else {
        warn!("task ids exhausted");
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    };
    debug!(id = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

async fn get_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Task>, StatusCode> {
    let key = key(&id)?;
    let store = db.read().await;
    store.tasks.get(&key).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_task(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TaskInput>,
) -> Result<Json<Task>, StatusCode> {
    let key = key(&id)?;
    let mut store = db.write().await;
    let task = store.tasks.get_mut(&key).ok_or(StatusCode::NOT_FOUND)?;
    task.user_id = input.user_id;
    task.title = input.title;
    task.completed = input.completed;
    Ok(Json(task.clone()))
}

async fn delete_task(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let key = key(&id)?;
    let mut store = db.write().await;
    store
        .tasks
        .remove(&key)
        .map(|_| Json(serde_json::json!({})))
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str) -> Task {
        Task {
            user_id: "1".to_string(),
            id: id.to_string(),
            title: format!("task {id}"),
            completed: false,
        }
    }

    fn input(title: &str) -> TaskInput {
        TaskInput {
            user_id: "1".to_string(),
            title: title.to_string(),
            completed: false,
        }
    }

    #[test]
    fn task_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(task("1")).unwrap();
        assert_eq!(json["userId"], "1");
        assert_eq!(json["id"], "1");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn task_input_defaults_completed_to_false() {
        let input: TaskInput =
            serde_json::from_str(r#"{"userId":"1","title":"No completed field"}"#).unwrap();
        assert!(!input.completed);
    }

    #[test]
    fn task_input_rejects_missing_title() {
        let result: Result<TaskInput, _> = serde_json::from_str(r#"{"userId":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_store_assigns_ids_from_one() {
        let mut store = Store::default();
        assert_eq!(store.insert(input("a")).unwrap().id, "1");
        assert_eq!(store.insert(input("b")).unwrap().id, "2");
    }

    #[test]
    fn seeded_store_continues_after_highest_id() {
        let mut store = Store::with_tasks(vec![task("3"), task("10"), task("bogus"), task("07")]);
        assert_eq!(store.tasks.len(), 2);
        assert_eq!(store.insert(input("next")).unwrap().id, "11");
    }

    #[test]
    fn exhausted_id_space_refuses_insert() {
        let mut store = Store::with_tasks(vec![task(&u64::MAX.to_string())]);
        assert!(store.insert(input("overflow")).is_none());
        assert_eq!(store.tasks.len(), 1);
        assert!(!store.tasks.contains_key(&0));
    }

    #[test]
    fn canonical_id_rejects_padded_and_signed_forms() {
        assert_eq!(canonical_id("1"), Some(1));
        assert_eq!(canonical_id("0"), Some(0));
        assert_eq!(canonical_id("01"), None);
        assert_eq!(canonical_id("+1"), None);
        assert_eq!(canonical_id(""), None);
    }
}
