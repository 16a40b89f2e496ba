//! Transport implementations: in-process store interception and real HTTP.
//!
//! # Design
//! [`StoreTransport`] routes the client's requests straight into an owned
//! [`TodoStore`] and wraps the results in the same envelopes the axum
//! server produces, so identical client code runs with no server process.
//! [`HttpTransport`] executes the same requests over a socket via ureq
//! with status-as-error disabled, so 4xx/5xx responses come back as data
//! for the client to interpret.

use serde::Serialize;
use todo_client::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
use todo_store::{Envelope, Todo, TodoRequest, TodoStore};

/// Routes requests into an in-process [`TodoStore`], no socket involved.
///
/// Failure shapes match the server: unknown ids on update/delete ride an
/// HTTP 200 with an inner 404, storage I/O failures ride an inner 500, and
/// only malformed requests (bad id segment, undecodable body) produce a
/// non-2xx status.
pub struct StoreTransport {
    store: TodoStore,
}

enum Route {
    Collection,
    Record(u64),
    /// An id segment is present but does not parse; the server rejects
    /// these with a 400 before any handler runs.
    BadId,
}

impl StoreTransport {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    fn route(path: &str) -> Option<Route> {
        // Accept both bare paths and full URLs; everything before the API
        // prefix is host noise.
        let tail = match path.find("/api/todos") {
            Some(start) => &path[start + "/api/todos".len()..],
            None => return None,
        };
        match tail {
            "" | "/" => Some(Route::Collection),
            _ => {
                let id = tail.strip_prefix('/')?;
                Some(match id.parse() {
                    Ok(id) => Route::Record(id),
                    Err(_) => Route::BadId,
                })
            }
        }
    }
}

impl Transport for StoreTransport {
    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let Some(route) = Self::route(&request.path) else {
            return Ok(plain(404, "no such route"));
        };
        if matches!(route, Route::BadId) {
            return Ok(plain(400, "invalid record id"));
        }
        match (request.method, route) {
            (HttpMethod::Get, Route::Collection) => match self.store.list() {
                Ok(todos) => enveloped(Envelope::ok(todos)),
                Err(err) => enveloped::<Vec<Todo>>(Envelope::failure(500, err.to_string())),
            },
            (HttpMethod::Post, Route::Collection) => {
                let Some(fields) = decode_fields(request.body.as_deref()) else {
                    return Ok(plain(400, "invalid request body"));
                };
                match self.store.create(fields) {
                    Ok(todo) => enveloped(Envelope::ok(todo)),
                    Err(err) => enveloped::<Todo>(Envelope::failure(500, err.to_string())),
                }
            }
            (HttpMethod::Get, Route::Record(id)) => match self.store.get(id) {
                Ok(Some(todo)) => enveloped(Envelope::ok(todo)),
                Ok(None) => enveloped::<Todo>(Envelope::ok_empty()),
                Err(err) => enveloped::<Todo>(Envelope::failure(500, err.to_string())),
            },
            (HttpMethod::Put, Route::Record(id)) => {
                let Some(fields) = decode_fields(request.body.as_deref()) else {
                    return Ok(plain(400, "invalid request body"));
                };
                match self.store.update(id, fields) {
                    Ok(Some(todo)) => enveloped(Envelope::ok(todo)),
                    Ok(None) => enveloped::<Todo>(Envelope::not_found()),
                    Err(err) => enveloped::<Todo>(Envelope::failure(500, err.to_string())),
                }
            }
            (HttpMethod::Delete, Route::Record(id)) => match self.store.delete(id) {
                Ok(true) => enveloped::<Todo>(Envelope::ok_empty()),
                Ok(false) => enveloped::<Todo>(Envelope::not_found()),
                Err(err) => enveloped::<Todo>(Envelope::failure(500, err.to_string())),
            },
            _ => Ok(plain(405, "method not allowed")),
        }
    }
}

fn decode_fields(body: Option<&str>) -> Option<TodoRequest> {
    serde_json::from_str(body?).ok()
}

fn enveloped<T: Serialize>(envelope: Envelope<T>) -> Result<HttpResponse, TransportError> {
    let body =
        serde_json::to_string(&envelope).map_err(|err| TransportError::new(err.to_string()))?;
    Ok(HttpResponse {
        status: 200,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body,
    })
}

fn plain(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: Vec::new(),
        body: body.to_string(),
    }
}

/// Executes requests over real HTTP against a live store server.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    /// Status-as-error is disabled so the client sees 4xx/5xx responses as
    /// data; only connection-level failures become [`TransportError`].
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (request.method, request.body) {
            (HttpMethod::Get, _) => self.agent.get(&request.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.path).send_empty(),
        };
        let mut response = result.map_err(|err| TransportError::new(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|err| TransportError::new(err.to_string()))?;
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_client::{TodoApi, TodoRequest as ClientFields};

    fn api() -> TodoApi<StoreTransport> {
        TodoApi::new("", StoreTransport::new(TodoStore::in_memory()))
    }

    fn fields(text: &str) -> ClientFields {
        ClientFields {
            text: text.to_string(),
            done: false,
            deadline: 1_700_000_000_000,
        }
    }

    #[test]
    fn full_crud_cycle_without_a_server() {
        let mut api = api();
        assert!(api.list().unwrap().is_empty());

        let created = api.create(&fields("A")).unwrap();
        assert_eq!(created.id, 1);

        let fetched = api.get(1).unwrap();
        assert_eq!(fetched, created);

        let updated = api
            .update(
                1,
                &ClientFields {
                    text: "A2".to_string(),
                    done: true,
                    deadline: created.deadline,
                },
            )
            .unwrap();
        assert!(updated.done);

        api.delete(1).unwrap();
        assert!(api.list().unwrap().is_empty());
    }

    #[test]
    fn routes_full_urls_as_well_as_bare_paths() {
        let mut api = TodoApi::new(
            "http://store.internal",
            StoreTransport::new(TodoStore::in_memory()),
        );
        let created = api.create(&fields("via url")).unwrap();
        assert_eq!(api.get(created.id).unwrap().text, "via url");
    }

    #[test]
    fn unknown_id_failures_match_the_server_shapes() {
        let mut api = api();
        assert!(matches!(
            api.update(9, &fields("ghost")),
            Err(todo_client::ApiError::NotFound)
        ));
        assert!(matches!(
            api.delete(9),
            Err(todo_client::ApiError::NotFound)
        ));
        // An absent id on get is a success envelope without data.
        assert!(matches!(
            api.get(9),
            Err(todo_client::ApiError::MissingData)
        ));
    }

    /// Storage whose physical I/O always fails.
    struct BrokenStorage;

    impl todo_store::Storage for BrokenStorage {
        fn load(&self) -> std::io::Result<Option<String>> {
            Err(std::io::Error::other("disk unavailable"))
        }

        fn save(&mut self, _blob: &str) -> std::io::Result<()> {
            Err(std::io::Error::other("disk unavailable"))
        }
    }

    #[test]
    fn storage_failure_surfaces_as_an_inner_500_envelope() {
        let mut api = TodoApi::new("", StoreTransport::new(TodoStore::new(BrokenStorage)));
        match api.list().unwrap_err() {
            todo_client::ApiError::Envelope { code, message } => {
                assert_eq!(code, 500);
                assert!(message.contains("disk unavailable"));
            }
            other => panic!("expected Envelope error, got {other:?}"),
        }
    }

    #[test]
    fn bad_id_segment_is_a_400_like_the_server() {
        let mut transport = StoreTransport::new(TodoStore::in_memory());
        let response = transport
            .send(HttpRequest {
                method: HttpMethod::Get,
                path: "/api/todos/not-a-number".to_string(),
                headers: Vec::new(),
                body: None,
            })
            .unwrap();
        assert_eq!(response.status, 400);
    }

    #[test]
    fn unrelated_path_is_a_404() {
        let mut transport = StoreTransport::new(TodoStore::in_memory());
        let response = transport
            .send(HttpRequest {
                method: HttpMethod::Get,
                path: "/api/other".to_string(),
                headers: Vec::new(),
                body: None,
            })
            .unwrap();
        assert_eq!(response.status, 404);
    }

    #[test]
    fn undecodable_body_is_a_400() {
        let mut transport = StoreTransport::new(TodoStore::in_memory());
        let response = transport
            .send(HttpRequest {
                method: HttpMethod::Post,
                path: "/api/todos".to_string(),
                headers: Vec::new(),
                body: Some("{not json".to_string()),
            })
            .unwrap();
        assert_eq!(response.status, 400);
    }
}
