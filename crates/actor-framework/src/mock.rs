//! # Mock Clients for Testing
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of scripted expectations instead of a running actor. Use it to test logic that sits
//! *around* a client (domain wrappers, screens, handlers) without spawning the actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Determinism** | Fully scripted | Real state, real ordering |
//! | **Error Injection** | Easy (`return_err`) | Needs specific state |
//! | **Use Case** | Logic around the client | The actor itself or the full system |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Job { id: u32 }
//! #[derive(Debug)] struct JobCreate;
//! #[derive(Debug)] struct JobUpdate;
//! #[derive(Debug)] enum JobAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct JobError;
//!
//! #[async_trait]
//! impl ActorEntity for Job {
//!     type Id = u32; type Create = JobCreate; type Update = JobUpdate;
//!     type Action = JobAction; type ActionResult = (); type Context = ();
//!     type SortKey = u32; type Error = JobError;
//!     fn from_create_params(id: u32, _: JobCreate, _: &()) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     fn sort_key(&self) -> u32 { self.id }
//!     async fn on_update(&mut self, _: JobUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: JobAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Job>::new();
//!     let client = mock.client();
//!
//!     mock.expect_list().return_ok(vec![Job { id: 1 }]);
//!     mock.expect_get(7).return_err(FrameworkError::ActorClosed);
//!
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//!     assert!(matches!(client.get(7).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For finer control, [`create_mock_client`] returns the raw request receiver and the
//! `expect_*` helpers pull typed requests off it so a test can answer them by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply for one expected request.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

struct MockState<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

fn reply<R>(
    respond_to: oneshot::Sender<Result<R, FrameworkError>>,
    response: Result<R, FrameworkError>,
) {
    let _ = respond_to.send(response);
}

/// Short description of a request for mismatch reports.
fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("create {params:?}"),
        ResourceRequest::Get { id, .. } => format!("get {id}"),
        ResourceRequest::List { .. } => "list".to_string(),
        ResourceRequest::Update { id, update, .. } => format!("update {id} {update:?}"),
        ResourceRequest::Action { id, action, .. } => format!("action {id} {action:?}"),
    }
}

fn check_id<Id: PartialEq + std::fmt::Debug>(
    failures: &mut Vec<String>,
    op: &str,
    expected: &Id,
    actual: &Id,
) {
    if expected != actual {
        failures.push(format!("{op}: expected id {expected:?}, got {actual:?}"));
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request that does not match
/// the next expectation is dropped unanswered (the caller sees `ActorDropped`) and recorded;
/// [`MockClient::verify`] panics with every recorded mismatch.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    state: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let state: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            failures: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut guard = task_state.lock().unwrap_or_else(|e| e.into_inner());
                let MockState {
                    expectations,
                    failures,
                } = &mut *guard;

                match (request, expectations.pop_front()) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: want, response }),
                    ) => {
                        check_id(failures, "get", &want, &id);
                        reply(respond_to, response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        reply(respond_to, response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        reply(respond_to, response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        check_id(failures, "update", &want, &id);
                        reply(respond_to, response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        check_id(failures, "action", &want, &id);
                        reply(respond_to, response);
                    }
                    (request, None) => {
                        failures.push(format!("unexpected request: {}", describe(&request)));
                    }
                    (request, Some(_)) => {
                        failures.push(format!(
                            "request does not match expectation: {}",
                            describe(&request)
                        ));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &mut self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            state: self.state.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met and every request matched.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if !state.failures.is_empty() {
            panic!("Mock mismatches: {}", state.failures.join("; "));
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    state: Shared<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.expectations.push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test drives the conversation itself: pull a request with one of the `expect_*`
/// helpers, assert on its payload, and answer through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Takes the next request if it is a List request.
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Takes the next request if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Takes the next request if it is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Takes the next request if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Dish {
        id: u32,
        name: String,
    }

    #[derive(Debug)]
    struct DishCreate {
        name: String,
    }

    #[derive(Debug)]
    struct DishUpdate;

    #[derive(Debug)]
    enum DishAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Dish error")]
    struct DishError;

    #[async_trait]
    impl ActorEntity for Dish {
        type Id = u32;
        type Create = DishCreate;
        type Update = DishUpdate;
        type Action = DishAction;
        type ActionResult = ();
        type Context = ();
        type SortKey = u32;
        type Error = DishError;

        fn from_create_params(id: u32, params: DishCreate, _ctx: &()) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
            })
        }

        fn sort_key(&self) -> u32 {
            self.id
        }

        async fn on_update(&mut self, _update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: DishAction,
            _ctx: &(),
        ) -> Result<(), Self::Error> {
            match action {}
        }
    }

    fn dish(id: u32, name: &str) -> Dish {
        Dish {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn raw_channel_create_round() {
        let (client, mut receiver) = create_mock_client::<Dish>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(DishCreate {
                    name: "Pudim".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Pudim");
        responder.send(Ok(dish(1, "Pudim"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created, dish(1, "Pudim"));
    }

    #[tokio::test]
    async fn scripted_replies_in_order() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_create().return_ok(dish(1, "Brigadeiro"));
        mock.expect_list().return_ok(vec![dish(1, "Brigadeiro")]);
        mock.expect_get(2).return_ok(None);

        let client = mock.client();
        let created = client
            .create(DishCreate {
                name: "Brigadeiro".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(client.list().await.unwrap(), vec![dish(1, "Brigadeiro")]);
        assert!(client.get(2).await.unwrap().is_none());

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "expected id")]
    async fn verify_reports_wrong_id() {
        let mut mock = MockClient::<Dish>::new();
        mock.expect_get(1).return_ok(None);

        let _ = mock.client().get(2).await;
        mock.verify();
    }

    #[tokio::test]
    async fn unscripted_request_is_dropped() {
        let mock = MockClient::<Dish>::new();
        let result = mock.client().list().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
