//! # Mock Stores
//!
//! Two ways to test code that sits on top of a [`ResourceClient`] without a
//! real store.
//!
//! ## Scripted replies: [`MockClient`]
//!
//! Queue the replies the code under test should see, in order. Each request
//! pops the next expectation; a request of the wrong kind, or for a different
//! id, fails the mock (the caller then sees `ActorDropped`). Call
//! [`MockClient::verify`] at the end to make sure every reply was consumed.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Product>::new();
//! mock.expect_get(ProductId(1)).return_ok(Some(comic.clone()));
//! mock.expect_update(ProductId(1))
//!     .return_err(FrameworkError::EntityError(Box::new(ProductError::DatabaseError("disk full".into()))));
//!
//! let client = ProductClient::new(mock.client());
//! // ... drive the code under test ...
//! mock.verify();
//! ```
//!
//! Scripted replies are the easy way to reach failure paths that a real store
//! only produces under specific data, e.g. the second write of a multi-record
//! workflow failing after the first one succeeded.
//!
//! ## Raw channel: [`create_mock_client`]
//!
//! Returns a client and the receiving end of its channel. The test pulls
//! requests with [`expect_create`], [`expect_get`], [`expect_update`] or
//! [`expect_action`], inspects the payload, and answers through the returned
//! responder. Useful when the payload itself is what the test asserts on.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// SCRIPTED REPLIES
// =============================================================================

enum Reply<T: ActorEntity> {
    Get(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Create(Result<T::Id, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Action(Result<T::ActionResult, FrameworkError>),
}

struct Expectation<T: ActorEntity> {
    /// `None` for requests that carry no id (create, list).
    id: Option<T::Id>,
    reply: Reply<T>,
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    // A poisoned queue only means an earlier test assertion panicked.
    queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn check_id<T: ActorEntity>(expected: &Option<T::Id>, actual: &T::Id) {
    if let Some(expected) = expected {
        assert_eq!(expected, actual, "mock store: request for unexpected id");
    }
}

fn kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
        ResourceRequest::Action { .. } => "action",
    }
}

fn send<R>(respond_to: Response<R>, reply: Result<R, FrameworkError>) {
    let _ = respond_to.send(reply);
}

/// A client backed by a queue of scripted replies.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with an empty script. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = lock(&queue).pop_front();
                let Some(Expectation { id, reply }) = next else {
                    panic!("mock store: unexpected {} request", kind(&request));
                };

                match (request, reply) {
                    (ResourceRequest::Get { id: got, respond_to }, Reply::Get(r)) => {
                        check_id::<T>(&id, &got);
                        send(respond_to, r);
                    }
                    (ResourceRequest::List { respond_to }, Reply::List(r)) => send(respond_to, r),
                    (ResourceRequest::Create { respond_to, .. }, Reply::Create(r)) => {
                        send(respond_to, r)
                    }
                    (ResourceRequest::Update { id: got, respond_to, .. }, Reply::Update(r)) => {
                        check_id::<T>(&id, &got);
                        send(respond_to, r);
                    }
                    (ResourceRequest::Delete { id: got, respond_to }, Reply::Delete(r)) => {
                        check_id::<T>(&id, &got);
                        send(respond_to, r);
                    }
                    (ResourceRequest::Action { id: got, respond_to, .. }, Reply::Action(r)) => {
                        check_id::<T>(&id, &got);
                        send(respond_to, r);
                    }
                    (request, _) => {
                        panic!(
                            "mock store: {} request does not match the next expectation",
                            kind(&request)
                        );
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &mut self,
        id: Option<T::Id>,
        wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Some(id), Reply::Get)
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, Reply::List)
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(None, Reply::Create)
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(Some(id), Reply::Update)
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id), Reply::Delete)
    }

    /// Expects an `action` on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(Some(id), Reply::Action)
    }

    /// Number of scripted replies not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.expectations).len()
    }

    /// Panics unless every scripted reply was consumed.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Completes an expectation with the reply the store should give.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<T::Id>,
    wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Replies with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Replies with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, result: Result<R, FrameworkError>) {
        let expectation = Expectation {
            id: self.id,
            reply: (self.wrap)(result),
        };
        lock(&self.expectations).push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Update.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next request, if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
