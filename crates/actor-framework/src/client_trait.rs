//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get` and `list`
//! methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32 }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct NoteError(String);
///
/// impl From<String> for NoteError {
///     fn from(s: String) -> Self { NoteError(s) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type SortKey = u32;
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, _: NoteCreate, _: &()) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     fn sort_key(&self) -> u32 { self.id }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: NoteAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct NoteClient {
///     inner: ResourceClient<Note>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &ResourceClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         NoteError(e.to_string())
///     }
/// }
///
/// // get() and list() are provided automatically.
/// async fn usage(client: NoteClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity in sort-key order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
