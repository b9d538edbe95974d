//! # Resource Actor
//!
//! [`ResourceActor`] owns a keyed container of entities and answers requests one at a time
//! on its own task. Nothing else can reach the container, so it needs no lock.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Boxed id generator owned by the actor.
type IdGenerator<Id> = Box<dyn FnMut() -> Id + Send>;

/// A stored entity plus the sequence number of its last sort-key write.
struct Slot<T> {
    seq: u64,
    item: T,
}

/// Store half of a resource: the entities plus the receiving end of the request channel.
///
/// A request always runs to completion before the next one is looked at.
///
/// Build it with `ResourceActor::new()`, which also returns the client, then spawn
/// `actor.run(context)` with the dependencies the entity hooks need.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32, rank: u32 }
/// #[derive(Debug)] struct TicketCreate { rank: u32 }
/// #[derive(Debug)] struct TicketUpdate;
/// #[derive(Debug)] enum TicketAction {}
/// #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
///
/// #[async_trait]
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = TicketCreate;
///     type Update = TicketUpdate;
///     type Action = TicketAction;
///     type ActionResult = ();
///     type Context = ();
///     type SortKey = u32;
///     type Error = TicketError;
///
///     fn from_create_params(id: u32, p: TicketCreate, _: &()) -> Result<Self, Self::Error> {
///         Ok(Self { id, rank: p.rank })
///     }
///     fn sort_key(&self) -> u32 { self.rank }
///     async fn on_update(&mut self, _: TicketUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: TicketAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Ticket>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run(()));
///
///     client.create(TicketCreate { rank: 2 }).await.unwrap();
///     client.create(TicketCreate { rank: 1 }).await.unwrap();
///     let ranks: Vec<u32> = client.list().await.unwrap().iter().map(|t| t.rank).collect();
///     assert_eq!(ranks, vec![1, 2]);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: draws a fresh id from the generator, builds the entity with
///   `T::from_create_params`, runs `on_create`, stores it and returns a copy.
/// * **Get**: clone of the entity, or `None`.
/// * **List**: every entity, sorted by `(sort_key, seq)`.
/// * **Update** / **Action**: run the hook on the stored entity. If the hook changed the
///   sort key, the entity gets a new sequence number so it sorts after every entity whose
///   key it now ties with.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, Slot<T>>,
    next_id: IdGenerator<T::Id>,
    next_seq: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `next_id` - Generator for entity ids. Ids already present in the store are skipped.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Box::new(next_id),
            next_seq: 0,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn fresh_id(&mut self) -> T::Id {
        loop {
            let id = (self.next_id)();
            if !self.store.contains_key(&id) {
                return id;
            }
        }
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn sorted(&self) -> Vec<T> {
        let mut slots: Vec<&Slot<T>> = self.store.values().collect();
        slots.sort_by(|a, b| {
            a.item
                .sort_key()
                .cmp(&b.item.sort_key())
                .then(a.seq.cmp(&b.seq))
        });
        slots.into_iter().map(|slot| slot.item.clone()).collect()
    }

    /// Re-stamps the slot's sequence when a hook moved its sort key.
    fn restamp_if_moved(&mut self, id: &T::Id, before: &T::SortKey) {
        let moved = self
            .store
            .get(id)
            .is_some_and(|slot| slot.item.sort_key() != *before);
        if moved {
            let seq = self.bump_seq();
            if let Some(slot) = self.store.get_mut(id) {
                slot.seq = seq;
            }
        }
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies that were created *after* the actor was instantiated
    /// but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "order_queue::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.fresh_id();

                    match T::from_create_params(id.clone(), params, &context) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            let seq = self.bump_seq();
                            self.store.insert(
                                id.clone(),
                                Slot {
                                    seq,
                                    item: item.clone(),
                                },
                            );
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).map(|slot| slot.item.clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self.sorted();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(slot) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let before = slot.item.sort_key();
                    // Hooks mutate a copy so a failed update leaves the stored entity untouched.
                    let mut item = slot.item.clone();
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    slot.item = item.clone();
                    self.restamp_if_moved(&id, &before);
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(slot) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let before = slot.item.sort_key();
                    let mut item = slot.item.clone();
                    match item.handle_action(action, &context).await {
                        Ok(result) => {
                            slot.item = item;
                            self.restamp_if_moved(&id, &before);
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ =
                                respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Card {
        id: u32,
        label: String,
        slot: u32,
    }

    #[derive(Debug)]
    struct CardCreate {
        label: String,
        slot: u32,
    }

    #[derive(Debug)]
    struct CardUpdate {
        label: String,
    }

    #[derive(Debug)]
    enum CardAction {
        MoveTo(u32),
        Reject,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("card rejected")]
    struct CardError;

    #[async_trait]
    impl ActorEntity for Card {
        type Id = u32;
        type Create = CardCreate;
        type Update = CardUpdate;
        type Action = CardAction;
        type ActionResult = u32;
        type Context = ();
        type SortKey = u32;
        type Error = CardError;

        fn from_create_params(id: u32, params: CardCreate, _ctx: &()) -> Result<Self, CardError> {
            Ok(Self {
                id,
                label: params.label,
                slot: params.slot,
            })
        }

        fn sort_key(&self) -> u32 {
            self.slot
        }

        async fn on_update(&mut self, update: CardUpdate, _ctx: &()) -> Result<(), CardError> {
            self.label = update.label;
            Ok(())
        }

        async fn handle_action(&mut self, action: CardAction, _ctx: &()) -> Result<u32, CardError> {
            match action {
                CardAction::MoveTo(slot) => {
                    self.slot = slot;
                    Ok(slot)
                }
                CardAction::Reject => {
                    self.slot = 999;
                    Err(CardError)
                }
            }
        }
    }

    fn spawn_cards() -> ResourceClient<Card> {
        let mut next = 0;
        let (actor, client) = ResourceActor::<Card>::new(16, move || {
            next += 1;
            next
        });
        tokio::spawn(actor.run(()));
        client
    }

    async fn labels(client: &ResourceClient<Card>) -> Vec<String> {
        client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.label)
            .collect()
    }

    async fn create(client: &ResourceClient<Card>, label: &str, slot: u32) -> Card {
        client
            .create(CardCreate {
                label: label.into(),
                slot,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn list_sorts_by_key_then_insertion() {
        let client = spawn_cards();
        create(&client, "b1", 2).await;
        create(&client, "a", 1).await;
        create(&client, "b2", 2).await;
        create(&client, "b3", 2).await;

        assert_eq!(labels(&client).await, vec!["a", "b1", "b2", "b3"]);
    }

    #[tokio::test]
    async fn action_that_moves_key_goes_behind_ties() {
        let client = spawn_cards();
        let first = create(&client, "first", 5).await;
        create(&client, "second", 7).await;

        // Lands on the same key as "second" but was written later.
        client
            .perform_action(first.id, CardAction::MoveTo(7))
            .await
            .unwrap();
        assert_eq!(labels(&client).await, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn update_that_keeps_key_keeps_position() {
        let client = spawn_cards();
        let first = create(&client, "first", 1).await;
        create(&client, "second", 1).await;

        let updated = client
            .update(
                first.id,
                CardUpdate {
                    label: "renamed".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.label, "renamed");
        assert_eq!(labels(&client).await, vec!["renamed", "second"]);
    }

    #[tokio::test]
    async fn failed_action_leaves_entity_untouched() {
        let client = spawn_cards();
        let card = create(&client, "keep", 3).await;

        let result = client.perform_action(card.id, CardAction::Reject).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));

        let stored = client.get(card.id).await.unwrap().unwrap();
        assert_eq!(stored, card);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let client = spawn_cards();
        create(&client, "only", 1).await;

        let update = client.update(42, CardUpdate { label: "x".into() }).await;
        assert!(matches!(update, Err(ref e) if e.is_not_found()));

        let action = client.perform_action(42, CardAction::MoveTo(0)).await;
        assert!(matches!(action, Err(FrameworkError::NotFound(_))));

        assert_eq!(labels(&client).await, vec!["only"]);
    }

    #[tokio::test]
    async fn colliding_generator_ids_are_skipped() {
        let mut calls = 0;
        let (actor, client) = ResourceActor::<Card>::new(4, move || {
            calls += 1;
            // 1, 1, 2, 2, ...
            (calls + 1) / 2
        });
        tokio::spawn(actor.run(()));

        let a = create(&client, "a", 0).await;
        let b = create(&client, "b", 0).await;
        assert_ne!(a.id, b.id);
    }
}
