//! Observer registry: fan-out of published snapshots.
//!
//! Callbacks run synchronously inside the publishing call and only ever see
//! `&GameState`, so they cannot reach back into the engine while it is
//! mid-operation.

use std::fmt;
use std::sync::mpsc;

use skirmish_core::state::GameState;

/// Callback invoked with every published snapshot.
pub type Observer = Box<dyn FnMut(&GameState) + Send>;

/// Handle returned by `subscribe`; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Subscriber {
    Callback(Observer),
    Channel(mpsc::Sender<GameState>),
}

/// All registered observers.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        self.insert(Subscriber::Callback(observer))
    }

    /// Push-model subscription: every snapshot is sent down the channel.
    /// Dropping the receiver ends the subscription at the next publish.
    pub fn subscribe_channel(&mut self) -> (SubscriptionId, mpsc::Receiver<GameState>) {
        let (tx, rx) = mpsc::channel();
        (self.insert(Subscriber::Channel(tx)), rx)
    }

    /// Returns false if the id was unknown or already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Deliver `state` to every subscriber. Disconnected channels are pruned.
    pub fn notify(&mut self, state: &GameState) {
        self.subscribers.retain_mut(|(_, subscriber)| match subscriber {
            Subscriber::Callback(callback) => {
                callback(state);
                true
            }
            Subscriber::Channel(tx) => tx.send(state.clone()).is_ok(),
        });
    }

    fn insert(&mut self, subscriber: Subscriber) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
