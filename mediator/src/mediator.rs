use std::{cell::RefCell, collections::HashMap, rc::Rc, slice::Iter};

use common::subject_observer::{observer_key, ObserverKey, SharedObserver};
use log::{debug, trace};
use strum::IntoEnumIterator;

use crate::{PartitionKey, Publisher, PublisherId};

struct Binding<K: PartitionKey> {
    observer: SharedObserver<Publisher<K>, K>,
    publisher: PublisherId,
}

/// Holds the observer to publisher bindings of one partition.
///
/// An observer is bound to at most one publisher per mediator; attaching it again
/// replaces its binding.
pub struct Mediator<K: PartitionKey> {
    key: K,
    bindings: RefCell<HashMap<ObserverKey, Binding<K>>>,
}

impl<K: PartitionKey> Mediator<K> {
    pub fn new(key: K) -> Self {
        Mediator {
            key,
            bindings: RefCell::new(HashMap::new()),
        }
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }

    /// Publisher the observer is currently bound to, if any.
    pub fn binding<O: ?Sized>(&self, observer: &Rc<O>) -> Option<PublisherId> {
        self.bindings
            .borrow()
            .get(&observer_key(observer))
            .map(|binding| binding.publisher)
    }

    pub fn attach(&self, observer: SharedObserver<Publisher<K>, K>, publisher: &Publisher<K>) {
        let binding = Binding {
            observer,
            publisher: publisher.id(),
        };
        let previous = self
            .bindings
            .borrow_mut()
            .insert(observer_key(&binding.observer), binding);
        match previous {
            Some(previous) if previous.publisher != publisher.id() => debug!(
                "Observer moved from {} to {} on {} mediator",
                previous.publisher,
                publisher.symbol(),
                self.key
            ),
            Some(_) => trace!(
                "Observer already bound to {} on {} mediator",
                publisher.symbol(),
                self.key
            ),
            None => debug!(
                "Observer bound to {} on {} mediator",
                publisher.symbol(),
                self.key
            ),
        }
    }

    /// Removes the observer whatever publisher it is bound to.
    ///
    /// Returns whether a binding existed.
    pub fn detach<O: ?Sized>(&self, observer: &Rc<O>) -> bool {
        let removed = self.bindings.borrow_mut().remove(&observer_key(observer));
        if let Some(binding) = &removed {
            debug!(
                "Observer unbound from {} on {} mediator",
                binding.publisher, self.key
            );
        }
        removed.is_some()
    }

    /// Updates the observers bound to `publisher` when the partition admits its value.
    ///
    /// Observers may attach or detach from within `update`. Each recipient is checked
    /// against the current bindings right before its callback, so an observer unbound
    /// earlier in the same pass is skipped.
    pub fn notify(&self, publisher: &Publisher<K>) {
        if !self.key.admits(publisher.value()) {
            return;
        }
        let recipients = self
            .bindings
            .borrow()
            .iter()
            .filter(|(_, binding)| binding.publisher == publisher.id())
            .map(|(key, binding)| (*key, binding.observer.clone()))
            .collect::<Vec<_>>();

        trace!(
            "Notifying {} observer(s) of {} on {} mediator",
            recipients.len(),
            publisher.symbol(),
            self.key
        );
        for (key, observer) in recipients {
            if !self.is_bound(key, publisher.id()) {
                trace!("Observer unbound during notification on {} mediator", self.key);
                continue;
            }
            observer.update(publisher, self.key);
        }
    }

    fn is_bound(&self, key: ObserverKey, publisher: PublisherId) -> bool {
        self.bindings
            .borrow()
            .get(&key)
            .is_some_and(|binding| binding.publisher == publisher)
    }
}

/// The mediators shared by every publisher of a partition, in registration order.
pub struct MediatorSet<K: PartitionKey> {
    mediators: Vec<Mediator<K>>,
}

impl<K: PartitionKey> MediatorSet<K> {
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        let mut mediators: Vec<Mediator<K>> = vec![];
        for key in keys {
            if mediators.iter().any(|mediator| mediator.key == key) {
                debug!("Ignoring duplicate {key} mediator");
                continue;
            }
            mediators.push(Mediator::new(key));
        }
        MediatorSet { mediators }
    }

    pub fn get(&self, key: K) -> Option<&Mediator<K>> {
        self.mediators.iter().find(|mediator| mediator.key == key)
    }

    pub fn iter(&self) -> Iter<'_, Mediator<K>> {
        self.mediators.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.mediators.iter().map(Mediator::key)
    }

    pub fn len(&self) -> usize {
        self.mediators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mediators.is_empty()
    }

    pub fn notify(&self, publisher: &Publisher<K>) {
        for mediator in &self.mediators {
            mediator.notify(publisher);
        }
    }
}

impl<K> MediatorSet<K>
where
    K: PartitionKey + IntoEnumIterator,
{
    /// One mediator per variant of `K`.
    pub fn every() -> Self {
        Self::new(K::iter())
    }
}

impl<'a, K: PartitionKey> IntoIterator for &'a MediatorSet<K> {
    type Item = &'a Mediator<K>;
    type IntoIter = Iter<'a, Mediator<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
