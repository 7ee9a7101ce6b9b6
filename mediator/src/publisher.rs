use std::{
    fmt::{self, Debug, Display, Formatter},
    rc::Rc,
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};

use common::subject_observer::{SharedObserver, Subject};
use log::warn;

use crate::{parse_key, Mediator, MediatorSet, PartitionKey};

static NEXT_PUBLISHER_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublisherId(u64);

impl Display for PublisherId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Named entity whose value changes are dispatched through a shared set of mediators.
pub struct Publisher<K: PartitionKey> {
    id: PublisherId,
    symbol: String,
    value: K::Value,
    mediators: Rc<MediatorSet<K>>,
}

impl<K: PartitionKey> Publisher<K> {
    pub fn new(
        symbol: impl Into<String>,
        value: K::Value,
        mediators: &Rc<MediatorSet<K>>,
    ) -> Self {
        Publisher {
            id: PublisherId(NEXT_PUBLISHER_ID.fetch_add(1, Ordering::Relaxed)),
            symbol: symbol.into(),
            value,
            mediators: Rc::clone(mediators),
        }
    }

    pub fn id(&self) -> PublisherId {
        self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn value(&self) -> &K::Value {
        &self.value
    }

    pub fn mediators(&self) -> &MediatorSet<K> {
        &self.mediators
    }

    /// Stores `value` then notifies every mediator before returning.
    pub fn set_value(&mut self, value: K::Value) {
        self.value = value;
        self.notify();
    }

    pub fn update_value<F>(&mut self, next: F)
    where
        F: FnOnce(&K::Value) -> K::Value,
    {
        let value = next(&self.value);
        self.set_value(value);
    }

    fn mediator(&self, key: K) -> Option<&Mediator<K>> {
        let mediator = self.mediators.get(key);
        if mediator.is_none() {
            warn!("No {key} mediator available for {}; ignoring", self.symbol);
        }
        mediator
    }
}

impl<K> Publisher<K>
where
    K: PartitionKey + FromStr,
{
    /// Attaches to the partition called `name`; an unknown name is logged and ignored.
    pub fn attach_named(&self, observer: SharedObserver<Self, K>, name: &str) {
        match parse_key(name) {
            Ok(key) => self.attach(observer, Some(key)),
            Err(err) => warn!("{err}; {} attachment ignored", self.symbol),
        }
    }

    pub fn detach_named<O: ?Sized>(&self, observer: &Rc<O>, name: &str) {
        match parse_key(name) {
            Ok(key) => self.detach(observer, Some(key)),
            Err(err) => warn!("{err}; {} detachment ignored", self.symbol),
        }
    }
}

impl<K: PartitionKey> Subject<K> for Publisher<K> {
    fn attach(&self, observer: SharedObserver<Self, K>, partition: Option<K>) {
        match partition {
            Some(key) => {
                if let Some(mediator) = self.mediator(key) {
                    mediator.attach(observer, self);
                }
            }
            None => {
                for mediator in &*self.mediators {
                    mediator.attach(observer.clone(), self);
                }
            }
        }
    }

    fn detach<O: ?Sized>(&self, observer: &Rc<O>, partition: Option<K>) {
        match partition {
            Some(key) => {
                if let Some(mediator) = self.mediator(key) {
                    mediator.detach(observer);
                }
            }
            None => {
                for mediator in &*self.mediators {
                    mediator.detach(observer);
                }
            }
        }
    }

    fn notify(&self) {
        self.mediators.notify(self);
    }
}

impl<K: PartitionKey> Debug for Publisher<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("id", &self.id)
            .field("symbol", &self.symbol)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
