use std::rc::Rc;

/// Receives notifications from a subject of type `S`.
///
/// `event` carries whatever the subject considers the reason of the call;
/// for partitioned subjects it is the partition key that matched.
pub trait Observer<S, E> {
    fn update(&self, source: &S, event: E);
}

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

/// Identity of an observer handle, stable whatever trait object it is viewed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverKey(usize);

pub fn observer_key<T: ?Sized>(observer: &Rc<T>) -> ObserverKey {
    ObserverKey(Rc::as_ptr(observer) as *const () as usize)
}

/// A subject whose observers subscribe per partition key.
///
/// `None` as partition stands for every partition the subject knows.
pub trait Subject<K>: Sized {
    fn attach(&self, observer: SharedObserver<Self, K>, partition: Option<K>);
    fn detach<O: ?Sized>(&self, observer: &Rc<O>, partition: Option<K>);
    fn notify(&self);
}
