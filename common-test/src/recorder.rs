use std::{cell::RefCell, rc::Rc};

use common::subject_observer::Observer;

type Projection<S, E, T> = Box<dyn Fn(&S, E) -> T>;

/// Observer keeping a projection of every notification it receives.
pub struct Recorder<S, E, T> {
    project: Projection<S, E, T>,
    records: RefCell<Vec<T>>,
}

impl<S, E, T> Recorder<S, E, T> {
    pub fn new(project: impl Fn(&S, E) -> T + 'static) -> Rc<Self> {
        Rc::new(Recorder {
            project: Box::new(project),
            records: RefCell::new(vec![]),
        })
    }

    pub fn count(&self) -> usize {
        self.records.borrow().len()
    }

    /// Drains what has been recorded so far.
    pub fn take(&self) -> Vec<T> {
        self.records.take()
    }
}

impl<S, E, T: Clone> Recorder<S, E, T> {
    pub fn records(&self) -> Vec<T> {
        self.records.borrow().clone()
    }
}

impl<S, E, T> Observer<S, E> for Recorder<S, E, T> {
    fn update(&self, source: &S, event: E) {
        let record = (self.project)(source, event);
        self.records.borrow_mut().push(record);
    }
}
