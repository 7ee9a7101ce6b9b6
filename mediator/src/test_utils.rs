use std::rc::Rc;

use common::subject_observer::Observer;
use mockall::mock;
use strum::{Display, EnumIter, EnumString};

use crate::{MediatorSet, PartitionKey, Publisher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Sign {
    Positive,
    Negative,
}

impl PartitionKey for Sign {
    type Value = i32;

    fn admits(&self, value: &i32) -> bool {
        match self {
            Sign::Positive => *value > 0,
            Sign::Negative => *value < 0,
        }
    }
}

mock! {
    pub Listener {}

    impl Observer<Publisher<Sign>, Sign> for Listener {
        fn update(&self, source: &Publisher<Sign>, event: Sign);
    }
}

pub fn sign_mediators() -> Rc<MediatorSet<Sign>> {
    Rc::new(MediatorSet::every())
}
