use std::{cell::RefCell, rc::Rc};

use common::subject_observer::{Observer, SharedObserver, Subject};
use log::{info, warn};
use mediator::{MediatorSet, PartitionKey, Publisher, PublisherId};
use strum::{Display, EnumIter, EnumString};

use crate::FeedError;

/// Price direction partition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
}

impl TryFrom<char> for Direction {
    type Error = FeedError;

    fn try_from(mode: char) -> Result<Self, Self::Error> {
        match mode {
            'U' | 'u' => Ok(Direction::Up),
            'D' | 'd' => Ok(Direction::Down),
            _ => Err(FeedError::UnknownMode(mode)),
        }
    }
}

/// Current price of a stock along with the one it replaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub previous: f64,
    pub current: f64,
}

impl Quote {
    pub fn opening(price: f64) -> Self {
        Quote {
            previous: price,
            current: price,
        }
    }

    pub fn moved_to(&self, price: f64) -> Self {
        Quote {
            previous: self.current,
            current: price,
        }
    }
}

impl PartitionKey for Direction {
    type Value = Quote;

    fn admits(&self, quote: &Quote) -> bool {
        match self {
            Direction::Up => quote.current > quote.previous,
            Direction::Down => quote.current < quote.previous,
        }
    }
}

pub type Stock = Publisher<Direction>;

pub fn listed(
    symbol: impl Into<String>,
    price: f64,
    mediators: &Rc<MediatorSet<Direction>>,
) -> Stock {
    Publisher::new(symbol, Quote::opening(price), mediators)
}

pub trait PriceFeed {
    fn price(&self) -> f64;

    fn last_price(&self) -> f64;

    fn set_price(&mut self, price: f64);

    /// Attaches to the `U`p or `D`own list; any other mode is logged and ignored.
    fn attach_mode(&self, observer: SharedObserver<Stock, Direction>, mode: char);

    fn detach_mode<O: ?Sized>(&self, observer: &Rc<O>, mode: char);
}

impl PriceFeed for Stock {
    fn price(&self) -> f64 {
        self.value().current
    }

    fn last_price(&self) -> f64 {
        self.value().previous
    }

    fn set_price(&mut self, price: f64) {
        self.update_value(|quote| quote.moved_to(price));
    }

    fn attach_mode(&self, observer: SharedObserver<Stock, Direction>, mode: char) {
        match Direction::try_from(mode) {
            Ok(direction) => self.attach(observer, Some(direction)),
            Err(err) => warn!("{err}"),
        }
    }

    fn detach_mode<O: ?Sized>(&self, observer: &Rc<O>, mode: char) {
        match Direction::try_from(mode) {
            Ok(direction) => self.detach(observer, Some(direction)),
            Err(err) => warn!("{err}"),
        }
    }
}

#[derive(Debug, Default)]
struct Holding {
    stock: Option<(PublisherId, String)>,
    price: Option<f64>,
    notifications: usize,
}

/// Observer caching the last price it was told about.
#[derive(Debug)]
pub struct Investor {
    name: String,
    holding: RefCell<Holding>,
}

impl Investor {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Investor {
            name: name.into(),
            holding: RefCell::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock_id(&self) -> Option<PublisherId> {
        self.holding.borrow().stock.as_ref().map(|(id, _)| *id)
    }

    pub fn stock_symbol(&self) -> Option<String> {
        self.holding
            .borrow()
            .stock
            .as_ref()
            .map(|(_, symbol)| symbol.clone())
    }

    pub fn price(&self) -> Option<f64> {
        self.holding.borrow().price
    }

    pub fn notification_count(&self) -> usize {
        self.holding.borrow().notifications
    }
}

impl Observer<Stock, Direction> for Investor {
    fn update(&self, stock: &Stock, _direction: Direction) {
        let price = stock.price();
        {
            let mut holding = self.holding.borrow_mut();
            holding.stock = Some((stock.id(), stock.symbol().to_string()));
            holding.price = Some(price);
            holding.notifications += 1;
        }
        info!(
            "Notified {} of {}'s change to {:.2}",
            self.name,
            stock.symbol(),
            price
        );
    }
}
