use std::rc::Rc;

use common::subject_observer::Subject;
use feeds::stock::{listed, Investor, PriceFeed, Stock};
use log::info;
use mediator::MediatorSet;

fn play(stock: &mut Stock, price_moves: &[f64]) {
    for &price in price_moves {
        stock.set_price(price);
    }
}

/// Moves two investors between the up and down lists of one stock while its price
/// replays `price_moves` three times.
pub fn run(symbol: &str, opening_price: f64, price_moves: &[f64]) -> Vec<Rc<Investor>> {
    let mediators = Rc::new(MediatorSet::every());
    let ahmet = Investor::new("Ahmet");
    let berna = Investor::new("Berna");

    let mut stock = listed(symbol, opening_price, &mediators);
    stock.attach_mode(ahmet.clone(), 'U');
    stock.attach_mode(berna.clone(), 'D');
    play(&mut stock, price_moves);

    info!("Moving {} from Down to Up notification list", berna.name());
    stock.detach_mode(&berna, 'D');
    stock.attach_mode(berna.clone(), 'U');
    play(&mut stock, price_moves);

    info!("Removing {} from all notification lists", ahmet.name());
    stock.detach(&ahmet, None);
    play(&mut stock, price_moves);

    vec![ahmet, berna]
}
