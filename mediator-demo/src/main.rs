use log::{debug, info};

use crate::{config::app::AppConfig, error::AppError};

mod config;
mod error;
mod scenario;

fn main() -> Result<(), AppError> {
    let config = AppConfig::new()?;
    config::log::init(&config.log_level)?;
    debug!("Running with configuration: {:?}", config);

    if config.scenario.runs_stock() {
        let investors = scenario::stock::run(
            &config.stock_symbol,
            config.opening_price,
            &config.price_moves,
        );
        for investor in investors {
            info!(
                "{} received {} notification(s)",
                investor.name(),
                investor.notification_count()
            );
        }
    }

    if config.scenario.runs_mail() {
        let subscribers = scenario::mail::run(&config.mail_site);
        for subscriber in subscribers {
            info!(
                "{} received {} notification(s)",
                subscriber.name(),
                subscriber.notification_count()
            );
        }
    }

    Ok(())
}
