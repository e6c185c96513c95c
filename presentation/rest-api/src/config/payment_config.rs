use std::env;
use std::time::Duration;

use payment::PaymentSimulation;

/// Simulated payment gateway settings
///
/// Environment variables:
/// - PAYMENT_DELAY_MS: artificial latency per charge (default: 100)
/// - PAYMENT_FAILURE_RATE: probability of a declined charge (default: 0.05)
///
/// Unparseable values fall back to the defaults.
pub fn payment_simulation_from_env() -> PaymentSimulation {
    payment_simulation_from(|key| env::var(key).ok())
}

fn payment_simulation_from(lookup: impl Fn(&str) -> Option<String>) -> PaymentSimulation {
    let defaults = PaymentSimulation::default();

    let delay = lookup("PAYMENT_DELAY_MS")
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(defaults.delay);
    let failure_rate = lookup("PAYMENT_FAILURE_RATE")
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(defaults.failure_rate);

    PaymentSimulation {
        delay,
        failure_rate,
    }
}
