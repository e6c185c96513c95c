use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use business::domain::checkout::services::{PaymentError, PaymentGateway, PaymentRequest};

#[derive(Debug, Clone, Copy)]
pub struct PaymentSimulation {
    pub delay: Duration,
    /// Probability in `0.0..=1.0` that a charge is declined.
    pub failure_rate: f64,
}

impl Default for PaymentSimulation {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(100),
            failure_rate: 0.05,
        }
    }
}

/// Stand-in for a payment provider: waits, then declines a random share of charges.
pub struct SimulatedPaymentGateway {
    delay: Duration,
    failure_rate: f64,
}

impl SimulatedPaymentGateway {
    pub fn new(simulation: PaymentSimulation) -> Self {
        let failure_rate = if simulation.failure_rate.is_nan() {
            0.0
        } else {
            simulation.failure_rate.clamp(0.0, 1.0)
        };
        Self {
            delay: simulation.delay,
            failure_rate,
        }
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn charge(&self, request: &PaymentRequest) -> Result<(), PaymentError> {
        tokio::time::sleep(self.delay).await;

        let declined = rand::rng().random_bool(self.failure_rate);
        if declined {
            tracing::info!(
                "Simulated payment of {} via {} declined for basket {}",
                request.amount,
                request.method,
                request.basket_id
            );
            return Err(PaymentError::Declined);
        }

        tracing::debug!(
            "Simulated payment of {} via {} accepted for basket {}",
            request.amount,
            request.method,
            request.basket_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use business::domain::order::value_objects::PaymentMethod;
    use business::domain::shared::value_objects::UserId;
    use uuid::Uuid;

    fn request() -> PaymentRequest {
        PaymentRequest {
            user_id: UserId::generate(),
            basket_id: Uuid::new_v4(),
            amount: BigDecimal::from(42),
            method: PaymentMethod::new("credit_card").unwrap(),
        }
    }

    fn gateway(failure_rate: f64) -> SimulatedPaymentGateway {
        SimulatedPaymentGateway::new(PaymentSimulation {
            delay: Duration::ZERO,
            failure_rate,
        })
    }

    #[tokio::test]
    async fn should_always_accept_when_failure_rate_is_zero() {
        let gateway = gateway(0.0);

        for _ in 0..50 {
            assert!(gateway.charge(&request()).await.is_ok());
        }
    }

    #[tokio::test]
    async fn should_always_decline_when_failure_rate_is_one() {
        let gateway = gateway(1.0);

        let result = gateway.charge(&request()).await;

        assert!(matches!(result, Err(PaymentError::Declined)));
    }

    #[test]
    fn should_clamp_out_of_range_rates() {
        assert_eq!(gateway(7.5).failure_rate(), 1.0);
        assert_eq!(gateway(-0.3).failure_rate(), 0.0);
        assert_eq!(gateway(f64::NAN).failure_rate(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn should_wait_configured_delay_before_answering() {
        let gateway = SimulatedPaymentGateway::new(PaymentSimulation {
            delay: Duration::from_millis(100),
            failure_rate: 0.0,
        });
        let started = tokio::time::Instant::now();

        gateway.charge(&request()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(100));
    }
}
