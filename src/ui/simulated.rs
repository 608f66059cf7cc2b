//! Stand-in for the backend calls the entry screens would make.
//!
//! There is no authentication service behind these screens; a request is
//! a fixed delay that always succeeds.

use crate::core::FormError;

/// Delay of a simulated request in milliseconds
pub const SIMULATED_LATENCY_MS: u32 = 1500;

/// Wait `latency_ms` in the browser, then resolve.
///
/// During server rendering there is nothing to wait for, so it resolves
/// immediately.
pub async fn simulated_request(latency_ms: u32) -> Result<(), FormError> {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(latency_ms).await;

    #[cfg(not(feature = "hydrate"))]
    let _ = latency_ms;

    Ok(())
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simulated_request_always_succeeds() {
        assert_eq!(simulated_request(SIMULATED_LATENCY_MS).await, Ok(()));
        assert_eq!(simulated_request(0).await, Ok(()));
    }
}
