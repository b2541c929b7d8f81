//! Simulated latency for actions that pretend to call a backend.

use std::thread;
use std::time::Duration;
use tracing::debug;

pub fn simulate_latency(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    debug!(delay_ms = delay.as_millis() as u64, "simulating request latency");
    thread::sleep(delay);
}

pub fn delay_from_millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
