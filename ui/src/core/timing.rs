//! One-shot timer facade shared by wasm and native builds.
//!
//! The only asynchronous suspension point in the app (the simulated
//! consultation submission) sleeps through here, so platform differences
//! stay out of the state machine.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sleep_resolves() {
        sleep_ms(1).await;
    }
}
