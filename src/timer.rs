//! Cooperative timers: tokio on native, `setTimeout` in the browser.

use std::time::Duration;

use futures::future::{select, Either};
use tokio_util::sync::CancellationToken;

/// Returned when a wait was cut short by its cancellation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Sleep for `duration` (client-side)
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let ms = duration.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        } else {
            let _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Sleep for `duration` (native)
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Sleep unless `cancel` fires first.
pub async fn sleep_or_cancel(
    duration: Duration,
    cancel: &CancellationToken,
) -> Result<(), Cancelled> {
    if cancel.is_cancelled() {
        return Err(Cancelled);
    }
    let wait = Box::pin(sleep(duration));
    let cancelled = Box::pin(cancel.cancelled());
    match select(wait, cancelled).await {
        Either::Left(_) => Ok(()),
        Either::Right(_) => Err(Cancelled),
    }
}

pub fn millis(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn completes_when_not_cancelled() {
        let token = CancellationToken::new();
        assert_eq!(sleep_or_cancel(millis(1000), &token).await, Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_token_short_circuits() {
        let token = CancellationToken::new();
        token.cancel();
        let start = tokio::time::Instant::now();
        assert_eq!(sleep_or_cancel(millis(5000), &token).await, Err(Cancelled));
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_mid_wait() {
        let token = CancellationToken::new();
        let child = token.clone();
        let waiter = tokio::spawn(async move { sleep_or_cancel(millis(10_000), &child).await });

        tokio::time::sleep(millis(100)).await;
        token.cancel();

        assert_eq!(waiter.await.unwrap(), Err(Cancelled));
    }
}
