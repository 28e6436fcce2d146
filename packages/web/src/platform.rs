//! Browser side effects with native fallbacks.

use std::time::Duration;

/// Sleep without blocking the UI thread.
pub async fn pause(duration: Duration) {
    #[cfg(feature = "web")]
    {
        gloo_timers::future::sleep(duration).await;
    }

    #[cfg(all(feature = "server", not(feature = "web")))]
    {
        tokio::time::sleep(duration).await;
    }

    #[cfg(not(any(feature = "web", feature = "server")))]
    {
        let _ = duration;
    }
}

/// Blocking user prompt.
pub fn alert(message: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(window) = web_sys::window() {
            window.alert_with_message(message).ok();
        }
    }

    #[cfg(not(feature = "web"))]
    {
        tracing::info!(message, "Prompt");
    }
}
