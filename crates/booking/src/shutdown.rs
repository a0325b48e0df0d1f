//! Operator cancellation signal shared by the gate and the retry loop

use tokio::sync::watch;

/// Receiving half of the cancellation signal; `true` means stop
pub type Shutdown = watch::Receiver<bool>;

/// Create a cancellation signal, initially not cancelled
pub fn shutdown_channel() -> (watch::Sender<bool>, Shutdown) {
    watch::channel(false)
}

pub(crate) fn is_cancelled(shutdown: &Shutdown) -> bool {
    *shutdown.borrow()
}

/// Resolves once cancellation is requested
///
/// Never resolves if every sender is gone without cancelling.
pub(crate) async fn cancelled(shutdown: &mut Shutdown) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_resolves_on_signal() {
        let (tx, mut rx) = shutdown_channel();
        assert!(!is_cancelled(&rx));

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(3)).await;
            let _ = tx.send(true);
        });

        cancelled(&mut rx).await;
        assert!(is_cancelled(&rx));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_sender_never_cancels() {
        let (tx, mut rx) = shutdown_channel();
        drop(tx);

        let result = tokio::time::timeout(Duration::from_secs(60), cancelled(&mut rx)).await;
        assert!(result.is_err());
    }
}
