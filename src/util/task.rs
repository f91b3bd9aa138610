use std::{collections::HashMap, future::Future};
use tokio::task::JoinHandle;

/// Background tasks keyed by purpose. Spawning under a key that is still
/// running aborts the older task.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<F>(&mut self, key: &'static str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.tasks.insert(key, tokio::spawn(task)) {
            handle.abort();
        }
    }

    pub fn abort(&mut self, key: &str) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn respawning_a_key_aborts_the_previous_task() {
        let mut tasks = TaskManager::new();
        let (tx, rx) = flume::unbounded();

        let slow_tx = tx.clone();
        tasks.spawn("work", async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = slow_tx.send("slow");
        });
        tasks.spawn("work", async move {
            let _ = tx.send("fast");
        });

        assert_eq!(rx.recv_async().await, Ok("fast"));
        assert!(rx.recv_async().await.is_err());
    }

    #[tokio::test]
    async fn abort_stops_the_task() {
        let mut tasks = TaskManager::new();
        let (tx, rx) = flume::unbounded::<&str>();
        tasks.spawn("sleep", async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = tx.send("woke");
        });

        tasks.abort("sleep");
        tasks.abort("missing");

        assert!(rx.recv_async().await.is_err());
    }
}
