//! Configuration file watcher for upstream hot reload.
//!
//! Only the upstream table is reloadable. Listener, timeout and limit changes
//! need a restart; the watcher logs when it sees them and keeps running.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::{GatewayConfig, UpstreamsConfig};

/// Watches the configuration file and emits new upstream tables.
pub struct ConfigWatcher {
    path: PathBuf,
    current: GatewayConfig,
    update_tx: mpsc::UnboundedSender<UpstreamsConfig>,
}

impl ConfigWatcher {
    /// Create a watcher for `path`, starting from the configuration already loaded.
    ///
    /// Returns the watcher and a receiver for upstream updates.
    pub fn new(
        path: &Path,
        current: GatewayConfig,
    ) -> (Self, mpsc::UnboundedReceiver<UpstreamsConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                current,
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching. The returned handle must be kept alive.
    ///
    /// The parent directory is watched rather than the file itself so that
    /// editors replacing the file atomically are still picked up.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let Self {
            path,
            mut current,
            update_tx,
        } = self;
        let watched_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name = path.file_name().map(|n| n.to_os_string());

        let handler_path = path.clone();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let event = match res {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::error!(error = %e, "Config watch error");
                        return;
                    }
                };
                if !(event.kind.is_modify() || event.kind.is_create()) {
                    return;
                }
                let touches_config = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
                if !touches_config {
                    return;
                }

                match load_config(&handler_path) {
                    Ok(next) => {
                        if let Some(upstreams) = reloadable_change(&current, &next) {
                            tracing::info!(
                                research = %upstreams.research.url,
                                script = %upstreams.script.url,
                                topics = %upstreams.topics.url,
                                "Upstream configuration reloaded"
                            );
                            let _ = update_tx.send(upstreams);
                        }
                        current = next;
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            "Failed to reload config, keeping current configuration"
                        );
                    }
                }
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&watched_dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?path, "Config watcher started");
        Ok(watcher)
    }
}

/// Compares two configurations and returns the new upstream table if it changed.
fn reloadable_change(current: &GatewayConfig, next: &GatewayConfig) -> Option<UpstreamsConfig> {
    if current.listener.bind_address != next.listener.bind_address
        || current.timeouts.request_secs != next.timeouts.request_secs
        || current.timeouts.upstream_secs != next.timeouts.upstream_secs
        || current.limits.max_body_bytes != next.limits.max_body_bytes
    {
        tracing::warn!("Listener, timeout or limit changes require a restart to take effect");
    }

    let changed = crate::gateway::Capability::ALL.iter().any(|&capability| {
        current.upstreams.endpoint(capability) != next.upstreams.endpoint(capability)
    });

    changed.then(|| next.upstreams.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::UpstreamConfig;

    #[test]
    fn unchanged_upstreams_are_not_reemitted() {
        let current = GatewayConfig::default();
        let mut next = GatewayConfig::default();
        next.observability.log_level = "debug".into();

        assert!(reloadable_change(&current, &next).is_none());
    }

    #[test]
    fn changed_upstream_is_emitted() {
        let current = GatewayConfig::default();
        let mut next = GatewayConfig::default();
        next.upstreams.script = UpstreamConfig::new("https://scripts.example.com/v2/script");

        let upstreams = reloadable_change(&current, &next).unwrap();
        assert_eq!(upstreams.script.url, "https://scripts.example.com/v2/script");
        assert_eq!(upstreams.research, current.upstreams.research);
    }
}
