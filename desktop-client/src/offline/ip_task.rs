use common::log;
use common::tools::ip_lookup::{display_text, fetch_public_ip};
use crate::config::IpLookupConfig;
use crate::state::{PublicIp, SharedState};

/// Runs the blocking lookup on the runtime's blocking pool and publishes the
/// address, or the fallback text on failure.
pub fn spawn_ip_lookup(shared_state: SharedState, config: &IpLookupConfig) {
    if !config.enabled {
        shared_state.set_public_ip(PublicIp::Disabled);
        return;
    }

    shared_state.set_public_ip(PublicIp::Loading);
    let url = config.url.clone();

    tokio::spawn(async move {
        log!("Looking up public IP via {}", url);
        let result = tokio::task::spawn_blocking(move || fetch_public_ip(&url))
            .await
            .unwrap_or_else(|e| Err(format!("IP lookup task failed: {}", e)));
        shared_state.set_public_ip(PublicIp::Resolved(display_text(&result)));
    });
}
