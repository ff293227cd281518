//! Operations dashboard links and a live health probe.
//!
//! SYSTEM CONTEXT
//! ==============
//! The health check is unauthenticated and hits the unversioned base URL, so
//! it works even when the session has expired.

#[cfg(test)]
#[path = "monitoring_test.rs"]
mod monitoring_test;

use leptos::prelude::*;

use crate::config::{ApiConfig, monitoring_links};
use crate::net::error::ApiError;

/// Display text for a finished health check.
pub(crate) fn health_status_text(result: &Result<String, ApiError>) -> String {
    match result {
        Ok(body) if body.trim().is_empty() => "Healthy".to_owned(),
        Ok(body) => format!("Healthy: {}", body.trim()),
        Err(ApiError::Http { message, .. }) => message.clone(),
        Err(e) => format!("Health check failed: {e}"),
    }
}

#[component]
pub fn MonitoringLinks() -> impl IntoView {
    let health_url = ApiConfig::from_env().health_url();
    let status = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_check = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        status.set(Some("Checking...".to_owned()));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::browser_client().health_check().await;
            if let Err(e) = &result {
                leptos::logging::warn!("health check failed: {e}");
            }
            status.set(Some(health_status_text(&result)));
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let result = Err(ApiError::Network("not available outside the browser".to_owned()));
            status.set(Some(health_status_text(&result)));
            busy.set(false);
        }
    };

    view! {
        <section class="monitoring-links">
            <h2>"Monitoring"</h2>
            <div class="links-grid">
                {monitoring_links()
                    .into_iter()
                    .map(|link| view! {
                        <a href=link.url target="_blank" rel="noopener noreferrer" class="monitoring-link">
                            {link.label}
                        </a>
                    })
                    .collect_view()}
                <a href=health_url target="_blank" rel="noopener noreferrer" class="monitoring-link">
                    "Health endpoint"
                </a>
            </div>
            <button class="health-check-btn" on:click=on_check disabled=move || busy.get()>
                "Check health"
            </button>
            <Show when=move || status.get().is_some()>
                <p class="health-status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
