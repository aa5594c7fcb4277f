//! Headless demo binary: sign in via a cached session, stream
//! notifications to the log until Ctrl-C.

use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gigboard_client::{App, ClientConfig};
use gigboard_realtime::RealtimeEvent;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gigboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, ws_url = %config.ws_url, "Gigboard client starting");

    let app = App::new(&config).expect("Failed to build the HTTP client");
    match app.startup().await {
        Some(user) => tracing::info!(user_id = %user.id, name = %user.name, "Session resumed"),
        None => tracing::info!("No active session; sign in against the API to join the push channel"),
    }

    let mut alerts = app.alerts();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl-C received, shutting down");
                break;
            }
            event = alerts.recv() => match event {
                Ok(RealtimeEvent::Connected) => {
                    tracing::info!("Push channel connected");
                }
                Ok(RealtimeEvent::Disconnected) => {
                    tracing::info!("Push channel disconnected");
                }
                Ok(RealtimeEvent::Notification(n)) => {
                    let unread = app.store().notifications.snapshot().await.unread_count;
                    tracing::info!(
                        notification_id = %n.id,
                        route = ?n.click_route(),
                        unread,
                        "{}",
                        n.message,
                    );
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notification events lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    app.shutdown().await;
}
