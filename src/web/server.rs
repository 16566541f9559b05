use anyhow::Result;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::web::routes;
use crate::web::state::AppState;

pub async fn run_server(host: &str, port: u16, state: AppState) -> Result<()> {
    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr).await?;

    println!("Poster search API running at http://{addr}/api");
    println!("Health check: http://{addr}/api/health");
    println!();
    println!("Press Ctrl+C to stop the server");

    serve(listener, state).await
}

/// Serve the API on an already bound listener.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let app = routes::create_routes(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    info!(addr = %listener.local_addr()?, "HTTP server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
