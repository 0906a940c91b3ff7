// Localize API Server - serves the rewards catalog over the facade's
// REST-shaped contract.

use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use localize::{app_state::AppState, config::Config, http::create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize application state
    let state = AppState::new(config.clone());

    // Build the application router
    let app = create_router(state).layer(
        ServiceBuilder::new().layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        ),
    );

    let addr = config.server_address();
    println!("🚀 Localize server starting on http://{}", addr);
    println!("📋 API Documentation:");
    println!("  GET  /api/user                      - Current user");
    println!("  GET  /api/user/interactions         - Interaction history");
    println!("  GET  /api/businesses?q=&category=   - Businesses with products");
    println!("  GET  /api/businesses/{{id}}           - One business");
    println!("  POST /api/businesses/{{id}}/checkin   - Check in (+25 points)");
    println!("  GET  /api/events                    - Upcoming events");
    println!("  GET  /api/events/{{id}}               - One event");
    println!("  POST /api/events/{{id}}/attend        - Attend an event");
    println!("  GET  /api/discounts                 - Featured discounts");
    println!("  POST /api/discounts/{{id}}/redeem     - Redeem a discount");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
