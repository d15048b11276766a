use community_platform::{AppState, AppConfig};
use community_platform::routes::create_routes;
use community_platform::models::{Article, Chapter, Extract, Licence, Part, Tutorial, TutorialBody};
use chrono::Utc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use std::net::SocketAddr;
use uuid::Uuid;

fn sample_tutorial() -> community_platform::Result<Tutorial> {
    let mut ownership = Chapter::new(
        "La possession",
        "Chaque valeur a un unique propriétaire.",
        "Vous savez maintenant qui possède quoi.",
        1,
    );
    ownership.insert_extract(Extract::new("Le déplacement", "Affecter une valeur la déplace.", 1))?;
    ownership.insert_extract(Extract::new("Les emprunts", "Une référence emprunte sans posséder.", 2))?;

    let mut basics = Part::new("Les bases", "Premiers pas.", "Fin des bases.", 1);
    basics.insert_chapter(Chapter::new("Variables", "Déclarer avec let.", "", 1))?;
    basics.insert_chapter(ownership)?;

    let mut tutorial = Tutorial {
        pk: Uuid::new_v4(),
        title: "Apprenez à programmer en Rust".to_string(),
        description: "Un tutoriel pour débuter".to_string(),
        introduction: "Bienvenue !".to_string(),
        conclusion: "À bientôt.".to_string(),
        licence: Some(Licence { code: "CC BY-SA".to_string(), title: "Creative Commons BY-SA".to_string() }),
        authors: vec![],
        body: TutorialBody::Big(Vec::new()),
        created_at: Utc::now(),
    };
    tutorial.insert_part(basics)?;
    Ok(tutorial)
}

/// Populate the store with sample content so the export endpoints have data on startup
async fn populate_sample_content(app_state: &AppState) {
    info!("Populating sample content for export...");

    let article = Article {
        pk: Uuid::new_v4(),
        title: "Rust 1.0 est sorti".to_string(),
        description: "Retour sur une version stable".to_string(),
        text: "Après des années de développement, Rust atteint sa première version stable.".to_string(),
        licence: Some(Licence { code: "CC BY".to_string(), title: "Creative Commons BY".to_string() }),
        authors: vec![],
        created_at: Utc::now(),
    };

    match app_state.export_service.store_article(&article).await {
        Ok(article) => info!("Sample article available at /api/v1/export/articles/{}", article.pk),
        Err(e) => warn!("Failed to store sample article: {}", e),
    }

    let stored = match sample_tutorial() {
        Ok(tutorial) => app_state.export_service.store_tutorial(&tutorial).await,
        Err(e) => Err(e),
    };
    match stored {
        Ok(tutorial) => info!("Sample tutorial available at /api/v1/export/tutorials/{}", tutorial.pk),
        Err(e) => warn!("Failed to store sample tutorial: {}", e),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let config = AppConfig::from_env();

    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("Starting community platform server...");

    // Initialize application state
    let app_state = AppState::new(config.clone()).await?;
    info!("Application state initialized");

    populate_sample_content(&app_state).await;

    // Build our application with routes
    let app = create_routes(app_state)
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = config.server_address().parse()?;
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", config.server_address());

    // Start serving requests
    axum::serve(listener, app).await?;

    Ok(())
}
