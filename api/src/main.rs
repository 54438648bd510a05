// ============================================================================
// GTM MATCH API
// ============================================================================

// - Problem board with solutions, comments and reactions
// - Jobs, tools and benchmark directories
// - Leaderboard, profiles and global search
// - Skill assessments with badges
// - Notification inbox
// - Bearer-token auth against the identity provider

use gtm_match_api::{AppState, config::Config, data::RecordStore, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gtm_match_api=info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let store = RecordStore::load_seed()?;
    let addr = config.bind_addr;

    info!(
        "Loaded {} problems, {} solutions, {} jobs, {} tools",
        store.problems.len(),
        store.solutions.len(),
        store.jobs.len(),
        store.tools.len()
    );

    let app = router(AppState::new(store, config));

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health                          - Health check");
    info!("  GET    /problems                        - List problems (filters, sort, pages)");
    info!("  POST   /problems                        - Submit a problem draft (auth)");
    info!("  GET    /problems/{{id}}                   - Problem with solutions");
    info!("  GET    /jobs, /tools, /benchmarks       - Directories");
    info!("  GET    /leaderboard                     - Leaderboard boards");
    info!("  GET    /search?q=                       - Global search");
    info!("  GET    /assessments                     - Skill assessments");
    info!("  POST   /assessments/{{id}}/attempt/...    - Quiz flow (auth)");
    info!("  GET    /notifications                   - Inbox (auth)");
    info!("  GET    /admin/stats                     - Platform stats (admin)");

    axum::serve(listener, app).await?;

    Ok(())
}
