use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/ideas", get(handlers::ideas_page).post(handlers::idea_form))
        .route("/debates", get(handlers::debates_page).post(handlers::debate_form))
        .route("/submit", get(handlers::submit_page))
        .route("/contact", get(handlers::contact_page).post(handlers::contact_form))
        .route("/fragments/ideas", get(handlers::ideas_fragment))
        .route("/fragments/debates", get(handlers::debates_fragment))
        .route("/api/ideas", get(handlers::list_ideas).post(handlers::create_idea))
        .route("/api/ideas/:id", get(handlers::get_idea))
        .route("/api/ideas/:id/like", post(handlers::toggle_like))
        .route("/api/debates", get(handlers::list_debates).post(handlers::create_debate))
        .route("/api/contact", post(handlers::contact))
        .with_state(state)
}
