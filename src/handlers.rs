use crate::errors::AppError;
use crate::models::{
    ContactRequest, Debate, Idea, LikeResponse, NewDebateRequest, NewIdeaRequest, NoticeResponse,
};
use crate::state::AppState;
use crate::storage::{DEBATES_KEY, IDEAS_KEY, LIKES_KEY};
use crate::{forms, likes, ui};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ToastParams {
    toast: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FragmentParams {
    max: Option<usize>,
    card: Option<String>,
}

impl ToastParams {
    fn message(&self) -> Option<&'static str> {
        self.toast.as_deref().and_then(ui::toast_message)
    }
}

// --- pages ---

pub async fn home(State(state): State<AppState>, Query(params): Query<ToastParams>) -> Html<String> {
    let store = state.store.lock().await;
    let ideas: Vec<Idea> = store.read(IDEAS_KEY, Vec::new()).await;
    let like_set: Vec<String> = store.read(LIKES_KEY, Vec::new()).await;
    Html(ui::render_home(&ideas, &like_set, params.message()))
}

pub async fn ideas_page(
    State(state): State<AppState>,
    Query(params): Query<ToastParams>,
) -> Html<String> {
    let store = state.store.lock().await;
    let ideas: Vec<Idea> = store.read(IDEAS_KEY, Vec::new()).await;
    let like_set: Vec<String> = store.read(LIKES_KEY, Vec::new()).await;
    Html(ui::render_ideas_page(&ideas, &like_set, params.message()))
}

pub async fn debates_page(
    State(state): State<AppState>,
    Query(params): Query<ToastParams>,
) -> Html<String> {
    let store = state.store.lock().await;
    let debates: Vec<Debate> = store.read(DEBATES_KEY, Vec::new()).await;
    Html(ui::render_debates_page(&debates, params.message()))
}

pub async fn submit_page(Query(params): Query<ToastParams>) -> Html<String> {
    Html(ui::render_submit_page(params.message()))
}

pub async fn contact_page(Query(params): Query<ToastParams>) -> Html<String> {
    Html(ui::render_contact_page(params.message()))
}

// --- fragments (full re-render targets for the page script) ---

pub async fn ideas_fragment(
    State(state): State<AppState>,
    Query(params): Query<FragmentParams>,
) -> Html<String> {
    let store = state.store.lock().await;
    let ideas: Vec<Idea> = store.read(IDEAS_KEY, Vec::new()).await;
    let like_set: Vec<String> = store.read(LIKES_KEY, Vec::new()).await;
    let max = params.max.unwrap_or(ideas.len());
    let card = params.card.as_deref().unwrap_or("card");
    Html(ui::render_idea_cards(&ideas, &like_set, max, card))
}

pub async fn debates_fragment(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    let debates: Vec<Debate> = store.read(DEBATES_KEY, Vec::new()).await;
    Html(ui::render_debate_cards(&debates))
}

// --- JSON API ---

pub async fn list_ideas(State(state): State<AppState>) -> Json<Vec<Idea>> {
    let store = state.store.lock().await;
    Json(store.read(IDEAS_KEY, Vec::new()).await)
}

pub async fn get_idea(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Idea>, AppError> {
    let store = state.store.lock().await;
    let ideas: Vec<Idea> = store.read(IDEAS_KEY, Vec::new()).await;
    ideas
        .into_iter()
        .find(|idea| idea.id == id)
        .map(Json)
        .ok_or_else(|| AppError::not_found("no such idea"))
}

pub async fn create_idea(
    State(state): State<AppState>,
    Json(payload): Json<NewIdeaRequest>,
) -> Result<(StatusCode, Json<Idea>), AppError> {
    let idea = submit_idea(&state, &payload).await.map_err(AppError::bad_request)?;
    Ok((StatusCode::CREATED, Json(idea)))
}

pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LikeResponse>, AppError> {
    let mut store = state.store.lock().await;
    let mut ideas: Vec<Idea> = store.read(IDEAS_KEY, Vec::new()).await;
    let mut like_set: Vec<String> = store.read(LIKES_KEY, Vec::new()).await;

    let outcome = likes::toggle(&mut ideas, &mut like_set, &id)
        .ok_or_else(|| AppError::not_found("no such idea"))?;

    // Like-set first, ideas second; a crash between the two leaves the
    // counter one off rather than a phantom like-set entry.
    store.write(LIKES_KEY, &like_set).await;
    store.write(IDEAS_KEY, &ideas).await;

    Ok(Json(LikeResponse {
        id,
        likes: outcome.likes,
        liked: outcome.liked,
    }))
}

pub async fn list_debates(State(state): State<AppState>) -> Json<Vec<Debate>> {
    let store = state.store.lock().await;
    Json(store.read(DEBATES_KEY, Vec::new()).await)
}

pub async fn create_debate(
    State(state): State<AppState>,
    Json(payload): Json<NewDebateRequest>,
) -> Result<(StatusCode, Json<Debate>), AppError> {
    let debate = submit_debate(&state, &payload)
        .await
        .map_err(AppError::bad_request)?;
    Ok((StatusCode::CREATED, Json(debate)))
}

pub async fn contact(Json(_payload): Json<ContactRequest>) -> Json<NoticeResponse> {
    Json(NoticeResponse {
        message: ui::CONTACT_NOTICE.to_string(),
    })
}

// --- no-JS form fallbacks, redirect with a toast code ---

pub async fn idea_form(
    State(state): State<AppState>,
    Form(payload): Form<NewIdeaRequest>,
) -> Redirect {
    match submit_idea(&state, &payload).await {
        Ok(_) => Redirect::to("/submit?toast=idea-submitted"),
        Err(_) => Redirect::to("/submit?toast=idea-invalid"),
    }
}

pub async fn debate_form(
    State(state): State<AppState>,
    Form(payload): Form<NewDebateRequest>,
) -> Redirect {
    match submit_debate(&state, &payload).await {
        Ok(_) => Redirect::to("/debates?toast=debate-created"),
        Err(_) => Redirect::to("/debates?toast=debate-invalid"),
    }
}

pub async fn contact_form(Form(_payload): Form<ContactRequest>) -> Redirect {
    Redirect::to("/contact?toast=contact-demo")
}

// --- shared mutation paths ---

async fn submit_idea(state: &AppState, payload: &NewIdeaRequest) -> Result<Idea, &'static str> {
    let mut store = state.store.lock().await;
    let mut ideas: Vec<Idea> = store.read(IDEAS_KEY, Vec::new()).await;
    let idea = forms::new_idea(
        &ideas,
        &payload.title,
        &payload.category,
        &payload.description,
        now_millis(),
    )?;
    ideas.insert(0, idea.clone());
    store.write(IDEAS_KEY, &ideas).await;
    Ok(idea)
}

async fn submit_debate(
    state: &AppState,
    payload: &NewDebateRequest,
) -> Result<Debate, &'static str> {
    let mut store = state.store.lock().await;
    let mut debates: Vec<Debate> = store.read(DEBATES_KEY, Vec::new()).await;
    let debate = forms::new_debate(&debates, &payload.title, &payload.body, now_millis())?;
    debates.insert(0, debate.clone());
    store.write(DEBATES_KEY, &debates).await;
    Ok(debate)
}

fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}
