use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Idea {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub desc: String,
    #[serde(default)]
    pub likes: u64,
}

/// `comments` is carried as opaque JSON so records written by other tools
/// round-trip unchanged; nothing in the app creates comments yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debate {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub comments: Vec<serde_json::Value>,
    #[serde(default)]
    pub upvotes: u64,
}

#[derive(Debug, Deserialize)]
pub struct NewIdeaRequest {
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct NewDebateRequest {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub id: String,
    pub likes: u64,
    pub liked: bool,
}

#[derive(Debug, Serialize)]
pub struct NoticeResponse {
    pub message: String,
}
