use crate::models::{Debate, Idea};
use crate::storage::{Store, DEBATES_KEY, IDEAS_KEY};
use tracing::info;

/// Populates each collection that has never been written. An existing key
/// never re-seeds, even when it holds an empty array.
pub async fn seed(store: &mut Store) {
    if !store.contains(IDEAS_KEY).await {
        info!("seeding example ideas");
        store.write(IDEAS_KEY, &seed_ideas()).await;
    }
    if !store.contains(DEBATES_KEY).await {
        info!("seeding example debates");
        store.write(DEBATES_KEY, &seed_debates()).await;
    }
}

pub fn seed_ideas() -> Vec<Idea> {
    vec![
        Idea {
            id: "eco-bottle".to_string(),
            title: "Eco Bottle".to_string(),
            category: "Environment".to_string(),
            desc: "Smart refillable bottle that tracks hydration and rewards eco-friendly refills."
                .to_string(),
            likes: 12,
        },
        Idea {
            id: "tutormate".to_string(),
            title: "TutorMate".to_string(),
            category: "Education".to_string(),
            desc: "Peer-to-peer tutoring platform matching students by subject and level."
                .to_string(),
            likes: 9,
        },
        Idea {
            id: "readright".to_string(),
            title: "ReadRight".to_string(),
            category: "Tech".to_string(),
            desc: "Browser overlay tools to aid dyslexic readers and ESL learners.".to_string(),
            likes: 6,
        },
    ]
}

pub fn seed_debates() -> Vec<Debate> {
    vec![
        Debate {
            id: "d1".to_string(),
            title: "Should entrepreneurship be taught in schools?".to_string(),
            body: "Share reasons".to_string(),
            comments: Vec::new(),
            upvotes: 128,
        },
        Debate {
            id: "d2".to_string(),
            title: "Is AI helping creativity?".to_string(),
            body: "Tell us your experiences".to_string(),
            comments: Vec::new(),
            upvotes: 96,
        },
    ]
}
