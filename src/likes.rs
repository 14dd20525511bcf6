use crate::models::Idea;

#[derive(Debug, Clone, Copy)]
pub struct LikeOutcome {
    pub likes: u64,
    pub liked: bool,
}

/// Toggles membership of `idea_id` in the like-set and moves the matching
/// idea's counter in lockstep: absent means add and increment, present
/// means remove and decrement (floored at zero). Returns `None` without
/// touching either collection when no idea carries the id, so the like-set
/// can never hold an id the ideas collection does not.
pub fn toggle(ideas: &mut [Idea], like_set: &mut Vec<String>, idea_id: &str) -> Option<LikeOutcome> {
    let idea = ideas.iter_mut().find(|idea| idea.id == idea_id)?;

    let liked = match like_set.iter().position(|id| id == idea_id) {
        Some(index) => {
            like_set.remove(index);
            idea.likes = idea.likes.saturating_sub(1);
            false
        }
        None => {
            like_set.push(idea_id.to_string());
            idea.likes = idea.likes.saturating_add(1);
            true
        }
    };

    Some(LikeOutcome {
        likes: idea.likes,
        liked,
    })
}
