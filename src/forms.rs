use crate::models::{Debate, Idea};

pub const IDEA_VALIDATION_MESSAGE: &str = "Please provide title and description.";
pub const DEBATE_VALIDATION_MESSAGE: &str = "Enter title and body";

/// Builds the idea a submission creates. Title and description are trimmed
/// and must be non-empty; an empty category defaults to "General". The
/// caller passes the clock so tests can pin it.
pub fn new_idea(
    existing: &[Idea],
    title: &str,
    category: &str,
    description: &str,
    now_millis: i64,
) -> Result<Idea, &'static str> {
    let title = title.trim();
    let desc = description.trim();
    if title.is_empty() || desc.is_empty() {
        return Err(IDEA_VALIDATION_MESSAGE);
    }

    let category = category.trim();
    let category = if category.is_empty() { "General" } else { category };

    let id = unique_id(format!("{}-{now_millis}", slugify(title)), |candidate| {
        existing.iter().any(|idea| idea.id == candidate)
    });

    Ok(Idea {
        id,
        title: title.to_string(),
        category: category.to_string(),
        desc: desc.to_string(),
        likes: 0,
    })
}

pub fn new_debate(
    existing: &[Debate],
    title: &str,
    body: &str,
    now_millis: i64,
) -> Result<Debate, &'static str> {
    let title = title.trim();
    let body = body.trim();
    if title.is_empty() || body.is_empty() {
        return Err(DEBATE_VALIDATION_MESSAGE);
    }

    let id = unique_id(format!("d{now_millis}"), |candidate| {
        existing.iter().any(|debate| debate.id == candidate)
    });

    Ok(Debate {
        id,
        title: title.to_string(),
        body: body.to_string(),
        comments: Vec::new(),
        upvotes: 0,
    })
}

/// Lowercases, collapses runs of non-alphanumeric characters into single
/// hyphens, and strips hyphens from both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut gap = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }
    slug
}

// Timestamps alone collide under rapid submission, so the candidate id
// gets a numeric suffix bumped until it is unused in the collection.
fn unique_id(base: String, taken: impl Fn(&str) -> bool) -> String {
    if !taken(&base) {
        return base;
    }
    let mut n: u64 = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("My Idea"), "my-idea");
        assert_eq!(slugify("  Eco!! Bottle 2 "), "eco-bottle-2");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn idea_defaults_category_and_starts_unliked() {
        let idea = new_idea(&[], "My Idea", "", "desc", 1_700_000_000_000).unwrap();
        assert_eq!(idea.id, "my-idea-1700000000000");
        assert_eq!(idea.category, "General");
        assert_eq!(idea.desc, "desc");
        assert_eq!(idea.likes, 0);
    }

    #[test]
    fn idea_rejects_blank_title_or_description() {
        assert_eq!(
            new_idea(&[], "   ", "Tech", "desc", 1).unwrap_err(),
            IDEA_VALIDATION_MESSAGE
        );
        assert_eq!(
            new_idea(&[], "Title", "Tech", " \t ", 1).unwrap_err(),
            IDEA_VALIDATION_MESSAGE
        );
    }

    #[test]
    fn colliding_ids_get_numeric_suffixes() {
        let first = new_idea(&[], "My Idea", "", "desc", 7).unwrap();
        let second = new_idea(std::slice::from_ref(&first), "My Idea", "", "desc", 7).unwrap();
        let third =
            new_idea(&[first.clone(), second.clone()], "My Idea", "", "desc", 7).unwrap();

        assert_eq!(first.id, "my-idea-7");
        assert_eq!(second.id, "my-idea-7-2");
        assert_eq!(third.id, "my-idea-7-3");
    }

    #[test]
    fn debate_gets_prefixed_id_and_empty_comments() {
        let debate = new_debate(&[], " Topic ", " body ", 42).unwrap();
        assert_eq!(debate.id, "d42");
        assert_eq!(debate.title, "Topic");
        assert_eq!(debate.body, "body");
        assert!(debate.comments.is_empty());
        assert_eq!(debate.upvotes, 0);
    }

    #[test]
    fn debate_rejects_blank_fields() {
        assert_eq!(
            new_debate(&[], "", "body", 1).unwrap_err(),
            DEBATE_VALIDATION_MESSAGE
        );
        assert_eq!(
            new_debate(&[], "Topic", "  ", 1).unwrap_err(),
            DEBATE_VALIDATION_MESSAGE
        );
    }
}
