use crate::models::PostFeatures;

pub const WELL_OPTIMIZED: &str = "Post is well-optimized! No major recommendations.";

pub fn recommendations(features: &PostFeatures) -> Vec<String> {
    let mut items: Vec<&str> = Vec::new();

    if features.word_count < 100 {
        items.push("Expand content to 100-200 words for optimal engagement");
    } else if features.word_count > 300 {
        items.push("Consider shortening to under 300 words (attention span)");
    }

    if features.hashtag_count == 0 {
        items.push("Add 3-5 relevant hashtags to increase discoverability");
    } else if features.hashtag_count > 7 {
        items.push("Reduce hashtags to 3-5 for better performance");
    }

    if !features.has_question {
        items.push("Add a question to boost engagement (e.g., 'What's your experience?')");
    }

    if !features.has_call_to_action {
        items.push("Include a clear call-to-action (e.g., 'Learn more', 'Comment below')");
    }

    if features.paragraph_count < 3 {
        items.push("Break text into 3-5 short paragraphs for readability");
    }

    if features.emoji_count == 0 {
        items.push("Add 1-2 relevant emojis to increase visual appeal");
    } else if features.emoji_count > 3 {
        items.push("Reduce emojis to 1-3 for professional tone");
    }

    if items.is_empty() {
        items.push(WELL_OPTIMIZED);
    }
    items.into_iter().map(str::to_string).collect()
}
