//! Content registry: static learning material for the tabbed content pane.
//!
//! One [`SubjectContent`] record per subject, each with a body per
//! [`LearningMode`], plus a default record shown before any subject is
//! selected. Immutable mapping literals, loaded once at process start.

use crate::models::SubjectContent;

const MATH: SubjectContent = SubjectContent {
    title: "Mathematics",
    description: "Explore the world of numbers, patterns, and problem-solving",
    text: "Mathematics is the science of patterns and relationships. It provides a foundation for understanding everything from basic arithmetic to complex physics. Key areas include algebra, geometry, calculus, statistics, and number theory.",
    visual: "diagrams/equations showing the relationship between concepts",
    audio: "explanation of mathematical concepts with practical examples",
    interactive: "interactive problem-solving with step-by-step guidance",
};

const SCIENCE: SubjectContent = SubjectContent {
    title: "Science",
    description: "Discover the natural world through observation and experimentation",
    text: "Science encompasses biology, chemistry, physics, and more. It helps us understand the natural world through systematic observation and experimentation, leading to testable explanations and predictions.",
    visual: "diagrams of the scientific method and experimental processes",
    audio: "explanations of scientific discoveries and their impact",
    interactive: "virtual labs and experiments to test scientific principles",
};

const LANGUAGE: SubjectContent = SubjectContent {
    title: "Language",
    description: "Master communication through grammar, vocabulary, and composition",
    text: "Language is the systematic use of words to communicate. Studying language involves grammar, vocabulary, syntax, and the art of effective communication through speaking and writing.",
    visual: "diagrams of sentence structure and language components",
    audio: "pronunciation guides and speech patterns",
    interactive: "interactive grammar exercises and writing prompts",
};

const HISTORY: SubjectContent = SubjectContent {
    title: "History",
    description: "Understand the past to gain insight into the present",
    text: "History is the study of past events, particularly human affairs. It helps us understand how societies have evolved, the causes and effects of major events, and patterns that might repeat in the future.",
    visual: "timelines and historical maps showing key events",
    audio: "narrative explanations of historical events and their significance",
    interactive: "historical scenarios with decision-making challenges",
};

const ARTS: SubjectContent = SubjectContent {
    title: "Arts",
    description: "Express creativity through visual, performing, and literary arts",
    text: "The arts encompass visual arts, music, dance, theater, and literature. They provide ways to express creativity, emotions, and ideas through various mediums and techniques.",
    visual: "examples of different art forms and techniques",
    audio: "explanations of musical concepts and art movements",
    interactive: "guided creative exercises in different artistic mediums",
};

const TECHNOLOGY: SubjectContent = SubjectContent {
    title: "Technology",
    description: "Explore digital tools, programming, and computational thinking",
    text: "Technology involves the application of scientific knowledge for practical purposes. Modern technology focuses on digital tools, programming, artificial intelligence, and computational thinking.",
    visual: "diagrams of computer systems and programming concepts",
    audio: "explanations of technological concepts and their applications",
    interactive: "coding exercises and technology problem-solving scenarios",
};

/// Shown before any subject has been selected
pub const DEFAULT_CONTENT: SubjectContent = SubjectContent {
    title: "Select a Subject",
    description: "Choose a subject from the brain map to start learning",
    text: "Click on any brain region to explore that subject area.",
    visual: "overview of different learning approaches",
    audio: "introduction to the learning platform",
    interactive: "tutorial on how to use the interactive features",
};

/// Look up the content record for a subject id, falling back to
/// [`DEFAULT_CONTENT`] for unrecognized ids.
pub fn content_for(subject_id: &str) -> &'static SubjectContent {
    match subject_id {
        "math" => &MATH,
        "science" => &SCIENCE,
        "language" => &LANGUAGE,
        "history" => &HISTORY,
        "arts" => &ARTS,
        "technology" => &TECHNOLOGY,
        _ => &DEFAULT_CONTENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LearningMode;
    use crate::subjects;

    #[test]
    fn test_every_subject_has_content() {
        for subject in subjects::all() {
            let content = content_for(subject.id);
            assert_ne!(content.title, DEFAULT_CONTENT.title, "missing content for {}", subject.id);
        }
    }

    #[test]
    fn test_content_titles_match_display_names() {
        for subject in subjects::all() {
            assert_eq!(content_for(subject.id).title, subject.name);
        }
    }

    #[test]
    fn test_unknown_subject_falls_back_to_default() {
        assert_eq!(content_for("astrology").title, "Select a Subject");
        assert_eq!(content_for("").title, "Select a Subject");
    }

    #[test]
    fn test_all_bodies_non_empty() {
        for subject in subjects::all() {
            let content = content_for(subject.id);
            for mode in LearningMode::all() {
                assert!(!content.body(mode).is_empty());
            }
        }
    }
}
