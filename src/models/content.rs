use serde::Serialize;

/// The four content tabs offered for every subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LearningMode {
    Text,
    Visual,
    Audio,
    Interactive,
}

impl LearningMode {
    pub fn all() -> [LearningMode; 4] {
        [Self::Text, Self::Visual, Self::Audio, Self::Interactive]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Visual => "Visual",
            Self::Audio => "Audio",
            Self::Interactive => "Interactive",
        }
    }

    pub fn next(&self) -> LearningMode {
        match self {
            Self::Text => Self::Visual,
            Self::Visual => Self::Audio,
            Self::Audio => Self::Interactive,
            Self::Interactive => Self::Text,
        }
    }

    pub fn prev(&self) -> LearningMode {
        match self {
            Self::Text => Self::Interactive,
            Self::Visual => Self::Text,
            Self::Audio => Self::Visual,
            Self::Interactive => Self::Audio,
        }
    }

    /// Index into [`LearningMode::all`], used to highlight the active tab
    pub fn index(&self) -> usize {
        match self {
            Self::Text => 0,
            Self::Visual => 1,
            Self::Audio => 2,
            Self::Interactive => 3,
        }
    }
}

/// Static learning material for one subject, one field per learning mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectContent {
    pub title: &'static str,
    pub description: &'static str,
    pub text: &'static str,
    pub visual: &'static str,
    pub audio: &'static str,
    pub interactive: &'static str,
}

impl SubjectContent {
    pub fn body(&self, mode: LearningMode) -> &'static str {
        match mode {
            LearningMode::Text => self.text,
            LearningMode::Visual => self.visual,
            LearningMode::Audio => self.audio,
            LearningMode::Interactive => self.interactive,
        }
    }

    /// Full paragraph shown in the content pane for one tab
    pub fn narrative(&self, mode: LearningMode) -> String {
        match mode {
            LearningMode::Text => format!(
                "{}\n\nThis text-based learning module provides comprehensive explanations of key concepts, definitions, and theories in {}.",
                self.text, self.title
            ),
            LearningMode::Visual => format!(
                "In the visual learning mode, you would see {}.\n\nVisual representations help to understand complex concepts through diagrams, charts, and illustrations that highlight relationships and processes.",
                self.visual
            ),
            LearningMode::Audio => format!(
                "The audio learning mode would provide {}.\n\nAudio explanations offer an alternative way to absorb information, perfect for auditory learners or studying while on the go.",
                self.audio
            ),
            LearningMode::Interactive => format!(
                "The interactive learning mode would feature {}.\n\nInteractive exercises promote active learning through hands-on activities, simulations, and problem-solving challenges.",
                self.interactive
            ),
        }
    }
}
