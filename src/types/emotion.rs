//! Emotion vocabulary and mood labels

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The closed emotion vocabulary, in declaration order.
///
/// Declaration order is significant: it breaks dominant-emotion ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionType {
    Joy,
    Gratitude,
    Nostalgia,
    Love,
    Comfort,
}

impl EmotionType {
    pub const ALL: [EmotionType; 5] = [
        EmotionType::Joy,
        EmotionType::Gratitude,
        EmotionType::Nostalgia,
        EmotionType::Love,
        EmotionType::Comfort,
    ];

    /// Position in the vocabulary (0 = earliest declared)
    pub fn rank(&self) -> usize {
        *self as usize
    }

    /// Counts toward a positive emotional trend
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Joy | Self::Gratitude | Self::Love)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Joy => "Joy",
            Self::Gratitude => "Gratitude",
            Self::Nostalgia => "Nostalgia",
            Self::Love => "Love",
            Self::Comfort => "Comfort",
        }
    }

    /// Display colour (presentation only)
    pub fn color(&self) -> &'static str {
        match self {
            Self::Joy => "yellow",
            Self::Gratitude => "green",
            Self::Nostalgia => "purple",
            Self::Love => "pink",
            Self::Comfort => "blue",
        }
    }

    /// Symbol name (presentation only)
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Joy => "sun.max.fill",
            Self::Gratitude => "hands.sparkles.fill",
            Self::Nostalgia => "clock.arrow.circlepath",
            Self::Love => "heart.fill",
            Self::Comfort => "leaf.fill",
        }
    }

    /// One-line nudge for reconnecting with someone this emotion dominates
    pub fn reconnection_hint(&self) -> &'static str {
        match self {
            Self::Joy => "Share a happy memory or plan something fun together",
            Self::Gratitude => "Express appreciation for their impact on your life",
            Self::Nostalgia => "Reminisce about a special shared experience",
            Self::Love => "Tell them how much they mean to you",
            Self::Comfort => "Reach out for a meaningful conversation",
        }
    }

    pub fn suggested_actions(&self) -> [&'static str; 3] {
        match self {
            Self::Joy => [
                "Plan a fun activity together",
                "Share a funny memory",
                "Suggest a new adventure",
            ],
            Self::Gratitude => [
                "Express appreciation",
                "Write a heartfelt message",
                "Acknowledge their support",
            ],
            Self::Nostalgia => [
                "Share old photos",
                "Reminisce about good times",
                "Visit a meaningful place",
            ],
            Self::Love => [
                "Tell them you love them",
                "Spend quality time together",
                "Create new memories",
            ],
            Self::Comfort => [
                "Have a deep conversation",
                "Offer emotional support",
                "Simply be present",
            ],
        }
    }
}

impl std::fmt::Display for EmotionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

lazy_static! {
    static ref RE_JOY: Regex = Regex::new(r"(?i)^\s*(joy|joyful|happy|excited)\s*$").unwrap();
    static ref RE_GRATITUDE: Regex =
        Regex::new(r"(?i)^\s*(gratitude|grateful|thankful)\s*$").unwrap();
    static ref RE_NOSTALGIA: Regex = Regex::new(r"(?i)^\s*(nostalgia|nostalgic)\s*$").unwrap();
    static ref RE_LOVE: Regex = Regex::new(r"(?i)^\s*(love|loving|loved)\s*$").unwrap();
    static ref RE_COMFORT: Regex =
        Regex::new(r"(?i)^\s*(comfort|comforted|calm|peaceful)\s*$").unwrap();
}

/// Map a free-text mood label onto the vocabulary. `None` = unknown/neutral.
pub fn map_mood_label(label: &str) -> Option<EmotionType> {
    let table: [(&Regex, EmotionType); 5] = [
        (&*RE_JOY, EmotionType::Joy),
        (&*RE_GRATITUDE, EmotionType::Gratitude),
        (&*RE_NOSTALGIA, EmotionType::Nostalgia),
        (&*RE_LOVE, EmotionType::Love),
        (&*RE_COMFORT, EmotionType::Comfort),
    ];
    table
        .iter()
        .find(|(re, _)| re.is_match(label))
        .map(|(_, emotion)| *emotion)
}

/// A mood tag as supplied by the provider, plus what it maps to.
///
/// Serializes as the bare label so it round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Mood {
    label: String,
    emotion: Option<EmotionType>,
}

impl Mood {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let emotion = map_mood_label(&label);
        Self { label, emotion }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn emotion(&self) -> Option<EmotionType> {
        self.emotion
    }

    pub fn is_positive(&self) -> bool {
        self.emotion.is_some_and(|e| e.is_positive())
    }

    pub fn is_known(&self) -> bool {
        self.emotion.is_some()
    }
}

impl From<String> for Mood {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<&str> for Mood {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<EmotionType> for Mood {
    fn from(emotion: EmotionType) -> Self {
        Self {
            label: emotion.display_name().to_string(),
            emotion: Some(emotion),
        }
    }
}

impl From<Mood> for String {
    fn from(mood: Mood) -> Self {
        mood.label
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_mapping() {
        assert_eq!(map_mood_label("Happy"), Some(EmotionType::Joy));
        assert_eq!(map_mood_label("excited"), Some(EmotionType::Joy));
        assert_eq!(map_mood_label(" Grateful "), Some(EmotionType::Gratitude));
        assert_eq!(map_mood_label("Nostalgic"), Some(EmotionType::Nostalgia));
        assert_eq!(map_mood_label("LOVE"), Some(EmotionType::Love));
        assert_eq!(map_mood_label("calm"), Some(EmotionType::Comfort));
    }

    #[test]
    fn test_unknown_mood_is_neutral() {
        let mood = Mood::new("Grumpy");
        assert_eq!(mood.emotion(), None);
        assert!(!mood.is_positive());
        // Partial words don't match
        assert_eq!(map_mood_label("unhappy"), None);
    }

    #[test]
    fn test_positive_subset() {
        let positive: Vec<_> = EmotionType::ALL.iter().filter(|e| e.is_positive()).collect();
        assert_eq!(
            positive,
            vec![&EmotionType::Joy, &EmotionType::Gratitude, &EmotionType::Love]
        );
        assert!(Mood::new("Happy").is_positive());
        assert!(Mood::new("Grateful").is_positive());
        assert!(Mood::new("Excited").is_positive());
        assert!(!Mood::new("Nostalgic").is_positive());
    }

    #[test]
    fn test_every_emotion_has_actions_and_hint() {
        for emotion in EmotionType::ALL {
            assert!(emotion.suggested_actions().iter().all(|a| !a.is_empty()));
            assert!(!emotion.reconnection_hint().is_empty());
            assert_eq!(Mood::from(emotion).emotion(), Some(emotion));
        }
    }

    #[test]
    fn test_rank_follows_declaration_order() {
        let ranks: Vec<usize> = EmotionType::ALL.iter().map(|e| e.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_mood_serializes_as_label() {
        let json = serde_json::to_string(&Mood::new("Happy")).unwrap();
        assert_eq!(json, "\"Happy\"");
        let back: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(back.emotion(), Some(EmotionType::Joy));
    }

    #[test]
    fn test_emotion_metadata_round_trip() {
        for emotion in EmotionType::ALL {
            let json = serde_json::to_string(&emotion).unwrap();
            let back: EmotionType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, emotion);
            assert_eq!(back.color(), emotion.color());
            assert_eq!(back.icon(), emotion.icon());
        }
    }
}
