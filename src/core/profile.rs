use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OverallColor {
    Green,
    Yellow,
    Red,
}

impl OverallColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for OverallColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentStyle {
    Secure,
    Anxious,
    Avoidant,
    Fearful,
}

impl AttachmentStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Secure => "secure",
            Self::Anxious => "anxious",
            Self::Avoidant => "avoidant",
            Self::Fearful => "fearful",
        }
    }

    /// Adjustment applied to the overall score.
    pub fn overall_adjustment(self) -> f64 {
        match self {
            Self::Secure => 10.0,
            Self::Anxious => -5.0,
            Self::Avoidant => -10.0,
            Self::Fearful => -15.0,
        }
    }
}

impl fmt::Display for AttachmentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Four-letter type code such as `INFJ`. Always one letter from each of
/// E/I, S/N, T/F and J/P, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MbtiType([u8; 4]);

impl MbtiType {
    pub const AXES: [(u8, u8); 4] = [(b'E', b'I'), (b'S', b'N'), (b'T', b'F'), (b'J', b'P')];
    pub const INFJ: MbtiType = MbtiType(*b"INFJ");

    pub fn from_letters(letters: [u8; 4]) -> Option<Self> {
        let valid = letters
            .iter()
            .zip(Self::AXES.iter())
            .all(|(letter, (a, b))| letter == a || letter == b);
        valid.then_some(Self(letters))
    }

    pub fn as_str(&self) -> &str {
        // letters are validated ASCII on construction
        std::str::from_utf8(&self.0).unwrap_or("XXXX")
    }

    pub fn is_extraverted(&self) -> bool {
        self.0[0] == b'E'
    }

    pub fn is_intuitive(&self) -> bool {
        self.0[1] == b'N'
    }

    pub fn is_feeling(&self) -> bool {
        self.0[2] == b'F'
    }

    pub fn is_judging(&self) -> bool {
        self.0[3] == b'J'
    }
}

impl fmt::Display for MbtiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MbtiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bytes = upper.as_bytes();
        if bytes.len() != 4 {
            return Err(format!("invalid MBTI code {s:?}: expected 4 letters"));
        }
        Self::from_letters([bytes[0], bytes[1], bytes[2], bytes[3]])
            .ok_or_else(|| format!("invalid MBTI code {s:?}"))
    }
}

impl TryFrom<String> for MbtiType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MbtiType> for String {
    fn from(value: MbtiType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityTraits {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalIntelligence {
    pub self_awareness: u8,
    pub self_regulation: u8,
    pub empathy: u8,
    pub social_skills: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CoreValues {
    pub tradition: u8,
    pub independence: u8,
    pub family: u8,
    pub ambition: u8,
    pub open_mindedness: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntimacyProfile {
    pub traditionalism: u8,
    pub physical_affection: u8,
    pub communication: u8,
    pub experimentation: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionScores {
    pub personality: u8,
    pub emotional: u8,
    pub values: u8,
    pub physical: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthsWeaknesses {
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub growth_areas: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompatibleTypes {
    pub most_compatible: Vec<String>,
    pub challenging_matches: Vec<String>,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityProfile {
    pub overall_color: OverallColor,
    pub description: String,
    pub personality_traits: PersonalityTraits,
    pub attachment_style: AttachmentStyle,
    pub mbti_style: MbtiType,
    pub emotional_intelligence: EmotionalIntelligence,
    pub core_values: CoreValues,
    pub intimacy_profile: IntimacyProfile,
    pub section_scores: SectionScores,
    pub strengths_weaknesses: StrengthsWeaknesses,
    pub compatible_types: CompatibleTypes,
    pub compatibility_insights: Vec<String>,
    pub relationship_tips: Vec<String>,
}

impl CompatibilityProfile {
    /// Parses a stored profile and checks that every score is in range.
    pub fn from_json(content: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(content).context("invalid profile JSON")?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<()> {
        for (path, score) in self.numeric_scores() {
            if score > MAX_SCORE {
                bail!("{path} is {score}, scores must be between 0 and {MAX_SCORE}");
            }
        }
        Ok(())
    }

    /// True when this is the canned profile returned for sparse submissions.
    pub fn is_default(&self) -> bool {
        self.description == crate::core::DEFAULT_DESCRIPTION
    }

    /// Every numeric score in the profile, labelled by its JSON path.
    pub fn numeric_scores(&self) -> Vec<(&'static str, u8)> {
        let t = &self.personality_traits;
        let eq = &self.emotional_intelligence;
        let v = &self.core_values;
        let i = &self.intimacy_profile;
        let s = &self.section_scores;
        vec![
            ("personalityTraits.openness", t.openness),
            ("personalityTraits.conscientiousness", t.conscientiousness),
            ("personalityTraits.extraversion", t.extraversion),
            ("personalityTraits.agreeableness", t.agreeableness),
            ("personalityTraits.neuroticism", t.neuroticism),
            ("emotionalIntelligence.selfAwareness", eq.self_awareness),
            ("emotionalIntelligence.selfRegulation", eq.self_regulation),
            ("emotionalIntelligence.empathy", eq.empathy),
            ("emotionalIntelligence.socialSkills", eq.social_skills),
            ("coreValues.tradition", v.tradition),
            ("coreValues.independence", v.independence),
            ("coreValues.family", v.family),
            ("coreValues.ambition", v.ambition),
            ("coreValues.openMindedness", v.open_mindedness),
            ("intimacyProfile.traditionalism", i.traditionalism),
            ("intimacyProfile.physicalAffection", i.physical_affection),
            ("intimacyProfile.communication", i.communication),
            ("intimacyProfile.experimentation", i.experimentation),
            ("sectionScores.personality", s.personality),
            ("sectionScores.emotional", s.emotional),
            ("sectionScores.values", s.values),
            ("sectionScores.physical", s.physical),
        ]
    }
}
