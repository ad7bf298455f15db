use crate::core::profile::{
    AttachmentStyle, CompatibilityProfile, MbtiType, OverallColor, SectionScores,
};
use serde::{Deserialize, Serialize};

pub const PREVIEW_STRENGTHS: usize = 2;
pub const PREVIEW_CHALLENGES: usize = 2;
pub const PREVIEW_MATCHES: usize = 1;

/// Teaser shown before the full report is unlocked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewProfile {
    pub overall_color: OverallColor,
    pub description: String,
    pub attachment_style: AttachmentStyle,
    pub mbti_style: MbtiType,
    pub section_scores: SectionScores,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub most_compatible: Vec<String>,
    pub challenging_matches: Vec<String>,
}

fn first(items: &[String], limit: usize) -> Vec<String> {
    items.iter().take(limit).cloned().collect()
}

pub fn generate_profile_preview(profile: &CompatibilityProfile) -> PreviewProfile {
    PreviewProfile {
        overall_color: profile.overall_color,
        description: profile.description.clone(),
        attachment_style: profile.attachment_style,
        mbti_style: profile.mbti_style,
        section_scores: profile.section_scores,
        strengths: first(&profile.strengths_weaknesses.strengths, PREVIEW_STRENGTHS),
        challenges: first(&profile.strengths_weaknesses.challenges, PREVIEW_CHALLENGES),
        most_compatible: first(&profile.compatible_types.most_compatible, PREVIEW_MATCHES),
        challenging_matches: first(
            &profile.compatible_types.challenging_matches,
            PREVIEW_MATCHES,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answers::AnswersMap;
    use crate::core::{DEFAULT_PROFILE, calculate_compatibility_profile};

    #[test]
    fn truncates_lists_and_copies_scalars() {
        let answers: AnswersMap = (1..=40).map(|question| (question, 0)).collect();
        let profile = calculate_compatibility_profile(&answers);
        let before = profile.clone();

        let preview = generate_profile_preview(&profile);
        assert_eq!(profile, before);

        assert_eq!(preview.overall_color, profile.overall_color);
        assert_eq!(preview.description, profile.description);
        assert_eq!(preview.attachment_style, profile.attachment_style);
        assert_eq!(preview.mbti_style, profile.mbti_style);
        assert_eq!(preview.section_scores, profile.section_scores);

        assert_eq!(preview.strengths.len(), 2);
        assert_eq!(preview.challenges.len(), 2);
        assert_eq!(preview.most_compatible.len(), 1);
        assert_eq!(preview.challenging_matches.len(), 1);
        assert_eq!(
            preview.strengths[..],
            profile.strengths_weaknesses.strengths[..2]
        );
        assert_eq!(
            preview.most_compatible[0],
            profile.compatible_types.most_compatible[0]
        );
    }

    #[test]
    fn short_lists_are_not_padded() {
        let mut profile = DEFAULT_PROFILE.clone();
        profile.strengths_weaknesses.strengths.truncate(1);
        profile.compatible_types.challenging_matches.clear();

        let preview = generate_profile_preview(&profile);
        assert_eq!(preview.strengths.len(), 1);
        assert!(preview.challenging_matches.is_empty());
    }

    #[test]
    fn preview_serializes_camel_case() {
        let preview = generate_profile_preview(&DEFAULT_PROFILE);
        let json = serde_json::to_value(&preview).unwrap();
        assert_eq!(json["overallColor"], "yellow");
        assert_eq!(json["mbtiStyle"], "INFJ");
        assert_eq!(json["mostCompatible"].as_array().unwrap().len(), 1);
    }
}
