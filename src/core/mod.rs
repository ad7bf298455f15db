pub mod answers;
pub mod narrative;
pub mod preview;
pub mod profile;
pub mod report;
pub mod score;

use crate::core::answers::AnswersMap;
use crate::core::profile::{
    AttachmentStyle, CompatibilityProfile, CompatibleTypes, CoreValues, EmotionalIntelligence,
    IntimacyProfile, MbtiType, OverallColor, PersonalityTraits, SectionScores,
    StrengthsWeaknesses,
};
use crate::core::score::Scores;
use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Fewest answers that produce a computed profile.
pub const MIN_ANSWERS: usize = 10;

pub const DEFAULT_DESCRIPTION: &str = "Complete more of the questionnaire to see a detailed \
    compatibility profile. Based on what we have so far, you show a balanced mix of traits \
    with room to explore what you need from a partner.";

/// How filler relationship tips are picked when the rule-driven tips fall short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipSelection {
    /// Seeded from the answers, so equal answers give equal tips.
    #[default]
    Deterministic,
    Seeded(u64),
    /// Fresh randomness on every call.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringOptions {
    pub min_answers: usize,
    pub tips: TipSelection,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            min_answers: MIN_ANSWERS,
            tips: TipSelection::Deterministic,
        }
    }
}

pub fn calculate_compatibility_profile(answers: &AnswersMap) -> CompatibilityProfile {
    calculate_compatibility_profile_with(answers, &ScoringOptions::default())
}

pub fn calculate_compatibility_profile_with(
    answers: &AnswersMap,
    options: &ScoringOptions,
) -> CompatibilityProfile {
    if answers.len() < options.min_answers {
        return DEFAULT_PROFILE.clone();
    }

    let scores = Scores::from_answers(answers);
    let relationship_tips = match options.tips {
        TipSelection::Deterministic => narrative::relationship_tips(
            &scores,
            &mut ChaCha8Rng::seed_from_u64(answers::fingerprint(answers)),
        ),
        TipSelection::Seeded(seed) => {
            narrative::relationship_tips(&scores, &mut ChaCha8Rng::seed_from_u64(seed))
        }
        TipSelection::Random => narrative::relationship_tips(&scores, &mut rand::thread_rng()),
    };

    CompatibilityProfile {
        overall_color: scores.overall_color,
        description: narrative::describe(&scores),
        personality_traits: scores.personality_traits,
        attachment_style: scores.attachment_style,
        mbti_style: scores.mbti_style,
        emotional_intelligence: scores.emotional_intelligence,
        core_values: scores.core_values,
        intimacy_profile: scores.intimacy_profile,
        section_scores: scores.section_scores,
        strengths_weaknesses: narrative::strengths_weaknesses(&scores),
        compatible_types: narrative::compatible_types(&scores),
        compatibility_insights: narrative::compatibility_insights(&scores),
        relationship_tips,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Canned profile for submissions with too few answers.
pub static DEFAULT_PROFILE: Lazy<CompatibilityProfile> = Lazy::new(|| CompatibilityProfile {
    overall_color: OverallColor::Yellow,
    description: DEFAULT_DESCRIPTION.to_string(),
    personality_traits: PersonalityTraits {
        openness: 50,
        conscientiousness: 50,
        extraversion: 50,
        agreeableness: 50,
        neuroticism: 50,
    },
    attachment_style: AttachmentStyle::Secure,
    mbti_style: MbtiType::INFJ,
    emotional_intelligence: EmotionalIntelligence {
        self_awareness: 50,
        self_regulation: 50,
        empathy: 50,
        social_skills: 50,
    },
    core_values: CoreValues {
        tradition: 50,
        independence: 50,
        family: 50,
        ambition: 50,
        open_mindedness: 50,
    },
    intimacy_profile: IntimacyProfile {
        traditionalism: 50,
        physical_affection: 50,
        communication: 50,
        experimentation: 50,
    },
    section_scores: SectionScores {
        personality: 50,
        emotional: 50,
        values: 50,
        physical: 50,
    },
    strengths_weaknesses: StrengthsWeaknesses {
        strengths: strings(&[
            "Interest in understanding your relationship patterns",
            "Openness to self-reflection",
            "Willingness to invest in a relationship",
        ]),
        challenges: strings(&[
            "Not enough answers yet to identify specific challenges",
            "Patterns under stress are still unclear",
            "Communication preferences are still unclear",
        ]),
        growth_areas: strings(&[
            "Finish the questionnaire for personalized growth areas",
            "Reflect on what you need from a partner",
            "Notice how you react when a relationship feels uncertain",
        ]),
    },
    compatible_types: CompatibleTypes {
        most_compatible: strings(&["ENFP", "ENTP", "INTJ"]),
        challenging_matches: strings(&["ESTP", "ESFP", "ISTP"]),
        rationale: "Compatibility suggestions will be more accurate once the questionnaire is \
                    complete."
            .to_string(),
    },
    compatibility_insights: strings(&[
        "Answer more questions to unlock detailed compatibility insights.",
        "Understanding your attachment style can help you choose partners who meet your needs.",
        "Relationships tend to thrive when both partners share core values and talk openly.",
        "Small, consistent gestures often matter more than grand ones.",
        "Compatibility grows through shared effort as much as through initial fit.",
    ]),
    relationship_tips: strings(&[
        "Complete the questionnaire for tips tailored to you.",
        "Express appreciation for something specific your partner did each day.",
        "Talk openly about expectations for the future.",
        "Respect each other's need for personal space and time.",
        "Make room for shared fun, not only for problem-solving.",
        "Consider talking to a relationship counselor when you feel stuck.",
    ]),
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::narrative::{MIN_INSIGHTS, MIN_LIST_ENTRIES, MIN_TIPS};

    fn uniform(index: i32) -> AnswersMap {
        (1..=40).map(|question| (question, index)).collect()
    }

    fn assert_invariants(profile: &CompatibilityProfile) {
        for (path, score) in profile.numeric_scores() {
            assert!(score <= 100, "{path} out of range: {score}");
        }
        let sw = &profile.strengths_weaknesses;
        assert!(sw.strengths.len() >= MIN_LIST_ENTRIES);
        assert!(sw.challenges.len() >= MIN_LIST_ENTRIES);
        assert!(sw.growth_areas.len() >= MIN_LIST_ENTRIES);
        assert!(profile.compatible_types.most_compatible.len() >= MIN_LIST_ENTRIES);
        assert!(profile.compatible_types.challenging_matches.len() >= MIN_LIST_ENTRIES);
        assert!(profile.compatibility_insights.len() >= MIN_INSIGHTS);
        assert!(profile.relationship_tips.len() >= MIN_TIPS);
    }

    #[test]
    fn empty_answers_give_default_profile() {
        let profile = calculate_compatibility_profile(&AnswersMap::new());
        assert_eq!(profile, *DEFAULT_PROFILE);
        assert!(profile.is_default());
        assert_eq!(profile.overall_color, OverallColor::Yellow);
        assert_eq!(profile.attachment_style, AttachmentStyle::Secure);
        assert_eq!(profile.mbti_style.as_str(), "INFJ");
        assert!(profile.numeric_scores().iter().all(|(_, score)| *score == 50));
        assert_invariants(&profile);
    }

    #[test]
    fn nine_answers_still_default() {
        let answers: AnswersMap = (1..=9).map(|question| (question, 0)).collect();
        assert!(calculate_compatibility_profile(&answers).is_default());
    }

    #[test]
    fn ten_personality_answers_compute_a_profile() {
        let answers: AnswersMap = (1..=10).map(|question| (question, 0)).collect();
        let profile = calculate_compatibility_profile(&answers);

        assert!(!profile.is_default());
        assert_eq!(profile.section_scores.personality, 85);
        assert_eq!(profile.section_scores.emotional, 50);
        assert_eq!(profile.section_scores.values, 50);
        assert_eq!(profile.section_scores.physical, 50);
        assert_eq!(profile.attachment_style, AttachmentStyle::Secure);
        assert_eq!(profile.mbti_style.as_str(), "ENFJ");
        assert_eq!(profile.overall_color, OverallColor::Green);
        assert_invariants(&profile);
    }

    #[test]
    fn scoring_is_deterministic_by_default() {
        for index in 0..4 {
            let answers = uniform(index);
            let first = calculate_compatibility_profile(&answers);
            let second = calculate_compatibility_profile(&answers);
            assert_eq!(first, second);
            assert_invariants(&first);
        }
    }

    #[test]
    fn seeded_and_random_tips_keep_invariants() {
        let answers = uniform(1);
        let seeded = ScoringOptions {
            tips: TipSelection::Seeded(42),
            ..ScoringOptions::default()
        };
        assert_eq!(
            calculate_compatibility_profile_with(&answers, &seeded),
            calculate_compatibility_profile_with(&answers, &seeded)
        );

        let random = ScoringOptions {
            tips: TipSelection::Random,
            ..ScoringOptions::default()
        };
        let profile = calculate_compatibility_profile_with(&answers, &random);
        assert_invariants(&profile);
        assert_eq!(
            profile.section_scores,
            calculate_compatibility_profile(&answers).section_scores
        );
    }

    #[test]
    fn min_answers_is_configurable() {
        let answers: AnswersMap = (1..=5).map(|question| (question, 0)).collect();
        let options = ScoringOptions {
            min_answers: 5,
            ..ScoringOptions::default()
        };
        assert!(!calculate_compatibility_profile_with(&answers, &options).is_default());
    }

    #[test]
    fn malformed_answers_are_tolerated() {
        let answers: AnswersMap = [
            (0, 2),
            (1, -4),
            (2, 17),
            (3, i32::MAX),
            (12, 3),
            (41, 0),
            (99, 1),
            (20, 0),
            (33, 1),
            (40, i32::MIN),
        ]
        .into_iter()
        .collect();
        let profile = calculate_compatibility_profile(&answers);
        assert!(!profile.is_default());
        assert_invariants(&profile);
    }

    #[test]
    fn profile_serializes_with_camel_case_keys() {
        let profile = calculate_compatibility_profile(&uniform(0));
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["overallColor"], "green");
        assert_eq!(json["mbtiStyle"], profile.mbti_style.as_str());
        assert!(json["emotionalIntelligence"]["selfAwareness"].is_number());
        assert!(json["strengthsWeaknesses"]["growthAreas"].is_array());
        assert!(json["compatibleTypes"]["mostCompatible"].is_array());

        let back: CompatibilityProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
