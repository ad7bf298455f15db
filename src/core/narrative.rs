//! Rule tables that turn scores into report text.
//!
//! Each table is evaluated top to bottom. Every rule whose predicate holds
//! contributes its fragment, and lists are then padded from a filler table
//! until they reach their minimum length.

use crate::core::profile::{
    AttachmentStyle, CompatibleTypes, MbtiType, OverallColor, StrengthsWeaknesses,
};
use crate::core::score::Scores;
use rand::Rng;

pub const MIN_LIST_ENTRIES: usize = 3;
pub const MIN_INSIGHTS: usize = 5;
pub const MIN_TIPS: usize = 6;

struct Rule {
    applies: fn(&Scores) -> bool,
    text: &'static str,
}

const fn rule(applies: fn(&Scores) -> bool, text: &'static str) -> Rule {
    Rule { applies, text }
}

fn collect(rules: &[Rule], scores: &Scores) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(scores))
        .map(|rule| rule.text.to_string())
        .collect()
}

fn pad(list: &mut Vec<String>, min: usize, filler: &[&str]) {
    for text in filler {
        if list.len() >= min {
            break;
        }
        if !list.iter().any(|existing| existing == text) {
            list.push((*text).to_string());
        }
    }
}

const DESCRIPTION_RULES: &[Rule] = &[
    rule(
        |s| s.personality_traits.extraversion > 70,
        "You draw energy from shared activities and social connection, and you bring warmth into a room.",
    ),
    rule(
        |s| s.personality_traits.extraversion < 30,
        "You recharge in quieter settings and tend to value depth over breadth in your connections.",
    ),
    rule(
        |s| s.personality_traits.agreeableness > 70,
        "You lead with kindness and are quick to look for common ground in a disagreement.",
    ),
    rule(
        |s| s.personality_traits.openness > 70,
        "You are curious and open to new experiences, and you like a relationship that keeps growing.",
    ),
    rule(
        |s| s.personality_traits.conscientiousness > 70,
        "You follow through on commitments and bring structure to shared plans.",
    ),
    rule(
        |s| s.personality_traits.neuroticism > 65,
        "Emotional ups and downs can hit you hard, so steady reassurance matters a lot to you.",
    ),
    rule(
        |s| s.personality_traits.neuroticism < 30,
        "You stay fairly calm under pressure, which gives a partner a steady presence to lean on.",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Secure,
        "Your secure attachment style lets you balance closeness and independence with relative ease.",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Anxious,
        "Your anxious attachment style means you may look for frequent signs that the bond is safe.",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Avoidant,
        "Your avoidant attachment style means you may pull back when a relationship asks for more closeness.",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Fearful,
        "Your fearful attachment style means you may want closeness while also feeling wary of it.",
    ),
];

fn description_lead(color: OverallColor) -> &'static str {
    match color {
        OverallColor::Green => {
            "Your responses point to strong relationship foundations and a healthy capacity for lasting partnership."
        }
        OverallColor::Yellow => {
            "Your responses show a solid base for relationships, with a few patterns that would benefit from attention."
        }
        OverallColor::Red => {
            "Your responses suggest some relationship patterns that may be making closeness harder than it needs to be."
        }
    }
}

pub fn describe(scores: &Scores) -> String {
    let mut sentences = vec![description_lead(scores.overall_color).to_string()];
    sentences.extend(collect(DESCRIPTION_RULES, scores));
    sentences.push(format!(
        "Your {} preferences shape how you communicate and make decisions with a partner.",
        scores.mbti_style
    ));
    sentences.join(" ")
}

const STRENGTH_RULES: &[Rule] = &[
    rule(
        |s| s.personality_traits.agreeableness > 70,
        "Patient and considerate with a partner's needs",
    ),
    rule(
        |s| s.personality_traits.extraversion > 70,
        "Brings energy and social warmth to the relationship",
    ),
    rule(
        |s| s.personality_traits.conscientiousness > 70,
        "Reliable and consistent in keeping commitments",
    ),
    rule(
        |s| s.personality_traits.openness > 70,
        "Open to new experiences and to growing together",
    ),
    rule(
        |s| s.personality_traits.neuroticism < 35,
        "Emotionally steady during stressful moments",
    ),
    rule(
        |s| s.emotional_intelligence.empathy > 70,
        "Reads and responds to a partner's feelings with care",
    ),
    rule(
        |s| s.emotional_intelligence.self_awareness > 70,
        "Clear awareness of your own emotional needs",
    ),
    rule(
        |s| s.intimacy_profile.communication > 70,
        "Comfortable talking openly about needs and boundaries",
    ),
    rule(
        |s| s.core_values.family > 70,
        "Deep commitment to family and long-term partnership",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Secure,
        "A secure base that makes trust easier to build",
    ),
];

const STRENGTH_FILLER: &[&str] = &[
    "Genuine interest in building a healthy relationship",
    "Willingness to reflect on your own relationship patterns",
    "Commitment to understanding yourself and your partner",
];

const CHALLENGE_RULES: &[Rule] = &[
    rule(
        |s| s.personality_traits.neuroticism > 65,
        "Stress and worry can spill over into the relationship",
    ),
    rule(
        |s| s.personality_traits.agreeableness < 40,
        "Disagreements can turn competitive rather than collaborative",
    ),
    rule(
        |s| s.personality_traits.extraversion < 30,
        "You may hold back feelings until they build up",
    ),
    rule(
        |s| s.personality_traits.conscientiousness < 40,
        "Follow-through on shared plans can be inconsistent",
    ),
    rule(
        |s| s.emotional_intelligence.self_regulation < 45,
        "Strong emotions can be hard to manage in the moment",
    ),
    rule(
        |s| s.intimacy_profile.communication < 45,
        "Difficult conversations may get postponed or avoided",
    ),
    rule(
        |s| s.core_values.independence > 75,
        "A strong need for independence can read as distance to a partner",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Anxious,
        "Fear of abandonment can lead to seeking constant reassurance",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Avoidant,
        "A tendency to withdraw when a partner wants more closeness",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Fearful,
        "Mixed signals between wanting closeness and keeping distance",
    ),
];

const CHALLENGE_FILLER: &[&str] = &[
    "Balancing your own needs with your partner's",
    "Staying patient when a partner sees things differently",
    "Keeping communication open during stressful periods",
];

const GROWTH_RULES: &[Rule] = &[
    rule(
        |s| s.emotional_intelligence.self_regulation < 60,
        "Practice pausing before you respond when emotions run high",
    ),
    rule(
        |s| s.emotional_intelligence.empathy < 60,
        "Ask more questions about how your partner experiences things",
    ),
    rule(
        |s| s.intimacy_profile.communication < 60,
        "Name your needs directly instead of hoping they are noticed",
    ),
    rule(
        |s| s.personality_traits.neuroticism > 60,
        "Develop routines that help you manage stress and worry",
    ),
    rule(
        |s| s.personality_traits.openness < 40,
        "Try new shared experiences to keep the relationship fresh",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Anxious,
        "Build self-soothing habits that don't depend on a partner's response",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Avoidant,
        "Stay present in emotional conversations a little longer than feels comfortable",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Fearful,
        "Let trust build gradually with partners who show consistency",
    ),
];

const GROWTH_FILLER: &[&str] = &[
    "Deepen your understanding of your attachment patterns",
    "Keep building vocabulary for harder feelings",
    "Set aside regular time to check in with your partner",
];

pub fn strengths_weaknesses(scores: &Scores) -> StrengthsWeaknesses {
    let mut strengths = collect(STRENGTH_RULES, scores);
    let mut challenges = collect(CHALLENGE_RULES, scores);
    let mut growth_areas = collect(GROWTH_RULES, scores);

    pad(&mut strengths, MIN_LIST_ENTRIES, STRENGTH_FILLER);
    pad(&mut challenges, MIN_LIST_ENTRIES, CHALLENGE_FILLER);
    pad(&mut growth_areas, MIN_LIST_ENTRIES, GROWTH_FILLER);

    StrengthsWeaknesses {
        strengths,
        challenges,
        growth_areas,
    }
}

/// (type, most compatible, most challenging)
const MBTI_MATCHES: [(&str, [&str; 2], [&str; 2]); 16] = [
    ("INTJ", ["ENFP", "ENTP"], ["ESFP", "ESTP"]),
    ("INTP", ["ENTJ", "ESTJ"], ["ESFJ", "ISFJ"]),
    ("ENTJ", ["INTP", "INFP"], ["ISFP", "ESFP"]),
    ("ENTP", ["INFJ", "INTJ"], ["ISFJ", "ISTJ"]),
    ("INFJ", ["ENFP", "ENTP"], ["ESTP", "ESTJ"]),
    ("INFP", ["ENFJ", "ENTJ"], ["ESTJ", "ISTJ"]),
    ("ENFJ", ["INFP", "ISFP"], ["ISTP", "ESTP"]),
    ("ENFP", ["INFJ", "INTJ"], ["ISTJ", "ESTJ"]),
    ("ISTJ", ["ESFP", "ESTP"], ["ENFP", "INFP"]),
    ("ISFJ", ["ESFP", "ESTP"], ["ENTP", "INTP"]),
    ("ESTJ", ["ISTP", "ISFP"], ["INFP", "ENFP"]),
    ("ESFJ", ["ISFP", "ISTP"], ["INTP", "INTJ"]),
    ("ISTP", ["ESTJ", "ESFJ"], ["ENFJ", "INFJ"]),
    ("ISFP", ["ENFJ", "ESFJ"], ["ENTJ", "INTJ"]),
    ("ESTP", ["ISFJ", "ISTJ"], ["INFJ", "INFP"]),
    ("ESFP", ["ISTJ", "ISFJ"], ["INTJ", "INTP"]),
];

const COMPATIBLE_FILLER: &[&str] = &[
    "Partners who share your core values",
    "Partners with a complementary communication style",
    "Partners who are ready for the same level of commitment",
];

const CHALLENGING_FILLER: &[&str] = &[
    "Partners whose life goals differ sharply from yours",
    "Partners who avoid difficult conversations",
    "Partners who are not ready for emotional commitment",
];

fn mbti_matches(mbti: MbtiType) -> ([&'static str; 2], [&'static str; 2]) {
    MBTI_MATCHES
        .iter()
        .find(|(code, _, _)| *code == mbti.as_str())
        .map(|(_, best, worst)| (*best, *worst))
        .unwrap_or((["ENFP", "ENTP"], ["ESTP", "ESTJ"]))
}

fn attachment_matches(style: AttachmentStyle) -> (&'static str, &'static str) {
    match style {
        AttachmentStyle::Secure => (
            "Securely attached partners who value open communication",
            "Partners who are not ready for emotional commitment",
        ),
        AttachmentStyle::Anxious => (
            "Securely attached partners who offer consistent reassurance",
            "Avoidant partners who withdraw under stress",
        ),
        AttachmentStyle::Avoidant => (
            "Securely attached partners who respect your need for space",
            "Anxious partners who need frequent reassurance",
        ),
        AttachmentStyle::Fearful => (
            "Patient, securely attached partners who build trust gradually",
            "Partners whose behavior is unpredictable or inconsistent",
        ),
    }
}

fn attachment_need(style: AttachmentStyle) -> &'static str {
    match style {
        AttachmentStyle::Secure => "meet your openness with the same honesty",
        AttachmentStyle::Anxious => "stay consistent and reassuring when things feel uncertain",
        AttachmentStyle::Avoidant => "give you room to breathe without reading it as rejection",
        AttachmentStyle::Fearful => "earn trust slowly and keep their word",
    }
}

pub fn compatible_types(scores: &Scores) -> CompatibleTypes {
    let (best, worst) = mbti_matches(scores.mbti_style);
    let (attachment_best, attachment_worst) = attachment_matches(scores.attachment_style);

    let mut most_compatible: Vec<String> = best.iter().map(|code| code.to_string()).collect();
    most_compatible.push(attachment_best.to_string());
    let mut challenging_matches: Vec<String> = worst.iter().map(|code| code.to_string()).collect();
    challenging_matches.push(attachment_worst.to_string());

    pad(&mut most_compatible, MIN_LIST_ENTRIES, COMPATIBLE_FILLER);
    pad(&mut challenging_matches, MIN_LIST_ENTRIES, CHALLENGING_FILLER);

    let energy = if scores.mbti_style.is_extraverted() {
        "share your appetite for connection"
    } else {
        "respect your need for time to reflect"
    };
    let focus = if scores.mbti_style.is_intuitive() {
        "big-picture ideas"
    } else {
        "concrete details"
    };
    let pace = if scores.mbti_style.is_judging() {
        "like plans settled early"
    } else {
        "prefer to keep plans open"
    };
    let rationale = format!(
        "As an {} with a {} attachment style, you tend to do best with partners who {} and {}. \
         You lean toward {} and {}, so a partner with a similar rhythm makes daily life easier. \
         {} and {} types often complement your preferences, while {} and {} types may approach \
         closeness and conflict very differently.",
        scores.mbti_style,
        scores.attachment_style,
        energy,
        attachment_need(scores.attachment_style),
        focus,
        pace,
        best[0],
        best[1],
        worst[0],
        worst[1],
    );

    CompatibleTypes {
        most_compatible,
        challenging_matches,
        rationale,
    }
}

const INSIGHT_RULES: &[Rule] = &[
    rule(
        |s| s.overall_color == OverallColor::Green,
        "Your overall pattern suggests you are ready for a stable, committed relationship.",
    ),
    rule(
        |s| s.overall_color == OverallColor::Yellow,
        "Your overall pattern is balanced, and small adjustments could noticeably improve your relationships.",
    ),
    rule(
        |s| s.overall_color == OverallColor::Red,
        "Your overall pattern suggests that working on a few core habits would make relationships feel safer.",
    ),
    rule(
        |s| s.emotional_intelligence.self_awareness > 70,
        "High self-awareness helps you explain what you need before frustration builds.",
    ),
    rule(
        |s| s.emotional_intelligence.empathy > 70,
        "Your empathy helps a partner feel heard, which strengthens trust over time.",
    ),
    rule(
        |s| s.emotional_intelligence.social_skills < 45,
        "Busy social settings can drain you, so a partner who enjoys quieter time may suit you well.",
    ),
    rule(
        |s| s.core_values.tradition > 70,
        "You value tradition, so shared customs and rituals can anchor your relationship.",
    ),
    rule(
        |s| s.core_values.independence > 70,
        "You value independence and will do best with a partner who has a full life of their own.",
    ),
    rule(
        |s| s.core_values.ambition > 70,
        "Your ambition runs high, so a partner who supports your goals will matter a lot.",
    ),
    rule(
        |s| s.core_values.open_mindedness > 70,
        "Your open-mindedness makes it easier to work through differences in background or belief.",
    ),
    rule(
        |s| s.intimacy_profile.traditionalism > 70,
        "You hold fairly traditional views about intimacy, so aligned expectations will matter.",
    ),
    rule(
        |s| s.intimacy_profile.physical_affection > 70,
        "Physical affection is an important way you give and receive love.",
    ),
    rule(
        |s| s.intimacy_profile.communication > 70,
        "You are comfortable discussing intimacy openly, which builds closeness.",
    ),
    rule(
        |s| s.section_scores.emotional > 70,
        "Your emotional responses show a maturity that supports long-term partnership.",
    ),
];

const INSIGHT_FILLER: &[&str] = &[
    "Understanding your attachment style can help you choose partners who meet your needs.",
    "Relationships tend to thrive when both partners share core values and talk openly.",
    "Small, consistent gestures often matter more than grand ones.",
    "Knowing your personality type helps you explain your preferences to a partner.",
    "Compatibility grows through shared effort as much as through initial fit.",
];

pub fn compatibility_insights(scores: &Scores) -> Vec<String> {
    let mut insights = collect(INSIGHT_RULES, scores);
    pad(&mut insights, MIN_INSIGHTS, INSIGHT_FILLER);
    insights
}

const TIP_RULES: &[Rule] = &[
    rule(
        |s| s.attachment_style == AttachmentStyle::Secure,
        "Use your steadiness to create a calm space for difficult conversations.",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Anxious,
        "When you feel insecure, name the feeling to your partner instead of testing them.",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Avoidant,
        "When you want to withdraw, tell your partner you need a short break and when you'll be back.",
    ),
    rule(
        |s| s.attachment_style == AttachmentStyle::Fearful,
        "Take trust one step at a time, and notice when a partner follows through.",
    ),
    rule(
        |s| s.mbti_style.is_extraverted(),
        "Plan social time together, but also protect quiet one-on-one time.",
    ),
    rule(
        |s| !s.mbti_style.is_extraverted(),
        "Let your partner know that time alone recharges you and isn't a sign of distance.",
    ),
    rule(
        |s| s.mbti_style.is_feeling(),
        "Tell your partner how a decision feels to you, not only whether it makes sense.",
    ),
    rule(
        |s| !s.mbti_style.is_feeling(),
        "Before solving a problem, ask whether your partner first wants to be heard.",
    ),
    rule(
        |s| s.personality_traits.neuroticism > 60,
        "Build a simple stress routine, like a walk or journaling, before big conversations.",
    ),
    rule(
        |s| s.emotional_intelligence.self_regulation < 50,
        "Agree with your partner on a pause signal to use when arguments heat up.",
    ),
    rule(
        |s| s.intimacy_profile.communication < 50,
        "Schedule a weekly check-in to talk about what is working and what isn't.",
    ),
    rule(
        |s| s.emotional_intelligence.empathy < 50,
        "Reflect back what your partner said before sharing your own view.",
    ),
    rule(
        |s| s.personality_traits.conscientiousness < 40,
        "Write down shared commitments so follow-through gets easier.",
    ),
    rule(
        |s| s.personality_traits.agreeableness < 40,
        "Look for one point of agreement before raising a concern.",
    ),
];

pub const TIP_FILLER: &[&str] = &[
    "Express appreciation for something specific your partner did each day.",
    "Keep learning about each other, since people keep changing over time.",
    "Make room for shared fun, not only for problem-solving.",
    "Talk openly about expectations for the future.",
    "Respect each other's need for personal space and time.",
    "Celebrate small wins together.",
    "Try a new activity together at least once a month.",
    "Consider talking to a relationship counselor when you feel stuck.",
];

/// Rule-driven tips, padded with filler tips chosen by `rng`.
pub fn relationship_tips<R: Rng + ?Sized>(scores: &Scores, rng: &mut R) -> Vec<String> {
    let mut tips = collect(TIP_RULES, scores);

    while tips.len() < MIN_TIPS {
        let unused: Vec<&str> = TIP_FILLER
            .iter()
            .copied()
            .filter(|tip| !tips.iter().any(|existing| existing == tip))
            .collect();
        if unused.is_empty() {
            break;
        }
        let pick = unused[rng.gen_range(0..unused.len())];
        tips.push(pick.to_string());
    }

    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::answers::AnswersMap;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn uniform(index: i32) -> Scores {
        let answers: AnswersMap = (1..=40).map(|question| (question, index)).collect();
        Scores::from_answers(&answers)
    }

    #[test]
    fn filler_tables_cover_their_minimums() {
        assert!(STRENGTH_FILLER.len() >= MIN_LIST_ENTRIES);
        assert!(CHALLENGE_FILLER.len() >= MIN_LIST_ENTRIES);
        assert!(GROWTH_FILLER.len() >= MIN_LIST_ENTRIES);
        assert!(COMPATIBLE_FILLER.len() >= MIN_LIST_ENTRIES);
        assert!(CHALLENGING_FILLER.len() >= MIN_LIST_ENTRIES);
        assert!(INSIGHT_FILLER.len() >= MIN_INSIGHTS);
        assert!(TIP_FILLER.len() >= MIN_TIPS);
    }

    #[test]
    fn every_mbti_code_has_matches() {
        for (code, best, worst) in MBTI_MATCHES {
            let parsed: MbtiType = code.parse().unwrap();
            assert_eq!(mbti_matches(parsed), (best, worst));
            for other in best.iter().chain(worst.iter()) {
                assert!(other.parse::<MbtiType>().is_ok(), "{other} is not a valid code");
            }
        }
    }

    #[test]
    fn description_starts_with_color_lead() {
        let green = uniform(0);
        assert!(describe(&green).starts_with(description_lead(OverallColor::Green)));
        assert!(describe(&green).contains("secure attachment style"));

        let red = uniform(3);
        let text = describe(&red);
        assert!(text.starts_with(description_lead(OverallColor::Red)));
        assert!(text.contains("avoidant attachment style"));
        assert!(text.contains(red.mbti_style.as_str()));
    }

    #[test]
    fn lists_are_padded_to_minimums() {
        for index in 0..4 {
            let scores = uniform(index);
            let sw = strengths_weaknesses(&scores);
            assert!(sw.strengths.len() >= MIN_LIST_ENTRIES);
            assert!(sw.challenges.len() >= MIN_LIST_ENTRIES);
            assert!(sw.growth_areas.len() >= MIN_LIST_ENTRIES);

            let types = compatible_types(&scores);
            assert!(types.most_compatible.len() >= MIN_LIST_ENTRIES);
            assert!(types.challenging_matches.len() >= MIN_LIST_ENTRIES);
            assert!(!types.rationale.is_empty());

            assert!(compatibility_insights(&scores).len() >= MIN_INSIGHTS);
        }
    }

    #[test]
    fn padding_skips_duplicates() {
        let mut list = vec![STRENGTH_FILLER[0].to_string()];
        pad(&mut list, 3, STRENGTH_FILLER);
        assert_eq!(list.len(), 3);
        assert_eq!(list[1], STRENGTH_FILLER[1]);
        assert_eq!(list[2], STRENGTH_FILLER[2]);
    }

    #[test]
    fn avoidant_profile_gets_matching_advice() {
        let scores = uniform(3);
        let sw = strengths_weaknesses(&scores);
        assert!(
            sw.challenges
                .iter()
                .any(|c| c.contains("withdraw when a partner wants more closeness"))
        );
        let types = compatible_types(&scores);
        assert!(
            types
                .challenging_matches
                .iter()
                .any(|m| m.starts_with("Anxious partners"))
        );
    }

    #[test]
    fn type_preferences_shape_rationale_and_tips() {
        let enfj = uniform(0);
        assert_eq!(enfj.mbti_style.as_str(), "ENFJ");
        let rationale = compatible_types(&enfj).rationale;
        assert!(rationale.contains("big-picture ideas and like plans settled early"));
        let tips = relationship_tips(&enfj, &mut ChaCha8Rng::seed_from_u64(3));
        assert!(tips.iter().any(|t| t.starts_with("Tell your partner how a decision feels")));

        let intp = uniform(3);
        assert_eq!(intp.mbti_style.as_str(), "INTP");
        let rationale = compatible_types(&intp).rationale;
        assert!(rationale.contains("big-picture ideas and prefer to keep plans open"));
        let tips = relationship_tips(&intp, &mut ChaCha8Rng::seed_from_u64(3));
        assert!(tips.iter().any(|t| t.starts_with("Before solving a problem")));

        let neutral: AnswersMap = (1..=10).map(|question| (question, 9)).collect();
        let estj = Scores::from_answers(&neutral);
        assert!(compatible_types(&estj).rationale.contains("concrete details"));
    }

    #[test]
    fn tips_reach_minimum_without_duplicates() {
        for index in 0..4 {
            let scores = uniform(index);
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let tips = relationship_tips(&scores, &mut rng);
            assert!(tips.len() >= MIN_TIPS);
            let mut unique = tips.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), tips.len());
        }
    }

    #[test]
    fn tips_follow_the_seed() {
        let scores = uniform(0);
        let first = relationship_tips(&scores, &mut ChaCha8Rng::seed_from_u64(11));
        let second = relationship_tips(&scores, &mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(first, second);
    }
}
