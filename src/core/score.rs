use crate::core::answers::AnswersMap;
use crate::core::profile::{
    AttachmentStyle, CoreValues, EmotionalIntelligence, IntimacyProfile, MbtiType, OverallColor,
    PersonalityTraits, SectionScores,
};
use std::cmp::Ordering;

/// Score used for a missing answer or an option index outside 0..=3.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Shared table for section averages, first option high.
pub const SECTION_TABLE: [u8; 4] = [85, 65, 40, 20];

pub const GREEN_THRESHOLD: f64 = 70.0;
pub const YELLOW_THRESHOLD: f64 = 45.0;

type Table = [u8; 4];

const ATTACHMENT_QUESTIONS: [(u32, f64); 5] =
    [(12, 0.25), (13, 0.20), (15, 0.20), (16, 0.20), (19, 0.15)];
const SECURE_TABLES: [Table; 5] = [[90, 70, 40, 20]; 5];
const ANXIOUS_TABLES: [Table; 5] = [
    [10, 30, 80, 60],
    [15, 35, 85, 50],
    [20, 40, 75, 55],
    [15, 30, 80, 60],
    [10, 40, 70, 60],
];
const AVOIDANT_TABLES: [Table; 5] = [
    [10, 30, 50, 85],
    [15, 30, 55, 85],
    [10, 35, 50, 90],
    [15, 30, 55, 85],
    [10, 35, 50, 80],
];

fn option_index(value: i32) -> Option<usize> {
    usize::try_from(value).ok().filter(|index| *index < 4)
}

pub fn map_answer_to_score(answers: &AnswersMap, question: u32, table: Table) -> f64 {
    answers
        .get(&question)
        .and_then(|value| option_index(*value))
        .map(|index| f64::from(table[index]))
        .unwrap_or(NEUTRAL_SCORE)
}

/// Rounds half away from zero, then clamps to 0..=100.
pub fn clamp_score(value: f64) -> u8 {
    if value.is_nan() {
        return NEUTRAL_SCORE as u8;
    }
    value.round().clamp(0.0, 100.0) as u8
}

fn weighted(answers: &AnswersMap, parts: &[(u32, Table, f64)]) -> f64 {
    parts
        .iter()
        .map(|(question, table, weight)| map_answer_to_score(answers, *question, *table) * weight)
        .sum()
}

fn mean(answers: &AnswersMap, parts: &[(u32, Table)]) -> f64 {
    if parts.is_empty() {
        return NEUTRAL_SCORE;
    }
    let total: f64 = parts
        .iter()
        .map(|(question, table)| map_answer_to_score(answers, *question, *table))
        .sum();
    total / parts.len() as f64
}

/// First candidate with the highest score. Ties keep declaration order.
pub fn pick_highest<T: Copy>(candidates: &[(T, f64)]) -> Option<T> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.first().map(|(label, _)| *label)
}

pub fn personality_traits(answers: &AnswersMap) -> PersonalityTraits {
    PersonalityTraits {
        openness: clamp_score(weighted(
            answers,
            &[(9, [90, 70, 45, 20], 0.6), (5, [85, 65, 40, 25], 0.4)],
        )),
        conscientiousness: clamp_score(weighted(
            answers,
            &[(3, [90, 70, 40, 20], 0.5), (7, [85, 70, 45, 25], 0.5)],
        )),
        extraversion: clamp_score(weighted(
            answers,
            &[(1, [90, 65, 35, 15], 0.7), (6, [80, 60, 40, 20], 0.3)],
        )),
        agreeableness: clamp_score(weighted(
            answers,
            &[(4, [90, 70, 45, 20], 0.6), (10, [85, 65, 45, 25], 0.4)],
        )),
        neuroticism: clamp_score(weighted(
            answers,
            &[(2, [20, 40, 65, 85], 0.6), (8, [15, 40, 60, 80], 0.4)],
        )),
    }
}

fn attachment_sum(answers: &AnswersMap, tables: &[Table; 5]) -> f64 {
    ATTACHMENT_QUESTIONS
        .iter()
        .zip(tables.iter())
        .map(|((question, weight), table)| map_answer_to_score(answers, *question, *table) * weight)
        .sum()
}

/// Competing attachment scores in tie-break order.
pub fn attachment_scores(answers: &AnswersMap) -> [(AttachmentStyle, f64); 4] {
    let secure = attachment_sum(answers, &SECURE_TABLES);
    let anxious = attachment_sum(answers, &ANXIOUS_TABLES);
    let avoidant = attachment_sum(answers, &AVOIDANT_TABLES);
    let fearful = anxious.min(avoidant);

    [
        (AttachmentStyle::Secure, secure),
        (AttachmentStyle::Anxious, anxious),
        (AttachmentStyle::Avoidant, avoidant),
        (AttachmentStyle::Fearful, fearful),
    ]
}

pub fn attachment_style(answers: &AnswersMap) -> AttachmentStyle {
    pick_highest(&attachment_scores(answers)).unwrap_or(AttachmentStyle::Secure)
}

pub fn mbti_type(answers: &AnswersMap) -> MbtiType {
    let extraversion = weighted(
        answers,
        &[(1, [90, 65, 35, 15], 0.6), (6, [80, 60, 40, 20], 0.4)],
    );
    let intuition = weighted(
        answers,
        &[(5, [85, 65, 40, 25], 0.5), (9, [90, 70, 45, 20], 0.5)],
    );
    let sensing = map_answer_to_score(answers, 3, [80, 60, 40, 20]);
    let thinking = weighted(
        answers,
        &[(14, [20, 40, 65, 85], 0.6), (4, [15, 35, 60, 80], 0.4)],
    );
    let judging = weighted(
        answers,
        &[(3, [90, 70, 40, 20], 0.6), (7, [85, 70, 45, 25], 0.4)],
    );

    let sides = [
        (extraversion, 100.0 - extraversion),
        (sensing, intuition),
        (thinking, 100.0 - thinking),
        (judging, 100.0 - judging),
    ];

    let mut letters = [0u8; 4];
    for (slot, ((first, second), (first_score, second_score))) in letters
        .iter_mut()
        .zip(MbtiType::AXES.iter().zip(sides.iter()))
    {
        *slot = pick_highest(&[(*first, *first_score), (*second, *second_score)]).unwrap_or(*first);
    }

    // every slot comes from its own axis pair
    MbtiType::from_letters(letters).unwrap_or(MbtiType::INFJ)
}

pub fn emotional_intelligence(answers: &AnswersMap) -> EmotionalIntelligence {
    EmotionalIntelligence {
        self_awareness: clamp_score(mean(
            answers,
            &[(11, [90, 70, 45, 20]), (17, [85, 65, 40, 20])],
        )),
        self_regulation: clamp_score(mean(
            answers,
            &[
                (18, [90, 65, 40, 20]),
                (20, [85, 70, 45, 20]),
                (2, [85, 65, 40, 20]),
            ],
        )),
        empathy: clamp_score(mean(
            answers,
            &[
                (13, [85, 70, 45, 20]),
                (17, [90, 70, 40, 20]),
                (4, [85, 65, 45, 25]),
            ],
        )),
        social_skills: clamp_score(mean(
            answers,
            &[
                (1, [80, 70, 45, 25]),
                (16, [85, 65, 40, 20]),
                (20, [85, 65, 45, 20]),
                (6, [80, 65, 45, 25]),
            ],
        )),
    }
}

pub fn core_values(answers: &AnswersMap) -> CoreValues {
    CoreValues {
        tradition: clamp_score(mean(
            answers,
            &[(21, [90, 65, 40, 15]), (26, [85, 65, 40, 20])],
        )),
        independence: clamp_score(mean(
            answers,
            &[(22, [90, 70, 40, 20]), (27, [85, 65, 45, 20])],
        )),
        family: clamp_score(mean(
            answers,
            &[
                (23, [90, 70, 45, 20]),
                (28, [85, 70, 40, 20]),
                (26, [80, 70, 50, 30]),
            ],
        )),
        ambition: clamp_score(mean(
            answers,
            &[(24, [90, 70, 40, 20]), (29, [85, 65, 40, 25])],
        )),
        open_mindedness: clamp_score(mean(
            answers,
            &[
                (25, [90, 70, 45, 20]),
                (30, [85, 65, 40, 20]),
                (9, [80, 65, 45, 30]),
            ],
        )),
    }
}

pub fn intimacy_profile(answers: &AnswersMap) -> IntimacyProfile {
    IntimacyProfile {
        traditionalism: clamp_score(mean(
            answers,
            &[(31, [90, 65, 40, 15]), (36, [85, 65, 40, 20])],
        )),
        physical_affection: clamp_score(mean(
            answers,
            &[(32, [90, 70, 45, 20]), (37, [85, 70, 40, 20])],
        )),
        communication: clamp_score(mean(
            answers,
            &[
                (33, [90, 70, 40, 20]),
                (38, [85, 65, 45, 20]),
                (34, [85, 70, 45, 25]),
            ],
        )),
        experimentation: clamp_score(mean(
            answers,
            &[
                (35, [90, 65, 40, 15]),
                (39, [85, 65, 40, 20]),
                (40, [80, 65, 45, 25]),
            ],
        )),
    }
}

/// Section a question id belongs to, or `None` outside 1..=40.
pub fn section_index(question: u32) -> Option<usize> {
    match question {
        1..=10 => Some(0),
        11..=20 => Some(1),
        21..=30 => Some(2),
        31..=40 => Some(3),
        _ => None,
    }
}

pub fn section_scores(answers: &AnswersMap) -> SectionScores {
    let mut totals = [0.0_f64; 4];
    let mut counts = [0_u32; 4];

    for (question, value) in answers {
        let Some(section) = section_index(*question) else {
            continue;
        };
        totals[section] += option_index(*value)
            .map(|index| f64::from(SECTION_TABLE[index]))
            .unwrap_or(NEUTRAL_SCORE);
        counts[section] += 1;
    }

    let average = |section: usize| {
        if counts[section] == 0 {
            clamp_score(NEUTRAL_SCORE)
        } else {
            clamp_score(totals[section] / f64::from(counts[section]))
        }
    };

    SectionScores {
        personality: average(0),
        emotional: average(1),
        values: average(2),
        physical: average(3),
    }
}

pub fn overall_score(
    sections: &SectionScores,
    attachment: AttachmentStyle,
    traits: &PersonalityTraits,
) -> f64 {
    let sectional = f64::from(sections.personality) * 0.25
        + f64::from(sections.emotional) * 0.30
        + f64::from(sections.values) * 0.25
        + f64::from(sections.physical) * 0.20;
    let personality = (100.0 - f64::from(traits.neuroticism)) * 0.1
        + f64::from(traits.agreeableness) * 0.05
        + f64::from(traits.openness) * 0.03;

    sectional + attachment.overall_adjustment() + personality
}

pub fn color_for_score(score: f64) -> OverallColor {
    if score >= GREEN_THRESHOLD {
        OverallColor::Green
    } else if score >= YELLOW_THRESHOLD {
        OverallColor::Yellow
    } else {
        OverallColor::Red
    }
}

/// Everything the scorer derives before any narrative text is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub overall: f64,
    pub overall_color: OverallColor,
    pub personality_traits: PersonalityTraits,
    pub attachment_style: AttachmentStyle,
    pub mbti_style: MbtiType,
    pub emotional_intelligence: EmotionalIntelligence,
    pub core_values: CoreValues,
    pub intimacy_profile: IntimacyProfile,
    pub section_scores: SectionScores,
}

impl Scores {
    pub fn from_answers(answers: &AnswersMap) -> Self {
        let personality_traits = personality_traits(answers);
        let attachment_style = attachment_style(answers);
        let section_scores = section_scores(answers);
        let overall = overall_score(&section_scores, attachment_style, &personality_traits);

        Self {
            overall,
            overall_color: color_for_score(overall),
            personality_traits,
            attachment_style,
            mbti_style: mbti_type(answers),
            emotional_intelligence: emotional_intelligence(answers),
            core_values: core_values(answers),
            intimacy_profile: intimacy_profile(answers),
            section_scores,
        }
    }
}
