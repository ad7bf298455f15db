use crate::core::preview::PreviewProfile;
use crate::core::profile::{AttachmentStyle, CompatibilityProfile, OverallColor, SectionScores};
use colored::Colorize;
use serde::Serialize;

const BAR_WIDTH: usize = 20;

/// Presentation text for an attachment style. Not part of the stored profile.
pub fn attachment_description(style: AttachmentStyle) -> &'static str {
    match style {
        AttachmentStyle::Secure => {
            "Comfortable with intimacy and independence; trusts partners and communicates needs openly."
        }
        AttachmentStyle::Anxious => {
            "Craves closeness and worries about a partner's commitment; sensitive to signs of distance."
        }
        AttachmentStyle::Avoidant => {
            "Values self-reliance and may keep partners at arm's length when closeness grows."
        }
        AttachmentStyle::Fearful => {
            "Wants connection but fears getting hurt, which can lead to push-pull patterns."
        }
    }
}

fn colored_label(color: OverallColor) -> String {
    let label = color.as_str().to_ascii_uppercase();
    match color {
        OverallColor::Green => label.green().bold().to_string(),
        OverallColor::Yellow => label.yellow().bold().to_string(),
        OverallColor::Red => label.red().bold().to_string(),
    }
}

pub fn score_bar(score: u8) -> String {
    let score = score.min(100);
    let filled = (usize::from(score) * BAR_WIDTH + 50) / 100;
    format!(
        "{}{} {:>3}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        score
    )
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    #[serde(flatten)]
    pub profile: CompatibilityProfile,
    pub attachment_description: String,
}

impl From<&CompatibilityProfile> for ProfileReport {
    fn from(profile: &CompatibilityProfile) -> Self {
        Self {
            profile: profile.clone(),
            attachment_description: attachment_description(profile.attachment_style).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewReport {
    #[serde(flatten)]
    pub preview: PreviewProfile,
    pub attachment_description: String,
}

impl From<&PreviewProfile> for PreviewReport {
    fn from(preview: &PreviewProfile) -> Self {
        Self {
            preview: preview.clone(),
            attachment_description: attachment_description(preview.attachment_style).to_string(),
        }
    }
}

fn print_heading(title: &str) {
    println!();
    println!("{}", title.bold());
}

fn print_list(title: &str, items: &[String]) {
    print_heading(title);
    for item in items {
        println!("  - {}", item);
    }
}

fn print_rows(title: &str, rows: &[(&str, u8)]) {
    print_heading(title);
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, score) in rows {
        println!("  {:<width$}  {}", label, score_bar(*score), width = width);
    }
}

fn print_sections(sections: &SectionScores) {
    print_rows(
        "Section scores",
        &[
            ("Personality", sections.personality),
            ("Emotional", sections.emotional),
            ("Values", sections.values),
            ("Physical", sections.physical),
        ],
    );
}

fn print_summary(color: OverallColor, attachment: AttachmentStyle, mbti: &str, description: &str) {
    println!("Compatibility: {}", colored_label(color));
    println!(
        "Attachment style: {} ({})",
        attachment,
        attachment_description(attachment)
    );
    println!("Personality type: {}", mbti);
    println!();
    println!("{}", description);
}

pub fn print_human(profile: &CompatibilityProfile) {
    print_summary(
        profile.overall_color,
        profile.attachment_style,
        profile.mbti_style.as_str(),
        &profile.description,
    );

    let traits = &profile.personality_traits;
    print_rows(
        "Personality traits",
        &[
            ("Openness", traits.openness),
            ("Conscientiousness", traits.conscientiousness),
            ("Extraversion", traits.extraversion),
            ("Agreeableness", traits.agreeableness),
            ("Neuroticism", traits.neuroticism),
        ],
    );

    let eq = &profile.emotional_intelligence;
    print_rows(
        "Emotional intelligence",
        &[
            ("Self-awareness", eq.self_awareness),
            ("Self-regulation", eq.self_regulation),
            ("Empathy", eq.empathy),
            ("Social skills", eq.social_skills),
        ],
    );

    let values = &profile.core_values;
    print_rows(
        "Core values",
        &[
            ("Tradition", values.tradition),
            ("Independence", values.independence),
            ("Family", values.family),
            ("Ambition", values.ambition),
            ("Open-mindedness", values.open_mindedness),
        ],
    );

    let intimacy = &profile.intimacy_profile;
    print_rows(
        "Intimacy profile",
        &[
            ("Traditionalism", intimacy.traditionalism),
            ("Physical affection", intimacy.physical_affection),
            ("Communication", intimacy.communication),
            ("Experimentation", intimacy.experimentation),
        ],
    );

    print_sections(&profile.section_scores);

    let sw = &profile.strengths_weaknesses;
    print_list("Strengths", &sw.strengths);
    print_list("Challenges", &sw.challenges);
    print_list("Growth areas", &sw.growth_areas);

    let types = &profile.compatible_types;
    print_list("Most compatible", &types.most_compatible);
    print_list("Challenging matches", &types.challenging_matches);
    println!("{}", types.rationale);

    print_list("Insights", &profile.compatibility_insights);
    print_list("Relationship tips", &profile.relationship_tips);
}

pub fn print_preview(preview: &PreviewProfile) {
    print_summary(
        preview.overall_color,
        preview.attachment_style,
        preview.mbti_style.as_str(),
        &preview.description,
    );
    print_sections(&preview.section_scores);
    print_list("Top strengths", &preview.strengths);
    print_list("Top challenges", &preview.challenges);
    print_list("Best match", &preview.most_compatible);
    print_list("Hardest match", &preview.challenging_matches);

    println!();
    println!("{}", "-> run `pairscore score` for the full report".dimmed());
}
