use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Question id (1..=40) to selected option index (0..=3).
pub type AnswersMap = BTreeMap<u32, i32>;

pub const QUESTION_COUNT: u32 = 40;
pub const OPTION_COUNT: i32 = 4;

/// One persisted quiz-answer row.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRecord {
    #[serde(alias = "questionId", alias = "question")]
    pub question_id: u32,
    #[serde(
        alias = "answerIndex",
        alias = "answer",
        alias = "selectedOption",
        alias = "selected_option"
    )]
    pub answer_index: i32,
}

pub fn parse_answers(content: &str) -> Result<AnswersMap> {
    if content.trim().is_empty() {
        bail!("answers input is empty");
    }

    let mut payload =
        serde_json::from_str::<Value>(content).context("answers input is not valid JSON")?;
    if let Value::Object(object) = &mut payload {
        if let Some(inner) = object.remove("answers") {
            payload = inner;
        }
    }

    let answers = match payload {
        Value::Object(object) => from_object(object)?,
        Value::Array(_) => {
            let records = serde_json::from_value::<Vec<AnswerRecord>>(payload)
                .context("failed parsing answer records")?;
            from_records(records)
        }
        _ => bail!(
            "answers must be a JSON object of question id to option index, \
             an {{\"answers\": ...}} wrapper, or an array of answer records"
        ),
    };

    report_out_of_range(&answers);
    Ok(answers)
}

fn from_object(object: Map<String, Value>) -> Result<AnswersMap> {
    let mut answers = AnswersMap::new();
    for (key, value) in object {
        let question = key
            .trim()
            .parse::<u32>()
            .with_context(|| format!("question id {key:?} is not a positive integer"))?;
        let index = value
            .as_i64()
            .and_then(|index| i32::try_from(index).ok())
            .with_context(|| format!("answer for question {question} is not an integer: {value}"))?;
        answers.insert(question, index);
    }
    Ok(answers)
}

pub fn from_records(records: impl IntoIterator<Item = AnswerRecord>) -> AnswersMap {
    let mut answers = AnswersMap::new();
    for record in records {
        if let Some(previous) = answers.insert(record.question_id, record.answer_index) {
            debug!(
                question = record.question_id,
                previous,
                current = record.answer_index,
                "duplicate answer record, keeping the later one"
            );
        }
    }
    answers
}

fn report_out_of_range(answers: &AnswersMap) {
    for (question, index) in answers {
        if !(1..=QUESTION_COUNT).contains(question) {
            warn!(question, "answer for unknown question id is ignored by section scoring");
        }
        if !(0..OPTION_COUNT).contains(index) {
            warn!(question, index, "option index out of range, scored as neutral");
        }
    }
}

/// Stable FNV-1a hash of the answers, used to seed tip selection.
pub fn fingerprint(answers: &AnswersMap) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    let mut hash = OFFSET;
    for (question, index) in answers {
        for byte in question.to_le_bytes().into_iter().chain(index.to_le_bytes()) {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(PRIME);
        }
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_map() {
        let parsed = parse_answers(r#"{"1": 0, "2": 3, "12": 1}"#).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[&2], 3);
        assert_eq!(parsed[&12], 1);
    }

    #[test]
    fn parses_wrapped_map_and_records() {
        let wrapped = parse_answers(r#"{"answers": {"5": 2}}"#).unwrap();
        assert_eq!(wrapped[&5], 2);

        let records = parse_answers(
            r#"[
                {"questionId": 1, "answerIndex": 0},
                {"question_id": 2, "answer": 1},
                {"question": 3, "selectedOption": 2}
            ]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[&3], 2);

        let wrapped_records =
            parse_answers(r#"{"answers": [{"questionId": 7, "answerIndex": 3}]}"#).unwrap();
        assert_eq!(wrapped_records[&7], 3);
    }

    #[test]
    fn later_duplicate_record_wins() {
        let parsed = parse_answers(
            r#"[{"questionId": 4, "answerIndex": 0}, {"questionId": 4, "answerIndex": 2}]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[&4], 2);
    }

    #[test]
    fn keeps_out_of_range_entries() {
        let parsed = parse_answers(r#"{"41": 0, "3": 9, "4": -1}"#).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[&3], 9);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_answers("").is_err());
        assert!(parse_answers("not json").is_err());
        assert!(parse_answers(r#"{"one": 1}"#).is_err());
        assert!(parse_answers(r#"{"1": "a"}"#).is_err());
    }

    #[test]
    fn fingerprint_is_stable_and_order_independent() {
        let a: AnswersMap = [(1, 0), (2, 1)].into_iter().collect();
        let b: AnswersMap = [(2, 1), (1, 0)].into_iter().collect();
        let c: AnswersMap = [(1, 1), (2, 1)].into_iter().collect();
        assert_eq!(fingerprint(&a), fingerprint(&b));
        assert_ne!(fingerprint(&a), fingerprint(&c));
        assert_eq!(fingerprint(&AnswersMap::new()), 0xcbf2_9ce4_8422_2325);
    }
}
