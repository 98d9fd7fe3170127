use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::config::PASSING_SCORE_PERCENTAGE;

/// Outcome of a single answered question, as reported by the quiz client.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionOutcome {
    /// Whether the selected answer matched the correct one.
    #[serde(rename = "isMatch")]
    pub is_match: bool,

    /// Points the question was worth. Anything non-numeric in the incoming
    /// JSON deserializes to `None` and is ignored by the score sum.
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Final classification of a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStatus {
    Passed,
    Failed,
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizStatus::Passed => write!(f, "Passed"),
            QuizStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// Derived values of a completed quiz attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    /// Number of questions answered.
    pub attempted: usize,
    /// Sum of scores over matched answers with a numeric score.
    pub obtained_score: f64,
    pub total_score: f64,
    pub percent: f64,
    pub status: QuizStatus,
}

/// Computes the attempt summary from per-question outcomes.
///
/// Passing requires `obtained / total * 100 >= 60`; the boundary counts as
/// passed. A zero or negative total score never passes.
pub fn summarize(outcomes: &[QuestionOutcome], total_score: f64) -> ResultSummary {
    let attempted = outcomes.len();

    let obtained_score: f64 = outcomes
        .iter()
        .filter(|outcome| outcome.is_match)
        .filter_map(|outcome| outcome.score)
        .sum();

    if total_score <= 0.0 {
        return ResultSummary {
            attempted,
            obtained_score,
            total_score,
            percent: 0.0,
            status: QuizStatus::Failed,
        };
    }

    let percent = (obtained_score / total_score) * 100.0;
    let status = if percent >= PASSING_SCORE_PERCENTAGE {
        QuizStatus::Passed
    } else {
        QuizStatus::Failed
    };

    ResultSummary {
        attempted,
        obtained_score,
        total_score,
        percent,
        status,
    }
}

/// Text posted to LinkedIn when the user shares their result.
pub fn share_message(summary: &ResultSummary, quiz_title: &str) -> String {
    format!(
        "I just completed {}! I scored {}/{} and achieved the status of {}. 🎉",
        quiz_title, summary.obtained_score, summary.total_score, summary.status
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(is_match: bool, score: Option<f64>) -> QuestionOutcome {
        QuestionOutcome { is_match, score }
    }

    #[test]
    fn obtained_score_sums_only_matched_numeric_scores() {
        let outcomes = vec![
            outcome(true, Some(10.0)),
            outcome(false, Some(10.0)),
            outcome(true, None),
            outcome(true, Some(5.0)),
        ];

        let summary = summarize(&outcomes, 100.0);
        assert_eq!(summary.attempted, 4);
        assert_eq!(summary.obtained_score, 15.0);
        assert_eq!(summary.status, QuizStatus::Failed);
    }

    #[test]
    fn passing_boundary_is_inclusive() {
        let outcomes = vec![outcome(true, Some(12.0))];

        let summary = summarize(&outcomes, 20.0);
        assert_eq!(summary.percent, 60.0);
        assert_eq!(summary.status, QuizStatus::Passed);
    }

    #[test]
    fn just_below_the_boundary_fails() {
        let outcomes = vec![outcome(true, Some(59.9))];

        let summary = summarize(&outcomes, 100.0);
        assert_eq!(summary.status, QuizStatus::Failed);
    }

    #[test]
    fn zero_total_score_fails_without_dividing() {
        let summary = summarize(&[], 0.0);
        assert_eq!(summary.attempted, 0);
        assert_eq!(summary.percent, 0.0);
        assert_eq!(summary.status, QuizStatus::Failed);
    }

    #[test]
    fn deserialization_ignores_non_numeric_scores() {
        let outcomes: Vec<QuestionOutcome> = serde_json::from_value(serde_json::json!([
            { "isMatch": true, "score": 10 },
            { "isMatch": true, "score": "N/A" },
            { "isMatch": true, "score": null },
            { "isMatch": false }
        ]))
        .unwrap();

        assert_eq!(outcomes[0].score, Some(10.0));
        assert_eq!(outcomes[1].score, None);
        assert_eq!(outcomes[2].score, None);
        assert_eq!(outcomes[3].score, None);

        let summary = summarize(&outcomes, 20.0);
        assert_eq!(summary.obtained_score, 10.0);
    }

    #[test]
    fn share_message_reports_score_and_status() {
        let outcomes = vec![outcome(true, Some(75.0))];
        let summary = summarize(&outcomes, 100.0);

        assert_eq!(
            share_message(&summary, "The Lube Buzz Quiz 2024"),
            "I just completed The Lube Buzz Quiz 2024! I scored 75/100 and achieved the status of Passed. 🎉"
        );
    }
}
