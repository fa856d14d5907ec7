use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::codec::entity;

use super::{MessageEntity, User};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PollType {
    Regular,
    Quiz,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    pub voter_count: i32,
}

/// A user's answer in a non-anonymous poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollAnswer {
    pub poll_id: String,
    pub user: User,
    /// Empty when the user retracted the vote.
    pub option_ids: Vec<i32>,
}

impl PollAnswer {
    pub fn is_retracted(&self) -> bool {
        self.option_ids.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_voter_count: i32,
    pub is_closed: bool,
    pub is_anonymous: bool,
    #[serde(rename = "type")]
    pub kind: PollType,
    pub allows_multiple_answers: bool,
    /// Quiz polls only, and only visible to the bot when it sent the poll or the poll is closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation_entities: Option<Vec<MessageEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<i64>,
}

impl Poll {
    pub fn closes_at(&self) -> Option<DateTime<Utc>> {
        self.close_date.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// Option with the most votes; the first one wins ties.
    pub fn leading_option(&self) -> Option<&PollOption> {
        self.options
            .iter()
            .rev()
            .max_by_key(|option| option.voter_count)
    }
}

entity!(PollType, PollOption, PollAnswer, Poll);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Entity;

    #[test]
    fn test_quiz_poll_decodes() {
        let poll = Poll::from_json(
            r#"{"id":"p1","question":"2+2?","options":[{"text":"3","voter_count":1},{"text":"4","voter_count":5}],
               "total_voter_count":6,"is_closed":true,"is_anonymous":false,"type":"quiz",
               "allows_multiple_answers":false,"correct_option_id":1}"#,
        )
        .unwrap();
        assert_eq!(poll.kind, PollType::Quiz);
        assert_eq!(poll.correct_option_id, Some(1));
        assert_eq!(poll.leading_option().unwrap().text, "4");
        assert!(poll.closes_at().is_none());
    }

    #[test]
    fn test_leading_option_prefers_first_on_tie() {
        let poll = Poll {
            id: "p".to_string(),
            question: "?".to_string(),
            options: vec![
                PollOption { text: "a".to_string(), voter_count: 2 },
                PollOption { text: "b".to_string(), voter_count: 2 },
            ],
            total_voter_count: 4,
            is_closed: false,
            is_anonymous: true,
            kind: PollType::Regular,
            allows_multiple_answers: false,
            correct_option_id: None,
            explanation: None,
            explanation_entities: None,
            open_period: None,
            close_date: None,
        };
        assert_eq!(poll.leading_option().unwrap().text, "a");
    }

    #[test]
    fn test_retracted_answer() {
        let answer = PollAnswer::from_json(
            r#"{"poll_id":"p","user":{"id":3,"is_bot":false,"first_name":"C"},"option_ids":[]}"#,
        )
        .unwrap();
        assert!(answer.is_retracted());
    }
}
