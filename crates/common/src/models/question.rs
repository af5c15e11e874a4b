use serde::{Deserialize, Serialize};

use crate::enums::{Difficulty, QuestionType};
use crate::table::{TableHeader, TableResource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub exam_id: Option<i64>,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn correct_options(&self) -> impl Iterator<Item = &AnswerOption> {
        self.options.iter().filter(|o| o.is_correct)
    }
}

impl TableResource for Question {
    fn table_header(t: &dyn Fn(&str) -> String) -> Vec<TableHeader> {
        vec![
            TableHeader::new("id", "#"),
            TableHeader::new("text", t("question_text")),
            TableHeader::new("type", t("question_type")),
            TableHeader::new("difficulty", t("difficulty")).with_icon("gauge"),
            TableHeader::new("points", t("points")),
        ]
    }
}
