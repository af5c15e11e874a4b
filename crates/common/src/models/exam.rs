use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ExamStatus;
use crate::table::{TableHeader, TableResource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subject: Option<Subject>,
    pub status: ExamStatus,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub questions_count: u32,
    #[serde(default)]
    pub total_marks: Option<f64>,
}

impl TableResource for Exam {
    fn table_header(t: &dyn Fn(&str) -> String) -> Vec<TableHeader> {
        vec![
            TableHeader::new("id", "#"),
            TableHeader::new("title", t("title")),
            TableHeader::new("subject.name", t("subject")).with_icon("book"),
            TableHeader::new("status", t("status")),
            TableHeader::new("startDate", t("start_date")).with_icon("calendar"),
            TableHeader::new("durationMinutes", t("duration")).with_icon("clock"),
            TableHeader::new("questionsCount", t("questions_count")),
        ]
    }
}
