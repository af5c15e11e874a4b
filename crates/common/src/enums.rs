use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// Wire values the client does not recognise decode to `Unknown` so one new
// backend status cannot fail a whole page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExamStatus {
    Draft,
    Scheduled,
    Active,
    Completed,
    Cancelled,
    Unknown,
}

impl ExamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamStatus::Draft => "DRAFT",
            ExamStatus::Scheduled => "SCHEDULED",
            ExamStatus::Active => "ACTIVE",
            ExamStatus::Completed => "COMPLETED",
            ExamStatus::Cancelled => "CANCELLED",
            ExamStatus::Unknown => "UNKNOWN",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            ExamStatus::Draft => "exam_status_draft",
            ExamStatus::Scheduled => "exam_status_scheduled",
            ExamStatus::Active => "exam_status_active",
            ExamStatus::Completed => "exam_status_completed",
            ExamStatus::Cancelled => "exam_status_cancelled",
            ExamStatus::Unknown => "unknown",
        }
    }

    /// Whether the exam can still be edited by an administrator.
    pub fn is_editable(&self) -> bool {
        matches!(self, ExamStatus::Draft | ExamStatus::Scheduled)
    }
}

impl FromStr for ExamStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(ExamStatus::Draft),
            "SCHEDULED" => Ok(ExamStatus::Scheduled),
            "ACTIVE" => Ok(ExamStatus::Active),
            "COMPLETED" => Ok(ExamStatus::Completed),
            "CANCELLED" => Ok(ExamStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl From<String> for ExamStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(ExamStatus::Unknown)
    }
}

impl From<ExamStatus> for String {
    fn from(status: ExamStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
    Unknown,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionType::TrueFalse => "TRUE_FALSE",
            QuestionType::ShortAnswer => "SHORT_ANSWER",
            QuestionType::Essay => "ESSAY",
            QuestionType::Unknown => "UNKNOWN",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "question_type_multiple_choice",
            QuestionType::TrueFalse => "question_type_true_false",
            QuestionType::ShortAnswer => "question_type_short_answer",
            QuestionType::Essay => "question_type_essay",
            QuestionType::Unknown => "unknown",
        }
    }

    pub fn is_auto_graded(&self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::TrueFalse)
    }
}

impl FromStr for QuestionType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MULTIPLE_CHOICE" => Ok(QuestionType::MultipleChoice),
            "TRUE_FALSE" => Ok(QuestionType::TrueFalse),
            "SHORT_ANSWER" => Ok(QuestionType::ShortAnswer),
            "ESSAY" => Ok(QuestionType::Essay),
            _ => Err(()),
        }
    }
}

impl From<String> for QuestionType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(QuestionType::Unknown)
    }
}

impl From<QuestionType> for String {
    fn from(kind: QuestionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
            Difficulty::Unknown => "UNKNOWN",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "difficulty_easy",
            Difficulty::Medium => "difficulty_medium",
            Difficulty::Hard => "difficulty_hard",
            Difficulty::Unknown => "unknown",
        }
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            _ => Err(()),
        }
    }
}

impl From<String> for Difficulty {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Difficulty::Unknown)
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.as_str().to_string()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
