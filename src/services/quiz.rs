//! Mini RIASEC personality quiz. Results are advisory and never persisted.
//!
//! Each statement scores one point for its dimension when checked. The
//! result code is the three highest-scoring dimensions; ties keep the
//! canonical R-I-A-S-E-C order.

use std::fmt;

use super::ServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl Dimension {
    pub const ALL: [Self; 6] = [
        Self::Realistic,
        Self::Investigative,
        Self::Artistic,
        Self::Social,
        Self::Enterprising,
        Self::Conventional,
    ];

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Realistic => 'R',
            Self::Investigative => 'I',
            Self::Artistic => 'A',
            Self::Social => 'S',
            Self::Enterprising => 'E',
            Self::Conventional => 'C',
        }
    }

    /// Suggested fields for this dimension.
    #[must_use]
    pub fn suggestion(self) -> &'static str {
        match self {
            Self::Investigative => "Khoa học dữ liệu, CNTT, nghiên cứu.",
            Self::Artistic => "Thiết kế đồ hoạ, truyền thông, UI/UX.",
            Self::Social => "Tâm lý học đường, giáo dục, y tế cộng đồng.",
            Self::Enterprising => "Quản trị kinh doanh, khởi nghiệp, marketing.",
            Self::Realistic => "Kỹ thuật, cơ khí, điện tử, kiến trúc.",
            Self::Conventional => "Kế toán, hành chính, phân tích nghiệp vụ.",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

pub struct Question {
    pub dimension: Dimension,
    pub text: &'static str,
}

pub const QUESTIONS: [Question; 6] = [
    Question {
        dimension: Dimension::Realistic,
        text: "Mình thích lắp ráp, sửa chữa thiết bị.",
    },
    Question {
        dimension: Dimension::Investigative,
        text: "Mình thích giải bài toán, phân tích dữ liệu.",
    },
    Question {
        dimension: Dimension::Artistic,
        text: "Mình thích vẽ, viết, làm nhạc hay thiết kế.",
    },
    Question {
        dimension: Dimension::Social,
        text: "Mình thích giúp đỡ, lắng nghe người khác.",
    },
    Question {
        dimension: Dimension::Enterprising,
        text: "Mình thích lãnh đạo, thuyết phục, tổ chức nhóm.",
    },
    Question {
        dimension: Dimension::Conventional,
        text: "Mình thích sắp xếp, làm việc với bảng biểu, hồ sơ.",
    },
];

/// Order in which suggestions are listed.
const SUGGESTION_ORDER: [Dimension; 6] = [
    Dimension::Investigative,
    Dimension::Artistic,
    Dimension::Social,
    Dimension::Enterprising,
    Dimension::Realistic,
    Dimension::Conventional,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    /// Three-letter code of the leading dimensions, e.g. `"ISA"`.
    pub code: String,
    pub scores: [(Dimension, u32); 6],
}

impl QuizResult {
    #[must_use]
    pub fn suggestions(&self) -> Vec<&'static str> {
        SUGGESTION_ORDER
            .into_iter()
            .filter(|d| self.code.contains(d.letter()))
            .map(Dimension::suggestion)
            .collect()
    }
}

/// Checkbox state for one pass through the quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizSheet {
    answers: [bool; 6],
}

impl QuizSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`ServiceError::OutOfRange`] for an index past the last question.
    pub fn set(&mut self, index: usize, checked: bool) -> Result<(), ServiceError> {
        let len = self.answers.len();
        let slot = self
            .answers
            .get_mut(index)
            .ok_or(ServiceError::OutOfRange { field: "questions", index, len })?;
        *slot = checked;
        Ok(())
    }

    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.answers.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn submit(&self) -> QuizResult {
        let mut scores = Dimension::ALL.map(|d| (d, 0u32));
        for (question, _) in QUESTIONS.iter().zip(self.answers).filter(|(_, checked)| *checked) {
            if let Some(entry) = scores.iter_mut().find(|(d, _)| *d == question.dimension) {
                entry.1 += 1;
            }
        }

        let mut ranked = scores;
        // Stable sort keeps R-I-A-S-E-C order among equal scores.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        let code = ranked.iter().take(3).map(|(d, _)| d.letter()).collect();
        QuizResult { code, scores }
    }
}

#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;
