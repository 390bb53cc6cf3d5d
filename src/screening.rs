//! Crisis screening: keyword detection of self-harm language in free text.
//!
//! DESIGN
//! ======
//! `screen` is a total, stateless function of the current text so any entry
//! point (composer, CLI, batch import) can call it. Matching is a
//! case-insensitive substring test against a fixed list; the first keyword in
//! list order wins, regardless of where it occurs in the text.
//!
//! TRADE-OFFS
//! ==========
//! No tokenization, stemming or accent normalization. "chán sống" written
//! with decomposed diacritics, or with extra spacing, will not match, and
//! "suicide prevention week" will.

/// Trigger phrases, matched in this order.
pub const CRISIS_KEYWORDS: [&str; 8] = [
    "tự tử",
    "tự làm đau",
    "chán sống",
    "trầm cảm nặng",
    "hủy hoại bản thân",
    "suicide",
    "kill myself",
    "end my life",
];

/// Return the first trigger phrase contained in `text`, if any.
#[must_use]
pub fn screen(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        return None;
    }
    let lowered = text.to_lowercase();
    CRISIS_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
}

// =============================================================================
// DISCLOSURE FLAG
// =============================================================================

/// Visibility of the crisis disclosure for one composer.
///
/// Dismissing only hides the notice; the next matching input shows it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CrisisAlert {
    visible: bool,
}

impl CrisisAlert {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen the current input and raise the flag on a match.
    pub fn observe(&mut self, text: &str) -> Option<&'static str> {
        let hit = screen(text);
        if let Some(keyword) = hit {
            tracing::debug!(keyword, "crisis keyword detected");
            self.visible = true;
        }
        hit
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

// =============================================================================
// NOTICE CONTENT
// =============================================================================

/// Text shown when the disclosure is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrisisNotice {
    pub title: &'static str,
    pub message: &'static str,
    pub resources: &'static [&'static str],
    pub acknowledge: &'static str,
}

pub const CRISIS_NOTICE: CrisisNotice = CrisisNotice {
    title: "Dấu hiệu khủng hoảng được phát hiện",
    message: "Mình rất tiếc vì bạn đang trải qua cảm xúc nặng nề. \
              Hãy nói chuyện với người tin cậy (gia đình, giáo viên, bạn thân). \
              Nếu thấy nguy cấp, gọi 115 hoặc liên hệ trung tâm tư vấn tâm lý tại địa phương.",
    resources: &[
        "Giáo viên chủ nhiệm / Tổ tư vấn tâm lý trường.",
        "Đường dây nóng Bệnh viện Tâm thần địa phương.",
        "Bạn có thể chuyển bài viết sang riêng tư trong Nhật ký.",
    ],
    acknowledge: "Đã hiểu",
};

#[cfg(test)]
#[path = "screening_test.rs"]
mod tests;
