//! Fixed mentor directory.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mentor {
    pub name: &'static str,
    pub contact: &'static str,
    pub topics: &'static [&'static str],
    pub office: &'static str,
}

impl Mentor {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact)
    }
}

pub static MENTORS: [Mentor; 2] = [
    Mentor {
        name: "Cô H., Tâm lý học đường",
        contact: "co.h@example.edu",
        topics: &["Căng thẳng thi cử", "Kỹ năng học"],
        office: "Phòng Tư vấn",
    },
    Mentor {
        name: "Anh T., Kỹ sư phần mềm",
        contact: "anh.t@company.com",
        topics: &["CNTT", "Dự án sinh viên"],
        office: "Online",
    },
];

/// Mentors with a topic containing `query`, case-insensitively. A blank query
/// matches everyone.
#[must_use]
pub fn mentors_for_topic(query: &str) -> Vec<&'static Mentor> {
    let needle = query.trim().to_lowercase();
    MENTORS
        .iter()
        .filter(|m| {
            needle.is_empty() || m.topics.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
#[path = "mentors_test.rs"]
mod tests;
