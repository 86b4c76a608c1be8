//! Read-only expert Q&A listing with text search and category filtering.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Expert {
    pub id: u32,
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QaEntry {
    pub id: u32,
    pub user: &'static str,
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub expert: &'static Expert,
    pub date: &'static str,
}

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QaQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<String>,
}

pub const ALL_CATEGORIES: &str = "all";

pub const CATEGORIES: [&str; 6] = [
    "Symptoms",
    "Treatment",
    "Nutrition",
    "Fertility",
    "Lifestyle",
    "Other",
];

pub static EXPERTS: [Expert; 4] = [
    Expert {
        id: 1,
        name: "Dr. Sarah Johnson",
        title: "Gynecologist, MD",
        bio: "Dr. Johnson is a board-certified gynecologist with over 15 years of experience specializing in PCOS and hormonal disorders.",
    },
    Expert {
        id: 2,
        name: "Dr. Michael Chen",
        title: "Endocrinologist, MD",
        bio: "Dr. Chen is an endocrinologist specializing in hormonal imbalances and has published extensive research on PCOS management.",
    },
    Expert {
        id: 3,
        name: "Dr. Lisa Patel",
        title: "Reproductive Specialist, MD",
        bio: "Dr. Patel focuses on fertility issues related to PCOS and has helped hundreds of women conceive despite their PCOS diagnosis.",
    },
    Expert {
        id: 4,
        name: "Emma Rodriguez, RD",
        title: "Registered Dietitian",
        bio: "Emma specializes in nutrition for hormonal health and helps women manage PCOS through evidence-based dietary approaches.",
    },
];

pub static ENTRIES: [QaEntry; 3] = [
    QaEntry {
        id: 1,
        user: "Anonymous",
        category: "Symptoms",
        question: "Is hair loss on the scalp common with PCOS? What treatments are most effective?",
        answer: "Yes, hair loss (androgenic alopecia) is a common symptom of PCOS due to excess androgens. Effective treatments include anti-androgen medications like spironolactone, minoxidil, and addressing underlying insulin resistance through diet and medications like metformin. Some women also benefit from low-dose birth control pills that contain anti-androgenic progestins.",
        expert: &EXPERTS[0],
        date: "2024-04-02",
    },
    QaEntry {
        id: 2,
        user: "Sarah T.",
        category: "Nutrition",
        question: "What diet is best for managing PCOS? Should I be completely avoiding carbs?",
        answer: "There's no one-size-fits-all diet for PCOS, but many women benefit from a lower glycemic index diet that focuses on complex carbohydrates rather than eliminating carbs completely. Prioritize whole foods, lean proteins, healthy fats, and plenty of vegetables. Aim for balanced meals that include moderate amounts of fiber-rich carbohydrates paired with protein and fat to minimize blood sugar spikes.",
        expert: &EXPERTS[3],
        date: "2024-03-28",
    },
    QaEntry {
        id: 3,
        user: "Michelle L.",
        category: "Fertility",
        question: "Can women with PCOS have successful pregnancies without medical intervention?",
        answer: "Yes, many women with PCOS can conceive naturally and have successful pregnancies without intervention. Lifestyle modifications like weight management (if needed), regular exercise, and a balanced diet can help regulate cycles and improve fertility. However, if you've been trying to conceive for over 6-12 months without success, I recommend seeking a fertility specialist who can provide appropriate treatment options.",
        expert: &EXPERTS[2],
        date: "2024-03-15",
    },
];

/// Entries whose question or answer contains `search` (case-insensitive) and whose category
/// matches. A missing, empty, or `all` category matches everything.
pub fn filter(search: &str, category: Option<&str>) -> Vec<&'static QaEntry> {
    let needle = search.to_lowercase();
    let category = category
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(ALL_CATEGORIES));

    ENTRIES
        .iter()
        .filter(|entry| {
            entry.question.to_lowercase().contains(&needle)
                || entry.answer.to_lowercase().contains(&needle)
        })
        .filter(|entry| {
            category
                .map(|wanted| entry.category.eq_ignore_ascii_case(wanted))
                .unwrap_or(true)
        })
        .collect()
}

pub fn search(query: &QaQuery) -> Vec<&'static QaEntry> {
    filter(&query.search, query.category.as_deref())
}
