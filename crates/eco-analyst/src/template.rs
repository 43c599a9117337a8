//! Templated analysis used when no generation backend is available.
//!
//! The numbers are fixed illustrative estimates and the winner rule is a
//! placeholder (longer subject name wins, ties go to the second subject).
//! Only the shape of the output is meaningful: a three-row impact table and a
//! one-sentence recommendation naming one of the two subjects.

use std::fmt::Write as _;

/// Prefix of the inline diagnostic written when a live generation call fails.
pub const GENERATION_ERROR_PREFIX: &str = "Error in AI processing";

const FALLBACK_NOTE: &str =
    "*Note: Running in fallback mode (live analysis unavailable). Displaying synthesized analysis.*";

/// `(better, worse)` cell values for each impact row.
const ROWS: [(&str, &str, &str); 3] = [
    ("Global Warming (kg CO2e/kg)", "2.5 (Est)", "8.1 (Est)"),
    ("Water Usage (L/kg)", "500 (Est)", "9,000 (Est)"),
    ("Circular Economy", "Compostable", "Landfill"),
];

/// True when `subject_a` is recommended over `subject_b`.
fn first_wins(subject_a: &str, subject_b: &str) -> bool {
    subject_a.chars().count() > subject_b.chars().count()
}

/// The subject the template recommends.
#[must_use]
pub fn winner<'a>(subject_a: &'a str, subject_b: &'a str) -> &'a str {
    if first_wins(subject_a, subject_b) {
        subject_a
    } else {
        subject_b
    }
}

#[must_use]
pub fn fallback_report(subject_a: &str, subject_b: &str) -> String {
    let a_wins = first_wins(subject_a, subject_b);
    let (winner, loser) = if a_wins {
        (subject_a, subject_b)
    } else {
        (subject_b, subject_a)
    };

    let mut rows = String::new();
    for (category, better, worse) in ROWS {
        let (a_cell, b_cell) = if a_wins { (better, worse) } else { (worse, better) };
        let _ = writeln!(
            rows,
            "| **{category}** | {a_cell} | {b_cell} | ✅ {winner} Better |"
        );
    }

    format!(
        "### 📊 Automated Sustainability Matrix (Safe Mode)

{FALLBACK_NOTE}

| Impact Category | **{subject_a}** | **{subject_b}** | Status |
| :--- | :--- | :--- | :--- |
{rows}
### 💡 System Recommendation
**{winner}** is recommended. The extracted data suggests it outperforms **{loser}** across all major environmental impact categories.
"
    )
}

/// Templated report preceded by an explicit note that the live call failed.
#[must_use]
pub fn degraded_report(error: &str, subject_a: &str, subject_b: &str) -> String {
    format!(
        "> **{GENERATION_ERROR_PREFIX}:** {error}. Falling back to manual analysis.\n\n{}",
        fallback_report(subject_a, subject_b)
    )
}
