//! Few-shot prompt catalogue for the assistant features.
//!
//! Every feature carries an instruction and a handful of worked examples.
//! The examples are shown to the model before the user's document so the
//! answer comes back in the same shape.

pub mod templates;

use serde::{Serialize, Deserialize};

pub use self::templates::FewShotExample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Summarize,
    Feedback,
    Extract,
    Questions,
    Grade,
}

impl Feature {
    pub const ALL: [Feature; 5] = [
        Feature::Summarize,
        Feature::Feedback,
        Feature::Extract,
        Feature::Questions,
        Feature::Grade,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Summarize => "summarize",
            Feature::Feedback => "feedback",
            Feature::Extract => "extract",
            Feature::Questions => "questions",
            Feature::Grade => "grade",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim_matches('"').to_lowercase().as_str() {
            "summarize" | "summary" => Some(Self::Summarize),
            "feedback" => Some(Self::Feedback),
            "extract" => Some(Self::Extract),
            "questions" => Some(Self::Questions),
            "grade" => Some(Self::Grade),
            _ => None,
        }
    }

    pub fn instruction(&self) -> &'static str {
        templates::instruction(*self)
    }

    pub fn examples(&self) -> &'static [FewShotExample] {
        templates::examples(*self)
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assemble the full prompt sent to the model for `content`.
///
/// `rubric` is only used by [`Feature::Grade`]; other features ignore it.
pub fn build_prompt(feature: Feature, content: &str, rubric: Option<&str>) -> String {
    let few_shot_context = feature
        .examples()
        .iter()
        .map(|ex| format!("Example Input: {}\nExample Output: {}", ex.input, ex.output))
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut instruction = feature.instruction().to_string();
    if feature == Feature::Grade {
        if let Some(rubric) = rubric.map(str::trim).filter(|r| !r.is_empty()) {
            instruction.push_str("\n\nRubric:\n");
            instruction.push_str(rubric);
        }
    }

    format!(
        "{}\n\nFew-shot Examples:\n{}\n\nNew Input:\n{}",
        instruction, few_shot_context, content
    )
}
