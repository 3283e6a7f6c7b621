use super::Feature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FewShotExample {
    pub input: &'static str,
    pub output: &'static str,
}

const SUMMARIZE_INSTRUCTION: &str =
    "Provide a concise summary with clear, bullet-pointed key points.";

const SUMMARIZE_EXAMPLES: &[FewShotExample] = &[
    FewShotExample {
        input: "Machine learning is a method of data analysis that automates analytical model building. It is a branch of artificial intelligence based on the idea that systems can learn from data, identify patterns and make decisions with minimal human intervention.",
        output: "Key Points:\n• Machine learning is a data analysis method within artificial intelligence\n• Focuses on systems learning and identifying patterns automatically\n• Minimizes the need for human intervention in analytical processes",
    },
    FewShotExample {
        input: "Climate change is a long-term shift in global or regional climate patterns. It involves changes in temperature, precipitation, and extreme weather events, primarily driven by human activities like greenhouse gas emissions.",
        output: "Key Points:\n• Climate change represents significant long-term shifts in global weather patterns\n• Involves changes in temperature, precipitation, and extreme weather\n• Primarily attributed to human-induced greenhouse gas emissions",
    },
];

const FEEDBACK_INSTRUCTION: &str =
    "Provide constructive feedback focusing on structure, clarity, and completeness in a concise, professional manner.";

const FEEDBACK_EXAMPLES: &[FewShotExample] = &[
    FewShotExample {
        input: "The research paper discusses the impact of social media on mental health among teenagers. It explores various psychological effects and suggests potential mitigation strategies.",
        output: "Feedback:\n• Structure: Clear progression from problem identification to potential solutions\n• Clarity: Technical terms are well-explained, making the content accessible\n• Completeness: Covers multiple dimensions of the social media-mental health relationship",
    },
];

const EXTRACT_INSTRUCTION: &str =
    "Extract key sections with clear, concise descriptions.";

const EXTRACT_EXAMPLES: &[FewShotExample] = &[
    FewShotExample {
        input: "A comprehensive study on renewable energy implementation in urban environments. The research examines solar and wind energy potential in metropolitan areas, analyzing infrastructure challenges and economic feasibility. Key objectives include identifying sustainable energy solutions and reducing carbon emissions.",
        output: "Key Sections:\n• Problem Statement: Urban energy sustainability and carbon emission reduction\n• Objectives: Identify renewable energy potential in metropolitan settings\n• Methodology: Analyzing solar and wind energy infrastructure and economic viability\n• Conclusions: Potential for implementable sustainable urban energy solutions",
    },
];

const QUESTIONS_INSTRUCTION: &str =
    "Generate thought-provoking, academically relevant questions.";

const QUESTIONS_EXAMPLES: &[FewShotExample] = &[
    FewShotExample {
        input: "Artificial Intelligence represents a transformative technology that combines machine learning, neural networks, and advanced algorithms to create systems capable of performing complex cognitive tasks.",
        output: "Viva/Presentation Questions:\n1. How do neural networks differ from traditional computing approaches?\n2. What are the ethical considerations in AI development?\n3. Explain the role of machine learning in AI system evolution\n4. Discuss potential limitations of current AI technologies",
    },
];

const GRADE_INSTRUCTION: &str =
    "Grade the submission against the rubric. Score each criterion, justify each score in one sentence, and finish with a total.";

const GRADE_EXAMPLES: &[FewShotExample] = &[
    FewShotExample {
        input: "Rubric: Thesis (5), Evidence (5), Writing (5). Submission: Remote work improves productivity because employees avoid commuting. A 2020 survey found most workers felt more focused at home.",
        output: "Grade:\n• Thesis: 4/5 - Clear claim, but scope is not qualified\n• Evidence: 2/5 - A single unnamed survey does not support the claim\n• Writing: 4/5 - Concise and readable, with few transitions\nTotal: 10/15",
    },
];

pub fn instruction(feature: Feature) -> &'static str {
    match feature {
        Feature::Summarize => SUMMARIZE_INSTRUCTION,
        Feature::Feedback => FEEDBACK_INSTRUCTION,
        Feature::Extract => EXTRACT_INSTRUCTION,
        Feature::Questions => QUESTIONS_INSTRUCTION,
        Feature::Grade => GRADE_INSTRUCTION,
    }
}

pub fn examples(feature: Feature) -> &'static [FewShotExample] {
    match feature {
        Feature::Summarize => SUMMARIZE_EXAMPLES,
        Feature::Feedback => FEEDBACK_EXAMPLES,
        Feature::Extract => EXTRACT_EXAMPLES,
        Feature::Questions => QUESTIONS_EXAMPLES,
        Feature::Grade => GRADE_EXAMPLES,
    }
}
