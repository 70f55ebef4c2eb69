// Fixed prompt fragments shared by the assembler and the fitting strategies.
// Category-specific text lives in catalog::instructions.

/// Opening of the task statement; followed by the topic and a period.
pub const TASK_PREFIX: &str = "Identify and explain ";

/// Prefix of the optional topic-detail line.
pub const DETAIL_PREFIX: &str = "Additional context: ";

/// Prefix of the audience line; followed by the audience description and a period.
pub const AUDIENCE_PREFIX: &str = "Audience is ";

/// Low-priority boilerplate lines, the first content dropped when over budget.
pub const BOILERPLATE_SPECIFIC: &str = "Be specific and to the point.";
pub const BOILERPLATE_EXAMPLES: &str = "Provide relevant examples.";

pub const COLOR_ACCENT: &str =
    "Use colored markers (specifically teal, orange, and muted red) for simple shading and accents.";

pub const OPTIMIZATION_BLOCK: &str = r#"IMPORTANT - DALL-E 3 OPTIMIZATION:
- Use MINIMAL TEXT (only essential keywords in English)
- Focus on VISUAL COMMUNICATION: icons, symbols, illustrations, metaphors
- Keep any text SHORT, BOLD, and LEGIBLE (1-3 words maximum per label)
- Use numbers (1,2,3) and arrows instead of sentences
- Ensure high contrast and clarity for easy reading
- Make it universally understandable without relying on text"#;

pub const QUALITY_BLOCK: &str = r#"Ensure the visual is CLEAR, ORGANIZED, and PROFESSIONAL.
Avoid clutter and maintain excellent visual hierarchy.
Create a publication-quality image with crisp details."#;

/// Appended after a structural-fallback hard cut.
pub const CONTENT_SUMMARIZED_MARKER: &str = "\n\n(Content summarized to fit limit)";

/// Appended after the final safety-check hard cut.
pub const SUMMARIZED_MARKER: &str = "\n\n(Summarized)";

/// Appended to a shortened detail excerpt.
pub const ELLIPSIS: &str = "...";

/// Returned by the preview when no topic has been entered yet.
pub const PREVIEW_EMPTY: &str = "주제를 입력하세요...";
