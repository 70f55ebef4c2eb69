//! Length fitting for the final prompt.
//!
//! The image API rejects prompts above a hard character ceiling. Fitting works as an
//! ordered pipeline of strategies, each a pure `fn(&str, &FitContext) -> String`,
//! applied one after another until the text fits its budget:
//!
//! 1. Split the document at the style block into a topic section and an
//!    instructions section. The instructions are kept intact; the topic section
//!    gets whatever budget remains after a safety margin.
//! 2. Compress the topic section: shorten the detail, drop boilerplate, then keep
//!    only the essential lines.
//! 3. If the style block cannot be located, strip boilerplate everywhere and
//!    hard-cut with a marker.
//! 4. Final safety check: hard-cut with a short marker.
//!
//! All lengths are counted in `char`s, never bytes.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::composer::prompts::{
    AUDIENCE_PREFIX, BOILERPLATE_EXAMPLES, BOILERPLATE_SPECIFIC, CONTENT_SUMMARIZED_MARKER,
    DETAIL_PREFIX, ELLIPSIS, SUMMARIZED_MARKER, TASK_PREFIX,
};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Character budget of the final prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptLimits {
    /// Hard ceiling imposed by the image API.
    pub max_chars: usize,
    /// Slack reserved between the topic section and the ceiling.
    pub topic_margin: usize,
    /// Length a long topic detail is cut down to before the ellipsis.
    pub detail_excerpt_chars: usize,
    /// Characters given up at the end of a hard cut to make room for its marker.
    pub truncation_reserve: usize,
}

impl Default for PromptLimits {
    fn default() -> Self {
        Self {
            max_chars: 4000,
            topic_margin: 100,
            detail_excerpt_chars: 100,
            truncation_reserve: 50,
        }
    }
}

/// What the clamp needs to know about the document it is fitting.
#[derive(Debug, Clone, Copy)]
pub struct ClampContext<'a> {
    /// The style instruction block; its first occurrence after a blank line marks
    /// the start of the instructions section.
    pub style_block: &'a str,
    pub topic_detail: Option<&'a str>,
}

/// Input handed to every fitting strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitContext<'a> {
    /// Target length in chars.
    pub budget: usize,
    /// Headroom a line-based rebuild keeps below `budget`.
    pub reserve: usize,
    /// Fewest lines a line-dropping strategy may leave behind.
    pub min_lines: usize,
    pub topic_detail: Option<&'a str>,
    pub excerpt_chars: usize,
}

/// One step of a fitting pipeline.
pub type FittingStrategy = fn(&str, &FitContext<'_>) -> String;

/// Topic-section compression, in priority order.
pub const TOPIC_STRATEGIES: &[(&str, FittingStrategy)] = &[
    ("shorten_detail", shorten_detail),
    ("drop_boilerplate", drop_boilerplate),
    ("keep_essential_lines", keep_essential_lines),
];

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Clamps `text` to `limits.max_chars`. Text already within the limit is returned unchanged.
pub fn clamp_prompt(text: &str, ctx: &ClampContext<'_>, limits: &PromptLimits) -> String {
    let limit = limits.max_chars;
    let original_len = char_len(text);
    if original_len <= limit {
        return text.to_string();
    }

    info!("Prompt too long ({original_len} chars), fitting to {limit} chars");

    let mut fitted = match split_at_style_block(text, ctx.style_block) {
        Some((topic, instructions)) => fit_topic_section(topic, instructions, ctx, limits),
        None => {
            debug!("Style block not found, using structural fallback");
            structural_fallback(text, limits)
        }
    };

    if char_len(&fitted) > limit {
        fitted = hard_truncate(&fitted, limits, SUMMARIZED_MARKER);
    }

    info!(
        "Fitted prompt from {} to {} chars",
        original_len,
        char_len(&fitted)
    );
    fitted
}

/// Runs `strategies` in order, stopping as soon as `text` fits `ctx.budget`.
pub fn apply_strategies(
    text: String,
    strategies: &[(&str, FittingStrategy)],
    ctx: &FitContext<'_>,
) -> String {
    let mut text = text;
    for (name, strategy) in strategies {
        if char_len(&text) <= ctx.budget {
            break;
        }
        text = strategy(&text, ctx);
        debug!(
            strategy = *name,
            length = char_len(&text),
            budget = ctx.budget,
            "Applied fitting strategy"
        );
    }
    text
}

/// Cuts `text` so that, with `marker` appended, the result fits `limits.max_chars`.
pub fn hard_truncate(text: &str, limits: &PromptLimits, marker: &str) -> String {
    let marker_len = char_len(marker);
    if marker_len > limits.max_chars {
        return take_chars(text, limits.max_chars).to_string();
    }
    let keep = limits
        .max_chars
        .saturating_sub(limits.truncation_reserve.max(marker_len));
    format!("{}{marker}", take_chars(text, keep))
}

// ────────────────────────────────────────────────────────────────────────────
// Strategies
// ────────────────────────────────────────────────────────────────────────────

/// Replaces the first occurrence of an overlong detail with its excerpt plus an ellipsis.
pub fn shorten_detail(text: &str, ctx: &FitContext<'_>) -> String {
    match ctx.topic_detail {
        Some(detail) if !detail.is_empty() && char_len(detail) > ctx.excerpt_chars => {
            let excerpt = format!("{}{ELLIPSIS}", take_chars(detail, ctx.excerpt_chars));
            text.replacen(detail, &excerpt, 1)
        }
        _ => text.to_string(),
    }
}

/// Drops the first occurrence of each boilerplate line.
pub fn drop_boilerplate(text: &str, _ctx: &FitContext<'_>) -> String {
    text.replacen(&format!("\n{BOILERPLATE_SPECIFIC}"), "", 1)
        .replacen(&format!("\n{BOILERPLATE_EXAMPLES}"), "", 1)
}

/// Rebuilds the text from the task and audience lines, plus a cut-down detail
/// line while there is still room for one.
pub fn keep_essential_lines(text: &str, ctx: &FitContext<'_>) -> String {
    let task = TASK_PREFIX.trim_end();
    let audience = AUDIENCE_PREFIX.trim_end();
    let detail = DETAIL_PREFIX.trim_end();

    let mut essential = String::new();
    for line in text.split('\n') {
        if line.starts_with(task) || line.starts_with(audience) {
            essential.push_str(line);
            essential.push('\n');
        } else if line.starts_with(detail) && char_len(&essential) + ctx.excerpt_chars < ctx.budget
        {
            essential.push_str(take_chars(line, ctx.excerpt_chars));
            essential.push_str(ELLIPSIS);
            essential.push('\n');
        }
    }

    essential.trim().to_string()
}

/// Removes every boilerplate line from the whole text.
fn strip_boilerplate_everywhere(text: &str) -> String {
    text.replace(&format!("\n{BOILERPLATE_SPECIFIC}"), "")
        .replace(&format!("\n{BOILERPLATE_EXAMPLES}"), "")
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Splits at the first blank line followed by `style_block`. The split point
/// must lie after the start of the text.
fn split_at_style_block<'t>(text: &'t str, style_block: &str) -> Option<(&'t str, &'t str)> {
    if style_block.is_empty() {
        return None;
    }
    let needle = format!("\n\n{style_block}");
    match text.find(&needle) {
        Some(pos) if pos > 0 => Some(text.split_at(pos)),
        _ => None,
    }
}

fn fit_topic_section(
    topic: &str,
    instructions: &str,
    ctx: &ClampContext<'_>,
    limits: &PromptLimits,
) -> String {
    let reserved = char_len(instructions) + limits.topic_margin;
    let Some(budget) = limits.max_chars.checked_sub(reserved).filter(|b| *b > 0) else {
        debug!("Instructions leave no room for the topic section");
        return format!("{topic}{instructions}");
    };

    if char_len(topic) <= budget {
        return format!("{topic}{instructions}");
    }

    let fit_ctx = FitContext {
        budget,
        topic_detail: ctx.topic_detail,
        excerpt_chars: limits.detail_excerpt_chars,
        ..FitContext::default()
    };
    let topic = apply_strategies(topic.to_string(), TOPIC_STRATEGIES, &fit_ctx);
    format!("{topic}{instructions}")
}

fn structural_fallback(text: &str, limits: &PromptLimits) -> String {
    let stripped = strip_boilerplate_everywhere(text);
    if char_len(&stripped) > limits.max_chars {
        hard_truncate(&stripped, limits, CONTENT_SUMMARIZED_MARKER)
    } else {
        stripped
    }
}

/// Length in Unicode scalar values.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// The first `n` chars of `text` (all of it when shorter).
pub fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Decoration, Language, Size, Style, Tool};
    use crate::composer::assembler::assemble_description;
    use crate::composer::selection::{Audience, Selection};

    fn selection(topic: &str, detail: Option<String>) -> Selection {
        Selection {
            topic: topic.to_string(),
            topic_detail: detail,
            audience: Audience::age("30s"),
            style: Style::Sketchnote,
            tool: Tool::FineLiner,
            size: Size::Square,
            language: Language::Korean,
            decoration: Decoration::Jewel,
        }
    }

    fn ctx_for(selection: &Selection) -> ClampContext<'_> {
        ClampContext {
            style_block: selection.style.instruction(),
            topic_detail: selection.detail(),
        }
    }

    fn fit_ctx(budget: usize, detail: Option<&str>) -> FitContext<'_> {
        FitContext {
            budget,
            topic_detail: detail,
            excerpt_chars: 100,
            ..FitContext::default()
        }
    }

    // ── helpers ──────────────────────────────────────────────────────────────

    #[test]
    fn test_char_len_counts_hangul_as_one() {
        assert_eq!(char_len("가치관"), 3);
        assert_eq!("가치관".len(), 9);
    }

    #[test]
    fn test_take_chars_respects_char_boundaries() {
        assert_eq!(take_chars("가나다라", 2), "가나");
        assert_eq!(take_chars("ab", 5), "ab");
        assert_eq!(take_chars("abc", 0), "");
    }

    #[test]
    fn test_hard_truncate_keeps_limit_minus_reserve() {
        let limits = PromptLimits::default();
        let text = "a".repeat(5000);
        let cut = hard_truncate(&text, &limits, SUMMARIZED_MARKER);
        assert_eq!(char_len(&cut), 3950 + char_len(SUMMARIZED_MARKER));
        assert!(cut.ends_with("\n\n(Summarized)"));
    }

    #[test]
    fn test_hard_truncate_never_exceeds_small_limits() {
        let limits = PromptLimits {
            max_chars: 20,
            truncation_reserve: 5,
            ..PromptLimits::default()
        };
        let cut = hard_truncate(&"b".repeat(100), &limits, SUMMARIZED_MARKER);
        assert!(char_len(&cut) <= 20);
        assert!(cut.ends_with(SUMMARIZED_MARKER));

        let tiny = PromptLimits {
            max_chars: 5,
            ..PromptLimits::default()
        };
        assert_eq!(hard_truncate("abcdefgh", &tiny, SUMMARIZED_MARKER), "abcde");
    }

    // ── strategies ───────────────────────────────────────────────────────────

    #[test]
    fn test_shorten_detail_replaces_first_occurrence() {
        let detail = "d".repeat(150);
        let text = format!("Identify and explain X.\n\nAdditional context: {detail}\nAudience is 30대.");
        let out = shorten_detail(&text, &fit_ctx(10, Some(&detail)));
        assert_eq!(
            out,
            format!(
                "Identify and explain X.\n\nAdditional context: {}...\nAudience is 30대.",
                "d".repeat(100)
            )
        );
    }

    #[test]
    fn test_shorten_detail_leaves_short_detail_alone() {
        let text = "Identify and explain X.\n\nAdditional context: short";
        assert_eq!(shorten_detail(text, &fit_ctx(10, Some("short"))), text);
        assert_eq!(shorten_detail(text, &fit_ctx(10, None)), text);
    }

    #[test]
    fn test_drop_boilerplate_removes_both_lines_once() {
        let text = "Identify and explain X.\nBe specific and to the point.\nProvide relevant examples.\nAudience is 30대.\nBe specific and to the point.";
        assert_eq!(
            drop_boilerplate(text, &fit_ctx(10, None)),
            "Identify and explain X.\nAudience is 30대.\nBe specific and to the point."
        );
    }

    #[test]
    fn test_keep_essential_lines_with_room_for_detail() {
        let text = format!(
            "Identify and explain X.\n\nAdditional context: {}\nSomething else\nAudience is 30대.",
            "z".repeat(200)
        );
        let out = keep_essential_lines(&text, &fit_ctx(500, None));
        assert_eq!(
            out,
            format!(
                "Identify and explain X.\nAdditional context: {}...\nAudience is 30대.",
                "z".repeat(80)
            )
        );
    }

    #[test]
    fn test_keep_essential_lines_skips_detail_when_budget_is_tight() {
        let text = "Identify and explain X.\n\nAdditional context: zzz\nAudience is 30대.";
        let out = keep_essential_lines(text, &fit_ctx(110, None));
        assert_eq!(out, "Identify and explain X.\nAudience is 30대.");
    }

    #[test]
    fn test_apply_strategies_stops_once_within_budget() {
        fn never(_: &str, _: &FitContext<'_>) -> String {
            panic!("strategy should not run");
        }
        let strategies: &[(&str, FittingStrategy)] =
            &[("drop_boilerplate", drop_boilerplate), ("never", never)];
        let text = "Identify and explain X.\nBe specific and to the point.".to_string();
        let out = apply_strategies(text, strategies, &fit_ctx(30, None));
        assert_eq!(out, "Identify and explain X.");
    }

    // ── clamp_prompt ─────────────────────────────────────────────────────────

    #[test]
    fn test_compliant_prompt_is_unchanged() {
        let s = selection("테스트 주제", None);
        let doc = assemble_description(&s);
        let limits = PromptLimits::default();
        let once = clamp_prompt(&doc, &ctx_for(&s), &limits);
        assert_eq!(once, doc);
        assert_eq!(clamp_prompt(&once, &ctx_for(&s), &limits), once);
    }

    #[test]
    fn test_long_detail_is_shortened_before_hard_cut() {
        let detail = "반복되는 채움 텍스트 ".repeat(500);
        let s = selection("테스트 주제", Some(detail.clone()));
        let doc = assemble_description(&s);
        assert!(char_len(&doc) > 4000);

        let out = clamp_prompt(&doc, &ctx_for(&s), &PromptLimits::default());
        assert!(char_len(&out) <= 4000);
        let excerpt = format!("{}...", take_chars(&detail, 100));
        assert!(out.contains(&format!("Additional context: {excerpt}\n")));
        assert!(!out.ends_with(SUMMARIZED_MARKER));
        // Boilerplate survives because shortening the detail was enough.
        assert!(out.contains("Be specific and to the point."));
        assert!(out.contains(s.style.instruction()));
    }

    #[test]
    fn test_essential_lines_strategy_runs_when_earlier_ones_fall_short() {
        let detail = "x".repeat(300);
        let s = selection("주제", Some(detail.clone()));
        let doc = assemble_description(&s);
        let split = doc.find(&format!("\n\n{}", s.style.instruction())).unwrap();
        let (topic, instructions) = doc.split_at(split);

        // Budget sized so that only the third strategy gets the topic under it.
        let probe = fit_ctx(usize::MAX, Some(&detail));
        let after_two = drop_boilerplate(&shorten_detail(topic, &probe), &probe);
        let expected_topic = keep_essential_lines(&after_two, &probe);
        let budget = char_len(&expected_topic);
        assert!(char_len(&after_two) > budget);

        let limits = PromptLimits {
            max_chars: char_len(instructions) + 100 + budget,
            ..PromptLimits::default()
        };
        let out = clamp_prompt(&doc, &ctx_for(&s), &limits);
        assert_eq!(out, format!("{expected_topic}{instructions}"));
        assert!(!out.contains("Be specific"));
    }

    #[test]
    fn test_overlong_topic_falls_through_to_final_cut() {
        let s = selection(&"주제".repeat(3000), None);
        let doc = assemble_description(&s);
        let out = clamp_prompt(&doc, &ctx_for(&s), &PromptLimits::default());
        assert_eq!(char_len(&out), 3950 + char_len(SUMMARIZED_MARKER));
        assert!(out.starts_with("Identify and explain 주제주제"));
        assert!(out.ends_with(SUMMARIZED_MARKER));
    }

    #[test]
    fn test_structural_fallback_strips_boilerplate_then_cuts() {
        let text = format!(
            "Identify and explain X.\nBe specific and to the point.\nProvide relevant examples.\n{}",
            "w".repeat(4500)
        );
        let ctx = ClampContext {
            style_block: "A style block that is not in the text",
            topic_detail: None,
        };
        let out = clamp_prompt(&text, &ctx, &PromptLimits::default());
        assert!(!out.contains("Be specific"));
        assert!(out.ends_with(CONTENT_SUMMARIZED_MARKER));
        assert_eq!(char_len(&out), 3950 + char_len(CONTENT_SUMMARIZED_MARKER));
    }

    #[test]
    fn test_structural_fallback_without_cut_when_stripping_suffices() {
        let body = "w".repeat(3990);
        let text = format!("{body}\nBe specific and to the point.\nProvide relevant examples.");
        let ctx = ClampContext {
            style_block: "missing",
            topic_detail: None,
        };
        let out = clamp_prompt(&text, &ctx, &PromptLimits::default());
        assert_eq!(out, body);
    }

    #[test]
    fn test_clamp_is_deterministic() {
        let s = selection("결정성", Some("세부 ".repeat(2000)));
        let doc = assemble_description(&s);
        let limits = PromptLimits::default();
        assert_eq!(
            clamp_prompt(&doc, &ctx_for(&s), &limits),
            clamp_prompt(&doc, &ctx_for(&s), &limits)
        );
    }
}
