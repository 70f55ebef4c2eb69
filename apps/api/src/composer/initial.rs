//! Initial prompt: a topic + audience explanation aimed at a fixed length band.
//!
//! The base text is expanded with elaboration sections while it is short of the
//! band, then compacted with an ordered strategy pipeline if it overshoots.
//! Landing inside the band is best-effort; never exceeding `max_chars` is not.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::composer::fitting::{apply_strategies, char_len, take_chars, FitContext, FittingStrategy};
use crate::composer::selection::Audience;

/// Target length band of the initial prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialBand {
    pub min_chars: usize,
    pub max_chars: usize,
    /// The tips section is only added while the text is this far below `min_chars`.
    pub late_section_margin: usize,
    /// Examples, process and benefits sections are only added while the text is
    /// this far below `min_chars`.
    pub early_section_margin: usize,
    /// Headroom the line-based rebuild keeps below `max_chars`.
    pub compaction_reserve: usize,
    /// Trailing-line removal never goes below this many lines.
    pub min_lines: usize,
}

impl Default for InitialBand {
    fn default() -> Self {
        Self {
            min_chars: 1450,
            max_chars: 1500,
            late_section_margin: 100,
            early_section_margin: 200,
            compaction_reserve: 50,
            min_lines: 5,
        }
    }
}

impl InitialBand {
    pub fn contains(&self, length: usize) -> bool {
        (self.min_chars..=self.max_chars).contains(&length)
    }
}

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

static FILLER_PHRASES: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"이 주제는 다양한 관점에서 이해할 수 있으며,?\s*").unwrap(),
        Regex::new(r"실생활에 직접 적용 가능한 실용적인 지식입니다\.?\s*").unwrap(),
    ]
});

/// Compaction steps, in priority order.
pub const COMPACTION_STRATEGIES: &[(&str, FittingStrategy)] = &[
    ("collapse_blank_runs", collapse_blank_runs),
    ("strip_filler_phrases", strip_filler_phrases),
    ("keep_whole_lines", keep_whole_lines),
    ("drop_trailing_lines", drop_trailing_lines),
];

const KEY_POINTS: &str = "핵심 포인트:
1. 기본 개념과 정의를 명확히 이해
2. 실제 적용 사례와 예시 학습
3. 단계별 실행 방법 습득
4. 예상되는 결과와 효과 파악

";

const PRACTICAL_KNOWLEDGE: &str =
    "이 주제는 실생활과 업무 현장에서 직접 활용할 수 있는 실용적인 지식입니다.";

const TIPS_SECTION: &str = "실천 팁:
- 매일 조금씩이라도 꾸준히 학습하고 적용해보세요.
- 동료나 멘토에게 피드백을 요청하여 개선점을 찾으세요.
- 온라인 커뮤니티나 스터디 그룹에 참여하여 지식을 공유하세요.
- 자신의 학습 과정과 성과를 기록하여 발전 상황을 추적하세요.

";

/// Builds the initial prompt for `topic`. An empty `topic_detail` counts as absent.
pub fn build_initial_prompt(
    topic: &str,
    topic_detail: &str,
    audience: &Audience,
    band: &InitialBand,
) -> String {
    let aud = audience.description();
    let detail = Some(topic_detail).filter(|d| !d.is_empty());

    let mut prompt = format!("주제: {topic}\n");
    match detail {
        Some(d) => prompt.push_str(&format!("상세: {d}\n\n")),
        None => prompt.push('\n'),
    }
    prompt.push_str(&format!("타겟 청중: {aud}\n\n"));
    prompt.push_str("AI가 생성한 풍부한 설명:\n");
    prompt.push_str(&format!("{topic}는 {aud}를 위한 중요한 개념입니다. "));
    prompt.push_str(detail.unwrap_or(PRACTICAL_KNOWLEDGE));
    prompt.push_str("\n\n");
    prompt.push_str(KEY_POINTS);

    expand(&mut prompt, topic, &aud, band);

    prompt.push_str(&format!(
        "이를 통해 {aud}는 {topic}를 효과적으로 활용할 수 있게 됩니다."
    ));

    let length = char_len(&prompt);
    info!(
        "Initial prompt generated: {} chars (target: {}-{})",
        length, band.min_chars, band.max_chars
    );

    if length > band.max_chars {
        prompt = compact(&prompt, band);
    }

    let length = char_len(&prompt);
    if length < band.min_chars {
        warn!(
            "Initial prompt below target: {} < {} chars",
            length, band.min_chars
        );
    }
    prompt
}

/// Appends elaboration sections in fixed priority order while the text is short.
fn expand(prompt: &mut String, topic: &str, aud: &str, band: &InitialBand) {
    if char_len(prompt) >= band.min_chars {
        return;
    }
    debug!(
        "Initial prompt short ({} chars), expanding toward {}",
        char_len(prompt),
        band.min_chars
    );

    prompt.push_str(&format!(
        "{topic}에 대한 심화 이해:\n\
         이 개념은 {aud}가 일상과 전문 분야에서 마주하는 다양한 상황에 적용됩니다. \
         기본 원리를 이해하면 문제 해결 능력이 향상되고, 더 효과적인 의사결정을 할 수 있습니다.\n\n"
    ));

    let early_floor = band.min_chars.saturating_sub(band.early_section_margin);
    let early_sections = [
        format!(
            "실제 적용 예시:\n\
             - 초보자: 기본 개념 학습과 간단한 실습을 통해 {topic}의 기초를 다집니다.\n\
             - 중급자: 다양한 사례를 분석하고 자신의 상황에 맞게 응용하는 방법을 익힙니다.\n\
             - 숙련자: 고급 기법을 활용하여 복잡한 문제를 해결하고 다른 사람을 지도할 수 있습니다.\n\n"
        ),
        format!(
            "학습 및 적용 프로세스:\n\
             첫째, {topic}의 핵심 개념을 정확히 이해합니다. 이론적 배경과 실무적 의미를 모두 파악하는 것이 중요합니다.\n\
             둘째, 작은 규모로 시작하여 점진적으로 확장합니다. 실패를 두려워하지 말고 실험을 통해 배웁니다.\n\
             셋째, 다른 사람의 성공 사례와 실패 경험을 참고하여 자신만의 방법론을 개발합니다.\n\
             넷째, 지속적인 연습과 피드백을 통해 숙련도를 높이고 전문성을 키워갑니다.\n\n"
        ),
        format!(
            "기대 효과와 혜택:\n\
             {topic}를 제대로 이해하고 활용하면 {aud}는 업무 효율성이 크게 향상됩니다. \
             문제 발생 시 빠르게 원인을 파악하고 해결책을 찾을 수 있으며, 예방적 조치도 가능해집니다. \
             또한 동료나 팀원들과 협업할 때 명확한 커뮤니케이션이 가능하고, 전문가로서의 신뢰도가 높아집니다. \
             장기적으로는 경력 개발과 성장에 큰 도움이 되며, 새로운 기회를 창출할 수 있는 역량이 생깁니다.\n\n"
        ),
    ];
    for section in &early_sections {
        if char_len(prompt) < early_floor {
            prompt.push_str(section);
        }
    }

    if char_len(prompt) < band.min_chars.saturating_sub(band.late_section_margin) {
        prompt.push_str(TIPS_SECTION);
    }
}

/// Brings an overlong initial prompt back under `band.max_chars`.
fn compact(prompt: &str, band: &InitialBand) -> String {
    let original_len = char_len(prompt);
    info!(
        "Initial prompt too long ({original_len} chars), compacting to {} chars",
        band.max_chars
    );

    let ctx = FitContext {
        budget: band.max_chars,
        reserve: band.compaction_reserve,
        min_lines: band.min_lines,
        ..FitContext::default()
    };
    let compacted = apply_strategies(prompt.to_string(), COMPACTION_STRATEGIES, &ctx);
    let mut result = ensure_terminated(compacted, band.max_chars);

    if char_len(&result) > band.max_chars {
        result = take_chars(&result, band.max_chars).to_string();
    }

    info!(
        "Compacted initial prompt: {} chars (from {})",
        char_len(&result),
        original_len
    );
    result
}

/// Collapses three or more consecutive newlines into one blank line.
pub fn collapse_blank_runs(text: &str, _ctx: &FitContext<'_>) -> String {
    BLANK_RUNS.replace_all(text, "\n\n").into_owned()
}

pub fn strip_filler_phrases(text: &str, _ctx: &FitContext<'_>) -> String {
    FILLER_PHRASES
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
}

/// Greedily keeps whole lines from the top while the joined length stays
/// within `budget - reserve`.
pub fn keep_whole_lines(text: &str, ctx: &FitContext<'_>) -> String {
    let target = ctx.budget.saturating_sub(ctx.reserve);
    let mut kept: Vec<&str> = Vec::new();
    let mut running = 0;
    for line in text.split('\n') {
        let separator = usize::from(!kept.is_empty());
        let next = running + separator + char_len(line);
        if next > target {
            break;
        }
        kept.push(line);
        running = next;
    }

    if kept.is_empty() {
        debug!("First line alone exceeds {target} chars, keeping a prefix");
        return take_chars(text, target).to_string();
    }
    kept.join("\n")
}

/// Pops trailing lines while over budget, keeping at least `min_lines`.
pub fn drop_trailing_lines(text: &str, ctx: &FitContext<'_>) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    let mut length = char_len(text);
    while length > ctx.budget && lines.len() > ctx.min_lines {
        if let Some(last) = lines.pop() {
            length = length.saturating_sub(char_len(last) + 1);
        }
    }
    lines.join("\n")
}

/// Appends a period unless the text already ends a sentence.
fn ensure_terminated(text: String, max_chars: usize) -> String {
    if text.ends_with('.') || text.ends_with('다') {
        return text;
    }
    if char_len(&text) < max_chars {
        format!("{text}.")
    } else {
        format!("{}.", take_chars(&text, max_chars.saturating_sub(1)))
    }
}
