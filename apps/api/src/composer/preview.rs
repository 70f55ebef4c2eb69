//! Korean renderings shown to the user: a short preview while options are still
//! being picked, and a full summary of the finished prompt.

use crate::catalog::CatalogOption;
use crate::composer::prompts::PREVIEW_EMPTY;
use crate::composer::selection::{PartialSelection, Selection};

const COLOR_ACCENT_KO: &str =
    "청록색(teal), 주황색(orange), 차분한 빨강색(muted red) 마커로 간단한 음영과 강조 표현";

const LANGUAGE_GUIDE_KO: &str = "최소한의 텍스트 사용 - 시각적 심볼, 아이콘, 일러스트레이션으로 개념 설명
필요한 경우 짧은 영어 키워드(최대 1-3단어)를 명확하고 굵은 글꼴로 표시
화살표, 숫자, 시각적 은유를 긴 텍스트 대신 사용
텍스트에 의존하지 않고 시각적으로 보편적으로 이해 가능하게 제작";

const QUALITY_KO: &str = "✨ 품질 요구사항:
• 최소한의 텍스트 (영어로 필수 키워드만)
• 시각적 커뮤니케이션에 집중: 아이콘, 심볼, 일러스트, 은유
• 모든 텍스트는 짧고 굵고 읽기 쉽게 (레이블당 최대 1-3단어)
• 문장 대신 숫자(1,2,3)와 화살표 사용
• 높은 대비와 명료성으로 쉽게 읽을 수 있게
• 텍스트에 의존하지 않고 보편적으로 이해 가능하게

시각물은 명확하고 조직적이며 전문적이어야 합니다.
어수선함을 피하고 훌륭한 시각적 계층 구조를 유지합니다.
선명한 디테일의 출판 품질 이미지를 만듭니다.";

/// One line per choice made so far, or a hint when there is no topic yet.
pub fn build_prompt_preview(partial: &PartialSelection) -> String {
    let Some(topic) = partial.topic.as_deref().filter(|t| !t.is_empty()) else {
        return PREVIEW_EMPTY.to_string();
    };

    let mut lines = vec![format!("주제: {topic}")];
    if let Some(audience) = &partial.audience {
        lines.push(format!("청중: {}", audience.description()));
    }
    if let Some(style) = partial.style {
        lines.push(format!("스타일: {}", style.display_name()));
    }
    if let Some(tool) = partial.tool {
        lines.push(format!("도구: {}", tool.display_name()));
    }
    if let Some(size) = partial.size {
        lines.push(format!("사이즈: {}", size.display_name()));
    }
    if let Some(language) = partial.language {
        lines.push(format!("언어: {}", language.display_name()));
    }
    if let Some(decoration) = partial.decoration {
        lines.push(format!("장식: {}", decoration.display_name()));
    }
    lines.join("\n")
}

/// Korean counterpart of the full prompt, for display next to the English one.
pub fn translate_to_korean(selection: &Selection) -> String {
    let mut out = format!("📋 주제: {}", selection.topic);

    if let Some(detail) = selection.detail() {
        out.push_str(&format!("\n\n💡 추가 설명:\n{detail}"));
    }

    out.push_str(&format!(
        "\n\n👥 대상 청중: {}",
        selection.audience.description()
    ));
    out.push_str("\n구체적이고 명확하게 설명하며, 관련된 예시를 제공합니다.");

    let style = selection.style;
    out.push_str(&format!(
        "\n\n🎨 시각화 스타일: {}\n{}",
        style.display_name(),
        style.korean_description()
    ));

    let tool = selection.tool;
    out.push_str(&format!(
        "\n\n✏️ 필기 도구: {}\n{}\n{COLOR_ACCENT_KO}",
        tool.display_name(),
        tool.korean_description()
    ));

    let size = selection.size;
    out.push_str(&format!(
        "\n\n📐 이미지 사이즈: {}\n{}",
        size.display_name(),
        size.korean_description()
    ));

    out.push_str(&format!(
        "\n\n🌐 언어 설정: {}\n{LANGUAGE_GUIDE_KO}",
        selection.language.display_name()
    ));

    let decoration = selection.decoration;
    out.push_str(&format!(
        "\n\n💎 장식 스타일: {}\n{}",
        decoration.display_name(),
        decoration.korean_description()
    ));

    out.push_str(&format!("\n\n{QUALITY_KO}"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Decoration, Language, Size, Style, Tool};
    use crate::composer::selection::Audience;

    fn selection() -> Selection {
        Selection {
            topic: "광합성".to_string(),
            topic_detail: None,
            audience: Audience::age("teens"),
            style: Style::Mindmap,
            tool: Tool::Crayon,
            size: Size::Portrait,
            language: Language::English,
            decoration: Decoration::Dinosaur,
        }
    }

    #[test]
    fn test_preview_without_topic_is_a_hint() {
        assert_eq!(build_prompt_preview(&PartialSelection::default()), PREVIEW_EMPTY);
        let blank = PartialSelection {
            topic: Some(String::new()),
            style: Some(Style::Process),
            ..PartialSelection::default()
        };
        assert_eq!(build_prompt_preview(&blank), "주제를 입력하세요...");
    }

    #[test]
    fn test_preview_lists_only_chosen_options() {
        let partial = PartialSelection {
            topic: Some("광합성".to_string()),
            audience: Some(Audience::field("medical")),
            size: Some(Size::Square),
            ..PartialSelection::default()
        };
        assert_eq!(
            build_prompt_preview(&partial),
            "주제: 광합성\n청중: 의료 분야 전문가\n사이즈: 1:1 (정사각)"
        );
    }

    #[test]
    fn test_preview_with_every_option() {
        let s = selection();
        let partial = PartialSelection {
            topic: Some(s.topic.clone()),
            topic_detail: None,
            audience: Some(s.audience.clone()),
            style: Some(s.style),
            tool: Some(s.tool),
            size: Some(s.size),
            language: Some(s.language),
            decoration: Some(s.decoration),
        };
        assert_eq!(
            build_prompt_preview(&partial),
            "주제: 광합성\n청중: 10대\n스타일: 마인드맵\n도구: 크레용/파스텔\n사이즈: 9:16 (세로)\n언어: English\n장식: 공룡"
        );
    }

    #[test]
    fn test_korean_summary_sections_in_order() {
        let s = selection();
        let korean = translate_to_korean(&s);
        assert!(korean.starts_with("📋 주제: 광합성\n\n👥 대상 청중: 10대\n"));
        let markers = [
            "🎨 시각화 스타일: 마인드맵\n방사형 마인드맵을 만듭니다.",
            "✏️ 필기 도구: 크레용/파스텔\n크레용/파스텔로",
            COLOR_ACCENT_KO,
            "📐 이미지 사이즈: 9:16 (세로)\n9:16 세로 방향",
            "🌐 언어 설정: English\n최소한의 텍스트 사용",
            "💎 장식 스타일: 공룡\n각 개념/단계마다",
            "✨ 품질 요구사항:",
        ];
        let positions: Vec<usize> = markers.iter().map(|m| korean.find(m).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(korean.ends_with("선명한 디테일의 출판 품질 이미지를 만듭니다."));
    }

    #[test]
    fn test_korean_summary_includes_detail_when_present() {
        let mut s = selection();
        s.topic_detail = Some("엽록체의 역할".to_string());
        let korean = translate_to_korean(&s);
        assert!(korean.starts_with("📋 주제: 광합성\n\n💡 추가 설명:\n엽록체의 역할\n\n👥 대상 청중:"));
    }
}
