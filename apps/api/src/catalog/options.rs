//! Catalog tables: ids, display names and descriptions shown to the user.

use serde::Serialize;

use super::CatalogOption;

// ────────────────────────────────────────────────────────────────────────────
// Style
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Sketchnote,
    Infographic,
    Mindmap,
    Conceptmap,
    DataViz,
    Framework,
    Process,
}

impl CatalogOption for Style {
    const CATEGORY: &'static str = "style";
    const ALL: &'static [Self] = &[
        Style::Sketchnote,
        Style::Infographic,
        Style::Mindmap,
        Style::Conceptmap,
        Style::DataViz,
        Style::Framework,
        Style::Process,
    ];

    fn id(self) -> &'static str {
        match self {
            Style::Sketchnote => "sketchnote",
            Style::Infographic => "infographic",
            Style::Mindmap => "mindmap",
            Style::Conceptmap => "conceptmap",
            Style::DataViz => "data-viz",
            Style::Framework => "framework",
            Style::Process => "process",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Style::Sketchnote => "비주얼씽킹/스케치노트",
            Style::Infographic => "인포그래픽",
            Style::Mindmap => "마인드맵",
            Style::Conceptmap => "컨셉맵",
            Style::DataViz => "데이터 시각화",
            Style::Framework => "프레임워크/매트릭스",
            Style::Process => "프로세스 맵",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Style::Sketchnote => "손글씨, 화살표, 아이콘을 활용한 사고 흐름 표현",
            Style::Infographic => "구조화된 정보를 시각적으로 전달",
            Style::Mindmap => "중앙에서 방사형으로 확장되는 사고 구조",
            Style::Conceptmap => "개념 간의 관계와 연결고리 표현",
            Style::DataViz => "레이더 차트, 그래프, 비교표 등",
            Style::Framework => "2x2 매트릭스, 비교 테이블 등 전략적 구조",
            Style::Process => "단계별 흐름과 절차 시각화",
        }
    }
}

impl Style {
    /// Sample image shown next to the option.
    pub fn example_image(self) -> &'static str {
        match self {
            Style::Sketchnote => "/Gemini_Generated_Image_b8efuib8efuib8ef.png",
            Style::Infographic => "/Gemini_Generated_Image_jaiq35jaiq35jaiq.png",
            Style::Mindmap => "/Gemini_Generated_Image_eqjceeeqjceeeqjc.png",
            Style::Conceptmap => "/Gemini_Generated_Image_jkk81ujkk81ujkk8.png",
            Style::DataViz | Style::Framework => "/Gemini_Generated_Image_w8xuidw8xuidw8xu.png",
            Style::Process => "/Gemini_Generated_Image_spte9kspte9kspte.png",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tool
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Ink,
    Solid,
    Artistic,
}

impl ToolCategory {
    pub fn label(self) -> &'static str {
        match self {
            ToolCategory::Ink => "잉크 기반",
            ToolCategory::Solid => "고체 기반",
            ToolCategory::Artistic => "예술 도구",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    FountainPen,
    #[default]
    FineLiner,
    Ballpoint,
    Pencil,
    ColoredPencil,
    Crayon,
    Brush,
    Marker,
}

impl CatalogOption for Tool {
    const CATEGORY: &'static str = "tool";
    const ALL: &'static [Self] = &[
        Tool::FountainPen,
        Tool::FineLiner,
        Tool::Ballpoint,
        Tool::Pencil,
        Tool::ColoredPencil,
        Tool::Crayon,
        Tool::Brush,
        Tool::Marker,
    ];

    fn id(self) -> &'static str {
        match self {
            Tool::FountainPen => "fountain-pen",
            Tool::FineLiner => "fine-liner",
            Tool::Ballpoint => "ballpoint",
            Tool::Pencil => "pencil",
            Tool::ColoredPencil => "colored-pencil",
            Tool::Crayon => "crayon",
            Tool::Brush => "brush",
            Tool::Marker => "marker",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Tool::FountainPen => "만년필",
            Tool::FineLiner => "파인라이너",
            Tool::Ballpoint => "볼펜/젤펜",
            Tool::Pencil => "연필",
            Tool::ColoredPencil => "색연필",
            Tool::Crayon => "크레용/파스텔",
            Tool::Brush => "붓/붓펜",
            Tool::Marker => "마커",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Tool::FountainPen => "고급스러운 질감과 개성 있는 필압",
            Tool::FineLiner => "일정한 선, 선명한 윤곽선",
            Tool::Ballpoint => "일상적이고 자연스러운 느낌",
            Tool::Pencil => "부드러운 명암과 스케치 느낌",
            Tool::ColoredPencil => "정밀한 채색과 세밀한 강조",
            Tool::Crayon => "부드러운 질감과 감성적 표현",
            Tool::Brush => "역동적인 선과 예술적 감성",
            Tool::Marker => "선명한 색상과 강조 효과",
        }
    }
}

impl Tool {
    pub fn category(self) -> ToolCategory {
        match self {
            Tool::FountainPen | Tool::FineLiner | Tool::Ballpoint => ToolCategory::Ink,
            Tool::Pencil | Tool::ColoredPencil | Tool::Crayon => ToolCategory::Solid,
            Tool::Brush | Tool::Marker => ToolCategory::Artistic,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::FountainPen => "🖋️",
            Tool::FineLiner => "✒️",
            Tool::Ballpoint => "🖊️",
            Tool::Pencil => "✏️",
            Tool::ColoredPencil | Tool::Crayon | Tool::Marker => "🖍️",
            Tool::Brush => "🖌️",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Size
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    /// 16:9
    #[default]
    Landscape,
    /// 9:16
    Portrait,
    /// 1:1
    Square,
}

impl CatalogOption for Size {
    const CATEGORY: &'static str = "size";
    const ALL: &'static [Self] = &[Size::Landscape, Size::Portrait, Size::Square];

    fn id(self) -> &'static str {
        match self {
            Size::Landscape => "16:9",
            Size::Portrait => "9:16",
            Size::Square => "1:1",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Size::Landscape => "16:9 (가로)",
            Size::Portrait => "9:16 (세로)",
            Size::Square => "1:1 (정사각)",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Size::Landscape => "프레젠테이션 및 웹 콘텐츠에 최적화",
            Size::Portrait => "모바일 세로 콘텐츠에 최적화",
            Size::Square => "SNS 피드 및 카드뉴스에 최적화",
        }
    }
}

impl Size {
    pub fn use_cases(self) -> &'static str {
        match self {
            Size::Landscape => "PPT, 강의자료, 웹 메인 이미지",
            Size::Portrait => "유튜브 쇼츠, 인스타 릴스, 틱톡",
            Size::Square => "인스타 피드, 카드뉴스, 썸네일",
        }
    }

    /// Nominal (width, height) in pixels.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Size::Landscape => (1920, 1080),
            Size::Portrait => (1080, 1920),
            Size::Square => (1080, 1080),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Language
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Korean,
    English,
    Japanese,
    Chinese,
}

impl CatalogOption for Language {
    const CATEGORY: &'static str = "language";
    const ALL: &'static [Self] = &[
        Language::Korean,
        Language::English,
        Language::Japanese,
        Language::Chinese,
    ];

    fn id(self) -> &'static str {
        match self {
            Language::Korean => "korean",
            Language::English => "english",
            Language::Japanese => "japanese",
            Language::Chinese => "chinese",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Language::Korean => "한국어",
            Language::English => "English",
            Language::Japanese => "日本語",
            Language::Chinese => "中文",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Language::Korean => "이미지 내 모든 텍스트가 한국어로 표시됩니다",
            Language::English => "All text in the image will be displayed in English",
            Language::Japanese => "画像内のすべてのテキストが日本語で表示されます",
            Language::Chinese => "图像中的所有文本将以中文显示",
        }
    }
}

impl Language {
    pub fn flag(self) -> &'static str {
        match self {
            Language::Korean => "🇰🇷",
            Language::English => "🇺🇸",
            Language::Japanese => "🇯🇵",
            Language::Chinese => "🇨🇳",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Decoration
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Decoration {
    #[default]
    Jewel,
    Crystal,
    Gold,
    Silver,
    AnimalSticker,
    Flower,
    Fruit,
    Dinosaur,
}

impl CatalogOption for Decoration {
    const CATEGORY: &'static str = "decoration";
    const ALL: &'static [Self] = &[
        Decoration::Jewel,
        Decoration::Crystal,
        Decoration::Gold,
        Decoration::Silver,
        Decoration::AnimalSticker,
        Decoration::Flower,
        Decoration::Fruit,
        Decoration::Dinosaur,
    ];

    fn id(self) -> &'static str {
        match self {
            Decoration::Jewel => "jewel",
            Decoration::Crystal => "crystal",
            Decoration::Gold => "gold",
            Decoration::Silver => "silver",
            Decoration::AnimalSticker => "animal-sticker",
            Decoration::Flower => "flower",
            Decoration::Fruit => "fruit",
            Decoration::Dinosaur => "dinosaur",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Decoration::Jewel => "보석",
            Decoration::Crystal => "크리스탈",
            Decoration::Gold => "금",
            Decoration::Silver => "은",
            Decoration::AnimalSticker => "귀여운 동물 스티커",
            Decoration::Flower => "예쁜 꽃",
            Decoration::Fruit => "예쁜 과일",
            Decoration::Dinosaur => "공룡",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Decoration::Jewel => "화려한 보석으로 테두리와 공간을 장식",
            Decoration::Crystal => "투명하고 반짝이는 크리스탈 장식",
            Decoration::Gold => "고급스러운 금빛 장식과 테두리",
            Decoration::Silver => "우아한 은빛 장식과 테두리",
            Decoration::AnimalSticker => "귀여운 동물 스티커로 테두리와 공간을 장식",
            Decoration::Flower => "예쁜 꽃과 들꽃으로 테두리와 공간을 장식",
            Decoration::Fruit => "예쁜 과일들로 테두리와 공간을 장식",
            Decoration::Dinosaur => "귀여운 공룡으로 테두리와 공간을 장식",
        }
    }
}

impl Decoration {
    pub fn icon(self) -> &'static str {
        match self {
            Decoration::Jewel => "💎",
            Decoration::Crystal => "💠",
            Decoration::Gold => "🟡",
            Decoration::Silver => "⚪",
            Decoration::AnimalSticker => "🐻",
            Decoration::Flower => "🌸",
            Decoration::Fruit => "🍎",
            Decoration::Dinosaur => "🦕",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Audience: age groups and fields
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    Teens,
    Twenties,
    Thirties,
    Forties,
    Fifties,
    SixtyPlus,
}

impl CatalogOption for AgeGroup {
    const CATEGORY: &'static str = "age group";
    const ALL: &'static [Self] = &[
        AgeGroup::Teens,
        AgeGroup::Twenties,
        AgeGroup::Thirties,
        AgeGroup::Forties,
        AgeGroup::Fifties,
        AgeGroup::SixtyPlus,
    ];

    fn id(self) -> &'static str {
        match self {
            AgeGroup::Teens => "teens",
            AgeGroup::Twenties => "20s",
            AgeGroup::Thirties => "30s",
            AgeGroup::Forties => "40s",
            AgeGroup::Fifties => "50s",
            AgeGroup::SixtyPlus => "60plus",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            AgeGroup::Teens => "10대",
            AgeGroup::Twenties => "20대",
            AgeGroup::Thirties => "30대",
            AgeGroup::Forties => "40대",
            AgeGroup::Fifties => "50대",
            AgeGroup::SixtyPlus => "60대 이상",
        }
    }

    fn description(self) -> &'static str {
        self.display_name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Education,
    Dental,
    Medical,
    Fashion,
    Food,
    Furniture,
    It,
    Business,
    Consulting,
}

impl CatalogOption for Field {
    const CATEGORY: &'static str = "field";
    const ALL: &'static [Self] = &[
        Field::Education,
        Field::Dental,
        Field::Medical,
        Field::Fashion,
        Field::Food,
        Field::Furniture,
        Field::It,
        Field::Business,
        Field::Consulting,
    ];

    fn id(self) -> &'static str {
        match self {
            Field::Education => "education",
            Field::Dental => "dental",
            Field::Medical => "medical",
            Field::Fashion => "fashion",
            Field::Food => "food",
            Field::Furniture => "furniture",
            Field::It => "it",
            Field::Business => "business",
            Field::Consulting => "consulting",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            Field::Education => "교육",
            Field::Dental => "치과",
            Field::Medical => "의료",
            Field::Fashion => "패션",
            Field::Food => "음식",
            Field::Furniture => "가구",
            Field::It => "IT",
            Field::Business => "경영",
            Field::Consulting => "컨설팅",
        }
    }

    fn description(self) -> &'static str {
        self.display_name()
    }
}
