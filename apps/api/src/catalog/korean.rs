// Korean renderings of the instruction fragments, used for the Korean prompt summary.

use super::options::{Decoration, Size, Style, Tool};

impl Style {
    pub fn korean_description(self) -> &'static str {
        match self {
            Style::Sketchnote => "손으로 그린 스케치노트 형식으로 시각화합니다.\n- 깨끗한 흰색 배경 사용\n- 중심 개념을 굵은 아이콘/심볼로 표현\n- 간단한 낙서, 비즈니스 아이콘, 막대 인간, 그래프, 시각적 은유 활용\n- 화살표, 숫자(1,2,3), 연결선으로 흐름 표시\n- 최소한의 텍스트 - 짧은 키워드만 사용",
            Style::Infographic => "구조화된 인포그래픽 레이아웃을 만듭니다.\n- 깔끔하고 전문적인 디자인\n- 텍스트보다 아이콘, 차트, 그래프 우선\n- 그리드 기반 레이아웃\n- 짧은 레이블과 숫자만 사용\n- 색상, 크기, 대비로 핵심 강조",
            Style::Mindmap => "방사형 마인드맵을 만듭니다.\n- 중앙에 핵심 개념(아이콘/심볼)\n- 사방으로 주요 아이디어 분기\n- 색상으로 분기 구분\n- 아이콘, 심볼, 1-2단어 키워드만 사용\n- 연결선으로 관계 표시",
            Style::Conceptmap => "개념 간 관계를 보여주는 개념도를 만듭니다.\n- 개념별 아이콘/심볼 사용\n- 짧은 문구(1-3단어)로 관계 표시\n- 계층과 연결 명확히 표현\n- 개념 유형별 다른 모양 사용",
            Style::DataViz => "데이터 시각화 대시보드를 만듭니다.\n- 차트, 그래프, 비교 표 포함\n- 레이더 차트, 막대 그래프, 선 그래프 활용\n- 텍스트가 아닌 시각적 데이터로 표현\n- 색상 코딩과 숫자로 카테고리 구분",
            Style::Framework => "전략적 프레임워크/매트릭스를 만듭니다.\n- 2x2 매트릭스, 비교표, 사분면 다이어그램\n- 짧은 레이블(1-2단어)의 명확한 축\n- 각 사분면에 아이콘/심볼 포함\n- 최소한의 텍스트로 전문적 비즈니스 다이어그램",
            Style::Process => "프로세스 흐름도를 만듭니다.\n- 번호가 매겨진 단계(1,2,3...)로 순차 표시\n- 화살표로 흐름 방향 표시\n- 각 단계별 아이콘/심볼 사용\n- YES/NO 분기가 있는 결정 다이아몬드 포함\n- 최소 텍스트의 가로형/타임라인 레이아웃",
        }
    }
}

impl Tool {
    pub fn korean_description(self) -> &'static str {
        match self {
            Tool::FountainPen => "만년필로 우아하고 다양한 선 굵기와 잉크 질감 표현",
            Tool::FineLiner => "파인라이너 펜으로 일관되고 깔끔한 선과 선명한 디테일",
            Tool::Ballpoint => "볼펜으로 캐주얼하고 일상적인 스케치 스타일",
            Tool::Pencil => "연필로 부드러운 스케치 느낌과 음영 표현",
            Tool::ColoredPencil => "색연필로 섬세하고 정교한 색상 표현",
            Tool::Crayon => "크레용/파스텔로 부드럽고 질감있는 색상 표현",
            Tool::Brush => "붓/붓펜으로 역동적이고 서예적인 획",
            Tool::Marker => "마커로 굵고 생동감있는 색상과 강조",
        }
    }
}

impl Size {
    pub fn korean_description(self) -> &'static str {
        match self {
            Size::Landscape => "16:9 가로 방향 - 프레젠테이션과 웹 콘텐츠에 최적화된 가로 레이아웃",
            Size::Portrait => "9:16 세로 방향 - 모바일 콘텐츠와 소셜미디어 스토리에 최적화된 세로 스크롤 레이아웃",
            Size::Square => "1:1 정사각형 - 소셜미디어 게시물에 최적화된 중앙 정렬, 균형잡힌 구성",
        }
    }
}

impl Decoration {
    pub fn korean_description(self) -> &'static str {
        match self {
            Decoration::Jewel => "테두리와 빈 공간을 화려하고 반짝이는 보석으로 장식. 우아하고 고급스러운 장식 요소 추가",
            Decoration::Crystal => "테두리와 빈 공간을 투명하고 반짝이는 크리스탈로 장식. 가볍고 영롱한 장식 요소 추가",
            Decoration::Gold => "테두리와 빈 공간을 금색 장식과 액센트로 꾸밈. 고급스럽고 프리미엄한 금색 테마 장식",
            Decoration::Silver => "테두리와 빈 공간을 은색 장식과 액센트로 꾸밈. 우아하고 세련된 은색 테마 장식",
            Decoration::AnimalSticker => "테두리와 빈 공간을 귀여운 동물 스티커로 장식. 곰, 고양이, 강아지, 토끼, 새 등 사랑스러운 동물 캐릭터로 장난스럽고 활기찬 장식 요소 추가",
            Decoration::Flower => "테두리와 빈 공간을 아름다운 꽃과 들꽃으로 장식. 장미, 데이지, 벚꽃, 라벤더 등 부드러운 색상의 자연스럽고 우아한 꽃 장식 요소 추가",
            Decoration::Fruit => "테두리와 빈 공간을 화려하고 신선한 과일로 장식. 사과, 딸기, 오렌지, 수박, 포도, 바나나 등 맛있어 보이는 과일로 생동감 있고 건강한 장식 요소 추가",
            Decoration::Dinosaur => "각 개념/단계마다 귀여운 공룡 아이콘 사용. 티라노사우르스, 트리케라톱스, 스테고사우르스, 브라키오사우르스, 프테라노돈 등을 각 박스나 섹션 옆에 작은 아이콘으로 배치. 공룡은 단순하고 친근한 손그림 스타일로 교육 콘텐츠를 돕는 역할. 단순 테두리 장식이 아닌 개념 설명을 돕는 아이콘으로 활용",
        }
    }
}
