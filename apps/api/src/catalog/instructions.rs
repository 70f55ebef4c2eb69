// English instruction fragments sent to the image model, one per catalog option.
// Text is prompt data: edit with care, the composer embeds it verbatim.

use super::options::{Decoration, Language, Size, Style, Tool};

const SKETCHNOTE: &str = r#"Create a hand-drawn sketchnote visual summary.
Use a pristine white paper background (no lines).
The art style should be 'graphic recording' or 'visual thinking'.
Center the main concept with a bold ICON or SYMBOL.
Surround with simple doodles, business icons, stick figures, graphs, and visual metaphors.
Use arrows, numbers (1,2,3), and connecting lines to show flow.
MINIMIZE TEXT - use only SHORT KEYWORDS (1-3 words) in bold, clear handwriting.
Focus on VISUAL STORYTELLING with illustrations, not text explanations."#;

const INFOGRAPHIC: &str = r#"Create a structured infographic layout.
Use clean, professional design with clear visual hierarchies.
PRIORITIZE icons, charts, graphs, and visual elements over text.
Use a grid-based layout with consistent spacing.
Use SHORT LABELS and NUMBERS - avoid paragraphs.
Emphasize key data with color, size, and visual contrast."#;

const MINDMAP: &str = r#"Create a radial mind map visualization.
Place the central concept (as ICON or SYMBOL) in the middle.
Branch out main ideas in different directions.
Use colors to differentiate branches.
Use ICONS, SYMBOLS, and 1-2 word KEYWORDS only.
Show relationships with connecting lines."#;

const CONCEPTMAP: &str = r#"Create a concept map showing relationships between ideas.
Use nodes with ICONS/SYMBOLS for concepts.
Use labeled arrows with SHORT phrases (1-3 words) for relationships.
Show hierarchies and connections clearly.
Use different shapes for different concept types.
MINIMIZE TEXT - focus on visual structure."#;

const DATA_VIZ: &str = r#"Create a data visualization dashboard.
Include charts, graphs, and comparative tables.
Use radar charts, bar graphs, or line charts.
Show trends and comparisons with VISUAL DATA, not text.
Use color coding and NUMBERS for categories.
MINIMIZE text labels - use legends and short keywords."#;

const FRAMEWORK: &str = r#"Create a strategic framework or matrix.
Use 2x2 matrices, comparison tables, or quadrant diagrams.
Show clear axes with SHORT LABELS (1-2 words).
Include ICONS or SYMBOLS in each quadrant.
Use professional business diagram style with minimal text."#;

const PROCESS: &str = r#"Create a process flow diagram.
Show sequential steps with NUMBERED STAGES (1,2,3...).
Use arrows to indicate flow direction.
Use ICONS/SYMBOLS for each step, not paragraphs.
Include decision diamonds with YES/NO branches.
Use horizontal or timeline flow layout with MINIMAL TEXT."#;

const KOREAN_TEXT: &str = r#"Use minimal text - focus on VISUAL SYMBOLS, ICONS, and ILLUSTRATIONS to explain concepts.
If text is necessary, use SHORT ENGLISH KEYWORDS (1-3 words maximum) in clear, bold fonts.
Use arrows, numbers, and visual metaphors instead of long text.
Make it universally understandable through visuals, not text."#;

const JAPANESE_TEXT: &str = r#"Use minimal text - focus on VISUAL SYMBOLS, ICONS, and ILLUSTRATIONS.
If text is needed, use SHORT ENGLISH KEYWORDS in clear fonts.
Make it visually understandable with minimal text reliance."#;

const CHINESE_TEXT: &str = r#"Use minimal text - focus on VISUAL SYMBOLS, ICONS, and ILLUSTRATIONS.
If text is needed, use SHORT ENGLISH KEYWORDS in clear fonts.
Prioritize visual communication over text."#;

impl Style {
    /// Multi-line layout instruction block.
    pub fn instruction(self) -> &'static str {
        match self {
            Style::Sketchnote => SKETCHNOTE,
            Style::Infographic => INFOGRAPHIC,
            Style::Mindmap => MINDMAP,
            Style::Conceptmap => CONCEPTMAP,
            Style::DataViz => DATA_VIZ,
            Style::Framework => FRAMEWORK,
            Style::Process => PROCESS,
        }
    }
}

impl Tool {
    /// Rendering-medium clause, a single line.
    pub fn instruction(self) -> &'static str {
        match self {
            Tool::FountainPen => {
                "using fountain pen (만년필) for elegant, varied line weight with ink texture"
            }
            Tool::FineLiner => "using fine-liner pen for consistent, clean lines with sharp details",
            Tool::Ballpoint => "using ballpoint pen for casual, everyday sketch style",
            Tool::Pencil => "using pencil for soft, sketch-like appearance with shading",
            Tool::ColoredPencil => "using colored pencils for detailed, precise coloring",
            Tool::Crayon => "using crayon or pastel for soft, textured coloring",
            Tool::Brush => "using brush or brush pen for dynamic, calligraphic strokes",
            Tool::Marker => "using markers for bold, vibrant colors and emphasis",
        }
    }
}

impl Size {
    pub fn instruction(self) -> &'static str {
        match self {
            Size::Landscape => "Format: 16:9 landscape orientation for presentations and web content. Optimize for horizontal layout.",
            Size::Portrait => "Format: 9:16 vertical orientation for mobile content and social media stories. Optimize for vertical scrolling.",
            Size::Square => "Format: 1:1 square format for social media posts. Optimize for centered, balanced composition.",
        }
    }
}

impl Language {
    /// Text-rendering guidance. The image model renders English best, so every
    /// variant steers towards symbols plus short English keywords.
    pub fn instruction(self) -> &'static str {
        match self {
            Language::Korean => KOREAN_TEXT,
            Language::English => "Use clear, short English text. Keep labels and titles concise (1-3 words). Focus on visual communication with minimal text.",
            Language::Japanese => JAPANESE_TEXT,
            Language::Chinese => CHINESE_TEXT,
        }
    }
}

impl Decoration {
    pub fn instruction(self) -> &'static str {
        match self {
            Decoration::Jewel => "Decorate borders and empty spaces with colorful, sparkling jewels and gemstones. Add elegant, luxurious decorative elements.",
            Decoration::Crystal => "Decorate borders and empty spaces with transparent, shimmering crystals. Add light, ethereal decorative elements.",
            Decoration::Gold => "Decorate borders and empty spaces with golden ornaments and accents. Add luxurious, premium gold-themed decorative elements.",
            Decoration::Silver => "Decorate borders and empty spaces with silver ornaments and accents. Add elegant, sophisticated silver-themed decorative elements.",
            Decoration::AnimalSticker => "Decorate borders and empty spaces with cute, friendly animal stickers (bears, cats, dogs, rabbits, birds, etc.). Add playful, cheerful decorative elements with adorable animal characters.",
            Decoration::Flower => "Decorate borders and empty spaces with beautiful flowers and wildflowers (roses, daisies, cherry blossoms, lavender, etc.). Add natural, elegant floral decorative elements with soft colors.",
            Decoration::Fruit => "Decorate borders and empty spaces with colorful, fresh fruits (apples, strawberries, oranges, watermelons, grapes, bananas, etc.). Add vibrant, healthy decorative elements with delicious-looking fruits.",
            Decoration::Dinosaur => "Use cute dinosaur illustrations as ICONS for each concept/step (T-Rex, Triceratops, Stegosaurus, Brachiosaurus, Pterodactyl, etc.). Each section or box should have a small dinosaur icon next to it. The dinosaurs should be simple, friendly, hand-drawn style that complements the educational content, not just decorative borders. Make it look like a teaching material with dinosaur icons helping explain concepts.",
        }
    }
}
