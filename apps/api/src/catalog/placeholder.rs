//! Placeholder images served when real generation is unavailable
//! (no API key, unsupported provider, or a provider failure).

use super::options::{Size, Style};

/// Returns the bundled sample image for a style/size pair.
pub fn placeholder_image(style: Style, size: Size) -> &'static str {
    match (style, size) {
        (Style::Sketchnote, Size::Landscape) => "/Gemini_Generated_Image_jaiq35jaiq35jaiq.png",
        (Style::Sketchnote, Size::Portrait) => "/Gemini_Generated_Image_6p1sb06p1sb06p1s.png",
        (Style::Sketchnote, Size::Square) => "/Gemini_Generated_Image_b8efuib8efuib8ef.png",
        (Style::Infographic, Size::Landscape) => "/Gemini_Generated_Image_eqjceeeqjceeeqjc.png",
        (Style::Infographic, Size::Portrait) => "/Gemini_Generated_Image_gc2f3mgc2f3mgc2f.png",
        (Style::Infographic, Size::Square) => "/Gemini_Generated_Image_gh6jz8gh6jz8gh6j.png",
        (Style::Mindmap, Size::Landscape) => "/Gemini_Generated_Image_jfemhkjfemhkjfem.png",
        (Style::Mindmap, Size::Portrait) => "/Gemini_Generated_Image_jkk81ujkk81ujkk8.png",
        (Style::Mindmap, Size::Square) => "/Gemini_Generated_Image_ns1zd2ns1zd2ns1z.png",
        (Style::Conceptmap, Size::Landscape) => "/Gemini_Generated_Image_spte9kspte9kspte.png",
        (Style::Conceptmap, Size::Portrait) => "/Gemini_Generated_Image_tucf9ntucf9ntucf.png",
        (Style::Conceptmap, Size::Square) => "/Gemini_Generated_Image_v0oon0v0oon0v0oo.png",
        (Style::DataViz, Size::Landscape) => "/Gemini_Generated_Image_w8xuidw8xuidw8xu.png",
        (Style::DataViz, Size::Portrait) => "/Gemini_Generated_Image_jaiq35jaiq35jaiq.png",
        (Style::DataViz, Size::Square) => "/Gemini_Generated_Image_6p1sb06p1sb06p1s.png",
        (Style::Framework, Size::Landscape) => "/Gemini_Generated_Image_b8efuib8efuib8ef.png",
        (Style::Framework, Size::Portrait) => "/Gemini_Generated_Image_eqjceeeqjceeeqjc.png",
        (Style::Framework, Size::Square) => "/Gemini_Generated_Image_gc2f3mgc2f3mgc2f.png",
        (Style::Process, Size::Landscape) => "/Gemini_Generated_Image_gh6jz8gh6jz8gh6j.png",
        (Style::Process, Size::Portrait) => "/Gemini_Generated_Image_jfemhkjfemhkjfem.png",
        (Style::Process, Size::Square) => "/Gemini_Generated_Image_jkk81ujkk81ujkk8.png",
    }
}
