//! Axum handler exposing the option catalogs.

use axum::Json;
use serde::Serialize;

use crate::catalog::{
    AgeGroup, CatalogOption, Decoration, Field, Language, Size, Style, Tool, ToolCategory,
};

#[derive(Debug, Serialize)]
pub struct StyleEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub instruction: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ToolEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ToolCategory,
    pub category_label: &'static str,
    pub icon: &'static str,
    pub instruction: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize)]
pub struct SizeEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "use")]
    pub use_cases: &'static str,
    pub dimensions: Dimensions,
    pub instruction: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub flag: &'static str,
    pub instruction: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DecorationEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub instruction: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AudienceEntry {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub styles: Vec<StyleEntry>,
    pub tools: Vec<ToolEntry>,
    pub sizes: Vec<SizeEntry>,
    pub languages: Vec<LanguageEntry>,
    pub decorations: Vec<DecorationEntry>,
    pub age_groups: Vec<AudienceEntry>,
    pub fields: Vec<AudienceEntry>,
}

/// GET /api/v1/catalog
pub async fn handle_get_catalog() -> Json<CatalogResponse> {
    Json(build_catalog())
}

fn build_catalog() -> CatalogResponse {
    CatalogResponse {
        styles: Style::ALL
            .iter()
            .map(|&s| StyleEntry {
                id: s.id(),
                name: s.display_name(),
                description: s.description(),
                example: s.example_image(),
                instruction: s.instruction(),
            })
            .collect(),
        tools: Tool::ALL
            .iter()
            .map(|&t| ToolEntry {
                id: t.id(),
                name: t.display_name(),
                description: t.description(),
                category: t.category(),
                category_label: t.category().label(),
                icon: t.icon(),
                instruction: t.instruction(),
            })
            .collect(),
        sizes: Size::ALL
            .iter()
            .map(|&s| {
                let (width, height) = s.dimensions();
                SizeEntry {
                    id: s.id(),
                    name: s.display_name(),
                    description: s.description(),
                    use_cases: s.use_cases(),
                    dimensions: Dimensions { width, height },
                    instruction: s.instruction(),
                }
            })
            .collect(),
        languages: Language::ALL
            .iter()
            .map(|&l| LanguageEntry {
                id: l.id(),
                name: l.display_name(),
                description: l.description(),
                flag: l.flag(),
                instruction: l.instruction(),
            })
            .collect(),
        decorations: Decoration::ALL
            .iter()
            .map(|&d| DecorationEntry {
                id: d.id(),
                name: d.display_name(),
                description: d.description(),
                icon: d.icon(),
                instruction: d.instruction(),
            })
            .collect(),
        age_groups: AgeGroup::ALL
            .iter()
            .map(|&a| AudienceEntry {
                id: a.id(),
                name: a.display_name(),
                kind: "age",
            })
            .collect(),
        fields: Field::ALL
            .iter()
            .map(|&f| AudienceEntry {
                id: f.id(),
                name: f.display_name(),
                kind: "field",
            })
            .collect(),
    }
}
