//! User selections that drive prompt construction.

use serde::{Deserialize, Serialize};

use crate::catalog::{AgeGroup, CatalogOption, Decoration, Field, Language, Size, Style, Tool};

/// Whether the audience was chosen by age group or by professional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudienceKind {
    Age,
    Field,
}

/// The target audience. `value` is an age-group or field id; unknown ids are
/// kept as-is and described with a generic label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    #[serde(alias = "type")]
    pub kind: AudienceKind,
    pub value: String,
}

impl Audience {
    pub fn age(value: impl Into<String>) -> Self {
        Self {
            kind: AudienceKind::Age,
            value: value.into(),
        }
    }

    pub fn field(value: impl Into<String>) -> Self {
        Self {
            kind: AudienceKind::Field,
            value: value.into(),
        }
    }

    /// Human-readable audience phrase embedded in prompts.
    ///
    /// Age groups use their display name; fields use domain-expert framing.
    pub fn description(&self) -> String {
        match self.kind {
            AudienceKind::Age => AgeGroup::from_id(&self.value)
                .map(|group| group.display_name())
                .unwrap_or("일반 청중")
                .to_string(),
            AudienceKind::Field => {
                let name = Field::from_id(&self.value)
                    .map(|field| field.display_name())
                    .unwrap_or("일반");
                format!("{name} 분야 전문가")
            }
        }
    }
}

/// A fully-populated set of user choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub topic: String,
    #[serde(default)]
    pub topic_detail: Option<String>,
    pub audience: Audience,
    pub style: Style,
    pub tool: Tool,
    pub size: Size,
    pub language: Language,
    pub decoration: Decoration,
}

impl Selection {
    /// The topic detail, if one was given and is non-empty.
    pub fn detail(&self) -> Option<&str> {
        self.topic_detail.as_deref().filter(|d| !d.is_empty())
    }
}

/// Choices made so far; any field may still be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSelection {
    pub topic: Option<String>,
    pub topic_detail: Option<String>,
    pub audience: Option<Audience>,
    pub style: Option<Style>,
    pub tool: Option<Tool>,
    pub size: Option<Size>,
    pub language: Option<Language>,
    pub decoration: Option<Decoration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_audience_uses_group_name() {
        assert_eq!(Audience::age("30s").description(), "30대");
        assert_eq!(Audience::age("60plus").description(), "60대 이상");
    }

    #[test]
    fn test_field_audience_uses_expert_framing() {
        assert_eq!(Audience::field("education").description(), "교육 분야 전문가");
        assert_eq!(Audience::field("it").description(), "IT 분야 전문가");
    }

    #[test]
    fn test_unknown_audience_ids_use_generic_labels() {
        assert_eq!(Audience::age("70s").description(), "일반 청중");
        assert_eq!(Audience::field("law").description(), "일반 분야 전문가");
    }

    #[test]
    fn test_audience_accepts_type_alias() {
        let audience: Audience =
            serde_json::from_str(r#"{"type": "field", "value": "dental"}"#).unwrap();
        assert_eq!(audience, Audience::field("dental"));
    }

    #[test]
    fn test_selection_deserializes_with_unknown_ids() {
        let json = serde_json::json!({
            "topic": "광합성",
            "audience": {"kind": "age", "value": "teens"},
            "style": "hologram",
            "tool": "marker",
            "size": "1:1",
            "language": "klingon",
            "decoration": "flower"
        });
        let selection: Selection = serde_json::from_value(json).unwrap();
        assert_eq!(selection.style, Style::Sketchnote);
        assert_eq!(selection.tool, Tool::Marker);
        assert_eq!(selection.language, Language::Korean);
        assert!(selection.topic_detail.is_none());
    }

    #[test]
    fn test_empty_detail_is_treated_as_absent() {
        let selection = Selection {
            topic: "t".to_string(),
            topic_detail: Some(String::new()),
            audience: Audience::age("20s"),
            style: Style::default(),
            tool: Tool::default(),
            size: Size::default(),
            language: Language::default(),
            decoration: Decoration::default(),
        };
        assert_eq!(selection.detail(), None);
    }

    #[test]
    fn test_partial_selection_accepts_empty_object() {
        let partial: PartialSelection = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, PartialSelection::default());
    }
}
