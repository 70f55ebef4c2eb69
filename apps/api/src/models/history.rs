use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::catalog::{CatalogOption, Decoration, Language, Size, Style, Tool};
use crate::composer::{Audience, AudienceKind, Selection};

/// One row of `image_history`. Option ids are stored as their wire strings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HistoryRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub topic: String,
    pub topic_detail: Option<String>,
    pub audience_kind: String,
    pub audience_value: String,
    pub style: String,
    pub tool: String,
    pub size: String,
    pub language: String,
    pub decoration: String,
    pub prompt: String,
    pub image_url: String,
}

/// A generated image with the choices that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub selection: Selection,
    pub prompt: String,
    pub image_url: String,
}

/// What a caller supplies when recording a new image.
#[derive(Debug, Clone, Deserialize)]
pub struct NewHistoryItem {
    pub selection: Selection,
    pub prompt: String,
    pub image_url: String,
}

impl HistoryItem {
    pub fn from_new(new: NewHistoryItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            selection: new.selection,
            prompt: new.prompt,
            image_url: new.image_url,
        }
    }
}

impl From<HistoryRow> for HistoryItem {
    fn from(row: HistoryRow) -> Self {
        let kind = match row.audience_kind.as_str() {
            "field" => AudienceKind::Field,
            _ => AudienceKind::Age,
        };
        Self {
            id: row.id,
            created_at: row.created_at,
            selection: Selection {
                topic: row.topic,
                topic_detail: row.topic_detail,
                audience: Audience {
                    kind,
                    value: row.audience_value,
                },
                style: Style::resolve(&row.style),
                tool: Tool::resolve(&row.tool),
                size: Size::resolve(&row.size),
                language: Language::resolve(&row.language),
                decoration: Decoration::resolve(&row.decoration),
            },
            prompt: row.prompt,
            image_url: row.image_url,
        }
    }
}

impl From<&HistoryItem> for HistoryRow {
    fn from(item: &HistoryItem) -> Self {
        let s = &item.selection;
        Self {
            id: item.id,
            created_at: item.created_at,
            topic: s.topic.clone(),
            topic_detail: s.topic_detail.clone(),
            audience_kind: match s.audience.kind {
                AudienceKind::Age => "age",
                AudienceKind::Field => "field",
            }
            .to_string(),
            audience_value: s.audience.value.clone(),
            style: s.style.id().to_string(),
            tool: s.tool.id().to_string(),
            size: s.size.id().to_string(),
            language: s.language.id().to_string(),
            decoration: s.decoration.id().to_string(),
            prompt: item.prompt.clone(),
            image_url: item.image_url.clone(),
        }
    }
}
