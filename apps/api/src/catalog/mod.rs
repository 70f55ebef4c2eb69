//! Option catalogs — the closed sets of choices a user picks from.
//!
//! Each category is an enum with a string id on the wire. Lookups never fail:
//! `resolve` maps an unknown id to the category default, and deserialization
//! goes through `resolve`, so a stale or misspelled id from a client cannot
//! block prompt generation.

pub mod handlers;
pub mod instructions;
pub mod korean;
pub mod options;
pub mod placeholder;

use tracing::warn;

pub use options::{AgeGroup, Decoration, Field, Language, Size, Style, Tool, ToolCategory};

/// Shared behaviour of every catalog category.
pub trait CatalogOption: Copy + PartialEq + 'static {
    /// Category name used in logs and the catalog listing.
    const CATEGORY: &'static str;
    /// Every variant, in display order.
    const ALL: &'static [Self];

    fn id(self) -> &'static str;
    fn display_name(self) -> &'static str;
    fn description(self) -> &'static str;

    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|option| option.id() == id)
    }

    /// Looks up `id`, falling back to the category default when it is unknown.
    fn resolve(id: &str) -> Self
    where
        Self: Default,
    {
        Self::from_id(id).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(
                "Unknown {} id '{}', using default '{}'",
                Self::CATEGORY,
                id,
                fallback.id()
            );
            fallback
        })
    }
}

/// Implements serde in terms of the option id, resolving unknown ids to the default.
macro_rules! serde_via_id {
    ($($option:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $option {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(CatalogOption::id(*self))
                }
            }

            impl<'de> serde::Deserialize<'de> for $option {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let id = String::deserialize(deserializer)?;
                    Ok(<$option as CatalogOption>::resolve(&id))
                }
            }
        )+
    };
}

serde_via_id!(Style, Tool, Size, Language, Decoration);
