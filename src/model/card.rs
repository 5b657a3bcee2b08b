//! Card data model
//!
//! Mirrors the on-disk `cellblocks-data.json` document. Field names are
//! camelCase on the wire; optional fields are omitted when empty so a
//! load/save cycle leaves files written by other CellBlocks clients intact.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A stored snippet (command, prompt, note...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category_id: String,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub created_at: i64,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

impl Card {
    /// Create a new card stamped with the current time
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category_id: impl Into<String>,
    ) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: generate_card_id(),
            title: title.into(),
            content: content.into(),
            category_id: category_id.into(),
            created_at: now,
            updated_at: now,
            image_id: None,
        }
    }
}

/// Generate a 128-bit random id rendered as 32 lowercase hex characters
pub fn generate_card_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// A named, colored grouping for cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category_id: Option<String>,
}

/// Root document: every card and category plus pass-through metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Category lookup by id
///
/// A card pointing at an id that is not present simply has no category.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    by_id: HashMap<String, Category>,
}

impl CategoryIndex {
    pub fn build(categories: &[Category]) -> Self {
        Self {
            by_id: categories
                .iter()
                .map(|cat| (cat.id.clone(), cat.clone()))
                .collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.by_id.get(id)
    }

    /// Category of a card, if its id resolves
    pub fn for_card(&self, card: &Card) -> Option<&Category> {
        self.get(&card.category_id)
    }

    /// Display name, empty for unknown categories
    pub fn name_of(&self, card: &Card) -> &str {
        self.for_card(card).map(|c| c.name.as_str()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
