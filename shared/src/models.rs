use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of record in the community → level → category → question hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Community,
    Level,
    Category,
    Question,
}

impl EntityKind {
    /// Lowercase name used in user-facing messages
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Community => "community",
            EntityKind::Level => "level",
            EntityKind::Category => "category",
            EntityKind::Question => "question",
        }
    }

    /// Name of the single text field a user edits for this kind
    pub fn field_label(&self) -> &'static str {
        match self {
            EntityKind::Community => "Community name",
            EntityKind::Level => "Level name",
            EntityKind::Category => "Category name",
            EntityKind::Question => "Question text",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Common view over every record the backend hands out
pub trait Entity: Clone + PartialEq {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    /// The displayable field (name, or text for questions)
    fn label(&self) -> &str;
}

/// Root of the hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Community {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    /// Levels owned by this community, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub levels: Vec<LevelRef>,
}

impl Community {
    pub fn level_ids(&self) -> Vec<String> {
        self.levels.iter().map(|level| level.id.clone()).collect()
    }
}

/// Reference to a level from its owning community.
///
/// The backend sends either bare id strings or `{ "_id": ... }` objects
/// (possibly populated with more fields), so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelRef {
    #[serde(rename = "_id")]
    pub id: String,
}

impl<'de> Deserialize<'de> for LevelRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bare(String),
            Object {
                #[serde(rename = "_id", alias = "id")]
                id: String,
            },
        }

        let id = match Repr::deserialize(deserializer)? {
            Repr::Bare(id) => id,
            Repr::Object { id } => id,
        };
        Ok(LevelRef { id })
    }
}

/// A level within one community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// A category within one (community, level) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// A question within one (community, level, category) triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub text: String,
}

impl Entity for Community {
    const KIND: EntityKind = EntityKind::Community;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for Level {
    const KIND: EntityKind = EntityKind::Level;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for Category {
    const KIND: EntityKind = EntityKind::Category;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Entity for Question {
    const KIND: EntityKind = EntityKind::Question;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.text
    }
}

/// Body for community and level create/update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamePayload {
    pub name: String,
}

/// Body for category create/update; carries the owning pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub community: String,
    pub level: String,
}

/// Body for question create/update. The owning ids travel in the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_community_reads_underscore_id() {
        let community: Community =
            serde_json::from_str(r#"{"_id":"c1","name":"Rustaceans","__v":0}"#).unwrap();
        assert_eq!(community.id, "c1");
        assert_eq!(community.name, "Rustaceans");
        assert!(community.levels.is_empty());
    }

    #[test]
    fn test_level_refs_accept_strings_and_objects() {
        let community: Community = serde_json::from_str(
            r#"{"_id":"c1","name":"n","levels":["l1",{"_id":"l2"},{"_id":"l3","name":"Hard"}]}"#,
        )
        .unwrap();
        assert_eq!(community.level_ids(), vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_plain_id_alias() {
        let question: Question = serde_json::from_str(r#"{"id":"q9","text":"Why?"}"#).unwrap();
        assert_eq!(question.id(), "q9");
        assert_eq!(question.label(), "Why?");
    }

    #[test]
    fn test_serializes_with_underscore_id() {
        let level = Level {
            id: "l1".to_string(),
            name: "Beginner".to_string(),
        };
        let json = serde_json::to_value(&level).unwrap();
        assert_eq!(json, serde_json::json!({"_id": "l1", "name": "Beginner"}));
    }

    #[test]
    fn test_category_payload_shape() {
        let payload = CategoryPayload {
            name: "Grammar".to_string(),
            community: "c1".to_string(),
            level: "l1".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Grammar", "community": "c1", "level": "l1"})
        );
    }

    #[test]
    fn test_entity_kind_names() {
        assert_eq!(Category::KIND.to_string(), "category");
        assert_eq!(Question::KIND.field_label(), "Question text");
    }
}
