pub mod feed;
pub mod filter;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use feed::load_posts;
pub use filter::{visible_posts, Filter};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Nature,
    Food,
    Sport,
    Other,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Nature => "nature",
            Self::Food => "food",
            Self::Sport => "sport",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub username: String,
    pub image: String,
    pub title: String,
    pub category: Category,
    pub content: String,
    pub likes: u32,
    /// Display string, shown as-is
    pub created_at: String,
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_feed_item() {
        let post: Post = serde_json::from_value(json!({
            "id": "p1",
            "username": "alice",
            "image": "/assets/images/p1.png",
            "title": "Sunset",
            "category": "nature",
            "content": "Over the lake",
            "likes": 12,
            "createdAt": "2024-05-01",
        }))
        .unwrap();
        assert_eq!(post.category, Category::Nature);
        assert_eq!(post.created_at, "2024-05-01");
    }

    #[test]
    fn rejects_unknown_category_and_negative_likes() {
        let base = json!({
            "id": "p1", "username": "alice", "image": "", "title": "",
            "content": "", "createdAt": "",
        });

        let mut all = base.clone();
        all["category"] = json!("all");
        all["likes"] = json!(1);
        assert!(serde_json::from_value::<Post>(all).is_err());

        let mut negative = base;
        negative["category"] = json!("food");
        negative["likes"] = json!(-1);
        assert!(serde_json::from_value::<Post>(negative).is_err());
    }
}
