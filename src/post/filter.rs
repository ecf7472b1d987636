use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{Category, Post};

/// Category selection of the community sort bar.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Hash, ValueEnum, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    People,
    Nature,
    Food,
    Sport,
    Other,
}

impl Filter {
    /// Sort bar order.
    pub const LIST: [Filter; 6] = [
        Self::All,
        Self::People,
        Self::Nature,
        Self::Food,
        Self::Sport,
        Self::Other,
    ];

    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::People => Some(Category::People),
            Self::Nature => Some(Category::Nature),
            Self::Food => Some(Category::Food),
            Self::Sport => Some(Category::Sport),
            Self::Other => Some(Category::Other),
        }
    }

    pub fn accept(&self, post: &Post) -> bool {
        self.category().map_or(true, |category| post.category == category)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::People => "People",
            Self::Nature => "Nature",
            Self::Food => "Food",
            Self::Sport => "Sport",
            Self::Other => "Other",
        }
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Self {
        match category {
            Category::People => Self::People,
            Category::Nature => Self::Nature,
            Category::Food => Self::Food,
            Category::Sport => Self::Sport,
            Category::Other => Self::Other,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.category() {
            Some(category) => fmt::Display::fmt(&category, f),
            None => f.write_str("all"),
        }
    }
}

/// Posts shown for `filter`, in feed order. `Filter::All` keeps every post.
pub fn visible_posts(posts: &[Post], filter: Filter) -> Vec<&Post> {
    posts.iter().filter(|post| filter.accept(post)).collect()
}
