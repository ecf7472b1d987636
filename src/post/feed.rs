use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use log::{info, warn};

use crate::error::StoreError;

use super::Post;

/// Reads a JSON array of posts, keeping the file's order.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, StoreError> {
    info!("Loading posts {}", path.display());
    let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
    let reader = BufReader::new(file);
    let posts: Vec<Post> =
        serde_json::from_reader(reader).map_err(|e| StoreError::json(path, e))?;

    let mut seen = HashSet::new();
    for post in &posts {
        if !seen.insert(post.id.as_str()) {
            warn!("Duplicate post id {}", post.id);
        }
    }

    Ok(posts)
}
