use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::validate::UpdatePostInput;

/// Post entity - a blog post with an optional featured image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    /// Relative path into blob storage, `None` when no image was uploaded.
    pub featured_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(title: String, body: String, featured_image: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            body,
            featured_image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply validated update fields and touch the update timestamp.
    ///
    /// The featured image is handled separately by the caller: an update
    /// without a new file leaves the existing path untouched.
    pub fn apply(&mut self, input: UpdatePostInput) {
        self.title = input.title;
        self.body = input.body;
        self.touch();
    }

    /// Bump `updated_at`. Never moves the timestamp backwards.
    pub fn touch(&mut self) {
        let now = Utc::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}
