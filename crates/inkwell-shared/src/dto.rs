//! Data Transfer Objects - page payloads consumed by the client app.

use serde::{Deserialize, Serialize};

/// A server-rendered page: the client-side component to hydrate plus its props.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub component: String,
    pub props: T,
}

impl<T> Page<T> {
    pub fn new(component: impl Into<String>, props: T) -> Self {
        Self {
            component: component.into(),
            props,
        }
    }
}

/// A post as exposed to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub featured_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Props for the post listing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostIndexProps {
    pub posts: Vec<PostResponse>,
}

/// Props for the detail and edit pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailProps {
    pub post: PostResponse,
}

/// Props for pages with no data dependencies (the creation form).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyProps {}
