use crate::Post;
use crate::error::PostsError;
use async_trait::async_trait;
use std::fmt::Debug;

/// Something that can list a user's most recent public posts.
#[async_trait]
pub trait PostSource: Debug + Send + Sync {
    /// Returns at most `count` posts, newest first.
    ///
    /// An existing user without posts yields `Ok(vec![])`.
    ///
    /// # Errors
    /// [`PostsError::Guard`] for malformed usernames, [`PostsError::NotFound`] for unknown
    /// users and [`PostsError::Unavailable`] when the service cannot be reached.
    async fn fetch(&self, username: &str, count: usize) -> Result<Vec<Post>, PostsError>;
}
