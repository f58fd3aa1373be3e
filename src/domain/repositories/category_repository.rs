use async_trait::async_trait;

use super::RepoError;
use crate::domain::category::Category;

/// Repository trait for Category entities
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List every category
    async fn list_all(&self) -> Result<Vec<Category>, RepoError>;
}
