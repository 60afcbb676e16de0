use crate::modules::events::core::registry::RegistryError;
use crate::shared::infrastructure::mirror::MirrorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    NotFound(#[from] RegistryError),

    #[error(transparent)]
    Mirror(#[from] MirrorError),
}
