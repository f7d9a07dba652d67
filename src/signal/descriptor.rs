use crate::error::SignalError;
use crate::maven::{read_model, Model};
use crate::repository::RepositoryHandle;
use tracing::debug;

/// Loads and parses the build descriptor, `None` if the project has none
pub(crate) fn load_descriptor(
    repository: &RepositoryHandle,
    descriptor_path: &str,
) -> Result<Option<Model>, SignalError> {
    let Some(content) = repository.read(descriptor_path)? else {
        debug!(
            repo = %repository.root_path().display(),
            descriptor = descriptor_path,
            "No build descriptor"
        );
        return Ok(None);
    };

    read_model(&content)
        .map(Some)
        .map_err(|source| SignalError::Descriptor {
            path: repository.root_path().join(descriptor_path),
            source,
        })
}
