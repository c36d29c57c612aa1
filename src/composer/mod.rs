//! Composer manifest manipulation.
//!
//! Split into four concerns:
//!
//! - **`manifest`**: Loading, typed access and serialization of `composer.json`
//! - **`package`**: Resolving the package name of a local checkout
//! - **`repository`**: Registering the checkout as a `path` repository
//! - **`requirement`**: Pointing the dependency at the `@dev` version
//!
//! Keys the tool does not understand are kept untouched and in order.

pub mod manifest;
pub mod package;
pub mod repository;
pub mod requirement;

pub use manifest::{DEV_CONSTRAINT, MANIFEST_FILE_NAME, Manifest, RequireSection, SourceDescriptor};
pub use package::resolve_package_name;
pub use repository::register_path_repository;
pub use requirement::require_dev_version;
