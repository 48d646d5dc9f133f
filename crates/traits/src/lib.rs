pub mod linkpath;
pub mod resource;

pub use linkpath::{first_linkpath_dest, normalize_path, parent_folder};
pub use resource::{
    ContentSource, DEFAULT_RESOURCE_PREFIX, InMemoryVault, LinkResolver, ResolvedTarget,
    ResourceError,
};
