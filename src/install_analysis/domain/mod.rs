pub mod dependency_spec;
pub mod install_chain;
pub mod package;
pub mod package_index;
pub mod reverse_dependency_map;

pub use dependency_spec::dependency_name;
pub use install_chain::{InstallChain, CHAIN_SEPARATOR};
pub use package::{InstallReason, PackageName, PackageRecord};
pub use package_index::PackageIndex;
pub use reverse_dependency_map::{find_required_by, ReverseDependencyMap};
