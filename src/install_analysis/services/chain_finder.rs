use crate::install_analysis::domain::{InstallChain, PackageIndex, ReverseDependencyMap};
use std::collections::HashSet;

/// Result of a chain search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainSearch {
    /// Discovered chains, sorted root-first
    pub chains: Vec<InstallChain>,
    /// True when the search stopped early (chain limit or depth guard),
    /// so more chains may exist than were returned
    pub truncated: bool,
}

/// ChainFinder service reconstructing every installation chain for a package
///
/// Walks the reverse dependency edges from the target towards the packages
/// that require it, stopping each branch at the first explicitly installed
/// package. Visitation is scoped to the current path: a package already on
/// the path is never re-entered, but the same package may appear in several
/// independent chains.
///
/// This service has no I/O dependencies and works only with domain objects.
pub struct ChainFinder<'a> {
    index: &'a PackageIndex,
    reverse_deps: &'a ReverseDependencyMap,
    chain_limit: Option<usize>,
}

/// Traversal state shared by the recursive walk
struct Walk {
    path: Vec<String>,
    on_path: HashSet<String>,
    chains: Vec<InstallChain>,
    truncated: bool,
}

impl<'a> ChainFinder<'a> {
    /// Maximum path length followed before a branch is abandoned
    /// Keeps recursion bounded on malformed databases
    pub const MAX_DEPTH: usize = 100;

    pub fn new(index: &'a PackageIndex, reverse_deps: &'a ReverseDependencyMap) -> Self {
        Self {
            index,
            reverse_deps,
            chain_limit: None,
        }
    }

    /// Stops the search once `limit` chains have been found
    pub fn with_chain_limit(mut self, limit: Option<usize>) -> Self {
        self.chain_limit = limit;
        self
    }

    /// Finds every chain from an explicitly installed package to `target`
    ///
    /// Returns no chains when the target is itself explicitly installed or
    /// when no explicit package is reachable (orphans, cycles without an
    /// explicit member). The caller confirms the target exists beforehand;
    /// an unknown target yields an empty result.
    pub fn find_chains(&self, target: &str) -> ChainSearch {
        match self.index.get(target) {
            Some(record) if !record.is_explicit() => {}
            _ => return ChainSearch::default(),
        }

        let mut walk = Walk {
            path: Vec::new(),
            on_path: HashSet::new(),
            chains: Vec::new(),
            truncated: false,
        };
        self.visit(target, &mut walk);

        walk.chains.sort();
        ChainSearch {
            chains: walk.chains,
            truncated: walk.truncated,
        }
    }

    fn visit(&self, package: &str, walk: &mut Walk) {
        if self.limit_reached(walk) {
            walk.truncated = true;
            return;
        }
        if walk.path.len() >= Self::MAX_DEPTH {
            walk.truncated = true;
            return;
        }

        let Some(record) = self.index.get(package) else {
            return;
        };

        walk.path.push(package.to_string());
        walk.on_path.insert(package.to_string());

        // The target never ends its own chain; explicit targets were handled earlier
        if walk.path.len() > 1 && record.is_explicit() {
            walk.chains.push(InstallChain::from_target_path(&walk.path));
        } else {
            for dependent in self.reverse_deps.required_by(record) {
                if walk.on_path.contains(&dependent) {
                    continue;
                }
                self.visit(&dependent, walk);
                if walk.truncated && self.limit_reached(walk) {
                    break;
                }
            }
        }

        walk.on_path.remove(package);
        walk.path.pop();
    }

    fn limit_reached(&self, walk: &Walk) -> bool {
        self.chain_limit
            .is_some_and(|limit| walk.chains.len() >= limit)
    }
}
