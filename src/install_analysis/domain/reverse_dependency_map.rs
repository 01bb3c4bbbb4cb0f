use super::dependency_spec::dependency_name;
use super::package::PackageRecord;
use super::package_index::PackageIndex;
use std::collections::{BTreeSet, HashMap};

/// Derived index: dependency name -> names of the packages that declare it
///
/// Keys are normalized dependency names (version constraints stripped), so a
/// key may be a virtual name that no installed package carries directly.
/// Dependents are kept in a `BTreeSet` which gives every traversal over the
/// map a stable order for a fixed database.
#[derive(Debug, Clone, Default)]
pub struct ReverseDependencyMap {
    dependents: HashMap<String, BTreeSet<String>>,
}

impl ReverseDependencyMap {
    /// Derives the map from every record's dependency list
    pub fn build(index: &PackageIndex) -> Self {
        let mut dependents: HashMap<String, BTreeSet<String>> = HashMap::new();

        for record in index.records() {
            for specifier in record.dependencies() {
                let name = dependency_name(specifier);
                if name.is_empty() {
                    continue;
                }
                dependents
                    .entry(name.to_string())
                    .or_default()
                    .insert(record.name().to_string());
            }
        }

        Self { dependents }
    }

    /// Packages declaring `name` as a dependency, keyed exactly by that name
    pub fn dependents(&self, name: &str) -> impl Iterator<Item = &str> {
        self.dependents
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Packages that require `record`, either by its name or through one of
    /// the virtual names it provides
    ///
    /// The record itself is never reported as its own dependent.
    pub fn required_by(&self, record: &PackageRecord) -> BTreeSet<String> {
        let provided = record
            .provides()
            .iter()
            .map(|spec| dependency_name(spec))
            .filter(|name| !name.is_empty());

        std::iter::once(record.name())
            .chain(provided)
            .flat_map(|name| self.dependents(name))
            .filter(|dependent| *dependent != record.name())
            .map(str::to_string)
            .collect()
    }

    /// Number of distinct dependency names indexed
    pub fn len(&self) -> usize {
        self.dependents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependents.is_empty()
    }
}

/// Scans the index for packages whose dependency list names `name`
///
/// Applies the same normalization as [`ReverseDependencyMap::build`], so the
/// result always equals `ReverseDependencyMap::dependents(name)`.
pub fn find_required_by(name: &str, index: &PackageIndex) -> BTreeSet<String> {
    index
        .records()
        .filter(|record| {
            record
                .dependencies()
                .iter()
                .any(|specifier| dependency_name(specifier) == name)
        })
        .map(|record| record.name().to_string())
        .collect()
}
