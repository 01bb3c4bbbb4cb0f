use super::package::PackageRecord;
use crate::shared::error::WhyError;
use crate::shared::Result;
use std::collections::HashMap;

/// Maximum number of similar names offered when a lookup fails
const MAX_SUGGESTIONS: usize = 5;

/// PackageIndex aggregate mapping package name to its record
///
/// Built once per run from every record the store yielded and immutable
/// afterwards. Names are unique: when two records share a name the first
/// one wins and the later one is returned to the caller as a duplicate.
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    packages: HashMap<String, PackageRecord>,
}

impl PackageIndex {
    /// Builds the index in a single pass over the records
    ///
    /// # Returns
    /// The index plus the records rejected because their name was already taken
    pub fn build(records: Vec<PackageRecord>) -> (Self, Vec<PackageRecord>) {
        let mut packages = HashMap::with_capacity(records.len());
        let mut duplicates = Vec::new();

        for record in records {
            if packages.contains_key(record.name()) {
                duplicates.push(record);
            } else {
                packages.insert(record.name().to_string(), record);
            }
        }

        (Self { packages }, duplicates)
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Looks up a package that must exist
    ///
    /// # Errors
    /// Returns `WhyError::PackageNotFound` with a hint listing similar names
    pub fn require(&self, name: &str) -> Result<&PackageRecord> {
        self.packages.get(name).ok_or_else(|| {
            WhyError::PackageNotFound {
                name: name.to_string(),
                suggestion: self.suggestion_for(name),
            }
            .into()
        })
    }

    pub fn records(&self) -> impl Iterator<Item = &PackageRecord> {
        self.packages.values()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Installed package names containing the query (case-insensitive), sorted
    pub fn similar_names(&self, query: &str) -> Vec<&str> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&str> = self
            .packages
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect();
        matches.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
        matches.truncate(MAX_SUGGESTIONS);
        matches
    }

    fn suggestion_for(&self, name: &str) -> String {
        let similar = self.similar_names(name);
        if similar.is_empty() {
            "The package is not installed. Check the spelling, or query an installed package.".to_string()
        } else {
            format!("Did you mean: {}?", similar.join(", "))
        }
    }
}
