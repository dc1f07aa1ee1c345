use crate::trust_analysis::domain::{RepoData, Trust};

/// Popularity threshold above which a repository is rated `High`.
const POPULARITY_THRESHOLD: u64 = 500;

/// Version assumed for packages that declare none. Major "0" rates the
/// package `Low`.
const DEFAULT_VERSION: &str = "0.0.0";

/// Classifies a repository's trust level from its popularity counts
/// and the node's declared version.
///
/// Pure function, no I/O. First matching rule wins:
/// 1. forks or stars at or above 500 -> `High`
/// 2. zero forks, zero stars, or a 0.x version -> `Low`
/// 3. otherwise -> `Indeterminate`
pub fn classify(data: &RepoData, version: Option<&str>) -> Trust {
    if data.forks >= POPULARITY_THRESHOLD || data.stars >= POPULARITY_THRESHOLD {
        return Trust::High;
    }

    let version = version.unwrap_or(DEFAULT_VERSION);
    let major = version.split('.').next().unwrap_or("");
    if data.forks == 0 || data.stars == 0 || major == "0" {
        return Trust::Low;
    }

    Trust::Indeterminate
}
