/// Trust analysis core - domain models and services
///
/// This module contains the pure business logic of dependency trust
/// analysis: the dependency tree model, the trust classifier, the
/// repository data fetcher, and the incremental tree analyzer.
pub mod domain;
pub mod services;
