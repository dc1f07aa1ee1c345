/// Integration tests for the application layer
mod test_utilities;

use npm_trust::prelude::*;
use std::fs;
use std::path::PathBuf;
use test_utilities::mocks::*;

fn sample_tree() -> DependencyTree {
    // my-project -> express -> debug, my-project -> mocha (dev)
    let mut tree = DependencyTree::new(NodeId::root());

    let express = NodeId::from_path("node_modules/express");
    let debug = NodeId::from_path("node_modules/debug");
    let mocha = NodeId::from_path("node_modules/mocha");

    let mut root = DependencyNode::new(NodeId::root(), "my-project");
    root.edges_out.push(DependencyEdge::new(
        NodeId::root(),
        Some(express.clone()),
        EdgeKind::Prod,
        "^4.18.0",
    ));
    root.edges_out.push(DependencyEdge::new(
        NodeId::root(),
        Some(mocha.clone()),
        EdgeKind::Dev,
        "^10.0.0",
    ));
    tree.insert(root);

    let mut express_node =
        DependencyNode::new(express.clone(), "express").with_package(PackageMetadata {
            name: Some("express".to_string()),
            version: Some("4.18.2".to_string()),
            description: None,
            repository_url: Some("https://github.com/expressjs/express.git".to_string()),
        });
    express_node.edges_out.push(DependencyEdge::new(
        express,
        Some(debug.clone()),
        EdgeKind::Prod,
        "2.6.9",
    ));
    tree.insert(express_node);

    tree.insert(
        DependencyNode::new(debug, "debug").with_package(PackageMetadata {
            name: Some("debug".to_string()),
            version: Some("0.6.9".to_string()),
            description: None,
            repository_url: Some("https://github.com/debug-js/debug.git".to_string()),
        }),
    );
    tree.insert(DependencyNode::new(mocha, "mocha"));
    tree
}

#[tokio::test]
async fn test_analyze_tree_happy_path() {
    let tree_loader = MockTreeLoader::new(sample_tree());
    let repository_client = MockRepositoryClient::new()
        .with_repository("expressjs", "express", 9000, 60000)
        .with_repository("debug-js", "debug", 800, 11000);
    let cache_store = InMemoryCacheStore::new();
    let progress_reporter = MockProgressReporter::new();

    let use_case = AnalyzeTreeUseCase::new(
        tree_loader,
        repository_client,
        cache_store,
        progress_reporter.clone(),
    );

    let request = AnalyzeRequest::new(PathBuf::from("."), None);
    let response = use_case.execute(request).await.unwrap();

    // Only production edges are walked: root, express, debug
    let names: Vec<_> = response.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["my-project", "express", "debug"]);
    assert_eq!(response.classified_count(), 2);

    // express is popular (forks and stars >= 500)
    let express_row = &response.rows[1];
    assert_eq!(
        express_row.analysis.as_ref().unwrap().trust(),
        Some(Trust::High)
    );

    // debug is popular too; its 0.x version does not matter once the
    // popularity rule has fired
    let debug_row = &response.rows[2];
    assert_eq!(
        debug_row.analysis.as_ref().unwrap().trust(),
        Some(Trust::High)
    );
}

#[tokio::test]
async fn test_analyze_tree_reports_progress() {
    let progress_reporter = MockProgressReporter::new();

    let use_case = AnalyzeTreeUseCase::new(
        MockTreeLoader::new(sample_tree()),
        MockRepositoryClient::new()
            .with_repository("expressjs", "express", 9000, 60000)
            .with_repository("debug-js", "debug", 800, 11000),
        InMemoryCacheStore::new(),
        progress_reporter.clone(),
    );

    use_case
        .execute(AnalyzeRequest::new(PathBuf::from("."), None))
        .await
        .unwrap();

    let messages = progress_reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Loading package-lock.json")));
    assert!(messages.iter().any(|m| m.contains("Detected 4 package(s)")));
    // Progress starts at 0/3 and ends at 3/3
    assert!(messages.iter().any(|m| m == "Progress: 0/3"));
    assert!(messages.iter().any(|m| m == "Progress: 3/3"));
    assert!(messages
        .iter()
        .any(|m| m.contains("Analyzed 3 node(s)")));
}

#[tokio::test]
async fn test_analyze_tree_unknown_repository_is_unavailable() {
    // Only express is registered; the debug lookup fails
    let use_case = AnalyzeTreeUseCase::new(
        MockTreeLoader::new(sample_tree()),
        MockRepositoryClient::new().with_repository("expressjs", "express", 9000, 60000),
        InMemoryCacheStore::new(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(AnalyzeRequest::new(PathBuf::from("."), None))
        .await
        .unwrap();

    // The failing node does not abort the run
    assert_eq!(response.rows.len(), 3);
    assert_eq!(response.classified_count(), 1);

    let debug_row = &response.rows[2];
    assert!(debug_row.analysis.is_some());
    assert!(debug_row.analysis.as_ref().unwrap().trust().is_none());
}

#[tokio::test]
async fn test_analyze_tree_reuses_cache_across_runs() {
    let repository_client = MockRepositoryClient::new()
        .with_repository("expressjs", "express", 9000, 60000)
        .with_repository("debug-js", "debug", 800, 11000);
    let cache_store = InMemoryCacheStore::new();

    let first = AnalyzeTreeUseCase::new(
        MockTreeLoader::new(sample_tree()),
        repository_client.clone(),
        cache_store.clone(),
        MockProgressReporter::new(),
    );
    first
        .execute(AnalyzeRequest::new(PathBuf::from("."), None))
        .await
        .unwrap();
    assert_eq!(repository_client.call_count(), 2);

    // Fresh entries are served from the shared store on the second run
    let second = AnalyzeTreeUseCase::new(
        MockTreeLoader::new(sample_tree()),
        repository_client.clone(),
        cache_store,
        MockProgressReporter::new(),
    );
    second
        .execute(AnalyzeRequest::new(PathBuf::from("."), None))
        .await
        .unwrap();
    assert_eq!(repository_client.call_count(), 2);
}

#[tokio::test]
async fn test_analyze_tree_low_trust_for_unpopular_zero_major() {
    let mut tree = DependencyTree::new(NodeId::root());
    let pkg = NodeId::from_path("node_modules/fledgling");

    let mut root = DependencyNode::new(NodeId::root(), "my-project");
    root.edges_out.push(DependencyEdge::new(
        NodeId::root(),
        Some(pkg.clone()),
        EdgeKind::Prod,
        "^0.1.0",
    ));
    tree.insert(root);
    tree.insert(
        DependencyNode::new(pkg, "fledgling").with_package(PackageMetadata {
            name: Some("fledgling".to_string()),
            version: Some("0.1.0".to_string()),
            description: None,
            repository_url: Some("https://github.com/acme/fledgling.git".to_string()),
        }),
    );

    let use_case = AnalyzeTreeUseCase::new(
        MockTreeLoader::new(tree),
        MockRepositoryClient::new().with_repository("acme", "fledgling", 12, 40),
        InMemoryCacheStore::new(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(AnalyzeRequest::new(PathBuf::from("."), None))
        .await
        .unwrap();

    let row = &response.rows[1];
    assert_eq!(row.analysis.as_ref().unwrap().trust(), Some(Trust::Low));
}

#[tokio::test]
async fn test_full_pipeline_from_lockfile_on_disk() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let lockfile = r#"{
        "name": "my-project",
        "version": "1.0.0",
        "lockfileVersion": 3,
        "packages": {
            "": {
                "name": "my-project",
                "version": "1.0.0",
                "dependencies": { "left-pad": "^1.3.0" }
            },
            "node_modules/left-pad": {
                "version": "1.3.0"
            }
        }
    }"#;
    fs::write(temp_dir.path().join("package-lock.json"), lockfile).unwrap();
    fs::create_dir_all(temp_dir.path().join("node_modules/left-pad")).unwrap();
    fs::write(
        temp_dir.path().join("node_modules/left-pad/package.json"),
        r#"{
            "name": "left-pad",
            "version": "1.3.0",
            "repository": { "type": "git", "url": "https://github.com/stevemao/left-pad.git" }
        }"#,
    )
    .unwrap();

    let use_case = AnalyzeTreeUseCase::new(
        PackageLockReader::new(),
        MockRepositoryClient::new().with_repository("stevemao", "left-pad", 200, 1200),
        InMemoryCacheStore::new(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(AnalyzeRequest::new(temp_dir.path().to_path_buf(), None))
        .await
        .unwrap();

    let names: Vec<_> = response.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["my-project", "left-pad"]);

    // 1200 stars clears the popularity threshold
    let row = &response.rows[1];
    assert_eq!(row.analysis.as_ref().unwrap().trust(), Some(Trust::High));
    assert_eq!(row.version.as_deref(), Some("1.3.0"));
}

#[tokio::test]
async fn test_text_report_from_response() {
    let use_case = AnalyzeTreeUseCase::new(
        MockTreeLoader::new(sample_tree()),
        MockRepositoryClient::new()
            .with_repository("expressjs", "express", 9000, 60000)
            .with_repository("debug-js", "debug", 800, 11000),
        InMemoryCacheStore::new(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(AnalyzeRequest::new(PathBuf::from("."), None))
        .await
        .unwrap();

    let output = TextReportFormatter::plain().format(&response.rows).unwrap();
    assert!(output.contains("express 4.18.2 [high]"));
    assert!(output.contains("Analysis of https://github.com/expressjs/express.git:"));
    assert!(output.contains("Forks: 9000"));
}
