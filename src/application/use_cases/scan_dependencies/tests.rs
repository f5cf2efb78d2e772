use super::*;
use crate::dependency_resolution::domain::{
    Ecosystem, GoMetadata, NodeMetadata, NodeRecord, NpmMetadata,
};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

// Mock implementations for testing
struct StubCollector {
    ecosystem: Ecosystem,
    detects: bool,
    collected: Option<CollectedDependencies>,
}

impl DependencyCollector for StubCollector {
    fn ecosystem(&self) -> Ecosystem {
        self.ecosystem
    }

    fn detect(&self, _project_path: &Path) -> bool {
        self.detects
    }

    fn collect(&self, _project_path: &Path) -> Result<CollectedDependencies> {
        match &self.collected {
            Some(collected) => Ok(collected.clone()),
            None => Err(DeplisterError::ScanFailed {
                command: "go mod graph".to_string(),
                details: "exit status 1".to_string(),
            }
            .into()),
        }
    }
}

#[derive(Default)]
struct RecordingProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.messages
            .borrow_mut()
            .push(format!("Progress: {}/{}", current, total));
    }

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Completed: {}", message));
    }
}

fn npm_project() -> CollectedDependencies {
    let mut collected = CollectedDependencies::new(Ecosystem::Npm, "");
    for (name, version) in [("express", "4.18.2"), ("accepts", "1.3.8"), ("ms", "2.1.3")] {
        collected.nodes.push((
            name.to_string(),
            NodeRecord::new(version, NodeMetadata::Npm(NpmMetadata::default())),
        ));
    }
    collected.edges.push(("".to_string(), "express".to_string()));
    collected.edges.push(("express".to_string(), "accepts".to_string()));
    collected.edges.push(("accepts".to_string(), "ms".to_string()));
    collected.declared_direct.insert("express".to_string());
    collected
}

fn stub(ecosystem: Ecosystem, detects: bool, collected: Option<CollectedDependencies>) -> Box<dyn DependencyCollector> {
    Box::new(StubCollector {
        ecosystem,
        detects,
        collected,
    })
}

fn request(patterns: &[&str]) -> ScanRequest {
    ScanRequest::new(
        PathBuf::from("/work/app"),
        patterns.iter().map(|p| p.to_string()).collect(),
    )
}

#[test]
fn test_execute_resolves_detected_project() {
    let use_case = ScanDependenciesUseCase::new(
        vec![stub(Ecosystem::Npm, true, Some(npm_project()))],
        RecordingProgressReporter::default(),
    );

    let response = use_case.execute(request(&[])).unwrap();

    assert_eq!(response.project_type, Ecosystem::Npm);
    assert_eq!(response.dependencies.len(), 3);
    assert_eq!(response.direct_count(), 1);
    assert_eq!(response.transitive_count(), 2);
    assert_eq!(response.excluded_count, 0);
    let ms = response.dependencies.iter().find(|d| d.name == "ms").unwrap();
    assert_eq!(ms.depth, Some(3));
}

#[test]
fn test_first_detecting_collector_wins() {
    let mut go = CollectedDependencies::new(Ecosystem::Go, "example.com/app");
    go.nodes.push((
        "golang.org/x/text".to_string(),
        NodeRecord::new("v0.14.0", NodeMetadata::Go(GoMetadata::default())),
    ));
    go.edges
        .push(("example.com/app".to_string(), "golang.org/x/text".to_string()));

    let use_case = ScanDependenciesUseCase::new(
        vec![
            stub(Ecosystem::Npm, false, None),
            stub(Ecosystem::Go, true, Some(go)),
        ],
        RecordingProgressReporter::default(),
    );

    let response = use_case.execute(request(&[])).unwrap();
    assert_eq!(response.project_type, Ecosystem::Go);
    assert_eq!(response.dependencies[0].name, "golang.org/x/text");
}

#[test]
fn test_no_collector_detects_project() {
    let use_case = ScanDependenciesUseCase::new(
        vec![stub(Ecosystem::Npm, false, None), stub(Ecosystem::Go, false, None)],
        RecordingProgressReporter::default(),
    );

    let err = use_case.execute(request(&[])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DeplisterError>(),
        Some(DeplisterError::ProjectNotFound { .. })
    ));
    assert!(err.to_string().contains("Supported project types: npm, go"));
}

#[test]
fn test_collector_failure_propagates() {
    let use_case = ScanDependenciesUseCase::new(
        vec![stub(Ecosystem::Go, true, None)],
        RecordingProgressReporter::default(),
    );

    let err = use_case.execute(request(&[])).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DeplisterError>(),
        Some(DeplisterError::ScanFailed { .. })
    ));
}

#[test]
fn test_exclusion_keeps_paths_through_excluded_nodes() {
    let use_case = ScanDependenciesUseCase::new(
        vec![stub(Ecosystem::Npm, true, Some(npm_project()))],
        RecordingProgressReporter::default(),
    );

    let response = use_case.execute(request(&["accepts", "left-*"])).unwrap();

    let names: Vec<&str> = response.dependencies.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["express", "ms"]);
    assert_eq!(response.excluded_count, 1);

    let ms = &response.dependencies[1];
    assert_eq!(ms.parent.as_deref(), Some("accepts"));
    assert_eq!(ms.paths[0].nodes().len(), 4);

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages
        .iter()
        .any(|m| m.contains("Exclude pattern 'left-*' did not match")));
}

#[test]
fn test_excluding_everything_is_an_error() {
    let use_case = ScanDependenciesUseCase::new(
        vec![stub(Ecosystem::Npm, true, Some(npm_project()))],
        RecordingProgressReporter::default(),
    );

    let err = use_case.execute(request(&["e*", "a*", "m*"])).unwrap_err();
    assert!(err.to_string().contains("All 3 dependency(ies) were excluded"));
}

#[test]
fn test_invalid_pattern_rejected_before_detection() {
    let use_case = ScanDependenciesUseCase::new(
        vec![stub(Ecosystem::Npm, true, Some(npm_project()))],
        RecordingProgressReporter::default(),
    );

    let err = use_case.execute(request(&["$(rm)"])).unwrap_err();
    assert!(err.to_string().contains("invalid character"));
    assert!(use_case.progress_reporter.messages.borrow().is_empty());
}

#[test]
fn test_progress_reports_every_stage() {
    let use_case = ScanDependenciesUseCase::new(
        vec![stub(Ecosystem::Npm, true, Some(npm_project()))],
        RecordingProgressReporter::default(),
    );
    use_case.execute(request(&[])).unwrap();

    let messages = use_case.progress_reporter.messages.borrow();
    for stage in 1..=TOTAL_STAGES {
        let expected = format!("Progress: {}/{}", stage, TOTAL_STAGES);
        assert!(messages.contains(&expected), "missing {}", expected);
    }
    assert!(messages
        .last()
        .unwrap()
        .starts_with("Completed: ✅ Resolved 3 npm dependencies"));
}

#[test]
fn test_dangling_requirements_are_reported() {
    let mut collected = npm_project();
    collected.edges.push(("ms".to_string(), "ghost".to_string()));

    let use_case = ScanDependenciesUseCase::new(
        vec![stub(Ecosystem::Npm, true, Some(collected))],
        RecordingProgressReporter::default(),
    );
    let response = use_case.execute(request(&[])).unwrap();

    assert_eq!(response.dependencies.len(), 3);
    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages.iter().any(|m| m.contains("1 requirement(s) have no metadata")));
}
