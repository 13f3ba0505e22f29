use compose_shell::domain::RunStatus;
use compose_shell::infra::compose_discovery::scan_dir;
use compose_shell::infra::compose_file::list_services;
use compose_shell::services::parse_ps_output;
use compose_shell::test_support::MockRuntime;
use compose_shell::{ComposeDiscovery, ExtractError, SearchPath, StatusProber};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[test]
fn test_prober_never_raises() {
    let mock = Arc::new(MockRuntime::new());
    let prober = StatusProber::new(mock.clone());
    let file = Path::new("/srv/container/app/compose.yml");

    // No output at all
    assert_eq!(prober.probe(file, "web"), RunStatus::NotRunning);

    // Garbage output
    mock.set_ps_output("web", "Error response from daemon");
    assert_eq!(prober.probe(file, "web"), RunStatus::NotRunning);

    // Runtime missing / non-zero exit
    mock.set_fail_on("compose_ps");
    mock.set_ps_output("web", r#"{"State":"running"}"#);
    assert_eq!(prober.probe(file, "web"), RunStatus::NotRunning);
}

#[test]
fn test_prober_with_unreachable_binary() {
    let adapter = Arc::new(compose_shell::DockerAdapter::new(
        "/nonexistent/compose-shell-runtime",
    ));
    let prober = StatusProber::new(adapter);

    assert_eq!(
        prober.probe(Path::new("compose.yml"), "web"),
        RunStatus::NotRunning
    );
}

#[test]
fn test_ps_output_shapes() {
    assert_eq!(parse_ps_output(""), RunStatus::NotRunning);
    assert_eq!(
        parse_ps_output(r#"{"State":"running"}"#),
        RunStatus::Running
    );
    assert_eq!(
        parse_ps_output(r#"[{"State":"paused"},{"State":"running"}]"#),
        RunStatus::Running
    );
}

#[test]
fn test_depth_bound_excludes_deep_files() {
    let temp = tempfile::tempdir().unwrap();
    let shallow = temp.path().join("svc/docker-compose.yml");
    let deep = temp.path().join("x/y/z/docker-compose.yml");
    for path in [&shallow, &deep] {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "services: {}\n").unwrap();
    }

    assert_eq!(scan_dir(temp.path(), 2).unwrap(), vec![shallow]);
}

#[test]
fn test_unreadable_base_paths_are_skipped() {
    let temp = tempfile::tempdir().unwrap();
    let file = temp.path().join("compose.yml");
    fs::write(&file, "services: {}\n").unwrap();

    let discovery = ComposeDiscovery::new(
        vec![
            SearchPath::new("/definitely/not/here"),
            SearchPath::new(file.to_str().unwrap()),
            SearchPath::new(temp.path().to_str().unwrap()),
        ],
        2,
    );

    let files = discovery.discover_all().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path(), file.as_path());
}

#[test]
fn test_missing_services_mapping_is_reported() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("compose.yml");
    fs::write(&path, "volumes:\n  data: {}\n").unwrap();

    let err = list_services(&path).unwrap_err();
    assert!(matches!(err, ExtractError::MissingServices(_)));
}

#[test]
fn test_service_set_equality() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("docker-compose.yml");
    fs::write(
        &path,
        "services:\n  web:\n    image: nginx\n  db:\n    image: postgres\n",
    )
    .unwrap();

    let names: BTreeSet<String> = list_services(&path).unwrap().into_iter().collect();
    let expected: BTreeSet<String> = ["web", "db"].iter().map(|s| s.to_string()).collect();
    assert_eq!(names, expected);
}
