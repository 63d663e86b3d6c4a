//! Integration tests for `prodpack init`

mod common;

use common::TestEnv;

#[test]
fn init_writes_starter_config() {
    let env = TestEnv::new();

    let result = env.run(&["init"]);

    assert!(result.success, "init failed: {}", result.stderr);
    let content = std::fs::read_to_string(env.project_path("prodpack.toml")).unwrap();
    assert!(content.contains("[policy]"));
    assert!(content.contains("\"@theia/application-manager\""));
}

#[test]
fn init_fails_if_config_exists_without_force() {
    let env = TestEnv::new();
    env.write_project_file("prodpack.toml", "# keep\n");

    let result = env.run(&["init", "--json"]);

    assert!(!result.success, "expected init to fail");
    let first: serde_json::Value =
        serde_json::from_str(result.stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["kind"], "already_exists");
    assert_eq!(
        std::fs::read_to_string(env.project_path("prodpack.toml")).unwrap(),
        "# keep\n"
    );

    let result = env.run(&["init", "--force"]);
    assert!(result.success);
}

#[test]
fn init_into_directory() {
    let env = TestEnv::new();

    let result = env.run(&["init", "nested/dir", "--json"]);

    assert!(result.success, "init failed: {}", result.stderr);
    assert!(env.project_path("nested/dir/prodpack.toml").exists());
    let last: serde_json::Value =
        serde_json::from_str(result.stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["event"], "complete");
}
