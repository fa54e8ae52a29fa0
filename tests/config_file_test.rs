use std::env;
use std::fs;
use std::sync::Mutex;
use task_list_rs::config::{Config, PersistenceMode};

// Mutex to ensure environment variable tests don't run in parallel
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_VARS: [&str; 7] = [
    "TASK_LIST_CONFIG",
    "TASK_LIST_HOST",
    "TASK_LIST_PORT",
    "TASK_LIST_PERSISTENCE",
    "TASK_LIST_SNAPSHOT_PATH",
    "TASK_LIST_JOB_DELAY_SECS",
    "TASK_LIST_SHUTDOWN_TIMEOUT_SECS",
];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_load_config_from_yaml() {
    let yaml_content = r#"
host: "127.0.0.1"
port: 9000
persistence: "memory"
snapshot_path: "tasks.json"
job_delay_secs: 2
shutdown_timeout_secs: 45
"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("service.yaml");
    fs::write(&path, yaml_content).unwrap();

    let config = Config::from_file(path.to_str().unwrap()).unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9000);
    assert_eq!(config.persistence, PersistenceMode::Memory);
    assert_eq!(config.snapshot_path, "tasks.json");
    assert_eq!(config.job_delay_secs, 2);
    assert_eq!(config.shutdown_timeout_secs, 45);
}

#[test]
fn test_load_config_from_toml() {
    let toml_content = r#"
port = 8181
persistence = "snapshot"
snapshot_path = "data/task.json"
"#;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("service.toml");
    fs::write(&path, toml_content).unwrap();

    let config = Config::from_file(path.to_str().unwrap()).unwrap();

    assert_eq!(config.port, 8181);
    assert_eq!(config.persistence, PersistenceMode::Snapshot);
    assert_eq!(config.snapshot_path, "data/task.json");

    // Fields missing from the file keep their defaults
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.job_delay_secs, 5);
}

#[test]
fn test_file_persistence_alias() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alias.yaml");
    fs::write(&path, "persistence: \"file\"\n").unwrap();

    let config = Config::from_file(path.to_str().unwrap()).unwrap();
    assert_eq!(config.persistence, PersistenceMode::Snapshot);
}

#[test]
fn test_config_validation_fails_for_zero_port() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invalid.yaml");
    fs::write(&path, "port: 0\n").unwrap();

    let result = Config::from_file(path.to_str().unwrap());
    assert!(result.is_err());
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let result = Config::from_file(path.to_str().unwrap());
    assert!(result.is_err());
}

#[test]
fn test_load_config_from_env() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TASK_LIST_HOST", "localhost");
    env::set_var("TASK_LIST_PORT", "3000");
    env::set_var("TASK_LIST_PERSISTENCE", "memory");
    env::set_var("TASK_LIST_JOB_DELAY_SECS", "1");

    let config = Config::from_env().unwrap();

    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 3000);
    assert_eq!(config.persistence, PersistenceMode::Memory);
    assert_eq!(config.job_delay_secs, 1);
    assert_eq!(config.snapshot_path, "task.json");

    clear_env();
}

#[test]
fn test_invalid_persistence_env() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TASK_LIST_PERSISTENCE", "postgres");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_invalid_port_env() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    env::set_var("TASK_LIST_PORT", "eighty");

    let result = Config::from_env();
    assert!(result.is_err());

    clear_env();
}

#[test]
fn test_load_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let config = Config::load().unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.persistence, PersistenceMode::Snapshot);
    assert_eq!(config.snapshot_path, "task.json");
    assert_eq!(config.job_delay_secs, 5);
}

#[test]
fn test_config_env_var_points_at_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("override.yaml");
    fs::write(&path, "port: 7070\n").unwrap();

    env::set_var("TASK_LIST_CONFIG", path.to_str().unwrap());

    let config = Config::load().unwrap();
    assert_eq!(config.port, 7070);

    clear_env();
}
