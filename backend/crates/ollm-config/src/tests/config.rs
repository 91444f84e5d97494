use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, Profile};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.profile, eq(Profile::Dev));
    assert_that!(
        config.dev_server.host_all_interfaces,
        eq(crate::DEFAULT_HOST_ALL_INTERFACES)
    );
    assert_that!(config.dev_server.use_polling, eq(crate::DEFAULT_USE_POLLING));
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".ollm");
    let _dir = EnvGuard::set(crate::CONFIG_DIR_ENV, nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [dev_server]
            host_all_interfaces = false
            use_polling = false

            [logging]
            level = "debug"
            file = "ollm.log"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.dev_server.host_all_interfaces, eq(false));
    assert_that!(config.dev_server.use_polling, eq(false));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.file, some(eq("ollm.log")));
}

#[test]
#[serial]
fn given_partial_toml_when_load_then_missing_fields_use_defaults() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [dev_server]
            use_polling = false
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.dev_server.use_polling, eq(false));
    assert_that!(config.dev_server.host_all_interfaces, eq(true));
    assert_that!(config.logging.dir, eq(crate::DEFAULT_LOG_DIRECTORY));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [dev_server]
            use_polling = true
        "#,
    )
    .unwrap();
    let _polling = EnvGuard::set("OLLM_DEV_SERVER_USE_POLLING", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.dev_server.use_polling, eq(false));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_all_applied() {
    // Given
    let _temp = setup_config_dir();
    let _host = EnvGuard::set("OLLM_DEV_SERVER_HOST_ALL_INTERFACES", "0");
    let _level = EnvGuard::set("OLLM_LOG_LEVEL", "warn");
    let _dir = EnvGuard::set("OLLM_LOG_DIR", "logs");
    let _file = EnvGuard::set("OLLM_LOG_FILE", "session.log");
    let _colored = EnvGuard::set("OLLM_LOG_COLORED", "1");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.dev_server.host_all_interfaces, eq(false));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
    assert_that!(config.logging.dir, eq("logs"));
    assert_that!(config.logging.file, some(eq("session.log")));
    assert_that!(config.logging.colored, eq(true));
}

#[test]
#[serial]
fn given_dotenv_file_when_load_then_variables_applied() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _level = EnvGuard::remove("OLLM_LOG_LEVEL");
    std::fs::write(temp.path().join(".env"), "OLLM_LOG_LEVEL=trace\n").unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Trace));
}

#[test]
#[serial]
fn given_dotenv_and_process_env_when_load_then_process_env_wins() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("OLLM_LOG_LEVEL", "error");
    std::fs::write(temp.path().join(".env"), "OLLM_LOG_LEVEL=trace\n").unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Error));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_joined_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("OLLM_LOG_FILE", "ollm.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path().unwrap();

    // Then
    assert_that!(
        path,
        some(eq(&temp.path().join(crate::DEFAULT_LOG_DIRECTORY).join("ollm.log")))
    );
}

#[test]
#[serial]
fn given_no_log_file_when_log_file_path_then_none() {
    let _temp = setup_config_dir();
    let _file = EnvGuard::remove("OLLM_LOG_FILE");

    let config = Config::load().unwrap();

    assert_that!(config.log_file_path().unwrap(), none());
}

#[test]
#[serial]
fn given_config_when_serialized_then_contains_sections() {
    let _temp = setup_config_dir();

    let config = Config::load().unwrap();
    let json = serde_json::to_value(&config).unwrap();

    assert_that!(json["profile"].as_str(), eq(Some("dev")));
    assert_that!(json["dev_server"]["use_polling"].as_bool(), eq(Some(true)));
    assert_that!(json["logging"]["level"].as_str(), eq(Some("info")));
}
