use super::*;
use serde::Serialize;
use std::path::Path;
use tempfile::TempDir;

fn valid_config(dir: &TempDir) -> DupeConfig {
    DupeConfig {
        directory_scope: dir.path().to_string_lossy().to_string(),
        check_file_extension: ".txt".to_string(),
        content_regex: r"key=(\w+)".to_string(),
        ..DupeConfig::default()
    }
}

#[test]
fn test_defaults() {
    let config = DupeConfig::default();
    assert_eq!(config.directory_scope, ".");
    assert_eq!(config.max_file_size_bytes, 200_000);
    assert_eq!(config.max_files_to_process, 500);
    assert_eq!(config.log_level, "info");
    assert!(!config.fail_on_duplicates);
}

#[test]
fn test_validate_normalizes_extensions() {
    let dir = TempDir::new().unwrap();
    let config = DupeConfig {
        check_file_extension: "txt".to_string(),
        excluded_extensions: vec!["js".to_string(), " .md ".to_string(), String::new()],
        ..valid_config(&dir)
    };

    let scan = config.validate().unwrap();
    assert_eq!(scan.extension, ".txt");
    assert_eq!(scan.excluded_extensions.len(), 2);
    assert!(scan.excluded_extensions.contains(".js"));
    assert!(scan.excluded_extensions.contains(".md"));
}

#[test]
fn test_validate_drops_blank_ignore_entries() {
    let dir = TempDir::new().unwrap();
    let config = DupeConfig {
        ignore_files: vec![String::new(), "secrets.txt".to_string()],
        ignore_paths_containing: vec![String::new(), " vendor".to_string()],
        ..valid_config(&dir)
    };

    let scan = config.validate().unwrap();
    assert_eq!(scan.ignored_files.len(), 1);
    assert!(scan.ignored_files.contains("secrets.txt"));
    assert_eq!(scan.ignored_paths, vec!["vendor".to_string()]);
}

#[test]
fn test_validate_rejects_bad_extension() {
    let dir = TempDir::new().unwrap();
    for extension in ["", "."] {
        let config = DupeConfig {
            check_file_extension: extension.to_string(),
            ..valid_config(&dir)
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("invalid file extension"));
    }
}

#[test]
fn test_validate_rejects_bad_regex() {
    let dir = TempDir::new().unwrap();
    let config = DupeConfig {
        content_regex: "key=(".to_string(),
        ..valid_config(&dir)
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("error compiling content regex"));
}

#[test]
fn test_validate_rejects_missing_directory() {
    let dir = TempDir::new().unwrap();
    let config = DupeConfig {
        directory_scope: dir.path().join("missing").to_string_lossy().to_string(),
        ..valid_config(&dir)
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("error opening directory"));
}

#[test]
fn test_validate_rejects_thread_percentage_out_of_range() {
    let dir = TempDir::new().unwrap();
    let config = DupeConfig {
        thread_percentage: 0,
        ..valid_config(&dir)
    };
    assert!(config.validate().is_err());
}

// Every load reads DUPE_CHECK_* variables, so loading tests run inside a
// figment Jail to serialize them against the tests that set those variables.

#[test]
fn test_load_from_custom_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
check_file_extension = "yml"
max_file_size_bytes = 1024
ignore_files = ["a.yml", "b.yml"]
"#,
        )?;

        let config = DupeConfig::load::<()>(Some(Path::new("custom.toml")), None)
            .map_err(|e| e.to_string())?;
        assert_eq!(config.check_file_extension, "yml");
        assert_eq!(config.max_file_size_bytes, 1024);
        assert_eq!(config.ignore_files, vec!["a.yml", "b.yml"]);
        // untouched fields keep their defaults
        assert_eq!(config.max_files_to_process, 500);
        Ok(())
    });
}

#[test]
fn test_load_from_yaml_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("settings.yaml", "content_regex: 'token=(\\w+)'\nmax_files_to_process: 3\n")?;

        let config = DupeConfig::load::<()>(Some(Path::new("settings.yaml")), None)
            .map_err(|e| e.to_string())?;
        assert_eq!(config.content_regex, r"token=(\w+)");
        assert_eq!(config.max_files_to_process, 3);
        Ok(())
    });
}

#[test]
fn test_default_config_file_in_working_directory() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("dupe-check.yml", "check_file_extension: env\n")?;

        let config = DupeConfig::load::<()>(None, None).map_err(|e| e.to_string())?;
        assert_eq!(config.check_file_extension, "env");
        Ok(())
    });
}

#[test]
fn test_missing_custom_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = DupeConfig::load::<()>(Some(dir.path().join("nope.toml").as_path()), None);
    assert!(result.is_err());
}

#[derive(Serialize)]
struct Overrides {
    max_files_to_process: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
}

#[test]
fn test_overrides_take_priority_over_file() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "max_files_to_process = 10\nlog_level = \"debug\"\n")?;

        let overrides = Overrides {
            max_files_to_process: 2,
            log_level: None,
        };
        let config = DupeConfig::load(Some(Path::new("custom.toml")), Some(&overrides))
            .map_err(|e| e.to_string())?;
        assert_eq!(config.max_files_to_process, 2);
        // skipped override fields fall through to the file
        assert_eq!(config.log_level, "debug");
        Ok(())
    });
}

#[test]
fn test_env_layer_sits_between_file_and_overrides() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("dupe-check.toml", "max_files_to_process = 10\nmax_threads = 3\n")?;
        jail.set_env("DUPE_CHECK_MAX_FILES_TO_PROCESS", "20");
        jail.set_env("DUPE_CHECK_LOG_LEVEL", "warn");

        let config = DupeConfig::load::<()>(None, None).map_err(|e| e.to_string())?;
        assert_eq!(config.max_files_to_process, 20);
        assert_eq!(config.max_threads, 3);
        assert_eq!(config.log_level, "warn");

        let overrides = Overrides {
            max_files_to_process: 2,
            log_level: None,
        };
        let config = DupeConfig::load(None, Some(&overrides)).map_err(|e| e.to_string())?;
        assert_eq!(config.max_files_to_process, 2);
        assert_eq!(config.log_level, "warn");
        Ok(())
    });
}

#[test]
fn test_env_lists_accept_comma_form() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("DUPE_CHECK_IGNORE_FILES", "a.env, b.env,");
        jail.set_env("DUPE_CHECK_EXCLUDED_EXTENSIONS", "md");
        jail.set_env("DUPE_CHECK_IGNORE_PATHS_CONTAINING", "[vendor, node_modules]");

        let config = DupeConfig::load::<()>(None, None).map_err(|e| e.to_string())?;
        assert_eq!(config.ignore_files, vec!["a.env", "b.env"]);
        assert_eq!(config.excluded_extensions, vec!["md"]);
        assert_eq!(config.ignore_paths_containing, vec!["vendor", "node_modules"]);
        Ok(())
    });
}

#[test]
fn test_file_lists_accept_comma_form() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("lists.toml", "ignore_files = \"a.env,b.env\"\n")?;

        let config = DupeConfig::load::<()>(Some(Path::new("lists.toml")), None)
            .map_err(|e| e.to_string())?;
        assert_eq!(config.ignore_files, vec!["a.env", "b.env"]);
        Ok(())
    });
}
