/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_ports() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ports")
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Config content pointing `ports` at the fixture catalog.
fn config_with_ports(extra: &str) -> String {
    format!("ports: '{}'\n{}", fixtures_ports().display(), extra)
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_ports_and_format() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depend-info.config.yml"),
            &config_with_ports("format: dot\n"),
        );

        let output = cargo_bin_cmd!("depend-info")
            .current_dir(dir.path())
            .arg("lib-a")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("digraph G{"));
        assert!(stdout.contains("lib_a -> lib_b;"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Auto-discovered config file"));
    }

    #[test]
    fn test_no_config_file_uses_default_ports_dir() {
        let dir = TempDir::new().unwrap();
        let port_dir = dir.path().join("ports").join("zlib");
        fs::create_dir_all(&port_dir).unwrap();
        fs::write(port_dir.join("port.toml"), "name = \"zlib\"\n").unwrap();

        let output = cargo_bin_cmd!("depend-info")
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "zlib: \n");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("config"));
    }

    #[test]
    fn test_unknown_field_warns_but_succeeds() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depend-info.config.yml"),
            &config_with_ports("check_cve: true\n"),
        );

        let output = cargo_bin_cmd!("depend-info")
            .current_dir(dir.path())
            .arg("zlib")
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'check_cve'"));
    }

    #[test]
    fn test_invalid_format_value_fails() {
        let dir = TempDir::new().unwrap();
        write_config(
            &dir.path().join("depend-info.config.yml"),
            &config_with_ports("format: svg\n"),
        );

        let output = cargo_bin_cmd!("depend-info")
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid configuration"));
    }
}

// ============================================================================
// Explicit Config Path (`--config`) Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("custom-config.yml");
        write_config(&config_path, &config_with_ports("format: dgml\n"));

        let output = cargo_bin_cmd!("depend-info")
            .args(["-c", config_path.to_str().unwrap(), "zlib"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("<Node Id=\"zlib\" />"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Loaded config from:"));
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        cargo_bin_cmd!("depend-info")
            .args([
                "-p",
                "tests/fixtures/ports",
                "-c",
                "nonexistent-config.yml",
            ])
            .assert()
            .code(1); // ApplicationError
    }
}

// ============================================================================
// CLI + Config Merge Tests
// ============================================================================

mod merge_tests {
    use super::*;

    #[test]
    fn test_cli_switch_overrides_config_format() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, &config_with_ports("format: dgml\n"));

        let output = cargo_bin_cmd!("depend-info")
            .args(["-c", config_path.to_str().unwrap(), "--dot", "curl"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("digraph G{"));
    }

    #[test]
    fn test_cli_ports_overrides_config_ports() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(&config_path, "ports: /nonexistent/ports\n");

        let output = cargo_bin_cmd!("depend-info")
            .args([
                "-c",
                config_path.to_str().unwrap(),
                "-p",
                fixtures_ports().to_str().unwrap(),
                "openssl",
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "openssl: \n");
    }

    #[test]
    fn test_config_feature_links_applies() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &config_with_ports("format: dgml\nfeature_links: never\n"),
        );

        let output = cargo_bin_cmd!("depend-info")
            .args(["-c", config_path.to_str().unwrap()])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("<Node Id=\"nghttp2\" />"));
        assert!(!stdout.contains("Target=\"nghttp2\""));
    }

    #[test]
    fn test_cli_feature_links_overrides_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        write_config(
            &config_path,
            &config_with_ports("format: dgml\nfeature_links: never\n"),
        );

        let output = cargo_bin_cmd!("depend-info")
            .args([
                "-c",
                config_path.to_str().unwrap(),
                "--feature-links",
                "unfiltered",
            ])
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("<Link Source=\"curl\" Target=\"nghttp2\" />"));
    }
}
