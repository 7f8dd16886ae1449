use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command running inside `dir`, isolated from any user-level configuration.
fn cmd_in(dir: &Path) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("file-list");
    c.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env_remove("RUST_LOG");
    c
}

/// Create a project directory holding one file per relative path.
fn create_project(paths: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for path in paths {
        let file = dir.path().join(path);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(&file, "content").unwrap();
    }
    dir
}

fn read_json_list(path: &Path) -> Vec<String> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

mod json_output {
    use super::*;

    #[test]
    fn test_defaults_scan_target_into_file_list_json() {
        let project = create_project(&["target/a.txt", "target/b.log", "target/sub/c.txt"]);

        cmd_in(project.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 3 file(s)"));

        assert_eq!(
            read_json_list(&project.path().join("target/file-list.json")),
            vec!["a.txt", "b.log", "sub/c.txt"]
        );
    }

    #[test]
    fn test_include_pattern() {
        let project = create_project(&["target/a.txt", "target/b.log", "target/sub/c.txt"]);

        cmd_in(project.path())
            .args(["--include", "**/*.txt"])
            .assert()
            .success();

        assert_eq!(
            read_json_list(&project.path().join("target/file-list.json")),
            vec!["a.txt", "sub/c.txt"]
        );
    }

    #[test]
    fn test_include_and_exclude_patterns() {
        let project = create_project(&["target/a.txt", "target/b.log", "target/sub/c.txt"]);

        cmd_in(project.path())
            .args(["-i", "**/*.txt", "-e", "sub/**"])
            .assert()
            .success();

        assert_eq!(
            read_json_list(&project.path().join("target/file-list.json")),
            vec!["a.txt"]
        );
    }

    #[test]
    fn test_custom_base_dir_and_output() {
        let project = create_project(&["web/js/app.js", "web/js/lib/util.js", "web/index.html"]);

        cmd_in(project.path())
            .args(["-b", "web", "-o", "files.json", "-i", "js/**/*.js"])
            .assert()
            .success();

        assert_eq!(
            read_json_list(&project.path().join("files.json")),
            vec!["js/app.js", "js/lib/util.js"]
        );
    }

    #[test]
    fn test_case_insensitive_matching() {
        let project = create_project(&["target/A.TXT", "target/b.txt", "target/c.log"]);

        cmd_in(project.path())
            .args(["-i", "*.txt", "--case-sensitive", "false"])
            .assert()
            .success();

        assert_eq!(
            read_json_list(&project.path().join("target/file-list.json")),
            vec!["A.TXT", "b.txt"]
        );
    }

    #[test]
    fn test_empty_result_writes_empty_array() {
        let project = create_project(&["target/a.txt"]);

        cmd_in(project.path())
            .args(["-i", "**/*.java"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 0 file(s)"));

        assert_eq!(
            fs::read_to_string(project.path().join("target/file-list.json")).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_brackets_in_patterns_match_literally() {
        let project = create_project(&["target/pages/[id].js", "target/pages/i.js"]);

        cmd_in(project.path())
            .args(["-i", "pages/[id].js"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote 1 file(s)"));

        assert_eq!(
            read_json_list(&project.path().join("target/file-list.json")),
            vec!["pages/[id].js"]
        );

        cmd_in(project.path())
            .args(["-e", "**/[id].js", "-e", "*.json"])
            .assert()
            .success();

        assert_eq!(
            read_json_list(&project.path().join("target/file-list.json")),
            vec!["pages/i.js"]
        );
    }

    #[test]
    fn test_default_excludes_flag() {
        let project = create_project(&["src/.svn/entries", "src/main.js", "src/main.js~"]);

        cmd_in(project.path())
            .args(["-b", "src", "-o", "out.json", "--default-excludes"])
            .assert()
            .success();

        assert_eq!(
            read_json_list(&project.path().join("out.json")),
            vec!["main.js"]
        );
    }
}

mod junit_output {
    use super::*;

    #[test]
    fn test_junit_suite() {
        let project = create_project(&[
            "src/test/java/com/example/FooTest.java",
            "src/test/java/com/example/sub/BarTest.java",
            "src/test/java/com/example/Helper.java",
        ]);

        cmd_in(project.path())
            .args([
                "-b",
                "src/test/java",
                "-o",
                "AllTests.java",
                "-i",
                "**/*Test.java",
                "--type",
                "junit",
            ])
            .assert()
            .success();

        let source = fs::read_to_string(project.path().join("AllTests.java")).unwrap();
        assert!(source.starts_with("package generated;"));
        assert!(source.contains("import org.junit.runner.RunWith;"));
        assert!(source.contains("import org.junit.runners.Suite;"));
        assert!(source.contains("@RunWith(Suite.class)"));
        assert!(source.contains("com.example.FooTest.class,"));
        assert!(source.contains("com.example.sub.BarTest.class"));
        assert!(!source.contains("com.example.sub.BarTest.class,"));
        assert!(!source.contains("Helper"));
        assert!(source.contains("public class AllTests { }"));
    }

    #[test]
    fn test_junit_suite_custom_names() {
        let project = create_project(&["tests/OneTest.java"]);

        cmd_in(project.path())
            .args([
                "-b",
                "tests",
                "-o",
                "Suite.java",
                "-t",
                "junit",
                "--suite-package",
                "com.example.suite",
                "--suite-class",
                "EverythingTest",
            ])
            .assert()
            .success();

        let source = fs::read_to_string(project.path().join("Suite.java")).unwrap();
        assert!(source.starts_with("package com.example.suite;"));
        assert!(source.contains("OneTest.class"));
        assert!(source.contains("public class EverythingTest { }"));
    }

    #[test]
    fn test_junit_empty_suite_has_no_separator() {
        let project = create_project(&["tests/README.md"]);

        cmd_in(project.path())
            .args(["-b", "tests", "-o", "AllTests.java", "-t", "junit", "-i", "**/*.java"])
            .assert()
            .success();

        let source = fs::read_to_string(project.path().join("AllTests.java")).unwrap();
        assert!(!source.contains(','));
        assert!(source.contains("@Suite.SuiteClasses({"));
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_missing_base_dir_is_scan_failure() {
        let project = create_project(&[]);

        cmd_in(project.path())
            .args(["-b", "does-not-exist", "-o", "out.json"])
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("Base directory not found"));

        assert!(!project.path().join("out.json").exists());
    }

    #[test]
    fn test_unwritable_output_is_write_failure() {
        let project = create_project(&["target/a.txt"]);

        cmd_in(project.path())
            .args(["-o", "missing-dir/out.json"])
            .assert()
            .failure()
            .code(4)
            .stderr(predicate::str::contains("Could not write output file"));
    }

    #[test]
    fn test_failed_scan_keeps_existing_output() {
        let project = create_project(&["out.json"]);
        fs::write(project.path().join("out.json"), "previous").unwrap();

        cmd_in(project.path())
            .args(["-b", "nope", "-o", "out.json"])
            .assert()
            .failure()
            .code(3);

        assert_eq!(
            fs::read_to_string(project.path().join("out.json")).unwrap(),
            "previous"
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let project = create_project(&[]);

        cmd_in(project.path())
            .args(["--type", "xml"])
            .assert()
            .failure()
            .code(2);
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_project_config_is_used() {
        let project = create_project(&["build/a.js", "build/b.css"]);
        fs::write(
            project.path().join(".file-list.yaml"),
            "scan:\n  base_dir: build\n  includes: ['**/*.js']\noutput:\n  file: list.json\n",
        )
        .unwrap();

        cmd_in(project.path()).assert().success();

        assert_eq!(
            read_json_list(&project.path().join("list.json")),
            vec!["a.js"]
        );
    }

    #[test]
    fn test_cli_overrides_config() {
        let project = create_project(&["build/a.js", "build/b.css"]);
        fs::write(
            project.path().join(".file-list.toml"),
            "[scan]\nbase_dir = \"build\"\nincludes = [\"**/*.js\"]\n\n[output]\nfile = \"list.json\"\n",
        )
        .unwrap();

        cmd_in(project.path())
            .args(["-i", "**/*.css"])
            .assert()
            .success();

        assert_eq!(
            read_json_list(&project.path().join("list.json")),
            vec!["b.css"]
        );
    }

    #[test]
    fn test_explicit_config_file() {
        let project = create_project(&["build/a.js"]);
        fs::create_dir_all(project.path().join("ci")).unwrap();
        fs::write(
            project.path().join("ci/file-list.json"),
            r#"{"scan": {"base_dir": "build"}, "output": {"file": "ci-list.json"}}"#,
        )
        .unwrap();

        cmd_in(project.path())
            .args(["--config", "ci/file-list.json"])
            .assert()
            .success();

        assert_eq!(
            read_json_list(&project.path().join("ci-list.json")),
            vec!["a.js"]
        );
    }

    #[test]
    fn test_missing_explicit_config_is_config_error() {
        let project = create_project(&[]);

        cmd_in(project.path())
            .args(["--config", "absent.yaml"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Configuration error"));
    }

    #[test]
    fn test_invalid_type_in_explicit_config() {
        let project = create_project(&["target/a.txt"]);
        fs::write(project.path().join("ci.yaml"), "output:\n  type: sarif\n").unwrap();

        cmd_in(project.path())
            .args(["--config", "ci.yaml"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("unknown variant"));
    }

    #[test]
    fn test_invalid_discovered_config_is_skipped() {
        let project = create_project(&["target/a.txt"]);
        fs::write(
            project.path().join(".file-list.yaml"),
            "output:\n  type: sarif\n",
        )
        .unwrap();

        cmd_in(project.path())
            .assert()
            .success()
            .stderr(predicate::str::contains("Ignoring unreadable configuration file"));

        assert_eq!(
            read_json_list(&project.path().join("target/file-list.json")),
            vec!["a.txt"]
        );
    }

    #[test]
    fn test_init_writes_template_once() {
        let project = create_project(&[]);

        cmd_in(project.path())
            .arg("--init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created configuration file template"));

        let template = fs::read_to_string(project.path().join(".file-list.yaml")).unwrap();
        assert!(template.contains("base_dir: ./target/"));

        cmd_in(project.path())
            .arg("--init")
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn test_init_with_toml_path_writes_toml() {
        let project = create_project(&["build/a.js"]);
        fs::create_dir_all(project.path().join("ci")).unwrap();

        cmd_in(project.path())
            .args(["--init", "--config", "ci/file-list.toml"])
            .assert()
            .success();

        let template = fs::read_to_string(project.path().join("ci/file-list.toml")).unwrap();
        assert!(template.contains("[scan]"));

        cmd_in(project.path())
            .args(["--config", "ci/file-list.toml", "-b", "build", "-o", "out.json"])
            .assert()
            .success();

        assert_eq!(read_json_list(&project.path().join("out.json")), vec!["a.js"]);
    }

    #[test]
    fn test_init_with_unknown_extension_is_rejected() {
        let project = create_project(&[]);

        cmd_in(project.path())
            .args(["--init", "--config", "file-list.ini"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Unsupported config format"));

        assert!(!project.path().join("file-list.ini").exists());
    }
}
