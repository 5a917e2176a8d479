use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Binary with an isolated config dir and no save delay.
fn logoshare(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("logoshare").unwrap();
    cmd.env("XDG_CONFIG_HOME", home)
        .env("HOME", home)
        .env_remove("LOGOSHARE_BACKEND_URL")
        .env_remove("LOGOSHARE_BACKEND_ANON_KEY")
        .env_remove("LOGOSHARE_FILE")
        .env_remove("LOGOSHARE_EMAIL")
        .env_remove("LOGOSHARE_PASSWORD")
        .env("LOGOSHARE_LATENCY_MS", "0");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn run_ok(home: &TempDir, args: &[&str]) -> Value {
    let output = logoshare(home.path())
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert!(json["success"].as_bool().unwrap());
    json
}

mod list_tests {
    use super::*;

    #[test]
    fn test_list_defaults_to_all_samples() {
        let home = tempdir().unwrap();
        let json = run_ok(&home, &["list"]);

        assert_eq!(json["data"]["category"], "Projects");
        assert_eq!(json["data"]["view"], "List");
        assert_eq!(json["data"]["count"], 9);
        assert_eq!(json["data"]["items"][0]["name"], "NovaTech Solutions");
    }

    #[test]
    fn test_list_trash_is_empty() {
        let home = tempdir().unwrap();
        let json = run_ok(&home, &["list", "--category", "trash", "--search", "a"]);
        assert_eq!(json["data"]["count"], 0);
    }

    #[test]
    fn test_list_starred_takes_first_two() {
        let home = tempdir().unwrap();
        let json = run_ok(&home, &["list", "--category", "Starred"]);

        assert_eq!(json["data"]["count"], 2);
        assert_eq!(json["data"]["items"][0]["id"], "1");
        assert_eq!(json["data"]["items"][1]["id"], "2");
    }

    #[test]
    fn test_list_search_matches_client() {
        let home = tempdir().unwrap();
        let json = run_ok(&home, &["list", "--search", "innovate"]);

        assert_eq!(json["data"]["count"], 1);
        assert_eq!(json["data"]["items"][0]["name"], "NovaTech Solutions");
        assert_eq!(json["data"]["items"][0]["client"], "Innovate Corp");
    }

    #[test]
    fn test_list_grid_view_has_card_images() {
        let home = tempdir().unwrap();
        let json = run_ok(&home, &["list", "--view", "grid"]);

        assert_eq!(json["data"]["view"], "Grid");
        let image = json["data"]["items"][0]["image_url"].as_str().unwrap();
        assert!(image.starts_with("https://"));
    }

    #[test]
    fn test_list_unknown_category_fails() {
        let home = tempdir().unwrap();
        logoshare(home.path())
            .args(["list", "--category", "favourites"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown category"));
    }
}

mod add_tests {
    use super::*;

    #[test]
    fn test_add_persists_to_file() {
        let home = tempdir().unwrap();
        let file = home.path().join("catalog.json");
        let file = file.to_str().unwrap();

        let json = run_ok(
            &home,
            &[
                "--file",
                file,
                "add",
                "--name",
                "Test",
                "--color",
                "Primary=#4A55A2",
                "--color",
                "Accent=#808080",
                "--font",
                "Inter",
                "--status",
                "published",
            ],
        );
        assert_eq!(json["data"]["name"], "Test");
        assert_eq!(json["data"]["status"], "Published");
        assert!(json["data"]["id"].as_str().unwrap().starts_with("local-"));
        assert_eq!(json["data"]["colors"].as_array().unwrap().len(), 2);

        let json = run_ok(&home, &["--file", file, "list"]);
        assert_eq!(json["data"]["count"], 10);
        assert_eq!(json["data"]["items"][0]["name"], "Test");

        let json = run_ok(&home, &["--file", file, "list", "--category", "recent"]);
        assert_eq!(json["data"]["items"][0]["name"], "Test");
    }

    #[test]
    fn test_add_blank_name_is_rejected() {
        let home = tempdir().unwrap();
        let file = home.path().join("catalog.json");

        logoshare(home.path())
            .args(["--file", file.to_str().unwrap(), "add", "--name", "   "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Logo name is required."));

        assert!(!file.exists());
    }

    #[test]
    fn test_add_invalid_hex_is_rejected() {
        let home = tempdir().unwrap();
        logoshare(home.path())
            .args(["add", "--name", "Test", "--color", "Primary=#ABC"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("\"success\":false"));
    }

    #[test]
    fn test_add_invalid_link_is_rejected() {
        let home = tempdir().unwrap();
        logoshare(home.path())
            .args(["add", "--name", "Test", "--link", "Brief=not-a-url"])
            .assert()
            .failure();
    }
}

mod share_tests {
    use super::*;

    #[test]
    fn test_share_published_logo() {
        let home = tempdir().unwrap();
        let json = run_ok(
            &home,
            &["share", "--id", "1", "--origin", "https://logos.example.com/"],
        );
        assert_eq!(
            json["data"]["link"],
            "https://logos.example.com/share/logo/1"
        );
    }

    #[test]
    fn test_share_with_invite() {
        let home = tempdir().unwrap();
        let json = run_ok(&home, &["share", "--id", "1", "--invite", "jane@example.com"]);
        assert_eq!(
            json["data"]["invitation"],
            "Invitation sent to jane@example.com"
        );
        assert!(json["data"]["link"]
            .as_str()
            .unwrap()
            .ends_with("/share/logo/1"));
    }

    #[test]
    fn test_share_draft_fails() {
        let home = tempdir().unwrap();
        logoshare(home.path())
            .args(["share", "--id", "2"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be shared"));
    }
}

mod misc_tests {
    use super::*;

    #[test]
    fn test_categories() {
        let home = tempdir().unwrap();
        let json = run_ok(&home, &["categories"]);
        assert_eq!(
            json["data"],
            serde_json::json!(["Projects", "Recent", "Starred", "Trash", "Admin"])
        );
    }

    #[test]
    fn test_get_logo() {
        let home = tempdir().unwrap();
        let json = run_ok(&home, &["get", "--id", "3"]);
        assert_eq!(json["data"]["name"], "Apex Fitness");
    }

    #[test]
    fn test_get_unknown_logo() {
        let home = tempdir().unwrap();
        logoshare(home.path())
            .args(["get", "--id", "404"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Not found"));
    }

    #[test]
    fn test_login_needs_backend() {
        let home = tempdir().unwrap();
        logoshare(home.path())
            .arg("login")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--backend"));
    }

    #[test]
    fn test_signup_needs_credentials() {
        let home = tempdir().unwrap();
        logoshare(home.path())
            .args(["--backend", "signup"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--email"));
    }

    #[test]
    fn test_backend_requires_configuration() {
        let home = tempdir().unwrap();
        logoshare(home.path())
            .args(["--backend", "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("LOGOSHARE_BACKEND_URL"));
    }

    #[test]
    fn test_completions() {
        let home = tempdir().unwrap();
        logoshare(home.path())
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("logoshare"));
    }
}
