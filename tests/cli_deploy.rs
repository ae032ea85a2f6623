//! End-to-end deploys against a local disk and a stand-in web server.

mod common;

use std::fs::{self, File};
use std::path::PathBuf;

use common::{Responder, TestProject};
use flate2::read::GzDecoder;

fn project() -> TestProject {
    let project = TestProject::new();
    project
        .write("app/index.php", "<?php echo 'hi';")
        .write("app/vendor/lib.php", "<?php")
        .write(".env.production", "APP_ENV=production");
    project
}

const TOP: &str = r#"
before = ["echo built > app/built.txt"]
includes = ["app"]
excludes = ["vendor"]
remote = ["php artisan config:cache"]
"#;

const UPLOADS: &str = r#"
[servers.production.uploads]
".env.production" = ".env"
"#;

#[test]
fn deploy_json_runs_every_stage_in_order() {
    let project = project();
    let responder = Responder::start(
        "200 OK",
        r#"["Removed: old.php","x app/index.php"]"#,
        vec![
            project.disk_path("public/deploy.php"),
            project.disk_path("deploy.tar.gz"),
        ],
    );
    project.config(&responder.url, UPLOADS, TOP);

    let result = project.run(&["deploy", "production", "--json"]);
    let request = responder.finish();

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(
        request
            .request_line
            .starts_with("GET /deploy.php?archive=deploy.tar.gz "),
        "{}",
        request.request_line
    );
    assert_eq!(request.present, vec![true, true]);

    let names = result.event_names();
    assert_eq!(names.first().map(String::as_str), Some("start"));
    assert_eq!(names.last().map(String::as_str), Some("complete"));
    let stages: Vec<String> = result
        .events()
        .iter()
        .filter(|e| e["event"] == "stage")
        .map(|e| e["stage"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        stages,
        vec![
            "run_before",
            "build_archive",
            "upload_artifacts",
            "invoke_remote_script",
            "delete_remote_script",
            "upload_extra_files",
            "cleanup_local",
        ]
    );
    let log: Vec<_> = result
        .events()
        .into_iter()
        .filter(|e| e["event"] == "remote_log")
        .map(|e| e["line"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(log, vec!["Removed: old.php", "x app/index.php"]);

    assert!(!project.disk_path("public/deploy.php").exists());
    assert_eq!(
        fs::read_to_string(project.disk_path(".env")).unwrap(),
        "APP_ENV=production"
    );
    assert!(!project.path(".ferry/deploy.tar.gz").exists());

    let shipped = File::open(project.disk_path("deploy.tar.gz")).unwrap();
    let mut tar = tar::Archive::new(GzDecoder::new(shipped));
    let paths: Vec<PathBuf> = tar
        .entries()
        .unwrap()
        .map(|e| e.unwrap().path().unwrap().into_owned())
        .collect();
    assert!(paths.contains(&PathBuf::from("app/built.txt")));
    assert!(!paths.iter().any(|p| p.starts_with("app/vendor")));
}

#[test]
fn failed_invocation_keeps_the_script_and_exits_non_zero() {
    let project = project();
    let responder = Responder::start(
        "409 Conflict",
        r#"["archive not found: deploy.tar.gz"]"#,
        vec![],
    );
    project.config(&responder.url, "", TOP);

    let result = project.run(&["deploy", "production", "--json"]);
    responder.finish();

    assert!(!result.success);
    let error = result
        .events()
        .into_iter()
        .find(|e| e["event"] == "error")
        .expect("error event");
    assert_eq!(error["stage"], "invoke_remote_script");
    assert!(error["message"].as_str().unwrap().contains("409"));
    assert!(project.disk_path("public/deploy.php").exists());
    assert!(!result.event_names().contains(&"complete".to_string()));
}

#[test]
fn failing_before_command_is_only_a_warning() {
    let project = project();
    let responder = Responder::start("200 OK", "", vec![]);
    project.config(
        &responder.url,
        "",
        r#"
before = ["exit 3"]
includes = ["app"]
"#,
    );

    let result = project.run(&["deploy", "production", "--json"]);
    responder.finish();

    assert!(result.success, "stderr:\n{}", result.stderr);
    let failed = result
        .events()
        .into_iter()
        .find(|e| e["event"] == "command_failed")
        .expect("command_failed event");
    assert_eq!(failed["outcome"]["code"], 3);
    let complete = result.events().pop().unwrap();
    assert_eq!(complete["status"], "success_with_warnings");
}

#[test]
fn debug_mode_rejects_a_non_json_response() {
    let project = project();
    let responder = Responder::start("200 OK", "<html>Fatal error</html>", vec![]);
    project.config(&responder.url, "", TOP);

    let result = project.run(&["deploy", "production", "--color", "never"]);
    responder.finish();

    assert!(!result.success);
    assert!(
        result.stderr.contains("not a JSON execution log"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn no_debug_ignores_the_response_body() {
    let project = project();
    let responder = Responder::start("200 OK", "<html>Fatal error</html>", vec![]);
    project.config(&responder.url, "", TOP);

    let result = project.run(&["deploy", "production", "--json", "--no-debug"]);
    responder.finish();

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert!(!result.event_names().contains(&"remote_log".to_string()));
    assert_eq!(result.event_names().last().map(String::as_str), Some("complete"));
}

#[test]
fn unknown_server_fails_before_any_side_effect() {
    let project = project();
    project.config("http://127.0.0.1:9", "", TOP);

    let result = project.run(&["deploy", "prodution"]);

    assert!(!result.success);
    assert!(result.stderr.contains("did you mean 'production'"), "{}", result.stderr);
    assert!(!project.path("app/built.txt").exists());
    assert!(!project.path(".ferry").exists());
}
