mod common;

use common::*;
use serde_json::json;

#[test]
fn test_malformed_repositories_is_replaced() {
    let project = Project::new(r#"{"repositories": {"legacy": "value"}}"#);
    project.package("lib", "acme/lib");

    run_switch(&project.app_dir(), &["../lib"]).success();

    let manifest = project.root_json();
    assert_eq!(
        manifest["repositories"],
        json!([{"type": "path", "url": "../lib/"}])
    );
}

#[test]
fn test_non_path_entries_are_preserved() {
    let project = Project::new(
        r#"{"repositories": [{"packagist.org": false}, {"type": "composer", "url": "https://repo.example.com"}]}"#,
    );
    project.package("lib", "acme/lib");

    run_switch(&project.app_dir(), &["../lib"]).success();

    let manifest = project.root_json();
    assert_eq!(
        manifest["repositories"],
        json!([
            {"type": "path", "url": "../lib/"},
            {"packagist.org": false},
            {"type": "composer", "url": "https://repo.example.com"}
        ])
    );
}

#[test]
fn test_unknown_keys_survive() {
    let project = Project::new(
        r#"{
    "name": "acme/app",
    "config": {
        "sort-packages": true
    },
    "scripts": {
        "test": "phpunit"
    }
}"#,
    );
    project.package("lib", "acme/lib");

    run_switch(&project.app_dir(), &["../lib"]).success();

    let manifest = project.root_json();
    assert_eq!(manifest["config"], json!({"sort-packages": true}));
    assert_eq!(manifest["scripts"], json!({"test": "phpunit"}));

    let keys: Vec<_> = manifest.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["name", "config", "scripts", "repositories", "require"]);
}

#[test]
fn test_package_name_used_verbatim() {
    let project = Project::new("{}");
    project.package("lib", "Acme/Mixed-Case");

    run_switch(&project.app_dir(), &["../lib"]).success();

    let manifest = project.root_json();
    assert_eq!(manifest["require"]["Acme/Mixed-Case"], "@dev");
}

#[test]
fn test_same_checkout_twice_in_one_run() {
    let project = Project::new("{}");
    project.package("lib", "acme/lib");

    run_switch(&project.app_dir(), &["../lib", "../lib/"]).success();

    let manifest = project.root_json();
    assert_eq!(repository_urls(&manifest), ["../lib/"]);
    assert_eq!(manifest["require"], json!({"acme/lib": "@dev"}));
}

#[test]
fn test_unicode_is_written_unescaped() {
    let project = Project::new(r#"{"description": "Café ☕"}"#);
    project.package("lib", "acme/lib");

    run_switch(&project.app_dir(), &["../lib"]).success();

    assert!(project.root_raw().contains("\"description\": \"Café ☕\""));
}
