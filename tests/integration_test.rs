//! End-to-end tests for the conversion pipeline
//!
//! These drive the public API the way the CLI does: source text in, Postman
//! collection out, including the file-to-file path with parent-directory
//! creation.

use larapost::pipeline::{convert_file, convert_source};
use serde_json::json;
use std::fs;
use std::path::PathBuf;

const THREE_LINE_INPUT: &str = "\
Route::get('/users')->name('users.index');
Route::post('/users');
Route::resource('comments');";

#[test]
fn test_three_line_input_produces_expected_collection() {
    let conversion = convert_source(THREE_LINE_INPUT);
    let value = serde_json::to_value(&conversion.collection).unwrap();

    let headers = json!([
        { "key": "Accept", "value": "application/json" },
        { "key": "Content-Type", "value": "application/json" },
        { "key": "Authorization", "value": "Bearer {{token}}" }
    ]);
    let body = json!({
        "mode": "raw",
        "raw": "{\n    \n}",
        "options": { "raw": { "language": "json" } }
    });

    assert_eq!(
        value,
        json!({
            "info": {
                "name": "API Routes Collection",
                "description": "Generated from Laravel routes",
                "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json"
            },
            "item": [
                {
                    "name": "Comments",
                    "item": [
                        {
                            "name": "DELETE comments.destroy",
                            "request": {
                                "method": "DELETE",
                                "url": {
                                    "raw": "{{base_url}}/api/comments/:id",
                                    "host": ["{{base_url}}"],
                                    "path": ["api", "comments", ":id"]
                                },
                                "header": headers.clone()
                            }
                        },
                        {
                            "name": "GET comments.index",
                            "request": {
                                "method": "GET",
                                "url": {
                                    "raw": "{{base_url}}/api/comments",
                                    "host": ["{{base_url}}"],
                                    "path": ["api", "comments"]
                                },
                                "header": headers.clone()
                            }
                        },
                        {
                            "name": "GET comments.show",
                            "request": {
                                "method": "GET",
                                "url": {
                                    "raw": "{{base_url}}/api/comments/:id",
                                    "host": ["{{base_url}}"],
                                    "path": ["api", "comments", ":id"]
                                },
                                "header": headers.clone()
                            }
                        },
                        {
                            "name": "POST comments.store",
                            "request": {
                                "method": "POST",
                                "url": {
                                    "raw": "{{base_url}}/api/comments",
                                    "host": ["{{base_url}}"],
                                    "path": ["api", "comments"]
                                },
                                "header": headers.clone(),
                                "body": body.clone()
                            }
                        },
                        {
                            "name": "PUT comments.update",
                            "request": {
                                "method": "PUT",
                                "url": {
                                    "raw": "{{base_url}}/api/comments/:id",
                                    "host": ["{{base_url}}"],
                                    "path": ["api", "comments", ":id"]
                                },
                                "header": headers.clone(),
                                "body": body.clone()
                            }
                        }
                    ]
                },
                {
                    "name": "Users",
                    "item": [
                        {
                            "name": "GET users.index",
                            "request": {
                                "method": "GET",
                                "url": {
                                    "raw": "{{base_url}}/api/users",
                                    "host": ["{{base_url}}"],
                                    "path": ["api", "users"]
                                },
                                "header": headers.clone()
                            }
                        },
                        {
                            "name": "POST users",
                            "request": {
                                "method": "POST",
                                "url": {
                                    "raw": "{{base_url}}/api/users",
                                    "host": ["{{base_url}}"],
                                    "path": ["api", "users"]
                                },
                                "header": headers.clone(),
                                "body": body.clone()
                            }
                        }
                    ]
                }
            ]
        })
    );
}

#[test]
fn test_serialization_is_idempotent() {
    let first = serde_json::to_string_pretty(&convert_source(THREE_LINE_INPUT).collection).unwrap();
    let second =
        serde_json::to_string_pretty(&convert_source(THREE_LINE_INPUT).collection).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_grouped_routes_keep_verbatim_concatenation_end_to_end() {
    let source = "\
Route::prefix('admin')->group(function () {
    Route::get('/stats');
});";
    let conversion = convert_source(source);
    // `admin` + `/stats` concatenates to `admin/stats`; the group key is the
    // segment after the first separator, so the folder is `Stats`
    assert_eq!(conversion.collection.item.len(), 1);
    assert_eq!(conversion.collection.item[0].name, "Stats");
    assert_eq!(
        conversion.collection.item[0].item[0].request.url.raw,
        "{{base_url}}/api/admin/stats"
    );
}

#[test]
fn test_root_route_is_dropped_from_output() {
    let conversion = convert_source("Route::get('/');\nRoute::get('/users');");
    let folders: Vec<&str> = conversion
        .collection
        .item
        .iter()
        .map(|folder| folder.name.as_str())
        .collect();
    assert_eq!(folders, vec!["Users"]);
}

#[test]
fn test_convert_file_creates_parent_directories() {
    let dir = std::env::temp_dir().join(format!(
        "larapost-it-{}-{}",
        std::process::id(),
        line!()
    ));
    let input = dir.join("routes.php");
    let output = dir.join("collections/nested/out.json");

    fs::create_dir_all(&dir).unwrap();
    fs::write(&input, THREE_LINE_INPUT).unwrap();

    convert_file(&input, &output).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["info"]["name"], "API Routes Collection");
    assert_eq!(written["item"][0]["name"], "Comments");

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_convert_file_missing_input_fails_without_output() {
    let dir = std::env::temp_dir().join(format!(
        "larapost-it-{}-{}",
        std::process::id(),
        line!()
    ));
    let output = dir.join("out.json");

    let result = convert_file(&PathBuf::from("/no/such/routes.php"), &output);
    assert!(result.is_err());
    assert!(!output.exists(), "no partial output may be written");
}
