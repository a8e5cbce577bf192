mod common;

use axum_test::TestServer;
use serde_json::json;

async fn skibidi_cookbook(server: &TestServer) {
    for entry in [
        common::recipe(
            "Skibidi Spaghetti",
            &[("Meatball", 3), ("Pasta", 1), ("Tomato", 2)],
        ),
        common::recipe("Meatball", &[("Beef", 2), ("Egg", 1)]),
        common::recipe("Pasta", &[("Flour", 3), ("Egg", 1)]),
        common::ingredient("Beef", 5),
        common::ingredient("Egg", 3),
        common::ingredient("Flour", 0),
        common::ingredient("Tomato", 2),
    ] {
        common::create_entry(server, entry).await;
    }
}

#[tokio::test]
async fn test_summary_nested_recipe() {
    let server = common::make_server();
    skibidi_cookbook(&server).await;

    let response = server
        .get("/summary")
        .add_query_param("name", "Skibidi Spaghetti")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "name": "Skibidi Spaghetti",
            "cookTime": 46,
            "ingredients": [
                { "name": "Beef", "quantity": 6 },
                { "name": "Egg", "quantity": 3 },
                { "name": "Flour", "quantity": 3 },
                { "name": "Egg", "quantity": 1 },
                { "name": "Tomato", "quantity": 2 }
            ]
        })
    );
}

#[tokio::test]
async fn test_summary_chain_multiplies() {
    let server = common::make_server();
    common::create_entry(&server, common::recipe("A", &[("B", 2)])).await;
    common::create_entry(&server, common::recipe("B", &[("C", 3)])).await;
    common::create_entry(&server, common::ingredient("C", 5)).await;

    let response = server.get("/summary").add_query_param("name", "A").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["cookTime"], 30);
    assert_eq!(body["ingredients"], json!([{ "name": "C", "quantity": 6 }]));
}

#[tokio::test]
async fn test_summary_empty_recipe() {
    let server = common::make_server();
    common::create_entry(&server, common::recipe("Air", &[])).await;

    let response = server.get("/summary").add_query_param("name", "Air").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "name": "Air", "cookTime": 0, "ingredients": [] })
    );
}

#[tokio::test]
async fn test_summary_diamond_is_not_merged() {
    let server = common::make_server();
    common::create_entry(&server, common::recipe("Feast", &[("Left", 1), ("Right", 2)])).await;
    common::create_entry(&server, common::recipe("Left", &[("Salt", 1)])).await;
    common::create_entry(&server, common::recipe("Right", &[("Salt", 1)])).await;
    common::create_entry(&server, common::ingredient("Salt", 4)).await;

    let response = server.get("/summary").add_query_param("name", "Feast").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body["ingredients"],
        json!([
            { "name": "Salt", "quantity": 1 },
            { "name": "Salt", "quantity": 2 }
        ])
    );
    assert_eq!(body["cookTime"], 12);
}

#[tokio::test]
async fn test_summary_ingredient_rejected() {
    let server = common::make_server();
    common::create_entry(&server, common::ingredient("Beef", 5)).await;

    let response = server.get("/summary").add_query_param("name", "Beef").await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["details"]["kind"], "recipe_not_found_or_invalid");
}

#[tokio::test]
async fn test_summary_unknown_recipe() {
    let server = common::make_server();

    let response = server.get("/summary").add_query_param("name", "Ghost").await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["details"]["kind"], "recipe_not_found_or_invalid");
}

#[tokio::test]
async fn test_summary_without_name() {
    let server = common::make_server();

    let response = server.get("/summary").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_summary_missing_reference() {
    let server = common::make_server();
    common::create_entry(&server, common::recipe("Toast", &[("Bread", 1), ("Butter", 1)])).await;
    common::create_entry(&server, common::ingredient("Bread", 2)).await;

    let response = server.get("/summary").add_query_param("name", "Toast").await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["details"]["kind"], "missing_referenced_entry");
    assert_eq!(body["error"]["details"]["name"], "Butter");
    assert!(body.get("ingredients").is_none());
}

#[tokio::test]
async fn test_summary_forward_reference_resolves_once_registered() {
    let server = common::make_server();
    common::create_entry(&server, common::recipe("Toast", &[("Bread", 2)])).await;

    server
        .get("/summary")
        .add_query_param("name", "Toast")
        .await
        .assert_status_bad_request();

    common::create_entry(&server, common::ingredient("Bread", 3)).await;

    let response = server.get("/summary").add_query_param("name", "Toast").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["cookTime"], 6);
}

#[tokio::test]
async fn test_summary_cycle_rejected() {
    let server = common::make_server();
    common::create_entry(&server, common::recipe("Chicken", &[("Egg", 1)])).await;
    common::create_entry(&server, common::recipe("Egg", &[("Chicken", 1)])).await;

    let response = server.get("/summary").add_query_param("name", "Chicken").await;

    response.assert_status_bad_request();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["details"]["kind"], "cyclic_reference");
    assert_eq!(
        body["error"]["details"]["path"],
        json!(["Chicken", "Egg", "Chicken"])
    );
}
