//! Integration tests for the inventory endpoints.

mod common;

use axum::http::StatusCode;
use common::spawn_app;
use serde_json::{Value, json};

fn names(body: &Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_list_first_page() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    for i in 0..6 {
        app.create_item(&token, &format!("Cable {i}"), 20, 4.5).await;
    }

    let (status, body) = app
        .send("GET", "/api/inventory?page=1&limit=5", Some(&token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 5);
    assert_eq!(body["total"], 7);
    assert_eq!(body["items"][0]["name"], "Laptop");
}

#[tokio::test]
async fn test_item_lifecycle() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let created = app.create_item(&token, "  Keyboard ", 15, 49.99).await;
    assert_eq!(created["name"], "Keyboard");
    assert_eq!(created["quantity"], 15);
    let id = created["id"].as_i64().unwrap();
    let uri = format!("/api/inventory/{id}");

    let (status, body) = app.send("GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = app
        .send(
            "PUT",
            &uri,
            Some(&token),
            Some(json!({ "name": "Mechanical Keyboard", "quantity": "3", "price": "89.50" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Mechanical Keyboard");
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["price"], 89.5);

    let (status, body) = app.send("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = app.send("GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Item not found");

    let (status, _) = app.send("DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_item_creates_nothing() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (_, before) = app.send("GET", "/api/inventory", Some(&token), None).await;

    let (status, _) = app
        .send(
            "PUT",
            "/api/inventory/9999",
            Some(&token),
            Some(json!({ "name": "Ghost", "quantity": 1, "price": 1.0 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, after) = app.send("GET", "/api/inventory", Some(&token), None).await;
    assert_eq!(before["total"], after["total"]);

    let (status, _) = app
        .send("GET", "/api/inventory/9999", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    for uri in ["/api/inventory/abc", "/api/inventory/1.5", "/api/inventory/99999999999"] {
        let (status, body) = app.send("GET", uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"], "Item id must be an integer");
    }

    let (status, _) = app
        .send("DELETE", "/api/inventory/abc", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_validation_messages() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let cases = [
        (json!({ "quantity": 1, "price": 1 }), "All fields are required"),
        (json!({ "name": "x", "quantity": "", "price": 1 }), "All fields are required"),
        (json!({ "name": "x", "quantity": 1, "price": null }), "All fields are required"),
        (
            json!({ "name": "x", "quantity": -1, "price": 1 }),
            "Quantity must be a non-negative number",
        ),
        (
            json!({ "name": "x", "quantity": 1.5, "price": 1 }),
            "Quantity must be a non-negative number",
        ),
        (json!({ "name": "x", "quantity": 1, "price": 0 }), "Price must be a positive number"),
        (
            json!({ "name": "x", "quantity": 1, "price": "cheap" }),
            "Price must be a positive number",
        ),
    ];

    for (payload, message) in cases {
        let (status, body) = app
            .send("POST", "/api/inventory", Some(&token), Some(payload.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body["error"], message, "{payload}");
    }

    let (_, body) = app.send("GET", "/api/inventory", Some(&token), None).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_zero_quantity_is_accepted() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let item = app.create_item(&token, "Out of stock", 0, 12.0).await;
    assert_eq!(item["quantity"], 0);
}

#[tokio::test]
async fn test_search_matches_substrings_literally() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    app.create_item(&token, "100% Cotton Shirt", 4, 20.0).await;
    app.create_item(&token, "Cotton Socks", 30, 5.0).await;
    app.create_item(&token, "snake_case mug", 7, 9.0).await;
    app.create_item(&token, "snakeXcase mug", 7, 9.0).await;

    let (_, body) = app
        .send("GET", "/api/inventory?search=cotton&limit=100", Some(&token), None)
        .await;
    assert_eq!(body["total"], 2);
    assert_eq!(names(&body), ["100% Cotton Shirt", "Cotton Socks"]);

    let (_, body) = app
        .send("GET", "/api/inventory?search=%25", Some(&token), None)
        .await;
    assert_eq!(body["total"], 1);
    assert_eq!(names(&body), ["100% Cotton Shirt"]);

    let (_, body) = app
        .send("GET", "/api/inventory?search=e_c", Some(&token), None)
        .await;
    assert_eq!(names(&body), ["snake_case mug"]);

    let (_, body) = app
        .send("GET", "/api/inventory?search=&limit=100", Some(&token), None)
        .await;
    assert_eq!(body["total"], 5);

    let (_, body) = app
        .send("GET", "/api/inventory?search=nothing-like-this", Some(&token), None)
        .await;
    assert_eq!(body["total"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_pages_reconstruct_the_sorted_set() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    for (name, quantity) in [("Bolt", 3), ("Anchor", 8), ("Washer", 3), ("Nut", 1), ("Screw", 8)] {
        app.create_item(&token, name, quantity, 0.25).await;
    }

    let (_, full) = app
        .send(
            "GET",
            "/api/inventory?sort=quantity&order=desc&limit=100",
            Some(&token),
            None,
        )
        .await;
    let total = full["total"].as_u64().unwrap();
    assert_eq!(total, 6);

    let mut paged = Vec::new();
    for page in 1..=3 {
        let (status, body) = app
            .send(
                "GET",
                &format!("/api/inventory?sort=quantity&order=desc&limit=2&page={page}"),
                Some(&token),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], total);
        paged.extend(body["items"].as_array().unwrap().iter().cloned());
    }

    assert_eq!(&paged, full["items"].as_array().unwrap());

    let quantities: Vec<i64> = paged.iter().map(|i| i["quantity"].as_i64().unwrap()).collect();
    assert_eq!(quantities, [10, 8, 8, 3, 3, 1]);

    let (_, past_end) = app
        .send("GET", "/api/inventory?limit=2&page=9", Some(&token), None)
        .await;
    assert!(past_end["items"].as_array().unwrap().is_empty());
    assert_eq!(past_end["total"], total);
}

#[tokio::test]
async fn test_huge_page_numbers_return_an_empty_page() {
    let app = spawn_app().await;
    let token = app.viewer_token().await;

    for page in ["92233720368547759", "18446744073709551615"] {
        let (status, body) = app
            .send(
                "GET",
                &format!("/api/inventory?page={page}&limit=100"),
                Some(&token),
                None,
            )
            .await;

        assert_eq!(status, StatusCode::OK, "page={page}");
        assert_eq!(body, json!({ "items": [], "total": 1 }));
    }

    // Still serving afterwards
    let (status, body) = app.send("GET", "/api/inventory", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_sorting_and_lenient_parameters() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    app.create_item(&token, "Zipper", 40, 0.5).await;
    app.create_item(&token, "Button", 90, 0.1).await;

    let (_, body) = app
        .send("GET", "/api/inventory?sort=name", Some(&token), None)
        .await;
    assert_eq!(names(&body), ["Button", "Laptop", "Zipper"]);

    let (_, body) = app
        .send("GET", "/api/inventory?sort=price&order=DESC", Some(&token), None)
        .await;
    assert_eq!(names(&body), ["Laptop", "Zipper", "Button"]);

    let (status, body) = app
        .send(
            "GET",
            "/api/inventory?sort=name;DROP%20TABLE%20inventory&order=sideways&page=-2&limit=abc",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Laptop", "Zipper", "Button"]);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_bulk_insert_skips_invalid_entries() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/inventory/bulk",
            Some(&token),
            Some(json!([
                { "name": "Mouse", "quantity": "25", "price": "19.99" },
                { "name": "", "quantity": 1, "price": 1 },
            ])),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inserted"], 1);
    assert_eq!(body["skipped"], json!([1]));
    assert_eq!(body["message"], "Successfully inserted 1 items");

    let (_, body) = app
        .send("GET", "/api/inventory?search=Mouse", Some(&token), None)
        .await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["quantity"], 25);
}

#[tokio::test]
async fn test_bulk_insert_all_invalid_inserts_nothing() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (status, body) = app
        .send(
            "POST",
            "/api/inventory/bulk",
            Some(&token),
            Some(json!(["Mouse,25,19.99", { "name": "Pad", "quantity": -4, "price": 3 }])),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inserted"], 0);
    assert_eq!(body["skipped"], json!([0, 1]));

    let (_, body) = app.send("GET", "/api/inventory", Some(&token), None).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_bulk_insert_requires_non_empty_array() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    for payload in [json!([]), json!({ "name": "Mouse" }), json!("Mouse")] {
        let (status, body) = app
            .send("POST", "/api/inventory/bulk", Some(&token), Some(payload))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Items must be a non-empty array");
    }
}

#[tokio::test]
async fn test_analytics_reports_low_stock() {
    let app = spawn_app().await;
    let token = app.admin_token().await;

    let (_, body) = app
        .send("GET", "/api/inventory/analytics", Some(&token), None)
        .await;
    assert_eq!(body, json!({ "lowStock": [] }));

    app.create_item(&token, "Toner", 2, 60.0).await;
    app.create_item(&token, "Paper", 5, 8.0).await;
    app.create_item(&token, "Staples", 0, 3.0).await;

    let (status, body) = app
        .send("GET", "/api/inventory/analytics", Some(&token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let low: Vec<&str> = body["lowStock"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(low, ["Toner", "Staples"]);
}
