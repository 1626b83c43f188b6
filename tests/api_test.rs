mod common;

use common::{body_json, setup_test_app};
use ewaste_backend::coordinators::WasteItemCoordinator;
use ewaste_backend::types::internal::context::RequestContext;
use ewaste_backend::types::internal::submissions::WasteItemCandidate;
use poem::http::StatusCode;
use poem::test::{TestClient, TestForm, TestFormField};
use poem::Route;
use serde_json::json;

const MIB: usize = 1024 * 1024;

fn owner_body(email: &str) -> serde_json::Value {
    json!({
        "name": "Asha",
        "email": email,
        "phone": "1234567890",
        "address": "12 Market Road"
    })
}

async fn create_owner(client: &TestClient<Route>, email: &str) -> i64 {
    let response = client.post("/api/owners").body_json(&owner_body(email)).send().await;
    response.assert_status(StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

fn png(size: usize) -> TestFormField {
    TestFormField::bytes(vec![7u8; size])
        .name("image")
        .filename("phone.png")
        .content_type("image/png")
}

fn item_form(owner_id: i64) -> TestForm {
    TestForm::new()
        .text("name", "Old phone")
        .text("category", "mobile")
        .text("condition", "used")
        .text("owner", owner_id.to_string())
}

#[tokio::test]
async fn test_health_reports_database() {
    let (client, _app_data, _media) = setup_test_app().await;

    let response = client.get("/api/health").send().await;
    response.assert_status_is_ok();

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_owner_crud_round() {
    let (client, _app_data, _media) = setup_test_app().await;

    let response = client
        .post("/api/owners")
        .body_json(&owner_body("asha@example.com"))
        .send()
        .await;
    response.assert_status(StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Asha");

    let response = client
        .patch(format!("/api/owners/{}", id))
        .body_json(&json!({ "address": "7 Lake View" }))
        .send()
        .await;
    response.assert_status_is_ok();
    let patched = body_json(response).await;
    assert_eq!(patched["address"], "7 Lake View");
    assert_eq!(patched["created_at"], created["created_at"]);

    let response = client.get("/api/owners").send().await;
    response.assert_status_is_ok();
    let page = body_json(response).await;
    assert_eq!(page["count"], 1);
    assert_eq!(page["page"], 1);
    assert_eq!(page["page_size"], 10);
    assert_eq!(page["total_pages"], 1);

    let response = client.delete(format!("/api/owners/{}", id)).send().await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = client.get(format!("/api/owners/{}", id)).send().await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_owner_returns_field_errors() {
    let (client, _app_data, _media) = setup_test_app().await;

    let response = client
        .post("/api/owners")
        .body_json(&json!({
            "name": "Al",
            "email": "asha@example.com",
            "phone": "123-456-7890",
            "address": ""
        }))
        .send()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["status_code"], 400);
    assert_eq!(body["fields"]["name"][0], "Name must be at least 3 characters long.");
    assert_eq!(body["fields"]["address"][0], "This field is required.");
    assert_eq!(body["fields"]["phone"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_partial_owner_reports_supplied_and_missing_fields() {
    let (client, _app_data, _media) = setup_test_app().await;

    let response = client
        .post("/api/owners")
        .body_json(&json!({ "name": "ab", "phone": "12-45" }))
        .send()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let fields = &body_json(response).await["fields"];
    assert_eq!(fields["name"][0], "Name must be at least 3 characters long.");
    assert_eq!(fields["phone"].as_array().unwrap().len(), 2);
    assert_eq!(fields["email"][0], "This field is required.");
    assert_eq!(fields["address"][0], "This field is required.");
}

#[tokio::test]
async fn test_duplicate_email_is_a_field_error() {
    let (client, _app_data, _media) = setup_test_app().await;
    client
        .post("/api/owners")
        .body_json(&owner_body("asha@example.com"))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let response = client
        .post("/api/owners")
        .body_json(&owner_body("asha@example.com"))
        .send()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["fields"]["email"][0], "owner with this email already exists.");
}

#[tokio::test]
async fn test_malformed_body_uses_error_envelope() {
    let (client, _app_data, _media) = setup_test_app().await;

    let response = client
        .post("/api/owners")
        .content_type("application/json")
        .body("{not json")
        .send()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["status_code"], 400);
}

#[tokio::test]
async fn test_collection_request_for_missing_item_is_not_found() {
    let (client, _app_data, _media) = setup_test_app().await;
    let owner = body_json(
        client
            .post("/api/owners")
            .body_json(&owner_body("asha@example.com"))
            .send()
            .await,
    )
    .await;

    let response = client
        .post("/api/collection-requests")
        .body_json(&json!({ "owner": owner["id"], "item": 42 }))
        .send()
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "Waste item with ID 42 not found");
}

#[tokio::test]
async fn test_collection_request_lifecycle_and_analytics() {
    let (client, app_data, _media) = setup_test_app().await;
    let owner = body_json(
        client
            .post("/api/owners")
            .body_json(&owner_body("asha@example.com"))
            .send()
            .await,
    )
    .await;
    let owner_id = owner["id"].as_i64().unwrap();
    client
        .post("/api/owners")
        .body_json(&json!({
            "name": "Ravi",
            "email": "ravi@example.com",
            "phone": "0987654321",
            "address": "3 Hill Street"
        }))
        .send()
        .await
        .assert_status(StatusCode::CREATED);

    let item = WasteItemCoordinator::new(app_data)
        .create(
            &RequestContext::for_cli(),
            WasteItemCandidate {
                name: "Old phone".to_string(),
                category: "mobile".to_string(),
                condition: "used".to_string(),
                owner_id,
                image: None,
                document: None,
            },
        )
        .await
        .unwrap();

    let response = client
        .post("/api/collection-requests")
        .body_json(&json!({ "owner": owner_id, "item": item.item.id, "status": "cancelled" }))
        .send()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["fields"]["status"][0], "Invalid status value.");

    let response = client
        .post("/api/collection-requests")
        .body_json(&json!({ "owner": owner_id, "item": item.item.id }))
        .send()
        .await;
    response.assert_status(StatusCode::CREATED);
    let request = body_json(response).await;
    assert_eq!(request["status"], "pending");
    assert_eq!(request["owner_name"], "Asha");
    assert_eq!(request["item_name"], "Old phone");

    let response = client
        .post(format!("/api/collection-requests/{}/cancel", request["id"]))
        .send()
        .await;
    response.assert_status_is_ok();
    assert_eq!(body_json(response).await["status"], "cancelled");

    let response = client
        .get("/api/ewaste-items")
        .query("category", &"mobile")
        .send()
        .await;
    response.assert_status_is_ok();
    let items = body_json(response).await;
    assert_eq!(items["count"], 1);
    assert_eq!(items["results"][0]["owner_name"], "Asha");

    let response = client.get("/api/analytics").send().await;
    response.assert_status_is_ok();
    let analytics = body_json(response).await;
    assert_eq!(analytics["total_users"], 2);
    assert_eq!(analytics["total_e_waste_items"], 1);
    assert_eq!(
        analytics["e_waste_by_category"],
        json!([{ "category": "mobile", "count": 1 }])
    );
    assert_eq!(
        analytics["collection_status_counts"],
        json!([{ "status": "cancelled", "count": 1 }])
    );
    assert_eq!(
        analytics["user_contributions"],
        json!([
            { "name": "Asha", "total_items": 1 },
            { "name": "Ravi", "total_items": 0 }
        ])
    );
}

#[tokio::test]
async fn test_unknown_category_filter_is_rejected() {
    let (client, _app_data, _media) = setup_test_app().await;

    let response = client
        .get("/api/ewaste-items")
        .query("category", &"spaceship")
        .send()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["fields"]["category"][0], "\"spaceship\" is not a valid choice.");
}

#[tokio::test]
async fn test_create_item_with_image_upload() {
    let (client, _app_data, _media) = setup_test_app().await;
    let owner_id = create_owner(&client, "asha@example.com").await;

    let response = client
        .post("/api/ewaste-items")
        .multipart(item_form(owner_id).field(png(2048)))
        .send()
        .await;
    response.assert_status(StatusCode::CREATED);

    let item = body_json(response).await;
    assert_eq!(item["owner"], owner_id);
    assert_eq!(item["owner_name"], "Asha");
    assert_eq!(item["category"], "mobile");
    assert!(item["document"].is_null());
    let image = item["image"].as_str().unwrap().to_string();
    assert!(image.starts_with("/media/ewaste_images/"));
    assert!(image.ends_with("_phone.png"));

    let stored = client.get(&image).send().await;
    stored.assert_status_is_ok();
    stored.assert_bytes(vec![7u8; 2048]).await;
}

#[tokio::test]
async fn test_invalid_uploads_and_missing_fields_reported_together() {
    let (client, _app_data, media) = setup_test_app().await;
    let owner_id = create_owner(&client, "asha@example.com").await;

    let form = TestForm::new()
        .text("name", "Old phone")
        .text("category", "spaceship")
        .text("owner", owner_id.to_string())
        .field(png(6 * MIB))
        .field(
            TestFormField::bytes(b"notes".to_vec())
                .name("document")
                .filename("notes.txt")
                .content_type("text/plain"),
        );

    let response = client.post("/api/ewaste-items").multipart(form).send().await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let fields = &body_json(response).await["fields"];
    assert_eq!(fields["image"], json!(["Image file size cannot exceed 5MB."]));
    assert_eq!(fields["document"], json!(["File must be a PDF or Word document."]));
    assert_eq!(fields["category"], json!(["\"spaceship\" is not a valid choice."]));
    assert_eq!(fields["condition"], json!(["This field is required."]));

    // nothing is written when validation fails
    let images = media.path().join("ewaste_images");
    assert!(!images.exists() || std::fs::read_dir(&images).unwrap().next().is_none());
}

#[tokio::test]
async fn test_update_without_upload_keeps_stored_image() {
    let (client, _app_data, _media) = setup_test_app().await;
    let owner_id = create_owner(&client, "asha@example.com").await;

    let created = body_json(
        client
            .post("/api/ewaste-items")
            .multipart(item_form(owner_id).field(png(512)))
            .send()
            .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = client
        .patch(format!("/api/ewaste-items/{}", id))
        .multipart(TestForm::new().text("condition", "damaged"))
        .send()
        .await;
    response.assert_status_is_ok();
    let patched = body_json(response).await;
    assert_eq!(patched["condition"], "damaged");
    assert_eq!(patched["name"], "Old phone");
    assert_eq!(patched["image"], created["image"]);

    let response = client
        .put(format!("/api/ewaste-items/{}", id))
        .multipart(
            TestForm::new()
                .text("name", "Cracked phone")
                .text("category", "mobile")
                .text("condition", "damaged")
                .text("owner", owner_id.to_string()),
        )
        .send()
        .await;
    response.assert_status_is_ok();
    let replaced = body_json(response).await;
    assert_eq!(replaced["name"], "Cracked phone");
    assert_eq!(replaced["image"], created["image"]);
}

#[tokio::test]
async fn test_declared_body_over_upload_limit_is_refused() {
    let (client, _app_data, _media) = setup_test_app().await;

    let response = client
        .post("/api/ewaste-items")
        .header("content-length", 64 * MIB)
        .multipart(TestForm::new().text("name", "Old phone"))
        .send()
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}
