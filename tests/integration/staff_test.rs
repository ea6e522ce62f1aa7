//! Integration tests for staff lookups and removal.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_list_staff_is_public_and_hides_hashes() {
    let app = TestApp::new();
    app.seed_staff("a@bikes.shop", "pw-a", None).await;
    app.seed_staff("b@bikes.shop", "pw-b", Some(1)).await;

    let response = app.request("GET", "/api/staffs", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let staff = response.body["data"].as_array().unwrap();
    assert_eq!(staff.len(), 2);
    assert_eq!(staff[0]["email"], "a@bikes.shop");
    assert_eq!(staff[1]["managerId"], 1);
    assert!(!response.body.to_string().contains("argon2"));
}

#[tokio::test]
async fn test_get_staff_not_found() {
    let app = TestApp::new();
    let token = app.operator_token();

    let response = app.request("GET", "/api/staffs/99", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Staff member not found.");
}

#[tokio::test]
async fn test_get_staff_rejects_non_numeric_id() {
    let app = TestApp::new();
    let token = app.operator_token();

    let response = app
        .request("GET", "/api/staffs/abc", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_staff_requires_token() {
    let app = TestApp::new();
    app.seed_staff("a@bikes.shop", "pw-a", None).await;

    let response = app.request("GET", "/api/staffs/1", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_manager_details() {
    let app = TestApp::new();
    let token = app.operator_token();
    let manager = app.seed_staff("boss@bikes.shop", "pw", None).await;
    let report = app
        .seed_staff("crew@bikes.shop", "pw", Some(manager.staff_id.get()))
        .await;
    let orphan = app.seed_staff("solo@bikes.shop", "pw", None).await;

    let found = app
        .request(
            "GET",
            &format!("/api/staffs/managerdetails/{}", report.staff_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["data"]["email"], "boss@bikes.shop");

    let none = app
        .request(
            "GET",
            &format!("/api/staffs/managerdetails/{}", orphan.staff_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(none.status, StatusCode::NOT_FOUND);
    assert_eq!(
        none.body["message"],
        "This staff member does not have a manager."
    );
}

#[tokio::test]
async fn test_delete_staff_leaves_dangling_manager_reference() {
    let app = TestApp::new();
    let token = app.operator_token();
    let manager = app.seed_staff("boss@bikes.shop", "pw", None).await;
    let report = app
        .seed_staff("crew@bikes.shop", "pw", Some(manager.staff_id.get()))
        .await;

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/staffs/{}", manager.staff_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app
        .request(
            "DELETE",
            &format!("/api/staffs/{}", manager.staff_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let lookup = app
        .request(
            "GET",
            &format!("/api/staffs/managerdetails/{}", report.staff_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(lookup.status, StatusCode::NOT_FOUND);
    assert_eq!(lookup.body["message"], "Manager details not found.");
}
