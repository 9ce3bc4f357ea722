//! Integration tests for the staff console: role gate, barista workflow,
//! admin dashboard.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The admin server running (cargo run -p copper-kettle-admin)
//! - The test staff accounts from the crate docs in `src/lib.rs`

use copper_kettle_integration_tests::{
    admin_base_url, login_staff, session_client, storefront_base_url,
};

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn anonymous_visitors_land_on_login() {
    let client = session_client();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/admin"))
        .send()
        .await
        .expect("Failed to reach admin console");

    assert_eq!(resp.url().path(), "/auth/login");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn wrong_password_is_rejected_on_the_login_page() {
    let client = session_client();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[("username", "test-admin"), ("password", "definitely-wrong")])
        .send()
        .await
        .expect("Failed to post login form");

    assert_eq!(resp.status(), 200);
    let body = resp.text().await.expect("Failed to read login body");
    assert!(body.contains("Invalid username or password"));
}

#[tokio::test]
#[ignore = "Requires running admin server and test staff accounts"]
async fn barista_cannot_open_the_admin_console() {
    let client = session_client();
    let base_url = admin_base_url();

    login_staff(&client, "barista").await;

    let resp = client
        .get(format!("{base_url}/admin"))
        .send()
        .await
        .expect("Failed to request admin console");

    assert_eq!(resp.status(), 403);
}

#[tokio::test]
#[ignore = "Requires running admin server and test staff accounts"]
async fn admin_cannot_open_the_barista_board() {
    let client = session_client();
    let base_url = admin_base_url();

    login_staff(&client, "admin").await;

    let resp = client
        .get(format!("{base_url}/barista"))
        .send()
        .await
        .expect("Failed to request barista board");

    assert_eq!(resp.status(), 403);
}

#[tokio::test]
#[ignore = "Requires running admin server and test staff accounts"]
async fn status_update_for_unknown_order_is_a_quiet_noop() {
    let client = session_client();
    let base_url = admin_base_url();

    login_staff(&client, "barista").await;

    let resp = client
        .post(format!("{base_url}/barista/orders/999999/status"))
        .form(&[("status", "ready")])
        .send()
        .await
        .expect("Failed to post status update");

    // No matching row is not an error; the board just reloads
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.url().path(), "/barista");
}

#[tokio::test]
#[ignore = "Requires running storefront and admin servers with test staff accounts"]
async fn status_overwrite_shows_up_on_the_next_board_load() {
    // Place an order through the storefront
    let customer = session_client();
    let storefront = storefront_base_url();
    customer
        .post(format!("{storefront}/cart/add"))
        .form(&[("item_id", "1"), ("quantity", "1")])
        .send()
        .await
        .expect("Failed to add to cart");
    let receipt = customer
        .post(format!("{storefront}/checkout"))
        .form(&[("customer_name", "Board Test")])
        .send()
        .await
        .expect("Failed to checkout")
        .text()
        .await
        .expect("Failed to read receipt");

    let order_id = receipt
        .split('#')
        .nth(1)
        .and_then(|rest| {
            rest.chars()
                .take_while(char::is_ascii_digit)
                .collect::<String>()
                .parse::<i64>()
                .ok()
        })
        .expect("Receipt did not contain an order number");

    // Jump the order straight to `ready` - no transition validation
    let barista = session_client();
    let base_url = admin_base_url();
    login_staff(&barista, "barista").await;

    barista
        .post(format!("{base_url}/barista/orders/{order_id}/status"))
        .form(&[("status", "ready")])
        .send()
        .await
        .expect("Failed to post status update");

    let board = barista
        .get(format!("{base_url}/barista"))
        .send()
        .await
        .expect("Failed to load board")
        .text()
        .await
        .expect("Failed to read board");

    assert!(board.contains(&format!("<strong>#{order_id}</strong>")));
    assert!(board.contains("status-ready"));
}

#[tokio::test]
#[ignore = "Requires running admin server and test staff accounts"]
async fn invalid_status_value_is_a_bad_request() {
    let client = session_client();
    let base_url = admin_base_url();

    login_staff(&client, "barista").await;

    let resp = client
        .post(format!("{base_url}/barista/orders/1/status"))
        .form(&[("status", "cancelled")])
        .send()
        .await
        .expect("Failed to post status update");

    assert_eq!(resp.status(), 400);
}

#[tokio::test]
#[ignore = "Requires running admin server and test staff accounts"]
async fn dashboard_search_filters_items() {
    let client = session_client();
    let base_url = admin_base_url();

    login_staff(&client, "admin").await;

    let resp = client
        .get(format!("{base_url}/admin?search=latte"))
        .send()
        .await
        .expect("Failed to load dashboard");
    assert_eq!(resp.status(), 200);

    let body = resp.text().await.expect("Failed to read dashboard body");
    assert!(body.contains("Latte"));
    assert!(!body.contains("Croissant"));
}
