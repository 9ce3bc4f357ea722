//! Integration tests for Copper Kettle.
//!
//! # Running Tests
//!
//! The tests in `tests/` drive the real binaries over HTTP and are ignored
//! by default. To run them:
//!
//! ```bash
//! # 1. Database up, schema + sample data in place
//! cargo run -p copper-kettle-cli -- migrate
//! cargo run -p copper-kettle-cli -- seed
//! cargo run -p copper-kettle-cli -- staff create -u test-admin -p test-password -r admin
//! cargo run -p copper-kettle-cli -- staff create -u test-barista -p test-password -r barista
//!
//! # 2. Both servers running
//! cargo run -p copper-kettle-storefront &
//! cargo run -p copper-kettle-admin &
//!
//! # 3. Run the ignored tests
//! cargo test -p copper-kettle-integration-tests -- --ignored
//! ```
//!
//! # Environment
//!
//! - `STOREFRONT_BASE_URL` (default `http://localhost:3000`)
//! - `ADMIN_BASE_URL` (default `http://localhost:3001`)
//! - `CK_TEST_ADMIN_USER` / `CK_TEST_ADMIN_PASSWORD` (default
//!   `test-admin` / `test-password`)
//! - `CK_TEST_BARISTA_USER` / `CK_TEST_BARISTA_PASSWORD` (default
//!   `test-barista` / `test-password`)

#![cfg_attr(not(test), forbid(unsafe_code))]

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the staff console (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Test credentials for a staff role.
#[must_use]
pub fn staff_credentials(role: &str) -> (String, String) {
    let (user_var, pass_var, default_user) = match role {
        "admin" => ("CK_TEST_ADMIN_USER", "CK_TEST_ADMIN_PASSWORD", "test-admin"),
        _ => (
            "CK_TEST_BARISTA_USER",
            "CK_TEST_BARISTA_PASSWORD",
            "test-barista",
        ),
    };

    (
        std::env::var(user_var).unwrap_or_else(|_| default_user.to_string()),
        std::env::var(pass_var).unwrap_or_else(|_| "test-password".to_string()),
    )
}

/// A cookie-keeping HTTP client (sessions need it).
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Log a staff member into the console, leaving the session cookie on the
/// client.
///
/// # Panics
///
/// Panics if the login request fails outright.
pub async fn login_staff(client: &reqwest::Client, role: &str) {
    let (username, password) = staff_credentials(role);
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[("username", username.as_str()), ("password", password.as_str())])
        .send()
        .await
        .expect("Failed to post login form");

    assert!(
        resp.status().is_success(),
        "staff login failed with {}",
        resp.status()
    );
}
