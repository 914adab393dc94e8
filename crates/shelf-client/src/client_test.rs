use super::*;

#[test]
fn parse_endpoint_accepts_https_url() {
    let url = ProductsClient::parse_endpoint("https://api.escuelajs.co/api/v1/products").unwrap();
    assert_eq!(url.as_str(), "https://api.escuelajs.co/api/v1/products");
}

#[test]
fn parse_endpoint_trims_whitespace() {
    let url = ProductsClient::parse_endpoint("  http://localhost:8080/products \n").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/products");
}

#[test]
fn parse_endpoint_rejects_relative_url() {
    let err = ProductsClient::parse_endpoint("api/v1/products").unwrap_err();
    assert!(
        matches!(err, ClientError::InvalidEndpoint { .. }),
        "expected InvalidEndpoint, got: {err:?}"
    );
}

#[test]
fn parse_endpoint_rejects_non_http_scheme() {
    let err = ProductsClient::parse_endpoint("ftp://example.com/products").unwrap_err();
    assert!(
        matches!(err, ClientError::InvalidEndpoint { ref reason, .. } if reason.contains("ftp")),
        "expected InvalidEndpoint mentioning the scheme, got: {err:?}"
    );
}

#[test]
fn new_exposes_endpoint() {
    let client = ProductsClient::new("https://example.com/products", 5, "shelf-test/0.1", 0, 0)
        .expect("client should build");
    assert_eq!(client.endpoint(), "https://example.com/products");
}
