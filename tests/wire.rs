//! Raw-socket tests of the server's wire behaviour.

use bare_http::Response;

mod common;

#[tokio::test]
async fn response_bytes_match_wire_format() {
    let server = common::start_server().await;
    let bytes = common::raw_exchange(
        server.local_addr(),
        b"GET /nowhere HTTP/1.1\r\nHost: x\r\nAccept: application/json\r\n\r\n",
    )
    .await;
    server.stop().await.unwrap();

    assert_eq!(bytes, b"HTTP/1.1 404 OK\r\nContent-Length: 0\r\n\r\n");
}

#[tokio::test]
async fn malformed_request_line_is_bad_request() {
    let server = common::start_server().await;
    let bytes = common::raw_exchange(server.local_addr(), b"GARBAGE\r\n\r\n").await;
    server.stop().await.unwrap();

    let response = Response::decode(&bytes);
    assert_eq!(response.status, "400");
    assert!(response.data.is_empty());
}

#[tokio::test]
async fn missing_accept_encoding_means_identity() {
    let server = common::start_server().await;
    let request = format!(
        "GET /greet/{} HTTP/1.1\r\nhost: x\r\naccept: application/xml\r\n\r\n",
        common::ID
    );
    let bytes = common::raw_exchange(server.local_addr(), request.as_bytes()).await;
    server.stop().await.unwrap();

    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("HTTP/1.1 200 OK\r\nContent-Type: application/xml\r\nContent-Length: "));
    assert!(!text.contains("Content-Encoding"));
    assert!(text.ends_with("</greeting>"));
}

#[tokio::test]
async fn server_survives_a_peer_that_hangs_up() {
    let server = common::start_server().await;
    let addr = server.local_addr();

    // Connect and close without sending anything.
    drop(tokio::net::TcpStream::connect(addr).await.unwrap());

    let bytes = common::raw_exchange(addr, b"GET / HTTP/1.1\r\nHost: x\r\n\r\n").await;
    server.stop().await.unwrap();
    assert_eq!(Response::decode(&bytes).status, "200");
}

#[tokio::test]
async fn invalid_escape_in_target_is_bad_request() {
    let server = common::start_server().await;
    let request = format!(
        "GET /greet/{}%zz HTTP/1.1\r\nHost: x\r\nAccept: application/json\r\n\r\n",
        common::ID
    );
    let bytes = common::raw_exchange(server.local_addr(), request.as_bytes()).await;
    server.stop().await.unwrap();

    assert_eq!(bytes, b"HTTP/1.1 400 OK\r\nContent-Length: 0\r\n\r\n");
}
