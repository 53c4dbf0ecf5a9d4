//! One real TCP round trip against a bound server.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;

use customer_profile::{CustomerStore, Server, api};

async fn send(addr: SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn serves_get_and_patch_over_http1_then_shuts_down() {
    let server = Server::bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let addr = server.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let app = api::routes(Arc::new(CustomerStore::seeded()));
    let running = tokio::spawn(server.serve_with_shutdown(app, async move {
        let _ = stopped.await;
    }));

    let res = send(addr, "GET /customers/2 HTTP/1.1\r\nhost: test\r\nconnection: close\r\n\r\n").await;
    assert!(res.starts_with("HTTP/1.1 200 OK\r\n"), "{res}");
    assert!(res.to_lowercase().contains("content-type: application/json"));
    assert!(res.to_lowercase().contains("access-control-allow-origin: *"));
    assert!(res.contains("\"first_name\": \"Alexander\""));

    let body = r#"{"email":"alexander@example.org"}"#;
    let req = format!(
        "PATCH /customers/2 HTTP/1.1\r\nhost: test\r\ncontent-type: application/json\r\n\
         content-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    );
    let res = send(addr, &req).await;
    assert!(res.starts_with("HTTP/1.1 200 OK\r\n"), "{res}");
    assert!(res.contains("\"email\": \"alexander@example.org\""));

    let res = send(addr, "GET /nope HTTP/1.1\r\nhost: test\r\nconnection: close\r\n\r\n").await;
    assert!(res.starts_with("HTTP/1.1 404 Not Found\r\n"), "{res}");

    stop.send(()).unwrap();
    running.await.unwrap().unwrap();
}
