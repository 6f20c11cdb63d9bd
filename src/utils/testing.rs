use std::net::TcpListener;
use axum::Router;

// Serves `app` on an ephemeral localhost port and returns its base url.
pub(crate) async fn spawn_upstream(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("should bind fake upstream");
    let addr = listener.local_addr().expect("should have local addr");
    let server = axum::Server::from_tcp(listener)
        .expect("should serve fake upstream")
        .serve(app.into_make_service());
    tokio::spawn(async move {
        let _ = server.await;
    });
    format!("http://{}", addr)
}
