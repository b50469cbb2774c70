use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// A mock HTTP server driven by its own runtime, so blocking clients can call
/// it from the plain test thread.
pub struct Stub {
    // Declared first so it is dropped (and verified) before the runtime.
    pub server: MockServer,
    rt: Runtime,
}

impl Stub {
    pub fn start() -> Self {
        let rt = Runtime::new().expect("tokio runtime");
        let server = rt.block_on(MockServer::start());
        Self { server, rt }
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }
}
