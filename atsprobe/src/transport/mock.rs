// atsprobe/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Feature-request code handed out by the mock. Arbitrary but stable so
/// tests can assert the discovery call used it.
pub const MOCK_FEATURE_REQUEST_CODE: u32 = 0x0042_0D48;

/// Mock transport for unit tests. It records control-transfer calls and
/// returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every control transfer performed: (control code, request payload)
    pub calls: Vec<(u32, Vec<u8>)>,
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of transmit_control calls that should fail with
    /// Timeout before queued responses are served again
    pub failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response; responses are served in FIFO order.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Set how many subsequent transfers should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    /// Control code used by the most recent transfer, if any.
    pub fn last_code(&self) -> Option<u32> {
        self.calls.last().map(|(code, _)| *code)
    }
}

impl Transport for MockTransport {
    fn transmit_control(&mut self, code: u32, request: &[u8]) -> Result<Vec<u8>> {
        self.calls.push((code, request.to_vec()));

        if self.failures > 0 {
            self.failures -= 1;
            return Err(Error::Timeout);
        }

        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn feature_request_code(&self) -> u32 {
        MOCK_FEATURE_REQUEST_CODE
    }

    fn name(&self) -> &str {
        "mock"
    }
}
