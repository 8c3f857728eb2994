use thiserror::Error;

pub type TransportResult<T, E = TransportError> = Result<T, E>;

/// Transport layer errors, surfaced unchanged to the polling orchestrator.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("read/write timeout")]
    Timeout,
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Raw register access the codec's callers plug a bus client into.
///
/// Implementations own device addressing, framing and link-level retry; the
/// codec only requires correctly ordered 16-bit words. Timeouts and
/// cancellation are enforced here, before decode/encode ever runs.
pub trait RegisterTransport {
    /// Read `count` consecutive registers starting at `address_from`.
    ///
    /// Callers wrap the words in a [`RegisterWindow`](crate::RegisterWindow)
    /// together with the field range the read was sized for, as produced by
    /// [`RegisterMap::range`](crate::RegisterMap::range), and hand it to
    /// decode.
    fn read(&mut self, address_from: u16, count: u16) -> TransportResult<Vec<u16>>;

    /// Write consecutive registers starting at `address_from`.
    fn write(&mut self, address_from: u16, words: &[u16]) -> TransportResult<()>;
}
