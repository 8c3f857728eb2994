/// One raw read/write result: a contiguous block of register words together
/// with the inclusive address window it was requested for.
///
/// `address_to` is a field address, not a byte offset; the last field of the
/// window may extend past it by its own width, so `words` can legitimately be
/// longer than `address_to - address_from + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterWindow {
    pub address_from: u16,
    pub address_to: u16,
    pub words: Vec<u16>,
}

impl RegisterWindow {
    pub fn new(address_from: u16, address_to: u16, words: Vec<u16>) -> Self {
        Self {
            address_from,
            address_to,
            words,
        }
    }

    /// Whether a field starting at `address` belongs to this window.
    #[inline]
    pub fn covers(&self, address: u16) -> bool {
        self.address_from <= address && address <= self.address_to
    }
}

/// Resolved register range spanning two named fields, used to size a single
/// transport read or write request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterRange {
    pub address_from: u16,
    /// Address of the last field in the range (inclusive).
    pub address_to: u16,
    /// Number of words to request, including the last field's full width.
    pub count: u16,
}
