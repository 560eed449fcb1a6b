//! Bounds-checked byte cursor shared by the grammar matchers.
//!
//! The matchers receive borrowed slices at arbitrary start offsets, so
//! there is no owned, sentinel-terminated buffer to lean on; every read is
//! an explicit bounds check instead. Literal runs delegate the delimiter
//! search to memchr.

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when a run has more stop
/// bytes than `memchr3` supports (at most 3 needles).
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Byte cursor over a borrowed slice.
///
/// Tracks only a position; the grammar modules own all token semantics.
/// Positions never move backwards and never pass `src.len()`.
pub(crate) struct Scan<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> Scan<'a> {
    /// Cursor positioned at `start`.
    pub(crate) fn new(src: &'a [u8], start: usize) -> Self {
        debug_assert!(start <= src.len(), "start {start} past end {}", src.len());
        Self { src, pos: start }
    }

    /// Byte at the current position, or `None` past the end.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Byte one position ahead of current.
    #[inline]
    pub(crate) fn peek(&self) -> Option<u8> {
        self.src.get(self.pos + 1).copied()
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Stops at the end of the slice for any predicate.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.src.get(self.pos).copied().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Advance until `needle` is found or the end of the slice.
    ///
    /// The cursor lands on the needle, or at `src.len()` if absent.
    pub(crate) fn eat_until(&mut self, needle: u8) {
        match memchr::memchr(needle, &self.src[self.pos..]) {
            Some(off) => self.pos += off,
            None => self.pos = self.src.len(),
        }
    }

    /// Advance until any of four stop bytes or the end of the slice.
    ///
    /// memchr3 covers the first three needles, a secondary memchr covers the
    /// fourth, and the earlier hit wins.
    pub(crate) fn eat_until4(&mut self, a: u8, b: u8, c: u8, d: u8) {
        let rest = &self.src[self.pos..];
        let primary = memchr::memchr3(a, b, c, rest);
        let secondary = memchr::memchr(d, rest);
        match earliest_of(primary, secondary) {
            Some(off) => self.pos += off,
            None => self.pos = self.src.len(),
        }
    }
}
