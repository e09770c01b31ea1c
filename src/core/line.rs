/// Non-blocking line assembly for the inbound text channel
use std::time::{Duration, Instant};

/// Longest partial line kept; older bytes are dropped beyond this.
pub const MAX_LINE: usize = 64;

/// Collects inbound bytes until a newline arrives or the partial line goes idle.
///
/// An idle partial line is handed out as complete, the way a serial
/// `readStringUntil` returns what it has once its read timeout expires.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: Vec<u8>,
    last_byte: Option<Instant>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one byte. Returns the finished line (without the newline) on `\n`.
    pub fn push(&mut self, byte: u8, now: Instant) -> Option<String> {
        if byte == b'\n' {
            return Some(self.take());
        }
        if self.buf.len() == MAX_LINE {
            self.buf.remove(0);
        }
        self.buf.push(byte);
        self.last_byte = Some(now);
        None
    }

    /// Hands out the partial line once nothing has arrived for longer than `idle`.
    pub fn flush_idle(&mut self, now: Instant, idle: Duration) -> Option<String> {
        let last = self.last_byte?;
        if now.saturating_duration_since(last) > idle {
            Some(self.take())
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.last_byte = None;
    }

    fn take(&mut self) -> String {
        let line = String::from_utf8_lossy(&self.buf).into_owned();
        self.clear();
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(buf: &mut LineBuffer, text: &str, now: Instant) -> Vec<String> {
        text.bytes().filter_map(|b| buf.push(b, now)).collect()
    }

    #[test]
    fn newline_completes_line() {
        let now = Instant::now();
        let mut buf = LineBuffer::new();
        assert_eq!(feed(&mut buf, "ab\ncd\n", now), vec!["ab", "cd"]);
        assert_eq!(buf.flush_idle(now + Duration::from_secs(5), Duration::ZERO), None);
    }

    #[test]
    fn carriage_return_is_kept_for_the_caller_to_trim() {
        let now = Instant::now();
        let mut buf = LineBuffer::new();
        assert_eq!(feed(&mut buf, "s\r\n", now), vec!["s\r"]);
    }

    #[test]
    fn idle_partial_line_is_flushed() {
        let t0 = Instant::now();
        let idle = Duration::from_millis(1000);
        let mut buf = LineBuffer::new();
        assert!(feed(&mut buf, "s", t0).is_empty());
        assert_eq!(buf.flush_idle(t0 + Duration::from_millis(999), idle), None);
        assert_eq!(buf.flush_idle(t0 + Duration::from_millis(1001), idle).as_deref(), Some("s"));
        assert_eq!(buf.flush_idle(t0 + Duration::from_secs(5), idle), None);
    }

    #[test]
    fn empty_buffer_never_flushes() {
        let mut buf = LineBuffer::new();
        let later = Instant::now() + Duration::from_secs(60);
        assert_eq!(buf.flush_idle(later, Duration::ZERO), None);
    }

    #[test]
    fn endless_stream_without_newline_stays_bounded() {
        let now = Instant::now();
        let mut buf = LineBuffer::new();
        let noise = "x".repeat(10_000);
        assert!(feed(&mut buf, &noise, now).is_empty());
        assert!(feed(&mut buf, "tail", now).is_empty());

        let line = buf.flush_idle(now + Duration::from_secs(2), Duration::from_secs(1)).unwrap();
        assert_eq!(line.len(), MAX_LINE);
        assert!(line.ends_with("xtail"));
    }
}
