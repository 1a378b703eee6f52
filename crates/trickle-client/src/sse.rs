//! Incremental server-sent-events decoder.
//!
//! Most chat-completion APIs frame their streaming responses as SSE.
//! Provider implementations feed raw response chunks in and get complete
//! frames out, regardless of how the transport split the body.

/// A single decoded SSE frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseFrame {
    pub event: Option<String>,
    pub data: String,
}

/// Decoder that accumulates byte chunks and yields frames as they complete.
///
/// Buffers at the byte level so UTF-8 sequences split across chunk
/// boundaries survive intact; each completed frame is decoded lossily.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
    /// First buffer index not yet ruled out as a frame boundary, so repeated
    /// small pushes do not rescan the whole buffer.
    scan: usize,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk of response bytes, returning any frames it completed.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buf.extend_from_slice(chunk);

        let mut frames = Vec::new();
        loop {
            match frame_boundary(&self.buf, self.scan) {
                Some((end, sep_len)) => {
                    let text = String::from_utf8_lossy(&self.buf[..end]).into_owned();
                    self.buf.drain(..end + sep_len);
                    self.scan = 0;
                    if let Some(frame) = parse_frame(&text) {
                        frames.push(frame);
                    }
                }
                None => {
                    // A separator can straddle the chunk edge by up to three
                    // bytes, so those stay eligible for the next scan.
                    self.scan = self.buf.len().saturating_sub(3);
                    break;
                }
            }
        }
        frames
    }
}

/// Find the first blank line at or after `from` separating a complete frame
/// from the rest of the buffer. Returns (frame end, separator length).
fn frame_boundary(buf: &[u8], from: usize) -> Option<(usize, usize)> {
    for i in from..buf.len() {
        if buf[i..].starts_with(b"\r\n\r\n") {
            return Some((i, 4));
        }
        if buf[i..].starts_with(b"\n\n") {
            return Some((i, 2));
        }
    }
    None
}

/// Parse the lines of one frame. Frames with no `data` field are dropped,
/// matching how EventSource consumers treat them.
fn parse_frame(text: &str) -> Option<SseFrame> {
    let mut event = None;
    let mut data_lines = Vec::new();

    for line in text.lines() {
        if line.starts_with(':') {
            continue;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => event = Some(value.to_string()),
            "data" => data_lines.push(value.to_string()),
            // id and retry carry no content at this layer
            _ => {}
        }
    }

    if data_lines.is_empty() {
        return None;
    }

    Some(SseFrame {
        event,
        data: data_lines.join("\n"),
    })
}
