//! Brace-matching JSON object decoder
//!
//! Gemini streams a top-level JSON array of objects with no framing at all:
//! no SSE envelope, no newline delimiters, and chunk boundaries that can
//! land in the middle of an object or even a string literal. This codec
//! recovers one balanced top-level object at a time by tracking `{`/`}`
//! nesting depth together with string/escape state, so braces inside
//! generated text cannot desynchronize the framing. Array punctuation
//! between objects (`[`, `,`, `]`, whitespace) is skipped.
//!
//! The scan state lives in the codec value and survives across reads, which
//! is what makes arbitrary split points safe.

use std::io;
use tokio_util::bytes::BytesMut;
use tokio_util::codec::Decoder;

/// Decoder yielding the source text of each balanced top-level JSON object
#[derive(Debug, Default)]
pub struct JsonObjectCodec {
    /// Byte offset scanning resumes from on the next call
    scanned: usize,
    /// Offset of the `{` that opened the object being accumulated
    start: Option<usize>,
    depth: u32,
    in_string: bool,
    escaped: bool,
}

impl JsonObjectCodec {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset_scan(&mut self) {
        self.scanned = 0;
        self.start = None;
        self.depth = 0;
        self.in_string = false;
        self.escaped = false;
    }
}

impl Decoder for JsonObjectCodec {
    type Item = String;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<String>, io::Error> {
        while self.scanned < buf.len() {
            let byte = buf[self.scanned];

            if self.in_string {
                if self.escaped {
                    self.escaped = false;
                } else if byte == b'\\' {
                    self.escaped = true;
                } else if byte == b'"' {
                    self.in_string = false;
                }
            } else {
                match byte {
                    b'"' if self.start.is_some() => self.in_string = true,
                    b'{' => {
                        if self.start.is_none() {
                            self.start = Some(self.scanned);
                        }
                        self.depth += 1;
                    }
                    b'}' => {
                        // A `}` outside any object would mean corrupt
                        // framing; depth 0 is unreachable here because
                        // scanning only enters an object via `{`.
                        self.depth = self.depth.saturating_sub(1);
                        if self.depth == 0 {
                            if let Some(start) = self.start {
                                let end = self.scanned + 1;
                                let frame = buf.split_to(end);
                                self.reset_scan();
                                let text = String::from_utf8_lossy(&frame[start..]).into_owned();
                                return Ok(Some(text));
                            }
                        }
                    }
                    // Array punctuation and whitespace between objects.
                    _ => {}
                }
            }
            self.scanned += 1;
        }
        Ok(None)
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<String>, io::Error> {
        if let Some(frame) = self.decode(buf)? {
            return Ok(Some(frame));
        }
        if self.start.is_some() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "truncated JSON object at end of stream",
            ));
        }
        // Whatever is left is closing array punctuation.
        buf.clear();
        self.reset_scan();
        Ok(None)
    }
}
