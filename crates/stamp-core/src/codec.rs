//! JSON codec
//!
//! Uses `serde_json` for decoding and for the 2-space indented rendering.
//! Object key order and number text survive a decode/encode cycle.

use crate::document::Document;
use crate::error::{LoadError, StoreError};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Value;
use std::io::{self, Write};

/// JSON text codec for stamped documents
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    ensure_ascii: bool,
}

impl JsonCodec {
    /// Create new codec that writes UTF-8 text verbatim
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape every non-ASCII character as `\uXXXX` when encoding
    #[inline]
    #[must_use]
    pub fn with_ensure_ascii(mut self, ensure_ascii: bool) -> Self {
        self.ensure_ascii = ensure_ascii;
        self
    }

    /// Decode JSON text into a value
    ///
    /// # Errors
    /// Returns `LoadError::Syntax` if the text is not valid JSON
    pub fn decode(&self, content: &str) -> Result<Value, LoadError> {
        serde_json::from_str(content).map_err(|e| LoadError::syntax(&e))
    }

    /// Render a document with 2-space indentation and no trailing newline
    ///
    /// # Errors
    /// Returns `StoreError::Encode` if serialization fails
    pub fn encode(&self, document: &Document) -> Result<String, StoreError> {
        if !self.ensure_ascii {
            return Ok(serde_json::to_string_pretty(document)?);
        }

        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter::default());
        document.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(|e| {
            StoreError::Encode(<serde_json::Error as serde::ser::Error>::custom(e))
        })
    }
}

/// Pretty formatter that escapes non-ASCII string content
#[derive(Default)]
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        for ch in fragment.chars() {
            if ch.is_ascii() {
                let mut utf8 = [0u8; 4];
                writer.write_all(ch.encode_utf8(&mut utf8).as_bytes())?;
            } else {
                let mut units = [0u16; 2];
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
