//! JSON formatting for exported files.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Serializer;

/// Compact JSON with a space after every `,` and `:`.
///
/// Produces `{"Statement": "I feel sad", "Category": "Sadness"}`, the layout
/// downstream consumers of the exported files already expect. In ASCII mode
/// every non-ASCII character is written as a `\uXXXX` escape (a surrogate
/// pair above U+FFFF), so the files load under any page encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter {
    ascii: bool,
}

impl SpacedFormatter {
    /// Keep non-ASCII text as raw UTF-8.
    pub fn new() -> Self {
        Self { ascii: false }
    }

    /// Escape every non-ASCII character.
    pub fn ascii() -> Self {
        Self { ascii: true }
    }
}

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if !self.ascii || fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize `value` into `writer` with the given formatter.
pub fn write_formatted_json<W, T>(
    writer: W,
    formatter: SpacedFormatter,
    value: &T,
) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)
}

/// Serialize `value` into `writer` as pure ASCII, for exported files.
pub fn write_ascii_json<W, T>(writer: W, value: &T) -> serde_json::Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    write_formatted_json(writer, SpacedFormatter::ascii(), value)
}

/// Serialize `value` to a string, keeping non-ASCII text readable.
pub fn to_spaced_json<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::new();
    write_formatted_json(&mut buffer, SpacedFormatter::new(), value)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
