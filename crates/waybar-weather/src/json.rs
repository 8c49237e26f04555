//! JSON rendering with `", "` and `": "` separators.
//!
//! serde_json's compact output (`{"a":"b","c":"d"}`) is valid for waybar, but
//! the line this tool has always printed is the spaced single-line form
//! (`{"a": "b", "c": "d"}`). Non-ASCII characters are written as raw UTF-8.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// Single-line formatter that puts a space after every object `,` and `:`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
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
}

fn to_spaced_vec<T>(value: &T) -> serde_json::Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Serialize `value` into a `String` using [`SpacedFormatter`].
pub fn to_spaced_string<T>(value: &T) -> serde_json::Result<String>
where
    T: ?Sized + Serialize,
{
    let buf = to_spaced_vec(value)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}
