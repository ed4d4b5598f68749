//! JSON rendering compatible with Slack's export files
//!
//! Slack exports are 4-space indented and escape every `/` as `\/`, while `<`, `>` and `&`
//! stay literal. The line and paragraph separators U+2028 and U+2029 are written as
//! `\u2028` and `\u2029`. `serde_json` never escapes any of these, so the formatter does.
//! Escaping happens on string fragments, so already-escaped content such as a literal
//! backslash is never touched.

use std::io;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::{Formatter, PrettyFormatter};

const INDENT: &[u8] = b"    ";

/// Serialize `value` as indented JSON with Slack's escaping rules
///
/// # Examples
///
/// ```
/// use slack_dump::export::marshal_indent;
///
/// let bytes = marshal_indent(&vec!["a/b <c> & d"])?;
/// assert_eq!(String::from_utf8(bytes)?, "[\n    \"a\\/b <c> & d\"\n]");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn marshal_indent<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SlackFormatter::new());
    value.serialize(&mut serializer).context("Failed to serialize export record")?;
    Ok(buf)
}

struct SlackFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl SlackFormatter<'_> {
    fn new() -> Self {
        Self { pretty: PrettyFormatter::with_indent(INDENT) }
    }
}

impl Formatter for SlackFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            let escaped: &[u8] = match ch {
                '/' => b"\\/",
                '\u{2028}' => b"\\u2028",
                '\u{2029}' => b"\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..index].as_bytes())?;
            writer.write_all(escaped)?;
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.pretty.end_object_value(writer)
    }
}
