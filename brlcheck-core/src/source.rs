//! Event source backed by the `saphyr-parser` YAML parser.
//!
//! The walker only needs event kinds, scalar text and line numbers, so the
//! parser's events are narrowed down to [`brlcheck_common::Event`] here and
//! everything else (anchors, tags, scalar styles) is dropped.

use std::borrow::Cow;

use brlcheck_common::{Encoding, Event, MarkedEvent, Marker};
use saphyr_parser::{Event as YamlEvent, Parser};

use crate::SourceError;

const BOM: char = '\u{feff}';

/// Lazily parses `input` and yields one [`MarkedEvent`] per YAML event.
///
/// A leading byte order mark is skipped. Scanner failures are yielded as
/// [`SourceError`]; consumers are expected to stop at the first one.
pub fn yaml_events(input: &str) -> impl Iterator<Item = Result<MarkedEvent<'_>, SourceError>> + '_ {
    encoded_events(input, Encoding::Utf8)
}

/// Like [`yaml_events`], for text that was decoded from `encoding`. The
/// stream start event reports that encoding.
pub fn encoded_events(
    input: &str,
    encoding: Encoding,
) -> impl Iterator<Item = Result<MarkedEvent<'_>, SourceError>> + '_ {
    let input = input.strip_prefix(BOM).unwrap_or(input);
    Parser::new_from_str(input).filter_map(move |item| match item {
        Ok((event, span)) => {
            let mark = Marker::new(span.start.line(), span.start.col());
            narrow(event, encoding).map(|event| Ok(MarkedEvent::new(event, mark)))
        }
        Err(err) => {
            let mark = Marker::new(err.marker().line(), err.marker().col());
            Some(Err(SourceError::new(mark, err.info())))
        }
    })
}

/// Decodes a raw document. A UTF-16 byte order mark selects UTF-16 of that
/// byte order; anything else must be UTF-8, with or without a mark.
pub fn decode(bytes: &[u8]) -> Result<(Cow<'_, str>, Encoding), SourceError> {
    match bytes {
        [0xFF, 0xFE, rest @ ..] => {
            decode_utf16(rest, u16::from_le_bytes).map(|text| (text.into(), Encoding::Utf16Le))
        }
        [0xFE, 0xFF, rest @ ..] => {
            decode_utf16(rest, u16::from_be_bytes).map(|text| (text.into(), Encoding::Utf16Be))
        }
        [0xEF, 0xBB, 0xBF, rest @ ..] => decode_utf8(rest),
        _ => decode_utf8(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<(Cow<'_, str>, Encoding), SourceError> {
    match simdutf8::compat::from_utf8(bytes) {
        Ok(text) => Ok((Cow::Borrowed(text), Encoding::Utf8)),
        Err(err) => {
            let valid = &bytes[..err.valid_up_to()];
            let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
            let col = valid.iter().rev().take_while(|&&b| b != b'\n').count();
            Err(SourceError::new(
                Marker::new(line, col),
                "invalid UTF-8 in input",
            ))
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, SourceError> {
    if bytes.len() % 2 != 0 {
        return Err(SourceError::new(
            Marker::new(1, 0),
            "UTF-16 input has an odd number of bytes",
        ));
    }
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    let mut text = String::with_capacity(bytes.len() / 2);
    for c in char::decode_utf16(units) {
        match c {
            Ok(c) => text.push(c),
            Err(err) => {
                let line = text.matches('\n').count() + 1;
                let col = text.chars().rev().take_while(|&c| c != '\n').count();
                return Err(SourceError::new(
                    Marker::new(line, col),
                    format!("unpaired surrogate {:#06x} in UTF-16 input", err.unpaired_surrogate()),
                ));
            }
        }
    }
    Ok(text)
}

fn narrow(event: YamlEvent<'_>, encoding: Encoding) -> Option<Event<'_>> {
    let event = match event {
        YamlEvent::StreamStart { .. } => Event::StreamStart(encoding),
        YamlEvent::StreamEnd { .. } => Event::StreamEnd,
        YamlEvent::DocumentStart { .. } => Event::DocumentStart,
        YamlEvent::DocumentEnd { .. } => Event::DocumentEnd,
        YamlEvent::Alias { .. } => Event::Alias,
        YamlEvent::Scalar(value, ..) => Event::Scalar(value.into()),
        YamlEvent::SequenceStart { .. } => Event::SequenceStart,
        YamlEvent::SequenceEnd { .. } => Event::SequenceEnd,
        YamlEvent::MappingStart { .. } => Event::MappingStart,
        YamlEvent::MappingEnd { .. } => Event::MappingEnd,
        // `Nothing` is parser-internal and never reaches the walker.
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::{decode, encoded_events, yaml_events};
    use brlcheck_common::{Encoding, Event, EventKind};

    fn kinds(input: &str) -> Vec<EventKind> {
        yaml_events(input)
            .map(|ev| ev.expect("valid yaml").kind())
            .collect()
    }

    #[test]
    fn flow_sequence_events() {
        use EventKind::*;
        assert_eq!(
            kinds("[a, b]"),
            [
                StreamStart,
                DocumentStart,
                SequenceStart,
                Scalar,
                Scalar,
                SequenceEnd,
                DocumentEnd,
                StreamEnd
            ]
        );
    }

    #[test]
    fn scalars_keep_text_and_line() {
        let events: Vec<_> = yaml_events("tables:\n  - en-us-g2.ctb\n")
            .collect::<Result<_, _>>()
            .expect("valid yaml");
        let table = events
            .iter()
            .find(|ev| ev.event == Event::scalar("en-us-g2.ctb"))
            .expect("table scalar");
        assert_eq!(table.line(), 2);
    }

    #[test]
    fn scanner_error_is_reported() {
        let last = yaml_events("tests: [[a, b]\n").find_map(Result::err);
        assert!(last.is_some());
    }

    #[test]
    fn leading_byte_order_mark_is_skipped() {
        let events: Vec<_> = yaml_events("\u{feff}tables: [a]\n")
            .collect::<Result<_, _>>()
            .expect("valid yaml");
        let key = events.iter().find(|ev| ev.kind() == EventKind::Scalar);
        assert_eq!(key.map(|ev| &ev.event), Some(&Event::scalar("tables")));
        assert_eq!(events[0].event, Event::StreamStart(Encoding::Utf8));
    }

    #[test]
    fn decodes_by_byte_order_mark() {
        let (text, encoding) = decode(b"\xEF\xBB\xBFtables: []").expect("utf-8");
        assert_eq!((&*text, encoding), ("tables: []", Encoding::Utf8));

        let le: Vec<u8> = [0xFF, 0xFE]
            .into_iter()
            .chain("a: ⠁".encode_utf16().flat_map(u16::to_le_bytes))
            .collect();
        let (text, encoding) = decode(&le).expect("utf-16le");
        assert_eq!((&*text, encoding), ("a: ⠁", Encoding::Utf16Le));

        let be: Vec<u8> = [0xFE, 0xFF]
            .into_iter()
            .chain("a: b".encode_utf16().flat_map(u16::to_be_bytes))
            .collect();
        let (text, encoding) = decode(&be).expect("utf-16be");
        assert_eq!((&*text, encoding), ("a: b", Encoding::Utf16Be));
    }

    #[test]
    fn stream_start_reports_decoded_encoding() {
        let first = encoded_events("a: b", Encoding::Utf16Be).next();
        let first = first.expect("stream start").expect("valid yaml");
        assert_eq!(first.event, Event::StreamStart(Encoding::Utf16Be));
    }

    #[test]
    fn undecodable_input_points_at_line() {
        let err = decode(b"tables: [a]\ntests: [\xFF]").expect_err("invalid utf-8");
        assert_eq!(err.mark.line, 2);
        assert_eq!(err.mark.col, 8);

        let err = decode(&[0xFF, 0xFE, b'a']).expect_err("odd length");
        assert_eq!(err.mark.line, 1);

        let err = decode(&[0xFF, 0xFE, 0x00, 0xD8]).expect_err("lone surrogate");
        assert!(err.info.contains("0xd800"), "{}", err.info);
    }
}
