use rstest::rstest;
use voicectx_core::error::Error;
use voicectx_core::text::{Document, PositionEncoding};

use crate::common::test_utils::read_document_fixture;

#[rstest]
#[case::utf8(PositionEncoding::Utf8, 26, 13, 5)]
#[case::utf16(PositionEncoding::Utf16, 22, 11, 3)]
#[case::utf32(PositionEncoding::Utf32, 21, 11, 2)]
fn test_unicode_offsets_per_encoding(
    #[case] encoding: PositionEncoding,
    #[case] len: usize,
    #[case] second_line_start: usize,
    #[case] word_column: usize,
) {
    let document = Document::with_encoding(read_document_fixture("unicode.txt"), encoding);

    assert_eq!(document.len(), len);
    assert_eq!(document.line_count(), 3);

    let word = document.offset_at(1, word_column).unwrap();
    assert_eq!(word, second_line_start + word_column);
    assert_eq!(document.text_between(word, word + 7).unwrap(), "dictate");

    let position = document.position_at(word).unwrap();
    assert_eq!((position.line, position.column), (1, word_column));
}

#[rstest]
#[case(PositionEncoding::Utf8)]
#[case(PositionEncoding::Utf16)]
#[case(PositionEncoding::Utf32)]
fn test_offset_round_trip(#[case] encoding: PositionEncoding) {
    let document = Document::with_encoding(read_document_fixture("unicode.txt"), encoding);

    for offset in 0..=document.len() {
        let position = document.position_at(offset).unwrap();
        assert_eq!(position.offset, offset);
        assert_eq!(
            document.offset_at(position.line, position.column).unwrap(),
            offset
        );
    }
}

#[test]
fn test_crlf_fixture_snaps_inside_terminator() {
    let document = Document::new(read_document_fixture("crlf.txt"));

    assert_eq!(document.len(), 13);
    assert_eq!(document.line_count(), 3);
    assert_eq!(document.line_text(0).unwrap(), "alpha");
    assert_eq!(document.line_text(1).unwrap(), "beta");
    assert_eq!(document.line_text(2).unwrap(), "");

    let inside = document.position_at(6).unwrap();
    assert_eq!((inside.line, inside.column, inside.offset), (0, 5, 5));

    let next = document.position_at(7).unwrap();
    assert_eq!((next.line, next.column), (1, 0));
}

#[test]
fn test_line_text_never_contains_terminators() {
    for name in ["crlf.txt", "unicode.txt", "sample.py"] {
        let document = Document::new(read_document_fixture(name));
        for line in 0..document.line_count() {
            let text = document.line_text(line).unwrap();
            assert!(!text.contains('\n') && !text.contains('\r'), "{name}:{line}");
        }
    }
}

#[test]
fn test_window_and_bounds_on_fixture() {
    let document = Document::new(read_document_fixture("sample.py"));
    let bounds = document.bounds();
    assert_eq!(bounds.start.offset, 0);
    assert_eq!(bounds.end.offset, 77);
    assert_eq!(bounds.end.line, 4);

    let window = document.clamped_window(3, 10);
    assert_eq!((window.start.offset, window.end.offset), (0, 13));

    let window = document.clamped_window(500, 10);
    assert_eq!((window.start.offset, window.end.offset), (67, 77));
}

#[test]
fn test_out_of_bounds_errors() {
    let document = Document::new(read_document_fixture("crlf.txt"));

    assert!(matches!(
        document.position_at(14),
        Err(Error::OutOfBounds { max: 13, .. })
    ));
    assert!(matches!(
        document.line_text(3),
        Err(Error::OutOfBounds { max: 2, .. })
    ));
    assert!(matches!(
        document.text_between(5, 2),
        Err(Error::InvalidRange { start: 5, end: 2 })
    ));
}
