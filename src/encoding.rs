//! Cue sheet charset detection.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Below this many non-ASCII bytes a legacy multi-byte guess is a coin toss
/// between GBK, Big5, EUC-KR and friends, so none is made.
const MIN_NON_ASCII_FOR_GUESS: usize = 32;

/// Best guess at the charset of `bytes`, or `None` when there is no
/// confident answer.
///
/// - A byte-order mark settles the question outright. UTF-16 is reported
///   without an endianness so iconv consumes the mark.
/// - Pure ASCII (including empty input) has no answer.
/// - Valid UTF-8 is UTF-8.
/// - Otherwise the detector's guess is kept only when there is enough
///   non-ASCII text and the bytes decode under it without errors.
///
/// Returned names are the WHATWG labels (`GBK`, `Shift_JIS`, `UTF-8`, ...),
/// which iconv understands.
pub fn detect(bytes: &[u8]) -> Option<&'static str> {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return Some(if encoding == UTF_8 { "UTF-8" } else { "UTF-16" });
    }

    let non_ascii = bytes.iter().filter(|b| !b.is_ascii()).count();
    if non_ascii == 0 {
        return None;
    }
    if std::str::from_utf8(bytes).is_ok() {
        return Some(UTF_8.name());
    }
    if non_ascii < MIN_NON_ASCII_FOR_GUESS {
        return None;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let guess = detector.guess(None, false);

    let (_, had_errors) = guess.decode_without_bom_handling(bytes);
    (!had_errors).then(|| guess.name())
}

/// Source encoding handed to the converter.
pub fn choose(detected: Option<&str>, fallback: &str) -> String {
    detected.unwrap_or(fallback).to_string()
}
