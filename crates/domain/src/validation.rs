//! Lexical grammar of three-word addresses
//!
//! Pattern rules that classify arbitrary text as a candidate three-word
//! address without contacting the API. A candidate that passes
//! [`is_possible_3wa`] is only syntactically plausible (`x.x.x` passes);
//! whether it names a real square is decided by the remote confirmation step
//! in the integration crate.
//!
//! The character sets below are a wire-level convention shared with the
//! deployed service and its other client libraries. Changing any of them
//! changes which strings are recognized as addresses.

use std::sync::LazyLock;

use regex::Regex;

/// A single word token: one or more characters outside the forbidden set
///
/// Forbidden inside a word: digits, `` ` ``, `~!@#$%^&*()+-_=[]{}\|'<,.>?/";:`,
/// `£§º©®`, and all whitespace.
const WORD_TOKEN: &str = r#"[^0-9`~!@#$%^&*()+\-_=\[{\]}\\|'<,.>?/";:£§º©®\s]{1,}"#;

/// Word separators recognized by the strict grammar
///
/// The ordinary full stop plus its CJK, Indic, Arabic, Armenian, Myanmar,
/// Khmer, and Ethiopic equivalents:
/// U+002E, U+FF61, U+3002, U+FF65, U+30FB, U+FE12, U+17D4, U+0589, U+104B,
/// U+06D4, U+1362, U+0964.
const WORD_SEPARATORS: &str = ".\u{FF61}\u{3002}\u{FF65}\u{30FB}\u{FE12}\u{17D4}\u{0589}\u{104B}\u{06D4}\u{1362}\u{0964}";

/// Extra separators tolerated by the approximate grammar: space, underscore,
/// slash, plus, ampersand, colon, semicolon, pipe, ideographic space, hyphen
///
/// The hyphen is kept last so the character class treats it literally.
const LOOSE_SEPARATORS: &str = "\u{0020}_/+&:;|\u{3000}-";

/// Joiners for multi-token words: ordinary space and no-break space
const TOKEN_JOINERS: &str = "\u{0020}\u{00A0}";

/// Anchored strict pattern: `/`-prefix run, three segments, two separators,
/// each segment one base token plus up to three joined extension tokens
static POSSIBLE_3WA: LazyLock<Regex> = LazyLock::new(|| {
    let segment = format!("{WORD_TOKEN}(?:[{TOKEN_JOINERS}]{WORD_TOKEN}){{0,3}}");
    #[allow(clippy::expect_used)] // Infallible with valid static patterns
    Regex::new(&format!(
        "^/*(?:{segment}[{WORD_SEPARATORS}]{segment}[{WORD_SEPARATORS}]{segment})$"
    ))
    .expect("Failed to compile strict address pattern")
});

/// Unanchored scan pattern: three single-token segments, two separators
static FIND_3WA: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with valid static patterns
    Regex::new(&format!(
        "{WORD_TOKEN}[{WORD_SEPARATORS}]{WORD_TOKEN}[{WORD_SEPARATORS}]{WORD_TOKEN}"
    ))
    .expect("Failed to compile address scan pattern")
});

/// Anchored loose pattern: 1-2 separator characters from the widened set
/// between single-token segments
static DID_YOU_MEAN_3WA: LazyLock<Regex> = LazyLock::new(|| {
    let separators = format!("[{WORD_SEPARATORS}{LOOSE_SEPARATORS}]{{1,2}}");
    #[allow(clippy::expect_used)] // Infallible with valid static patterns
    Regex::new(&format!(
        "^/*{WORD_TOKEN}{separators}{WORD_TOKEN}{separators}{WORD_TOKEN}$"
    ))
    .expect("Failed to compile approximate address pattern")
});

/// Check whether `text` has the exact shape of a three-word address
///
/// Purely syntactic: `x.x.x` passes even though those words name nothing.
/// Accepts an optional run of leading `/` characters and multi-token words
/// of up to four space- or NBSP-joined tokens per segment.
#[must_use]
pub fn is_possible_3wa(text: &str) -> bool {
    POSSIBLE_3WA.is_match(text)
}

/// Scan `text` for every substring shaped like a three-word address
///
/// Returns non-overlapping matches in order of first occurrence. The scan is
/// lazy and pure: iterating does not mutate anything, and calling again
/// yields the same sequence. Unlike [`is_possible_3wa`] the scan does not
/// recognize multi-token words.
pub fn find_possible_3wa(text: &str) -> impl Iterator<Item = &str> {
    FIND_3WA.find_iter(text).map(|m| m.as_str())
}

/// Check whether `text` is almost the shape of a three-word address
///
/// Tolerates 1-2 separator characters between words, drawn from the strict
/// set widened with punctuation commonly typed by mistake, so both
/// `filled count soap` and `filled-count-soap` qualify. Never contacts the
/// API.
#[must_use]
pub fn did_you_mean_3wa(text: &str) -> bool {
    DID_YOU_MEAN_3WA.is_match(text)
}
