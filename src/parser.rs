use crate::srt::Subtitle;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while1, take_while_m_n};
use nom::character::complete::{char, digit1};
use nom::combinator::{eof, recognize};
use nom::error::VerboseError;
use nom::multi::fold_many1;
use nom::sequence::{separated_pair, terminated, tuple};
use nom::IResult;

use tracing::debug;

pub struct Parser;
impl Parser {
    pub fn new() -> Self {
        Self {}
    }

    /// Parses an entire SRT file into subtitle records.
    ///
    /// CRLF line endings are normalised to LF first, then the content is
    /// split into blocks on a single blank line. Blocks that do not match
    /// the SRT grammar are dropped; this never fails on malformed input.
    pub fn parse(&self, input: &str) -> Vec<Subtitle> {
        let normalised = input.replace("\r\n", "\n");

        let mut subs = Vec::new();
        for block in normalised.split("\n\n") {
            match subtitle(block) {
                Ok((_, sub)) => subs.push(sub),
                Err(_) => {
                    if !block.is_empty() {
                        debug!(length = block.len(), "skipped malformed subtitle block");
                    }
                }
            }
        }
        subs
    }
}

fn subtitle(block: &str) -> IResult<&str, Subtitle, VerboseError<&str>> {
    let (rest, index) = terminated(digit1, char('\n'))(block)?;
    let (rest, (start, end)) = terminated(timing, char('\n'))(rest)?;
    let (rest, text) = sub_text(rest)?;

    Ok((
        rest,
        Subtitle {
            index: decimal(index),
            start: start.to_string(),
            end: end.to_string(),
            text,
        },
    ))
}

fn timing(input: &str) -> IResult<&str, (&str, &str), VerboseError<&str>> {
    separated_pair(timestamp, tag(" --> "), timestamp)(input)
}

/// Matches a `HH:MM:SS,mmm` timestamp and returns it verbatim. Field widths
/// are fixed; `1:02:03,4` is not a valid timestamp here.
fn timestamp(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    let digits = |n| take_while_m_n(n, n, |c: char| c.is_ascii_digit());
    recognize(tuple((
        digits(2),
        char(':'),
        digits(2),
        char(':'),
        digits(2),
        char(','),
        digits(3),
    )))(input)
}

/// Consumes the text lines at the end of a block. Only the last line is
/// kept, with a trailing newline appended.
fn sub_text(input: &str) -> IResult<&str, String, VerboseError<&str>> {
    let line = terminated(take_while1(|c: char| c != '\n'), alt((tag("\n"), eof)));

    let (input, last) = terminated(fold_many1(line, || "", |_, last| last), eof)(input)?;

    Ok((input, format!("{}\n", last)))
}

/// Accumulates a digit run into an integer, left to right. The input is
/// guaranteed to contain only decimal digits by the grammar above.
fn decimal(digits: &str) -> u64 {
    digits.bytes().fold(0, |n, d| n * 10 + u64::from(d - b'0'))
}
