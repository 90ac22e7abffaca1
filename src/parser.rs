//! Handles parsing of free-form numeric chord descriptions.
//!
//! A description mirrors the arguments of `Chord::new`: the tonic, the
//! bracketed triad and an optional extension, all separated by commas.
//!
//! ```text
//! Number      : [0-9]+
//!             ;
//!
//! Triad       : '[' Number ',' Number ',' Number ']'
//!             ;
//!
//! Description : Number ',' Triad (',' Number)?
//!             ;
//! ```
//!
//! Whitespace is allowed around every token. Chord symbols such as `Cm7`
//! are not accepted here.

use std::str::FromStr;

use combine::parser::char::{char, digit, spaces};
use combine::stream::position;
use combine::{between, eof, many1, optional, EasyParser, Parser, Stream};

use crate::chord::Chord;
use crate::error::{Error, Result};
use crate::pitch::PITCH_CLASS_COUNT;

/// Skips any whitespace trailing the given parser.
fn lex<Input, P>(p: P) -> impl Parser<Input, Output = P::Output>
where
    Input: Stream<Token = char>,
    P: Parser<Input>,
{
    p.skip(spaces())
}

/// Parses a non-negative decimal number.
///
/// Only the value modulo 12 is kept, so arbitrarily long inputs cannot
/// overflow.
fn number<Input>() -> impl Parser<Input, Output = i32>
where
    Input: Stream<Token = char>,
{
    let modulus = PITCH_CLASS_COUNT as u32;

    many1(digit())
        .map(move |digits: String| {
            digits
                .chars()
                .filter_map(|d| d.to_digit(10))
                .fold(0, |acc, d| (acc * 10 + d) % modulus) as i32
        })
        .expected("Number: [0-9]+")
}

/// Parses the three bracketed pitch classes of a triad.
fn triad<Input>() -> impl Parser<Input, Output = [i32; 3]>
where
    Input: Stream<Token = char>,
{
    let comma = || lex(char(','));

    between(
        lex(char('[')),
        lex(char(']')),
        (lex(number()), comma(), lex(number()), comma(), lex(number())),
    )
    .map(|(first, _, second, _, third)| [first, second, third])
}

/// Recognizes a complete chord description with nothing trailing it.
fn chord<Input>() -> impl Parser<Input, Output = Chord>
where
    Input: Stream<Token = char>,
{
    let extension = optional(lex(char(',')).with(lex(number())));

    (spaces(), lex(number()), lex(char(',')), triad(), extension, eof())
        .map(|(_, tonic, _, triad, extension, _)| Chord::new(tonic, triad, extension))
}

/// Parse a numeric chord description into a `Chord`.
///
/// ```
/// use chordcipher::parse_chord;
///
/// let chord = parse_chord("0, [0, 4, 7], 11").unwrap();
/// assert_eq!(chord.cipher().unwrap(), "C7M");
/// ```
pub fn parse_chord(input: &str) -> Result<Chord> {
    chord()
        .easy_parse(position::Stream::new(input))
        .map(|(chord, _)| chord)
        .map_err(|err| {
            debug!("rejected chord description {:?}", input);
            Error::Syntax(err.to_string())
        })
}

impl FromStr for Chord {
    type Err = Error;

    fn from_str(input: &str) -> Result<Chord> {
        parse_chord(input)
    }
}
