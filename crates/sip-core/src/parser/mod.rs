//! # SIP text parsers
//!
//! nom parsers for the textual forms the message model is built from in code:
//! URIs, name-addrs, address lists and parameter tails
//! ([RFC 3261 Section 25.1](https://datatracker.ietf.org/doc/html/rfc3261#section-25.1)).
//! Full message parsing is left to the transport layer.

use nom::{
    character::complete::{char, space0},
    combinator::all_consuming,
    sequence::delimited,
    Finish, IResult,
};

mod address;
mod params;
mod uri;

pub(crate) use address::{parse_address, parse_address_list};
pub(crate) use uri::parse_uri;

// Type alias for parser result
pub type ParseResult<'a, O> = IResult<&'a str, O>;

/// SEMI = SWS ";" SWS
pub(crate) fn semi(input: &str) -> ParseResult<char> {
    delimited(space0, char(';'), space0)(input)
}

/// COMMA = SWS "," SWS
pub(crate) fn comma(input: &str) -> ParseResult<char> {
    delimited(space0, char(','), space0)(input)
}

/// Run `parser` over all of `input`, allowing surrounding whitespace
pub(crate) fn parse_complete<'a, O>(
    input: &'a str,
    parser: impl FnMut(&'a str) -> ParseResult<'a, O>,
) -> Option<O> {
    all_consuming(delimited(space0, parser, space0))(input)
        .finish()
        .ok()
        .map(|(_, output)| output)
}
