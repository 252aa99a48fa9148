//! Parameter tails: `;key=value` and `;flag`

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::{delimited, pair, preceded},
};

use super::address::quoted_string;
use super::{semi, ParseResult};
use crate::types::param::Param;

fn is_param_char(c: char) -> bool {
    !matches!(
        c,
        ';' | ',' | '?' | '=' | '<' | '>' | '"' | ' ' | '\t' | '\r' | '\n'
    )
}

/// generic-param = token [ EQUAL gen-value ]
///
/// Quoted values are kept with their quotes.
pub(crate) fn param(input: &str) -> ParseResult<Param> {
    map(
        pair(
            take_while1(is_param_char),
            opt(preceded(
                delimited(space0, char('='), space0),
                alt((recognize(quoted_string), take_while1(is_param_char))),
            )),
        ),
        |(key, value)| Param::new(key, value),
    )(input)
}

/// URI parameters, no whitespace allowed
pub(crate) fn uri_params(input: &str) -> ParseResult<Vec<Param>> {
    many0(preceded(char(';'), param))(input)
}

/// Header parameters following a name-addr or addr-spec
pub(crate) fn header_params(input: &str) -> ParseResult<Vec<Param>> {
    many0(preceded(semi, param))(input)
}
