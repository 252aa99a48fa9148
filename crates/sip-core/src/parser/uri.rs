//! URI grammar: `scheme ":" [userinfo "@"] host [":" port] *(";" param) ["?" headers]`

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize, value},
    sequence::{delimited, pair, preceded, terminated},
};

use super::params::uri_params;
use super::ParseResult;
use crate::types::uri::{Scheme, Uri};

fn scheme(input: &str) -> ParseResult<Scheme> {
    terminated(
        alt((
            value(Scheme::Sips, tag_no_case("sips")),
            value(Scheme::Sip, tag_no_case("sip")),
            value(Scheme::Tel, tag_no_case("tel")),
        )),
        char(':'),
    )(input)
}

fn is_user_char(c: char) -> bool {
    !matches!(
        c,
        '@' | ':' | ';' | '?' | '<' | '>' | '"' | ',' | ' ' | '\t' | '\r' | '\n'
    )
}

/// user [":" password] "@", the password is discarded
fn userinfo(input: &str) -> ParseResult<&str> {
    terminated(
        take_while1(is_user_char),
        pair(opt(preceded(char(':'), take_while(is_user_char))), char('@')),
    )(input)
}

fn host(input: &str) -> ParseResult<&str> {
    alt((
        // IPv6reference keeps its brackets
        recognize(delimited(
            char('['),
            take_while1(|c: char| c.is_ascii_hexdigit() || c == ':' || c == '.'),
            char(']'),
        )),
        take_while1(|c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')),
    ))(input)
}

fn port(input: &str) -> ParseResult<u16> {
    preceded(char(':'), map_res(digit1, |digits: &str| digits.parse::<u16>()))(input)
}

fn telephone_subscriber(input: &str) -> ParseResult<&str> {
    take_while1(|c: char| !matches!(c, ';' | '?' | '>' | ',' | ' ' | '\t'))(input)
}

/// URI headers are not needed by the dialog layer and are dropped
fn uri_headers(input: &str) -> ParseResult<&str> {
    preceded(
        char('?'),
        take_while(|c: char| !matches!(c, '>' | ',' | ' ' | '\t')),
    )(input)
}

/// A URI up to its parameters
///
/// In a bare addr-spec everything after the host belongs to the header, so this
/// stops before the first `;`.
pub(crate) fn uri_core(input: &str) -> ParseResult<Uri> {
    let (input, scheme) = scheme(input)?;
    if scheme == Scheme::Tel {
        let (input, number) = telephone_subscriber(input)?;
        return Ok((input, Uri::new(scheme, number)));
    }

    let (input, user) = opt(userinfo)(input)?;
    let (input, host) = host(input)?;
    let (input, port) = opt(port)(input)?;

    let mut uri = Uri::new(scheme, host);
    uri.user = user.map(str::to_string);
    uri.port = port;
    Ok((input, uri))
}

/// A complete URI with parameters
pub(crate) fn parse_uri(input: &str) -> ParseResult<Uri> {
    let (input, mut uri) = uri_core(input)?;
    let (input, parameters) = uri_params(input)?;
    let (input, _) = opt(uri_headers)(input)?;
    uri.parameters = parameters;
    Ok((input, uri))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_is_not_a_password() {
        let (rest, uri) = parse_uri("sip:proxy.example.com:5070;lr").unwrap();
        assert!(rest.is_empty());
        assert_eq!(uri.user, None);
        assert_eq!(uri.port, Some(5070));
    }

    #[test]
    fn test_uri_core_leaves_params() {
        let (rest, uri) = uri_core("sip:bob@biloxi.example.com;tag=a6c85cf").unwrap();
        assert_eq!(uri.host, "biloxi.example.com");
        assert_eq!(rest, ";tag=a6c85cf");
    }

    #[test]
    fn test_headers_are_dropped() {
        let (rest, uri) = parse_uri("sip:carol@chicago.example.com?Subject=next").unwrap();
        assert!(rest.is_empty());
        assert_eq!(uri.to_string(), "sip:carol@chicago.example.com");
    }

    #[test]
    fn test_tel_uri() {
        let (_, uri) = parse_uri("tel:+1-201-555-0123;phone-context=example.com").unwrap();
        assert_eq!(uri.scheme, Scheme::Tel);
        assert_eq!(uri.host, "+1-201-555-0123");
        assert_eq!(uri.parameters.len(), 1);
    }
}
