//! name-addr / addr-spec grammar
//!
//! ```text
//! name-addr = [ display-name ] LAQUOT addr-spec RAQUOT
//! display-name = *(token LWS) / quoted-string
//! ```

use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{anychar, char, none_of, space0},
    combinator::map,
    multi::{fold_many0, separated_list1},
    sequence::{delimited, preceded},
};

use super::params::header_params;
use super::uri::{parse_uri, uri_core};
use super::{comma, ParseResult};
use crate::types::address::Address;

/// quoted-string with escapes removed
pub(crate) fn quoted_string(input: &str) -> ParseResult<String> {
    delimited(
        char('"'),
        fold_many0(
            alt((preceded(char('\\'), anychar), none_of("\"\\"))),
            String::new,
            |mut s, c| {
                s.push(c);
                s
            },
        ),
        char('"'),
    )(input)
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-.!%*_+`'~".contains(c)
}

fn display_name(input: &str) -> ParseResult<Option<String>> {
    alt((
        map(quoted_string, Some),
        map(
            take_while(|c: char| is_token_char(c) || c == ' ' || c == '\t'),
            |name: &str| {
                let name = name.trim();
                (!name.is_empty()).then(|| name.to_string())
            },
        ),
    ))(input)
}

fn name_addr(input: &str) -> ParseResult<Address> {
    let (input, display_name) = display_name(input)?;
    let (input, uri) = preceded(space0, delimited(char('<'), parse_uri, char('>')))(input)?;
    let (input, params) = header_params(input)?;
    Ok((
        input,
        Address {
            display_name,
            uri,
            params,
        },
    ))
}

fn addr_spec(input: &str) -> ParseResult<Address> {
    let (input, uri) = uri_core(input)?;
    let (input, params) = header_params(input)?;
    Ok((
        input,
        Address {
            display_name: None,
            uri,
            params,
        },
    ))
}

/// A name-addr, or a bare addr-spec whose parameters all belong to the header
pub(crate) fn parse_address(input: &str) -> ParseResult<Address> {
    alt((name_addr, addr_spec))(input)
}

/// Comma-separated addresses, as in Route and Record-Route
pub(crate) fn parse_address_list(input: &str) -> ParseResult<Vec<Address>> {
    separated_list1(comma, parse_address)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_display_name_may_hold_brackets() {
        let (rest, addr) =
            parse_address("\"Bob <boss>\" <sip:bob@biloxi.example.com>;tag=1").unwrap();
        assert!(rest.is_empty());
        assert_eq!(addr.display_name.as_deref(), Some("Bob <boss>"));
        assert_eq!(addr.uri.host, "biloxi.example.com");
        assert_eq!(addr.tag(), Some("1"));
    }

    #[test]
    fn test_escaped_quote_in_display_name() {
        let (_, addr) = parse_address(r#""Say \"hi\"" <sip:a@example.com>"#).unwrap();
        assert_eq!(addr.display_name.as_deref(), Some("Say \"hi\""));
    }

    #[test]
    fn test_token_display_name() {
        let (_, addr) = parse_address("Alice Liddell <sip:alice@atlanta.example.com>").unwrap();
        assert_eq!(addr.display_name.as_deref(), Some("Alice Liddell"));
    }

    #[test]
    fn test_list_of_mixed_forms() {
        let (rest, list) =
            parse_address_list("sip:p1.example.com, \"Edge, West\" <sip:p2.example.com;lr>")
                .unwrap();
        assert!(rest.is_empty());
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].display_name.as_deref(), Some("Edge, West"));
        assert!(list[1].uri.is_loose_routing());
    }
}
