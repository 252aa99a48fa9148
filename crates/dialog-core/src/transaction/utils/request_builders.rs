//! SIP request builder utilities
//!
//! In-dialog requests the UAS originates, derived from the INVITE it answered
//! and the 2xx it sent (RFC 3261 Section 12.2.1.1).

use uas_sip_core::prelude::*;

use crate::errors::DialogResult;

/// Create the BYE a UAS sends to end a dialog it answered
///
/// - Request-URI is the remote target: the Contact of the INVITE.
/// - From/To are the 2xx's To/From swapped, tags included, so the local
///   identity (with the local tag) goes into From.
/// - Call-ID is copied from the 2xx.
/// - Every Record-Route entry of the INVITE becomes a Route entry, in reverse
///   order, so the BYE walks the recorded path backwards. All entries are
///   treated as loose routes; the Request-URI is never rewritten.
///
/// No Via, CSeq or Max-Forwards is added: the transaction layer owns them.
pub fn create_bye_for_uas(invite: &Request, response: &Response) -> DialogResult<Request> {
    let contact = invite
        .contact()
        .ok_or(Error::MissingHeader(HeaderName::Contact))?;
    let from = response.from().ok_or(Error::MissingHeader(HeaderName::From))?;
    let to = response.to().ok_or(Error::MissingHeader(HeaderName::To))?;
    let call_id = response
        .call_id()
        .ok_or(Error::MissingHeader(HeaderName::CallId))?;

    let mut bye = Request::new(Method::Bye, contact.uri().clone())
        .with_header(TypedHeader::From(From::new(to.address().clone())))
        .with_header(TypedHeader::To(To::new(from.address().clone())))
        .with_header(TypedHeader::CallId(call_id.clone()));

    for entry in invite.record_routes().into_iter().rev() {
        bye.append_header(TypedHeader::Route(Route::single(RouteEntry::new(
            entry.address().clone(),
        ))));
    }

    Ok(bye)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uas_sip_core::builder::create_response;

    fn invite_with_record_routes(record_routes: &[&str]) -> Request {
        let mut invite = Request::new(Method::Invite, "sip:bob@biloxi.example.com".parse().unwrap())
            .with_header(TypedHeader::From(
                "\"Alice\" <sip:alice@atlanta.example.com>;tag=1928301774".parse().unwrap(),
            ))
            .with_header(TypedHeader::To("<sip:bob@biloxi.example.com>".parse().unwrap()))
            .with_header(TypedHeader::CallId(CallId::new("a84b4c76e66710")))
            .with_header(TypedHeader::CSeq(CSeq::new(314159, Method::Invite)))
            .with_header(TypedHeader::Contact(
                "<sip:alice@pc33.atlanta.example.com:5070>".parse().unwrap(),
            ));
        for rr in record_routes {
            invite.append_header(TypedHeader::RecordRoute(rr.parse().unwrap()));
        }
        invite
    }

    fn route_hosts(request: &Request) -> Vec<String> {
        request.routes().iter().map(|r| r.uri().host.clone()).collect()
    }

    #[test]
    fn test_bye_swaps_from_and_to() {
        let invite = invite_with_record_routes(&[]);
        let ok = create_response(&invite, StatusCode::Ok);
        let bye = create_bye_for_uas(&invite, &ok).unwrap();

        assert_eq!(bye.method, Method::Bye);
        assert_eq!(bye.uri.to_string(), "sip:alice@pc33.atlanta.example.com:5070");

        let local_tag = ok.to().and_then(|t| t.tag()).unwrap();
        assert_eq!(bye.from().and_then(|f| f.tag()), Some(local_tag));
        assert_eq!(bye.from().unwrap().uri.username(), Some("bob"));
        assert_eq!(bye.to().and_then(|t| t.tag()), Some("1928301774"));
        assert_eq!(bye.to().unwrap().display_name.as_deref(), Some("Alice"));
        assert_eq!(bye.call_id(), ok.call_id());
        assert!(bye.cseq().is_none());
        assert!(bye.routes().is_empty());
    }

    #[test]
    fn test_record_routes_are_reversed() {
        let invite = invite_with_record_routes(&[
            "<sip:r1.example.com;lr>",
            "<sip:r2.example.com;lr>",
            "<sip:r3.example.com;lr>",
        ]);
        let ok = create_response(&invite, StatusCode::Ok);
        let bye = create_bye_for_uas(&invite, &ok).unwrap();

        assert_eq!(route_hosts(&bye), ["r3.example.com", "r2.example.com", "r1.example.com"]);
        assert_eq!(bye.first_route().unwrap().uri().host, "r3.example.com");
    }

    #[test]
    fn test_comma_separated_record_route_is_reversed_per_entry() {
        let invite = invite_with_record_routes(&[
            "<sip:r1.example.com;lr>, <sip:r2.example.com;lr>",
            "<sip:r3.example.com;lr>",
        ]);
        let ok = create_response(&invite, StatusCode::Ok);
        let bye = create_bye_for_uas(&invite, &ok).unwrap();

        assert_eq!(route_hosts(&bye), ["r3.example.com", "r2.example.com", "r1.example.com"]);
    }

    #[test]
    fn test_strict_route_entry_keeps_remote_target() {
        let invite = invite_with_record_routes(&["<sip:strict.example.com>"]);
        let ok = create_response(&invite, StatusCode::Ok);
        let bye = create_bye_for_uas(&invite, &ok).unwrap();

        assert_eq!(bye.uri.host, "pc33.atlanta.example.com");
        assert_eq!(route_hosts(&bye), ["strict.example.com"]);
    }

    #[test]
    fn test_missing_contact_is_an_error() {
        let mut invite = invite_with_record_routes(&[]);
        invite.headers.retain(|h| !matches!(h, TypedHeader::Contact(_)));
        let ok = create_response(&invite, StatusCode::Ok);

        assert!(create_bye_for_uas(&invite, &ok).is_err());
    }
}
