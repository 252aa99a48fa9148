use bytes::Bytes;
use uuid::Uuid;

use crate::types::content_type::ContentType;
use crate::types::header::{HeaderName, TypedHeader};
use crate::types::sip_request::Request;
use crate::types::sip_response::Response;
use crate::types::status::StatusCode;

/// Generate a fresh random tag for From/To headers
pub fn generate_tag() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Create a response to `request` with the given status
///
/// Via, From, To, Call-ID, CSeq and Record-Route are copied from the request in
/// their original order. When the request's To header carries no tag and the
/// status is not `100 Trying`, a new tag is generated so the response fixes the
/// local half of the dialog identity.
pub fn create_response(request: &Request, status: StatusCode) -> Response {
    create_response_with_tag(request, status, &generate_tag())
}

/// Like [`create_response`], tagging To with `local_tag` instead of a fresh tag
///
/// Every response a UAS sends to one INVITE must carry the same To tag, so
/// provisional and final responses share the dialog identity.
pub fn create_response_with_tag(request: &Request, status: StatusCode, local_tag: &str) -> Response {
    let mut response = Response::new(status);

    for header in &request.headers {
        match header {
            TypedHeader::To(to) => {
                let mut to = to.clone();
                if to.tag().is_none() && status != StatusCode::Trying {
                    to.set_tag(local_tag);
                }
                response.append_header(TypedHeader::To(to));
            }
            TypedHeader::From(_)
            | TypedHeader::CallId(_)
            | TypedHeader::CSeq(_)
            | TypedHeader::RecordRoute(_) => response.append_header(header.clone()),
            TypedHeader::Other(HeaderName::Via, _) => response.append_header(header.clone()),
            _ => {}
        }
    }

    response
}

/// Create a `200 OK` carrying an SDP body, To tagged with `local_tag`
pub fn create_sdp_response(request: &Request, local_tag: &str, sdp: impl Into<Bytes>) -> Response {
    create_response_with_tag(request, StatusCode::Ok, local_tag)
        .with_header(TypedHeader::ContentType(ContentType::sdp()))
        .with_body(sdp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn invite() -> Request {
        Request::new(Method::Invite, "sip:bob@biloxi.example.com".parse().unwrap())
            .with_header(TypedHeader::other("Via", "SIP/2.0/UDP pc33.atlanta.example.com;branch=z9hG4bK776asdhds"))
            .with_header(TypedHeader::other("Max-Forwards", "70"))
            .with_header(TypedHeader::To("<sip:bob@biloxi.example.com>".parse().unwrap()))
            .with_header(TypedHeader::From(
                "<sip:alice@atlanta.example.com>;tag=1928301774".parse().unwrap(),
            ))
            .with_header(TypedHeader::CallId(CallId::new("a84b4c76e66710")))
            .with_header(TypedHeader::CSeq(CSeq::new(314159, Method::Invite)))
            .with_header(TypedHeader::RecordRoute(
                "<sip:p1.example.com;lr>, <sip:p2.example.com;lr>".parse().unwrap(),
            ))
            .with_header(TypedHeader::Contact("<sip:alice@pc33.atlanta.example.com>".parse().unwrap()))
    }

    #[test]
    fn test_copies_dialog_headers() {
        let request = invite();
        let response = create_response(&request, StatusCode::Ok);

        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.from(), request.from());
        assert_eq!(response.call_id(), request.call_id());
        assert_eq!(response.cseq(), request.cseq());
        assert_eq!(response.record_routes().len(), 2);
        assert!(response.header(&HeaderName::Via).is_some());
        assert!(response.header(&HeaderName::MaxForwards).is_none());
        assert!(response.contact().is_none());
    }

    #[test]
    fn test_adds_to_tag_for_non_trying() {
        let request = invite();

        let ringing = create_response(&request, StatusCode::Ringing);
        assert!(ringing.to().and_then(|t| t.tag()).is_some());

        let trying = create_response(&request, StatusCode::Trying);
        assert!(trying.to().and_then(|t| t.tag()).is_none());
    }

    #[test]
    fn test_keeps_existing_to_tag() {
        let mut request = invite();
        for header in request.headers.iter_mut() {
            if let TypedHeader::To(to) = header {
                to.set_tag("a6c85cf");
            }
        }
        let response = create_response(&request, StatusCode::Ok);
        assert_eq!(response.to().and_then(|t| t.tag()), Some("a6c85cf"));
    }

    #[test]
    fn test_sdp_response() {
        let response = create_sdp_response(&invite(), "a6c85cf", "v=0\r\n");
        assert!(response.is_success());
        assert_eq!(response.content_type(), Some(&ContentType::sdp()));
        assert_eq!(response.body().as_ref(), b"v=0\r\n");
        assert_eq!(response.to().and_then(|t| t.tag()), Some("a6c85cf"));
    }

    #[test]
    fn test_shared_local_tag_across_responses() {
        let request = invite();
        let ringing = create_response_with_tag(&request, StatusCode::Ringing, "8321234356");
        let ok = create_response_with_tag(&request, StatusCode::Ok, "8321234356");
        assert_eq!(ringing.to(), ok.to());

        let trying = create_response_with_tag(&request, StatusCode::Trying, "8321234356");
        assert!(trying.to().and_then(|t| t.tag()).is_none());
    }
}
