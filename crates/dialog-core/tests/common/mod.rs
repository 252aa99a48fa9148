//! Shared fixtures for dialog-core integration tests
//!
//! In-memory implementations of the transaction traits plus builders for the
//! requests a UAS receives.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use uas_dialog_core::{
    ClientTransaction, DialogServer, DialogServerConfig, ServerTransaction, SignalingClient,
    TransactionError,
};
use uas_sip_core::builder::create_response;
use uas_sip_core::prelude::*;

pub const RETRY_INTERVAL: Duration = Duration::from_millis(10);

/// Install a test subscriber; honours RUST_LOG
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

type RespondHook = Box<dyn Fn(&Response) + Send + Sync>;

/// Server transaction recording every response sent on it
#[derive(Default)]
pub struct MockServerTransaction {
    responses: Mutex<Vec<Response>>,
    cancels: Mutex<VecDeque<Request>>,
    done: CancellationToken,
    error: Mutex<Option<TransactionError>>,
    terminated: AtomicUsize,
    fail_sends: AtomicBool,
    on_respond: Mutex<Option<RespondHook>>,
}

impl MockServerTransaction {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn responses(&self) -> Vec<Response> {
        self.responses.lock().clone()
    }

    pub fn statuses(&self) -> Vec<StatusCode> {
        self.responses.lock().iter().map(|r| r.status()).collect()
    }

    /// Queue a CANCEL as if it had arrived from the peer
    pub fn push_cancel(&self, cancel: Request) {
        self.cancels.lock().push_back(cancel);
    }

    /// Conclude the transaction, optionally with a terminal error
    pub fn conclude(&self, error: Option<TransactionError>) {
        *self.error.lock() = error;
        self.done.cancel();
    }

    pub fn fail_sends(&self) {
        self.fail_sends.store(true, Ordering::SeqCst);
    }

    /// Run `hook` on every response before it is recorded
    pub fn on_respond(&self, hook: impl Fn(&Response) + Send + Sync + 'static) {
        *self.on_respond.lock() = Some(Box::new(hook));
    }

    pub fn terminate_count(&self) -> usize {
        self.terminated.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ServerTransaction for MockServerTransaction {
    async fn respond(&self, response: Response) -> Result<(), TransactionError> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(TransactionError::transport("connection refused"));
        }
        if let Some(hook) = self.on_respond.lock().as_ref() {
            hook(&response);
        }
        self.responses.lock().push(response);
        Ok(())
    }

    fn try_recv_cancel(&self) -> Option<Request> {
        self.cancels.lock().pop_front()
    }

    fn done(&self) -> CancellationToken {
        self.done.clone()
    }

    fn error(&self) -> Option<TransactionError> {
        self.error.lock().clone()
    }

    fn terminate(&self) {
        self.terminated.fetch_add(1, Ordering::SeqCst);
        self.done.cancel();
    }
}

/// Client transaction replaying the responses queued by [`MockClient`]
pub struct MockClientTransaction {
    responses: tokio::sync::Mutex<mpsc::UnboundedReceiver<Response>>,
    done: CancellationToken,
    error: Option<TransactionError>,
    terminated: Arc<AtomicUsize>,
}

#[async_trait]
impl ClientTransaction for MockClientTransaction {
    async fn recv_response(&self) -> Option<Response> {
        self.responses.lock().await.recv().await
    }

    fn done(&self) -> CancellationToken {
        self.done.clone()
    }

    fn error(&self) -> Option<TransactionError> {
        self.error.clone()
    }

    fn terminate(&self) {
        self.terminated.fetch_add(1, Ordering::SeqCst);
    }
}

/// What the peer does with a request sent through [`MockClient`]
#[derive(Clone)]
pub enum Answer {
    /// Answer with these statuses, in order, then end the transaction
    Statuses(Vec<StatusCode>),
    /// Never answer
    Silent,
    /// End the transaction without a response
    Fail(TransactionError),
    /// Refuse to create the transaction
    Reject(TransactionError),
}

/// Signaling client recording every request it sends
pub struct MockClient {
    sent: Mutex<Vec<Request>>,
    answer: Answer,
    open: Mutex<Vec<mpsc::UnboundedSender<Response>>>,
    terminated: Arc<AtomicUsize>,
}

impl MockClient {
    pub fn new(answer: Answer) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            answer,
            open: Mutex::new(Vec::new()),
            terminated: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Peer answering every request with 200 OK
    pub fn answering_ok() -> Arc<Self> {
        Self::new(Answer::Statuses(vec![StatusCode::Ok]))
    }

    pub fn sent(&self) -> Vec<Request> {
        self.sent.lock().clone()
    }

    /// Client transactions terminated so far
    pub fn terminated(&self) -> usize {
        self.terminated.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SignalingClient for MockClient {
    async fn send_request(&self, request: Request) -> Result<Box<dyn ClientTransaction>, TransactionError> {
        self.sent.lock().push(request.clone());

        let (sender, receiver) = mpsc::unbounded_channel();
        let done = CancellationToken::new();
        let mut error = None;

        match &self.answer {
            Answer::Statuses(statuses) => {
                for status in statuses {
                    let _ = sender.send(create_response(&request, *status));
                }
            }
            Answer::Silent => self.open.lock().push(sender),
            Answer::Fail(e) => {
                error = Some(e.clone());
                done.cancel();
            }
            Answer::Reject(e) => return Err(e.clone()),
        }

        Ok(Box::new(MockClientTransaction {
            responses: tokio::sync::Mutex::new(receiver),
            done,
            error,
            terminated: self.terminated.clone(),
        }))
    }
}

pub fn contact() -> Contact {
    "<sip:uas@192.0.2.10:5060>".parse().unwrap()
}

/// Dialog server with a short ACK re-check interval
pub fn dialog_server(client: Arc<MockClient>) -> DialogServer {
    let config = DialogServerConfig::new(contact()).with_confirmation_retry_interval(RETRY_INTERVAL);
    DialogServer::with_config(client, config).unwrap()
}

/// INVITE from alice to bob
pub fn invite(call_id: &str) -> Request {
    invite_with_record_routes(call_id, &[])
}

pub fn invite_with_record_routes(call_id: &str, record_routes: &[&str]) -> Request {
    let mut invite = Request::new(Method::Invite, "sip:bob@192.0.2.10:5060".parse().unwrap())
        .with_header(TypedHeader::other(
            "Via",
            "SIP/2.0/UDP 192.0.2.20:5070;branch=z9hG4bK776asdhds",
        ))
        .with_header(TypedHeader::other("Max-Forwards", "70"))
        .with_header(TypedHeader::From(
            "\"Alice\" <sip:alice@atlanta.example.com>;tag=1928301774".parse().unwrap(),
        ))
        .with_header(TypedHeader::To("<sip:bob@biloxi.example.com>".parse().unwrap()))
        .with_header(TypedHeader::CallId(CallId::new(call_id)))
        .with_header(TypedHeader::CSeq(CSeq::new(314159, Method::Invite)))
        .with_header(TypedHeader::Contact(
            "<sip:alice@192.0.2.20:5070>".parse().unwrap(),
        ));
    for rr in record_routes {
        invite.append_header(TypedHeader::RecordRoute(rr.parse().unwrap()));
    }
    invite
}

pub fn invite_without_contact(call_id: &str) -> Request {
    let mut invite = invite(call_id);
    invite.headers.retain(|h| !matches!(h, TypedHeader::Contact(_)));
    invite
}

/// CANCEL for an INVITE
pub fn cancel_for(invite: &Request) -> Request {
    let mut cancel = Request::new(Method::Cancel, invite.uri.clone());
    for header in &invite.headers {
        match header {
            TypedHeader::CSeq(cseq) => {
                cancel.append_header(TypedHeader::CSeq(CSeq::new(cseq.sequence(), Method::Cancel)))
            }
            TypedHeader::From(_) | TypedHeader::To(_) | TypedHeader::CallId(_) => {
                cancel.append_header(header.clone())
            }
            _ => {}
        }
    }
    cancel
}

/// In-dialog request from alice, matching the 2xx the UAS sent
pub fn in_dialog_request(method: Method, ok: &Response) -> Request {
    let seq = if method == Method::Ack { 314159 } else { 314160 };
    Request::new(method.clone(), "sip:uas@192.0.2.10:5060".parse().unwrap())
        .with_header(TypedHeader::From(ok.from().unwrap().clone()))
        .with_header(TypedHeader::To(ok.to().unwrap().clone()))
        .with_header(TypedHeader::CallId(ok.call_id().unwrap().clone()))
        .with_header(TypedHeader::CSeq(CSeq::new(seq, method)))
}

pub fn ack_for(ok: &Response) -> Request {
    in_dialog_request(Method::Ack, ok)
}

pub fn bye_for(ok: &Response) -> Request {
    in_dialog_request(Method::Bye, ok)
}

/// The last 2xx sent on a transaction
pub fn last_success(tx: &MockServerTransaction) -> Response {
    tx.responses()
        .into_iter()
        .rev()
        .find(|r| r.is_success())
        .expect("no 2xx was sent")
}
