//! Contact form against a local HTTP backend

use quanta_tools::contact::{
    ContactForm, ContactTransport, FormStatus, HttpTransport, Subject, FAILURE_MESSAGE,
};
use std::io::Read;
use std::sync::mpsc;
use std::thread;
use tiny_http::{Response, Server};

struct Received {
    method: String,
    url: String,
    content_type: Option<String>,
    body: String,
}

/// Serve exactly `n` requests with `status`, forwarding what was received
fn start_backend(status: u16, n: usize) -> (String, mpsc::Receiver<Received>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for _ in 0..n {
            let mut request = match server.recv() {
                Ok(r) => r,
                Err(_) => return,
            };
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let content_type = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.as_str().to_string());
            let _ = tx.send(Received {
                method: request.method().to_string(),
                url: request.url().to_string(),
                content_type,
                body,
            });
            let resp = Response::from_string(r#"{"success":true}"#).with_status_code(status);
            let _ = request.respond(resp);
        }
    });

    (format!("http://{}", addr), rx)
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_name("Grace Hopper").unwrap();
    form.set_email("grace@example.com").unwrap();
    form.set_subject(Subject::TechnicalQuestions).unwrap();
    form.set_message("How are strategies scored?").unwrap();
    form
}

#[test]
fn successful_post_clears_the_form() {
    let (base, rx) = start_backend(200, 1);
    let transport = HttpTransport::new(&base).unwrap();

    let mut form = filled_form();
    form.submit(&transport).expect("submission blocked");

    let req = rx.recv().unwrap();
    assert_eq!(req.method, "POST");
    assert_eq!(req.url, "/api/contact");
    assert!(req
        .content_type
        .unwrap_or_default()
        .starts_with("application/json"));

    let body: serde_json::Value = serde_json::from_str(&req.body).unwrap();
    assert_eq!(body["name"], "Grace Hopper");
    assert_eq!(body["email"], "grace@example.com");
    assert_eq!(body["subject"], "Technical Questions");
    assert_eq!(body["message"], "How are strategies scored?");

    assert_eq!(form.status(), &FormStatus::Submitted);
    assert!(form.fields().name.is_empty());
    assert!(form.fields().message.is_empty());

    form.send_another().unwrap();
    assert_eq!(form.status(), &FormStatus::Editing);
}

#[test]
fn server_error_keeps_entered_values() {
    let (base, rx) = start_backend(500, 1);
    let transport = HttpTransport::new(&base).unwrap();

    let mut form = filled_form();
    form.submit(&transport).expect("submission blocked");
    rx.recv().unwrap();

    assert_eq!(form.status(), &FormStatus::Error(FAILURE_MESSAGE.to_string()));
    assert_eq!(form.fields().name, "Grace Hopper");
    assert_eq!(form.fields().subject, Subject::TechnicalQuestions);
}

#[test]
fn non_success_status_is_a_transport_error() {
    let (base, _rx) = start_backend(400, 1);
    let transport = HttpTransport::new(&base).unwrap();
    let err = transport.send(filled_form().fields()).unwrap_err();
    assert!(err.to_string().contains("400"));
}

#[test]
fn unreachable_backend_is_a_failure_not_a_panic() {
    // Bind then drop to get a port nobody listens on
    let addr = {
        let server = Server::http("127.0.0.1:0").unwrap();
        server.server_addr().to_ip().unwrap()
    };
    let transport = HttpTransport::new(&format!("http://{}", addr)).unwrap();

    let mut form = filled_form();
    form.submit(&transport).expect("submission blocked");
    assert_eq!(form.error(), Some(FAILURE_MESSAGE));
}

#[test]
fn blocked_submission_sends_nothing() {
    let (base, rx) = start_backend(200, 1);
    let transport = HttpTransport::new(&base).unwrap();

    let mut form = filled_form();
    form.set_email("").unwrap();
    assert!(form.submit(&transport).is_err());
    assert_eq!(form.status(), &FormStatus::Editing);
    assert!(rx.recv_timeout(std::time::Duration::from_millis(200)).is_err());
}
