use answer_sheet_check::clients::CheckerClient;
use answer_sheet_check::config::Config;
use answer_sheet_check::error::{ApiError, AppError, ValidationError};
use answer_sheet_check::locale::error_message;
use answer_sheet_check::logger;
use answer_sheet_check::models::{CheckForm, Language, SheetImage};
use answer_sheet_check::services::render_score_report;
use answer_sheet_check::workflow::{CheckCtx, CheckFlow};

use stub::StubChecker;

fn test_config(base_url: &str) -> Config {
    Config {
        checker_base_url: base_url.to_string(),
        ..Config::default()
    }
}

fn valid_form() -> CheckForm {
    CheckForm {
        language: Language::English,
        num_questions: "5".to_string(),
        raw_answers: " abcda ".to_string(),
        image: Some(SheetImage::new("sheet.png", b"FAKEPNGDATA".to_vec())),
    }
}

#[tokio::test]
async fn test_full_check_submits_multipart_form() {
    let stub = StubChecker::start(
        "200 OK",
        "application/json",
        r#"{"total_questions":5,"correct_count":4,"incorrect_questions":[3],"message":"Almost there!"}"#,
    )
    .await;

    let config = test_config(&stub.base_url);
    let flow = CheckFlow::new(&config).expect("flow should build");

    let ctx = CheckCtx::new(1, "sheet.png");
    let score = flow
        .run(&valid_form(), &ctx)
        .await
        .expect("check should succeed");

    assert_eq!(score.total_questions, 5);
    assert_eq!(score.correct_count, 4);
    assert_eq!(score.incorrect_questions, vec![3]);

    // The wire format is one multipart form with the three fields
    let body = stub.last_body();
    assert!(body.starts_with("POST /check-answers"), "request line was: {}", body.lines().next().unwrap_or(""));
    assert!(body.to_lowercase().contains("multipart/form-data"));
    assert!(body.contains(r#"name="correct_answers""#));
    assert!(
        body.contains("\r\n\r\nABCDA\r\n"),
        "the normalized key should be sent"
    );
    assert!(body.contains(r#"name="language""#));
    assert!(body.contains("\r\n\r\neng\r\n"));
    assert!(body.contains(r#"name="image"; filename="sheet.png""#));
    assert!(body.to_lowercase().contains("content-type: image/png"));
    assert!(body.contains("FAKEPNGDATA"));
}

#[tokio::test]
async fn test_bengali_check_sends_bengali_key() {
    let stub = StubChecker::start(
        "200 OK",
        "application/json",
        r#"{"total_questions":3,"correct_count":3,"incorrect_questions":[],"message":"চমৎকার!"}"#,
    )
    .await;

    let config = test_config(&stub.base_url);
    let flow = CheckFlow::new(&config).expect("flow should build");

    let form = CheckForm {
        language: Language::Bengali,
        num_questions: "3".to_string(),
        raw_answers: " কখগ ".to_string(),
        image: Some(SheetImage::new("sheet.jpg", b"FAKEJPGDATA".to_vec())),
    };
    let ctx = CheckCtx::new(1, "sheet.jpg");

    let score = flow.run(&form, &ctx).await.expect("check should succeed");

    let body = stub.last_body();
    assert!(body.contains("\r\n\r\nben\r\n"));
    assert!(body.contains("কখগ"), "the Bengali key should be sent as-is");
    assert!(body.to_lowercase().contains("content-type: image/jpeg"));

    let report = render_score_report(Language::Bengali, &score);
    assert!(report.contains("ভুল প্রশ্ন: কোনো নেই"), "report was: {}", report);
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let stub = StubChecker::start("200 OK", "application/json", "{}").await;

    let config = test_config(&stub.base_url);
    let flow = CheckFlow::new(&config).expect("flow should build");

    let mut form = valid_form();
    form.num_questions = "abc".to_string();
    let ctx = CheckCtx::new(1, "sheet.png");

    let err = flow
        .run(&form, &ctx)
        .await
        .expect_err("validation should fail");
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::InvalidQuestionCount { .. })
    ));
    assert_eq!(
        stub.hit_count(),
        0,
        "no request may reach the checker on validation failure"
    );
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let stub = StubChecker::start("500 INTERNAL SERVER ERROR", "text/plain", "boom").await;

    let config = test_config(&stub.base_url);
    let flow = CheckFlow::new(&config).expect("flow should build");

    let ctx = CheckCtx::new(1, "sheet.png");
    let err = flow
        .run(&valid_form(), &ctx)
        .await
        .expect_err("a 500 should fail the check");

    assert!(matches!(
        err,
        AppError::Api(ApiError::ServerError { status: 500 })
    ));
    assert_eq!(
        error_message(Language::English, &err),
        "Error: Server error: 500"
    );
    assert!(error_message(Language::Bengali, &err).starts_with("ত্রুটি:"));
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let stub = StubChecker::start("200 OK", "application/json", "not json at all").await;

    let config = test_config(&stub.base_url);
    let flow = CheckFlow::new(&config).expect("flow should build");

    let ctx = CheckCtx::new(1, "sheet.png");
    let err = flow
        .run(&valid_form(), &ctx)
        .await
        .expect_err("garbage body should fail the check");

    assert!(matches!(
        err,
        AppError::Api(ApiError::JsonParseFailed { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_checker_is_a_request_error() {
    // Grab a port with nothing listening on it
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener addr");
    drop(listener);

    let config = test_config(&format!("http://{}", addr));
    let flow = CheckFlow::new(&config).expect("flow should build");

    let ctx = CheckCtx::new(1, "sheet.png");
    let err = flow
        .run(&valid_form(), &ctx)
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err, AppError::Api(ApiError::RequestFailed { .. })));
    assert!(error_message(Language::English, &err).starts_with("Error:"));
}

#[tokio::test]
async fn test_reported_score_renders_verbatim() {
    let stub = StubChecker::start(
        "200 OK",
        "application/json",
        r#"{"total_questions":5,"correct_count":3,"incorrect_questions":[2,4],"message":"Better luck next time!"}"#,
    )
    .await;

    let config = test_config(&stub.base_url);
    let flow = CheckFlow::new(&config).expect("flow should build");

    let ctx = CheckCtx::new(1, "sheet.png");
    let score = flow
        .run(&valid_form(), &ctx)
        .await
        .expect("check should succeed");

    assert_eq!(
        render_score_report(Language::English, &score),
        "Total Questions: 5\nCorrect Answers: 3\nIncorrect Questions: 2, 4\n\nBetter luck next time!"
    );
}

#[tokio::test]
async fn test_ping_returns_banner() {
    let stub = StubChecker::start("200 OK", "text/html", "OMR Checker Backend is running!").await;

    let config = test_config(&stub.base_url);
    let client = CheckerClient::new(&config).expect("client should build");

    let banner = client.ping().await.expect("ping should succeed");
    assert_eq!(banner, "OMR Checker Backend is running!");
    assert!(stub.last_body().starts_with("GET / "));
}

#[tokio::test]
async fn test_ping_surfaces_server_errors() {
    let stub = StubChecker::start("503 SERVICE UNAVAILABLE", "text/plain", "down").await;

    let config = test_config(&stub.base_url);
    let client = CheckerClient::new(&config).expect("client should build");

    let err = client.ping().await.expect_err("a 503 should fail the ping");
    assert!(matches!(
        err,
        AppError::Api(ApiError::ServerError { status: 503 })
    ));
}

#[tokio::test]
#[ignore] // needs a running checker, run manually: cargo test -- --ignored
async fn test_live_checker_ping() {
    // Initialize logging
    logger::init();

    // Load configuration
    let config = Config::load();

    // Probe the configured checker
    let client = CheckerClient::new(&config).expect("client should build");
    let banner = client.ping().await.expect("checker should be reachable");

    println!("checker says: {}", banner);
}

/// Canned HTTP service standing in for the checker
mod stub {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    pub struct StubChecker {
        pub base_url: String,
        hits: Arc<AtomicUsize>,
        bodies: Arc<Mutex<Vec<String>>>,
    }

    impl StubChecker {
        /// Answer every connection with the same status line and body
        pub async fn start(
            status: &'static str,
            content_type: &'static str,
            body: &'static str,
        ) -> StubChecker {
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind stub listener");
            let addr = listener.local_addr().expect("stub listener addr");

            let hits = Arc::new(AtomicUsize::new(0));
            let bodies = Arc::new(Mutex::new(Vec::new()));

            let hits_clone = Arc::clone(&hits);
            let bodies_clone = Arc::clone(&bodies);

            tokio::spawn(async move {
                loop {
                    let (mut socket, _) = match listener.accept().await {
                        Ok(conn) => conn,
                        Err(_) => break,
                    };
                    let hits = Arc::clone(&hits_clone);
                    let bodies = Arc::clone(&bodies_clone);

                    tokio::spawn(async move {
                        let request = read_request(&mut socket).await;
                        hits.fetch_add(1, Ordering::SeqCst);
                        bodies.lock().expect("bodies lock").push(request);

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            content_type,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
            });

            StubChecker {
                base_url: format!("http://{}", addr),
                hits,
                bodies,
            }
        }

        pub fn hit_count(&self) -> usize {
            self.hits.load(Ordering::SeqCst)
        }

        pub fn last_body(&self) -> String {
            self.bodies
                .lock()
                .expect("bodies lock")
                .last()
                .cloned()
                .unwrap_or_default()
        }
    }

    /// Read one full request: headers, then Content-Length bytes of body
    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];

        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                return String::from_utf8_lossy(&buf).into_owned();
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find_header_end(&buf) {
                break pos;
            }
        };

        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);

        let body_start = header_end + 4;
        while buf.len() < body_start + content_length {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        String::from_utf8_lossy(&buf).into_owned()
    }

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n")
    }
}
