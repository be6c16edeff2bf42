use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use reqwest::Url;
use rstest::{fixture, rstest};
use serde_json::Value;
use tower::ServiceExt;
use volunteerhub::{AppState, Config, Publisher};

/// Drives the app like a browser, keeping the session cookie between requests.
struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Browser {
    async fn send(&mut self, request: Request<Body>) -> Response<Body> {
        let response = self.app.clone().oneshot(request).await.unwrap();
        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie.to_str().unwrap().split(';').next().unwrap();
            self.cookie = Some(pair.to_owned());
        }
        response
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    async fn get(&mut self, uri: &str) -> Response<Body> {
        let request = self.request("GET", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post(&mut self, uri: &str) -> Response<Body> {
        let request = self.request("POST", uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn post_form(&mut self, uri: &str, form: &str) -> Response<Body> {
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_owned()))
            .unwrap();
        self.send(request).await
    }

    async fn login(&mut self, role: &str) {
        let response = self.get(&format!("/login/{role}")).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    async fn json(&mut self, uri: &str) -> Value {
        let response = self.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        json_body(response).await
    }
}

async fn text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    serde_json::from_str(&text(response).await).unwrap()
}

fn location(response: &Response<Body>) -> &str {
    response.headers().get(header::LOCATION).unwrap().to_str().unwrap()
}

fn browser_with(publisher: Publisher) -> Browser {
    let config = Config::from_lookup(|_| None).unwrap();
    let app = volunteerhub::app(&config, AppState { publisher });
    Browser { app, cookie: None }
}

#[fixture]
fn browser() -> Browser {
    browser_with(Publisher::disabled())
}

/// A browser whose events backend lives on a port nobody listens on.
#[fixture]
fn unreachable_backend() -> Browser {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let base = Url::parse(&format!("http://127.0.0.1:{port}")).unwrap();
    browser_with(Publisher::new(Some(base)).unwrap())
}

#[rstest]
#[tokio::test]
async fn anonymous_visitors_are_sent_to_login(mut browser: Browser) {
    let response = browser.get("/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let page = text(browser.get("/login").await).await;
    assert!(page.contains(r#"href="/login/volunteer""#));
    assert!(page.contains(r#"href="/login/organizer""#));

    assert_eq!(browser.get("/api/events").await.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(browser.get("/api/me").await.status(), StatusCode::UNAUTHORIZED);

    let response = browser.post("/events/1/join").await;
    assert_eq!(location(&response), "/login?return_url=/");
}

#[rstest]
#[tokio::test]
async fn unknown_roles_are_rejected(mut browser: Browser) {
    assert_eq!(browser.get("/login/admin").await.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn volunteer_joins_and_earns_super_star(mut browser: Browser) {
    browser.login("volunteer").await;

    let page = text(browser.get("/").await).await;
    assert!(page.contains("Volunteer Dashboard"));
    assert!(page.contains("Welcome back, Volunteer Alex"));

    let response = browser.post("/events/1/join").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = text(browser.get("/").await).await;
    assert!(page.contains("CONGRATULATIONS"));
    assert!(page.contains(r#"<li class="badge">Super Star</li>"#));

    // the flash is shown once
    let page = text(browser.get("/").await).await;
    assert!(!page.contains("CONGRATULATIONS"));

    let me = browser.json("/api/me").await;
    assert_eq!(me["role"], "volunteer");
    assert_eq!(me["user"]["events_joined"], 5);
    assert_eq!(me["user"]["badges"], serde_json::json!(["Newbie", "Green Hero", "Super Star"]));
    assert_eq!(me["joined"], serde_json::json!([1]));
}

#[rstest]
#[tokio::test]
async fn joining_twice_counts_once(mut browser: Browser) {
    browser.login("volunteer").await;

    let first = json_body(browser.post("/api/events/2/join").await).await;
    assert_eq!(first["outcome"], "joined");
    assert_eq!(first["event"]["participants"], 46);

    let response = browser.post("/api/events/2/join").await;
    assert_eq!(response.status(), StatusCode::OK);
    let second = json_body(response).await;
    assert_eq!(second["outcome"], "already_joined");
    assert_eq!(second["event"]["participants"], 46);

    let me = browser.json("/api/me").await;
    assert_eq!(me["user"]["events_joined"], 5);
}

#[rstest]
#[tokio::test]
async fn full_and_unknown_events_are_refused(mut browser: Browser) {
    browser.login("volunteer").await;

    let response = browser.post("/api/events/3/join").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = json_body(response).await;
    assert_eq!(body["outcome"], "at_capacity");
    assert_eq!(body["event"]["participants"], 15);
    assert_eq!(body["event"]["status"], "Full");

    let response = browser.post("/api/events/99/join").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(browser.post("/events/99/join").await.status(), StatusCode::NOT_FOUND);

    let me = browser.json("/api/me").await;
    assert_eq!(me["user"]["events_joined"], 4);
    assert_eq!(me["joined"], serde_json::json!([]));
}

#[rstest]
#[tokio::test]
async fn organizer_creates_events_with_defaults(mut browser: Browser) {
    browser.login("organizer").await;

    let page = text(browser.get("/").await).await;
    assert!(page.contains("Organizer Dashboard"));
    assert!(page.contains(r#"<p class="active-events">3</p>"#));

    let response = browser
        .post_form("/events/new", "title=Beach+Cleanup&date=2026-03-14&location=&description=Bring+gloves")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = text(browser.get("/").await).await;
    assert!(page.contains("Event created successfully!"));
    assert!(page.contains(r#"<p class="active-events">4</p>"#));

    let events = browser.json("/api/events").await;
    let newest = &events[0];
    assert_eq!(newest["id"], 4);
    assert_eq!(newest["title"], "Beach Cleanup");
    assert_eq!(newest["location"], "TBD");
    assert_eq!(newest["date"], "2026-03-14");
    assert_eq!(newest["organizer"], "Group 25 Admin");
    assert_eq!(newest["capacity"], 50);
    assert_eq!(newest["participants"], 0);
    assert_eq!(newest["status"], "Open");

    browser.post_form("/events/new", "").await;
    let events = browser.json("/api/events").await;
    assert_eq!(events[0]["id"], 5);
    assert_eq!(events[0]["title"], "New Event");
    assert_eq!(events[0]["date"], "2025-01-01");
}

#[rstest]
#[tokio::test]
async fn search_is_a_projection(mut browser: Browser) {
    browser.login("volunteer").await;
    let before = browser.json("/api/events").await;

    let garden = browser.json("/api/events?q=GARDEN").await;
    assert_eq!(garden.as_array().unwrap().len(), 1);
    assert_eq!(garden[0]["id"], 1);

    let nothing = browser.json("/api/events?q=marathon").await;
    assert_eq!(nothing, serde_json::json!([]));

    assert_eq!(browser.json("/api/events").await, before);
}

#[rstest]
#[tokio::test]
async fn logout_keeps_progress(mut browser: Browser) {
    browser.login("volunteer").await;
    browser.post("/events/2/join").await;

    let response = browser.get("/logout").await;
    assert_eq!(location(&response), "/");
    assert_eq!(location(&browser.get("/").await), "/login");
    assert_eq!(browser.get("/api/me").await.status(), StatusCode::UNAUTHORIZED);

    browser.login("organizer").await;
    let me = browser.json("/api/me").await;
    assert_eq!(me["role"], "organizer");
    assert_eq!(me["user"]["role"], "organizer");
    assert_eq!(me["joined"], serde_json::json!([2]));
    assert_eq!(me["user"]["events_joined"], 5);
}

#[rstest]
#[tokio::test]
async fn sessions_are_separate(#[from(browser)] mut alice: Browser, #[from(browser)] mut bob: Browser) {
    alice.login("volunteer").await;
    alice.post("/events/1/join").await;

    bob.login("volunteer").await;
    let me = bob.json("/api/me").await;
    assert_eq!(me["joined"], serde_json::json!([]));
}

#[rstest]
#[tokio::test]
async fn failed_backend_submission_alerts_but_keeps_the_event(
    #[from(unreachable_backend)] mut browser: Browser,
) {
    browser.login("organizer").await;

    let response = browser
        .post_form("/events/new", "title=Beach+Cleanup&max_participants=30")
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = text(browser.get("/").await).await;
    assert!(page.contains("Failed to create event. Please check that your backend is running."));
    assert!(!page.contains("Event created successfully!"));
    assert!(page.contains(r#"<p class="active-events">4</p>"#));

    let events = browser.json("/api/events").await;
    assert_eq!(events[0]["title"], "Beach Cleanup");
    assert_eq!(events[0]["capacity"], 50);
}
