mod common;

use std::time::Duration;

use chrono::NaiveDate;
use common::mock_backend::MockResponse;
use common::Harness;
use course_feedback::ui::app::FormKey;
use course_feedback::ui::detail::DetailIntent;
use course_feedback::ui::form::{FetchStatus, SubmitPhase};
use course_feedback::ui::screen::{Route, Screen, ScreenMessage};

const WAIT: Duration = Duration::from_secs(5);

fn courses() -> MockResponse {
    MockResponse::json(r#"["SENG306","SENG326","SENG352","SENG384"]"#)
}

fn info() -> MockResponse {
    MockResponse::json(r#"{"topic":"Midterm","request_date":"2024-05-01","course_name":"SENG384"}"#)
}

#[test]
fn login_success_opens_request_form_with_courses() {
    let mut h = Harness::start(
        Route::Login,
        vec![
            ("/api/login", MockResponse::json(r#"{"message":"ok"}"#)),
            ("/api/courses", courses()),
        ],
    );

    h.type_text("eda");
    h.next_field();
    h.type_text("secret");
    h.press(FormKey::Activate);
    assert!(h.app.screen().is_awaiting());

    let loaded = h.pump_until(WAIT, |app| match app.screen() {
        Screen::RequestForm(state) => state.courses_status == FetchStatus::Loaded,
        _ => false,
    });
    assert!(loaded, "request form never received courses");

    let Screen::RequestForm(state) = h.app.screen() else {
        unreachable!()
    };
    assert_eq!(state.selected_course(), Some("SENG306"));
    assert_eq!(h.requests_to("/api/login").len(), 1);
}

#[test]
fn login_failure_shows_body_and_stays() {
    let mut h = Harness::start(
        Route::Login,
        vec![("/api/login", MockResponse::text(401, "Invalid credentials"))],
    );

    h.type_text("eda");
    h.next_field();
    h.type_text("nope");
    h.press(FormKey::Activate);

    assert!(h.pump_until(WAIT, |app| app.screen().alert().is_some()));
    assert_eq!(h.app.route(), Route::Login);
    let alert = h.app.screen().alert().unwrap();
    assert!(alert.is_error);
    assert_eq!(alert.message, "Login failed: Invalid credentials");

    h.press(FormKey::Escape);
    assert!(h.app.screen().alert().is_none());
}

#[test]
fn empty_login_sends_nothing() {
    let mut h = Harness::start(Route::Login, Vec::new());

    h.press(FormKey::Activate);
    let alert = h.app.screen().alert().expect("validation alert");
    assert_eq!(alert.message, "Please enter both username and password.");

    h.pump_for(Duration::from_millis(200));
    assert!(h.requests_to("/api/login").is_empty());
    assert_eq!(h.app.tasks_in_flight(), 0);
}

#[test]
fn repeated_submit_issues_one_request() {
    let mut h = Harness::start(
        Route::Login,
        vec![("/api/login", MockResponse::json("{}").with_delay(200))],
    );

    h.type_text("eda");
    h.next_field();
    h.type_text("secret");
    h.press(FormKey::Activate);
    h.press(FormKey::Activate);
    h.press(FormKey::Activate);

    assert!(h.pump_until(WAIT, |app| app.route() == Route::RequestForm));
    assert_eq!(h.requests_to("/api/login").len(), 1);
}

#[test]
fn signup_mismatch_sends_nothing() {
    let mut h = Harness::start(Route::Signup, Vec::new());

    for value in ["eda", "Eda K", "eda@example.com", "pw1", "pw2"] {
        h.type_text(value);
        h.next_field();
    }
    h.press(FormKey::Activate);

    let alert = h.app.screen().alert().expect("validation alert");
    assert_eq!(alert.message, "Passwords do not match.");
    h.pump_for(Duration::from_millis(200));
    assert!(h.requests_to("/api/register").is_empty());
}

#[test]
fn signup_success_returns_to_login_after_dismiss() {
    let mut h = Harness::start(
        Route::Signup,
        vec![("/api/register", MockResponse::created())],
    );

    for value in ["eda", "Eda K", "eda@example.com", "pw1", "pw1"] {
        h.type_text(value);
        h.next_field();
    }
    h.press(FormKey::Activate);

    assert!(h.pump_until(WAIT, |app| app.screen().alert().is_some()));
    assert_eq!(
        h.app.screen().alert().unwrap().message,
        "User registered successfully"
    );
    assert_eq!(h.app.route(), Route::Signup);

    h.press(FormKey::Activate);
    assert_eq!(h.app.route(), Route::Login);
}

#[test]
fn request_form_submission_reports_raw_error() {
    let mut h = Harness::start(
        Route::RequestForm,
        vec![
            ("/api/courses", courses()),
            (
                "/api/feedback_requests",
                MockResponse::with_status(500, r#"{"error":"db down"}"#),
            ),
        ],
    );
    assert!(h.pump_until(WAIT, |app| match app.screen() {
        Screen::RequestForm(state) => !state.courses.is_empty(),
        _ => false,
    }));

    // Course, Date, Topic
    h.next_field();
    h.next_field();
    h.type_text("T");
    h.next_field();
    h.press(FormKey::Activate);

    assert!(h.pump_until(WAIT, |app| app.screen().alert().is_some()));
    assert_eq!(
        h.app.screen().alert().unwrap().message,
        r#"Error submitting feedback request: {"error":"db down"}"#
    );

    let body = h.requests_to("/api/feedback_requests")[0].json();
    assert_eq!(body["topic"], "T");
    assert_eq!(body["date"], "2024-05-20T00:00:00Z");
    assert_eq!(body["courseName"], "SENG306");
}

#[test]
fn student_form_shows_request_header() {
    let mut h = Harness::start(
        Route::StudentForm,
        vec![
            ("/api/feedback_info", info()),
            ("/api/student_feedbacks", MockResponse::created()),
        ],
    );

    assert!(h.pump_until(WAIT, |app| match app.screen() {
        Screen::StudentForm(state) => state.summary_status == FetchStatus::Loaded,
        _ => false,
    }));
    let Screen::StudentForm(state) = h.app.screen() else {
        unreachable!()
    };
    assert_eq!(state.summary.topic, "Midterm");
    assert_eq!(state.summary.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

    h.type_text("good");
    h.next_field();
    h.type_text("dense");
    h.next_field();
    h.type_text("clear");
    h.next_field();
    h.press(FormKey::Activate);

    assert!(h.pump_until(WAIT, |app| app.screen().alert().is_some()));
    assert_eq!(
        h.app.screen().alert().unwrap().message,
        "Feedback submitted successfully"
    );
}

#[test]
fn detail_fetches_fail_independently() {
    let mut h = Harness::start(
        Route::Detail,
        vec![
            ("/api/stu_feedback", MockResponse::text(500, "boom")),
            ("/api/feedback_info", info()),
        ],
    );

    assert!(h.pump_until(WAIT, |app| match app.screen() {
        Screen::Detail(state) => {
            state.details_status != FetchStatus::Loading
                && state.summary_status != FetchStatus::Loading
        }
        _ => false,
    }));

    let Screen::Detail(state) = h.app.screen() else {
        unreachable!()
    };
    assert_eq!(state.details_status, FetchStatus::Unavailable);
    assert!(state.details.is_empty());
    assert_eq!(state.summary.topic, "Midterm");
    assert!(h.app.screen().alert().is_none());
}

#[test]
fn summary_details_navigates_to_detail() {
    let mut h = Harness::start(
        Route::Summary,
        vec![
            ("/api/courses", courses()),
            ("/api/feedback_info", info()),
            ("/api/stu_feedback", MockResponse::json("[]")),
        ],
    );

    // Course, Date, Details
    h.next_field();
    h.next_field();
    h.press(FormKey::Activate);
    assert_eq!(h.app.route(), Route::Detail);

    h.press(FormKey::Escape);
    assert_eq!(h.app.route(), Route::Summary);
}

#[test]
fn results_for_closed_screen_are_discarded() {
    let mut h = Harness::start(
        Route::Detail,
        vec![
            ("/api/stu_feedback", MockResponse::json("[]").with_delay(300)),
            ("/api/feedback_info", info().with_delay(300)),
            ("/api/courses", courses()),
        ],
    );
    let detail_generation = h.app.generation();
    assert_eq!(h.app.tasks_in_flight(), 2);

    h.app.navigate(Route::RequestForm);
    assert_ne!(h.app.generation(), detail_generation);

    // A result that raced the abort must not land on the new screen
    h.app.on_screen_event(
        detail_generation,
        ScreenMessage::Detail(DetailIntent::Back),
    );
    assert_eq!(h.app.route(), Route::RequestForm);

    h.pump_for(Duration::from_millis(600));
    assert_eq!(h.app.route(), Route::RequestForm);
    let Screen::RequestForm(state) = h.app.screen() else {
        unreachable!()
    };
    assert_eq!(state.phase, SubmitPhase::Idle);
}

#[test]
fn logout_returns_to_login() {
    let mut h = Harness::start(Route::RequestForm, vec![("/api/courses", courses())]);

    h.app.toggle_menu();
    assert!(h.app.menu_open());
    h.app.logout();
    assert_eq!(h.app.route(), Route::Login);
    assert!(!h.app.menu_open());

    // The menu belongs to the teacher screens only
    h.app.toggle_menu();
    assert!(!h.app.menu_open());
}

#[test]
fn malformed_courses_leave_request_form_empty() {
    let mut h = Harness::start(
        Route::RequestForm,
        vec![("/api/courses", MockResponse::json("not json"))],
    );

    assert!(h.pump_until(WAIT, |app| match app.screen() {
        Screen::RequestForm(state) => state.courses_status != FetchStatus::Loading,
        _ => false,
    }));

    let Screen::RequestForm(state) = h.app.screen() else {
        unreachable!()
    };
    assert_eq!(state.courses_status, FetchStatus::Unavailable);
    assert!(state.courses.is_empty());
    assert_eq!(state.selected_course(), None);
    assert!(h.app.screen().alert().is_none());
}

#[test]
fn malformed_courses_leave_summary_filter_at_all() {
    let mut h = Harness::start(
        Route::Summary,
        vec![
            ("/api/courses", MockResponse::json("not json")),
            ("/api/feedback_info", info()),
        ],
    );

    assert!(h.pump_until(WAIT, |app| app.tasks_in_flight() == 0));
    h.pump_for(Duration::from_millis(200));

    let Screen::Summary(state) = h.app.screen() else {
        unreachable!()
    };
    assert!(state.courses.is_empty());
    assert_eq!(state.filter_len(), 1);
    assert_eq!(state.filter_label(), "All Courses");
    assert_eq!(state.summary.topic, "Midterm");
    assert!(h.app.screen().alert().is_none());
}
