use std::sync::mpsc::Sender;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::runtime::Handle;

use crate::api::{ApiClient, ApiError, ApiFailure};
use crate::models::{CourseList, FeedbackInfo};
use crate::ui::detail::{DetailIntent, DetailReducer};
use crate::ui::events::AppEvent;
use crate::ui::form::{FieldEdit, Step};
use crate::ui::login::{LoginIntent, LoginReducer};
use crate::ui::mvi::Reducer;
use crate::ui::request_form::{RequestFormIntent, RequestFormReducer};
use crate::ui::screen::{Route, Screen, ScreenMessage, ScreenState};
use crate::ui::signup::{SignupIntent, SignupReducer};
use crate::ui::student_form::{StudentFormIntent, StudentFormReducer};
use crate::ui::summary::{SummaryIntent, SummaryReducer};
use crate::ui::tasks::ScreenTasks;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
///
/// Evaluates to `true` when the reduction started a submission.
macro_rules! dispatch_mvi {
    ($state:expr, $reducer:ty, $intent:expr) => {{
        let was_awaiting = ScreenState::is_awaiting(&*$state);
        *$state = <$reducer>::reduce(std::mem::take(&mut *$state), $intent);
        !was_awaiting && ScreenState::is_awaiting(&*$state)
    }};
}

/// Key input after terminal-level decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Edit(FieldEdit),
    Focus(Step),
    /// Left/Right on a picker.
    Adjust(Step),
    Activate,
    Escape,
    ToggleVisibility,
}

pub struct App {
    api: Arc<ApiClient>,
    runtime: Handle,
    events: Sender<AppEvent>,
    screen: Screen,
    tasks: ScreenTasks,
    next_generation: u64,
    today: NaiveDate,
    teacher_name: String,
    menu_open: bool,
    should_quit: bool,
    tick: u8,
}

impl App {
    /// Creates the app and shows `start`, issuing its fetches.
    pub fn new(
        api: Arc<ApiClient>,
        runtime: Handle,
        events: Sender<AppEvent>,
        teacher_name: String,
        today: NaiveDate,
        start: Route,
    ) -> Self {
        let tasks = ScreenTasks::new(0, runtime.clone(), events.clone());
        let mut app = Self {
            api,
            runtime,
            events,
            screen: Screen::initial(start, today),
            tasks,
            next_generation: 0,
            today,
            teacher_name,
            menu_open: false,
            should_quit: false,
            tick: 0,
        };
        app.navigate(start);
        app
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn teacher_name(&self) -> &str {
        &self.teacher_name
    }

    pub fn tick(&self) -> u8 {
        self.tick
    }

    /// Generation of the visible screen's task scope.
    pub fn generation(&self) -> u64 {
        self.tasks.generation()
    }

    pub fn tasks_in_flight(&self) -> usize {
        self.tasks.in_flight()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Opens or closes the teacher menu. Only available on teacher screens.
    pub fn toggle_menu(&mut self) {
        if self.route().is_teacher_area() {
            self.menu_open = !self.menu_open;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn logout(&mut self) {
        tracing::info!("Logged out");
        self.navigate(Route::Login);
    }

    /// Replaces the visible screen with a fresh one.
    ///
    /// Tasks of the previous screen are aborted and their late results are
    /// rejected by generation.
    pub fn navigate(&mut self, route: Route) {
        self.next_generation += 1;
        self.tasks = ScreenTasks::new(
            self.next_generation,
            self.runtime.clone(),
            self.events.clone(),
        );
        self.screen = Screen::initial(route, self.today);
        self.menu_open = false;
        tracing::info!(
            screen = route.title(),
            generation = self.next_generation,
            "Screen shown"
        );
        self.load_screen_data();
    }

    /// Handles a task result. Results from a previous screen are dropped.
    pub fn on_screen_event(&mut self, generation: u64, message: ScreenMessage) {
        if generation != self.tasks.generation() {
            tracing::debug!(
                generation,
                current = self.tasks.generation(),
                target = message.route().title(),
                "Discarding result for a closed screen"
            );
            return;
        }
        self.dispatch(message);
    }

    pub fn dispatch(&mut self, message: ScreenMessage) {
        let started = match (&mut self.screen, message) {
            (Screen::Login(state), ScreenMessage::Login(intent)) => {
                dispatch_mvi!(state, LoginReducer, intent)
            }
            (Screen::Signup(state), ScreenMessage::Signup(intent)) => {
                dispatch_mvi!(state, SignupReducer, intent)
            }
            (Screen::RequestForm(state), ScreenMessage::RequestForm(intent)) => {
                dispatch_mvi!(state, RequestFormReducer, intent)
            }
            (Screen::StudentForm(state), ScreenMessage::StudentForm(intent)) => {
                dispatch_mvi!(state, StudentFormReducer, intent)
            }
            (Screen::Summary(state), ScreenMessage::Summary(intent)) => {
                dispatch_mvi!(state, SummaryReducer, intent)
            }
            (Screen::Detail(state), ScreenMessage::Detail(intent)) => {
                dispatch_mvi!(state, DetailReducer, intent)
            }
            (screen, message) => {
                tracing::debug!(
                    screen = screen.route().title(),
                    target = message.route().title(),
                    "Message for another screen ignored"
                );
                false
            }
        };

        if started {
            self.start_submission();
        }
        if let Some(route) = self.screen.pending_route() {
            self.navigate(route);
        }
    }

    /// Translates a decoded key into an intent for the visible screen.
    pub fn on_form_key(&mut self, key: FormKey) {
        if self.screen.alert().is_some() {
            if matches!(key, FormKey::Activate | FormKey::Escape) {
                if let Some(message) = self.dismiss_message() {
                    self.dispatch(message);
                }
            }
            return;
        }

        use ScreenMessage as M;
        let message = match (self.route(), key) {
            (Route::Login, FormKey::Edit(edit)) => M::Login(LoginIntent::Edit(edit)),
            (Route::Login, FormKey::Focus(step)) => M::Login(LoginIntent::Focus(step)),
            (Route::Login, FormKey::Activate) => M::Login(LoginIntent::Activate),

            (Route::Signup, FormKey::Edit(edit)) => M::Signup(SignupIntent::Edit(edit)),
            (Route::Signup, FormKey::Focus(step)) => M::Signup(SignupIntent::Focus(step)),
            (Route::Signup, FormKey::Activate) => M::Signup(SignupIntent::Activate),
            (Route::Signup, FormKey::Escape) => M::Signup(SignupIntent::Back),
            (Route::Signup, FormKey::ToggleVisibility) => {
                M::Signup(SignupIntent::TogglePasswordVisibility)
            }

            (Route::RequestForm, FormKey::Edit(edit)) => {
                M::RequestForm(RequestFormIntent::Edit(edit))
            }
            (Route::RequestForm, FormKey::Focus(step)) => {
                M::RequestForm(RequestFormIntent::Focus(step))
            }
            (Route::RequestForm, FormKey::Adjust(step)) => {
                M::RequestForm(RequestFormIntent::Adjust(step))
            }
            (Route::RequestForm, FormKey::Activate) => M::RequestForm(RequestFormIntent::Activate),

            (Route::StudentForm, FormKey::Edit(edit)) => {
                M::StudentForm(StudentFormIntent::Edit(edit))
            }
            (Route::StudentForm, FormKey::Focus(step)) => {
                M::StudentForm(StudentFormIntent::Focus(step))
            }
            (Route::StudentForm, FormKey::Activate) => M::StudentForm(StudentFormIntent::Activate),

            (Route::Summary, FormKey::Focus(step)) => M::Summary(SummaryIntent::Focus(step)),
            (Route::Summary, FormKey::Adjust(step)) => M::Summary(SummaryIntent::Adjust(step)),
            (Route::Summary, FormKey::Activate) => M::Summary(SummaryIntent::Activate),

            (Route::Detail, FormKey::Focus(step)) => M::Detail(DetailIntent::Scroll(step)),
            (Route::Detail, FormKey::Escape) => M::Detail(DetailIntent::Back),

            _ => return,
        };

        self.dispatch(message);
    }

    fn dismiss_message(&self) -> Option<ScreenMessage> {
        match self.route() {
            Route::Login => Some(ScreenMessage::Login(LoginIntent::DismissAlert)),
            Route::Signup => Some(ScreenMessage::Signup(SignupIntent::DismissAlert)),
            Route::RequestForm => Some(ScreenMessage::RequestForm(RequestFormIntent::DismissAlert)),
            Route::StudentForm => Some(ScreenMessage::StudentForm(StudentFormIntent::DismissAlert)),
            Route::Summary | Route::Detail => None,
        }
    }

    /// Spawns the request for a submission that just entered
    /// awaiting-response.
    fn start_submission(&mut self) {
        let api = Arc::clone(&self.api);
        match &self.screen {
            Screen::Login(state) => {
                let credentials = state.credentials();
                self.tasks.spawn("login", async move {
                    let result = api.login(&credentials).await;
                    ScreenMessage::Login(LoginIntent::Completed(submission_result("login", result)))
                });
            }
            Screen::Signup(state) => {
                let request = state.registration_request();
                self.tasks.spawn("register", async move {
                    let result = api.register(&request).await;
                    ScreenMessage::Signup(SignupIntent::Completed(submission_result(
                        "register", result,
                    )))
                });
            }
            Screen::RequestForm(state) => {
                let request = state.feedback_request();
                self.tasks.spawn("feedback_request", async move {
                    let result = api.create_feedback_request(&request).await;
                    ScreenMessage::RequestForm(RequestFormIntent::Completed(submission_result(
                        "feedback_request",
                        result,
                    )))
                });
            }
            Screen::StudentForm(state) => {
                let feedback = state.student_feedback();
                self.tasks.spawn("student_feedback", async move {
                    let result = api.submit_student_feedback(&feedback).await;
                    ScreenMessage::StudentForm(StudentFormIntent::Completed(submission_result(
                        "student_feedback",
                        result,
                    )))
                });
            }
            Screen::Summary(_) | Screen::Detail(_) => {}
        }
    }

    /// Issues the display-time fetches of the visible screen.
    fn load_screen_data(&mut self) {
        match self.screen.route() {
            Route::RequestForm => {
                self.fetch_courses(|courses| {
                    ScreenMessage::RequestForm(RequestFormIntent::CoursesLoaded(courses))
                });
            }
            Route::StudentForm => {
                self.fetch_info(|info| ScreenMessage::StudentForm(StudentFormIntent::InfoLoaded(info)));
            }
            Route::Summary => {
                self.fetch_info(|info| ScreenMessage::Summary(SummaryIntent::InfoLoaded(info)));
                self.fetch_courses(|courses| {
                    ScreenMessage::Summary(SummaryIntent::CoursesLoaded(courses))
                });
            }
            Route::Detail => {
                let api = Arc::clone(&self.api);
                self.tasks.spawn("stu_feedback", async move {
                    let details = fetched("stu_feedback", api.student_feedback().await);
                    ScreenMessage::Detail(DetailIntent::DetailsLoaded(details))
                });
                self.fetch_info(|info| ScreenMessage::Detail(DetailIntent::InfoLoaded(info)));
            }
            Route::Login | Route::Signup => {}
        }
    }

    fn fetch_courses(&mut self, wrap: fn(Vec<String>) -> ScreenMessage) {
        let api = Arc::clone(&self.api);
        self.tasks.spawn("courses", async move {
            let courses = fetched("courses", api.courses().await)
                .map(CourseList::into_inner)
                .unwrap_or_default();
            wrap(courses)
        });
    }

    fn fetch_info(&mut self, wrap: fn(Option<FeedbackInfo>) -> ScreenMessage) {
        let api = Arc::clone(&self.api);
        self.tasks.spawn("feedback_info", async move {
            wrap(fetched("feedback_info", api.feedback_info().await))
        });
    }
}

/// Maps a submission outcome for the reducer, logging failures.
fn submission_result(action: &'static str, result: Result<(), ApiError>) -> Result<(), ApiFailure> {
    match result {
        Ok(()) => {
            tracing::info!(action, "Submission accepted");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(action, error_type = err.error_type(), error = %err, "Submission failed");
            Err(ApiFailure::from(&err))
        }
    }
}

/// Display-only fetches degrade to `None` on failure.
fn fetched<T>(what: &'static str, result: Result<T, ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(fetch = what, error_type = err.error_type(), error = %err, "Fetch failed");
            None
        }
    }
}
