//! Screen routing: which screen is shown and the messages addressed to it.

use chrono::NaiveDate;

use crate::ui::detail::{DetailIntent, DetailState};
use crate::ui::form::Alert;
use crate::ui::login::{LoginIntent, LoginState};
use crate::ui::request_form::{RequestFormIntent, RequestFormState};
use crate::ui::signup::{SignupIntent, SignupState};
use crate::ui::student_form::{StudentFormIntent, StudentFormState};
use crate::ui::summary::{SummaryIntent, SummaryState};

/// Navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Signup,
    RequestForm,
    StudentForm,
    Summary,
    Detail,
}

impl Route {
    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Signup => "Sign Up",
            Route::RequestForm => "Feedback Request",
            Route::StudentForm => "Student Feedback",
            Route::Summary => "Feedbacks",
            Route::Detail => "Feedback Details",
        }
    }

    /// Screens shown with the teacher navigation bar.
    pub fn is_teacher_area(self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }
}

/// What the shell needs to know about any screen state.
pub trait ScreenState {
    /// A submission is in flight.
    fn is_awaiting(&self) -> bool;

    /// Navigation requested by the last reduction.
    fn pending_route(&self) -> Option<Route>;

    /// Alert to draw over the screen.
    fn alert(&self) -> Option<Alert<'_>>;
}

/// The state of the visible screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login(LoginState),
    Signup(SignupState),
    RequestForm(RequestFormState),
    StudentForm(StudentFormState),
    Summary(SummaryState),
    Detail(DetailState),
}

impl Screen {
    /// Fresh state for `route`. Date fields start at `today`.
    pub fn initial(route: Route, today: NaiveDate) -> Self {
        match route {
            Route::Login => Screen::Login(LoginState::default()),
            Route::Signup => Screen::Signup(SignupState::default()),
            Route::RequestForm => Screen::RequestForm(RequestFormState::new(today)),
            Route::StudentForm => Screen::StudentForm(StudentFormState::new(today)),
            Route::Summary => Screen::Summary(SummaryState::new(today)),
            Route::Detail => Screen::Detail(DetailState::new(today)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Login(_) => Route::Login,
            Screen::Signup(_) => Route::Signup,
            Screen::RequestForm(_) => Route::RequestForm,
            Screen::StudentForm(_) => Route::StudentForm,
            Screen::Summary(_) => Route::Summary,
            Screen::Detail(_) => Route::Detail,
        }
    }

    fn state(&self) -> &dyn ScreenState {
        match self {
            Screen::Login(state) => state,
            Screen::Signup(state) => state,
            Screen::RequestForm(state) => state,
            Screen::StudentForm(state) => state,
            Screen::Summary(state) => state,
            Screen::Detail(state) => state,
        }
    }

    pub fn is_awaiting(&self) -> bool {
        self.state().is_awaiting()
    }

    pub fn pending_route(&self) -> Option<Route> {
        self.state().pending_route()
    }

    pub fn alert(&self) -> Option<Alert<'_>> {
        self.state().alert()
    }
}

/// Intent addressed to one screen, carried by result events.
#[derive(Debug, Clone)]
pub enum ScreenMessage {
    Login(LoginIntent),
    Signup(SignupIntent),
    RequestForm(RequestFormIntent),
    StudentForm(StudentFormIntent),
    Summary(SummaryIntent),
    Detail(DetailIntent),
}

impl ScreenMessage {
    /// Screen that can accept this message.
    pub fn route(&self) -> Route {
        match self {
            ScreenMessage::Login(_) => Route::Login,
            ScreenMessage::Signup(_) => Route::Signup,
            ScreenMessage::RequestForm(_) => Route::RequestForm,
            ScreenMessage::StudentForm(_) => Route::StudentForm,
            ScreenMessage::Summary(_) => Route::Summary,
            ScreenMessage::Detail(_) => Route::Detail,
        }
    }
}
