//! Reducer for the login screen.

use crate::ui::form::{cycle, SubmitPhase};
use crate::ui::mvi::Reducer;
use crate::ui::screen::Route;
use crate::validation::validate_credentials;

use super::intent::LoginIntent;
use super::state::{LoginField, LoginState};

pub const LOGIN_SUCCEEDED: &str = "Login successful";
pub const LOGIN_FAILED: &str = "Login failed";

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginState;
    type Intent = LoginIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::Edit(edit) => {
                match state.focus {
                    LoginField::Username => state.username.apply(edit),
                    LoginField::Password => state.password.apply(edit),
                    LoginField::LoginButton | LoginField::RegisterButton => {}
                }
                state
            }

            LoginIntent::Focus(step) => {
                let next = cycle(state.focus.index(), LoginField::ORDER.len(), step);
                state.focus = LoginField::ORDER[next];
                state
            }

            LoginIntent::Activate => match state.focus {
                LoginField::RegisterButton => {
                    state.route = Some(Route::Signup);
                    state
                }
                _ => Self::reduce(state, LoginIntent::Submit),
            },

            LoginIntent::Submit => {
                if state.phase.is_awaiting() {
                    return state;
                }
                state.phase =
                    match validate_credentials(&state.username.value, &state.password.value) {
                        Ok(()) => SubmitPhase::AwaitingResponse,
                        Err(err) => SubmitPhase::Failed {
                            message: err.to_string(),
                        },
                    };
                state
            }

            LoginIntent::Completed(result) => {
                // Only the in-flight request may finish the submission
                if !state.phase.is_awaiting() {
                    return state;
                }
                let succeeded = result.is_ok();
                state.phase = SubmitPhase::complete(result, LOGIN_SUCCEEDED, LOGIN_FAILED);
                if succeeded {
                    state.route = Some(Route::RequestForm);
                }
                state
            }

            LoginIntent::DismissAlert => {
                if state.phase.is_finished() {
                    state.phase = SubmitPhase::Idle;
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiFailure;
    use crate::ui::form::{FieldEdit, Step};

    fn typed(state: LoginState, text: &str) -> LoginState {
        text.chars().fold(state, |state, ch| {
            LoginReducer::reduce(state, LoginIntent::Edit(FieldEdit::Insert(ch)))
        })
    }

    fn filled() -> LoginState {
        let state = typed(LoginState::default(), "eda");
        let state = LoginReducer::reduce(state, LoginIntent::Focus(Step::Forward));
        typed(state, "secret")
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let state = filled();
        assert_eq!(state.username.value, "eda");
        assert_eq!(state.password.value, "secret");
    }

    #[test]
    fn empty_fields_fail_without_request() {
        let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Submit);
        assert_eq!(
            state.phase,
            SubmitPhase::Failed {
                message: "Please enter both username and password.".into()
            }
        );
    }

    #[test]
    fn valid_submit_awaits_response() {
        let state = LoginReducer::reduce(filled(), LoginIntent::Submit);
        assert!(state.phase.is_awaiting());
        assert_eq!(state.route, None);
    }

    #[test]
    fn success_routes_to_request_form() {
        let state = LoginReducer::reduce(filled(), LoginIntent::Submit);
        let state = LoginReducer::reduce(state, LoginIntent::Completed(Ok(())));
        assert_eq!(state.route, Some(Route::RequestForm));
    }

    #[test]
    fn failure_shows_raw_body() {
        let state = LoginReducer::reduce(filled(), LoginIntent::Submit);
        let state = LoginReducer::reduce(
            state,
            LoginIntent::Completed(Err(ApiFailure::Status {
                status: 401,
                body: "Invalid credentials".into(),
            })),
        );
        assert_eq!(
            state.phase,
            SubmitPhase::Failed {
                message: "Login failed: Invalid credentials".into()
            }
        );
        assert_eq!(state.route, None);
    }

    #[test]
    fn dismiss_returns_to_idle() {
        let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Submit);
        let state = LoginReducer::reduce(state, LoginIntent::DismissAlert);
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn completion_without_request_is_ignored() {
        let state = LoginReducer::reduce(filled(), LoginIntent::Completed(Ok(())));
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert_eq!(state.route, None);
    }

    #[test]
    fn activate_on_register_opens_signup() {
        let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Focus(Step::Back));
        assert_eq!(state.focus, LoginField::RegisterButton);
        let state = LoginReducer::reduce(state, LoginIntent::Activate);
        assert_eq!(state.route, Some(Route::Signup));
        assert_eq!(state.phase, SubmitPhase::Idle);
    }

    #[test]
    fn edits_on_buttons_are_ignored() {
        let state = LoginReducer::reduce(LoginState::default(), LoginIntent::Focus(Step::Back));
        let state = LoginReducer::reduce(state, LoginIntent::Edit(FieldEdit::Insert('x')));
        assert_eq!(state.username.value, "");
        assert_eq!(state.password.value, "");
    }
}
