use crate::ui::form::{cycle, Step, SubmitPhase};
use crate::ui::mvi::Reducer;
use crate::ui::screen::Route;
use crate::validation::validate_signup;

use super::intent::SignupIntent;
use super::state::{SignupField, SignupState};

pub const SIGNUP_SUCCEEDED: &str = "User registered successfully";
pub const SIGNUP_FAILED: &str = "Failed to register user";

pub struct SignupReducer;

impl Reducer for SignupReducer {
    type State = SignupState;
    type Intent = SignupIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SignupIntent::Edit(edit) => {
                let focus = state.focus;
                if let Some(field) = state.field_mut(focus) {
                    field.apply(edit);
                }
                state
            }

            SignupIntent::Focus(step) => {
                let next = cycle(state.focus.index(), SignupField::ORDER.len(), step);
                state.focus = SignupField::ORDER[next];
                state
            }

            SignupIntent::Activate => match state.focus {
                SignupField::SignUpButton => Self::reduce(state, SignupIntent::Submit),
                SignupField::BackButton => Self::reduce(state, SignupIntent::Back),
                _ => Self::reduce(state, SignupIntent::Focus(Step::Forward)),
            },

            SignupIntent::Submit => {
                if state.phase.is_awaiting() {
                    return state;
                }
                state.phase = match validate_signup(&state.fields()) {
                    Ok(()) => SubmitPhase::AwaitingResponse,
                    Err(err) => SubmitPhase::Failed {
                        message: err.to_string(),
                    },
                };
                state
            }

            SignupIntent::TogglePasswordVisibility => {
                let masked = !state.password.masked;
                state.password.masked = masked;
                state.confirm_password.masked = masked;
                state
            }

            SignupIntent::Completed(result) => {
                if !state.phase.is_awaiting() {
                    return state;
                }
                state.phase = SubmitPhase::complete(result, SIGNUP_SUCCEEDED, SIGNUP_FAILED);
                state
            }

            SignupIntent::DismissAlert => {
                // A confirmed registration leaves the screen once acknowledged
                if matches!(state.phase, SubmitPhase::Succeeded { .. }) {
                    state.route = Some(Route::Login);
                }
                if state.phase.is_finished() {
                    state.phase = SubmitPhase::Idle;
                }
                state
            }

            SignupIntent::Back => {
                if !state.phase.is_awaiting() {
                    state.route = Some(Route::Login);
                }
                state
            }
        }
    }
}
