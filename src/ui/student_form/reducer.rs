use crate::ui::form::{cycle, FetchStatus, Step, SubmitPhase};
use crate::ui::mvi::Reducer;

use super::intent::StudentFormIntent;
use super::state::{StudentField, StudentFormState};

pub const FEEDBACK_SUBMITTED: &str = "Feedback submitted successfully";
pub const FEEDBACK_FAILED: &str = "Error submitting feedback";

pub struct StudentFormReducer;

impl Reducer for StudentFormReducer {
    type State = StudentFormState;
    type Intent = StudentFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StudentFormIntent::Edit(edit) => {
                let focus = state.focus;
                if let Some(field) = state.field_mut(focus) {
                    field.apply(edit);
                }
                state
            }

            StudentFormIntent::Focus(step) => {
                let next = cycle(state.focus.index(), StudentField::ORDER.len(), step);
                state.focus = StudentField::ORDER[next];
                state
            }

            StudentFormIntent::Activate => match state.focus {
                StudentField::Submit => Self::reduce(state, StudentFormIntent::Submit),
                _ => Self::reduce(state, StudentFormIntent::Focus(Step::Forward)),
            },

            StudentFormIntent::Submit => {
                if !state.phase.is_awaiting() {
                    state.phase = SubmitPhase::AwaitingResponse;
                }
                state
            }

            StudentFormIntent::InfoLoaded(info) => {
                state.summary_status = match info {
                    Some(info) => {
                        state.summary.apply(&info);
                        FetchStatus::Loaded
                    }
                    None => FetchStatus::Unavailable,
                };
                state
            }

            StudentFormIntent::Completed(result) => {
                if !state.phase.is_awaiting() {
                    return state;
                }
                state.phase = SubmitPhase::complete(result, FEEDBACK_SUBMITTED, FEEDBACK_FAILED);
                state
            }

            StudentFormIntent::DismissAlert => {
                if state.phase.is_finished() {
                    state.phase = SubmitPhase::Idle;
                }
                state
            }
        }
    }
}
