use crate::ui::form::{cycle, shift_date, FetchStatus, Step, SubmitPhase};
use crate::ui::mvi::Reducer;

use super::intent::RequestFormIntent;
use super::state::{RequestField, RequestFormState};

pub const REQUEST_SUBMITTED: &str = "Feedback request submitted successfully";
pub const REQUEST_FAILED: &str = "Error submitting feedback request";

pub struct RequestFormReducer;

impl Reducer for RequestFormReducer {
    type State = RequestFormState;
    type Intent = RequestFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RequestFormIntent::Edit(edit) => {
                if state.focus == RequestField::Topic {
                    state.topic.apply(edit);
                }
                state
            }

            RequestFormIntent::Focus(step) => {
                let next = cycle(state.focus.index(), RequestField::ORDER.len(), step);
                state.focus = RequestField::ORDER[next];
                state
            }

            RequestFormIntent::Adjust(step) => {
                match state.focus {
                    RequestField::Course => {
                        state.selected_course =
                            cycle(state.selected_course, state.courses.len(), step);
                    }
                    RequestField::Date => state.date = shift_date(state.date, step),
                    RequestField::Topic | RequestField::Submit => {}
                }
                state
            }

            RequestFormIntent::Activate => match state.focus {
                RequestField::Submit => Self::reduce(state, RequestFormIntent::Submit),
                _ => Self::reduce(state, RequestFormIntent::Focus(Step::Forward)),
            },

            RequestFormIntent::Submit => {
                if !state.phase.is_awaiting() {
                    state.phase = SubmitPhase::AwaitingResponse;
                }
                state
            }

            RequestFormIntent::CoursesLoaded(courses) => {
                // Keep the chosen course when it is still offered
                let previous = state.selected_course().map(str::to_owned);
                state.selected_course = previous
                    .and_then(|name| courses.iter().position(|c| *c == name))
                    .unwrap_or(0);
                state.courses_status = if courses.is_empty() {
                    FetchStatus::Unavailable
                } else {
                    FetchStatus::Loaded
                };
                state.courses = courses;
                state
            }

            RequestFormIntent::Completed(result) => {
                if !state.phase.is_awaiting() {
                    return state;
                }
                state.phase = SubmitPhase::complete(result, REQUEST_SUBMITTED, REQUEST_FAILED);
                state
            }

            RequestFormIntent::DismissAlert => {
                if state.phase.is_finished() {
                    state.phase = SubmitPhase::Idle;
                }
                state
            }
        }
    }
}
