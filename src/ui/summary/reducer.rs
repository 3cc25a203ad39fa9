use crate::ui::form::{cycle, shift_date, FetchStatus};
use crate::ui::mvi::Reducer;
use crate::ui::screen::Route;

use super::intent::SummaryIntent;
use super::state::{SummaryField, SummaryState};

pub struct SummaryReducer;

impl Reducer for SummaryReducer {
    type State = SummaryState;
    type Intent = SummaryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummaryIntent::Focus(step) => {
                let next = cycle(state.focus.index(), SummaryField::ORDER.len(), step);
                state.focus = SummaryField::ORDER[next];
                state
            }

            SummaryIntent::Adjust(step) => {
                match state.focus {
                    SummaryField::Course => {
                        state.course_filter = cycle(state.course_filter, state.filter_len(), step);
                    }
                    SummaryField::Date => {
                        state.summary.date = shift_date(state.summary.date, step);
                    }
                    SummaryField::Details => {}
                }
                state
            }

            SummaryIntent::Activate => {
                if state.focus == SummaryField::Details {
                    state.route = Some(Route::Detail);
                }
                state
            }

            SummaryIntent::InfoLoaded(info) => {
                state.summary_status = match info {
                    Some(info) => {
                        state.summary.apply(&info);
                        FetchStatus::Loaded
                    }
                    None => FetchStatus::Unavailable,
                };
                state
            }

            SummaryIntent::CoursesLoaded(courses) => {
                if state.course_filter > courses.len() {
                    state.course_filter = 0;
                }
                state.courses = courses;
                state
            }
        }
    }
}
