use crate::ui::form::{FetchStatus, Step};
use crate::ui::mvi::Reducer;
use crate::ui::screen::Route;

use super::intent::DetailIntent;
use super::state::DetailState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Scroll(step) => {
                let last = state.details.len().saturating_sub(1);
                state.scroll = match step {
                    Step::Forward => (state.scroll + 1).min(last),
                    Step::Back => state.scroll.saturating_sub(1),
                };
                state
            }

            DetailIntent::DetailsLoaded(details) => {
                match details {
                    Some(details) => {
                        state.details = details;
                        state.details_status = FetchStatus::Loaded;
                    }
                    None => state.details_status = FetchStatus::Unavailable,
                }
                state.scroll = 0;
                state
            }

            DetailIntent::InfoLoaded(info) => {
                state.summary_status = match info {
                    Some(info) => {
                        state.summary.apply(&info);
                        FetchStatus::Loaded
                    }
                    None => FetchStatus::Unavailable,
                };
                state
            }

            DetailIntent::Back => {
                state.route = Some(Route::Summary);
                state
            }
        }
    }
}
