use axum::Router;

mod test_cases;

use crate::ai::client::ModelApi;
use crate::state::AppState;

pub fn routes<C: ModelApi + 'static>() -> Router<AppState<C>> {
    Router::new().merge(test_cases::routes())
}
