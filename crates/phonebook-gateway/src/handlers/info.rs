use crate::error::Result;
use crate::state::AppState;
use axum::extract::State;
use axum::response::Html;
use jiff::Zoned;

pub async fn info_handler(State(state): State<AppState>) -> Result<Html<String>> {
    let count = state.store().count().await?;
    Ok(Html(render_info(count, &Zoned::now())))
}

/// Renders the info page fragment for `count` records at time `now`.
pub fn render_info(count: usize, now: &Zoned) -> String {
    format!(
        "<div>\n  <p>Phonebook has info for {count} people</p>\n  <p>{}</p>\n</div>",
        now.strftime("%a %b %d %Y %H:%M:%S GMT%z (%Z)")
    )
}
