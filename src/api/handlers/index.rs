//! Landing page.

use axum::response::Html;

/// `GET /`
pub async fn index_handler() -> Html<&'static str> {
    Html("<h1>Pizza Restaurants API</h1>")
}
