//! Page handlers
//!
//! One handler per user-facing page: the search form and the two lookup
//! results. Lookup failures never surface as HTTP errors here - the service
//! returns sentinel views and the page always renders.

use application::WeatherView;
use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Form body for both lookup endpoints
#[derive(Debug, Deserialize)]
pub struct CityForm {
    /// City name as typed by the user
    pub city: String,
}

/// GET / - render the search form
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state
        .templates
        .render("index.html", &tera::Context::new())?;
    Ok(Html(html))
}

/// POST /city - today's weather for a city
#[instrument(skip(state, form), fields(city = %form.city))]
pub async fn today(
    State(state): State<AppState>,
    Form(form): Form<CityForm>,
) -> Result<Html<String>, ApiError> {
    let city = form.city.trim();
    let view = if city.is_empty() {
        // Blank input never spends an upstream call
        WeatherView::not_found(city)
    } else {
        state.lookup.lookup_today(city).await
    };

    render_view(&state, "weather.html", &view)
}

/// POST /tomorrow - tomorrow's weather and rain schedule for a city
#[instrument(skip(state, form), fields(city = %form.city))]
pub async fn tomorrow(
    State(state): State<AppState>,
    Form(form): Form<CityForm>,
) -> Result<Html<String>, ApiError> {
    let city = form.city.trim();
    let view = if city.is_empty() {
        WeatherView::not_found(city)
    } else {
        state.lookup.lookup_tomorrow(city).await
    };

    render_view(&state, "tomorrow.html", &view)
}

fn render_view(
    state: &AppState,
    template: &str,
    view: &WeatherView,
) -> Result<Html<String>, ApiError> {
    let mut context = tera::Context::new();
    context.insert("view", view);
    let html = state.templates.render(template, &context)?;
    Ok(Html(html))
}
