//! Application layer - Use cases and orchestration
//!
//! Defines the weather port, the view-model handed to the rendering layer,
//! and the lookup service that sequences geocoding, current weather, and the
//! tomorrow-rain forecast into one renderable view.

pub mod error;
pub mod ports;
pub mod services;
pub mod view;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use view::WeatherView;
