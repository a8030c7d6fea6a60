use crate::error::ApiError;
use axum::extract::FromRequest;

pub mod calculate;
pub mod generate;
pub mod health;

pub use calculate::{calculate_schedule_c, calculate_schedule_e};
pub use generate::{generate_schedule_c, generate_schedule_e};
pub use health::{health_check, root};

/// JSON body extractor whose rejections answer with a `detail` body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct FormJson<T>(pub T);
