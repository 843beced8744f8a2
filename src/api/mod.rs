pub mod error;
pub mod handlers;

pub use error::ApiError;
pub use handlers::{
    health, recommend_by_budget, recommend_by_country, recommend_by_language,
    recommend_by_rating, recommend_by_title,
};
