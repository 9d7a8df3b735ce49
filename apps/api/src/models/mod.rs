pub mod article;
pub mod classified;
pub mod event;
pub mod promotion;

pub use article::Article;
pub use classified::Classified;
pub use event::Event;
pub use promotion::{PromotionDisplay, PromotionWithCompany};
