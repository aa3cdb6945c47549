pub mod analysis;
pub mod entity;
pub mod factory;
pub mod value_objects;

pub use analysis::WordFrequencies;
pub use entity::Article;
pub use factory::ArticleFactory;
pub use value_objects::ArticleId;
