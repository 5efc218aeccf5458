pub mod config;
pub mod feed;
pub mod markup;
pub mod page;
pub mod tile;
pub mod youtube;

pub use config::Config;
pub use page::Page;
pub use youtube::YouTube;
