pub mod config;
pub mod error;
pub mod skills;

pub use config::*;
pub use error::SkillError;
pub use skills::*;
