mod generate;
mod prompt;
mod service;

pub use generate::{GetDescriptionCommand, MAX_GENERATION_ATTEMPTS};
pub use service::DescriptionCommandService;
