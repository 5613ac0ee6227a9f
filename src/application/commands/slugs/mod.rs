mod register;
mod service;

pub use register::RegisterSlugCommand;
pub use service::SlugCommandService;
