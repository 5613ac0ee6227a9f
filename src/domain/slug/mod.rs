pub mod clean;
pub mod kana;
pub mod services;

pub use clean::clean_romanized;
pub use kana::romanize_kana;
pub use services::{ResolvedSlug, SlugResolver, SlugSource};
