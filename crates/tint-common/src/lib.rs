pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, KeyError, RenderError, StoreError, ThemeError, TintError};
pub use id::{new_id, ProviderId, ThemeId, UserId};
pub use types::{Color, Mode};

pub type Result<T> = std::result::Result<T, TintError>;
