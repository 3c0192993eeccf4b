pub mod decode;
pub mod error;
pub mod fit;
pub mod formats;
pub mod history;
