//! Pipeline module - scanning, conversion and batch orchestration

pub mod batch;
pub mod converter;
pub mod eraser;
pub mod error;
pub mod headers;
pub mod row;
pub mod scanner;
pub mod settings;

pub use batch::*;
pub use converter::*;
pub use eraser::*;
pub use error::{ConvertError, Result};
pub use headers::*;
pub use row::*;
pub use scanner::*;
pub use settings::*;
