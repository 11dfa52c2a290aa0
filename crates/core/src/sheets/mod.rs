//! Spreadsheet access: the gateway port plus row append and title lookup

pub mod ports;
pub mod rows;
pub mod title;

pub use ports::*;
pub use rows::RowAppender;
pub use title::TitleService;
