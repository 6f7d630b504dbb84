pub mod error;
pub mod models;
pub mod tally;
pub mod board;
pub mod departments;
pub mod config;
pub mod channel;

pub use error::{Error, ErrorCode, Result};
pub use models::*;
pub use tally::{DepartmentStats, Totals, percent};
pub use board::Board;
pub use departments::{parse_department_file, IngestError};
pub use config::{ClientConfig, ConfigFile};
pub use channel::{Frame, Packet, ServerEvent, ReconnectPolicy, FrameError};

#[cfg(test)]
mod tests;
