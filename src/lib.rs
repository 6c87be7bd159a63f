//! 증발기 기하 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod display;
pub mod geometry;
pub mod logging;
pub mod reference;
pub mod session;
pub mod ui_cli;
