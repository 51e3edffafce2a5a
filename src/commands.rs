//! # Commands Module / 命令模块
//!
//! The pipeline driver behind the command-line interface.
//! 命令行接口背后的流水线驱动。

pub mod run;
