pub(super) use crate::config::*;
pub(super) use anyhow::{Context, Result};
pub(super) use clap::Parser;
pub(super) use colored::Colorize;

pub mod dig;
