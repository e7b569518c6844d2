use std::path::PathBuf;

use anyhow::Result;
use inquire::ui::{Attributes, RenderConfig, StyleSheet, Styled};

use crate::{
    consts::{BASE_DIR_NAME, CONSOLE_BASE_URL, DEFAULT_GCLOUD_BIN, GCLOUD_ENV, HOME_ENV},
    errors::DigError,
};

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Configs {
    pub project_id: String,
    pub force_refresh: bool,
    pub print_only: bool,
    pub base_dir: PathBuf,
    pub gcloud_bin: String,
    pub console_base: String,
}

impl Configs {
    pub fn new(project_id: String, force_refresh: bool, print_only: bool) -> Result<Self> {
        Ok(Self {
            project_id,
            force_refresh,
            print_only,
            base_dir: Self::get_base_dir()?,
            gcloud_bin: Self::get_gcloud_bin(),
            console_base: CONSOLE_BASE_URL.to_owned(),
        })
    }

    pub fn get_base_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        let home_dir = dirs::home_dir().ok_or(DigError::NoHomeDirectory)?;
        Ok(home_dir.join(BASE_DIR_NAME))
    }

    pub fn get_gcloud_bin() -> String {
        std::env::var(GCLOUD_ENV)
            .ok()
            .filter(|bin| !bin.is_empty())
            .unwrap_or_else(|| DEFAULT_GCLOUD_BIN.to_owned())
    }

    pub fn get_render_config() -> RenderConfig<'static> {
        RenderConfig::default_colored()
            .with_help_message(
                StyleSheet::new()
                    .with_fg(inquire::ui::Color::LightMagenta)
                    .with_attr(Attributes::BOLD),
            )
            .with_answer(
                StyleSheet::new()
                    .with_fg(inquire::ui::Color::LightCyan)
                    .with_attr(Attributes::BOLD),
            )
            .with_prompt_prefix(
                Styled::new("?").with_style_sheet(
                    StyleSheet::new()
                        .with_fg(inquire::ui::Color::LightCyan)
                        .with_attr(Attributes::BOLD),
                ),
            )
    }
}
