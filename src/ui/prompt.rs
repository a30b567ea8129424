//! dialoguer prompts for the interactive shell

use crate::types::{MenuItem, QualitySelector};
use dialoguer::{theme::ColorfulTheme, Input, Select};

/// Pick one item; `None` when the user backs out with Esc/q
pub fn select<T: Clone>(items: &[MenuItem<T>], prompt: &str, default: usize) -> Option<T> {
    if items.is_empty() {
        return None;
    }

    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(default.min(items.len() - 1))
        .interact_opt()
        .ok()
        .flatten()?;

    items.get(selection).map(|item| item.value.clone())
}

/// Menu entries for the six quality presets
pub fn quality_items() -> Vec<MenuItem<QualitySelector>> {
    QualitySelector::ALL
        .into_iter()
        .map(|q| MenuItem {
            label: q.label().to_string(),
            value: q,
        })
        .collect()
}

/// Choose a quality, preselecting `default`
pub fn choose_quality(default: QualitySelector) -> Option<QualitySelector> {
    select(&quality_items(), "Choose quality & format", default.menu_index())
}

/// Free-text prompt that accepts an empty answer
pub fn text(prompt: &str) -> dialoguer::Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
}
