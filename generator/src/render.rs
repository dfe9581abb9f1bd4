//! Generated Lua data files and the locale file.
//!
//! Output is byte-stable: four-space indentation, entries separated by `,`
//! with none after the last, and no trailing newline.

use crate::icon::{Icon, Subgroups};
use crate::settings::GeneratorSettings;

const TAB: &str = "    ";

/// Wrap pre-rendered table entries in `data:extend({ ... })`.
fn data_extend(entries: &[String]) -> String {
    let mut out = String::from("data:extend({");
    out.push_str(&entries.join(","));
    out.push_str("\n})");
    out
}

/// One `{ key = "value", ... }` table at the first indentation level.
fn table(fields: &[(&str, &str)]) -> String {
    let body = fields
        .iter()
        .map(|(key, value)| format!("{TAB}{TAB}{key} = \"{value}\""))
        .collect::<Vec<_>>()
        .join(",\n");
    format!("\n{TAB}{{\n{body}\n{TAB}}}")
}

/// `signals.lua`: one virtual signal per icon.
pub fn render_signals(icons: &[Icon], settings: &GeneratorSettings) -> String {
    let entries: Vec<String> = icons
        .iter()
        .map(|icon| {
            let name = icon.signal_name();
            let path = icon.game_path(&settings.mod_name);
            table(&[
                ("type", "virtual-signal"),
                ("name", name.as_str()),
                ("icon", path.as_str()),
                ("subgroup", icon.subgroup.as_str()),
            ])
        })
        .collect();
    data_extend(&entries)
}

/// `groups.lua`: one item subgroup per distinct subgroup name.
pub fn render_groups(subgroups: &Subgroups, settings: &GeneratorSettings) -> String {
    let entries: Vec<String> = subgroups
        .iter()
        .map(|subgroup| {
            table(&[
                ("type", "item-subgroup"),
                ("name", subgroup),
                ("group", settings.group.as_str()),
            ])
        })
        .collect();
    data_extend(&entries)
}

/// Locale file naming the item group and every signal.
pub fn render_locale(icons: &[Icon], settings: &GeneratorSettings) -> String {
    let mut lines = vec![
        "[item-group-name]".to_string(),
        format!("{}={}", settings.group, settings.group_title),
        "[virtual-signal-name]".to_string(),
    ];
    lines.extend(
        icons
            .iter()
            .map(|icon| format!("{}={}", icon.signal_name(), icon.name)),
    );
    lines.join("\n")
}
