//! `quad schools` — print the static school registry.

use quad_core::SCHOOLS;

pub fn handle() -> anyhow::Result<()> {
    for line in registry_lines() {
        println!("{line}");
    }
    Ok(())
}

/// One aligned line per registry entry; the `ALL` sentinel is labeled so
/// nobody mistakes it for a real school.
fn registry_lines() -> Vec<String> {
    let width = SCHOOLS
        .iter()
        .map(|s| s.short_name.len())
        .max()
        .unwrap_or(0);

    SCHOOLS
        .iter()
        .map(|school| {
            let suffix = if school.is_sentinel() { " (no filter)" } else { "" };
            format!(
                "{:width$}  {}  {}{suffix}",
                school.short_name, school.accent_color, school.long_name,
            )
        })
        .collect()
}
