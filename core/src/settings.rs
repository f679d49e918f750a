//! Layout settings codec.
//!
//! Serializes window visibility and widget ordering to a line-oriented text
//! blob with two sections:
//!
//! ```text
//! [Cog][Windows]
//! 0xB5D96693 1
//! 0xBF3390B5 0
//!
//! [Cog][Widgets]
//! 0x639F1181 1
//! 0x52BDE3E0 1
//! ```
//!
//! Each line is `0x%08X %d`: the window's stable identity and a flag
//! (show-submenu for windows, visible for widgets). Loading is best-effort:
//! malformed lines and unknown identities are skipped, unknown sections are
//! ignored. Widgets are listed in display order; on load each parsed line is
//! assigned a strictly increasing order index and the widget list is re-sorted
//! by those indices once the whole blob has been read, so the on-disk order
//! becomes the render order.

use std::fmt::Write as _;

use crate::registry::WindowRegistry;
use crate::window::WindowId;

const WINDOWS_SECTION: &str = "[Cog][Windows]";
const WIDGETS_SECTION: &str = "[Cog][Widgets]";

/// Parse state while streaming lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Windows,
    Widgets { next_order: u32 },
}

/// Serialize the registry's visibility and widget order to a settings blob.
pub fn write_layout(registry: &WindowRegistry) -> String {
    let mut out = String::new();

    out.push_str(WINDOWS_SECTION);
    out.push('\n');
    for entry in registry.iter() {
        if entry.visible {
            let _ = writeln!(out, "{} {}", entry.id(), entry.show_menu as i32);
        }
    }
    out.push('\n');

    out.push_str(WIDGETS_SECTION);
    out.push('\n');
    for id in registry.widget_ids() {
        if let Some(entry) = registry.find(*id) {
            let _ = writeln!(out, "{} {}", entry.id(), entry.widget_visible as i32);
        }
    }
    out.push('\n');

    out
}

/// Apply a settings blob to the registry.
///
/// Phase 1 streams the lines: window lines mark the window visible and set
/// its show-submenu flag; widget lines record visibility and an order index
/// counted per parsed line (unknown identities still consume an index so the
/// remaining entries keep their relative order). Phase 2 re-sorts the widget
/// display order by the recorded indices.
///
/// Callers decide what happens to windows not listed; loading a layout
/// typically hides everything first.
pub fn read_layout(registry: &mut WindowRegistry, text: &str) {
    let mut section = Section::None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            section = match line {
                WINDOWS_SECTION => Section::Windows,
                WIDGETS_SECTION => Section::Widgets { next_order: 0 },
                _ => Section::None,
            };
            continue;
        }

        match &mut section {
            Section::None => {}
            Section::Windows => {
                let Some((id, show_menu)) = parse_entry_line(line) else {
                    tracing::trace!("skipping malformed windows line: {line:?}");
                    continue;
                };
                if let Some(entry) = registry.find_mut(id) {
                    entry.visible = true;
                    entry.show_menu = show_menu > 0;
                }
            }
            Section::Widgets { next_order } => {
                let Some((id, visible)) = parse_entry_line(line) else {
                    tracing::trace!("skipping malformed widgets line: {line:?}");
                    continue;
                };
                let order = *next_order;
                *next_order += 1;
                if let Some(entry) = registry.find_mut(id) {
                    entry.set_widget_order(order);
                    entry.widget_visible = visible > 0;
                }
            }
        }
    }

    registry.sort_widgets_by_order();
}

/// Parse one `0x%08X %d` line. Returns `None` on any deviation.
fn parse_entry_line(line: &str) -> Option<(WindowId, i32)> {
    let mut tokens = line.split_whitespace();
    let id = tokens.next()?;
    let flag = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let hex = id.strip_prefix("0x").or_else(|| id.strip_prefix("0X"))?;
    let id = u32::from_str_radix(hex, 16).ok()?;
    let flag = flag.parse::<i32>().ok()?;
    Some((WindowId(id), flag))
}
