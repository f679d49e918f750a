//! Host-facing commands.
//!
//! The host exposes these through whatever console or remote-control surface
//! it has; the overlay only defines the names and the parsing. A missing or
//! unparseable required argument is a silent no-op, never an error.

/// A parsed host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Toggle the input focus between the game and the overlay.
    ToggleInput,
    /// Disable overlay input.
    DisableInput,
    /// Reset every window to its default screen location and clear persisted
    /// layout state.
    ResetLayout,
    /// Load the layout saved in this slot.
    LoadLayout(usize),
    /// Save the current layout into this slot.
    SaveLayout(usize),
}

pub const TOGGLE_INPUT: &str = "Cog.ToggleInput";
pub const DISABLE_INPUT: &str = "Cog.DisableInput";
pub const RESET_LAYOUT: &str = "Cog.ResetLayout";
pub const LOAD_LAYOUT: &str = "Cog.LoadLayout";
pub const SAVE_LAYOUT: &str = "Cog.SaveLayout";

/// All command names, for host-side registration.
pub const ALL: [&str; 5] = [
    TOGGLE_INPUT,
    DISABLE_INPUT,
    RESET_LAYOUT,
    LOAD_LAYOUT,
    SAVE_LAYOUT,
];

/// Parse a command invocation. Returns `None` for unknown commands and for
/// layout commands missing their index argument.
pub fn parse(name: &str, args: &[&str]) -> Option<HostCommand> {
    match name {
        TOGGLE_INPUT => Some(HostCommand::ToggleInput),
        DISABLE_INPUT => Some(HostCommand::DisableInput),
        RESET_LAYOUT => Some(HostCommand::ResetLayout),
        LOAD_LAYOUT => parse_index(args).map(HostCommand::LoadLayout),
        SAVE_LAYOUT => parse_index(args).map(HostCommand::SaveLayout),
        _ => None,
    }
}

fn parse_index(args: &[&str]) -> Option<usize> {
    args.first()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse("Cog.ToggleInput", &[]), Some(HostCommand::ToggleInput));
        assert_eq!(parse("Cog.DisableInput", &[]), Some(HostCommand::DisableInput));
        assert_eq!(parse("Cog.ResetLayout", &[]), Some(HostCommand::ResetLayout));
    }

    #[test]
    fn test_parse_layout_commands() {
        assert_eq!(parse("Cog.LoadLayout", &["2"]), Some(HostCommand::LoadLayout(2)));
        assert_eq!(parse("Cog.SaveLayout", &["0"]), Some(HostCommand::SaveLayout(0)));
    }

    #[test]
    fn test_missing_argument_is_a_noop() {
        assert_eq!(parse("Cog.LoadLayout", &[]), None);
        assert_eq!(parse("Cog.SaveLayout", &[]), None);
        assert_eq!(parse("Cog.LoadLayout", &["two"]), None);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(parse("Cog.DoesNotExist", &[]), None);
    }
}
