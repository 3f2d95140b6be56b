//! Starter-kit templates written by `pageflow export`.
//!
//! Static text only; the export command packages these into files (and
//! optionally the clipboard) as a side-effect-only action.

/// Annotated configuration file with every knob at its default.
pub const CONFIG_TEMPLATE: &str = r#"# Pageflow configuration
# Place this file at ~/.config/pageflow/config.toml

[general]
log_level = "info"

[motion]
# A scroll burst is "time fast" when the mean interval between the last
# three events drops below this (milliseconds).
fast_interval_ms = 150
# ...and "magnitude high" when their mean magnitude exceeds this.
high_magnitude = 50.0
# Rolling history capacity.
history_len = 5
# Quiet period after which the fast streak resets (milliseconds).
idle_reset_ms = 800
# Transition durations per speed tier (milliseconds).
normal_ms = 1200
fast_ms = 700
ultra_fast_ms = 400
# Delay before the active indicator swaps to the target section.
prepare_delay_ms = 30
# Drag gestures: minimum distance (terminal rows) and maximum duration.
swipe_threshold_rows = 3.0
swipe_window_ms = 300
# Magnitude contributed by one wheel event.
wheel_step = 30.0

[ui]
tick_rate_ms = 33
show_dots = true
show_hint = true
hint_dim_ms = 8000
# Background effect: "drift" or "off"
effects = "drift"
"#;

/// Minimal two-section deck to start from.
pub const DECK_TEMPLATE: &str = r#"# A Pageflow deck: one [[section]] per full-screen panel.
# Run it with: pageflow run --deck deck.toml

[[section]]
title = "First section"
tagline = "Scroll down to continue"
body = [
    "Each section fills the whole terminal.",
    "Body lines are rendered centered.",
]

[[section]]
title = "Second section"
tagline = "That's the idea"
body = [
    "Add as many sections as you like.",
]
"#;

/// README accompanying the exported starter kit.
pub const README_TEMPLATE: &str = r#"# Pageflow starter kit

Adaptive fullpage section navigation for the terminal.

## Files

- `config.toml` — every tuning knob with its default value; copy to
  `~/.config/pageflow/config.toml` and edit.
- `deck.toml` — a minimal deck to build on.

## Usage

```sh
pageflow run --deck deck.toml
```

## Keys

| Key                  | Action              |
|----------------------|---------------------|
| Down / PageDown / Space | next section     |
| Up / PageUp          | previous section    |
| Home / g             | first section       |
| End / G              | last section        |
| 1-9                  | jump to section     |
| e                    | toggle effects      |
| ?                    | help                |
| q                    | quit                |

Mouse wheel scrolls between sections; a quick click-drag swipes; clicking a
navigation dot jumps straight to that section. Scroll faster and the
transitions speed up to match.

License: MIT
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::deck::Deck;

    #[test]
    fn test_config_template_parses() {
        let config: AppConfig = toml::from_str(CONFIG_TEMPLATE).expect("template parses");
        assert_eq!(config.motion.normal_ms, 1200);
    }

    #[test]
    fn test_deck_template_parses() {
        let deck = Deck::from_toml_str(DECK_TEMPLATE).expect("template parses");
        assert_eq!(deck.len(), 2);
    }
}
