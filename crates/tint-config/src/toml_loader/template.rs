//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# tint configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[theme]
name = "flexoki"           # flexoki, paper, midnight, a user theme name or a path
# provider = "vscode"      # whose stored overrides apply

[export]
# mode = "light"           # light, dark
# out_dir = "tint-out"
# targets = [
#   "vscode", "vscode-legacy", "vscode-classic",
#   "alacritty-yaml", "alacritty-toml", "ghostty", "kitty",
#   "windows-terminal", "gimp", "xresources", "neovim", "css",
# ]

[storage]
# dir = "/path/to/tint"    # defaults to the platform data directory
# autosave_debounce_ms = 800   # 50-60000

[logging]
# level = "INFO"           # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
