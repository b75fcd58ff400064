//! One generator per target family.

pub mod alacritty;
pub mod css;
pub mod ghostty;
pub mod gimp;
pub mod kitty;
pub mod neovim;
pub mod vscode;
pub mod windows_terminal;
pub mod xresources;
