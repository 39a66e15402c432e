use dioxus::prelude::*;

pub mod presentation;

use presentation::views::AuctionView;

/// Window widths below this are laid out with the mobile shell.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

const PLAYER_CSS: &str = include_str!("../../assets/css/player.css");

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from `main`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    pub fn is_mobile(self) -> bool {
        matches!(self, ShellKind::Mobile)
    }

    /// Parse a `MABIAUCTION_SHELL` value. Unknown values yield `None`.
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "desktop" => Some(ShellKind::Desktop),
            "mobile" => Some(ShellKind::Mobile),
            _ => None,
        }
    }

    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            ShellKind::Mobile
        } else {
            ShellKind::Desktop
        }
    }
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();

    rsx! {
        style { "{PLAYER_CSS}" }

        {
            match shell {
                ShellKind::Desktop => rsx! {
                    DesktopShell {
                        AuctionView {}
                    }
                },
                ShellKind::Mobile => rsx! {
                    MobileShell {
                        AuctionView {}
                    }
                },
            }
        }
    }
}

#[component]
fn DesktopShell(children: Element) -> Element {
    rsx! {
        div {
            style: "width: 100vw; height: 100vh; overflow: hidden;",
            {children}
        }
    }
}

#[component]
fn MobileShell(children: Element) -> Element {
    rsx! {
        div {
            style: "width: 100vw; min-height: 100vh; overflow-y: auto;",
            {children}
        }
    }
}
