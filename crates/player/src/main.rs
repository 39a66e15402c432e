//! Auction search player - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mabiauction_player::ShellKind;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mabiauction_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting auction search player");

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);

            ShellKind::from_width(width)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::env::var("MABIAUCTION_SHELL")
                .ok()
                .and_then(|s| ShellKind::from_env_value(&s))
                .unwrap_or_default()
        }
    };

    tracing::debug!(?shell, "Shell selected");

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let cfg = dioxus_desktop::Config::new().with_window(
            dioxus_desktop::WindowBuilder::new().with_title("경매장 상세 검색"),
        );
        builder = builder.with_cfg(cfg);
    }

    builder.with_context(shell).launch(mabiauction_player::app);
}
