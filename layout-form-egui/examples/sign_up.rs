//! Sign-up page in a native window, validated as you type.
//!
//! Run with: cargo run -p layout-form-egui --example sign_up

use example_forms::Page;
use layout_form::FormFrontend;
use layout_form_egui::EguiFrontend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let page = Page::SignUp;
    let mut form = page.form()?;

    let frontend = EguiFrontend::new()
        .with_title(page.title())
        .with_description(page.description())
        .with_window_size([520.0, 640.0]);

    let values = frontend.run(&mut form)?;
    println!("Submitted {} fields", values.len());

    Ok(())
}
