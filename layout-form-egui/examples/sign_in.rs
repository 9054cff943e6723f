//! Sign-in page in a native window, validated on blur and submit.
//!
//! Run with: cargo run -p layout-form-egui --example sign_in

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

    let page = Page::SignIn;
    let mut form = page.form()?;

    let frontend = EguiFrontend::new()
        .with_title(page.title())
        .with_description(page.description())
        .with_window_size([420.0, 420.0]);

    match frontend.run(&mut form) {
        Ok(values) => println!("Signed in as {}", values.get_text("email")?),
        Err(layout_form_egui::EguiError::Cancelled) => println!("Cancelled"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
