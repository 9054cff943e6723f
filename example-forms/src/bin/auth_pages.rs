//! auth-pages - render the sign-up and sign-in pages as HTML.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use example_forms::Page;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Render a demo page to HTML
#[derive(Parser)]
#[command(name = "auth-pages")]
#[command(about = "Render the sign-up and sign-in demo forms as HTML")]
#[command(version)]
struct Args {
    /// Page to render
    #[arg(short, long, value_enum, default_value = "sign-up")]
    page: Page,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave out the default stylesheet
    #[arg(long)]
    no_styles: bool,

    /// Emit only the form fragment instead of a complete document
    #[arg(long)]
    fragment: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render(args: &Args) -> anyhow::Result<String> {
    let form = args.page.form().context("failed to build the form")?;
    let options = args
        .page
        .html_options()
        .with_styles(!args.no_styles)
        .full_document(!args.fragment);

    Ok(layout_form_html::to_html(&form, &options))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    setup_logging(&args.log_level);

    let html = render(&args)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(page = args.page.title(), path = %path.display(), "page written");
        }
        None => print!("{html}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_a_styled_sign_up_document() {
        let args = Args::try_parse_from(["auth-pages"]).unwrap();
        assert_eq!(args.page, Page::SignUp);
        assert!(args.output.is_none());
        assert_eq!(args.log_level, "warn");

        let html = render(&args).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<title>Sign up</title>"));
        assert!(html.contains("Create account"));
    }

    #[test]
    fn sign_in_fragment_without_styles() {
        let args = Args::try_parse_from([
            "auth-pages",
            "--page",
            "sign-in",
            "--fragment",
            "--no-styles",
        ])
        .unwrap();

        let html = render(&args).unwrap();
        assert!(html.starts_with("<h2 class=\"form-description\">Welcome back</h2>"));
        assert!(!html.contains("<style>"));
        assert!(!html.contains("<html"));
        assert!(html.contains("Sign in with Github"));
        assert!(html.trim_end().ends_with("</form>"));
    }

    #[test]
    fn output_path_and_unknown_page() {
        let args =
            Args::try_parse_from(["auth-pages", "-p", "sign-in", "-o", "page.html"]).unwrap();
        assert_eq!(args.page, Page::SignIn);
        assert_eq!(args.output, Some(PathBuf::from("page.html")));

        assert!(Args::try_parse_from(["auth-pages", "--page", "reset"]).is_err());
    }
}
