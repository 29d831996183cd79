mod args;
mod raster;

use std::io::{Read, Write};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use trailsign::state::{self, FileStore, StateSource, StatePort, StoredState};
use trailsign::{RenderOptions, SignData, SignType, download_filename, layout, render_sign_svg};

use args::{Cli, Command, Format, SignInput, StateAction, UrlAction};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries SVG/JSON output
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::try_from_default_env()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = FileStore::new(&cli.state);

    match cli.command {
        Command::Render {
            input,
            format,
            out,
            assets,
            dpi,
        } => {
            let sign = load_sign(&input, &store)?;
            let mut options = RenderOptions::default().with_dpi(dpi);
            if let Some(root) = assets {
                options = options.with_asset_root(root);
            }
            render(&sign, format, out.as_deref(), &options)
        }
        Command::Defaults { sign_type } => {
            let sign = SignData::default_for(sign_type.into());
            println!("{}", serde_json::to_string_pretty(&sign).into_diagnostic()?);
            Ok(())
        }
        Command::Filename { input, ext } => {
            let sign = load_sign(&input, &store)?;
            println!("{}", download_filename(&sign, ext.trim_start_matches('.')));
            Ok(())
        }
        Command::Url { action } => url(action, &store),
        Command::State { action } => edit_state(action, &store),
    }
}

/// Read a sign file, or fall back to the active sign of the resolved state.
fn load_sign(input: &SignInput, store: &FileStore) -> Result<SignData> {
    match &input.file {
        Some(path) => {
            let (name, text) = read_input(path)?;
            Ok(state::parse_sign_json(&text, &name)?)
        }
        None => {
            let (resolved, source) = state::resolve_state(input.url.as_deref(), store);
            tracing::info!(?source, sign_type = resolved.active_type.as_str(), "using stored sign");
            Ok(resolved.active())
        }
    }
}

fn read_input(path: &Path) -> Result<(String, String)> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).into_diagnostic()?;
        return Ok(("<stdin>".to_string(), text));
    }
    let text = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    Ok((path.display().to_string(), text))
}

fn render(sign: &SignData, format: Format, out: Option<&Path>, options: &RenderOptions) -> Result<()> {
    let bytes = match format {
        Format::Json => serde_json::to_vec_pretty(&layout(sign)).into_diagnostic()?,
        Format::Svg | Format::Png => {
            let output = render_sign_svg(sign, options)?;
            for href in &output.skipped_images {
                tracing::warn!(%href, "logo left out of the output");
            }
            match format {
                Format::Png => raster::svg_to_png(&output.svg, options.dpi)?,
                _ => output.svg.into_bytes(),
            }
        }
    };

    match out {
        Some(path) => {
            std::fs::write(path, &bytes)
                .into_diagnostic()
                .wrap_err_with(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote sign");
        }
        None if format == Format::Png => {
            return Err(miette!(
                "refusing to write PNG to stdout; pass --out {}",
                download_filename(sign, "png")
            ));
        }
        None => std::io::stdout().write_all(&bytes).into_diagnostic()?,
    }
    Ok(())
}

/// `RUST_LOG` when it is set and parses, otherwise warnings only
fn log_filter<E>(from_env: Result<EnvFilter, E>) -> EnvFilter {
    from_env.unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn url(action: UrlAction, store: &FileStore) -> Result<()> {
    match action {
        UrlAction::Encode { base } => {
            let (resolved, _) = state::resolve_state(None, store);
            println!("{}", state::share_url(&base, &resolved)?);
        }
        UrlAction::Decode { url } => {
            let encoded = state::state_from_url(&url).unwrap_or(url);
            let decoded = state::decode_url_state(&encoded)?;
            println!("{}", state::state_to_json(&decoded)?);
        }
    }
    Ok(())
}

fn edit_state(action: StateAction, store: &FileStore) -> Result<()> {
    let current = || {
        // Surface a corrupt file here instead of silently replacing it
        Ok::<_, miette::Report>(store.read()?.unwrap_or_default())
    };
    match action {
        StateAction::Show => {
            let (resolved, source) = state::resolve_state(None, store);
            if source == StateSource::Defaults {
                eprintln!("no stored state at {}, showing defaults", store.path().display());
            }
            println!("{}", state::state_to_json(&resolved)?);
        }
        StateAction::Switch { sign_type } => {
            let next = current()?.switch_active(SignType::from(sign_type));
            store.save(&next)?;
        }
        StateAction::Set { file } => {
            let (name, text) = read_input(&file)?;
            let sign = state::parse_sign_json(&text, &name)?;
            let next = current()?.update_active(sign);
            store.save(&next)?;
        }
        StateAction::Reset => store.save(&StoredState::default())?,
    }
    Ok(())
}
