use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::fs;
use trailsign::render::RenderOptions;
use trailsign::state::parse_sign_json;
use trailsign::{SignData, SignType, download_filename, render_sign_svg};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [ASSETS]    Render every fixture and default sign into gallery.html");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(args.get(2).map(Utf8PathBuf::from)),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

/// One rendered card in the gallery
struct Entry {
    name: String,
    source: String,
    outcome: Result<Rendered, String>,
}

struct Rendered {
    svg: String,
    filename: String,
    skipped: Vec<String>,
}

fn gallery(assets: Option<Utf8PathBuf>) {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    let root = manifest_dir.parent().expect("xtask lives inside the workspace");
    let fixtures_dir = root.join("tests/fixtures/valid");
    let output_path = root.join("gallery.html");

    let mut options = RenderOptions::default();
    if let Some(assets) = assets {
        options = options.with_asset_root(assets.into_std_path_buf());
    }

    let mut fixtures: Vec<Utf8PathBuf> = fs::read_dir(&fixtures_dir)
        .expect("Failed to read fixtures directory")
        .filter_map(|e| e.ok())
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.path()).ok())
        .filter(|p| p.extension() == Some("json"))
        .collect();
    fixtures.sort();

    let mut entries: Vec<Entry> = SignType::KNOWN
        .par_iter()
        .map(|t| {
            let sign = SignData::default_for(*t);
            Entry {
                name: format!("default {}", t.as_str()),
                source: String::new(),
                outcome: render(&sign, &options),
            }
        })
        .collect();

    entries.par_extend(fixtures.par_iter().map(|path| {
        eprintln!("Rendering {}...", path.file_name().unwrap_or(path.as_str()));
        let source = fs::read_to_string(path).unwrap_or_default();
        let outcome = parse_sign_json(&source, path.as_str())
            .map_err(|e| e.to_string())
            .and_then(|sign| render(&sign, &options));
        Entry {
            name: path.file_stem().unwrap_or(path.as_str()).to_string(),
            source,
            outcome,
        }
    }));

    let failed = entries.iter().filter(|e| e.outcome.is_err()).count();

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Trail sign gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; margin: 0; background: #eee; color: #333; }
        .page { max-width: 1200px; margin: 0 auto; padding: 24px; }
        h1 { font-weight: 600; font-size: 20px; margin: 0 0 24px 0; }
        .card { background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); margin-bottom: 16px; overflow: hidden; }
        .card-header { display: flex; justify-content: space-between; padding: 12px 16px; border-bottom: 1px solid #eee; background: #fafafa; }
        .filename { font-family: ui-monospace, monospace; color: #666; }
        .sign { padding: 16px; }
        .sign svg { max-width: 100%; max-height: 600px; height: auto; border: 1px solid #ddd; }
        .error { color: #b00020; padding: 16px; white-space: pre-wrap; font-family: ui-monospace, monospace; }
        .skipped { color: #8a6d00; padding: 0 16px 12px; font-size: 13px; }
        pre { margin: 0; padding: 12px 16px; background: #f6f6f6; font-size: 12px; overflow-x: auto; }
    </style>
</head>
<body>
<div class="page">
"#,
    );
    html.push_str(&format!(
        "<h1>{} signs, {} failed</h1>\n",
        entries.len(),
        failed
    ));

    for entry in &entries {
        let (filename, body) = match &entry.outcome {
            Ok(r) => {
                let mut body = format!(r#"<div class="sign">{}</div>"#, r.svg);
                if !r.skipped.is_empty() {
                    body.push_str(&format!(
                        r#"<div class="skipped">logos left out: {}</div>"#,
                        html_escape(&r.skipped.join(", "))
                    ));
                }
                (r.filename.as_str(), body)
            }
            Err(e) => ("", format!(r#"<div class="error">{}</div>"#, html_escape(e))),
        };

        html.push_str(&format!(
            r#"
<div class="card" id="{}">
    <div class="card-header">
        <span>{}</span>
        <span class="filename">{}</span>
    </div>
    {}
"#,
            html_escape(&entry.name),
            html_escape(&entry.name),
            html_escape(filename),
            body,
        ));
        if !entry.source.is_empty() {
            html.push_str(&format!(
                "<details><summary>Source</summary><pre>{}</pre></details>\n",
                html_escape(&entry.source)
            ));
        }
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</body></html>");

    fs::write(&output_path, html).expect("Failed to write HTML");
    println!("Generated gallery at: {}", output_path);
}

fn render(sign: &SignData, options: &RenderOptions) -> Result<Rendered, String> {
    let output = render_sign_svg(sign, options).map_err(|e| e.to_string())?;
    Ok(Rendered {
        svg: output.svg,
        filename: download_filename(sign, "pdf"),
        skipped: output.skipped_images,
    })
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
