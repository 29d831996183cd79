use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use trailsign::SignType;

#[derive(Parser, Debug, Clone)]
#[command(name = "trailsign", version, about = "Render printable trail signs")]
pub struct Cli {
    /// Stored state file (the editor's saved signs)
    #[arg(long, global = true, env = "TRAILSIGN_STATE", default_value = "trailsign-state.json")]
    pub state: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a sign to SVG, PNG or document JSON.
    Render {
        #[command(flatten)]
        input: SignInput,

        #[arg(long, value_enum, default_value_t = Format::Svg)]
        format: Format,

        /// Output file; stdout when omitted (SVG and JSON only)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Directory logo images are read from
        #[arg(long, env = "TRAILSIGN_ASSETS")]
        assets: Option<PathBuf>,

        /// PNG resolution
        #[arg(long, default_value_t = 96.0)]
        dpi: f32,
    },

    /// Print the built-in default sign for a type as JSON.
    Defaults {
        #[arg(value_enum)]
        sign_type: TypeArg,
    },

    /// Print the download file name for a sign.
    Filename {
        #[command(flatten)]
        input: SignInput,

        #[arg(long, default_value = "pdf")]
        ext: String,
    },

    /// Share links carrying the whole stored state.
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Inspect or edit the stored state file.
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

/// Where the sign to work on comes from. Without a file, the active sign
/// of the resolved state (URL, then state file, then defaults) is used.
#[derive(clap::Args, Debug, Clone)]
pub struct SignInput {
    /// Sign JSON file, or `-` for stdin
    pub file: Option<PathBuf>,

    /// Share link to take state from
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum UrlAction {
    /// Print a share link for the stored state.
    Encode {
        #[arg(long, default_value = "https://signs.nmtbc.nz/")]
        base: String,
    },
    /// Decode a share link (or bare `state` value) and print the JSON.
    Decode { url: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum StateAction {
    /// Print the resolved state.
    Show,
    /// Make a sign type active, keeping every slot.
    Switch {
        #[arg(value_enum)]
        sign_type: TypeArg,
    },
    /// Replace the slot for a sign and make it active.
    Set {
        /// Sign JSON file, or `-` for stdin
        file: PathBuf,
    },
    /// Reset to built-in defaults.
    Reset,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Svg,
    Png,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeArg {
    Wayfinding,
    Warning,
    #[value(name = "hardeasy")]
    HardEasy,
    #[value(name = "smallwayfinding")]
    SmallWayfinding,
}

impl From<TypeArg> for SignType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Wayfinding => SignType::Wayfinding,
            TypeArg::Warning => SignType::Warning,
            TypeArg::HardEasy => SignType::HardEasy,
            TypeArg::SmallWayfinding => SignType::SmallWayfinding,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_with_png() {
        let cli = Cli::try_parse_from(["trailsign", "render", "sign.json", "--format", "png", "--dpi", "150"]).unwrap();
        let Command::Render { input, format, dpi, .. } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(input.file.as_deref(), Some(std::path::Path::new("sign.json")));
        assert_eq!(format, Format::Png);
        assert_eq!(dpi, 150.0);
    }

    #[test]
    fn type_names_match_the_wire_tags() {
        let cli = Cli::try_parse_from(["trailsign", "defaults", "smallwayfinding"]).unwrap();
        let Command::Defaults { sign_type } = cli.command else {
            panic!("expected defaults");
        };
        assert_eq!(SignType::from(sign_type), SignType::SmallWayfinding);
    }
}
