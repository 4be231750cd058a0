//! Command-line flags and exit-code policy.

use clap::error::ErrorKind;
use clap::Parser;

/// Exit code for an unrecognized flag.
pub const EXIT_USAGE: i32 = 1;

/// Mark build, cache and dependency directories so Spotlight skips them.
///
/// Writes a zero-byte .metadata_never_index file into every matching
/// directory under the dev roots and into well-known cache locations.
/// Existing markers are left alone; nothing is ever deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "spotlight-excluder",
    disable_version_flag = true,
    after_help = "Environment:\n  \
        DEV_ROOTS               space-separated roots (default: existing ~/Developer ~/Projects ~/code)\n  \
        EXTRA_EXCLUDES          extra directory names to mark\n  \
        MARK_GLOBAL_CACHES      mark ~/Library/Caches (default 0)\n  \
        INCLUDE_DOCKER_CACHES   mark Docker Desktop caches (default 0)\n  \
        INCLUDE_BROWSER_CACHES  mark browser caches (default 1)\n  \
        INCLUDE_EDITOR_CACHES   mark editor caches (default 1)\n  \
        INCLUDE_ORBSTACK        mark OrbStack caches (default 1)"
)]
pub struct Cli {
    /// Report what would be marked without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Ask Spotlight to rebuild the index of / afterwards (uses sudo)
    #[arg(long)]
    pub rebuild: bool,
}

/// What `main` should do after parsing.
#[derive(Debug)]
pub enum Parsed {
    Run(Cli),
    /// Help was requested or parsing failed: print and exit with the code.
    Exit { message: String, code: i32 },
}

impl Cli {
    /// Parse arguments (including the program name).
    ///
    /// `--help` exits 0; every parse error exits 1.
    pub fn parse_args<I, T>(args: I) -> Parsed
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Parsed::Run(cli),
            Err(err) => {
                let code = match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                    _ => EXIT_USAGE,
                };
                Parsed::Exit {
                    message: err.render().to_string(),
                    code,
                }
            }
        }
    }
}
