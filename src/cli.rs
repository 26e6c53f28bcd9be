use clap::{ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gopkg-pin",
    about = "Rewrite a dependency constraint in a Gopkg.toml manifest",
    group(ArgGroup::new("constraint").required(true))
)]
pub struct PinArgs {
    /// Import path of the dependency to pin (e.g. github.com/pkg/errors)
    pub name: String,

    /// Pin the dependency to a branch
    #[arg(long, value_name = "BRANCH", group = "constraint")]
    pub branch: Option<String>,

    /// Pin the dependency to a release version
    #[arg(long, value_name = "VERSION", group = "constraint")]
    pub version: Option<String>,

    /// Pin the dependency to an exact revision
    #[arg(long, value_name = "REV", group = "constraint")]
    pub revision: Option<String>,

    /// Path to the Gopkg.toml manifest
    #[arg(long, value_name = "PATH", default_value = "Gopkg.toml")]
    pub manifest_path: PathBuf,

    /// Print the rewritten manifest to stdout instead of writing the file
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Trace input lines and parameters to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args_are_well_formed() {
        PinArgs::command().debug_assert();
    }

    #[test]
    fn version_flag_is_the_constraint_arg() {
        // `--version` must parse as the constraint value; a clap-generated
        // version flag would collide with it on the `version` arg id.
        let args =
            PinArgs::try_parse_from(["gopkg-pin", "github.com/x/y", "--version", "2.0.0"]).unwrap();
        assert_eq!(args.version.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn exactly_one_constraint_flag_required() {
        assert!(PinArgs::try_parse_from(["gopkg-pin", "github.com/x/y"]).is_err());

        assert!(
            PinArgs::try_parse_from([
                "gopkg-pin",
                "github.com/x/y",
                "--branch",
                "main",
                "--version",
                "1.0.0",
            ])
            .is_err()
        );

        let args =
            PinArgs::try_parse_from(["gopkg-pin", "github.com/x/y", "--version", "1.0.0"]).unwrap();
        assert_eq!(args.version.as_deref(), Some("1.0.0"));
        assert!(args.branch.is_none());
    }
}
