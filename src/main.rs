use anyhow::Result;
use cilium_releases::{
    Config, GitHub, GitHubWalker, ReleaseFetcher, RepoId, VersionOrder, get_file_names,
};
use clap::Parser;

/// cilium-releases - inspect an upstream project on GitHub
///
/// Lists recent releases, ranks release versions, and lists repository files.
/// Requests are unauthenticated and subject to GitHub's anonymous rate limits.
///
/// Examples:
///   cilium-releases names --limit 3
///   cilium-releases files cilium/cilium install/kubernetes
#[derive(Parser, Debug)]
#[command(author, version = env!("CILIUM_RELEASES_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(
        long = "api-url",
        env = "CILIUM_RELEASES_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,

    /// Upstream repository for release commands (defaults to cilium/cilium)
    #[arg(
        long = "repo",
        env = "CILIUM_RELEASES_REPO",
        value_name = "OWNER/REPO",
        global = true
    )]
    pub repo: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the latest releases as "tag<TAB>name"
    Releases(ReleasesArgs),

    /// Print the latest release versions, highest first
    Names(NamesArgs),

    /// Print the file names under a directory of a repository's master branch
    Files(FilesArgs),
}

#[derive(clap::Args, Debug)]
pub struct ReleasesArgs {
    /// Number of releases to request
    #[arg(long, short = 'n', default_value_t = 30)]
    pub count: u32,
}

#[derive(clap::Args, Debug)]
pub struct NamesArgs {
    /// Maximum number of versions to print
    #[arg(long, short = 'l', default_value_t = 5)]
    pub limit: usize,

    /// How versions are ranked
    #[arg(long, value_enum, default_value_t = VersionOrder::Lexical)]
    pub order: VersionOrder,
}

#[derive(clap::Args, Debug)]
pub struct FilesArgs {
    /// The GitHub repository in the format "owner/repo"
    #[arg(value_name = "OWNER/REPO")]
    pub repo: String,

    /// Directory inside the repository; end with "/**" to include subdirectories
    #[arg(value_name = "PATH", default_value = "")]
    pub path: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let repo = cli.repo.as_deref().map(str::parse::<RepoId>).transpose()?;
    let mut config = Config::new(cli.api_url, repo);

    match cli.command {
        Commands::Releases(args) => {
            let github = GitHub::from_config(&config)?;
            for release in github.latest_releases(args.count).await? {
                println!("{}\t{}", release.tag_name, release.name);
            }
        }
        Commands::Names(args) => {
            config.order = args.order;
            let github = GitHub::from_config(&config)?;
            for name in github.latest_release_names(args.limit).await? {
                println!("{}", name);
            }
        }
        Commands::Files(args) => {
            let target: RepoId = args.repo.parse()?;
            let walker = GitHubWalker::from_config(&config)?;
            let listing = get_file_names(&walker, &target.owner, &target.repo, &args.path).await;
            for name in &listing.names {
                println!("{}", name);
            }
            listing.into_result()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_names_parsing() {
        let cli = Cli::try_parse_from(["cilium-releases", "names", "--limit", "3"]).unwrap();
        match cli.command {
            Commands::Names(args) => {
                assert_eq!(args.limit, 3);
                assert_eq!(args.order, VersionOrder::Lexical);
            }
            _ => panic!("Expected Names command"),
        }
        assert_eq!(cli.api_url, None);
    }

    #[test]
    fn test_cli_names_semantic_order() {
        let cli =
            Cli::try_parse_from(["cilium-releases", "names", "--order", "semantic"]).unwrap();
        match cli.command {
            Commands::Names(args) => {
                assert_eq!(args.limit, 5);
                assert_eq!(args.order, VersionOrder::Semantic);
            }
            _ => panic!("Expected Names command"),
        }
    }

    #[test]
    fn test_cli_releases_default_count() {
        let cli = Cli::try_parse_from(["cilium-releases", "releases"]).unwrap();
        match cli.command {
            Commands::Releases(args) => assert_eq!(args.count, 30),
            _ => panic!("Expected Releases command"),
        }
    }

    #[test]
    fn test_cli_files_parsing() {
        let cli = Cli::try_parse_from([
            "cilium-releases",
            "files",
            "cilium/cilium",
            "install/kubernetes/**",
        ])
        .unwrap();
        match cli.command {
            Commands::Files(args) => {
                assert_eq!(args.repo, "cilium/cilium");
                assert_eq!(args.path, "install/kubernetes/**");
            }
            _ => panic!("Expected Files command"),
        }
    }

    #[test]
    fn test_cli_global_api_url_parsing() {
        let cli = Cli::try_parse_from([
            "cilium-releases",
            "--api-url",
            "http://localhost:1234",
            "releases",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:1234"));
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["cilium-releases"]);
        assert!(result.is_err());
    }
}
