// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and the GitHub commit resolver
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = success, 1 = input rejected, 2 = error)
//
// Rust concepts used:
// - async/await: The commit lookup is a network request
// - Trait objects: &dyn CommitResolver and &dyn Notifier are passed around
//   so the handlers do not care which implementation they get
// - Option: None as resolver means "offline, skip the lookup"
// =============================================================================

mod cli;       // src/cli.rs - command-line parsing
mod convert;   // src/convert.rs - the conversion pipeline
mod github;    // src/github/ - commit lookup through the GitHub API
mod links;     // src/links/ - CDN links and embed snippets
mod logging;   // src/logging.rs - tracing setup
mod notify;    // src/notify.rs - user notifications
mod session;   // src/session.rs - interactive session state
mod source;    // src/source/ - GitHub URL parsing

use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tracing::debug;

use cli::{Cli, Commands};
use convert::Conversion;
use github::{CommitResolver, GithubResolver};
use notify::{Notifier, TerminalNotifier};
use session::{Session, SessionEvent};

// #[tokio::main] creates a tokio runtime and runs our async main inside it
#[tokio::main]
async fn main() {
    // Run the application and turn its outcome into an exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole anyhow context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = converted
//   Ok(1) = input rejected
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments (handles --help and --version too)
    let cli = Cli::parse();

    // Logging goes to stderr, so stdout stays clean for --json
    logging::init_logging(&cli.log_level)?;
    debug!(api_base = %cli.api.api_base, "starting");

    // One HTTP client for the whole run, configured from flags/env
    let resolver = GithubResolver::new(cli.api.resolver_config())?;
    let notifier = TerminalNotifier;

    // Match on which subcommand was used
    match cli.command {
        Commands::Convert {
            url,
            json,
            embed,
            offline,
        } => {
            // --offline drops the resolver, links are then pinned to the branch
            let resolver = (!offline).then_some(&resolver as &dyn CommitResolver);
            handle_convert(&url, json, embed, resolver, &notifier).await
        }
        Commands::Interactive { embed, offline } => {
            let resolver = (!offline).then_some(&resolver as &dyn CommitResolver);
            handle_interactive(embed, resolver, &notifier).await
        }
    }
}

// Handles the 'convert' subcommand
// Parameters:
//   url: GitHub file URL as typed by the user
//   json: whether to output JSON format
//   embed: whether to print embed snippets in the text output
async fn handle_convert(
    url: &str,
    json: bool,
    embed: bool,
    resolver: Option<&dyn CommitResolver>,
    notifier: &dyn Notifier,
) -> Result<i32> {
    let conversion = match convert::convert(url, resolver, notifier).await {
        Ok(conversion) => conversion,
        // Already reported through the notifier
        Err(_) => return Ok(1),
    };

    if json {
        // Serialize the whole conversion (source, commit, links, embeds)
        println!("{}", serde_json::to_string_pretty(&conversion)?);
    } else {
        print_conversion(&conversion, embed);
    }

    Ok(0)
}

// Handles the 'interactive' subcommand
//
// Reads one URL per line until EOF or ':quit'
async fn handle_interactive(
    embed: bool,
    resolver: Option<&dyn CommitResolver>,
    notifier: &dyn Notifier,
) -> Result<i32> {
    let mut session = Session::new(embed);

    // Buffered stdin, so the session can read it line by line
    let stdin = BufReader::new(tokio::io::stdin());

    println!("🔗 Paste a GitHub file URL (:embed, :reset, :quit)");

    // The closure is called after each line; it only prints, the session
    // already updated its own state
    session
        .run_lines(stdin, resolver, notifier, |session, event| match event {
            SessionEvent::Converted => {
                if let Some(conversion) = &session.current {
                    print_conversion(conversion, session.embed_shown);
                }
            }
            SessionEvent::EmbedToggled(shown) => {
                println!("{} embed code", if *shown { "Showing" } else { "Hiding" });
                if let (true, Some(conversion)) = (*shown, &session.current) {
                    print_embeds(conversion);
                }
            }
            // Rejections and resets were already reported by the notifier
            SessionEvent::Rejected | SessionEvent::Reset | SessionEvent::Quit => {}
        })
        .await?;

    Ok(0)
}

// Prints the links (and optionally the embed snippets) for humans
fn print_conversion(conversion: &Conversion, show_embeds: bool) {
    let links = &conversion.links;

    // Say up front whether the links are really pinned to a commit
    match &conversion.commit {
        Some(commit) => println!("\n📌 Latest commit: {}", commit.full_hash),
        None => println!(
            "\n⚠️  Commit hash unavailable, links are pinned to '{}'",
            conversion.source.branch
        ),
    }

    println!();
    print_entry("Direct link with latest commit (long hash)", &links.full_hash);
    print_entry("Direct link with latest commit (short hash)", &links.short_hash);
    print_entry("Direct link with branch", &links.branch);
    print_entry("Direct link without branch", &links.default_branch);

    if show_embeds {
        print_embeds(conversion);
    }
}

// Prints the snippets picked for the file type (script, stylesheet, ...)
fn print_embeds(conversion: &Conversion) {
    println!("🧩 Embed code ({}):\n", conversion.embeds.kind.label());
    for snippet in &conversion.embeds.snippets {
        print_entry(&snippet.title, &snippet.code);
    }
}

fn print_entry(title: &str, value: &str) {
    println!("   {}", title);
    println!("   {}\n", value);
}
