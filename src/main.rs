// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Build the feed and print it (table or JSON)
// 4. Exit with proper code (0 = feed rendered, 1 = empty feed, 2 = error)
//
// Rust concepts used:
// - async/await: Because the pipeline makes many network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod display;       // src/display/ - icons and date formatting
mod feed;          // src/feed/ - selection, enrichment, summary, cache
mod github;        // src/github/ - GitHub API client and data model

// Import items we need from our modules
use cli::{Cli, Commands};
use clap::Parser;  // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{bail, Result};

use display::{classify_language_icon, display_date};
use feed::{derive_summary, PortfolioFeed};
use github::EnrichedRepo;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = feed rendered
//   Ok(1) = account has no public repositories at all
//   Err = listing failed (rate limit, upstream error, network failure)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    // Each branch handles a different command (feed, summary)
    match cli.command {
        Commands::Feed { username, json } => {
            handle_feed(&username, json).await
        }
        Commands::Summary { username, json } => {
            handle_summary(&username, json).await
        }
    }
}

// Handles the 'feed' subcommand
// Parameters:
//   username: GitHub account to build the feed for
//   json: whether to output JSON format
async fn handle_feed(username: &str, json: bool) -> Result<i32> {
    let feed = load_feed(username).await?;
    let summary = derive_summary(feed.iter().map(|e| &e.repo));

    if json {
        // Serialize the feed and its summary to JSON and print
        let output = serde_json::json!({
            "repositories": feed,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("🔍 Portfolio feed for {}\n", username);

        if feed.is_empty() {
            println!("⚠️  No public repositories found");
        }

        for entry in &feed {
            print_repo(entry);
        }

        // Print summary
        println!("📊 Summary:");
        println!("   📋 Repositories: {}", summary.count);
        println!("   ⭐ Stars: {}", summary.total_stars);
        println!("   🍴 Forks: {}", summary.total_forks);
    }

    if feed.is_empty() {
        Ok(1)  // Exit code 1 = nothing to show
    } else {
        Ok(0)  // Exit code 0 = feed rendered
    }
}

// Handles the 'summary' subcommand
//
// Runs the same pipeline as 'feed' but only prints the aggregate numbers.
async fn handle_summary(username: &str, json: bool) -> Result<i32> {
    let feed = load_feed(username).await?;
    let summary = derive_summary(feed.iter().map(|e| &e.repo));

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("📊 {} repositories, ⭐ {} stars, 🍴 {} forks",
            summary.count, summary.total_stars, summary.total_forks);
    }

    if feed.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Runs the shared part of both subcommands: validate, build, return feed
//
// Listing failures bubble up through ? and become exit code 2 in main;
// enrichment failures were already absorbed inside the pipeline.
async fn load_feed(username: &str) -> Result<Vec<EnrichedRepo>> {
    // The only input validation: the handle must not be empty
    // (format/existence is the API's business, not ours)
    if username.is_empty() {
        bail!("username must not be empty");
    }

    let mut portfolio = PortfolioFeed::new();
    let feed = portfolio.load(username).await?;
    Ok(feed)
}

// Prints one repository as a block of lines
fn print_repo(entry: &EnrichedRepo) {
    let repo = &entry.repo;

    println!("📦 {}  ⭐ {}  🍴 {}",
        repo.name, repo.stargazers_count, repo.forks_count);

    if let Some(description) = &repo.description {
        println!("   {}", description);
    }

    if !entry.languages.is_empty() {
        let tags: Vec<String> = entry.languages.iter()
            .map(|language| format!("{} {}", classify_language_icon(language), language))
            .collect();
        println!("   {}", tags.join("  "));
    }

    if !repo.topics.is_empty() {
        let topics: Vec<String> = repo.topics.iter()
            .map(|topic| format!("#{}", topic))
            .collect();
        println!("   {}", topics.join(" "));
    }

    if let Some(pushed_at) = &repo.pushed_at {
        println!("   ⏱️  Last push: {}", display_date(pushed_at));
    }

    println!("   🔗 {}", repo.html_url);

    // GitHub reports homepage as an empty string when it was set and
    // cleared again, so check for that too
    if let Some(homepage) = repo.homepage.as_deref().filter(|h| !h.is_empty()) {
        println!("   🌍 {}", homepage);
    }

    println!();
}
