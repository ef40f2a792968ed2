// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};

use crate::github::DEFAULT_USERNAME;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "portfolio-feed",
    version = "0.1.0",
    about = "Builds a display-ready feed of a GitHub account's best repositories",
    long_about = "portfolio-feed fetches an account's public repositories, keeps the six most \
                  recently pushed original projects, enriches each with its language breakdown, \
                  and prints the result as a table or JSON."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (feed, summary)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build and print the full portfolio feed
    ///
    /// Example: portfolio-feed feed octocat
    Feed {
        /// GitHub username to build the feed for
        ///
        /// Positional and optional: omitting it uses the portfolio
        /// owner's account
        #[arg(default_value = DEFAULT_USERNAME)]
        username: String,

        /// Output results in JSON format instead of a table
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },

    /// Print only the aggregate statistics for the feed
    ///
    /// Example: portfolio-feed summary octocat
    Summary {
        /// GitHub username to summarize
        #[arg(default_value = DEFAULT_USERNAME)]
        username: String,

        /// Output results in JSON format instead of text
        #[arg(long)]
        json: bool,
    },
}
