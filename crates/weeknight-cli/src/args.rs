use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CookArgs, FlagsArgs, GroceryArgs, LeftoverCommands, LoginArgs, SearchArgs, ShareArgs,
    SuggestArgs,
};

/// Weeknight in the terminal: pick tonight's dinner and cook it step by step
///
/// Suggestions, leftovers and grocery lists come from the Weeknight backend.
/// Cooking sessions run locally with per-step timers and end with a short
/// feedback dialog.
#[derive(Parser)]
#[command(version, about, name = "wk")]
pub struct Args {
    /// Backend base URL. Defaults to $WEEKNIGHT_API_URL, then
    /// https://api.useweeknight.com
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Path to the identity file. Defaults to
    /// $XDG_CONFIG_HOME/weeknight/identity.json
    #[arg(long, global = true)]
    pub identity_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save the identity used for requests and telemetry
    Login(LoginArgs),
    /// Forget the saved identity
    Logout,
    /// Show the saved identity
    Whoami,
    /// Get recipe suggestions for tonight
    #[command(alias = "s")]
    Suggest(SuggestArgs),
    /// Search the recipe catalog, e.g. by appliance
    #[command(alias = "find")]
    Search(SearchArgs),
    /// Share a recipe
    Share(ShareArgs),
    /// Cook a recipe step by step
    #[command(alias = "c")]
    Cook(CookArgs),
    /// Manage leftovers
    #[command(alias = "l")]
    Leftovers {
        #[command(subcommand)]
        command: LeftoverCommands,
    },
    /// Build a grocery list for one or more recipes
    #[command(alias = "g")]
    Grocery(GroceryArgs),
    /// Show feature flags
    Flags(FlagsArgs),
}
