//! Command arguments and handlers.
//!
//! Argument types carry the clap derives and convert into the core parameter
//! types, which stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Backend
//! ```

use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use tokio::task::JoinHandle;
use weeknight_core::{
    api::Backend,
    display::{Leftovers, OperationStatus, SearchResults, Suggestions},
    flags::resolve_flags,
    models::TelemetryEvent,
    params::{
        ConsumeLeftover, GroceryRecipe, GroceryRequest, ListLeftovers, RecipeSearch,
        TonightRequest,
    },
    session::{token_of, Identity, IdentityStore},
    telemetry::TelemetryEmitter,
};

use crate::renderer::TerminalRenderer;

/// Save the identity used for requests and telemetry
#[derive(Args)]
pub struct LoginArgs {
    /// User ID issued by the identity provider
    #[arg(long)]
    pub user_id: String,
    /// Access token sent as the bearer token
    #[arg(long)]
    pub token: String,
}

/// Get recipe suggestions for tonight
#[derive(Args)]
pub struct SuggestArgs {
    /// What you feel like eating, in your own words
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
    /// Pick the Nth suggestion (1-based)
    #[arg(short, long)]
    pub pick: Option<usize>,
}

/// Search the recipe catalog
#[derive(Args)]
pub struct SearchArgs {
    /// Words to match against titles and tags
    pub query: Vec<String>,
    /// Only recipes using this appliance (e.g. air_fryer, rice_cooker)
    #[arg(short, long)]
    pub equipment: Option<String>,
    /// Cooking method (e.g. stir_fry, sheet_pan)
    #[arg(long)]
    pub cook_type: Option<String>,
    #[arg(long)]
    pub cuisine: Option<String>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
    /// Maximum total time in minutes
    #[arg(long)]
    pub time_max: Option<u32>,
    /// Maximum number of cookware pieces
    #[arg(long)]
    pub cookware_max: Option<u32>,
    /// Only kid-friendly recipes
    #[arg(long)]
    pub kid_friendly: bool,
    /// Page number (1-based)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,
    /// Results per page
    #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub limit: u32,
}

impl From<SearchArgs> for RecipeSearch {
    fn from(val: SearchArgs) -> Self {
        let query = val.query.join(" ");
        RecipeSearch {
            q: (!query.trim().is_empty()).then_some(query),
            cook_type: val.cook_type,
            equipment: val.equipment,
            cuisine: val.cuisine,
            tags: val.tags,
            time_max: val.time_max,
            cookware_max: val.cookware_max,
            kid_friendly: val.kid_friendly.then_some(true),
            page: val.page,
            limit: Some(val.limit),
        }
    }
}

/// Share a recipe
#[derive(Args)]
pub struct ShareArgs {
    /// ID of the recipe to share
    pub recipe_id: String,
}

/// Cook a recipe step by step
#[derive(Args)]
pub struct CookArgs {
    /// ID of the recipe to cook
    pub recipe_id: String,
}

#[derive(Subcommand)]
pub enum LeftoverCommands {
    /// List leftovers
    #[command(aliases = ["l", "ls"])]
    List(ListLeftoversArgs),
    /// Mark a leftover as eaten
    #[command(alias = "c")]
    Consume(ConsumeLeftoverArgs),
}

#[derive(Args)]
pub struct ListLeftoversArgs {
    /// Include leftovers already eaten
    #[arg(long)]
    pub include_consumed: bool,
    /// Include leftovers past their safe window
    #[arg(long)]
    pub include_expired: bool,
}

#[derive(Args)]
pub struct ConsumeLeftoverArgs {
    /// ID of the leftover
    pub id: String,
}

/// Build a grocery list for one or more recipes
#[derive(Args)]
pub struct GroceryArgs {
    /// Recipes as `RECIPE_ID` or `RECIPE_ID:SERVINGS`
    #[arg(required = true, num_args = 1.., value_parser = parse_grocery_recipe)]
    pub recipes: Vec<GroceryRecipe>,
    /// Preferred store, passed through to the backend
    #[arg(long)]
    pub store: Option<String>,
}

impl From<GroceryArgs> for GroceryRequest {
    fn from(val: GroceryArgs) -> Self {
        GroceryRequest {
            recipes: val.recipes,
            pantry_snapshot: Vec::new(),
            store_preference: val.store,
        }
    }
}

/// Show feature flags
#[derive(Args)]
pub struct FlagsArgs {
    /// Only these flags (all flags when omitted)
    pub keys: Vec<String>,
}

fn parse_grocery_recipe(value: &str) -> std::result::Result<GroceryRecipe, String> {
    let (recipe_id, servings) = match value.split_once(':') {
        Some((id, servings)) => {
            let servings: u32 = servings
                .parse()
                .map_err(|_| format!("Invalid servings in '{value}'"))?;
            if servings == 0 {
                return Err(format!("Servings must be at least 1 in '{value}'"));
            }
            (id, Some(servings))
        }
        None => (value, None),
    };
    if recipe_id.trim().is_empty() {
        return Err(format!("Missing recipe ID in '{value}'"));
    }
    Ok(GroceryRecipe {
        recipe_id: recipe_id.trim().to_string(),
        servings,
    })
}

/// Waits for background requests so they are not cut off when the process
/// exits. Their outcome is ignored.
pub async fn settle(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        if let Err(e) = handle.await {
            debug!("Background task failed: {e}");
        }
    }
}

/// Command handlers sharing one backend, identity and renderer.
pub struct Cli {
    pub(crate) backend: Arc<dyn Backend>,
    pub(crate) store: IdentityStore,
    pub(crate) identity: Option<Identity>,
    pub(crate) renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(
        backend: Arc<dyn Backend>,
        store: IdentityStore,
        identity: Option<Identity>,
        renderer: TerminalRenderer,
    ) -> Self {
        Self {
            backend,
            store,
            identity,
            renderer,
        }
    }

    pub(crate) fn token(&self) -> Option<&str> {
        token_of(self.identity.as_ref())
    }

    fn require_identity(&self) -> Result<&Identity> {
        self.identity
            .as_ref()
            .ok_or_else(|| anyhow!("Not signed in. Run `wk login` first."))
    }

    fn telemetry(&self) -> TelemetryEmitter {
        TelemetryEmitter::new(Arc::clone(&self.backend), self.identity.clone())
    }

    pub fn login(&self, args: LoginArgs) -> Result<()> {
        let identity = Identity::new(args.user_id, args.token)?;
        self.store
            .save(&identity)
            .context("Failed to save identity")?;
        self.renderer.show(&OperationStatus::success(format!(
            "Signed in as {}",
            identity.user_id
        )))
    }

    pub fn logout(&self) -> Result<()> {
        let status = if self.store.clear().context("Failed to remove identity")? {
            OperationStatus::success("Signed out")
        } else {
            OperationStatus::failure("Not signed in")
        };
        self.renderer.show(&status)
    }

    pub fn whoami(&self) -> Result<()> {
        let status = match &self.identity {
            Some(identity) => OperationStatus::success(format!("Signed in as {}", identity.user_id)),
            None => OperationStatus::failure("Not signed in (anonymous session)"),
        };
        self.renderer.show(&status)
    }

    pub async fn suggest(&self, args: SuggestArgs) -> Result<()> {
        let identity = self.require_identity()?;
        let request = TonightRequest {
            user_id: identity.user_id.clone(),
            text_input: args.text.join(" "),
            pantry_snapshot: Vec::new(),
        };
        let response = self
            .backend
            .tonight(&request, self.token())
            .await
            .context("Failed to get suggestions")?;

        if let Some(question) = &response.clarifying_question {
            self.renderer.line(&format!("*{question}*"))?;
        }
        self.renderer.show(&Suggestions(&response.suggestions))?;

        let telemetry = self.telemetry();
        let mut handles: Vec<_> = response
            .suggestions
            .iter()
            .filter_map(|card| telemetry.emit(TelemetryEvent::CardView, Some(&card.recipe_id), None))
            .collect();

        if let Some(pick) = args.pick {
            let card = pick
                .checked_sub(1)
                .and_then(|i| response.suggestions.get(i))
                .ok_or_else(|| {
                    anyhow!(
                        "No suggestion #{pick}; choose between 1 and {}",
                        response.suggestions.len()
                    )
                });
            match card {
                Ok(card) => {
                    handles.extend(telemetry.emit(
                        TelemetryEvent::CardSelect,
                        Some(&card.recipe_id),
                        None,
                    ));
                    self.renderer.line(&format!(
                        "Run `wk cook {}` to start cooking {}.",
                        card.recipe_id, card.title
                    ))?;
                }
                Err(e) => {
                    settle(handles).await;
                    return Err(e);
                }
            }
        }

        settle(handles).await;
        Ok(())
    }

    pub async fn search(&self, args: SearchArgs) -> Result<()> {
        let params: RecipeSearch = args.into();
        let page = self
            .backend
            .search_recipes(&params, self.token())
            .await
            .context("Failed to search recipes")?;
        self.renderer.show(&SearchResults(&page))?;
        if let Some(first) = page.recipes.first() {
            self.renderer
                .line(&format!("Run `wk cook {}` to start cooking.", first.recipe_id))?;
        }
        Ok(())
    }

    pub async fn share(&self, args: ShareArgs) -> Result<()> {
        self.require_identity()?;
        let handle = self
            .telemetry()
            .emit(TelemetryEvent::Share, Some(&args.recipe_id), None);
        settle(handle.into_iter().collect()).await;
        self.renderer.show(&OperationStatus::success(format!(
            "Shared recipe {}",
            args.recipe_id
        )))
    }

    pub async fn handle_leftover_command(&self, command: LeftoverCommands) -> Result<()> {
        match command {
            LeftoverCommands::List(args) => {
                let params = ListLeftovers {
                    user_id: self.identity.as_ref().map(|i| i.user_id.clone()),
                    household_id: None,
                    include_consumed: args.include_consumed,
                    include_expired: args.include_expired,
                };
                let leftovers = self
                    .backend
                    .list_leftovers(&params, self.token())
                    .await
                    .context("Failed to list leftovers")?;
                self.renderer.show(&Leftovers(leftovers))
            }
            LeftoverCommands::Consume(args) => {
                let params = ConsumeLeftover {
                    id: args.id,
                    user_id: self.identity.as_ref().map(|i| i.user_id.clone()),
                };
                let leftover = self
                    .backend
                    .consume_leftover(&params, self.token())
                    .await
                    .with_context(|| format!("Failed to consume leftover {}", params.id))?;
                let title = leftover.recipe_title.as_deref().unwrap_or(&leftover.recipe_id);
                self.renderer.show(&OperationStatus::success(format!(
                    "Marked {title} leftovers as eaten"
                )))
            }
        }
    }

    pub async fn grocery(&self, args: GroceryArgs) -> Result<()> {
        let request: GroceryRequest = args.into();
        let list = self
            .backend
            .generate_grocery_list(&request, self.token())
            .await
            .context("Failed to generate grocery list")?;
        self.renderer.show(&list)
    }

    pub async fn flags(&self, args: FlagsArgs) -> Result<()> {
        if args.keys.iter().any(|k| k.trim().is_empty()) {
            bail!("Flag keys cannot be empty");
        }
        let keys = (!args.keys.is_empty()).then_some(args.keys.as_slice());
        let flags = resolve_flags(self.backend.as_ref(), keys, self.token()).await;
        self.renderer.show(&flags)
    }
}
