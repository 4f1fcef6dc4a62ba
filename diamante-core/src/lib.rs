pub mod cooldown;

use std::sync::Arc;

use diamante_database::Database;
use diamante_llm::LlmService;

pub use cooldown::{CooldownTracker, XP_COOLDOWN};

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub db: Database,
    pub llm: Option<LlmService>,
    pub cooldowns: Arc<CooldownTracker>,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
