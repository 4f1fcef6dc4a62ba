pub mod ai;
pub mod economy;
pub mod support;

use diamante_core::{Data, Error};

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        ai::pergunta::pergunta(),
        economy::rank::rank(),
        economy::daily::daily(),
        support::ticket::setup_ticket(),
    ]
}
