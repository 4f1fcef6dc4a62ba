use anyhow::anyhow;

use diamante_core::{Context, Error};

/// Label prepended to every successful AI answer.
pub const ANSWER_PREFIX: &str = "**🤖 Resposta:**";

/// Fixed user-facing text for any failure of the completion call.
pub const AI_ERROR_REPLY: &str = "❌ Erro na IA.";

/// IA: Faz uma pergunta ao ChatGPT
#[poise::command(slash_command, category = "IA")]
pub async fn pergunta(
    ctx: Context<'_>,
    #[description = "Sua dúvida"] texto: String,
) -> Result<(), Error> {
    // Visible acknowledgment; the reply below edits it in place.
    ctx.defer().await?;

    let result = match &ctx.data().llm {
        Some(llm) => llm.ask(&texto).await,
        None => Err(anyhow!("llm integration is not configured")),
    };

    if let Err(source) = &result {
        tracing::error!(?source, "completion call failed");
    }

    ctx.say(reply_content(result)).await?;
    Ok(())
}

/// Map the completion outcome onto the reply text: the answer under a fixed
/// label, or one generic error string with no cause differentiation.
fn reply_content(result: anyhow::Result<String>) -> String {
    match result {
        Ok(answer) => format!("{}\n{}", ANSWER_PREFIX, answer),
        Err(_) => AI_ERROR_REPLY.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{AI_ERROR_REPLY, ANSWER_PREFIX, reply_content};
    use anyhow::anyhow;

    #[test]
    fn successful_answer_is_prefixed() {
        let content = reply_content(Ok("Brasília.".to_owned()));
        assert_eq!(content, format!("{}\nBrasília.", ANSWER_PREFIX));
    }

    #[test]
    fn any_failure_yields_only_the_fixed_error_text() {
        let content = reply_content(Err(anyhow!("quota exceeded")));
        assert_eq!(content, AI_ERROR_REPLY);

        let content = reply_content(Err(anyhow!("connection reset")));
        assert_eq!(content, AI_ERROR_REPLY);
    }
}
