//! Plain chat completion example
//!
//! Run with `GROQ_API_KEY` set:
//!
//! ```sh
//! cargo run -p groq-client --example basic
//! ```

use groq_client::{ChatMessage, CompletionRequest, GroqClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = GroqClient::from_env()?;

    let reply = client
        .chat_completion(
            CompletionRequest::new("llama-3.1-8b-instant")
                .message(ChatMessage::system("You are a concise assistant."))
                .message(ChatMessage::user("Name three uses for structured outputs."))
                .temperature(0.0)
                .max_tokens(256),
        )
        .await?;

    println!("{}", reply.content);

    if let Some(usage) = reply.usage {
        println!(
            "\n({} prompt + {} completion = {} tokens)",
            usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
        );
    }

    Ok(())
}
