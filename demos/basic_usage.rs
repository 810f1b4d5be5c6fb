use ollama_api_wrapper::{
    init_default_tracing, ChatMessage, ClientBuilder, ClientConfig, GenerationOptions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_default_tracing()?;

    let client = ClientConfig::default().model("llama2").build();

    // single prompt
    match client.generate_text("Tell me a joke", GenerationOptions::default()).await {
        Ok(response) => println!("{response}"),
        Err(e) => eprintln!("Error: {e}"),
    }

    // chat-like interaction
    let messages = vec![
        ChatMessage::user("Hello, how are you?"),
        ChatMessage::assistant("I'm doing well, thank you! How can I assist you today?"),
        ChatMessage::user("Can you explain what Rust is?"),
    ];
    let options = GenerationOptions::default().temperature(0.2).max_tokens(200);
    match client.generate_chat(messages, options).await {
        Ok(message) => println!("{message:#}"),
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(())
}
