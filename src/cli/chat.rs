use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::chat::{Conversation, Role, TurnError, submit_turn};
use crate::core::AppConfig;
use crate::mistral::CompletionClient;

#[derive(Debug, PartialEq)]
enum Input<'a> {
    Reset,
    ShowSystemPrompt,
    SetSystemPrompt(&'a str),
    History,
    Message(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    match line {
        "/reset" => Input::Reset,
        "/system" => Input::ShowSystemPrompt,
        "/history" => Input::History,
        _ => match line.strip_prefix("/system ") {
            Some(prompt) => Input::SetSystemPrompt(prompt.trim()),
            None => Input::Message(line),
        },
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "you",
        Role::Assistant => "assistant",
    }
}

pub async fn run(config: AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let client = CompletionClient::new(&config.api_hostname, &config.api_key);
    let mut conversation = Conversation::new(&config.system_message);

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                match parse_input(&line) {
                    Input::Reset => {
                        conversation.reset();
                        println!("Chat memory reset!");
                    }
                    Input::ShowSystemPrompt => println!("{}", conversation.system_prompt()),
                    Input::SetSystemPrompt(prompt) => conversation.set_system_prompt(prompt),
                    Input::History => {
                        for msg in conversation.history() {
                            println!("[{}] {}", role_label(msg.role), msg.content);
                        }
                    }
                    Input::Message(text) => {
                        match submit_turn(&mut conversation, &client, &config.model, text).await {
                            Ok(reply) => println!("{}", reply),
                            // Blank lines are not turns
                            Err(TurnError::Conversation(_)) => {}
                            Err(TurnError::Completion(e)) => println!("API Error: {}", e),
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
