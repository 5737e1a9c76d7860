use std::sync::Arc;

use tokio::sync::{Mutex, Semaphore};

use crate::chat::Conversation;
use crate::core::AppConfig;
use crate::mistral::ChatCompletion;

pub struct AppState {
    pub config: AppConfig,
    pub client: Arc<dyn ChatCompletion>,
    // The one chat session served by this process. Held for the whole
    // duration of a turn so nothing else can mutate it mid-request.
    pub conversation: Arc<Mutex<Conversation>>,
    // Single permit taken by the turn currently waiting on the model
    pub turn: Arc<Semaphore>,
}

impl AppState {
    pub fn new(config: AppConfig, client: Arc<dyn ChatCompletion>) -> Self {
        let conversation = Conversation::new(&config.system_message);
        Self {
            config,
            client,
            conversation: Arc::new(Mutex::new(conversation)),
            turn: Arc::new(Semaphore::new(1)),
        }
    }
}
