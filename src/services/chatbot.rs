// src/services/chatbot.rs
use thiserror::Error;

use crate::config::CompletionConfig;
use crate::services::completion::{Completion, CompletionClient, CompletionError};

pub const SYSTEM_PROMPT: &str = "You are a helpful AI assistant on arunregmi.com.np. Be concise and helpful. \
If asked for contact, use only: Email: kcaarun10@gmail.com and WhatsApp: +977 98-10975653. \
Do not mention LinkedIn. You are representing Arun Regmi, a web developer from Nepal.";

/// Keyword replies used when the provider is unavailable. The first keyword
/// contained in the lowercased message wins.
pub const FALLBACK_RULES: &[(&str, &str)] = &[
    (
        "services",
        "I offer web development, Firebase systems, UI/UX design, GitHub hosting, domain & DNS setup, and custom online tools development.",
    ),
    (
        "projects",
        "I've built an Online Tools Suite with 17+ tools, an E-commerce Platform, and an AI Content Generator. You can check out the tools page!",
    ),
    (
        "contact",
        "You can reach me via email at kcaarun10@gmail.com or WhatsApp at +977 98-10975653. The links are in the contact section!",
    ),
    (
        "technologies",
        "I work with HTML/CSS, JavaScript, React/Vue, Firebase, Node.js, Express, GitHub, Cloudflare, and focus on UI/UX, performance, and SEO.",
    ),
    (
        "price",
        "For pricing details, please contact me directly via email or WhatsApp with your project requirements. I provide custom quotes based on project scope.",
    ),
    (
        "experience",
        "I'm a web developer focused on creating fast, modern, and accessible web experiences with expertise in frontend and backend technologies.",
    ),
];

pub const DEFAULT_REPLY: &str = "Thank you for your message! For specific inquiries about my services, projects, or to discuss your project needs, please contact me directly at kcaarun10@gmail.com or WhatsApp +977 98-10975653.";

pub const UNEXPECTED_ERROR_REPLY: &str =
    "Sorry, I encountered an error. Please try again or contact me directly.";

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Message is required")]
    MissingMessage,

    #[error(transparent)]
    Unexpected(#[from] CompletionError),
}

pub fn fallback_reply(msg: &str) -> &'static str {
    let msg_lower = msg.to_lowercase();

    FALLBACK_RULES
        .iter()
        .find(|(keyword, _)| msg_lower.contains(*keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_REPLY)
}

/// Resolves a chat message to a reply: the remote provider first, the
/// keyword rules when it is unavailable.
#[derive(Debug, Clone, Default)]
pub struct ChatResponder {
    remote: Option<CompletionClient>,
}

impl ChatResponder {
    pub fn new(remote: Option<CompletionClient>) -> Self {
        Self { remote }
    }

    /// Without a credential the responder never calls out.
    pub fn from_config(config: &CompletionConfig) -> anyhow::Result<Self> {
        let remote = match &config.api_key {
            Some(key) => Some(CompletionClient::new(config, key.clone())?),
            None => {
                tracing::info!("no completion credential configured, chat uses local replies only");
                None
            }
        };
        Ok(Self::new(remote))
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// The provider receives the message as sent; surrounding whitespace
    /// only matters for validation.
    pub async fn resolve(&self, message: &str) -> Result<String, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::MissingMessage);
        }

        match self.ask_remote(message).await? {
            Completion::Success(text) => Ok(text),
            Completion::Unavailable => Ok(fallback_reply(message).to_string()),
        }
    }

    async fn ask_remote(&self, message: &str) -> Result<Completion, CompletionError> {
        match &self.remote {
            Some(client) => client.complete(SYSTEM_PROMPT, message).await,
            None => Ok(Completion::Unavailable),
        }
    }
}
