use tuiter_core::ServiceError;

use crate::model::{Message, SendMessage};
use crate::service::SocialService;

impl SocialService {
    /// Send a direct message from `sender_id` to `recipient_id`.
    pub fn send_message(
        &self,
        sender_id: &str,
        recipient_id: &str,
        input: SendMessage,
    ) -> Result<Message, ServiceError> {
        if input.content.trim().is_empty() {
            return Err(ServiceError::Validation("message must not be empty".into()));
        }
        self.get_user(recipient_id)?;
        self.messages.save_new(Message {
            id: String::new(),
            sender_id: sender_id.to_string(),
            recipient_id: recipient_id.to_string(),
            content: input.content,
            created_at: String::new(),
        })
    }

    /// Messages the user has sent, oldest first.
    pub fn list_sent_messages(&self, user_id: &str) -> Result<Vec<Message>, ServiceError> {
        let mut messages: Vec<Message> = self
            .messages
            .list()?
            .into_iter()
            .filter(|m| m.sender_id == user_id)
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(messages)
    }

    /// Messages the user has received, oldest first.
    pub fn list_received_messages(&self, user_id: &str) -> Result<Vec<Message>, ServiceError> {
        let mut messages: Vec<Message> = self
            .messages
            .list()?
            .into_iter()
            .filter(|m| m.recipient_id == user_id)
            .collect();
        messages.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(messages)
    }

    /// Delete a message by id.
    pub fn delete_message(&self, id: &str) -> Result<(), ServiceError> {
        self.messages
            .delete(id)
            .map_err(|_| ServiceError::NotFound(format!("message '{}' not found", id)))
    }
}
