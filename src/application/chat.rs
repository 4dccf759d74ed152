use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::domain::ports::ChatsApi;
use crate::errors::MarketError;
use crate::models::chat::{Chat, Message, NewMessage, StartChat};

/// Chat list: fetched on demand, plus the unread rule the list screen
/// applied (a chat only shows as unread when the last word was not
/// ours).
pub struct ChatInbox<A> {
    api: Arc<A>,
    current_user: i64,
    chats: Vec<Chat>,
}

impl<A: ChatsApi> ChatInbox<A> {
    pub fn new(api: Arc<A>, current_user: i64) -> Self {
        Self { api, current_user, chats: Vec::new() }
    }

    pub async fn refresh(&mut self) -> Result<(), MarketError> {
        self.chats = self.api.chats().await?;
        Ok(())
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn is_unread(&self, chat: &Chat) -> bool {
        chat.unread_count > 0 && chat.last_message_sender_id != Some(self.current_user)
    }

    pub fn unread_chats(&self) -> usize {
        self.chats.iter().filter(|c| self.is_unread(c)).count()
    }

    /// Create (or find) the chat with the given user.
    pub async fn start(&self, user_id: i64) -> Result<Chat, MarketError> {
        Ok(self.api.start_chat(StartChat { user_id }).await?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    Polling,
}

/// One open conversation. While focused, a background task re-fetches
/// the message list on a fixed period; sends are optimistic.
///
/// Each poll awaits its own fetch before the next tick fires, so polls
/// never overlap, and blurring aborts the task mid-request rather than
/// letting a stale response land afterwards. Both are deliberate
/// tightenings of the screen this replaces, which ran a bare interval.
pub struct ChatSession<A> {
    api: Arc<A>,
    chat_id: i64,
    current_user: i64,
    poll_period: Duration,
    messages: Arc<Mutex<Vec<Message>>>,
    poll_task: Option<JoinHandle<()>>,
}

impl<A: ChatsApi + 'static> ChatSession<A> {
    pub fn new(api: Arc<A>, chat_id: i64, current_user: i64, poll_period: Duration) -> Self {
        Self {
            api,
            chat_id,
            current_user,
            poll_period,
            messages: Arc::new(Mutex::new(Vec::new())),
            poll_task: None,
        }
    }

    pub fn phase(&self) -> ChatPhase {
        if self.poll_task.is_some() {
            ChatPhase::Polling
        } else {
            ChatPhase::Idle
        }
    }

    /// Screen gained focus: start polling. The first fetch fires
    /// immediately, then one per period. A second `focus` is a no-op.
    pub fn focus(&mut self) {
        if self.poll_task.is_some() {
            return;
        }
        let api = Arc::clone(&self.api);
        let messages = Arc::clone(&self.messages);
        let chat_id = self.chat_id;
        let period = self.poll_period;

        self.poll_task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                match api.messages(chat_id).await {
                    Ok(server_messages) => {
                        let mut guard = messages.lock().unwrap_or_else(|e| e.into_inner());
                        *guard = server_messages;
                    }
                    Err(e) => log::debug!("chat {chat_id} poll failed: {e}"),
                }
            }
        }));
    }

    /// Screen lost focus: stop polling and drop any in-flight poll.
    pub fn blur(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Optimistic send: the message appears locally at once under a
    /// timestamp id, then the entry is swapped for the server's copy
    /// when the POST resolves. A failed POST leaves the local entry in
    /// place untouched, exactly as the original screen did.
    pub async fn send(&self, content: &str) -> Result<(), MarketError> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(());
        }

        let temp_id = Utc::now().timestamp_millis();
        {
            let mut guard = self.messages.lock().unwrap_or_else(|e| e.into_inner());
            guard.push(Message {
                id: temp_id,
                sender: self.current_user,
                content: content.to_string(),
                created_at: Utc::now(),
            });
        }

        let sent = self
            .api
            .send_message(self.chat_id, NewMessage { content: content.to_string() })
            .await?;

        let mut guard = self.messages.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(entry) = guard.iter_mut().find(|m| m.id == temp_id) {
            *entry = sent;
        }
        Ok(())
    }
}

impl<A> Drop for ChatSession<A> {
    fn drop(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.abort();
        }
    }
}
