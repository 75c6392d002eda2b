use chrono::{DateTime, Utc};
use contracts::domain::a006_chat_message::ChatMessage;

pub fn seed_messages(now: DateTime<Utc>) -> Vec<ChatMessage> {
    vec![
        ChatMessage::new("系统", "欢迎来到聊天室", now - chrono::Duration::minutes(5)),
        ChatMessage::new("GM小助手", "今晚8点开服活动，别错过", now - chrono::Duration::minutes(2)),
    ]
}

/// Local echo: blank input appends nothing.
pub fn append_message(
    messages: &mut Vec<ChatMessage>,
    author: &str,
    content: &str,
    now: DateTime<Utc>,
) -> bool {
    let content = content.trim();
    if content.is_empty() {
        return false;
    }
    messages.push(ChatMessage::new(author, content, now));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_message_echoes_locally() {
        let now = Utc::now();
        let mut messages = seed_messages(now);
        assert!(append_message(&mut messages, "张三", " 大家好 ", now));
        let last = messages.last().unwrap();
        assert_eq!(last.author, "张三");
        assert_eq!(last.content, "大家好");
        assert_eq!(last.sent_at, now);
    }

    #[test]
    fn test_blank_input_is_dropped() {
        let now = Utc::now();
        let mut messages = seed_messages(now);
        let before = messages.len();
        assert!(!append_message(&mut messages, "张三", "   ", now));
        assert_eq!(messages.len(), before);
    }

    #[test]
    fn test_messages_get_unique_ids() {
        let now = Utc::now();
        let mut messages = Vec::new();
        append_message(&mut messages, "a", "一", now);
        append_message(&mut messages, "b", "二", now);
        assert_ne!(messages[0].id, messages[1].id);
    }
}
