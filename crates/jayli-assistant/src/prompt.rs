//! Prompt construction for Baker AI.

use crate::message::ChatMessage;

/// Persona and shop facts given to the model ahead of every request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are \"Baker AI\", a friendly and knowledgeable cake consultant for a Kenyan Bakery called \"Jayli\".
Your goal is to help customers choose cakes, suggest flavors, and explain pricing estimates.

Context:
- Prices are in Kenyan Shillings (KES).
- Popular flavors in Kenya: Black Forest, Red Velvet, Fruit Cake, Passion, Blueberry.
- We specialize in Graduation, Wedding, and Kids cakes.
- Be concise, warm, and encourage them to add items to their cart.
- If they ask about delivery, say we deliver within Mbita, South Nyanza for 300 KES.";

/// Build the full prompt: instruction, prior turns, then the new message.
///
/// `history` is the transcript before `message` was sent.
pub fn build_prompt(history: &[ChatMessage], message: &str) -> String {
    let history = history
        .iter()
        .map(ChatMessage::history_line)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\nChat History:\n{}\n\nUser: {}\nBaker AI:",
        SYSTEM_INSTRUCTION, history, message
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_layout() {
        let history = vec![
            ChatMessage::model("Habari!"),
            ChatMessage::user("Do you deliver?"),
            ChatMessage::model("Yes, within Mbita."),
        ];
        let prompt = build_prompt(&history, "How much for a wedding cake?");

        assert!(prompt.starts_with("You are \"Baker AI\""));
        assert!(prompt.ends_with(
            "Chat History:\nModel: Habari!\nUser: Do you deliver?\nModel: Yes, within Mbita.\n\n\
             User: How much for a wedding cake?\nBaker AI:"
        ));
    }

    #[test]
    fn test_prompt_without_history() {
        let prompt = build_prompt(&[], "Hi");
        assert!(prompt.contains("Chat History:\n\n\nUser: Hi\nBaker AI:"));
    }
}
