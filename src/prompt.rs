//! Llama-3 chat template and the fixed generation settings for the tidying assistant.
//!
//! Everything here has to stay byte-for-byte stable: other clients of the same
//! Ollama deployment rely on the exact same prompt.

pub const BEGIN_OF_TEXT: &str = "<|begin_of_text|>";
pub const END_OF_TEXT: &str = "<|end_of_text|>";
pub const START_HEADER: &str = "<|start_header_id|>";
pub const END_HEADER: &str = "<|end_header_id|>";
pub const END_OF_TURN: &str = "<|eot_id|>";

/// Ollama model tag.
pub const MODEL: &str = "llama3";

pub const TEMPERATURE: f64 = 0.3;

/// Generation halts on either token so the model never writes past its own turn.
pub const STOP_SEQUENCES: [&str; 2] = [END_OF_TURN, END_OF_TEXT];

pub const SYSTEM_INSTRUCTION: &str = "당신은 실내 정리 및 청소 전문가입니다. 항상, 어떤 경우에도, 예외 없이 한국어로만 답변해야 합니다. 영어, 한자 또는 다른 언어를 절대 사용하지 마세요. 사용자의 방 상태를 분석하고 실용적인 정리 방법을 제안합니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

fn push_header(prompt: &mut String, role: Role) {
    prompt.push_str(START_HEADER);
    prompt.push_str(role.as_str());
    prompt.push_str(END_HEADER);
    prompt.push_str("\n\n");
}

/// Builds the full prompt: system turn, user turn, then an open assistant header.
pub fn build_prompt(user_message: &str) -> String {
    let mut prompt = String::with_capacity(
        BEGIN_OF_TEXT.len() + SYSTEM_INSTRUCTION.len() + user_message.len() + 128,
    );

    prompt.push_str(BEGIN_OF_TEXT);
    push_header(&mut prompt, Role::System);
    prompt.push_str(SYSTEM_INSTRUCTION);
    prompt.push_str(END_OF_TURN);
    push_header(&mut prompt, Role::User);
    prompt.push_str(user_message);
    prompt.push_str(END_OF_TURN);
    push_header(&mut prompt, Role::Assistant);

    prompt
}
