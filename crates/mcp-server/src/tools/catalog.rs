#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "legal_think",
        summary: "Record one step of legal reasoning; detects the domain and tracks revisable history.",
    },
    ToolDescriptor {
        name: "legal_ask_followup_question",
        summary: "Ask a follow-up legal question with domain-suggested answer options.",
    },
    ToolDescriptor {
        name: "legal_attempt_completion",
        summary: "Present a legal conclusion with the detected domain's guidance.",
    },
];

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Cerebra Legal provides structured legal reasoning for AI agents.".to_string(),
        "Covers ANSC procurement contestations (Law 131/2015), consumer protection, and contract analysis; anything else falls back to general legal reasoning.".to_string(),
        "Recommended flow: legal_think per reasoning step (revise earlier steps via isRevision/revisesThoughtNumber) → legal_ask_followup_question when input is missing → legal_attempt_completion for the final conclusion.".to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}
