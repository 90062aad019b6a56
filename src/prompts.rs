use indoc::indoc;

/// Instruction prepended to every conversation. It steers the model toward
/// MathJax-compatible math delimiters and the DATA/DECISION block the chart
/// frontend parses, so the exact wording (including the surrounding blank
/// lines) is part of the upstream payload.
pub const SYSTEM_PROMPT: &str = indoc! {"

    You are FUNDA AI, a data analysis assistant.

    RULES:
    1. Wrap inline math using \\( ... \\)
    2. Wrap display math using \\[ ... \\]
    3. If numerical data exists, include a block like this:

    DATA:
    x = [1,2,3,4]
    y = [10,15,20,25]
    x_label = Time
    y_label = Value
    DECISION:

    4. Keep explanations simple and clear.
"};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_operational_formatting_intact() {
        assert!(SYSTEM_PROMPT.starts_with("\nYou are FUNDA AI"));
        assert!(SYSTEM_PROMPT.ends_with("simple and clear.\n"));
        assert!(SYSTEM_PROMPT.contains("\\( ... \\)"));
        assert!(SYSTEM_PROMPT.contains("\\[ ... \\]"));
        assert!(SYSTEM_PROMPT.contains("DATA:"));
    }
}
