//! Lua language definition

use crate::error::Result;
use crate::syntax::language::LanguageDefinition;
use crate::syntax::theme::ColorRole;

/// Create the Lua language definition
///
/// Later rules repaint earlier ones where they overlap, so strings and
/// comments come after the operator rules. Digits are spelled `[0-9]`
/// because `\d` would also take non-ASCII digits.
pub fn lua_language() -> Result<LanguageDefinition> {
    LanguageDefinition::new("lua")
        .with_extension(".lua")
        .with_rule("number", r"\b([0-9]*[.]?[0-9]+)\b", ColorRole::Number)?
        .with_rule("operator", r"[+\-*/%^-]", ColorRole::Operator)?
        .with_rule("logicalOperator", r"[=~><]", ColorRole::Operator)?
        .with_rule("logicalKeyword", r"and|not|or", ColorRole::Keyword)?
        .with_rule("miscOperator", r"[.#%\[\]()]", ColorRole::Operator)?
        .with_rule(
            "keyword",
            concat!(
                r"\b(and|break|do|else|elseif|end|false|for|",
                r"function|if|in|local|nil|not|or|repeat|",
                r"return|then|true|until|while|var)\b",
            ),
            ColorRole::Keyword,
        )?
        .with_rule("string", r#"".*?"|'.*'"#, ColorRole::String)?
        .with_rule("singleLineComment", r"--(?!\[\[).*?$", ColorRole::CommentSingle)?
        .with_rule("multiLineComment", r"--\[\[((.|\n)*)\]\]", ColorRole::CommentMulti)
}
