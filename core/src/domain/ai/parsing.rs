use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::common::entities::app_errors::CoreError;

pub const INVALID_RECIPE_FORMAT: &str = "Formato de receita inválido";
pub const INVALID_MENU_FORMAT: &str = "Formato de menu inválido";

/// Outermost `{...}` block of a reply, spanning lines.
static REPLY_BLOCK: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}"));

/// Decodes a model reply. When the reply is not bare JSON, the outermost
/// `{...}` block inside it is tried before giving up.
pub fn parse_reply<T>(content: &str, invalid_message: &str) -> Result<T, CoreError>
where
    T: DeserializeOwned,
{
    let first_error = match serde_json::from_str(content) {
        Ok(parsed) => return Ok(parsed),
        Err(e) => e,
    };
    warn!("AI reply is not bare JSON: {}", first_error);

    let block = REPLY_BLOCK.as_ref().map_err(|e| {
        tracing::error!("Invalid reply pattern: {}", e);
        CoreError::InternalServerError
    })?;

    block
        .find(content)
        .and_then(|m| serde_json::from_str(m.as_str()).ok())
        .ok_or_else(|| CoreError::InvalidAiResponse(invalid_message.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::domain::ai::entities::AiRecipe;

    #[test]
    fn test_bare_json() {
        let recipe: AiRecipe = parse_reply(r#"{"name":"Panqueca"}"#, INVALID_RECIPE_FORMAT).unwrap();
        assert_eq!(recipe.name, "Panqueca");
    }

    #[test]
    fn test_json_wrapped_in_prose() {
        let reply = "Claro! Aqui está:\n```json\n{\"name\": \"Salada\",\n \"nutrition\": {\"calories\": 200}}\n```\nBom apetite!";
        let recipe: AiRecipe = parse_reply(reply, INVALID_RECIPE_FORMAT).unwrap();
        assert_eq!(recipe.name, "Salada");
        assert_eq!(recipe.nutrition.unwrap().calories, Some(200));
    }

    #[test]
    fn test_reply_block_pattern_is_valid() {
        let block = REPLY_BLOCK.as_ref().unwrap();
        assert_eq!(
            block.find("a {\"x\": {\"y\": 1}} b").map(|m| m.as_str()),
            Some("{\"x\": {\"y\": 1}}")
        );
    }

    #[test]
    fn test_no_json_is_invalid_format() {
        let result: Result<Value, CoreError> = parse_reply("Desculpe, não consigo.", INVALID_MENU_FORMAT);
        assert_eq!(
            result,
            Err(CoreError::InvalidAiResponse(INVALID_MENU_FORMAT.to_string()))
        );
    }

    #[test]
    fn test_broken_block_is_invalid_format() {
        let result: Result<Value, CoreError> = parse_reply("{\"name\": ", INVALID_RECIPE_FORMAT);
        assert!(matches!(result, Err(CoreError::InvalidAiResponse(_))));
    }
}
