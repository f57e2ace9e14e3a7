//! Recipe prompt construction.
//!
//! The generator is instructed to emit a fixed plain-text layout with no
//! extra commentary; downstream parsing only relies on the first non-empty
//! line being the title.

use ladle_core::generator::RecipeRequest;

/// Builds the generation prompt for a request.
///
/// An empty diet is presented as "general" so the instruction sentence stays
/// well-formed; `avoid` and `have` pass through as-is, empty or not.
pub fn build_prompt(request: &RecipeRequest) -> String {
    let diet = if request.diet.trim().is_empty() {
        "general"
    } else {
        request.diet.trim()
    };

    format!(
        r#"Create a recipe for "{dish}".
The user follows a {diet} diet and must avoid: {avoid}.
They currently have: {have}.

Output in plain text ONLY. DO NOT include section headers like "Recipe Name" or "Short Description".
Format EXACTLY like this:

<Recipe Title>
<Short 1-2 sentence description>

Ingredients:
- ingredient 1
- ingredient 2

Instructions:
1. step 1
2. step 2

Estimated Time: X minutes
Difficulty: 1-10

Make the title concise (one line). Do not add extra labels or commentary.
"#,
        dish = request.dish,
        diet = diet,
        avoid = request.avoid,
        have = request.have,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_request_fields() {
        let request = RecipeRequest {
            dish: "tomato soup".into(),
            diet: "vegan".into(),
            avoid: "nuts".into(),
            have: "tomatoes, basil".into(),
        };
        let prompt = build_prompt(&request);

        assert!(prompt.contains(r#"Create a recipe for "tomato soup""#));
        assert!(prompt.contains("a vegan diet"));
        assert!(prompt.contains("must avoid: nuts."));
        assert!(prompt.contains("They currently have: tomatoes, basil."));
    }

    #[test]
    fn test_empty_diet_becomes_general() {
        let request = RecipeRequest {
            dish: "pancakes".into(),
            ..Default::default()
        };
        assert!(build_prompt(&request).contains("a general diet"));
    }

    #[test]
    fn test_prompt_pins_output_layout() {
        let prompt = build_prompt(&RecipeRequest::default());
        assert!(prompt.contains("<Recipe Title>"));
        assert!(prompt.contains("Estimated Time:"));
        assert!(prompt.contains("Do not add extra labels or commentary."));
    }
}
