pub const SUMMARIZE: &str = include_str!("../data/prompts/summarize.txt");
pub const TRANSLATE: &str = include_str!("../data/prompts/translate.txt");

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!SUMMARIZE.is_empty());
        assert!(!TRANSLATE.is_empty());
    }

    #[test]
    fn test_summarize_has_placeholders() {
        assert!(SUMMARIZE.contains("{{length}}"));
        assert!(SUMMARIZE.contains("{{text}}"));
    }

    #[test]
    fn test_translate_has_placeholders() {
        assert!(TRANSLATE.contains("{{language}}"));
        assert!(TRANSLATE.contains("{{summary}}"));
    }

    #[test]
    fn test_rendered_summarize_prompt_embeds_directive() {
        let prompt = render(
            SUMMARIZE,
            &[("length", "in 2-3 sentences"), ("text", "Some input.")],
        );
        assert!(prompt.starts_with("Summarise the following text in 2-3 sentences:"));
        assert!(prompt.contains("Some input."));
    }
}
