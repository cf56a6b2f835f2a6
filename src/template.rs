/// Substitutes `value` for every `{}` in `template`. `{{` and `}}` render as
/// literal braces; any other brace is copied through unchanged.
pub fn render(template: &str, value: &str) -> String {
    let mut rendered = String::with_capacity(template.len() + value.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('}')) => {
                chars.next();
                rendered.push_str(value);
            }
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                rendered.push(c);
            }
            _ => rendered.push(c),
        }
    }

    rendered
}
