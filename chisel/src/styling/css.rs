use crate::selector::SelectorBuilder;

/// A CSS rule block: one selector and its declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssRule {
    selector: String,
    properties: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            properties: Vec::new(),
        }
    }

    pub fn from_selector(selector: &SelectorBuilder) -> Self {
        Self::new(&selector.stringify())
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.properties.push((name.to_string(), value.to_string()));
        self
    }

    pub fn properties<'a, I>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        properties
            .into_iter()
            .fold(self, |rule, (name, value)| rule.property(name, value))
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn render(&self) -> String {
        let mut css = format!("{} {{\n", self.selector);
        for (name, value) in &self.properties {
            css.push_str(&format!("    {name}: {value};\n"));
        }
        css.push_str("}\n");
        css
    }
}
