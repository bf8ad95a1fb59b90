use crate::config::OutputFormat;
use crate::sheet::BuiltSelector;
use crate::styling::css::CssRule;

pub fn render(selectors: &[BuiltSelector], format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => selectors
            .iter()
            .map(|b| format!("{}: {}\n", b.name, b.selector))
            .collect(),
        OutputFormat::Css => selectors
            .iter()
            .map(|b| {
                CssRule::from_selector(&b.selector)
                    .properties(&b.properties)
                    .render()
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
