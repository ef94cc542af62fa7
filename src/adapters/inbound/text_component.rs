use serde::Serialize;

/// English strings for the translation keys this command emits.
const EN_US: &[(&str, &str)] = &[
    ("commands.locate.success", "The nearest %s is at %s (%s blocks away)"),
    ("commands.locatebiome.invalid", "There is no biome named %s"),
    ("commands.locatebiome.notFound", "Could not find a %s within reasonable distance"),
    ("command.unknown.command", "Unknown or incomplete command, see below for error"),
    ("command.missing.argument", "Expected a biome identifier"),
    ("argument.id.invalid", "Invalid ID: %s"),
    ("chat.coordinates", "%s, %s, %s"),
    ("chat.coordinates.tooltip", "Click to teleport"),
    ("chat.square_brackets", "[%s]"),
];

/// Chat text component in the game's JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub with: Vec<TextComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_event: Option<ClickEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_event: Option<HoverEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickEvent {
    pub action: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverEvent {
    pub action: String,
    pub value: Box<TextComponent>,
}

impl TextComponent {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn translate(key: impl Into<String>, with: Vec<TextComponent>) -> Self {
        Self {
            translate: Some(key.into()),
            with,
            ..Default::default()
        }
    }

    /// `[inner]`
    pub fn square_brackets(inner: TextComponent) -> Self {
        Self::translate("chat.square_brackets", vec![inner])
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn suggest_command(mut self, command: impl Into<String>) -> Self {
        self.click_event = Some(ClickEvent {
            action: "suggest_command".to_string(),
            value: command.into(),
        });
        self
    }

    pub fn hover_text(mut self, hover: TextComponent) -> Self {
        self.hover_event = Some(HoverEvent {
            action: "show_text".to_string(),
            value: Box::new(hover),
        });
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Render with the built-in English strings. Unknown keys use the fallback, then the key.
    pub fn to_plain(&self) -> String {
        if let Some(text) = &self.text {
            return text.clone();
        }
        let Some(key) = &self.translate else {
            return String::new();
        };
        let template = EN_US
            .iter()
            .find(|(k, _)| *k == key.as_str())
            .map(|(_, v)| *v)
            .or(self.fallback.as_deref())
            .unwrap_or(key.as_str());

        let mut args = self.with.iter().map(TextComponent::to_plain);
        let mut out = String::with_capacity(template.len());
        let mut pieces = template.split("%s");
        if let Some(first) = pieces.next() {
            out.push_str(first);
        }
        for piece in pieces {
            out.push_str(&args.next().unwrap_or_default());
            out.push_str(piece);
        }
        out
    }
}
