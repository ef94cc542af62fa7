use super::text_component::TextComponent;
use crate::application::{LocateBiomeService, LocatedBiome};
use crate::common::{ApplicationError, DomainError};
use crate::domains::biome_search::{ResourceLocation, WorldPosition};
use std::sync::Arc;
use thiserror::Error;

pub const COMMAND_NAME: &str = "locatebiome";
pub const REQUIRED_PERMISSION_LEVEL: u8 = 2;

/// Whoever issued the command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSource {
    pub position: WorldPosition,
    pub permission_level: u8,
}

#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong literal, or the source may not see the command at all.
    #[error("Unknown or incomplete command")]
    UnknownCommand,

    #[error("Expected a biome identifier")]
    MissingArgument,

    #[error("Invalid biome identifier: {0}")]
    InvalidArgument(DomainError),

    #[error(transparent)]
    Locate(#[from] ApplicationError),
}

impl CommandError {
    /// Red chat line describing the failure.
    pub fn to_component(&self) -> TextComponent {
        let component = match self {
            CommandError::UnknownCommand => TextComponent::translate("command.unknown.command", vec![]),
            CommandError::MissingArgument => TextComponent::translate("command.missing.argument", vec![]),
            CommandError::InvalidArgument(DomainError::InvalidResourceLocation { input, .. }) => {
                TextComponent::translate("argument.id.invalid", vec![TextComponent::text(input.clone())])
            }
            CommandError::InvalidArgument(other) => TextComponent::text(other.to_string()),
            CommandError::Locate(ApplicationError::UnknownBiome { identifier }) => TextComponent::translate(
                "commands.locatebiome.invalid",
                vec![TextComponent::text(identifier.clone())],
            ),
            CommandError::Locate(ApplicationError::BiomeNotFound { biome }) => TextComponent::translate(
                "commands.locatebiome.notFound",
                vec![TextComponent::text(biome.clone())],
            ),
            CommandError::Locate(other) => TextComponent::text(other.to_string()),
        };
        component.color("red")
    }
}

/// Result of a successful run: the value the dispatcher returns plus the feedback line.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub result: i32,
    pub feedback: TextComponent,
    pub located: LocatedBiome,
}

/// `/locatebiome <biome>` bound to a locate service.
pub struct LocateBiomeCommand {
    service: Arc<LocateBiomeService>,
}

impl LocateBiomeCommand {
    pub fn new(service: Arc<LocateBiomeService>) -> Self {
        Self { service }
    }

    pub fn can_use(source: &CommandSource) -> bool {
        source.permission_level >= REQUIRED_PERMISSION_LEVEL
    }

    /// Run a command line such as `/locatebiome minecraft:desert`.
    pub fn execute(&self, source: &CommandSource, input: &str) -> Result<CommandOutput, CommandError> {
        if !Self::can_use(source) {
            return Err(CommandError::UnknownCommand);
        }
        let argument = parse_argument(input)?;
        let key: ResourceLocation = argument.parse().map_err(CommandError::InvalidArgument)?;

        let located = self.service.locate(source.position, &key)?;
        Ok(CommandOutput {
            result: located.distance as i32,
            feedback: success_feedback(&located),
            located,
        })
    }

    /// Completions for the biome argument of a partially typed command line.
    pub fn suggestions(&self, source: &CommandSource, input: &str) -> Vec<String> {
        if !Self::can_use(source) {
            return Vec::new();
        }
        let line = input.trim_start().trim_start_matches('/');
        match line.split_once(' ') {
            Some((literal, rest)) if literal == COMMAND_NAME && !rest.contains(' ') => {
                self.service.suggest(rest)
            }
            _ => Vec::new(),
        }
    }
}

fn parse_argument(input: &str) -> Result<&str, CommandError> {
    let line = input.trim().trim_start_matches('/');
    let mut parts = line.split_whitespace();
    if parts.next() != Some(COMMAND_NAME) {
        return Err(CommandError::UnknownCommand);
    }
    let argument = parts.next().ok_or(CommandError::MissingArgument)?;
    if parts.next().is_some() {
        return Err(CommandError::UnknownCommand);
    }
    Ok(argument)
}

/// `The nearest <biome> is at [x, ~, z] (<distance> blocks away)` with a teleport suggestion.
pub fn success_feedback(located: &LocatedBiome) -> TextComponent {
    let LocatedBiome {
        biome,
        position,
        distance,
    } = located;

    let name = TextComponent::translate(biome.translation_key(), vec![])
        .with_fallback(biome.display_name.clone());
    let coordinates = TextComponent::square_brackets(TextComponent::translate(
        "chat.coordinates",
        vec![
            TextComponent::text(position.x.to_string()),
            TextComponent::text("~"),
            TextComponent::text(position.z.to_string()),
        ],
    ))
    .color("green")
    .suggest_command(format!("/tp @s {} ~ {}", position.x, position.z))
    .hover_text(TextComponent::translate("chat.coordinates.tooltip", vec![]));

    TextComponent::translate(
        "commands.locate.success",
        vec![name, coordinates, TextComponent::text(distance.to_string())],
    )
}
