use serde::Deserialize;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::model::commands::BotCommand;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A chat update the router knows how to react to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum InboundEvent {
    TextCommand(BotCommand),
    LocationShare {
        latitude: f64,
        longitude: f64,
        chat_id: ChatId,
    },
}

impl InboundEvent {
    pub(crate) fn from_message(msg: &Message, bot_username: &str) -> Option<Self> {
        let coordinates = msg.location().map(|location| Coordinates {
            latitude: location.latitude,
            longitude: location.longitude,
        });
        Self::parse(msg.chat.id, msg.text(), coordinates, bot_username)
    }

    /// A location payload wins over text; text that is not a known command yields `None`.
    pub(crate) fn parse(
        chat_id: ChatId,
        text: Option<&str>,
        coordinates: Option<Coordinates>,
        bot_username: &str,
    ) -> Option<Self> {
        if let Some(Coordinates {
            latitude,
            longitude,
        }) = coordinates
        {
            return Some(InboundEvent::LocationShare {
                latitude,
                longitude,
                chat_id,
            });
        }

        text.and_then(|text| BotCommand::parse(text, bot_username).ok())
            .map(InboundEvent::TextCommand)
    }
}
