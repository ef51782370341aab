use std::sync::Arc;

use teloxide::prelude::ChatId;

use crate::config::BotConfig;
use crate::model::commands::BotCommand;
use crate::model::event::{Coordinates, InboundEvent};
use crate::model::reply::{InteractiveControl, OutboundReply};
use crate::utils::constants::*;
use crate::utils::distance::{eta_minutes, haversine_km};

pub(crate) type Handler = fn(&BotConfig, &InboundEvent) -> OutboundReply;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Trigger {
    Command(BotCommand),
    LocationShare,
}

impl Trigger {
    fn matches(&self, event: &InboundEvent) -> bool {
        match (self, event) {
            (Trigger::Command(expected), InboundEvent::TextCommand(command)) => expected == command,
            (Trigger::LocationShare, InboundEvent::LocationShare { .. }) => true,
            _ => false,
        }
    }
}

/// Ordered dispatch table. The first matching trigger answers; anything
/// without a match gets no reply.
pub(crate) struct Router {
    config: Arc<BotConfig>,
    routes: Vec<(Trigger, Handler)>,
}

impl Router {
    pub(crate) fn new(config: Arc<BotConfig>) -> Self {
        Router {
            config,
            routes: vec![
                (Trigger::Command(BotCommand::Start), start as Handler),
                (Trigger::Command(BotCommand::Driver), driver as Handler),
                (Trigger::Command(BotCommand::Location), location as Handler),
                (Trigger::LocationShare, acknowledge_location as Handler),
            ],
        }
    }

    pub(crate) fn route(&self, event: &InboundEvent) -> Option<OutboundReply> {
        self.routes
            .iter()
            .find(|(trigger, _)| trigger.matches(event))
            .map(|(_, handler)| handler(&self.config, event))
    }
}

fn start(config: &BotConfig, _event: &InboundEvent) -> OutboundReply {
    OutboundReply::text(START_GREETING).with(InteractiveControl::WebLink {
        label: WEB_APP_BUTTON_LABEL.to_owned(),
        url: config.webapp.url.clone(),
    })
}

fn driver(config: &BotConfig, _event: &InboundEvent) -> OutboundReply {
    OutboundReply::text(DRIVER_GREETING).with(InteractiveControl::WebLink {
        label: WEB_APP_BUTTON_LABEL.to_owned(),
        url: config.webapp.driver_url().clone(),
    })
}

fn location(_config: &BotConfig, _event: &InboundEvent) -> OutboundReply {
    OutboundReply::text(LOCATION_PROMPT).with(InteractiveControl::LocationRequestButton {
        label: LOCATION_BUTTON_LABEL.to_owned(),
    })
}

fn acknowledge_location(config: &BotConfig, event: &InboundEvent) -> OutboundReply {
    let acknowledgment = acknowledge(config, event);
    for record in &acknowledgment.records {
        log::info!("{record}");
    }
    acknowledgment.reply
}

/// Log records and reply produced for a location share.
pub(crate) struct Acknowledgment {
    pub records: Vec<String>,
    pub reply: OutboundReply,
}

pub(crate) fn acknowledge(config: &BotConfig, event: &InboundEvent) -> Acknowledgment {
    let mut records = vec![];

    if let InboundEvent::LocationShare {
        latitude,
        longitude,
        chat_id,
    } = *event
    {
        records.push(location_record(chat_id, latitude, longitude));

        if let Some(dispatch) = &config.dispatch {
            let distance = haversine_km(
                dispatch.origin,
                Coordinates {
                    latitude,
                    longitude,
                },
            );
            records.push(format!(
                "Chat {} is {:.2} km from the dispatch origin, estimated arrival in {} min",
                chat_id.0,
                distance,
                eta_minutes(distance, dispatch.average_speed_kmh)
            ));
        }
    }

    Acknowledgment {
        records,
        reply: OutboundReply::text(LOCATION_ACKNOWLEDGMENT)
            .with(InteractiveControl::DismissKeyboard),
    }
}

/// Coordinates use `{:?}` so whole degrees keep their `.0`.
pub(crate) fn location_record(chat_id: ChatId, latitude: f64, longitude: f64) -> String {
    format!("Received location from {}: {:?}, {:?}", chat_id.0, latitude, longitude)
}
