use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{Me, ReplyMarkup};

use crate::model::event::InboundEvent;
use crate::model::reply::OutboundReply;
use crate::model::types::HandlerResult;
use crate::router::Router;

pub(crate) fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    Update::filter_message()
        .filter_map(|msg: Message, me: Me| InboundEvent::from_message(&msg, me.username()))
        .endpoint(handle_event)
}

async fn handle_event(
    router: Arc<Router>,
    bot: Bot,
    msg: Message,
    event: InboundEvent,
) -> HandlerResult {
    match router.route(&event) {
        Some(reply) => send_reply(&bot, msg.chat.id, reply).await,
        None => {
            log::debug!("No route for {:?} in chat {}", event, msg.chat.id.0);
            Ok(())
        }
    }
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: OutboundReply) -> HandlerResult {
    let request = bot.send_message(chat_id, reply.text);
    match reply.attachment {
        Some(control) => {
            request.reply_markup(ReplyMarkup::from(&control)).await?;
        }
        None => {
            request.await?;
        }
    }
    Ok(())
}
