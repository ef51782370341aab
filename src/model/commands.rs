use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub(crate) enum BotCommand {
    #[command(description = "Request a ride")]
    Start,
    #[command(description = "Open the driver app")]
    Driver,
    #[command(description = "Share your current location")]
    Location,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_addressed_commands() {
        assert_eq!(BotCommand::parse("/start", "ridebot").ok(), Some(BotCommand::Start));
        assert_eq!(
            BotCommand::parse("/driver@ridebot", "ridebot").ok(),
            Some(BotCommand::Driver)
        );
        assert_eq!(
            BotCommand::parse("/location", "ridebot").ok(),
            Some(BotCommand::Location)
        );
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(BotCommand::parse("/order", "ridebot").is_err());
        assert!(BotCommand::parse("start", "ridebot").is_err());
        assert!(BotCommand::parse("/help", "ridebot").is_err());
    }
}
